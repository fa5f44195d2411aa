//! Paint mixer CLI.

use clap::{ColorChoice, Parser};
use paint_cli::logging::{LogConfig, LogFormat, init_logging};
use paint_cli::settings::load_settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_clear_history, run_closest, run_forget, run_history, run_mix, run_palette, run_pick,
    run_recipe, run_settings, run_suggest, run_swatches, run_template, run_templates,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = load_settings(cli.config.as_deref());
    let result = match &cli.command {
        Command::Swatches => run_swatches(),
        Command::Mix(args) => run_mix(args, &settings),
        Command::Suggest(args) => run_suggest(args, &settings),
        Command::Closest(args) => run_closest(args),
        Command::Pick(args) => run_pick(args, &settings),
        Command::Templates => run_templates(),
        Command::Template(args) => run_template(args, &settings),
        Command::History => run_history(&settings),
        Command::Palette => run_palette(&settings),
        Command::Recipe(args) => run_recipe(args, &settings),
        Command::Forget(args) => run_forget(args, &settings),
        Command::ClearHistory => run_clear_history(&settings),
        Command::Settings(args) => run_settings(args, &settings, cli.config.as_deref()),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
