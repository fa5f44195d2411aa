//! CLI argument definitions for the paint mixer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use paint_model::WeightMode;

#[derive(Parser)]
#[command(
    name = "paint-mixer",
    version,
    about = "Acrylic paint mixing calculator",
    long_about = "Mix base paints by weight, suggest starting mixes for a target color,\n\
                  split batch volumes and keep a history of recipes.\n\n\
                  Mixing is a linear average of RGB channels, not a pigment model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the base paints.
    Swatches,

    /// Mix paints and show the resulting color.
    Mix(MixArgs),

    /// Suggest a starting mix for a target color.
    Suggest(SuggestArgs),

    /// Find the base paint closest to a color.
    Closest(ClosestArgs),

    /// Pick a target color from a photo.
    Pick(PickArgs),

    /// List the built-in recipe templates.
    Templates,

    /// Show one recipe template as a mix.
    Template(TemplateArgs),

    /// Show recently saved mixes (newest first, last 20).
    History,

    /// Show pinned palette recipes.
    Palette,

    /// Show a saved recipe by id or id prefix.
    Recipe(RecipeArgs),

    /// Remove a recipe from the palette.
    Forget(RecipeArgs),

    /// Remove every history entry.
    ClearHistory,

    /// Show or change saved settings.
    Settings(SettingsArgs),
}

#[derive(Parser)]
pub struct MixArgs {
    /// Paints as NAME or NAME:WEIGHT (e.g. red:2 white).
    #[arg(value_name = "PAINT", required = true)]
    pub components: Vec<String>,

    /// Weight semantics for paints given without a weight.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<WeightModeArg>,

    #[command(flatten)]
    pub volume: VolumeArgs,

    /// Save the mix to history under this name.
    #[arg(long = "save", value_name = "NAME")]
    pub save: Option<String>,

    /// Also pin the saved mix to the palette.
    #[arg(long = "palette", requires = "save")]
    pub palette: bool,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Target color as #rrggbb (unreadable input falls back to mid-gray).
    #[arg(value_name = "HEX")]
    pub target: String,

    #[command(flatten)]
    pub volume: VolumeArgs,
}

#[derive(Parser)]
pub struct ClosestArgs {
    /// Color as #rrggbb.
    #[arg(value_name = "HEX")]
    pub target: String,
}

#[derive(Parser)]
pub struct PickArgs {
    /// Photo to sample (JPG, PNG, WEBP).
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Horizontal position on the fitted 600x400 preview.
    #[arg(long = "x")]
    pub x: u32,

    /// Vertical position on the fitted 600x400 preview.
    #[arg(long = "y")]
    pub y: u32,

    /// Run the mix suggestion on the picked color.
    #[arg(long = "suggest")]
    pub suggest: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Template name (see `templates`).
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub volume: VolumeArgs,
}

#[derive(Parser)]
pub struct RecipeArgs {
    /// Recipe id or unique prefix.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser)]
pub struct SettingsArgs {
    /// Folder for recipe history and palette files.
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Default weight semantics for `mix`.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<WeightModeArg>,

    /// Default batch volume in ml.
    #[arg(long = "volume", value_name = "ML")]
    pub volume: Option<f64>,
}

#[derive(Parser)]
pub struct VolumeArgs {
    /// Batch volume in ml to split across the paints.
    #[arg(long = "volume", value_name = "ML")]
    pub volume: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WeightModeArg {
    /// Amounts from 0.5 to 10, each paint starting at 1.
    Amount,
    /// Percentages, the first paint starting at 100 and the rest at 0.
    Percent,
}

impl From<WeightModeArg> for WeightMode {
    fn from(arg: WeightModeArg) -> Self {
        match arg {
            WeightModeArg::Amount => WeightMode::Amount,
            WeightModeArg::Percent => WeightMode::Percent,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
