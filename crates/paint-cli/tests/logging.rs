//! Subscriber setup against an in-memory writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use paint_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use paint_cli::settings::load_settings;
use tracing::level_filters::LevelFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// One subscriber per process, so every check lives in this test.
#[test]
fn paint_crates_log_at_the_configured_level() {
    let captured = Captured::default();
    let writer = captured.clone();
    let config = LogConfig::default()
        .with_level(LevelFilter::DEBUG)
        .with_env_filter(false)
        .with_format(LogFormat::Compact)
        .with_timestamps(false)
        .with_ansi(false);
    init_logging_with_writer(&config, move || writer.clone());

    let dir = tempfile::tempdir().unwrap();
    load_settings(Some(&dir.path().join("absent.toml")));
    let broken = dir.path().join("settings.toml");
    std::fs::write(&broken, "default_mode = [").unwrap();
    load_settings(Some(&broken));
    tracing::info!("outside the paint crates");

    let output = captured.text();
    assert!(output.contains("No settings file found"), "{output}");
    assert!(output.contains("Failed to parse settings file"), "{output}");
    assert!(!output.contains("outside the paint crates"), "{output}");
}
