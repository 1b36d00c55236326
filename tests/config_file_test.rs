//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;

use ocean_tictactoe::{AppConfig, Palette};
use ratatui::style::Color;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.theme().palette().unwrap(), Palette::default());
}

#[test]
fn test_partial_file_overrides_some_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "mouse = false\nlog_file = \"game.log\"\n\n[theme]\nprimary = \"#000080\""
    )
    .unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert!(!*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));

    let palette = config.theme().palette().unwrap();
    assert_eq!(palette.primary, Color::Rgb(0, 0, 0x80));
    assert_eq!(palette.error, Palette::default().error);
}

#[test]
fn test_invalid_colour_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme]\nsecondary = \"not-a-colour\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("theme.secondary"), "{}", err);
}

#[test]
fn test_effective_config_round_trips_through_toml() {
    let config = AppConfig::default().with_mouse(false);
    let text = config.to_toml().unwrap();
    assert!(text.contains("mouse = false"));
    assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
}
