//! Colour theme: configurable hex palette resolved to terminal colours.

use crate::config::ConfigError;
use derive_getters::Getters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Ocean Professional palette, as written in the config file.
///
/// Each entry is a `#RRGGBB` string (any colour name ratatui understands
/// is accepted too).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// X marks, turn indicator, keyboard cursor.
    primary: String,
    /// Winning highlight and winner indicator.
    secondary: String,
    /// O marks.
    error: String,
    /// Screen background.
    background: String,
    /// Cell and button background.
    surface: String,
    /// Body text.
    text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#2563EB".to_string(),
            secondary: "#F59E0B".to_string(),
            error: "#EF4444".to_string(),
            background: "#F9FAFB".to_string(),
            surface: "#FFFFFF".to_string(),
            text: "#111827".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Resolves every entry into a terminal colour.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first entry that does not parse.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            primary: parse_color("primary", &self.primary)?,
            secondary: parse_color("secondary", &self.secondary)?,
            error: parse_color("error", &self.error)?,
            background: parse_color("background", &self.background)?,
            surface: parse_color("surface", &self.surface)?,
            text: parse_color("text", &self.text)?,
        })
    }
}

/// Errors point at the palette entry that failed, not at this helper.
#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    match Color::from_str(value.trim()) {
        Ok(color) => Ok(color),
        Err(e) => Err(ConfigError::new(format!(
            "Invalid colour for theme.{}: {:?} ({})",
            key, value, e
        ))),
    }
}

/// Resolved colours used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X marks, turn indicator, keyboard cursor.
    pub primary: Color,
    /// Winning highlight and winner indicator.
    pub secondary: Color,
    /// O marks.
    pub error: Color,
    /// Screen background.
    pub background: Color,
    /// Cell and button background.
    pub surface: Color,
    /// Body text.
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x25, 0x63, 0xEB),
            secondary: Color::Rgb(0xF5, 0x9E, 0x0B),
            error: Color::Rgb(0xEF, 0x44, 0x44),
            background: Color::Rgb(0xF9, 0xFA, 0xFB),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x11, 0x18, 0x27),
        }
    }
}
