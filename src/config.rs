use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::{self, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Heading shown at the top of the screen
    pub title: String,
    pub title_placeholder: String,
    pub grade_placeholder: String,
    /// Initial state of the dark mode switch
    pub dark_mode: bool,
    /// Preset used while dark mode is off
    pub light_theme: String,
    /// Preset used while dark mode is on
    pub dark_theme: String,
    /// Accent override as hex, applied to both presets
    #[serde(
        deserialize_with = "theme::serde_color::deserialize_option",
        serialize_with = "theme::serde_color::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Fade-in duration of the course grade, in milliseconds
    pub fade_ms: u64,
    /// Decimal places in the course grade message
    pub decimals: usize,
    /// Only accept number characters in the grade field
    pub numeric_grade_input: bool,
    /// Ask before quitting when assignments have been entered
    pub confirm_quit: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: "Assignment Grade Calculator".to_string(),
            title_placeholder: "Assignment Name".to_string(),
            grade_placeholder: "Grade".to_string(),
            dark_mode: false,
            light_theme: "light".to_string(),
            dark_theme: "dark".to_string(),
            accent: None,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fade_ms: 1000,
            decimals: 2,
            numeric_grade_input: true,
            confirm_quit: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Default config location, `~/.config/gradecalc/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradecalc")
            .join("config.toml")
    }

    /// Effective configuration rendered back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Palette for the current state of the dark mode switch.
    ///
    /// Unknown preset names fall back to the built-in light/dark palette.
    pub fn resolve_theme(&self, dark_mode: bool) -> Theme {
        let (name, fallback): (&str, fn() -> Theme) = if dark_mode {
            (&self.appearance.dark_theme, Theme::dark)
        } else {
            (&self.appearance.light_theme, Theme::light)
        };

        let mut theme = Theme::from_preset(name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme preset {:?}, using default", name);
            fallback()
        });

        if let Some(accent) = self.appearance.accent {
            theme.accent = accent;
        }
        theme
    }
}
