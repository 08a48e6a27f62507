//! Light and dark palettes for the grade screen
//!
//! Provides:
//! - Theme struct with every colour the screen uses
//! - Built-in presets (light, dark, plus a few terminal favourites)
//! - Hex colour parsing for config overrides
//! - RGB blending for the result fade-in

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Primary text (alert body, switch label when dark)
    pub foreground: Color,
    /// Heading, switch label and field borders
    pub accent: Color,
    /// Background inside text fields
    pub input_bg: Color,
    /// Text typed into fields
    pub input_fg: Color,
    /// Border of text fields
    pub input_border: Color,
    /// Placeholder text in empty fields
    pub placeholder: Color,
    /// Assignment list lines
    pub item: Color,
    /// "Add Assignment" button
    pub add_button: Color,
    /// "Calculate Grade" button
    pub calculate_button: Color,
    /// "Clear Assignments" button
    pub clear_button: Color,
    /// Label text on buttons
    pub button_text: Color,
    /// Error alert border
    pub error: Color,
    /// Secondary text (status bar)
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light palette, the screen's default
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(240, 240, 240),      // #f0f0f0
            foreground: Color::Rgb(51, 51, 51),         // #333333
            accent: Color::Rgb(0, 123, 255),            // #007bff
            input_bg: Color::Rgb(255, 255, 255),        // #ffffff
            input_fg: Color::Rgb(0, 0, 0),              // #000000
            input_border: Color::Rgb(0, 123, 255),      // #007bff
            placeholder: Color::Rgb(102, 102, 102),     // #666666
            item: Color::Rgb(51, 51, 51),               // #333333
            add_button: Color::Rgb(98, 0, 238),         // #6200ee
            calculate_button: Color::Rgb(0, 123, 255),  // #007bff
            clear_button: Color::Rgb(255, 59, 48),      // #ff3b30
            button_text: Color::Rgb(255, 255, 255),     // #ffffff
            error: Color::Rgb(255, 59, 48),             // #ff3b30
            dimmed: Color::Rgb(102, 102, 102),          // #666666
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 18),         // #121212
            foreground: Color::Rgb(255, 255, 255),      // #ffffff
            accent: Color::Rgb(255, 255, 255),          // #ffffff
            input_bg: Color::Rgb(51, 51, 51),           // #333333
            input_fg: Color::Rgb(255, 255, 255),        // #ffffff
            input_border: Color::Rgb(187, 134, 252),    // #bb86fc
            placeholder: Color::Rgb(204, 204, 204),     // #cccccc
            item: Color::Rgb(255, 255, 255),            // #ffffff
            add_button: Color::Rgb(187, 134, 252),      // #bb86fc
            calculate_button: Color::Rgb(0, 123, 255),  // #007bff
            clear_button: Color::Rgb(255, 59, 48),      // #ff3b30
            button_text: Color::Rgb(255, 255, 255),     // #ffffff
            error: Color::Rgb(255, 59, 48),             // #ff3b30
            dimmed: Color::Rgb(160, 160, 160),          // #a0a0a0
        }
    }

    /// Catppuccin Latte (light)
    pub fn catppuccin_latte() -> Self {
        Self {
            background: Color::Rgb(239, 241, 245),      // #eff1f5 (base)
            foreground: Color::Rgb(76, 79, 105),        // #4c4f69 (text)
            accent: Color::Rgb(30, 102, 245),           // #1e66f5 (blue)
            input_bg: Color::Rgb(230, 233, 239),        // #e6e9ef (mantle)
            input_fg: Color::Rgb(76, 79, 105),          // #4c4f69 (text)
            input_border: Color::Rgb(30, 102, 245),     // #1e66f5 (blue)
            placeholder: Color::Rgb(140, 143, 161),     // #8c8fa1 (overlay2)
            item: Color::Rgb(76, 79, 105),              // #4c4f69 (text)
            add_button: Color::Rgb(136, 57, 239),       // #8839ef (mauve)
            calculate_button: Color::Rgb(30, 102, 245), // #1e66f5 (blue)
            clear_button: Color::Rgb(210, 15, 57),      // #d20f39 (red)
            button_text: Color::Rgb(239, 241, 245),     // #eff1f5 (base)
            error: Color::Rgb(210, 15, 57),             // #d20f39 (red)
            dimmed: Color::Rgb(108, 111, 133),          // #6c6f85 (subtext0)
        }
    }

    /// Catppuccin Mocha (dark)
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),         // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244),      // #cdd6f4 (text)
            accent: Color::Rgb(137, 180, 250),          // #89b4fa (blue)
            input_bg: Color::Rgb(49, 50, 68),           // #313244 (surface0)
            input_fg: Color::Rgb(205, 214, 244),        // #cdd6f4 (text)
            input_border: Color::Rgb(203, 166, 247),    // #cba6f7 (mauve)
            placeholder: Color::Rgb(147, 153, 178),     // #9399b2 (overlay2)
            item: Color::Rgb(205, 214, 244),            // #cdd6f4 (text)
            add_button: Color::Rgb(203, 166, 247),      // #cba6f7 (mauve)
            calculate_button: Color::Rgb(137, 180, 250), // #89b4fa (blue)
            clear_button: Color::Rgb(243, 139, 168),    // #f38ba8 (red)
            button_text: Color::Rgb(17, 17, 27),        // #11111b (crust)
            error: Color::Rgb(243, 139, 168),           // #f38ba8 (red)
            dimmed: Color::Rgb(166, 173, 200),          // #a6adc8 (subtext0)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            "catppuccin-latte" | "catppuccin_latte" => Some(Self::catppuccin_latte()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa (alpha ignored)
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Format an RGB color as `#rrggbb`; other colors have no hex form
pub fn to_hex(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}

/// Linear blend between two RGB colors, `t` clamped to [0, 1].
/// Non-RGB colors snap to `to` once `t` passes one half.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde helpers for hex colors in config files
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    pub fn serialize_option<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color.and_then(to_hex) {
            Some(hex) => serializer.serialize_str(&hex),
            None => serializer.serialize_none(),
        }
    }
}
