//! Theme management and ANSI escape sequence generation.
//!
//! Themes are either built in (Catppuccin variants) or loaded from TOML files.
//! Colors are hex strings turned into 24-bit ANSI escapes at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! card_border = "#45475a"
//! card_border_active = "#cba6f7"
//! author_fg = "#89b4fa"
//! star_fg = "#f9e2af"
//! indicator_active = "#f5c2e7"
//! indicator_inactive = "#6c7086"
//! button_fg = "#fab387"
//! progress_fg = "#a6e3a1"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use testimonial_carousel::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let star = format!("{}★{}", Theme::fg(&theme.colors.star_fg), Theme::reset());
//! assert!(star.starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{CarouselError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Testimonial text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Header and footer separator color.
    pub border: String,
    /// Card frame color.
    pub card_border: String,
    /// Frame color of the card at the current index.
    pub card_border_active: String,

    /// Author name and avatar color.
    pub author_fg: String,
    /// Rating star color.
    pub star_fg: String,

    /// Indicator dot of the current item.
    pub indicator_active: String,
    /// Indicator dots of the other items.
    pub indicator_inactive: String,
    /// Navigation button color.
    pub button_fg: String,
    /// Autoplay progress bar color.
    pub progress_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`. Returns `None` for any
    /// other name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Theme`] if the file cannot be read or does not
    /// describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CarouselError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CarouselError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Plain grayscale palette, used if the default theme cannot be parsed.
    fn monochrome() -> Self {
        let light = || "#e0e0e0".to_string();
        let gray = || "#808080".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: light(),
                header_bg: None,
                text_normal: light(),
                text_dim: gray(),
                border: gray(),
                card_border: gray(),
                card_border_active: light(),
                author_fg: light(),
                star_fg: light(),
                indicator_active: light(),
                indicator_inactive: gray(),
                button_fg: light(),
                progress_fg: light(),
                empty_state_fg: light(),
            },
        }
    }

    /// Converts a hex color to RGB, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI italic escape sequence (`\x1b[3m`).
    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| {
            tracing::warn!("built-in theme failed to parse, using monochrome");
            Self::monochrome()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "catppuccin-mocha");
    }

    #[test]
    fn hex_colors_become_escapes() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn theme_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = toml::to_string(&Theme::default()).unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, Theme::default());
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n")
            .unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CarouselError::Theme(_)));
        assert!(Theme::from_file("/nonexistent/theme.toml").is_err());
    }
}
