//! Palette management and ANSI escape sequence generation.
//!
//! A [`Theme`] is a named set of hex colors. Two themes are loaded at start-up,
//! one for dark mode and one for light mode; the theme toggle switches between
//! them without reloading anything.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark, warm tones (default dark)
//! - `catppuccin-latte`: light, soft pastels (default light)
//! - `catppuccin-frappe`: cool dark
//! - `catppuccin-macchiato`: warm dark
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! status_fg = "#89b4fa"
//! accent_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// Default palette for dark mode.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Default palette for light mode.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row and selected border chip.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text: footer hints, field labels, table headings.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Frame of the search and address bars.
    pub input_border: String,

    /// Query match inside country names.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Loading and empty-result messages.
    pub status_fg: String,

    /// Controls line values and the detail page title.
    pub accent_fg: String,

    /// Fetch failures and the not-found page.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for names outside [`BUILTIN_THEMES`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use zatlas::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
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
    /// Returns [`AtlasError::Theme`] if the file cannot be read or its content
    /// is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AtlasError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| AtlasError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Loads a built-in theme, falling back to `fallback` when `name` is
    /// unknown.
    ///
    /// `fallback` must itself be a built-in name.
    #[must_use]
    pub fn named_or(name: Option<&str>, fallback: &str) -> Self {
        name.and_then(|n| {
            let theme = Self::from_name(n);
            if theme.is_none() {
                tracing::warn!(theme_name = %n, fallback = %fallback, "unknown theme, using fallback");
            }
            theme
        })
        .or_else(|| Self::from_name(fallback))
        .unwrap_or_default()
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default dark theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK_THEME)
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).expect("built-in theme parses");
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_dark_and_light_defaults_differ() {
        let dark = Theme::from_name(DEFAULT_DARK_THEME).expect("dark");
        let light = Theme::from_name(DEFAULT_LIGHT_THEME).expect("light");
        assert_ne!(dark.colors.text_normal, light.colors.text_normal);
    }

    #[test]
    fn test_named_or_falls_back() {
        assert_eq!(
            Theme::named_or(Some("nope"), DEFAULT_LIGHT_THEME).name,
            DEFAULT_LIGHT_THEME
        );
        assert_eq!(
            Theme::named_or(Some("catppuccin-frappe"), DEFAULT_DARK_THEME).name,
            "catppuccin-frappe"
        );
        assert_eq!(Theme::named_or(None, DEFAULT_DARK_THEME).name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn test_from_file_round_trip() {
        let original = Theme::from_name("catppuccin-macchiato").expect("macchiato");
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let serialized = toml::to_string(&original).expect("serialize theme");
        file.write_all(serialized.as_bytes()).expect("write theme");

        let loaded = Theme::from_file(file.path()).expect("load theme");
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = Theme::from_file("/definitely/not/here.toml");
        assert!(matches!(missing, Err(AtlasError::Theme(_))));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"name = \"broken\"\n").expect("write");
        assert!(matches!(Theme::from_file(file.path()), Err(AtlasError::Theme(_))));
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bad"), "\u{1b}[38;2;255;255;255m");
    }
}
