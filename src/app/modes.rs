//! Input, sort and theme mode types for the application.
//!
//! These enums determine which keybindings are active, how the list is
//! ordered, and which palette is used for rendering.
//!
//! # Example
//!
//! ```rust
//! use zatlas::app::modes::{InputMode, SearchFocus, SortMode, ThemeMode};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_eq!(SortMode::default().next(), SortMode::PopulationDesc);
//! assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Focus state within search mode.
///
/// Determines whether the query is being typed or the filtered results are
/// being navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search on the list page, with focus state.
    Search(SearchFocus),

    /// Typing a path into the address bar.
    Address,
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Common name, ascending, accent-insensitive.
    #[default]
    #[serde(rename = "name")]
    NameAsc,
    /// Largest population first.
    #[serde(rename = "pop-desc")]
    PopulationDesc,
    /// Smallest population first.
    #[serde(rename = "pop-asc")]
    PopulationAsc,
}

impl SortMode {
    pub const ALL: [Self; 3] = [Self::NameAsc, Self::PopulationDesc, Self::PopulationAsc];

    /// The next mode in selector order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NameAsc => Self::PopulationDesc,
            Self::PopulationDesc => Self::PopulationAsc,
            Self::PopulationAsc => Self::NameAsc,
        }
    }

    /// Stable key used in configuration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NameAsc => "name",
            Self::PopulationDesc => "pop-desc",
            Self::PopulationAsc => "pop-asc",
        }
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A-Z)",
            Self::PopulationDesc => "Population (high-low)",
            Self::PopulationAsc => "Population (low-high)",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort mode '{s}', expected name, pop-desc or pop-asc"))
    }
}

/// Presentation flag selecting the dark or light palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme mode '{other}', expected dark or light")),
        }
    }
}
