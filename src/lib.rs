//! zatlas: a Zellij plugin for browsing countries from the REST Countries API.
//!
//! The plugin provides:
//! - A searchable list of every country with region filtering and sorting
//! - Detail pages with border countries you can jump between
//! - Path-based routing with back history, an address bar and a not-found page
//! - Dark and light palettes toggled at runtime

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Key mapping and event handling                   │
//! │  - Routing, history, page lifecycles                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────┐                   ┌───────────────┐
//! │ UI Layer      │                   │ API Layer     │
//! │ (ui/)         │                   │ (api/)        │
//! │ - Rendering   │                   │ - Endpoints   │
//! │ - Theming     │                   │ - Requests    │
//! │ - Components  │                   │ - Decoding    │
//! └───────────────┘                   └───────────────┘
//!         │                                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Country model, collation, errors (domain/)       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zatlas.wasm" {
//!         start_path "/country/JPN"
//!         sort "pop-desc"
//!         dark_theme "catppuccin-macchiato"
//!         light_theme "catppuccin-latte"
//!         initial_theme "light"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zatlas::{handle_event, initialize, Config, Event, Route};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert_eq!(actions.len(), 1);
//!
//! handle_event(&mut state, &Event::Navigate("/country/fra".into()))?;
//! assert_eq!(state.route, Route::Country { code: "FRA".into() });
//! # Ok::<(), zatlas::AtlasError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{Endpoints, Request};
pub use app::{
    handle_event, map_key, Action, AppState, Event, InputMode, Route, SearchFocus, SortMode,
    ThemeMode,
};
pub use domain::{AtlasError, Country, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;

use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from Zellij's configuration map.
///
/// Every key is optional. Unparsable values are logged and replaced by the
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service root. Default: `https://restcountries.com/v3.1`.
    pub api_base_url: String,

    /// Route opened on load. Default: `/`.
    pub start_path: String,

    /// Initial list ordering: `name`, `pop-desc` or `pop-asc`.
    pub sort: SortMode,

    /// Built-in palette used in dark mode.
    pub dark_theme: Option<String>,

    /// Built-in palette used in light mode.
    pub light_theme: Option<String>,

    /// Path to a TOML palette replacing the dark palette. Takes precedence
    /// over `dark_theme`.
    pub theme_file: Option<String>,

    /// Mode active on load: `dark` or `light`.
    pub initial_theme: ThemeMode,

    /// Filter directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
            start_path: "/".to_string(),
            sort: SortMode::default(),
            dark_theme: None,
            light_theme: None,
            theme_file: None,
            initial_theme: ThemeMode::default(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the map Zellij hands to `load`.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zatlas::{Config, SortMode, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sort".to_string(), "pop-desc".to_string());
    /// map.insert("initial_theme".to_string(), "sepia".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.sort, SortMode::PopulationDesc);
    /// assert_eq!(config.initial_theme, ThemeMode::Dark);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            api_base_url: non_empty("api_base_url").unwrap_or(defaults.api_base_url),
            start_path: non_empty("start_path").unwrap_or(defaults.start_path),
            sort: parse_or(config, "sort", defaults.sort),
            dark_theme: non_empty("dark_theme"),
            light_theme: non_empty("light_theme"),
            theme_file: non_empty("theme_file"),
            initial_theme: parse_or(config, "initial_theme", defaults.initial_theme),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Parses one configuration value.
///
/// # Errors
///
/// Returns [`AtlasError::Config`] naming the key when `raw` does not parse.
pub fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|e| AtlasError::Config(format!("{key}: {e}")))
}

fn parse_or<T>(config: &BTreeMap<String, String>, key: &str, default: T) -> T
where
    T: FromStr<Err = String>,
{
    match config.get(key).map(|raw| parse_value::<T>(key, raw)) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "invalid configuration value, using default");
            default
        }
        None => default,
    }
}

/// Builds the initial application state from configuration.
///
/// A `theme_file` that cannot be loaded falls back to the named dark palette.
/// The start route is parsed like any address bar entry, so an unknown path
/// opens the not-found page.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", start_path = %config.start_path).entered();

    let named_dark = || Theme::named_or(config.dark_theme.as_deref(), DEFAULT_DARK_THEME);
    let dark_theme = config.theme_file.as_deref().map_or_else(named_dark, |file| {
        Theme::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %file, error = %e, "failed to load theme file");
            named_dark()
        })
    });
    let light_theme = Theme::named_or(config.light_theme.as_deref(), DEFAULT_LIGHT_THEME);

    AppState::new(
        Endpoints::new(config.api_base_url.as_str()),
        dark_theme,
        light_theme,
        config.initial_theme,
        config.sort,
        Route::parse(&config.start_path),
    )
}
