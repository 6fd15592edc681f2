//! In-plugin routes.
//!
//! Three path shapes are recognised:
//!
//! | Path              | Route                  |
//! |-------------------|------------------------|
//! | `/`               | [`Route::List`]        |
//! | `/country/{code}` | [`Route::Country`]     |
//! | anything else     | [`Route::NotFound`]    |

use std::fmt;

const COUNTRY_PREFIX: &str = "country";

/// A resolved location inside the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Country list with search, region and sort controls.
    #[default]
    List,
    /// Detail page for one country.
    Country { code: String },
    /// Catch-all for paths that match nothing.
    NotFound { path: String },
}

impl Route {
    /// Resolves a path. Codes are upper-cased; a single trailing slash is
    /// tolerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatlas::app::Route;
    ///
    /// assert_eq!(Route::parse("/"), Route::List);
    /// assert_eq!(Route::parse("/country/fra"), Route::Country { code: "FRA".into() });
    /// assert!(matches!(Route::parse("/nope"), Route::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        } else {
            trimmed
        };

        if normalized.is_empty() || normalized == "/" {
            return Self::List;
        }

        let segments: Vec<&str> = normalized
            .strip_prefix('/')
            .unwrap_or(normalized)
            .split('/')
            .collect();

        match segments.as_slice() {
            [COUNTRY_PREFIX, code] if !code.is_empty() => Self::Country {
                code: code.to_ascii_uppercase(),
            },
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    /// The canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Country { code } => format!("/{COUNTRY_PREFIX}/{code}"),
            Self::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_variants() {
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse("  /  "), Route::List);
    }

    #[test]
    fn test_country_route() {
        assert_eq!(
            Route::parse("/country/deu/"),
            Route::Country { code: "DEU".into() }
        );
        assert_eq!(
            Route::parse("country/JPN"),
            Route::Country { code: "JPN".into() }
        );
    }

    #[test]
    fn test_unknown_paths() {
        for path in ["/country", "/country/", "/country/FRA/extra", "/about"] {
            assert!(
                matches!(Route::parse(path), Route::NotFound { .. }),
                "{path} should not resolve"
            );
        }
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::List,
            Route::Country { code: "BRA".into() },
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(Route::parse("/missing").path(), "/missing");
    }
}
