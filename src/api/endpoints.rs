//! URL construction for the REST Countries service.

use crate::domain::error::{AtlasError, Result};

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested by the list endpoint. The detail endpoint returns the
/// full record.
pub const LIST_FIELDS: &str =
    "name,flags,flag,population,region,capital,currencies,languages,cca3";

/// Endpoint builder bound to a service root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    /// Creates an endpoint builder. A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for the full collection with the reduced field set.
    #[must_use]
    pub fn all_countries_url(&self) -> String {
        format!("{}/all?fields={LIST_FIELDS}", self.base_url)
    }

    /// URL for a single country by code.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::NotFound`] when the code is empty or contains
    /// anything other than ASCII letters and digits. Such codes can never
    /// match a record and would otherwise be spliced into the URL path.
    pub fn country_url(&self, code: &str) -> Result<String> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AtlasError::NotFound {
                code: code.to_string(),
            });
        }
        Ok(format!("{}/alpha/{code}", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_countries_url_selects_fields() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.all_countries_url(),
            "https://restcountries.com/v3.1/all?fields=name,flags,flag,population,region,capital,currencies,languages,cca3"
        );
    }

    #[test]
    fn test_country_url() {
        let endpoints = Endpoints::new("http://localhost:8080/v3.1/");
        assert_eq!(
            endpoints.country_url("FRA").expect("valid code"),
            "http://localhost:8080/v3.1/alpha/FRA"
        );
    }

    #[test]
    fn test_country_url_rejects_path_characters() {
        let endpoints = Endpoints::default();
        assert!(matches!(
            endpoints.country_url("../all"),
            Err(AtlasError::NotFound { .. })
        ));
        assert!(endpoints.country_url("").is_err());
    }
}
