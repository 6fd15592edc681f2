//! Request descriptors and the context tags that route results back.
//!
//! Zellij echoes the `context` map passed to `web_request` alongside the
//! `WebRequestResult` event. Each [`Request`] encodes itself into that map so
//! the plugin can tell which fetch a result belongs to.

use super::endpoints::Endpoints;
use crate::domain::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const KIND_KEY: &str = "zatlas_request";
const CODE_KEY: &str = "code";
const KIND_ALL: &str = "all";
const KIND_DETAIL: &str = "detail";

/// A read-only fetch against the country service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Every country with the reduced field set.
    AllCountries,
    /// One country by its 3-letter code.
    CountryDetail {
        code: String,
    },
}

impl Request {
    /// Resolves the request URL.
    ///
    /// # Errors
    ///
    /// Propagates [`Endpoints::country_url`] failures for malformed codes.
    pub fn url(&self, endpoints: &Endpoints) -> Result<String> {
        match self {
            Self::AllCountries => Ok(endpoints.all_countries_url()),
            Self::CountryDetail { code } => endpoints.country_url(code),
        }
    }

    /// Encodes the request as a result-routing context.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            Self::AllCountries => {
                context.insert(KIND_KEY.to_string(), KIND_ALL.to_string());
            }
            Self::CountryDetail { code } => {
                context.insert(KIND_KEY.to_string(), KIND_DETAIL.to_string());
                context.insert(CODE_KEY.to_string(), code.clone());
            }
        }
        context
    }

    /// Decodes a context produced by [`Request::to_context`].
    ///
    /// Returns `None` for contexts that did not originate here.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(KIND_KEY).map(String::as_str) {
            Some(KIND_ALL) => Some(Self::AllCountries),
            Some(KIND_DETAIL) => context
                .get(CODE_KEY)
                .map(|code| Self::CountryDetail { code: code.clone() }),
            _ => None,
        }
    }
}
