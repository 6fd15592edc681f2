//! Response decoding for the two endpoints.

use crate::domain::country::Country;
use crate::domain::error::{AtlasError, Result};
use serde::Deserialize;

/// The detail endpoint answers with either a bare object or a one-element
/// array depending on the service version.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<Country>),
    Many(Vec<Country>),
}

const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Decodes the list endpoint response.
///
/// # Errors
///
/// - [`AtlasError::Http`] for non-success statuses
/// - [`AtlasError::Decode`] when the body is not a JSON array of countries
pub fn decode_country_list(status: u16, body: &[u8]) -> Result<Vec<Country>> {
    if !is_success(status) {
        return Err(AtlasError::Http { status });
    }
    let countries: Vec<Country> = serde_json::from_slice(body)?;
    tracing::debug!(count = countries.len(), "decoded country list");
    Ok(countries)
}

/// Decodes the detail endpoint response into a single record.
///
/// # Errors
///
/// - [`AtlasError::NotFound`] for status 404 or an empty array
/// - [`AtlasError::Http`] for other non-success statuses
/// - [`AtlasError::Decode`] when the body matches neither accepted shape
pub fn decode_country_detail(code: &str, status: u16, body: &[u8]) -> Result<Country> {
    if status == 404 {
        return Err(AtlasError::NotFound {
            code: code.to_string(),
        });
    }
    if !is_success(status) {
        return Err(AtlasError::Http { status });
    }

    match serde_json::from_slice::<OneOrMany>(body)
        .map_err(|_| AtlasError::Decode(format!("unexpected detail payload for {code}")))?
    {
        OneOrMany::One(country) => Ok(*country),
        OneOrMany::Many(countries) => {
            if countries.len() > 1 {
                tracing::debug!(count = countries.len(), code = %code, "detail returned several records, using first");
            }
            countries.into_iter().next().ok_or_else(|| AtlasError::NotFound {
                code: code.to_string(),
            })
        }
    }
}
