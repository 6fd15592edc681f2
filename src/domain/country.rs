//! Country domain model.
//!
//! [`Country`] mirrors the record shape returned by the REST Countries API
//! (v3.1). Records are taken verbatim: there is no local validation or
//! normalization, and nothing mutates a record once it has been decoded.
//! Optional collections default to empty so a sparse record renders instead
//! of faulting.

use super::collation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder shown when a textual field has no value.
pub const MISSING_VALUE: &str = "N/A";

/// The two name variants the service provides for every country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Short everyday name, used for display, search and sorting.
    pub common: String,
    /// Formal name, shown only on the detail page.
    pub official: String,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A currency used by a country, keyed by ISO code in [`Country::currencies`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A country record as served by the external API.
///
/// The list endpoint returns the reduced field set; the detail endpoint
/// returns the full record, which also fills the detail-only fields
/// (`subregion`, `area`, `borders`, `tld`, `timezones`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    /// Flag emoji, used in place of the image inside the terminal.
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// ISO 3166-1 alpha-3 code.
    #[serde(rename = "cca3")]
    pub code: String,

    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub timezones: Vec<String>,
}

impl Country {
    /// Returns the common name.
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Returns the lexicographic sort key for the common name.
    #[must_use]
    pub fn sort_key(&self) -> String {
        collation::fold(&self.name.common)
    }

    /// Returns the flag image URL, preferring PNG over SVG.
    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        [&self.flags.png, &self.flags.svg]
            .into_iter()
            .find(|url| !url.is_empty())
            .map(String::as_str)
    }

    /// Returns the flag emoji, or an empty string when absent.
    #[must_use]
    pub fn flag_glyph(&self) -> &str {
        self.flag.as_deref().unwrap_or("")
    }

    /// Comma-separated capitals, or [`MISSING_VALUE`].
    #[must_use]
    pub fn capital_label(&self) -> String {
        join_or_missing(self.capital.iter().map(String::as_str))
    }

    /// Region with subregion appended when known, e.g. `Europe / Western Europe`.
    #[must_use]
    pub fn region_label(&self) -> String {
        match (self.region.is_empty(), self.subregion.as_deref()) {
            (true, _) => MISSING_VALUE.to_string(),
            (false, Some(sub)) if !sub.is_empty() => format!("{} / {sub}", self.region),
            (false, _) => self.region.clone(),
        }
    }

    /// Currencies formatted as `Euro (€)`, in code order.
    #[must_use]
    pub fn currency_labels(&self) -> String {
        let labels: Vec<String> = self
            .currencies
            .values()
            .map(|currency| match currency.symbol.as_deref() {
                Some(symbol) if !symbol.is_empty() => format!("{} ({symbol})", currency.name),
                _ => currency.name.clone(),
            })
            .collect();
        join_or_missing(labels.iter().map(String::as_str))
    }

    /// Language names, in code order.
    #[must_use]
    pub fn language_labels(&self) -> String {
        join_or_missing(self.languages.values().map(String::as_str))
    }

    /// Top-level domains, e.g. `.fr`.
    #[must_use]
    pub fn tld_label(&self) -> String {
        join_or_missing(self.tld.iter().map(String::as_str))
    }

    #[must_use]
    pub fn timezone_label(&self) -> String {
        join_or_missing(self.timezones.iter().map(String::as_str))
    }

    /// Area in square kilometres, thousands-separated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn area_label(&self) -> String {
        match self.area {
            Some(area) if area.is_finite() && area >= 0.0 => {
                format!("{} km²", format_population(area.round() as u64))
            }
            _ => MISSING_VALUE.to_string(),
        }
    }
}

fn join_or_missing<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let parts: Vec<&str> = parts.filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        parts.join(", ")
    }
}

/// Formats a count with comma thousands separators.
///
/// # Examples
///
/// ```
/// use zatlas::domain::country::format_population;
///
/// assert_eq!(format_population(67_391_582), "67,391,582");
/// assert_eq!(format_population(999), "999");
/// ```
#[must_use]
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn france() -> Country {
        serde_json::from_value(json!({
            "name": { "common": "France", "official": "French Republic" },
            "flags": { "png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg" },
            "flag": "🇫🇷",
            "population": 67391582,
            "region": "Europe",
            "capital": ["Paris"],
            "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
            "languages": { "fra": "French" },
            "cca3": "FRA"
        }))
        .expect("valid country json")
    }

    #[test]
    fn test_decodes_list_shape() {
        let country = france();
        assert_eq!(country.common_name(), "France");
        assert_eq!(country.code, "FRA");
        assert_eq!(country.capital_label(), "Paris");
        assert_eq!(country.currency_labels(), "Euro (€)");
        assert_eq!(country.language_labels(), "French");
        assert_eq!(country.flag_url(), Some("https://flagcdn.com/w320/fr.png"));
        assert!(country.borders.is_empty());
    }

    #[test]
    fn test_sparse_record_uses_placeholders() {
        let country: Country = serde_json::from_value(json!({
            "name": { "common": "Antarctica", "official": "Antarctica" },
            "population": 1000,
            "region": "Antarctic",
            "cca3": "ATA"
        }))
        .expect("sparse country json");

        assert_eq!(country.capital_label(), MISSING_VALUE);
        assert_eq!(country.currency_labels(), MISSING_VALUE);
        assert_eq!(country.language_labels(), MISSING_VALUE);
        assert_eq!(country.area_label(), MISSING_VALUE);
        assert_eq!(country.flag_url(), None);
        assert_eq!(country.flag_glyph(), "");
    }

    #[test]
    fn test_multiple_capitals_are_joined() {
        let mut country = france();
        country.capital = vec!["Pretoria".into(), "Bloemfontein".into(), "Cape Town".into()];
        assert_eq!(country.capital_label(), "Pretoria, Bloemfontein, Cape Town");
    }

    #[test]
    fn test_region_label_includes_subregion() {
        let mut country = france();
        assert_eq!(country.region_label(), "Europe");
        country.subregion = Some("Western Europe".into());
        assert_eq!(country.region_label(), "Europe / Western Europe");
    }

    #[test]
    fn test_format_population_boundaries() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(100_000), "100,000");
        assert_eq!(format_population(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn test_area_label() {
        let mut country = france();
        country.area = Some(551_695.0);
        assert_eq!(country.area_label(), "551,695 km²");
    }
}
