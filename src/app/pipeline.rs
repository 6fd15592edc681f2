//! Filter/sort projection over the fetched country set.
//!
//! Everything here is pure and synchronous. The state layer calls
//! [`project`] whenever the data, query, region or sort mode changes, and
//! [`derive_regions`] whenever the data changes.
//!
//! # Pipeline
//!
//! 1. Start from the full fetched set.
//! 2. Keep names containing the query, case-insensitively. Whitespace in the
//!    query is part of what must match.
//! 3. Keep exact region matches when a region is selected.
//! 4. Order by the selected [`SortMode`]; ties fall back to name order.

use super::modes::SortMode;
use crate::domain::collation;
use crate::domain::Country;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Returns `true` when `name` contains `query` ignoring case.
///
/// `query` is expected to be already lowercased.
fn name_matches(name: &str, lowered_query: &str) -> bool {
    name.to_lowercase().contains(lowered_query)
}

/// Total order for the given mode.
#[must_use]
pub fn compare(a: &Country, b: &Country, sort: SortMode) -> Ordering {
    let by_name = || collation::compare_names(&a.name.common, &b.name.common);
    match sort {
        SortMode::NameAsc => by_name(),
        SortMode::PopulationDesc => b.population.cmp(&a.population).then_with(by_name),
        SortMode::PopulationAsc => a.population.cmp(&b.population).then_with(by_name),
    }
}

/// Sorts `countries` in place for the given mode.
///
/// Name order folds each name once up front instead of on every comparison;
/// the result is the same as sorting with [`compare`].
pub fn sort_countries(countries: &mut [Country], sort: SortMode) {
    match sort {
        SortMode::NameAsc => {
            countries.sort_by_cached_key(|country| (country.sort_key(), country.name.common.clone()));
        }
        SortMode::PopulationDesc | SortMode::PopulationAsc => {
            countries.sort_by(|a, b| compare(a, b, sort));
        }
    }
}

/// Computes the displayed list from the fetched set.
///
/// The input is never modified; the result holds clones of matching records.
#[must_use]
pub fn project(
    countries: &[Country],
    query: &str,
    region: Option<&str>,
    sort: SortMode,
) -> Vec<Country> {
    let _span = tracing::debug_span!(
        "project_countries",
        total = countries.len(),
        query_len = query.len(),
        region = ?region,
        sort = %sort
    )
    .entered();

    let lowered_query = query.to_lowercase();

    let mut visible: Vec<Country> = countries
        .iter()
        .filter(|country| {
            lowered_query.is_empty() || name_matches(&country.name.common, &lowered_query)
        })
        .filter(|country| region.map_or(true, |wanted| country.region == wanted))
        .cloned()
        .collect();

    sort_countries(&mut visible, sort);

    tracing::debug!(visible = visible.len(), "projection computed");
    visible
}

/// Distinct non-empty regions, ascending.
#[must_use]
pub fn derive_regions(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|country| country.region.as_str())
        .filter(|region| !region.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Character ranges (start inclusive, end exclusive) where `query` occurs in
/// `text`, case-insensitively.
///
/// Returns no ranges when lowercasing changes the character count of `text`,
/// since indices would no longer line up with the displayed string.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::country::{CountryName, Flags};
    use std::collections::BTreeMap;

    fn country(name: &str, region: &str, population: u64) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
            },
            flags: Flags::default(),
            flag: None,
            population,
            region: region.to_string(),
            capital: vec![],
            currencies: BTreeMap::new(),
            languages: BTreeMap::new(),
            code: name.chars().take(3).collect::<String>().to_uppercase(),
            subregion: None,
            area: None,
            borders: vec![],
            tld: vec![],
            timezones: vec![],
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Germany", "Europe", 83_240_525),
            country("France", "Europe", 67_391_582),
            country("Japan", "Asia", 125_836_021),
            country("San Francisco Republic", "Americas", 800_000),
            country("Åland Islands", "Europe", 29_458),
            country("Brazil", "Americas", 212_559_409),
        ]
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(Country::common_name).collect()
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let result = project(&sample(), "FRA", None, SortMode::NameAsc);
        assert_eq!(names(&result), vec!["France", "San Francisco Republic"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(project(&sample(), "", None, SortMode::NameAsc).len(), 6);
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let data = vec![
            country("Equatorial Guinea", "Africa", 1_402_985),
            country("Guinea-Bissau", "Africa", 1_967_998),
            country("Papua New Guinea", "Oceania", 8_947_027),
            country("Guinea", "Africa", 13_132_792),
        ];

        assert!(project(&data, "guinea ", None, SortMode::NameAsc).is_empty());
        assert_eq!(
            names(&project(&data, " guinea", None, SortMode::NameAsc)),
            vec!["Equatorial Guinea", "Papua New Guinea"]
        );
        assert_eq!(
            names(&project(&data, "new ", None, SortMode::NameAsc)),
            vec!["Papua New Guinea"]
        );
        for country in project(&data, "a ", None, SortMode::NameAsc) {
            assert!(country.common_name().to_lowercase().contains("a "));
        }
    }

    #[test]
    fn test_region_is_exact_match() {
        let result = project(&sample(), "", Some("Europe"), SortMode::NameAsc);
        assert_eq!(names(&result), vec!["Åland Islands", "France", "Germany"]);
        assert!(project(&sample(), "", Some("europe"), SortMode::NameAsc).is_empty());
    }

    #[test]
    fn test_population_orders() {
        let desc = project(&sample(), "", None, SortMode::PopulationDesc);
        assert!(desc.windows(2).all(|w| w[0].population >= w[1].population));
        assert_eq!(desc[0].common_name(), "Brazil");

        let asc = project(&sample(), "", None, SortMode::PopulationAsc);
        assert!(asc.windows(2).all(|w| w[0].population <= w[1].population));
        assert_eq!(asc[0].common_name(), "Åland Islands");
    }

    #[test]
    fn test_population_ties_fall_back_to_name() {
        let data = vec![
            country("Niue", "Oceania", 1_470),
            country("Cocos Islands", "Oceania", 1_470),
        ];
        let result = project(&data, "", None, SortMode::PopulationDesc);
        assert_eq!(names(&result), vec!["Cocos Islands", "Niue"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        for sort in SortMode::ALL {
            let mut once = sample();
            sort_countries(&mut once, sort);
            let mut twice = once.clone();
            sort_countries(&mut twice, sort);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_name_sort_matches_compare() {
        let mut data = sample();
        data.push(country("Albania", "Europe", 2_837_743));
        data.push(country("Côte d'Ivoire", "Africa", 26_378_275));
        data.push(country("Costa Rica", "Americas", 5_094_114));

        let mut sorted = data.clone();
        sort_countries(&mut sorted, SortMode::NameAsc);
        let mut expected = data;
        expected.sort_by(|a, b| compare(a, b, SortMode::NameAsc));

        assert_eq!(names(&sorted), names(&expected));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let data = sample();
        let before = data.clone();
        let _ = project(&data, "a", Some("Europe"), SortMode::PopulationAsc);
        assert_eq!(data, before);
    }

    #[test]
    fn test_regions_are_distinct_sorted_and_non_empty() {
        let mut data = sample();
        data.push(country("Nowhere", "", 0));
        assert_eq!(derive_regions(&data), vec!["Americas", "Asia", "Europe"]);
    }

    #[test]
    fn test_highlight_ranges() {
        assert_eq!(highlight_ranges("San Francisco", "fra"), vec![(4, 7)]);
        assert_eq!(highlight_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert!(highlight_ranges("France", "").is_empty());
        assert!(highlight_ranges("France", "xyz").is_empty());
        assert_eq!(highlight_ranges("Papua New Guinea", " new "), vec![(5, 10)]);
        assert!(highlight_ranges("Guinea", "guinea ").is_empty());
    }

    #[test]
    fn test_highlight_ranges_use_char_indices() {
        assert_eq!(highlight_ranges("Åland Islands", "land"), vec![(1, 5), (8, 12)]);
    }
}
