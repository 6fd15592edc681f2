//! Per-page state: the country list and the country detail.
//!
//! Each page owns its transient UI state and its fetch lifecycle. A fetch is
//! a single attempt: mounting sets the loading flag and yields the request to
//! issue, and applying the response always clears the loading flag.

use super::modes::SortMode;
use super::pipeline;
use crate::api::{self, Request};
use crate::domain::Country;

/// Shown when the list fetch fails for any reason.
pub const LIST_ERROR_MESSAGE: &str = "Unable to load countries.";

/// Shown when the detail fetch fails for a reason other than a missing record.
pub const DETAIL_ERROR_MESSAGE: &str = "Unable to load country.";

/// Shown when the requested code does not exist.
pub const DETAIL_NOT_FOUND_MESSAGE: &str = "Country not found.";

/// Country list page state.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Last successfully fetched set, sorted by name.
    pub countries: Vec<Country>,

    /// Distinct regions present in `countries`, ascending.
    pub regions: Vec<String>,

    /// Current search query.
    pub query: String,

    /// Selected region, `None` meaning any.
    pub region: Option<String>,

    pub sort: SortMode,

    /// Filter+sort projection of `countries`. Recomputed by [`ListPage::refresh`].
    pub visible: Vec<Country>,

    /// Zero-based index of the selected row within `visible`.
    pub selected_index: usize,

    pub loading: bool,
    pub error: Option<String>,
}

impl ListPage {
    #[must_use]
    pub fn new(sort: SortMode) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Starts the list fetch.
    ///
    /// Previously fetched data stays in place until a new response arrives.
    pub fn mount(&mut self) -> Request {
        self.loading = true;
        self.error = None;
        Request::AllCountries
    }

    /// Applies the list endpoint response.
    pub fn apply_response(&mut self, status: u16, body: &[u8]) {
        self.loading = false;

        match api::decode_country_list(status, body) {
            Ok(mut countries) => {
                pipeline::sort_countries(&mut countries, SortMode::NameAsc);
                self.regions = pipeline::derive_regions(&countries);
                self.countries = countries;
                self.error = None;

                if let Some(region) = &self.region {
                    if !self.regions.contains(region) {
                        tracing::debug!(region = %region, "selected region no longer present, resetting");
                        self.region = None;
                    }
                }

                tracing::debug!(
                    countries = self.countries.len(),
                    regions = self.regions.len(),
                    "country list loaded"
                );
                self.refresh();
            }
            Err(e) => {
                tracing::warn!(error = %e, status = status, "country list fetch failed");
                self.error = Some(LIST_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Recomputes the visible projection and clamps the selection.
    pub fn refresh(&mut self) {
        self.visible =
            pipeline::project(&self.countries, &self.query, self.region.as_deref(), self.sort);

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }
    }

    /// Moves the region selector one step, wrapping through "any".
    ///
    /// Order is any → first region → … → last region → any.
    pub fn cycle_region(&mut self, forward: bool) {
        if self.regions.is_empty() {
            self.region = None;
            return;
        }

        let position = self
            .region
            .as_ref()
            .and_then(|current| self.regions.iter().position(|r| r == current));

        let last = self.regions.len() - 1;
        let next = match (position, forward) {
            (None, true) => Some(0),
            (None, false) => Some(last),
            (Some(i), true) if i == last => None,
            (Some(i), true) => Some(i + 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };

        self.region = next.map(|i| self.regions[i].clone());
        self.selected_index = 0;
        self.refresh();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.refresh();
    }

    /// Resets query, region and sort to their defaults.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.region = None;
        self.sort = SortMode::default();
        self.selected_index = 0;
        self.refresh();
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Country> {
        self.visible.get(self.selected_index)
    }
}

/// Country detail page state.
#[derive(Debug, Clone, Default)]
pub struct DetailPage {
    /// Code from the current route.
    pub code: String,
    pub country: Option<Country>,
    pub loading: bool,
    pub error: Option<String>,

    /// Selected entry within the country's border list.
    pub border_index: usize,
}

impl DetailPage {
    /// Starts loading `code`, discarding the previously shown record.
    pub fn mount(&mut self, code: &str) -> Request {
        self.code = code.to_string();
        self.country = None;
        self.error = None;
        self.loading = true;
        self.border_index = 0;
        Request::CountryDetail {
            code: code.to_string(),
        }
    }

    /// Marks the page as failed without issuing a request.
    pub fn fail(&mut self, code: &str, message: &str) {
        self.code = code.to_string();
        self.country = None;
        self.loading = false;
        self.error = Some(message.to_string());
        self.border_index = 0;
    }

    /// Applies a detail response.
    ///
    /// Returns `false` and leaves the page untouched when the response is for
    /// a code other than the one currently shown.
    pub fn apply_response(&mut self, code: &str, status: u16, body: &[u8]) -> bool {
        if !code.eq_ignore_ascii_case(&self.code) {
            tracing::debug!(response_code = %code, current_code = %self.code, "discarding stale detail response");
            return false;
        }

        self.loading = false;
        match api::decode_country_detail(code, status, body) {
            Ok(country) => {
                tracing::debug!(code = %code, name = %country.name.common, "country detail loaded");
                self.country = Some(country);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, code = %code, "country detail fetch failed");
                let message = if e.is_not_found() {
                    DETAIL_NOT_FOUND_MESSAGE
                } else {
                    DETAIL_ERROR_MESSAGE
                };
                self.error = Some(message.to_string());
            }
        }
        true
    }

    fn border_count(&self) -> usize {
        self.country.as_ref().map_or(0, |c| c.borders.len())
    }

    /// Moves the border selection, wrapping.
    pub fn move_border(&mut self, forward: bool) {
        let count = self.border_count();
        if count == 0 {
            return;
        }
        self.border_index = if forward {
            (self.border_index + 1) % count
        } else if self.border_index == 0 {
            count - 1
        } else {
            self.border_index - 1
        };
    }

    #[must_use]
    pub fn selected_border(&self) -> Option<&str> {
        self.country
            .as_ref()
            .and_then(|c| c.borders.get(self.border_index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list_body() -> Vec<u8> {
        json!([
            { "name": { "common": "Peru", "official": "Republic of Peru" }, "population": 32971846, "region": "Americas", "cca3": "PER" },
            { "name": { "common": "Chad", "official": "Republic of Chad" }, "population": 16425859, "region": "Africa", "cca3": "TCD" },
            { "name": { "common": "Fiji", "official": "Republic of Fiji" }, "population": 896444, "region": "Oceania", "cca3": "FJI" }
        ])
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_list_mount_sets_loading() {
        let mut page = ListPage::new(SortMode::NameAsc);
        page.error = Some("old".into());
        assert_eq!(page.mount(), Request::AllCountries);
        assert!(page.loading);
        assert!(page.error.is_none());
    }

    #[test]
    fn test_list_success_sorts_by_name_and_derives_regions() {
        let mut page = ListPage::new(SortMode::PopulationDesc);
        page.mount();
        page.apply_response(200, &list_body());

        assert!(!page.loading);
        let stored: Vec<&str> = page.countries.iter().map(Country::common_name).collect();
        assert_eq!(stored, vec!["Chad", "Fiji", "Peru"]);
        assert_eq!(page.regions, vec!["Africa", "Americas", "Oceania"]);
        assert_eq!(page.visible[0].common_name(), "Peru");
    }

    #[test]
    fn test_list_failure_sets_message_and_clears_loading() {
        let mut page = ListPage::new(SortMode::NameAsc);
        page.mount();
        page.apply_response(503, b"");
        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some(LIST_ERROR_MESSAGE));

        page.mount();
        page.apply_response(200, b"<html>");
        assert_eq!(page.error.as_deref(), Some(LIST_ERROR_MESSAGE));
    }

    #[test]
    fn test_region_cycle_wraps_through_any() {
        let mut page = ListPage::new(SortMode::NameAsc);
        page.apply_response(200, &list_body());

        let mut seen = vec![page.region.clone()];
        for _ in 0..4 {
            page.cycle_region(true);
            seen.push(page.region.clone());
        }
        assert_eq!(
            seen,
            vec![
                None,
                Some("Africa".to_string()),
                Some("Americas".to_string()),
                Some("Oceania".to_string()),
                None
            ]
        );

        page.cycle_region(false);
        assert_eq!(page.region.as_deref(), Some("Oceania"));
        assert_eq!(page.visible.len(), 1);
    }

    #[test]
    fn test_missing_region_resets_after_reload() {
        let mut page = ListPage::new(SortMode::NameAsc);
        page.region = Some("Antarctic".into());
        page.apply_response(200, &list_body());
        assert!(page.region.is_none());
        assert_eq!(page.visible.len(), 3);
    }

    #[test]
    fn test_selection_is_clamped_after_filtering() {
        let mut page = ListPage::new(SortMode::NameAsc);
        page.apply_response(200, &list_body());
        page.selected_index = 2;
        page.query = "chad".into();
        page.refresh();
        assert_eq!(page.selected_index, 0);
        assert_eq!(page.selected().map(Country::common_name), Some("Chad"));
    }

    #[test]
    fn test_clear_filters() {
        let mut page = ListPage::new(SortMode::NameAsc);
        page.apply_response(200, &list_body());
        page.query = "x".into();
        page.cycle_region(true);
        page.cycle_sort();
        page.clear_filters();
        assert!(page.query.is_empty());
        assert!(page.region.is_none());
        assert_eq!(page.sort, SortMode::NameAsc);
        assert_eq!(page.visible.len(), 3);
    }

    fn detail_body(code: &str, borders: &[&str]) -> Vec<u8> {
        json!([{
            "name": { "common": "Peru", "official": "Republic of Peru" },
            "population": 32971846,
            "region": "Americas",
            "cca3": code,
            "borders": borders
        }])
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_detail_success() {
        let mut page = DetailPage::default();
        page.mount("PER");
        assert!(page.apply_response("PER", 200, &detail_body("PER", &["BOL", "BRA"])));
        assert!(!page.loading);
        assert_eq!(page.country.as_ref().map(|c| c.code.as_str()), Some("PER"));
    }

    #[test]
    fn test_detail_failure_is_surfaced() {
        let mut page = DetailPage::default();
        page.mount("XXX");
        page.apply_response("XXX", 404, b"{\"status\":404}");
        assert!(!page.loading);
        assert_eq!(page.error.as_deref(), Some(DETAIL_NOT_FOUND_MESSAGE));

        page.mount("PER");
        page.apply_response("PER", 500, b"");
        assert_eq!(page.error.as_deref(), Some(DETAIL_ERROR_MESSAGE));
    }

    #[test]
    fn test_stale_detail_response_is_discarded() {
        let mut page = DetailPage::default();
        page.mount("PER");
        page.mount("CHL");
        assert!(!page.apply_response("PER", 200, &detail_body("PER", &[])));
        assert!(page.loading);
        assert!(page.country.is_none());
    }

    #[test]
    fn test_border_selection_wraps() {
        let mut page = DetailPage::default();
        page.mount("PER");
        page.apply_response("PER", 200, &detail_body("PER", &["BOL", "BRA", "CHL"]));

        assert_eq!(page.selected_border(), Some("BOL"));
        page.move_border(false);
        assert_eq!(page.selected_border(), Some("CHL"));
        page.move_border(true);
        page.move_border(true);
        assert_eq!(page.selected_border(), Some("BRA"));
    }
}
