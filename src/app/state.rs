//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the current route and its history, the per-page states, the input
//! and theme modes, and the permission gate for network access.
//!
//! # Architecture
//!
//! Page data (fetched countries, the current detail record) lives in
//! [`ListPage`] and [`DetailPage`]. Both survive navigation, so returning to the
//! list keeps the query, region, sort and selection. Mounting a route resets
//! the page's fetch flags and yields at most one [`Action::Fetch`].
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms state into a renderable
//! [`UIViewModel`], handling windowing around the selection, match
//! highlighting and responsive column selection based on the pane size.
//!
//! # Example
//!
//! ```rust
//! use zatlas::api::Endpoints;
//! use zatlas::app::{AppState, Route};
//! use zatlas::app::modes::{SortMode, ThemeMode};
//! use zatlas::ui::Theme;
//!
//! let mut state = AppState::new(
//!     Endpoints::default(),
//!     Theme::default(),
//!     Theme::default(),
//!     ThemeMode::Dark,
//!     SortMode::NameAsc,
//!     Route::List,
//! );
//! let actions = state.grant_web_access();
//! assert_eq!(actions.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::actions::Action;
use super::history::History;
use super::modes::{InputMode, SearchFocus, SortMode, ThemeMode};
use super::pages::{DetailPage, ListPage, DETAIL_NOT_FOUND_MESSAGE};
use super::pipeline;
use super::route::Route;
use crate::api::{Endpoints, Request};
use crate::domain::country::format_population;
use crate::domain::Country;
use crate::ui::helpers::{kept_chars, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BorderChip, ColumnLayout, ControlsInfo, DetailField, DetailView, DisplayItem, FooterInfo,
    HeaderInfo, InputBarInfo, ListView, NotFoundView, PageView, StatusKind, StatusMessage,
    UIViewModel,
};

/// Shown on every page when the user refuses the web access permission.
pub const PERMISSION_DENIED_MESSAGE: &str = "Web access permission denied.";

const ALL_REGIONS_LABEL: &str = "All regions";

const CAPITAL_COLUMN_MIN_WIDTH: usize = 16;
const NAME_COLUMN_MIN_WIDTH: usize = 8;
const NAME_COLUMN_MAX_WIDTH: usize = 36;

/// Pane width below which the capital column is dropped.
const CAPITAL_COLUMN_BREAKPOINT: usize = 90;

/// Pane width below which the region column is dropped as well.
const REGION_COLUMN_BREAKPOINT: usize = 64;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route currently shown.
    pub route: Route,

    /// Routes to return to with "back".
    pub history: History,

    pub list: ListPage,
    pub detail: DetailPage,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and whether an input bar is shown.
    pub input_mode: InputMode,

    /// Text typed into the address bar.
    pub address: String,

    /// Selects between `dark_theme` and `light_theme`.
    pub theme_mode: ThemeMode,
    pub dark_theme: Theme,
    pub light_theme: Theme,

    pub endpoints: Endpoints,

    /// Whether the host granted the web access permission.
    ///
    /// Fetches are deferred until it is granted; mounts before that only set
    /// page flags.
    pub web_access: bool,
}

impl AppState {
    /// Creates the state for a freshly loaded plugin.
    ///
    /// `start` becomes the current route and its page is marked as loading;
    /// the fetch itself waits until web access is granted.
    #[must_use]
    pub fn new(
        endpoints: Endpoints,
        dark_theme: Theme,
        light_theme: Theme,
        theme_mode: ThemeMode,
        sort: SortMode,
        start: Route,
    ) -> Self {
        let mut state = Self {
            route: start,
            history: History::new(),
            list: ListPage::new(sort),
            detail: DetailPage::default(),
            input_mode: InputMode::Normal,
            address: String::new(),
            theme_mode,
            dark_theme,
            light_theme,
            endpoints,
            web_access: false,
        };
        let _ = state.mount_current();
        state
    }

    /// The palette for the current theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        match self.theme_mode {
            ThemeMode::Dark => &self.dark_theme,
            ThemeMode::Light => &self.light_theme,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(theme_mode = ?self.theme_mode, theme = %self.theme().name, "theme toggled");
    }

    /// Moves to `route`, recording the current route in history.
    ///
    /// Navigating to the route already shown remounts it without touching
    /// history.
    pub fn navigate(&mut self, route: Route) -> Vec<Action> {
        tracing::debug!(from = %self.route, to = %route, "navigating");

        let previous = std::mem::replace(&mut self.route, route);
        if previous != self.route {
            self.history.push(previous);
        }
        self.input_mode = InputMode::Normal;
        self.mount_current()
    }

    /// Returns to the previous route, or the list when there is none.
    pub fn go_back(&mut self) -> Vec<Action> {
        self.route = self.history.back();
        tracing::debug!(to = %self.route, remaining = self.history.len(), "navigating back");
        self.input_mode = InputMode::Normal;
        self.mount_current()
    }

    /// Mounts the current route's page and returns the fetch it needs.
    pub fn mount_current(&mut self) -> Vec<Action> {
        let _span = tracing::debug_span!("mount_route", route = %self.route).entered();

        let (request, url) = match &self.route {
            Route::List => (self.list.mount(), self.endpoints.all_countries_url()),
            Route::Country { code } => {
                let code = code.clone();
                let request = self.detail.mount(&code);
                match request.url(&self.endpoints) {
                    Ok(url) => (request, url),
                    Err(e) => {
                        tracing::debug!(code = %code, error = %e, "rejecting malformed country code");
                        self.detail.fail(&code, DETAIL_NOT_FOUND_MESSAGE);
                        return vec![];
                    }
                }
            }
            Route::NotFound { path } => {
                tracing::debug!(path = %path, "no page for path");
                return vec![];
            }
        };

        if !self.web_access {
            tracing::debug!("web access not granted yet, deferring fetch");
            return vec![];
        }

        vec![Action::Fetch { request, url }]
    }

    /// Opens the network gate and mounts the current route.
    pub fn grant_web_access(&mut self) -> Vec<Action> {
        self.web_access = true;
        self.mount_current()
    }

    /// Marks every pending fetch as failed.
    pub fn deny_web_access(&mut self) {
        self.web_access = false;
        self.list.loading = false;
        self.list.error = Some(PERMISSION_DENIED_MESSAGE.to_string());
        self.detail.loading = false;
        self.detail.error = Some(PERMISSION_DENIED_MESSAGE.to_string());
    }

    /// Routes a fetch result to its page.
    ///
    /// Returns `true` when the visible page changed.
    pub fn apply_response(&mut self, request: &Request, status: u16, body: &[u8]) -> bool {
        let _span = tracing::debug_span!(
            "apply_response",
            request = ?request,
            status = status,
            body_len = body.len()
        )
        .entered();

        match request {
            Request::AllCountries => {
                self.list.apply_response(status, body);
                self.route == Route::List
            }
            Request::CountryDetail { code } => {
                let is_current =
                    matches!(&self.route, Route::Country { code: current } if current == code);
                if !is_current {
                    tracing::debug!(code = %code, route = %self.route, "discarding detail response for inactive route");
                    return false;
                }
                self.detail.apply_response(code, status, body)
            }
        }
    }

    /// Computes a renderable UI view model from current state and pane size.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near the end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let input_bar = self.compute_input_bar();
        let page = match &self.route {
            Route::List => PageView::List(self.compute_list_view(rows, cols, input_bar.is_some())),
            Route::Country { .. } => PageView::Detail(self.compute_detail_view()),
            Route::NotFound { path } => PageView::NotFound(NotFoundView {
                path: path.clone(),
                message: "Page not found".to_string(),
            }),
        };

        UIViewModel {
            header: self.compute_header(),
            input_bar,
            page,
            footer: self.compute_footer(),
        }
    }

    fn compute_list_view(&self, rows: usize, cols: usize, has_input_bar: bool) -> ListView {
        let controls = ControlsInfo {
            region: self
                .list
                .region
                .clone()
                .unwrap_or_else(|| ALL_REGIONS_LABEL.to_string()),
            sort: self.list.sort.label().to_string(),
            count: self.list.visible.len(),
            total: self.list.countries.len(),
        };
        let columns = Self::column_layout(cols);

        if let Some(status) = self.compute_list_status() {
            return ListView {
                controls,
                columns,
                display_items: vec![],
                selected_index: 0,
                status: Some(status),
            };
        }

        let visible = &self.list.visible;
        let available_rows = Self::calculate_available_rows(rows, has_input_bar).max(1);

        let mut visible_start = self.list.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, country)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_item(country, absolute_idx, &columns)
            })
            .collect();

        ListView {
            controls,
            columns,
            display_items,
            selected_index: self.list.selected_index.saturating_sub(visible_start),
            status: None,
        }
    }

    fn compute_list_status(&self) -> Option<StatusMessage> {
        if let Some(error) = &self.list.error {
            return Some(StatusMessage {
                kind: StatusKind::Error,
                message: error.clone(),
                subtitle: "Press : and enter / to try again".to_string(),
            });
        }

        if self.list.countries.is_empty() {
            return Some(if self.list.loading {
                StatusMessage {
                    kind: StatusKind::Loading,
                    message: "Loading countries...".to_string(),
                    subtitle: String::new(),
                }
            } else {
                StatusMessage {
                    kind: StatusKind::Empty,
                    message: "No countries available".to_string(),
                    subtitle: String::new(),
                }
            });
        }

        if self.list.visible.is_empty() {
            return Some(StatusMessage {
                kind: StatusKind::Empty,
                message: "No countries match the current filters".to_string(),
                subtitle: "Press c to clear filters".to_string(),
            });
        }

        None
    }

    fn compute_display_item(
        &self,
        country: &Country,
        absolute_idx: usize,
        columns: &ColumnLayout,
    ) -> DisplayItem {
        let name = truncate(country.common_name(), columns.name_width);
        let kept = kept_chars(country.common_name(), columns.name_width);

        let highlight_ranges = pipeline::highlight_ranges(country.common_name(), &self.list.query)
            .into_iter()
            .filter(|&(start, _)| start < kept)
            .map(|(start, end)| (start, end.min(kept)))
            .collect();

        DisplayItem {
            flag: country.flag_glyph().to_string(),
            name,
            population: format_population(country.population),
            region: country.region.clone(),
            capital: country.capital_label(),
            is_selected: absolute_idx == self.list.selected_index,
            highlight_ranges,
        }
    }

    fn compute_detail_view(&self) -> DetailView {
        let detail = &self.detail;

        if let Some(error) = &detail.error {
            return DetailView {
                title: String::new(),
                fields: vec![],
                borders: vec![],
                status: Some(StatusMessage {
                    kind: StatusKind::Error,
                    message: error.clone(),
                    subtitle: "Press b to go back".to_string(),
                }),
            };
        }

        let Some(country) = detail.country.as_ref() else {
            return DetailView {
                title: String::new(),
                fields: vec![],
                borders: vec![],
                status: Some(StatusMessage {
                    kind: StatusKind::Loading,
                    message: "Loading country...".to_string(),
                    subtitle: String::new(),
                }),
            };
        };

        let title = format!("{} {}", country.flag_glyph(), country.common_name())
            .trim()
            .to_string();

        let mut fields = vec![
            field("Official name", country.name.official.clone()),
            field("Code", country.code.clone()),
            field("Population", format_population(country.population)),
            field("Region", country.region_label()),
            field("Capital", country.capital_label()),
            field("Currencies", country.currency_labels()),
            field("Languages", country.language_labels()),
            field("Area", country.area_label()),
            field("Top-level domains", country.tld_label()),
            field("Timezones", country.timezone_label()),
        ];
        if let Some(url) = country.flag_url() {
            fields.push(field("Flag", url.to_string()));
        }
        if let Some(alt) = country.flags.alt.as_deref().filter(|alt| !alt.is_empty()) {
            fields.push(field("Flag description", alt.to_string()));
        }

        let borders = country
            .borders
            .iter()
            .enumerate()
            .map(|(i, code)| BorderChip {
                code: code.clone(),
                is_selected: i == detail.border_index,
            })
            .collect();

        DetailView {
            title,
            fields,
            borders,
            status: None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.route {
            Route::List => format!(" Countries ({}) ", self.list.visible.len()),
            Route::Country { code } => self.detail.country.as_ref().map_or_else(
                || format!(" Country {code} "),
                |country| format!(" {} ", country.common_name()),
            ),
            Route::NotFound { .. } => " Not Found ".to_string(),
        };

        HeaderInfo {
            title,
            theme_label: self.theme_mode.label().to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, &self.route) {
            (InputMode::Address, _) => "Enter: go  ESC: cancel  Paths: /  /country/{code}",
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: exit search  Enter: results  Type to filter"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open"
            }
            (InputMode::Normal, Route::List) => {
                "j/k: navigate  Enter: open  /: search  r/R: region  s: sort  c: clear  :: go to  t: theme  q: quit"
            }
            (InputMode::Normal, Route::Country { .. }) => {
                "b/ESC: back  j/k: border  Enter: open border  :: go to  t: theme  q: quit"
            }
            (InputMode::Normal, Route::NotFound { .. }) => {
                "g/Enter: go home  b/ESC: back  :: go to  t: theme  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// The address bar when editing a path, otherwise the search bar on the
    /// list while searching or while a query is active.
    fn compute_input_bar(&self) -> Option<InputBarInfo> {
        match self.input_mode {
            InputMode::Address => Some(InputBarInfo {
                label: "Go to".to_string(),
                text: self.address.clone(),
                focused: true,
            }),
            InputMode::Search(focus) if self.route == Route::List => Some(InputBarInfo {
                label: "Search".to_string(),
                text: self.list.query.clone(),
                focused: focus == SearchFocus::Typing,
            }),
            _ if self.route == Route::List && !self.list.query.is_empty() => Some(InputBarInfo {
                label: "Search".to_string(),
                text: self.list.query.clone(),
                focused: false,
            }),
            _ => None,
        }
    }

    /// Rows left for the country table.
    ///
    /// Rows start at 1. Items begin on row 6 (blank line, header, border,
    /// controls, headings) and must end above the bottom border at
    /// `rows - 2`, leaving `rows - 8`. An input bar takes 3 more.
    const fn calculate_available_rows(total_rows: usize, has_input_bar: bool) -> usize {
        if has_input_bar {
            total_rows.saturating_sub(11)
        } else {
            total_rows.saturating_sub(8)
        }
    }

    fn column_layout(cols: usize) -> ColumnLayout {
        let show_capital = cols >= CAPITAL_COLUMN_BREAKPOINT;
        let show_region = cols >= REGION_COLUMN_BREAKPOINT;

        let mut reserved = ColumnLayout::FLAG_WIDTH + ColumnLayout::POPULATION_WIDTH;
        if show_region {
            reserved += ColumnLayout::REGION_WIDTH;
        }
        if show_capital {
            reserved += CAPITAL_COLUMN_MIN_WIDTH;
        }

        ColumnLayout {
            name_width: cols
                .saturating_sub(reserved)
                .clamp(NAME_COLUMN_MIN_WIDTH, NAME_COLUMN_MAX_WIDTH),
            show_region,
            show_capital,
        }
    }
}

fn field(label: &str, value: String) -> DetailField {
    DetailField {
        label: label.to_string(),
        value,
    }
}
