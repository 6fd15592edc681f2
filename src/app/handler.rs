//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! permission results and fetch results, translating them into state changes
//! and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (already mapped from keys)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and page methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Open`, `Back`, `GoHome`, `Navigate`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `AddressMode`, `SubmitAddress`
//! - **List Controls**: `NextRegion`, `PreviousRegion`, `CycleSort`, `ClearFilters`
//! - **System**: `PermissionsGranted`, `PermissionsDenied`, `Response`
//!
//! # Example
//!
//! ```rust
//! use zatlas::api::Endpoints;
//! use zatlas::app::{handle_event, AppState, Event, Route};
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
//! let (should_render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), zatlas::AtlasError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::route::Route;
use crate::api::Request;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input, host permission results or fetch results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Next list row, or next border country on the detail page.
    KeyDown,
    /// Previous list row, or previous border country on the detail page.
    KeyUp,
    /// Opens the selected country (list) or border country (detail).
    Open,
    /// Returns to the previous route.
    Back,
    /// Navigates to the list page.
    GoHome,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,

    /// Opens the address bar, prefilled with the current path.
    AddressMode,
    /// Navigates to the path typed in the address bar.
    SubmitAddress,

    /// Appends a character to the active input.
    Char(char),
    /// Removes the last character from the active input.
    Backspace,
    /// Leaves the active input mode.
    Escape,

    NextRegion,
    PreviousRegion,
    CycleSort,
    ClearFilters,

    /// Flips between the dark and light palettes.
    ToggleTheme,

    /// Navigates to an arbitrary path.
    Navigate(String),

    /// The host granted web access.
    PermissionsGranted,
    /// The host refused web access.
    PermissionsDenied,

    /// A fetch completed.
    ///
    /// Network failures are reported by the host as a non-2xx status.
    Response {
        request: Request,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, plus the actions to execute in
/// sequence.
///
/// # Errors
///
/// Reserved for state transitions that can fail; every current transition
/// handles its failures inside the page state.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::KeyDown | Event::KeyUp => {
            let forward = matches!(event, Event::KeyDown);
            match state.route {
                Route::List => {
                    if forward {
                        state.list.move_selection_down();
                    } else {
                        state.list.move_selection_up();
                    }
                    Ok((true, vec![]))
                }
                Route::Country { .. } => {
                    state.detail.move_border(forward);
                    Ok((true, vec![]))
                }
                Route::NotFound { .. } => Ok((false, vec![])),
            }
        }
        Event::Open => match &state.route {
            Route::List => {
                let Some(country) = state.list.selected() else {
                    tracing::debug!("no country selected");
                    if matches!(state.input_mode, InputMode::Search(_)) {
                        tracing::debug!("exiting search mode (no selection)");
                        state.input_mode = InputMode::Normal;
                        return Ok((true, vec![]));
                    }
                    return Ok((false, vec![]));
                };

                tracing::debug!(code = %country.code, name = %country.name.common, "country selected");
                let route = Route::Country {
                    code: country.code.clone(),
                };
                Ok((true, state.navigate(route)))
            }
            Route::Country { .. } => {
                let Some(code) = state.detail.selected_border().map(str::to_string) else {
                    tracing::debug!("no border country to open");
                    return Ok((false, vec![]));
                };
                Ok((true, state.navigate(Route::Country { code })))
            }
            Route::NotFound { .. } => Ok((true, state.navigate(Route::List))),
        },
        Event::Back => {
            if state.route == Route::List {
                return Ok((false, vec![]));
            }
            Ok((true, state.go_back()))
        }
        Event::GoHome => Ok((true, state.navigate(Route::List))),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.list.query, "entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.list.query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.list.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.list.query.clear();
            state.list.refresh();
            Ok((true, vec![]))
        }
        Event::AddressMode => {
            state.address = state.route.path();
            state.input_mode = InputMode::Address;
            Ok((true, vec![]))
        }
        Event::SubmitAddress => {
            if state.input_mode != InputMode::Address {
                return Ok((false, vec![]));
            }
            let route = Route::parse(&state.address);
            tracing::debug!(address = %state.address, route = %route, "address submitted");
            state.address.clear();
            Ok((true, state.navigate(route)))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.list.query.push(*c);
                tracing::trace!(query = %state.list.query, char = %c, "search query updated");
                state.list.refresh();
                Ok((true, vec![]))
            }
            InputMode::Address => {
                state.address.push(*c);
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.list.query.pop();
                state.list.refresh();
                Ok((true, vec![]))
            }
            InputMode::Address => {
                state.address.pop();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Address => {
                state.address.clear();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Search(_) => {
                state.input_mode = InputMode::Normal;
                state.list.query.clear();
                state.list.refresh();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::NextRegion | Event::PreviousRegion => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state
                .list
                .cycle_region(matches!(event, Event::NextRegion));
            tracing::debug!(region = ?state.list.region, "region changed");
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state.list.cycle_sort();
            tracing::debug!(sort = %state.list.sort, "sort changed");
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if state.route != Route::List {
                return Ok((false, vec![]));
            }
            state.list.clear_filters();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }
        Event::Navigate(path) => Ok((true, state.navigate(Route::parse(path)))),
        Event::PermissionsGranted => {
            tracing::debug!("web access granted");
            Ok((true, state.grant_web_access()))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied - country data unavailable");
            state.deny_web_access();
            Ok((true, vec![]))
        }
        Event::Response {
            request,
            status,
            body,
        } => Ok((state.apply_response(request, *status, body), vec![])),
    }
}

/// Short label for span fields; response bodies are left out.
fn event_name(event: &Event) -> String {
    match event {
        Event::Response {
            request, status, ..
        } => format!("Response({request:?}, {status})"),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoints;
    use crate::app::modes::{SortMode, ThemeMode};
    use crate::app::pages::DETAIL_NOT_FOUND_MESSAGE;
    use crate::ui::Theme;
    use serde_json::json;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(
            Endpoints::default(),
            Theme::default(),
            Theme::default(),
            ThemeMode::Dark,
            SortMode::NameAsc,
            Route::List,
        );
        handle_event(&mut state, &Event::PermissionsGranted).expect("grant");

        let body = json!([
            { "name": { "common": "France", "official": "French Republic" }, "population": 67391582, "region": "Europe", "cca3": "FRA" },
            { "name": { "common": "Germany", "official": "Federal Republic of Germany" }, "population": 83240525, "region": "Europe", "cca3": "DEU" },
            { "name": { "common": "Japan", "official": "Japan" }, "population": 125836021, "region": "Asia", "cca3": "JPN" }
        ]);
        handle_event(
            &mut state,
            &Event::Response {
                request: Request::AllCountries,
                status: 200,
                body: body.to_string().into_bytes(),
            },
        )
        .expect("list response");
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).expect("char");
        }
    }

    #[test]
    fn test_search_typing_filters_list() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).expect("search");
        type_text(&mut state, "an");

        let names: Vec<&str> = state.list.visible.iter().map(|c| c.common_name()).collect();
        assert_eq!(names, vec!["France", "Germany", "Japan"]);

        type_text(&mut state, "y");
        assert_eq!(state.list.visible.len(), 1);

        handle_event(&mut state, &Event::Backspace).expect("backspace");
        assert_eq!(state.list.visible.len(), 3);
    }

    #[test]
    fn test_focus_results_with_empty_query_leaves_search() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).expect("search");
        handle_event(&mut state, &Event::FocusResults).expect("focus");
        assert_eq!(state.input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::SearchMode).expect("search");
        type_text(&mut state, "j");
        handle_event(&mut state, &Event::FocusResults).expect("focus");
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn test_exit_search_clears_query() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).expect("search");
        type_text(&mut state, "ger");
        handle_event(&mut state, &Event::ExitSearch).expect("exit");
        assert!(state.list.query.is_empty());
        assert_eq!(state.list.visible.len(), 3);
    }

    #[test]
    fn test_open_selected_country() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::KeyDown).expect("down");
        let (render, actions) = handle_event(&mut state, &Event::Open).expect("open");

        assert!(render);
        assert_eq!(state.route, Route::Country { code: "DEU".into() });
        assert!(matches!(
            actions.as_slice(),
            [Action::Fetch { request: Request::CountryDetail { code }, .. }] if code == "DEU"
        ));
    }

    #[test]
    fn test_detail_not_found_response() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::Navigate("/country/xyz".into())).expect("navigate");
        let (render, _) = handle_event(
            &mut state,
            &Event::Response {
                request: Request::CountryDetail { code: "XYZ".into() },
                status: 404,
                body: br#"{"status":404,"message":"Not Found"}"#.to_vec(),
            },
        )
        .expect("response");

        assert!(render);
        assert_eq!(state.detail.error.as_deref(), Some(DETAIL_NOT_FOUND_MESSAGE));
        assert!(!state.detail.loading);
    }

    #[test]
    fn test_border_navigation_and_back() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::Navigate("/country/FRA".into())).expect("navigate");
        let body = json!([{
            "name": { "common": "France", "official": "French Republic" },
            "cca3": "FRA",
            "borders": ["AND", "BEL", "DEU"]
        }]);
        handle_event(
            &mut state,
            &Event::Response {
                request: Request::CountryDetail { code: "FRA".into() },
                status: 200,
                body: body.to_string().into_bytes(),
            },
        )
        .expect("detail");

        handle_event(&mut state, &Event::KeyUp).expect("previous border");
        handle_event(&mut state, &Event::Open).expect("open border");
        assert_eq!(state.route, Route::Country { code: "DEU".into() });

        handle_event(&mut state, &Event::Back).expect("back");
        assert_eq!(state.route, Route::Country { code: "FRA".into() });
        handle_event(&mut state, &Event::Back).expect("back");
        assert_eq!(state.route, Route::List);

        let (render, _) = handle_event(&mut state, &Event::Back).expect("back at root");
        assert!(!render);
    }

    #[test]
    fn test_address_bar_flow() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::AddressMode).expect("address");
        assert_eq!(state.address, "/");

        handle_event(&mut state, &Event::Backspace).expect("backspace");
        type_text(&mut state, "/country/jpn");
        let (_, actions) = handle_event(&mut state, &Event::SubmitAddress).expect("submit");

        assert_eq!(state.route, Route::Country { code: "JPN".into() });
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(actions.len(), 1);

        handle_event(&mut state, &Event::AddressMode).expect("address");
        type_text(&mut state, "zzz");
        handle_event(&mut state, &Event::Escape).expect("cancel");
        assert_eq!(state.route, Route::Country { code: "JPN".into() });
        assert!(state.address.is_empty());
    }

    #[test]
    fn test_list_controls_only_on_list() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::NextRegion).expect("region");
        assert_eq!(state.list.region.as_deref(), Some("Asia"));
        handle_event(&mut state, &Event::CycleSort).expect("sort");
        assert_eq!(state.list.sort, SortMode::PopulationDesc);

        handle_event(&mut state, &Event::Navigate("/nowhere".into())).expect("navigate");
        let (render, _) = handle_event(&mut state, &Event::ClearFilters).expect("clear");
        assert!(!render);
        assert_eq!(state.list.region.as_deref(), Some("Asia"));

        handle_event(&mut state, &Event::GoHome).expect("home");
        handle_event(&mut state, &Event::ClearFilters).expect("clear");
        assert!(state.list.region.is_none());
        assert_eq!(state.list.sort, SortMode::NameAsc);
    }

    #[test]
    fn test_permission_denied() {
        let mut state = AppState::new(
            Endpoints::default(),
            Theme::default(),
            Theme::default(),
            ThemeMode::Dark,
            SortMode::NameAsc,
            Route::Country { code: "FRA".into() },
        );
        let (_, actions) = handle_event(&mut state, &Event::PermissionsDenied).expect("deny");
        assert!(actions.is_empty());
        assert!(!state.detail.loading);
        assert!(state.detail.error.is_some());
    }

    #[test]
    fn test_close_focus() {
        let mut state = loaded_state();
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).expect("close"),
            (false, vec![Action::CloseFocus])
        );
    }
}
