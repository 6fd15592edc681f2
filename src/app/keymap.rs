//! Keyboard mapping from Zellij key events to application events.
//!
//! The mapping depends on the input mode first and the current route second:
//! while an input bar has focus, printable keys edit it; otherwise each page
//! has its own bindings plus the global ones (`:` address bar, `t` theme,
//! `q` close).
//!
//! `Ctrl+n` / `Ctrl+p` move the selection everywhere except the address bar.

use super::handler::Event;
use super::modes::{InputMode, SearchFocus};
use super::route::Route;
use super::state::AppState;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an application event, or `None` when unbound.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::debug!(bare_key = ?key.bare_key, input_mode = ?state.input_mode, "key event");

    if state.input_mode != InputMode::Address && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Address => map_text_input(key, Event::SubmitAddress, Event::Escape),
        InputMode::Search(SearchFocus::Typing) => match key.bare_key {
            BareKey::Down => Some(Event::KeyDown),
            BareKey::Up => Some(Event::KeyUp),
            _ => map_text_input(key, Event::FocusResults, Event::ExitSearch),
        },
        InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
            BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
            BareKey::Enter => Some(Event::Open),
            BareKey::Char('/') => Some(Event::FocusSearchBar),
            BareKey::Esc => Some(Event::ExitSearch),
            _ => None,
        },
        InputMode::Normal => match state.route {
            Route::List => map_list_key(key),
            Route::Country { .. } => map_detail_key(key),
            Route::NotFound { .. } => map_not_found_key(key),
        },
    }
}

fn map_text_input(key: &KeyWithModifier, on_enter: Event, on_escape: Event) -> Option<Event> {
    match key.bare_key {
        BareKey::Enter => Some(on_enter),
        BareKey::Esc => Some(on_escape),
        BareKey::Backspace => Some(Event::Backspace),
        BareKey::Char(_) if key.has_modifiers(&[KeyModifier::Ctrl]) => None,
        BareKey::Char(c) => Some(Event::Char(c)),
        _ => None,
    }
}

fn map_list_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Enter => Event::Open,
        BareKey::Char('/') => Event::SearchMode,
        BareKey::Char('r') => Event::NextRegion,
        BareKey::Char('R') => Event::PreviousRegion,
        BareKey::Char('s') => Event::CycleSort,
        BareKey::Char('c') => Event::ClearFilters,
        _ => return map_global_key(key),
    })
}

fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::Back,
        BareKey::Down | BareKey::Right | BareKey::Char('j' | 'l') => Event::KeyDown,
        BareKey::Up | BareKey::Left | BareKey::Char('k' | 'h') => Event::KeyUp,
        BareKey::Enter => Event::Open,
        _ => return map_global_key(key),
    })
}

fn map_not_found_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Enter | BareKey::Char('g') => Event::GoHome,
        BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::Back,
        _ => return map_global_key(key),
    })
}

fn map_global_key(key: &KeyWithModifier) -> Option<Event> {
    match key.bare_key {
        BareKey::Char(':') => Some(Event::AddressMode),
        BareKey::Char('t') => Some(Event::ToggleTheme),
        BareKey::Char('q') => Some(Event::CloseFocus),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoints;
    use crate::app::modes::{SortMode, ThemeMode};
    use crate::ui::Theme;

    fn state_at(route: Route, input_mode: InputMode) -> AppState {
        let mut state = AppState::new(
            Endpoints::default(),
            Theme::default(),
            Theme::default(),
            ThemeMode::Dark,
            SortMode::NameAsc,
            route,
        );
        state.input_mode = input_mode;
        state
    }

    fn key(bare_key: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare_key)
    }

    #[test]
    fn test_list_bindings() {
        let state = state_at(Route::List, InputMode::Normal);
        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), Some(Event::KeyDown));
        assert_eq!(map_key(&state, &key(BareKey::Char('R'))), Some(Event::PreviousRegion));
        assert_eq!(map_key(&state, &key(BareKey::Char('/'))), Some(Event::SearchMode));
        assert_eq!(map_key(&state, &key(BareKey::Char(':'))), Some(Event::AddressMode));
        assert_eq!(map_key(&state, &key(BareKey::Char('x'))), None);
    }

    #[test]
    fn test_typing_captures_letters() {
        let state = state_at(Route::List, InputMode::Search(SearchFocus::Typing));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::Char('q')));
        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), Some(Event::Char('j')));
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::FocusResults));
        assert_eq!(map_key(&state, &key(BareKey::Esc)), Some(Event::ExitSearch));
    }

    #[test]
    fn test_ctrl_navigation() {
        let state = state_at(Route::List, InputMode::Search(SearchFocus::Typing));
        let ctrl_n = key(BareKey::Char('n')).with_ctrl_modifier();
        assert_eq!(map_key(&state, &ctrl_n), Some(Event::KeyDown));

        let address = state_at(Route::List, InputMode::Address);
        assert_eq!(map_key(&address, &ctrl_n), None);
    }

    #[test]
    fn test_detail_bindings() {
        let state = state_at(Route::Country { code: "FRA".into() }, InputMode::Normal);
        assert_eq!(map_key(&state, &key(BareKey::Backspace)), Some(Event::Back));
        assert_eq!(map_key(&state, &key(BareKey::Right)), Some(Event::KeyDown));
        assert_eq!(map_key(&state, &key(BareKey::Char('r'))), None);
        assert_eq!(map_key(&state, &key(BareKey::Char('t'))), Some(Event::ToggleTheme));
    }

    #[test]
    fn test_not_found_bindings() {
        let state = state_at(Route::NotFound { path: "/x".into() }, InputMode::Normal);
        assert_eq!(map_key(&state, &key(BareKey::Char('g'))), Some(Event::GoHome));
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::GoHome));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::CloseFocus));
    }

    #[test]
    fn test_address_bar_bindings() {
        let state = state_at(Route::List, InputMode::Address);
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::SubmitAddress));
        assert_eq!(map_key(&state, &key(BareKey::Esc)), Some(Event::Escape));
        assert_eq!(map_key(&state, &key(BareKey::Char('/'))), Some(Event::Char('/')));
    }
}
