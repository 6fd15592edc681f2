//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/api layers. It implements the event-driven architecture that powers
//! the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Fetch Results ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Key press to event mapping per page and input mode
//! - [`modes`]: Input, sort and theme mode types
//! - [`pages`]: List and detail page state with their fetch lifecycle
//! - [`pipeline`]: Filter/sort projection and region derivation
//! - [`route`] / [`history`]: Routing and back navigation
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod history;
pub mod keymap;
pub mod modes;
pub mod pages;
pub mod pipeline;
pub mod route;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use history::History;
pub use keymap::map_key;
pub use modes::{InputMode, SearchFocus, SortMode, ThemeMode};
pub use pages::{DetailPage, ListPage};
pub use route::Route;
pub use state::AppState;
