//! Navigation history.
//!
//! Going back returns to the previous entry rather than always to the list.
//! When there is no previous entry (the plugin started on a deep link), back
//! falls through to the list page.

use super::route::Route;

/// Upper bound on retained entries; the oldest entries are dropped first.
const MAX_ENTRIES: usize = 64;

/// Stack of previously visited routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Records `from` as the entry to return to.
    pub fn push(&mut self, from: Route) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(from);
    }

    /// Pops the previous entry, or [`Route::List`] when the stack is empty.
    pub fn back(&mut self) -> Route {
        self.entries.pop().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
