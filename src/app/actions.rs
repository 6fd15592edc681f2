//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are the boundary between pure state transitions and host calls:
//! the plugin shim turns them into Zellij API calls.
//!
//! # Example
//!
//! ```rust
//! use zatlas::api::{Endpoints, Request};
//! use zatlas::app::Action;
//!
//! let request = Request::AllCountries;
//! let url = request.url(&Endpoints::default()).unwrap();
//! let actions = vec![Action::Fetch { request, url }];
//! ```

use crate::api::Request;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a GET request through the host.
    ///
    /// The result arrives later as a `WebRequestResult` event carrying the
    /// context produced by [`Request::to_context`].
    Fetch {
        /// What is being fetched, used to route the result.
        request: Request,
        /// Fully resolved URL.
        url: String,
    },
}
