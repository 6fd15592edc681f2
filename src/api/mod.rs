//! Data-access layer for the REST Countries service.
//!
//! The plugin never performs I/O itself: it asks the Zellij host to issue a
//! `web_request` and receives the outcome as a `WebRequestResult` event. This
//! module owns everything on either side of that hop.
//!
//! ```text
//! Request ──url()/to_context()──▶ web_request ─▶ host
//!                                                 │
//! decode_* ◀──(status, body)── WebRequestResult ◀─┘  (context → Request::from_context)
//! ```
//!
//! # Modules
//!
//! - [`endpoints`]: URL construction
//! - [`request`]: Request descriptors and result-routing context
//! - [`decode`]: Status checks and JSON decoding

pub mod decode;
pub mod endpoints;
pub mod request;

pub use decode::{decode_country_detail, decode_country_list};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL, LIST_FIELDS};
pub use request::Request;
