//! Community-events gateway library modules.
//!
//! The gateway fronts a separate backend REST API: it classifies and
//! authorizes every incoming page request before handlers run, re-resolves
//! the caller's identity on each protected navigation, and proxies typed
//! domain calls with the caller's credential attached.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::RouteGate;
