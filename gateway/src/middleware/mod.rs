//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns,
//! chiefly the route gate that authorizes page requests before handlers run.

pub mod gate;

pub use gate::{RouteGate, RoutePolicy};
