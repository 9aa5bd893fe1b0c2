//! Outbound adapters for the community-events backend.
//!
//! The [`http_client::BackendClient`] owns transport; resource clients add
//! fixed path templates and expected success types on top.

mod attendees;
mod auth;
mod events;
pub mod http_client;
mod identity;
mod institutions;

pub use attendees::AttendeesApi;
pub use auth::AuthApi;
pub use events::EventsApi;
pub use http_client::{ApiRequest, ApiResponse, BackendClient};
pub use identity::HttpIdentityGateway;
pub use institutions::InstitutionsApi;
