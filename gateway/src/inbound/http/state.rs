//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend on
//! the typed resource clients rather than on raw transport.

use std::sync::Arc;

use crate::outbound::backend::{AttendeesApi, AuthApi, BackendClient, EventsApi, InstitutionsApi};

/// Resource clients bundled for HTTP handlers.
#[derive(Debug, Clone)]
pub struct HttpState {
    /// Authentication and profile operations.
    pub auth: AuthApi,
    /// Event queries and CRUD.
    pub events: EventsApi,
    /// Institution queries and CRUD.
    pub institutions: InstitutionsApi,
    /// Attendance operations.
    pub attendees: AttendeesApi,
}

impl HttpState {
    /// Bundle resource clients sharing one backend client.
    pub fn new(client: BackendClient) -> Self {
        let client = Arc::new(client);
        Self {
            auth: AuthApi::new(Arc::clone(&client)),
            events: EventsApi::new(Arc::clone(&client)),
            institutions: InstitutionsApi::new(Arc::clone(&client)),
            attendees: AttendeesApi::new(client),
        }
    }
}
