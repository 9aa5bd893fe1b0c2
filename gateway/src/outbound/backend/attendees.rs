//! Typed client for the backend's attendance endpoints.

use std::sync::Arc;

use crate::domain::ports::CredentialSource;
use crate::domain::{ApiError, EventAttendeeDto};

use super::http_client::{ApiRequest, BackendClient};

/// Attendance operations: joining, leaving and listing attendees.
#[derive(Debug, Clone)]
pub struct AttendeesApi {
    client: Arc<BackendClient>,
}

impl AttendeesApi {
    /// Wrap the shared backend client.
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// Join an event as the calling user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a conflict indicates the event is full.
    pub async fn join(&self, credentials: &dyn CredentialSource, event_id: i64) -> Result<(), ApiError> {
        self.client
            .execute(
                ApiRequest::post(format!("/api/event-attendees/join/{event_id}")),
                credentials,
            )
            .await
    }

    /// Leave an event as the calling user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn leave(&self, credentials: &dyn CredentialSource, event_id: i64) -> Result<(), ApiError> {
        self.client
            .execute(
                ApiRequest::delete(format!("/api/event-attendees/leave/{event_id}")),
                credentials,
            )
            .await
    }

    /// Attendees of one event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn for_event(
        &self,
        credentials: &dyn CredentialSource,
        event_id: i64,
    ) -> Result<Vec<EventAttendeeDto>, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::get(format!("/api/event-attendees/event/{event_id}")),
                credentials,
            )
            .await
    }

    /// The caller's own attendance records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn my_events(
        &self,
        credentials: &dyn CredentialSource,
    ) -> Result<Vec<EventAttendeeDto>, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/api/event-attendees/my-events"), credentials)
            .await
    }
}
