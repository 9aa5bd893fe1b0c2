//! Typed client for the backend's event endpoints.

use std::sync::Arc;

use crate::domain::ports::CredentialSource;
use crate::domain::{ApiError, CreateEventRequest, EventCategory, EventDto};

use super::http_client::{ApiRequest, BackendClient};

/// Event queries and CRUD operations.
#[derive(Debug, Clone)]
pub struct EventsApi {
    client: Arc<BackendClient>,
}

impl EventsApi {
    /// Wrap the shared backend client.
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// All events.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn get_all(&self, credentials: &dyn CredentialSource) -> Result<Vec<EventDto>, ApiError> {
        self.client.fetch_json(ApiRequest::get("/api/events"), credentials).await
    }

    /// One event by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a 404 indicates an unknown id.
    pub async fn get_by_id(
        &self,
        credentials: &dyn CredentialSource,
        id: i64,
    ) -> Result<EventDto, ApiError> {
        self.client
            .fetch_json(ApiRequest::get(format!("/api/events/{id}")), credentials)
            .await
    }

    /// Events that have not started yet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn upcoming(&self, credentials: &dyn CredentialSource) -> Result<Vec<EventDto>, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/api/events/upcoming"), credentials)
            .await
    }

    /// Events with free capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn available(&self, credentials: &dyn CredentialSource) -> Result<Vec<EventDto>, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/api/events/available"), credentials)
            .await
    }

    /// Events in one category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn by_category(
        &self,
        credentials: &dyn CredentialSource,
        category: EventCategory,
    ) -> Result<Vec<EventDto>, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::get(format!("/api/events/category/{category}")),
                credentials,
            )
            .await
    }

    /// Full-text search over events; the query is URL-encoded on dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn search(
        &self,
        credentials: &dyn CredentialSource,
        query: &str,
    ) -> Result<Vec<EventDto>, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::get("/api/events/search").query("query", query),
                credentials,
            )
            .await
    }

    /// Events created by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn my_events(&self, credentials: &dyn CredentialSource) -> Result<Vec<EventDto>, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/api/events/my-events"), credentials)
            .await
    }

    /// Create an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; validation failures carry per-field messages.
    pub async fn create(
        &self,
        credentials: &dyn CredentialSource,
        request: &CreateEventRequest,
    ) -> Result<EventDto, ApiError> {
        self.client
            .fetch_json(ApiRequest::post("/api/events").json(request)?, credentials)
            .await
    }

    /// Replace an event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; validation failures carry per-field messages.
    pub async fn update(
        &self,
        credentials: &dyn CredentialSource,
        id: i64,
        request: &CreateEventRequest,
    ) -> Result<EventDto, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::put(format!("/api/events/{id}")).json(request)?,
                credentials,
            )
            .await
    }

    /// Delete an event; the backend answers `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn delete(&self, credentials: &dyn CredentialSource, id: i64) -> Result<(), ApiError> {
        self.client
            .execute(ApiRequest::delete(format!("/api/events/{id}")), credentials)
            .await
    }
}
