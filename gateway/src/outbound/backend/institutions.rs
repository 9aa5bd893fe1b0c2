//! Typed client for the backend's institution endpoints.

use std::sync::Arc;

use crate::domain::ports::CredentialSource;
use crate::domain::{ApiError, CreateInstitutionRequest, InstitutionCategory, InstitutionDto};

use super::http_client::{ApiRequest, BackendClient};

/// Institution queries and CRUD operations.
#[derive(Debug, Clone)]
pub struct InstitutionsApi {
    client: Arc<BackendClient>,
}

impl InstitutionsApi {
    /// Wrap the shared backend client.
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// All institutions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn get_all(
        &self,
        credentials: &dyn CredentialSource,
    ) -> Result<Vec<InstitutionDto>, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/api/institutions"), credentials)
            .await
    }

    /// Institutions whose registration was approved.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn verified(
        &self,
        credentials: &dyn CredentialSource,
    ) -> Result<Vec<InstitutionDto>, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/api/institutions/verified"), credentials)
            .await
    }

    /// One institution by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a 404 indicates an unknown id.
    pub async fn get_by_id(
        &self,
        credentials: &dyn CredentialSource,
        id: i64,
    ) -> Result<InstitutionDto, ApiError> {
        self.client
            .fetch_json(ApiRequest::get(format!("/api/institutions/{id}")), credentials)
            .await
    }

    /// Institutions in one category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn by_category(
        &self,
        credentials: &dyn CredentialSource,
        category: InstitutionCategory,
    ) -> Result<Vec<InstitutionDto>, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::get(format!("/api/institutions/category/{category}")),
                credentials,
            )
            .await
    }

    /// Register an institution.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; validation failures carry per-field messages.
    pub async fn create(
        &self,
        credentials: &dyn CredentialSource,
        request: &CreateInstitutionRequest,
    ) -> Result<InstitutionDto, ApiError> {
        self.client
            .fetch_json(ApiRequest::post("/api/institutions").json(request)?, credentials)
            .await
    }

    /// Replace an institution.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; validation failures carry per-field messages.
    pub async fn update(
        &self,
        credentials: &dyn CredentialSource,
        id: i64,
        request: &CreateInstitutionRequest,
    ) -> Result<InstitutionDto, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::put(format!("/api/institutions/{id}")).json(request)?,
                credentials,
            )
            .await
    }

    /// Delete an institution; the backend answers `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn delete(&self, credentials: &dyn CredentialSource, id: i64) -> Result<(), ApiError> {
        self.client
            .execute(ApiRequest::delete(format!("/api/institutions/{id}")), credentials)
            .await
    }
}
