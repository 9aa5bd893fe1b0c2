//! Typed client for the backend's authentication endpoints.

use std::sync::Arc;

use crate::domain::ports::{CredentialSource, NoCredentials};
use crate::domain::{ApiError, AuthResponse, LoginCredentials, LoginRequest, RegisterRequest,
    UpdateProfileRequest, UserDto};

use super::http_client::{ApiRequest, BackendClient};

/// Authentication and profile operations.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<BackendClient>,
}

impl AuthApi {
    /// Wrap the shared backend client.
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// Exchange validated credentials for a token. Never attaches a stored
    /// credential: login must not assume a prior session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a 401 indicates invalid credentials.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        let payload = LoginRequest {
            username: credentials.username().to_owned(),
            password: credentials.password().to_owned(),
        };
        self.client
            .fetch_json(
                ApiRequest::post("/auth/generateToken").json(&payload)?.skip_auth(),
                &NoCredentials,
            )
            .await
    }

    /// Create an account and receive a token, without a prior session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; validation failures carry per-field messages.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .fetch_json(
                ApiRequest::post("/auth/register").json(request)?.skip_auth(),
                &NoCredentials,
            )
            .await
    }

    /// Fetch the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn profile(&self, credentials: &dyn CredentialSource) -> Result<UserDto, ApiError> {
        self.client
            .fetch_json(ApiRequest::get("/auth/user/profile"), credentials)
            .await
    }

    /// Update the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn update_profile(
        &self,
        credentials: &dyn CredentialSource,
        request: &UpdateProfileRequest,
    ) -> Result<UserDto, ApiError> {
        self.client
            .fetch_json(ApiRequest::put("/auth/user/profile").json(request)?, credentials)
            .await
    }

    /// Invalidate the backend session behind the caller's credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or backend failure.
    pub async fn logout(&self, credentials: &dyn CredentialSource) -> Result<(), ApiError> {
        self.client
            .execute(ApiRequest::post("/api/auth/logout"), credentials)
            .await
    }
}
