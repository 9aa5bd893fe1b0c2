//! HTTP inbound adapter exposing the gateway's endpoints.
//!
//! The [`crate::domain::ApiError`] envelope doubles as the HTTP error
//! response: handlers propagate it with `?` and the [`ResponseError`] impl
//! below renders it in the backend's own wire shape.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::ApiError;

pub mod attendees;
pub mod auth;
pub mod credentials;
pub mod events;
pub mod health;
pub mod institutions;
pub mod pages;
pub mod routes;
pub mod state;

pub use crate::domain::ApiResult;
pub use credentials::{AUTH_COOKIE, Credentials};
pub use state::HttpState;

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_response_preserves_the_backend_envelope() {
        let error = ApiError::from_status(404, "/api/events/9");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    fn out_of_range_status_degrades_to_internal_error() {
        let error = ApiError::new(
            0,
            "Error",
            crate::domain::ApiErrorDetails::Message("weird".to_owned()),
            "/",
        );
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
