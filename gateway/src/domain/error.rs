//! Backend error envelope shared by every outbound call.
//!
//! The backend reports failures as `{status, error, message, path}` where
//! `message` is either a plain string or a field→message map for validation
//! failures. [`ApiError`] preserves that wire shape so pages can render
//! errors exactly as the backend phrased them, while [`ApiErrorDetails`]
//! turns the duck-typed `message` field into a tagged union.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Convenience alias for fallible gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Detail payload of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ApiErrorDetails {
    /// Single human-readable message.
    Message(String),
    /// Validation messages keyed by field name.
    FieldErrors(BTreeMap<String, String>),
}

impl ApiErrorDetails {
    /// Render the details as one string, joining field errors when present.
    pub fn as_text(&self) -> String {
        match self {
            Self::Message(text) => text.clone(),
            Self::FieldErrors(fields) => fields
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }

    /// Field→message map when the failure is a validation failure.
    pub fn fields(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Message(_) => None,
            Self::FieldErrors(fields) => Some(fields),
        }
    }
}

impl std::fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Structured failure raised by backend calls.
///
/// Serializes to the same envelope the backend emits, with the duck-typed
/// `message` field carried as [`ApiErrorDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{error} ({status}) at {path}: {details}")]
pub struct ApiError {
    /// Numeric HTTP status of the failed call.
    pub status: u16,
    /// Short error code, e.g. `Bad Request`.
    pub error: String,
    /// Human-readable failure detail.
    #[serde(rename = "message")]
    pub details: ApiErrorDetails,
    /// Request path that produced the failure.
    pub path: String,
}

/// Raw backend error body; `message` stays untyped until mapped.
#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    path: Option<String>,
}

impl ApiError {
    /// Construct an error from its parts.
    pub fn new(
        status: u16,
        error: impl Into<String>,
        details: ApiErrorDetails,
        path: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: error.into(),
            details,
            path: path.into(),
        }
    }

    /// Synthetic error built from a status code alone, used when the backend
    /// answers with a non-JSON body.
    pub fn from_status(status: u16, path: &str) -> Self {
        Self::new(
            status,
            canonical_reason(status),
            ApiErrorDetails::Message(format!("API request failed with status {status}")),
            path,
        )
    }

    /// Map a non-success backend response body into an error.
    ///
    /// A JSON body is decoded field by field; anything else falls back to
    /// the synthetic status-only form. The HTTP status always wins over any
    /// status the body claims.
    pub fn from_response(status: u16, path: &str, body: &[u8]) -> Self {
        let Ok(wire) = serde_json::from_slice::<WireError>(body) else {
            return Self::from_status(status, path);
        };
        let details = match wire.message {
            Some(Value::String(text)) => ApiErrorDetails::Message(text),
            Some(Value::Object(map)) => ApiErrorDetails::FieldErrors(
                map.into_iter()
                    .map(|(field, message)| {
                        let text = match message {
                            Value::String(text) => text,
                            other => other.to_string(),
                        };
                        (field, text)
                    })
                    .collect(),
            ),
            _ => ApiErrorDetails::Message(format!("API request failed with status {status}")),
        };
        Self::new(
            status,
            wire.error.unwrap_or_else(|| canonical_reason(status).to_owned()),
            details,
            wire.path.unwrap_or_else(|| path.to_owned()),
        )
    }

    /// Generic operation-failed error for transport-level failures; carries
    /// no status-specific detail because no response was received.
    pub fn transport(path: &str) -> Self {
        Self::new(
            503,
            "Service Unavailable",
            ApiErrorDetails::Message("operation failed: backend unreachable".to_owned()),
            path,
        )
    }

    /// A 2xx response whose body could not be decoded as promised.
    pub fn decode(path: &str, message: impl Into<String>) -> Self {
        Self::new(502, "Bad Gateway", ApiErrorDetails::Message(message.into()), path)
    }

    /// A request body that could not be serialized before dispatch.
    pub fn encode(path: &str, message: impl Into<String>) -> Self {
        Self::new(
            500,
            "Internal Server Error",
            ApiErrorDetails::Message(message.into()),
            path,
        )
    }

    /// Local 400 raised before any backend call is made.
    pub fn invalid_request(path: &str, message: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", ApiErrorDetails::Message(message.into()), path)
    }

    /// Local validation failure with per-field messages.
    pub fn field_errors(
        path: &str,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self::new(
            400,
            "Bad Request",
            ApiErrorDetails::FieldErrors(fields.into_iter().collect()),
            path,
        )
    }

    /// Whether the failure is an authentication failure, so pages can show
    /// "invalid credentials" instead of a generic message.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

fn canonical_reason(status: u16) -> &'static str {
    actix_web::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn maps_plain_message_body() {
        let body = json!({
            "error": "Bad Request",
            "message": "username taken",
            "path": "/auth/register"
        });
        let error = ApiError::from_response(400, "/auth/register", body.to_string().as_bytes());

        assert_eq!(error.status, 400);
        assert_eq!(error.error, "Bad Request");
        assert_eq!(error.details, ApiErrorDetails::Message("username taken".to_owned()));
        assert_eq!(error.path, "/auth/register");
    }

    #[rstest]
    fn maps_field_error_body_to_tagged_map() {
        let body = json!({
            "error": "Bad Request",
            "message": { "title": "must not be blank", "maxCapacity": "must be positive" },
            "path": "/api/events"
        });
        let error = ApiError::from_response(400, "/api/events", body.to_string().as_bytes());

        let fields = error.details.fields().expect("field errors expected");
        assert_eq!(fields.get("title").map(String::as_str), Some("must not be blank"));
        assert_eq!(
            fields.get("maxCapacity").map(String::as_str),
            Some("must be positive")
        );
        assert_eq!(
            error.details.as_text(),
            "maxCapacity: must be positive; title: must not be blank"
        );
    }

    #[rstest]
    #[case(500, "Internal Server Error")]
    #[case(404, "Not Found")]
    #[case(401, "Unauthorized")]
    fn non_json_body_yields_synthetic_error(#[case] status: u16, #[case] reason: &str) {
        let error = ApiError::from_response(status, "/api/events", b"<html>boom</html>");

        assert_eq!(error.status, status);
        assert_eq!(error.error, reason);
        assert_eq!(
            error.details,
            ApiErrorDetails::Message(format!("API request failed with status {status}"))
        );
        assert_eq!(error.path, "/api/events");
    }

    #[rstest]
    fn body_without_path_falls_back_to_request_path() {
        let body = json!({ "error": "Conflict", "message": "event is full" });
        let error = ApiError::from_response(409, "/api/event-attendees/join/3", body.to_string().as_bytes());

        assert_eq!(error.path, "/api/event-attendees/join/3");
        assert_eq!(error.error, "Conflict");
    }

    #[rstest]
    fn serializes_with_backend_field_names() {
        let error = ApiError::from_status(404, "/api/events/9");
        let value = serde_json::to_value(&error).expect("error serializes");

        assert_eq!(value["status"], 404);
        assert_eq!(value["error"], "Not Found");
        assert_eq!(value["message"], "API request failed with status 404");
        assert_eq!(value["path"], "/api/events/9");
    }

    #[rstest]
    fn field_errors_serialize_as_object() {
        let error = ApiError::field_errors(
            "/api/auth/login",
            [("username".to_owned(), "must not be empty".to_owned())],
        );
        let value = serde_json::to_value(&error).expect("error serializes");

        assert_eq!(value["message"]["username"], "must not be empty");
    }

    #[rstest]
    fn transport_failures_are_generic() {
        let error = ApiError::transport("/api/events");

        assert_eq!(error.status, 503);
        assert!(!error.is_unauthorized());
        assert_eq!(error.details.as_text(), "operation failed: backend unreachable");
    }

    #[rstest]
    fn unauthorized_is_surfaced_distinctly() {
        assert!(ApiError::from_status(401, "/auth/generateToken").is_unauthorized());
        assert!(!ApiError::from_status(403, "/auth/generateToken").is_unauthorized());
    }
}
