//! User and authentication payloads mirroring backend JSON.
//!
//! Backend-owned records: the gateway holds transient, request-scoped
//! copies only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Token exchange result returned by login and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque bearer credential for subsequent calls.
    pub token: String,
    /// Account email.
    pub email: String,
    /// Account username.
    pub username: String,
    /// Backend user id.
    pub user_id: i64,
}

/// Login payload for the token exchange endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Requested username.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Date of birth, used for event age limits.
    pub birth_date: NaiveDate,
    /// Optional profile bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Optional initial roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Vec<String>>,
}

/// Current-user profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Backend user id.
    pub id: i64,
    /// Account username.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Age derived by the backend.
    #[serde(default)]
    pub age: i32,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Profile bio.
    #[serde(default)]
    pub bio: Option<String>,
    /// Whether the account passed verification.
    #[serde(default)]
    pub is_verified: bool,
    /// Roles held by the account.
    #[serde(default)]
    pub user_roles: Vec<String>,
    /// Account creation instant.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial profile update; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn profile_decodes_from_backend_payload() {
        let payload = r#"{
            "id": 12,
            "username": "kasia",
            "email": "kasia@example.com",
            "birthDate": "2001-03-14",
            "age": 25,
            "isVerified": true,
            "userRoles": ["USER"],
            "createdAt": "2026-01-05T10:30:00Z"
        }"#;

        let user: UserDto = serde_json::from_str(payload).expect("profile decodes");
        assert_eq!(user.id, 12);
        assert!(user.is_verified);
        assert_eq!(user.user_roles, vec!["USER".to_owned()]);
        assert!(user.avatar_url.is_none());
    }

    #[rstest]
    fn profile_update_omits_absent_fields() {
        let request = UpdateProfileRequest {
            bio: Some("hej".to_owned()),
            ..UpdateProfileRequest::default()
        };
        let value = serde_json::to_value(&request).expect("request serializes");

        assert_eq!(value["bio"], "hej");
        assert!(value.get("username").is_none());
        assert!(value.get("avatarUrl").is_none());
    }
}
