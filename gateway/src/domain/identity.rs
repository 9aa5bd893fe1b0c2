//! Session identity and login credential types.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Identity the backend currently associates with a credential.
///
/// Derived, never stored: the gateway re-resolves it on every protected
/// navigation, so a ban takes effect on the next page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    /// Backend user id; zero means the backend returned no usable identity.
    pub id: i64,
    /// Display username.
    #[serde(default)]
    pub username: String,
    /// Whether the account is banned.
    #[serde(default)]
    pub banned: bool,
}

impl SessionIdentity {
    /// A credential is only as good as the identity behind it: a banned or
    /// id-less identity counts as unauthenticated.
    pub fn is_active(&self) -> bool {
        self.id != 0 && !self.banned
    }
}

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by the auth client.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty but keeps caller-provided whitespace to
///   avoid surprising credential comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for backend lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Display for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "credentials for {}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(7, false, true)]
    #[case(7, true, false)]
    #[case(0, false, false)]
    #[case(0, true, false)]
    fn activity_requires_id_and_no_ban(
        #[case] id: i64,
        #[case] banned: bool,
        #[case] active: bool,
    ) {
        let identity = SessionIdentity {
            id,
            username: "kasia".to_owned(),
            banned,
        };
        assert_eq!(identity.is_active(), active);
    }

    #[rstest]
    fn identity_decodes_from_backend_payload() {
        let identity: SessionIdentity =
            serde_json::from_str(r#"{"id":7,"username":"kasia","email":"k@example.com","banned":false}"#)
                .expect("identity decodes");
        assert_eq!(identity.id, 7);
        assert!(!identity.banned);
    }

    #[rstest]
    fn missing_ban_flag_defaults_to_not_banned() {
        let identity: SessionIdentity =
            serde_json::from_str(r#"{"id":3}"#).expect("identity decodes");
        assert!(identity.is_active());
    }

    #[rstest]
    fn username_is_trimmed() {
        let creds = LoginCredentials::try_from_parts("  admin  ", "password").expect("valid");
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), "password");
    }

    #[rstest]
    #[case("", "password", LoginValidationError::EmptyUsername)]
    #[case("   ", "password", LoginValidationError::EmptyUsername)]
    #[case("admin", "", LoginValidationError::EmptyPassword)]
    fn rejects_blank_inputs(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let error = LoginCredentials::try_from_parts(username, password).expect_err("invalid");
        assert_eq!(error, expected);
    }

    #[rstest]
    fn display_never_exposes_the_password() {
        let creds = LoginCredentials::try_from_parts("admin", "s3cret").expect("valid");
        assert!(!creds.to_string().contains("s3cret"));
    }
}
