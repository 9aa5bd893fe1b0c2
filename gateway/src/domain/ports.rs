//! Ports at the edges of the gateway's domain.
//!
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use super::SessionIdentity;

/// Errors raised by identity gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityGatewayError {
    /// Backend could not be reached or the connection failed mid-flight.
    #[error("identity endpoint unreachable: {message}")]
    Transport {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Backend answered with a non-success status for the credential.
    #[error("identity endpoint rejected the credential with status {status}")]
    Rejected {
        /// HTTP status the backend answered with.
        status: u16,
    },
    /// Body was empty or not a decodable identity document.
    #[error("identity endpoint returned a malformed body: {message}")]
    Malformed {
        /// Adapter-provided decode failure description.
        message: String,
    },
}

/// Port resolving a credential into the identity the backend currently
/// associates with it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Resolve `credential` against the backend's identity endpoint.
    async fn resolve(&self, credential: &str) -> Result<SessionIdentity, IdentityGatewayError>;
}

/// Source of the credential attached to outgoing backend calls.
///
/// Two implementations exist with identical request behaviour: the
/// request-scoped store extracted from an incoming request, and
/// [`SharedCredentials`] for long-lived standalone clients. The API client
/// only ever sees this trait, so both modes produce identical requests and
/// tests can inject fake sources.
pub trait CredentialSource: Send + Sync {
    /// Current credential, or `None` when the caller is anonymous.
    fn credential(&self) -> Option<String>;
}

/// Credential source that never supplies a credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn credential(&self) -> Option<String> {
        None
    }
}

/// Process-wide credential slot for long-lived clients.
///
/// The injected-accessor counterpart of a browser's live cookie jar:
/// updated at login/logout, read on every outgoing call. Mutating the slot
/// never contacts the backend.
#[derive(Debug, Clone, Default)]
pub struct SharedCredentials(Arc<RwLock<Option<String>>>);

impl SharedCredentials {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored credential.
    pub fn set(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.0.write() {
            *slot = Some(token.into());
        }
    }

    /// Remove the stored credential; takes effect before the next call.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.0.write() {
            *slot = None;
        }
    }
}

impl CredentialSource for SharedCredentials {
    fn credential(&self) -> Option<String> {
        self.0.read().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn shared_credentials_round_trip() {
        let slot = SharedCredentials::new();
        assert_eq!(slot.credential(), None);

        slot.set("token-1");
        assert_eq!(slot.credential().as_deref(), Some("token-1"));

        slot.set("token-2");
        assert_eq!(slot.credential().as_deref(), Some("token-2"));

        slot.clear();
        assert_eq!(slot.credential(), None);
    }

    #[rstest]
    fn clones_observe_the_same_slot() {
        let slot = SharedCredentials::new();
        let other = slot.clone();

        slot.set("shared");
        assert_eq!(other.credential().as_deref(), Some("shared"));
    }
}
