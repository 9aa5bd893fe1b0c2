//! Session verification against the backend identity endpoint.
//!
//! Validity is defined by the backend's acceptance, not by mere presence of
//! a stored credential: the verifier re-resolves the identity on every call
//! and fails closed on any resolution error. Freshness is traded for
//! latency deliberately — a ban takes effect on the next navigation.

use async_trait::async_trait;
use tracing::warn;

use super::ports::IdentityGateway;

/// Boolean verification decision consumed by the route gate.
///
/// Implementations must never raise: every failure mode collapses into
/// `false`.
#[async_trait]
pub trait VerifySession: Send + Sync {
    /// Whether `credential` maps to a live, non-banned identity.
    async fn verify(&self, credential: Option<&str>) -> bool;
}

/// Verifier resolving credentials through an [`IdentityGateway`].
#[derive(Debug, Clone)]
pub struct SessionVerifier<G> {
    gateway: G,
}

impl<G: IdentityGateway> SessionVerifier<G> {
    /// Build a verifier around the given identity gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: IdentityGateway> VerifySession for SessionVerifier<G> {
    /// One backend round trip per call; none at all when the credential is
    /// absent or empty.
    async fn verify(&self, credential: Option<&str>) -> bool {
        let Some(token) = credential.filter(|token| !token.is_empty()) else {
            return false;
        };
        match self.gateway.resolve(token).await {
            Ok(identity) if identity.is_active() => true,
            Ok(identity) => {
                warn!(
                    user_id = identity.id,
                    banned = identity.banned,
                    "resolved identity is not active"
                );
                false
            }
            Err(error) => {
                warn!(error = %error, "identity resolution failed; treating caller as unauthenticated");
                false
            }
        }
    }
}
