//! Identity gateway adapter for the backend's "who am I" endpoint.
//!
//! One GET per resolution, credential forwarded as a bearer header. Every
//! failure mode maps to a typed [`IdentityGatewayError`] variant; the
//! session verifier collapses them all into "unauthenticated".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};

use crate::domain::SessionIdentity;
use crate::domain::ports::{IdentityGateway, IdentityGatewayError};

const IDENTITY_PATH: &str = "api/auth/me";

/// HTTP implementation of the [`IdentityGateway`] port.
#[derive(Debug, Clone)]
pub struct HttpIdentityGateway {
    http: Client,
    endpoint: Url,
}

impl HttpIdentityGateway {
    /// Build an adapter for the backend at `base` with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL cannot be formed or the
    /// reqwest client cannot be constructed.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, IdentityGatewayError> {
        let endpoint = base.join(IDENTITY_PATH).map_err(|err| IdentityGatewayError::Malformed {
            message: format!("invalid identity endpoint: {err}"),
        })?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| IdentityGatewayError::Transport {
                message: err.to_string(),
            })?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn resolve(&self, credential: &str) -> Result<SessionIdentity, IdentityGatewayError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .bearer_auth(credential)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| IdentityGatewayError::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityGatewayError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| IdentityGatewayError::Transport {
                message: err.to_string(),
            })?;
        parse_identity(body.as_ref())
    }
}

fn parse_identity(body: &[u8]) -> Result<SessionIdentity, IdentityGatewayError> {
    if body.is_empty() {
        return Err(IdentityGatewayError::Malformed {
            message: "empty identity response".to_owned(),
        });
    }
    serde_json::from_slice(body).map_err(|err| IdentityGatewayError::Malformed {
        message: format!("invalid identity payload: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_identity_payload() {
        let identity = parse_identity(br#"{"id":7,"username":"kasia","banned":false}"#)
            .expect("identity decodes");
        assert_eq!(identity.id, 7);
        assert!(identity.is_active());
    }

    #[rstest]
    fn parses_banned_identity() {
        let identity =
            parse_identity(br#"{"id":7,"banned":true}"#).expect("identity decodes");
        assert!(!identity.is_active());
    }

    #[rstest]
    fn empty_body_is_malformed() {
        let error = parse_identity(b"").expect_err("empty body must fail");
        assert!(matches!(error, IdentityGatewayError::Malformed { .. }));
    }

    #[rstest]
    #[case(b"not json" as &[u8])]
    #[case(br#"{"username":"kasia"}"# as &[u8])]
    fn undecodable_body_is_malformed(#[case] body: &[u8]) {
        let error = parse_identity(body).expect_err("undecodable body must fail");
        assert!(matches!(error, IdentityGatewayError::Malformed { .. }));
    }

    #[rstest]
    fn endpoint_joins_onto_backend_origin() {
        let base = Url::parse("http://backend.test:8080/").expect("valid base");
        let gateway =
            HttpIdentityGateway::new(&base, Duration::from_secs(5)).expect("gateway builds");
        assert_eq!(
            gateway.endpoint.as_str(),
            "http://backend.test:8080/api/auth/me"
        );
    }
}
