//! Request-scoped credential store backed by the `authToken` cookie.
//!
//! Handlers extract [`Credentials`] instead of touching cookies directly, so
//! the credential lifecycle (issue at login, removal at logout or gate
//! cleanup) stays in one place. Raw tokens never reach log output; use
//! [`Credentials::fingerprint`] for correlation.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};
use sha2::{Digest, Sha256};

use crate::domain::ports::CredentialSource;

/// Cookie holding the bearer credential, scoped to the whole site.
pub const AUTH_COOKIE: &str = "authToken";

/// Length of the log fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Credential captured from the incoming request's cookie jar.
#[derive(Debug, Clone, Default)]
pub struct Credentials(Option<String>);

impl Credentials {
    /// Build from an already-read cookie value, mainly for tests.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Current credential, or `None` when absent. An empty cookie value
    /// counts as absent.
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref().filter(|token| !token.is_empty())
    }

    /// Cookie persisting `token` for every subsequent same-site request.
    pub fn issue(token: &str) -> Cookie<'static> {
        let mut cookie = Cookie::new(AUTH_COOKIE, token.to_owned());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie
    }

    /// Cookie deleting the credential: empty value, immediate expiry. The
    /// deletion takes effect before the next request is read.
    pub fn removal() -> Cookie<'static> {
        let mut cookie = Cookie::new(AUTH_COOKIE, "");
        cookie.set_path("/");
        cookie.make_removal();
        cookie
    }

    /// Truncated SHA-256 of the token, for log correlation without exposing
    /// the credential itself.
    pub fn fingerprint(&self) -> Option<String> {
        self.token().map(|token| {
            let mut hasher = Sha256::new();
            hasher.update(token.as_bytes());
            let digest = hasher.finalize();
            hex::encode(&digest[..FINGERPRINT_BYTES])
        })
    }

    fn from_http_request(req: &HttpRequest) -> Self {
        Self(req.cookie(AUTH_COOKIE).map(|cookie| cookie.value().to_owned()))
    }
}

impl FromRequest for Credentials {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_http_request(req)))
    }
}

impl CredentialSource for Credentials {
    fn credential(&self) -> Option<String> {
        self.token().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[actix_web::test]
    async fn extracts_token_from_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(AUTH_COOKIE, "token-7"))
            .to_http_request();
        let credentials = Credentials::extract(&req).await.expect("extraction is infallible");
        assert_eq!(credentials.token(), Some("token-7"));
    }

    #[actix_web::test]
    async fn missing_cookie_means_absent() {
        let req = TestRequest::default().to_http_request();
        let credentials = Credentials::extract(&req).await.expect("extraction is infallible");
        assert_eq!(credentials.token(), None);
        assert_eq!(credentials.fingerprint(), None);
    }

    #[rstest]
    fn empty_cookie_value_counts_as_absent() {
        let credentials = Credentials::from_token("");
        assert_eq!(credentials.token(), None);
        assert_eq!(credentials.credential(), None);
    }

    #[rstest]
    fn issued_cookie_spans_the_whole_site() {
        let cookie = Credentials::issue("token-7");
        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "token-7");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[rstest]
    fn removal_cookie_expires_immediately() {
        let cookie = Credentials::removal();
        assert_eq!(cookie.value(), "");
        let rendered = cookie.to_string();
        assert!(rendered.contains("Max-Age=0"), "unexpected cookie: {rendered}");
    }

    #[rstest]
    fn fingerprint_is_stable_and_short() {
        let credentials = Credentials::from_token("token-7");
        let fingerprint = credentials.fingerprint().expect("token present");
        assert_eq!(fingerprint.len(), FINGERPRINT_BYTES * 2);
        assert_eq!(credentials.fingerprint(), Some(fingerprint.clone()));
        assert!(!fingerprint.contains("token"));
    }
}
