//! Route gate authorizing every incoming page request.
//!
//! Runs before any protected handler: classifies the path, verifies the
//! caller's session against the backend and either passes the request
//! through or clears the stale credential and redirects to the identity
//! provider's login entry point. The gate never errors — every verification
//! failure becomes a redirect.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use reqwest::Url;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::VerifySession;
use crate::inbound::http::credentials::{AUTH_COOKIE, Credentials};

/// Path prefixes served without authentication in addition to the site root.
const DEFAULT_PUBLIC_PREFIXES: &[&str] = &["/public"];

/// Infrastructure prefixes excluded from classification entirely: API proxy
/// routes, probes and static assets handle credentials themselves.
const DEFAULT_BYPASS_PREFIXES: &[&str] = &["/api", "/health", "/static", "/icons", "/favicon.ico"];

/// Outcome of classifying an incoming path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Infrastructure path; the gate does not look at it.
    Bypass,
    /// Public page; always allowed.
    Public,
    /// Page requiring a verified session.
    Protected,
}

/// Classification rules for incoming paths.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    public_prefixes: Vec<String>,
    bypass_prefixes: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PREFIXES.iter().map(|prefix| (*prefix).to_owned()))
    }
}

impl RoutePolicy {
    /// Build a policy with the given public prefixes and the default bypass
    /// list.
    pub fn new(public_prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            public_prefixes: public_prefixes.into_iter().collect(),
            bypass_prefixes: DEFAULT_BYPASS_PREFIXES
                .iter()
                .map(|prefix| (*prefix).to_owned())
                .collect(),
        }
    }

    /// Classify `path` into bypass, public or protected.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self
            .bypass_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
            || path.ends_with(".png")
        {
            return RouteClass::Bypass;
        }
        if path == "/"
            || self
                .public_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return RouteClass::Public;
        }
        RouteClass::Protected
    }
}

/// Route gate middleware factory.
#[derive(Clone)]
pub struct RouteGate {
    config: Arc<GateConfig>,
}

struct GateConfig {
    policy: RoutePolicy,
    verifier: Arc<dyn VerifySession>,
    login_url: Url,
}

impl RouteGate {
    /// Build a gate redirecting unverified protected requests to
    /// `login_url`.
    pub fn new(policy: RoutePolicy, verifier: Arc<dyn VerifySession>, login_url: Url) -> Self {
        Self {
            config: Arc::new(GateConfig {
                policy,
                verifier,
                login_url,
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RouteGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GateMiddleware {
            service: Rc::new(service),
            config: Arc::clone(&self.config),
        }))
    }
}

/// Service wrapper produced by [`RouteGate`].
pub struct GateMiddleware<S> {
    service: Rc<S>,
    config: Arc<GateConfig>,
}

impl<S, B> Service<ServiceRequest> for GateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            match config.policy.classify(req.path()) {
                RouteClass::Bypass | RouteClass::Public => {
                    let res = service.call(req).await?;
                    return Ok(res.map_into_left_body());
                }
                RouteClass::Protected => {}
            }

            let request_id = Uuid::new_v4();
            let credential = req
                .request()
                .cookie(AUTH_COOKIE)
                .map(|cookie| cookie.value().to_owned());
            let verified = config.verifier.verify(credential.as_deref()).await;

            if verified {
                debug!(%request_id, path = req.path(), "session verified");
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            }

            warn!(
                %request_id,
                path = req.path(),
                "caller is not authenticated or is banned; clearing credential and redirecting to login"
            );
            let response = HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, config.login_url.as_str()))
                .cookie(Credentials::removal())
                .finish();
            Ok(req.into_response(response).map_into_right_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::{App, web};
    use async_trait::async_trait;
    use rstest::rstest;

    const LOGIN_URL: &str = "http://backend.test:8080/oauth2/authorization/google";

    /// Fixture verifier with a fixed verdict, recording what it saw.
    struct StubVerifier {
        verdict: bool,
        calls: AtomicUsize,
        seen: Mutex<Option<String>>,
    }

    impl StubVerifier {
        fn new(verdict: bool) -> Arc<Self> {
            Arc::new(Self {
                verdict,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl VerifySession for StubVerifier {
        async fn verify(&self, credential: Option<&str>) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut seen) = self.seen.lock() {
                *seen = credential.map(str::to_owned);
            }
            self.verdict
        }
    }

    fn gate(verifier: Arc<StubVerifier>) -> RouteGate {
        RouteGate::new(
            RoutePolicy::default(),
            verifier,
            Url::parse(LOGIN_URL).expect("valid login URL"),
        )
    }

    async fn call(
        verifier: Arc<StubVerifier>,
        path: &str,
        cookie: Option<Cookie<'static>>,
    ) -> ServiceResponse<EitherBody<actix_web::body::BoxBody>> {
        let app = actix_test::init_service(
            App::new()
                .wrap(gate(verifier))
                .route("/", web::get().to(HttpResponse::Ok))
                .route("/public/about", web::get().to(HttpResponse::Ok))
                .route("/dashboard", web::get().to(HttpResponse::Ok))
                .route("/api/events", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let mut req = actix_test::TestRequest::get().uri(path);
        if let Some(cookie) = cookie {
            req = req.cookie(cookie);
        }
        actix_test::call_service(&app, req.to_request()).await
    }

    #[rstest]
    #[case("/", RouteClass::Public)]
    #[case("/public", RouteClass::Public)]
    #[case("/public/about", RouteClass::Public)]
    #[case("/dashboard", RouteClass::Protected)]
    #[case("/event/42", RouteClass::Protected)]
    #[case("/profile", RouteClass::Protected)]
    #[case("/api/events", RouteClass::Bypass)]
    #[case("/health/live", RouteClass::Bypass)]
    #[case("/icons/logo.svg", RouteClass::Bypass)]
    #[case("/favicon.ico", RouteClass::Bypass)]
    #[case("/hero.png", RouteClass::Bypass)]
    fn classifies_paths(#[case] path: &str, #[case] expected: RouteClass) {
        assert_eq!(RoutePolicy::default().classify(path), expected);
    }

    #[actix_web::test]
    async fn protected_path_without_credential_redirects_to_login() {
        let verifier = StubVerifier::new(false);
        let res = call(Arc::clone(&verifier), "/dashboard", None).await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        assert_eq!(location, Some(LOGIN_URL));
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*verifier.seen.lock().expect("seen recorded"), None);
    }

    #[actix_web::test]
    async fn redirect_clears_the_credential_cookie() {
        let verifier = StubVerifier::new(false);
        let res = call(
            verifier,
            "/dashboard",
            Some(Cookie::new(AUTH_COOKIE, "stale-token")),
        )
        .await;

        let cleared = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == AUTH_COOKIE)
            .expect("removal cookie set");
        assert_eq!(cleared.value(), "");
        assert!(cleared.to_string().contains("Max-Age=0"));
    }

    #[actix_web::test]
    async fn invalid_credential_is_forwarded_to_the_verifier() {
        let verifier = StubVerifier::new(false);
        let res = call(
            Arc::clone(&verifier),
            "/dashboard",
            Some(Cookie::new(AUTH_COOKIE, "banned-token")),
        )
        .await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            verifier.seen.lock().expect("seen recorded").as_deref(),
            Some("banned-token")
        );
    }

    #[actix_web::test]
    async fn verified_request_passes_through_unmodified() {
        let verifier = StubVerifier::new(true);
        let res = call(
            Arc::clone(&verifier),
            "/dashboard",
            Some(Cookie::new(AUTH_COOKIE, "token-7")),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(header::LOCATION).is_none());
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn public_paths_skip_verification_entirely() {
        let verifier = StubVerifier::new(false);
        for path in ["/", "/public/about"] {
            let res = call(Arc::clone(&verifier), path, None).await;
            assert_eq!(res.status(), StatusCode::OK, "path {path} should pass");
        }
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn bypass_paths_skip_the_gate() {
        let verifier = StubVerifier::new(false);
        let res = call(Arc::clone(&verifier), "/api/events", None).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }
}
