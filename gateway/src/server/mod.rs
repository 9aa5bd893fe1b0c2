//! HTTP server assembly.
//!
//! Builds the backend clients, the session verifier and the route gate from
//! [`GatewaySettings`], then runs the actix server until shutdown.

pub mod config;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use reqwest::Url;
use tracing::info;

use crate::domain::{SessionVerifier, VerifySession};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::{HttpState, routes};
use crate::middleware::{RouteGate, RoutePolicy};
use crate::outbound::backend::{BackendClient, HttpIdentityGateway};

pub use config::GatewaySettings;

/// Backend path of the identity provider's authorization entry point.
const OAUTH_ENTRY_PATH: &str = "oauth2/authorization/google";

/// Run the gateway until shutdown.
///
/// # Errors
///
/// Returns an error when the configuration is unusable or the listener
/// cannot bind.
pub async fn run(settings: GatewaySettings) -> std::io::Result<()> {
    let base = Url::parse(settings.backend_url()).map_err(|error| {
        std::io::Error::other(format!(
            "invalid backend URL {}: {error}",
            settings.backend_url()
        ))
    })?;
    let login_url = base
        .join(OAUTH_ENTRY_PATH)
        .map_err(|error| std::io::Error::other(format!("invalid login URL: {error}")))?;

    let client = BackendClient::with_timeout(base.clone(), settings.request_timeout())
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let identity = HttpIdentityGateway::new(&base, settings.request_timeout())
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let verifier: Arc<dyn VerifySession> = Arc::new(SessionVerifier::new(identity));
    let gate = RouteGate::new(
        RoutePolicy::new(settings.public_paths()),
        verifier,
        login_url,
    );

    let state = web::Data::new(HttpState::new(client));
    let health = web::Data::new(HealthState::new());
    let server_health = health.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(gate.clone())
            .app_data(state.clone())
            .app_data(server_health.clone())
            .configure(routes::configure)
    })
    .bind(settings.bind_addr())?;

    health.mark_ready();
    info!(
        addr = settings.bind_addr(),
        backend = %base,
        "gateway listening"
    );
    server.run().await
}
