//! Gateway entry point: wires the route gate, session verification and the
//! typed backend clients into one HTTP server.

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use gateway::server::{self, GatewaySettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = GatewaySettings::load()
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    server::run(settings).await
}
