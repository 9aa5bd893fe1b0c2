//! Gateway configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PUBLIC_PATHS: &str = "/public";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Configuration values controlling the gateway at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct GatewaySettings {
    /// Origin of the community-events backend.
    pub backend_url: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Comma-separated path prefixes served without authentication.
    pub public_paths: Option<String>,
    /// Timeout for outbound backend calls, in seconds.
    pub request_timeout_seconds: Option<u64>,
}

impl GatewaySettings {
    /// Return the configured backend origin, falling back to the default.
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured public path prefixes.
    pub fn public_paths(&self) -> Vec<String> {
        self.public_paths
            .as_deref()
            .unwrap_or(DEFAULT_PUBLIC_PATHS)
            .split(',')
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Return the outbound request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_seconds
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for gateway configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> GatewaySettings {
        GatewaySettings::load_from_iter([OsString::from("gateway")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("GATEWAY_BACKEND_URL", None::<String>),
            ("GATEWAY_BIND_ADDR", None::<String>),
            ("GATEWAY_PUBLIC_PATHS", None::<String>),
            ("GATEWAY_REQUEST_TIMEOUT_SECONDS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.public_paths(), vec!["/public".to_owned()]);
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("GATEWAY_BACKEND_URL", Some("http://events.test:9090".to_owned())),
            ("GATEWAY_BIND_ADDR", Some("127.0.0.1:4000".to_owned())),
            ("GATEWAY_PUBLIC_PATHS", Some("/public, /about".to_owned())),
            ("GATEWAY_REQUEST_TIMEOUT_SECONDS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.backend_url(), "http://events.test:9090");
        assert_eq!(settings.bind_addr(), "127.0.0.1:4000");
        assert_eq!(
            settings.public_paths(),
            vec!["/public".to_owned(), "/about".to_owned()]
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));
    }

    #[rstest]
    fn blank_public_path_entries_are_dropped() {
        let _guard = lock_env([
            ("GATEWAY_BACKEND_URL", None::<String>),
            ("GATEWAY_BIND_ADDR", None::<String>),
            ("GATEWAY_PUBLIC_PATHS", Some(",/public,,".to_owned())),
            ("GATEWAY_REQUEST_TIMEOUT_SECONDS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.public_paths(), vec!["/public".to_owned()]);
    }
}
