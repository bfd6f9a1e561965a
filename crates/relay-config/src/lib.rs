//! Startup configuration for the users relay.
//!
//! The listening port is the only value taken from the environment. The
//! upstream document URL and the outbound timeout are compiled in; tests
//! override them through the builder methods on [`RelayConfig`].
//!
//! ```rust
//! use relay_config::RelayConfig;
//!
//! let config = RelayConfig::from_port_var(Some("8080")).unwrap();
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::time::Duration;

/// Environment variable selecting the listening port.
pub const PORT_VAR: &str = "PORT";

/// Port used when [`PORT_VAR`] is unset or empty.
pub const DEFAULT_PORT: u16 = 5000;

/// Static members document relayed by `/api/users`.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Upper bound on a single outbound fetch.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration loading errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// `PORT` was set to something that is not a TCP port number.
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Values fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// TCP port the listener binds on all interfaces.
    pub port: u16,
    /// Document fetched for every inbound request.
    pub upstream_url: String,
    /// Timeout applied to the outbound request, connect through body.
    pub upstream_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

impl RelayConfig {
    /// Reads [`PORT_VAR`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(PORT_VAR).ok();
        Self::from_port_var(raw.as_deref())
    }

    /// Builds a config from the raw value of [`PORT_VAR`].
    ///
    /// `None` and the empty string both select [`DEFAULT_PORT`].
    pub fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let port = match raw.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
                value: value.to_string(),
                source,
            })?,
        };

        Ok(Self {
            port,
            ..Self::default()
        })
    }

    /// Points the relay at a different document.
    pub fn with_upstream(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    /// Overrides the outbound timeout.
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
