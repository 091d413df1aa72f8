//! Server configuration through functional options.
//!
//! [`Server::new`] starts from sensible defaults and applies each
//! [`ServerOption`] in order. Options validate their own argument; the
//! assembled configuration is validated once more before the server is
//! returned.
//!
//! ```rust
//! use std::time::Duration;
//! use strainer::server::*;
//!
//! let server = Server::new([
//!     with_host("api.example.com"),
//!     with_port(443),
//!     with_tls("/path/to/cert.pem", "/path/to/key.pem"),
//!     with_max_connections(500),
//! ])?;
//! assert!(server.tls_enabled());
//! assert_eq!(server.timeout(), Duration::from_secs(30));
//!
//! let err = Server::new([with_port(99999)]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "failed to apply option: port must be between 1 and 65535, got 99999"
//! );
//! # Ok::<(), strainer::error::ConfigError>(())
//! ```

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, OptionError};
use crate::predicate::{ensure, ge, not_empty, positive};

/// A deferred change to a [`ServerConfig`].
pub type ServerOption = Box<dyn FnOnce(&mut ServerConfig) -> Result<(), OptionError> + Send>;

/// Certificate and key locations for TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TlsFiles {
    /// PEM certificate path.
    pub cert_file: String,
    /// PEM private key path.
    pub key_file: String,
}

/// Plain server settings.
///
/// Usually assembled through options, but can also be written out directly
/// (or deserialized with the `serde` feature) and passed to
/// [`Server::from_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// General request timeout.
    pub timeout: Duration,
    /// Connection limit.
    pub max_connections: usize,
    /// TLS files, if TLS is enabled.
    pub tls: Option<TlsFiles>,
    /// Middleware names, in installation order.
    pub middleware: Vec<String>,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Write timeout.
    pub write_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            timeout: Duration::from_secs(30),
            max_connections: 100,
            tls: None,
            middleware: Vec::new(),
            read_timeout: Duration::from_secs(15),
            write_timeout: Duration::from_secs(15),
        }
    }
}

impl ServerConfig {
    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), OptionError> {
        if self.port == 0 {
            return Err(OptionError::PortOutOfRange(0));
        }
        if self.max_connections == 0 {
            return Err(OptionError::TooFewConnections(self.max_connections));
        }
        if let Some(tls) = &self.tls {
            if tls.cert_file.is_empty() || tls.key_file.is_empty() {
                return Err(OptionError::MissingTlsFiles);
            }
        }
        Ok(())
    }
}

/// Set the bind host. Rejects an empty host.
pub fn with_host(host: impl Into<String>) -> ServerOption {
    let host = host.into();
    Box::new(move |config| {
        config.host = ensure(host, not_empty(), OptionError::EmptyHost)?;
        Ok(())
    })
}

/// Set the bind port. Rejects anything outside 1..=65535.
pub fn with_port(port: u32) -> ServerOption {
    Box::new(move |config| {
        let valid = u16::try_from(port).map_err(|_| OptionError::PortOutOfRange(port))?;
        config.port = ensure(valid, positive(), OptionError::PortOutOfRange(port))?;
        Ok(())
    })
}

/// Set the general timeout.
pub fn with_timeout(timeout: Duration) -> ServerOption {
    Box::new(move |config| {
        config.timeout = timeout;
        Ok(())
    })
}

/// Set the read timeout.
pub fn with_read_timeout(timeout: Duration) -> ServerOption {
    Box::new(move |config| {
        config.read_timeout = timeout;
        Ok(())
    })
}

/// Set the write timeout.
pub fn with_write_timeout(timeout: Duration) -> ServerOption {
    Box::new(move |config| {
        config.write_timeout = timeout;
        Ok(())
    })
}

/// Set the connection limit. Must be at least one.
pub fn with_max_connections(max: usize) -> ServerOption {
    Box::new(move |config| {
        config.max_connections = ensure(max, ge(1), OptionError::TooFewConnections(max))?;
        Ok(())
    })
}

/// Enable TLS. Both paths must be non-empty.
pub fn with_tls(cert_file: impl Into<String>, key_file: impl Into<String>) -> ServerOption {
    let files = TlsFiles {
        cert_file: cert_file.into(),
        key_file: key_file.into(),
    };
    Box::new(move |config| {
        if files.cert_file.is_empty() || files.key_file.is_empty() {
            return Err(OptionError::MissingTlsFiles);
        }
        config.tls = Some(files);
        Ok(())
    })
}

/// Append middleware names. Repeated use accumulates.
pub fn with_middleware<I, S>(names: I) -> ServerOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    Box::new(move |config| {
        config.middleware.extend(names);
        Ok(())
    })
}

/// Apply several options as one, stopping at the first failure.
pub fn with_all(options: impl IntoIterator<Item = ServerOption>) -> ServerOption {
    let options: Vec<ServerOption> = options.into_iter().collect();
    Box::new(move |config| {
        for option in options {
            option(config)?;
        }
        Ok(())
    })
}

/// Production preset: public bind, high limits, longer timeouts.
pub fn production() -> ServerOption {
    with_all([
        with_host("0.0.0.0"),
        with_max_connections(1000),
        with_timeout(Duration::from_secs(60)),
        with_read_timeout(Duration::from_secs(30)),
        with_write_timeout(Duration::from_secs(30)),
        with_middleware(["logging", "recovery", "compression"]),
    ])
}

/// Development preset: local bind on port 3000, small limits.
pub fn development() -> ServerOption {
    with_all([
        with_host("localhost"),
        with_port(3000),
        with_max_connections(10),
        with_timeout(Duration::from_secs(5)),
        with_middleware(["logging", "debug"]),
    ])
}

/// A validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Apply `options` over the defaults, then validate.
    pub fn new(options: impl IntoIterator<Item = ServerOption>) -> Result<Self, ConfigError> {
        let mut config = ServerConfig::default();
        for option in options {
            option(&mut config).map_err(ConfigError::Option)?;
        }
        Self::from_config(config)
    }

    /// Validate a complete configuration.
    pub fn from_config(config: ServerConfig) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;
        tracing::debug!(host = %config.host, port = config.port, "server configured");
        Ok(Self { config })
    }

    /// Bind host.
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Bind port.
    pub fn port(&self) -> u16 {
        self.config.port
    }

    /// General timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Read timeout.
    pub fn read_timeout(&self) -> Duration {
        self.config.read_timeout
    }

    /// Write timeout.
    pub fn write_timeout(&self) -> Duration {
        self.config.write_timeout
    }

    /// Connection limit.
    pub fn max_connections(&self) -> usize {
        self.config.max_connections
    }

    /// Whether TLS is on.
    pub fn tls_enabled(&self) -> bool {
        self.config.tls.is_some()
    }

    /// TLS files, when TLS is on.
    pub fn tls(&self) -> Option<&TlsFiles> {
        self.config.tls.as_ref()
    }

    /// Installed middleware, in order.
    pub fn middleware(&self) -> &[String] {
        &self.config.middleware
    }

    /// The full configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Announce the configuration through `tracing`.
    ///
    /// No socket is opened; this only reports what would be served.
    pub fn start(&self) {
        let span = tracing::info_span!("server", host = %self.config.host, port = self.config.port);
        let _guard = span.enter();

        tracing::info!("starting server on {}:{}", self.config.host, self.config.port);
        tracing::info!(
            tls = self.tls_enabled(),
            max_connections = self.config.max_connections,
            "connection settings"
        );
        tracing::info!(
            timeout = ?self.config.timeout,
            read_timeout = ?self.config.read_timeout,
            write_timeout = ?self.config.write_timeout,
            "timeouts"
        );
        if !self.config.middleware.is_empty() {
            tracing::info!(middleware = ?self.config.middleware, "middleware installed");
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server{{Host: {}, Port: {}, TLS: {}, MaxConns: {}, Timeout: {:?}, Middleware: [{}]}}",
            self.config.host,
            self.config.port,
            if self.tls_enabled() { "enabled" } else { "disabled" },
            self.config.max_connections,
            self.config.timeout,
            self.config.middleware.join(" ")
        )
    }
}
