//! Error types for the construction helpers.
//!
//! The predicate core is total and never fails; only the validating
//! [`ComputerBuilder`](crate::computer::ComputerBuilder) and the option-driven
//! [`Server`](crate::server::Server) report errors.

use thiserror::Error;

/// Why a [`ComputerBuilder`](crate::computer::ComputerBuilder) refused to build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No CPU was set.
    #[error("CPU is required")]
    MissingCpu,

    /// RAM was left at zero.
    #[error("RAM must be greater than 0")]
    NoRam,

    /// Storage was left at zero.
    #[error("storage must be greater than 0")]
    NoStorage,

    /// No operating system was set.
    #[error("OS is required")]
    MissingOs,

    /// RAM above the supported maximum.
    #[error("RAM exceeds maximum allowed ({max}GB): {requested}GB")]
    RamTooLarge {
        /// Requested RAM in GB.
        requested: u32,
        /// Largest accepted value in GB.
        max: u32,
    },

    /// Storage above the supported maximum.
    #[error("storage exceeds maximum allowed ({max}GB): {requested}GB")]
    StorageTooLarge {
        /// Requested storage in GB.
        requested: u32,
        /// Largest accepted value in GB.
        max: u32,
    },
}

/// A single server option rejected its argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// Host was empty.
    #[error("host cannot be empty")]
    EmptyHost,

    /// Port outside 1..=65535.
    #[error("port must be between 1 and 65535, got {0}")]
    PortOutOfRange(u32),

    /// Connection limit below one.
    #[error("maxConnections must be at least 1, got {0}")]
    TooFewConnections(usize),

    /// TLS was requested without both files.
    #[error("cert and key files must be provided")]
    MissingTlsFiles,
}

/// Server construction failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An option could not be applied.
    #[error("failed to apply option: {0}")]
    Option(#[source] OptionError),

    /// The assembled configuration is inconsistent.
    #[error("invalid server configuration: {0}")]
    Invalid(#[source] OptionError),
}

impl ConfigError {
    /// The underlying option-level cause.
    pub fn cause(&self) -> &OptionError {
        match self {
            Self::Option(e) | Self::Invalid(e) => e,
        }
    }
}
