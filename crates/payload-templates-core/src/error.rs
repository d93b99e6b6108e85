//! Error types for payload-templates-core

use thiserror::Error;

/// Result type alias using payload-templates-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    /// Embedded configuration file missing from the binary
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Unknown package manager name
    #[error("Unknown package manager: {name}. Valid package managers: pnpm, npm, yarn, bun")]
    UnknownPackageManager { name: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown package manager error
    pub fn unknown_package_manager(name: impl Into<String>) -> Self {
        Self::UnknownPackageManager { name: name.into() }
    }
}
