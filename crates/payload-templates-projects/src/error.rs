//! Error types for payload-templates-projects

use payload_templates_core::ValidationError;
use thiserror::Error;

/// Result type alias using payload-templates-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template slug not in the registry
    #[error("Unknown template: {template}. Available templates: {available}")]
    UnknownTemplate { template: String, available: String },

    /// Project name rejected by validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Remote repository or reference does not exist
    #[error("Template repository not found: {url}")]
    TemplateNotFound { url: String },

    /// Template subdirectory missing from the downloaded archive
    #[error("Could not find directory '{subpath}' in the template repository")]
    SubpathNotFound { subpath: String },

    /// Archive entry that would escape the target directory
    #[error("Refusing to extract unsafe path: {path}")]
    UnsafeArchivePath { path: String },

    /// Unexpected HTTP status from the archive server
    #[error("Download failed with HTTP {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// Transport-level download failure
    #[error("Download failed: {0}")]
    Download(#[from] reqwest::Error),

    /// Manifest file missing or malformed
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Package manager not on PATH
    #[error("Package manager not found: {name}")]
    PackageManagerNotFound { name: String },

    /// Install command exited unsuccessfully
    #[error("'{command}' failed: {message}")]
    InstallFailed { command: String, message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] payload_templates_core::Error),
}

impl Error {
    /// Create an unknown template error
    pub fn unknown_template(template: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownTemplate {
            template: template.into(),
            available: available.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(url: impl Into<String>) -> Self {
        Self::TemplateNotFound { url: url.into() }
    }

    /// Create a subpath not found error
    pub fn subpath_not_found(subpath: impl Into<String>) -> Self {
        Self::SubpathNotFound {
            subpath: subpath.into(),
        }
    }

    /// Create an unsafe archive path error
    pub fn unsafe_archive_path(path: impl Into<String>) -> Self {
        Self::UnsafeArchivePath { path: path.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a package manager not found error
    pub fn package_manager_not_found(name: impl Into<String>) -> Self {
        Self::PackageManagerNotFound { name: name.into() }
    }

    /// Create an install failed error
    pub fn install_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InstallFailed {
            command: command.into(),
            message: message.into(),
        }
    }
}
