//! Runtime configuration
//!
//! Settings are resolved with the following precedence (low to high):
//! 1. Embedded defaults (`embedded/config/runtime-defaults.yaml`)
//! 2. Environment variables (`PAYLOAD_TEMPLATES_*` prefix)
//!
//! Nothing is read from or written to the user's home directory.

mod loader;

pub use loader::{
    ConfigLoader, ENV_ARCHIVE_URL, ENV_PACKAGE_MANAGER, ENV_REF, ENV_REPO_NAME, ENV_REPO_OWNER,
};

use serde::Deserialize;

use crate::types::PackageManager;

/// Resolved runtime configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Where templates are downloaded from
    pub source: SourceConfig,

    /// Dependency installation settings
    #[serde(default)]
    pub install: InstallConfig,
}

/// Remote template repository settings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceConfig {
    /// Repository owner
    pub repo_owner: String,

    /// Repository name
    pub repo_name: String,

    /// Git reference (branch, tag, commit or `HEAD`) to download
    #[serde(default = "default_reference")]
    pub reference: String,

    /// Base URL serving `{owner}/{repo}/tar.gz/{reference}` archives
    pub archive_base_url: String,
}

fn default_reference() -> String {
    "HEAD".to_string()
}

/// Dependency installation settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstallConfig {
    /// Force a package manager instead of detecting it from the template
    #[serde(default)]
    pub package_manager: Option<PackageManager>,
}
