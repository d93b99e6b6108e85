//! Configuration loader with embedded defaults and environment overrides

use rust_embed::RustEmbed;
use std::env;

use super::RuntimeConfig;
use crate::error::{Error, Result};

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "runtime-defaults.yaml";

pub const ENV_REPO_OWNER: &str = "PAYLOAD_TEMPLATES_REPO_OWNER";
pub const ENV_REPO_NAME: &str = "PAYLOAD_TEMPLATES_REPO_NAME";
pub const ENV_REF: &str = "PAYLOAD_TEMPLATES_REF";
pub const ENV_ARCHIVE_URL: &str = "PAYLOAD_TEMPLATES_ARCHIVE_URL";
pub const ENV_PACKAGE_MANAGER: &str = "PAYLOAD_TEMPLATES_PACKAGE_MANAGER";

/// Loads [`RuntimeConfig`]
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self
    }

    /// Load embedded defaults, then apply environment overrides
    pub fn load(&self) -> Result<RuntimeConfig> {
        let config = Self::load_embedded_defaults()?;
        let config = self.apply_env_overrides(config)?;
        tracing::debug!(
            owner = %config.source.repo_owner,
            repo = %config.source.repo_name,
            reference = %config.source.reference,
            "runtime config loaded"
        );
        Ok(config)
    }

    /// Load only the embedded defaults
    pub fn load_embedded_defaults() -> Result<RuntimeConfig> {
        let embedded_file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        Ok(serde_yaml_ng::from_str(content)?)
    }

    fn apply_env_overrides(&self, mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Some(val) = non_empty_var(ENV_REPO_OWNER) {
            config.source.repo_owner = val;
        }

        if let Some(val) = non_empty_var(ENV_REPO_NAME) {
            config.source.repo_name = val;
        }

        if let Some(val) = non_empty_var(ENV_REF) {
            config.source.reference = val;
        }

        if let Some(val) = non_empty_var(ENV_ARCHIVE_URL) {
            if !(val.starts_with("https://") || val.starts_with("http://")) {
                return Err(Error::invalid_config(format!(
                    "{} must be an http(s) URL",
                    ENV_ARCHIVE_URL
                )));
            }
            config.source.archive_base_url = val.trim_end_matches('/').to_string();
        }

        if let Some(val) = non_empty_var(ENV_PACKAGE_MANAGER) {
            let pm = val.parse().map_err(|_| {
                Error::invalid_config(format!(
                    "{} must be one of: pnpm, npm, yarn, bun",
                    ENV_PACKAGE_MANAGER
                ))
            })?;
            config.install.package_manager = Some(pm);
        }

        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PackageManager;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            ENV_REPO_OWNER,
            ENV_REPO_NAME,
            ENV_REF,
            ENV_ARCHIVE_URL,
            ENV_PACKAGE_MANAGER,
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.source.repo_owner, "Lotus015");
        assert_eq!(config.source.repo_name, "payload-templates");
        assert_eq!(config.source.reference, "HEAD");
        assert_eq!(config.source.archive_base_url, "https://codeload.github.com");
        assert!(config.install.package_manager.is_none());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(ENV_REPO_OWNER, "acme");
        env::set_var(ENV_REPO_NAME, "firm-starters");
        env::set_var(ENV_REF, "v2");
        env::set_var(ENV_ARCHIVE_URL, "http://127.0.0.1:8080/");
        env::set_var(ENV_PACKAGE_MANAGER, "npm");

        let config = ConfigLoader::new().load().unwrap();
        clear_env();

        assert_eq!(config.source.repo_owner, "acme");
        assert_eq!(config.source.repo_name, "firm-starters");
        assert_eq!(config.source.reference, "v2");
        assert_eq!(config.source.archive_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.install.package_manager, Some(PackageManager::Npm));
    }

    #[test]
    #[serial]
    fn test_empty_env_values_are_ignored() {
        clear_env();
        env::set_var(ENV_REPO_OWNER, "  ");

        let config = ConfigLoader::new().load().unwrap();
        clear_env();

        assert_eq!(config.source.repo_owner, "Lotus015");
    }

    #[test]
    #[serial]
    fn test_invalid_package_manager() {
        clear_env();
        env::set_var(ENV_PACKAGE_MANAGER, "cargo");

        let result = ConfigLoader::new().load();
        clear_env();

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    #[serial]
    fn test_invalid_archive_url() {
        clear_env();
        env::set_var(ENV_ARCHIVE_URL, "ftp://example.com");

        let result = ConfigLoader::new().load();
        clear_env();

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
