//! Post-fetch personalization of a project
//!
//! Both steps are best effort. The caller decides how to report failures;
//! neither step should abort an otherwise successful scaffold.

use camino::Utf8Path;
use serde_json::Value;
use std::fs;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Example environment file shipped with templates
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Active environment file
pub const ENV_FILE: &str = ".env";

/// What happened to the environment file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileOutcome {
    /// `.env.example` was copied to `.env`
    Copied,
    /// The template has no `.env.example`
    ExampleMissing,
    /// `.env` already existed and was left alone
    AlreadyPresent,
}

/// Set the manifest's `name` field to `project_name`
///
/// Key order and the remaining fields are preserved. The file is rewritten
/// with two-space indentation and a trailing newline.
pub fn update_manifest_name(project_dir: &Utf8Path, project_name: &str) -> Result<()> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    debug!("Updating manifest name in {}", manifest_path);

    let content = fs::read_to_string(&manifest_path)?;
    let mut manifest: Value = serde_json::from_str(&content)?;

    let Some(fields) = manifest.as_object_mut() else {
        return Err(Error::invalid_manifest(
            manifest_path.as_str(),
            "top-level value is not an object",
        ));
    };
    fields.insert("name".to_string(), Value::String(project_name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');
    fs::write(&manifest_path, rendered)?;

    info!("Manifest name set to {}", project_name);
    Ok(())
}

/// Copy `.env.example` to `.env` unless `.env` already exists
pub fn copy_env_example(project_dir: &Utf8Path) -> Result<EnvFileOutcome> {
    let example = project_dir.join(ENV_EXAMPLE_FILE);
    let active = project_dir.join(ENV_FILE);

    if !example.is_file() {
        debug!("No {} in {}", ENV_EXAMPLE_FILE, project_dir);
        return Ok(EnvFileOutcome::ExampleMissing);
    }
    if active.exists() {
        debug!("{} already exists, leaving it untouched", active);
        return Ok(EnvFileOutcome::AlreadyPresent);
    }

    fs::copy(&example, &active)?;
    info!("Created {} from {}", ENV_FILE, ENV_EXAMPLE_FILE);
    Ok(EnvFileOutcome::Copied)
}
