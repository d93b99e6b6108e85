//! Project name validation
//!
//! Two checks are exposed:
//! - [`validate_format`] is pure and never touches the filesystem
//! - [`validate_for_creation`] runs the format rules, then rejects names whose
//!   target directory already exists under the given working directory

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex is valid"));

/// Reasons a project name is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty or whitespace-only name
    #[error("Project name is required")]
    Required,

    /// Name contains a space character
    #[error("Project name cannot contain spaces")]
    ContainsSpace,

    /// Name contains a character outside `[A-Za-z0-9_-]`
    #[error("Project name can only contain letters, numbers, hyphens, and underscores")]
    InvalidChars,

    /// Target directory already exists
    #[error("Directory \"{name}\" already exists")]
    DirectoryExists { name: String },
}

/// Check the project name format; first failing rule wins
pub fn validate_format(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if name.contains(' ') {
        return Err(ValidationError::ContainsSpace);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidChars);
    }
    Ok(())
}

/// Check the format, then that `cwd/name` does not exist yet
pub fn validate_for_creation(name: &str, cwd: &Utf8Path) -> Result<(), ValidationError> {
    validate_format(name)?;

    if resolve_target_dir(name, cwd).exists() {
        return Err(ValidationError::DirectoryExists {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Resolve the directory a project named `name` is created in
pub fn resolve_target_dir(name: &str, cwd: &Utf8Path) -> Utf8PathBuf {
    cwd.join(name)
}
