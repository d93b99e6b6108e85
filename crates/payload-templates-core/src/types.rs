//! Shared types

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// JavaScript package managers the CLI can install dependencies with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Get all supported package managers
    pub fn all() -> [Self; 4] {
        [Self::Pnpm, Self::Npm, Self::Yarn, Self::Bun]
    }

    /// Executable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Lockfiles that identify this package manager
    pub fn lockfiles(&self) -> &'static [&'static str] {
        match self {
            Self::Pnpm => &["pnpm-lock.yaml"],
            Self::Npm => &["package-lock.json"],
            Self::Yarn => &["yarn.lock"],
            Self::Bun => &["bun.lockb", "bun.lock"],
        }
    }

    /// Command line for running a package.json script, e.g. `npm run dev`
    pub fn run_script(&self, script: &str) -> String {
        match self {
            Self::Npm => format!("npm run {}", script),
            other => format!("{} {}", other.as_str(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|pm| pm.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_package_manager(s))
    }
}
