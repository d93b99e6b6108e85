//! # payload-templates-core
//!
//! Core library for the payload-templates CLI providing:
//! - The fixed registry of law-firm website templates
//! - Project name validation (format-only and format-plus-directory)
//! - Runtime configuration with embedded defaults and environment overrides
//! - Shared types such as the supported package managers

pub mod config;
pub mod error;
pub mod registry;
pub mod types;
pub mod validation;

pub use config::{ConfigLoader, RuntimeConfig};
pub use error::{Error, Result};
pub use registry::TemplateDescriptor;
pub use types::PackageManager;
pub use validation::ValidationError;
