//! # payload-templates-projects
//!
//! Project scaffolding library for the payload-templates CLI providing:
//! - Template download from a remote repository subdirectory (no git history, no cache)
//! - Post-processing of the fetched project (manifest name, `.env` file)
//! - Package manager detection and dependency installation
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use payload_templates_core::ConfigLoader;
//! use payload_templates_projects::fetch::TracingFetchObserver;
//! use payload_templates_projects::scaffold::{ProjectPlan, Scaffolder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load()?;
//! let plan = ProjectPlan::new("modern", "my-firm", Utf8Path::new("/work"))?;
//!
//! let scaffolder = Scaffolder::from_config(&config)?;
//! scaffolder.fetch(&plan, &TracingFetchObserver).await?;
//! let report = scaffolder.post_process(&plan);
//! # let _ = report;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod install;
pub mod postprocess;
pub mod scaffold;

pub use error::{Error, Result};
