//! Scaffold plan and step runner
//!
//! The CLI drives a scaffold one step at a time so it can report progress
//! between steps: build a [`ProjectPlan`], [`Scaffolder::fetch`] the template,
//! then [`Scaffolder::post_process`] the result. Installing dependencies is a
//! separate, optional step (see [`crate::install`]).

use camino::{Utf8Path, Utf8PathBuf};
use payload_templates_core::config::SourceConfig;
use payload_templates_core::validation::{resolve_target_dir, validate_for_creation};
use payload_templates_core::{registry, PackageManager, RuntimeConfig, TemplateDescriptor};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fetch::{FetchObserver, FetchSummary, RemoteTemplate, TemplateFetcher};
use crate::install::detect_package_manager;
use crate::postprocess::{copy_env_example, update_manifest_name, EnvFileOutcome};

/// A validated request to create one project
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    template: &'static TemplateDescriptor,
    project_name: String,
    target_dir: Utf8PathBuf,
}

impl ProjectPlan {
    /// Validate the template slug and project name against `cwd`
    ///
    /// # Errors
    /// Returns error if:
    /// - `template` is not a registered template
    /// - `project_name` fails format validation
    /// - `cwd/project_name` already exists
    pub fn new(template: &str, project_name: &str, cwd: &Utf8Path) -> Result<Self> {
        let descriptor = registry::by_value(template)
            .ok_or_else(|| Error::unknown_template(template, registry::values().join(", ")))?;

        validate_for_creation(project_name, cwd)?;

        Ok(Self {
            template: descriptor,
            project_name: project_name.to_string(),
            target_dir: resolve_target_dir(project_name, cwd),
        })
    }

    /// Selected template
    pub fn template(&self) -> &'static TemplateDescriptor {
        self.template
    }

    /// Project name
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Directory the project is created in
    pub fn target_dir(&self) -> &Utf8Path {
        &self.target_dir
    }
}

/// Results of the best-effort post-processing steps
#[derive(Debug)]
pub struct PostProcessReport {
    /// Manifest `name` rewrite
    pub manifest: Result<()>,
    /// `.env` creation
    pub env_file: Result<EnvFileOutcome>,
}

impl PostProcessReport {
    /// Human-readable warnings for the steps that failed
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Err(e) = &self.manifest {
            warnings.push(format!("Could not update package.json name: {}", e));
        }
        if let Err(e) = &self.env_file {
            warnings.push(format!("Could not create .env from .env.example: {}", e));
        }
        warnings
    }
}

/// Runs the scaffold steps against a configured template source
#[derive(Debug, Clone)]
pub struct Scaffolder {
    fetcher: TemplateFetcher,
    source: SourceConfig,
    preferred_package_manager: Option<PackageManager>,
}

impl Scaffolder {
    /// Create a scaffolder from runtime config
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            fetcher: TemplateFetcher::new(&config.source.archive_base_url)?,
            source: config.source.clone(),
            preferred_package_manager: config.install.package_manager,
        })
    }

    /// Remote location of the plan's template
    pub fn remote_for(&self, plan: &ProjectPlan) -> RemoteTemplate {
        RemoteTemplate::from_source(&self.source, plan.template())
    }

    /// Download the plan's template into its target directory
    pub async fn fetch(
        &self,
        plan: &ProjectPlan,
        observer: &dyn FetchObserver,
    ) -> Result<FetchSummary> {
        let remote = self.remote_for(plan);
        self.fetcher.fetch(&remote, plan.target_dir(), observer).await
    }

    /// Rewrite the manifest name and create `.env`; failures are collected, not raised
    pub fn post_process(&self, plan: &ProjectPlan) -> PostProcessReport {
        let manifest = update_manifest_name(plan.target_dir(), plan.project_name());
        if let Err(e) = &manifest {
            debug!("Manifest update failed: {}", e);
        }

        let env_file = copy_env_example(plan.target_dir());
        if let Err(e) = &env_file {
            debug!("Environment file setup failed: {}", e);
        }

        PostProcessReport { manifest, env_file }
    }

    /// Package manager to install the plan's dependencies with
    pub fn package_manager(&self, plan: &ProjectPlan) -> PackageManager {
        detect_package_manager(plan.target_dir(), self.preferred_package_manager)
    }
}
