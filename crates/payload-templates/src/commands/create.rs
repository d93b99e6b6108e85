//! Create a project from a template

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use payload_templates_core::validation::validate_for_creation;
use payload_templates_core::{registry, PackageManager, RuntimeConfig};
use payload_templates_projects::fetch::{FetchEvent, FetchObserver, TracingFetchObserver};
use payload_templates_projects::install::{install_command, install_dependencies, is_available};
use payload_templates_projects::postprocess::EnvFileOutcome;
use payload_templates_projects::scaffold::{ProjectPlan, Scaffolder};
use tracing::debug;

use crate::output;
use crate::prompt::Prompter;
use crate::report;

/// Arguments for creating a project
#[derive(Debug, Default)]
pub struct CreateArgs {
    /// Pre-fills the project name prompt
    pub project_name: Option<String>,
}

/// How a create run ended
#[derive(Debug)]
pub enum Outcome {
    Created {
        target_dir: Utf8PathBuf,
        package_manager: PackageManager,
        installed: bool,
    },
    Cancelled,
}

/// Prompt for a template and name, then fetch and personalize the project
pub async fn run(
    args: CreateArgs,
    config: &RuntimeConfig,
    cwd: &Utf8Path,
    prompter: &mut dyn Prompter,
) -> Result<Outcome> {
    output::lines(&report::banner());

    let Some(template) =
        prompter.select_template(registry::list(), registry::default_template())?
    else {
        output::cancelled();
        return Ok(Outcome::Cancelled);
    };
    debug!("Selected template: {}", template.value);

    let validate = |name: &str| validate_for_creation(name, cwd);
    let initial = args.project_name.as_deref().unwrap_or_default();
    let Some(project_name) = prompter.project_name(initial, &validate)? else {
        output::cancelled();
        return Ok(Outcome::Cancelled);
    };

    let plan = ProjectPlan::new(template.value, &project_name, cwd)
        .context("Project cannot be created")?;
    let scaffolder =
        Scaffolder::from_config(config).context("Failed to initialize template download")?;

    println!();
    let spinner = output::spinner(&format!("Cloning {} template...", template.title));
    let observer = |event: &FetchEvent| match event {
        FetchEvent::DestinationNotEmpty { .. } => {
            spinner.suspend(|| output::warning("Destination not empty"));
        }
        other => TracingFetchObserver.on_event(other),
    };

    let fetched = scaffolder.fetch(&plan, &observer).await;
    spinner.finish_and_clear();

    match fetched {
        Ok(summary) => {
            debug!(
                "Wrote {} files ({} byte archive) to {}",
                summary.files, summary.bytes, summary.destination
            );
            output::success("Template cloned successfully");
        }
        Err(e) => {
            output::lines(&report::fetch_failure_hints(&e));
            return Err(anyhow::Error::new(e).context("Failed to fetch template"));
        }
    }

    let post = scaffolder.post_process(&plan);
    for warning in post.warnings() {
        output::warning(&warning);
    }
    if post.manifest.is_ok() {
        output::success(&format!("Set package.json name to {}", plan.project_name()));
    }
    if let Ok(EnvFileOutcome::Copied) = post.env_file {
        output::success("Created .env from .env.example");
    }

    let package_manager = scaffolder.package_manager(&plan);
    let installed = install(prompter, &plan, package_manager)?;

    output::lines(&report::next_steps(
        plan.project_name(),
        package_manager,
        installed,
    ));

    Ok(Outcome::Created {
        target_dir: plan.target_dir().to_path_buf(),
        package_manager,
        installed,
    })
}

/// Offer to install dependencies; returns whether they were installed
fn install(prompter: &mut dyn Prompter, plan: &ProjectPlan, pm: PackageManager) -> Result<bool> {
    if !is_available(pm) {
        output::warning(&format!(
            "{} was not found on PATH, skipping dependency install",
            pm
        ));
        return Ok(false);
    }

    let command = install_command(pm);
    if prompter.confirm_install(&command)? != Some(true) {
        output::info("Skipping dependency install");
        return Ok(false);
    }

    println!();
    match install_dependencies(plan.target_dir(), pm) {
        Ok(()) => {
            output::success("Dependencies installed");
            Ok(true)
        }
        Err(e) => {
            output::warning(&format!("Dependency install failed: {}", e));
            output::lines(&report::install_recovery(plan.project_name(), pm));
            Ok(false)
        }
    }
}
