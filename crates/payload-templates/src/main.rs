//! payload-templates - scaffold a law firm website from a template
//!
//! This is the main entry point for the command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;
mod report;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use commands::create::Outcome;
use payload_templates_core::ConfigLoader;
use prompt::DialoguerPrompter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = match Cli::try_parse_with_templates() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help goes to stdout and is a success
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();
    prompt::install_interrupt_handler();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("Error: {:#}", e));
            println!();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

    let mut prompter = DialoguerPrompter::new();
    match commands::create::run(cli.into(), &config, &cwd, &mut prompter).await? {
        Outcome::Created {
            target_dir,
            package_manager,
            installed,
        } => debug!(
            "Created {} (package manager: {}, installed: {})",
            target_dir, package_manager, installed
        ),
        Outcome::Cancelled => debug!("Cancelled by user"),
    }
    Ok(())
}

/// Initialize tracing on stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
