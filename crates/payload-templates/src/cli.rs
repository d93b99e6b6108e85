//! CLI argument parsing with clap

use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

use crate::commands::create::CreateArgs;
use crate::report;

/// Create a law firm website with Next.js, Payload CMS, and shadcn/ui
#[derive(Parser, Debug)]
#[command(name = "payload-templates")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Directory name for the new project (prompted for when omitted)
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,
}

impl Cli {
    /// Clap command with the template list appended to `--help`
    pub fn command_with_templates() -> clap::Command {
        Self::command().after_help(report::help_epilog())
    }

    /// Parse process arguments
    pub fn try_parse_with_templates() -> Result<Self, clap::Error> {
        Self::try_parse_from_with_templates(std::env::args_os())
    }

    /// Parse the given arguments
    pub fn try_parse_from_with_templates<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_with_templates().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

impl From<Cli> for CreateArgs {
    fn from(cli: Cli) -> Self {
        Self {
            project_name: cli.project_name,
        }
    }
}
