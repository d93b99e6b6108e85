//! Interactive prompts
//!
//! Every prompt returns `Ok(None)` when the user cancels it, so the caller can
//! exit cleanly instead of treating the abort as an error. Ctrl-C surfaces as
//! an interrupted read once [`install_interrupt_handler`] has run.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use payload_templates_core::{TemplateDescriptor, ValidationError};
use std::io::ErrorKind;

use crate::report;

/// Questions asked while creating a project
pub trait Prompter {
    /// Pick a template, starting with `default` highlighted
    fn select_template(
        &mut self,
        templates: &'static [TemplateDescriptor],
        default: &'static TemplateDescriptor,
    ) -> Result<Option<&'static TemplateDescriptor>>;

    /// Ask for a project name, re-asking until `validate` accepts it
    fn project_name(
        &mut self,
        initial: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), ValidationError>,
    ) -> Result<Option<String>>;

    /// Ask whether to run `command`
    fn confirm_install(&mut self, command: &str) -> Result<Option<bool>>;
}

/// Keep Ctrl-C from killing the process while a prompt reads the terminal
///
/// console re-raises SIGINT when it reads `^C`; with a handler in place the
/// read fails with [`ErrorKind::Interrupted`] instead, which the prompts
/// below turn into a cancellation.
pub fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {}) {
        tracing::debug!("Could not install Ctrl-C handler: {}", e);
    }
}

/// Terminal prompts built on dialoguer
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select_template(
        &mut self,
        templates: &'static [TemplateDescriptor],
        default: &'static TemplateDescriptor,
    ) -> Result<Option<&'static TemplateDescriptor>> {
        let items: Vec<String> = templates.iter().map(report::template_choice).collect();
        let default_index = templates.iter().position(|t| t == default).unwrap_or(0);

        let selection = cancel_on_interrupt(
            Select::new()
                .with_prompt("Select a template")
                .items(&items)
                .default(default_index)
                .interact_opt(),
        )?;

        Ok(selection.and_then(|index| templates.get(index)))
    }

    fn project_name(
        &mut self,
        initial: &str,
        validate: &dyn Fn(&str) -> std::result::Result<(), ValidationError>,
    ) -> Result<Option<String>> {
        // allow_empty lets the validator report the missing name itself
        let answer = Input::<String>::new()
            .with_prompt("Project name")
            .with_initial_text(initial)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input))
            .interact_text()
            .map(Some);

        cancel_on_interrupt(answer)
    }

    fn confirm_install(&mut self, command: &str) -> Result<Option<bool>> {
        cancel_on_interrupt(
            Confirm::new()
                .with_prompt(format!("Install dependencies now ({})?", command))
                .default(true)
                .interact_opt(),
        )
    }
}

/// Treat an interrupted read like Esc: no answer, cursor restored
fn cancel_on_interrupt<T>(
    answer: std::result::Result<Option<T>, dialoguer::Error>,
) -> Result<Option<T>> {
    match answer {
        Ok(Some(value)) => Ok(Some(value)),
        Ok(None) => {
            restore_cursor();
            Ok(None)
        }
        Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
            restore_cursor();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// dialoguer hides the cursor while a prompt is active
fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}
