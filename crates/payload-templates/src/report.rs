//! Text shown to the user: banner, help epilog, prompt labels and summaries
//!
//! Builders return strings so they can be checked with colors disabled.

use console::style;
use payload_templates_core::registry::{self, TemplateDescriptor};
use payload_templates_core::PackageManager;
use payload_templates_projects::Error as ProjectError;

const REPOSITORY_URL: &str = "https://github.com/Lotus015/payload-templates";

/// Welcome banner
pub fn banner() -> Vec<String> {
    let edge = |s: &str| style(s.to_string()).blue().bold().to_string();
    vec![
        String::new(),
        edge("  ╭─────────────────────────────────────────╮"),
        edge("  │                                         │"),
        format!(
            "{}{}{}",
            edge("  │"),
            style("       Payload Templates CLI             ").white().bold(),
            edge("│")
        ),
        edge("  │                                         │"),
        edge("  ╰─────────────────────────────────────────╯"),
        String::new(),
        format!(
            "  {}",
            style("Create a law firm website with Next.js, Payload CMS, and shadcn/ui").dim()
        ),
        String::new(),
    ]
}

/// Sections appended to `--help`
pub fn help_epilog() -> String {
    let mut text = String::new();

    text.push_str(&format!("{}\n", style("Templates:").bold().underlined()));
    for template in registry::list() {
        text.push_str(&format!(
            "  {} {}\n",
            style(format!("{:12}", template.title)).cyan(),
            template.description
        ));
    }

    text.push_str(&format!("\n{}\n", style("Examples:").bold().underlined()));
    text.push_str("  payload-templates\n");
    text.push_str("  payload-templates my-law-firm\n");

    text.push_str(&format!("\n{}\n", style("Learn more:").bold().underlined()));
    text.push_str(&format!("  {}", REPOSITORY_URL));

    text
}

/// Select-list label for a template
pub fn template_choice(template: &TemplateDescriptor) -> String {
    format!(
        "{} {} {}",
        style(format!("{:12}", template.title)).bold(),
        style(format!("({})", template.colors)).dim(),
        template.description
    )
}

/// Final summary with the commands to run next
pub fn next_steps(project_name: &str, pm: PackageManager, installed: bool) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "  {} Created {}",
            style("Success!").green().bold(),
            style(project_name).cyan()
        ),
        String::new(),
        format!("  {}", style("Next steps:").dim()),
        String::new(),
        format!("    {} {}", style("cd").cyan(), project_name),
    ];

    if !installed {
        lines.push(format!("    {}", style(format!("{} install", pm)).cyan()));
    }

    lines.push(format!(
        "    {}",
        style("# Set up your DATABASE_URL in .env").dim()
    ));
    lines.push(format!(
        "    {}    {}",
        style(pm.run_script("seed")).cyan(),
        style("# Optional: seed demo content").dim()
    ));
    lines.push(format!("    {}", style(pm.run_script("dev")).cyan()));
    lines.push(String::new());

    lines
}

/// How to recover from a failed install
pub fn install_recovery(project_name: &str, pm: PackageManager) -> Vec<String> {
    vec![
        format!("  {}", style("Install dependencies manually:").dim()),
        format!("    cd {} && {} install", project_name, pm),
    ]
}

/// Troubleshooting hints for a failed template download
pub fn fetch_failure_hints(error: &ProjectError) -> Vec<String> {
    let mut hints = vec![String::new(), format!("  {}", style("Troubleshooting:").dim())];

    match error {
        ProjectError::TemplateNotFound { .. } | ProjectError::SubpathNotFound { .. } => {
            hints.push(format!(
                "    - Check that the template repository is available: {}",
                REPOSITORY_URL
            ));
            hints.push(
                "    - If you overrode PAYLOAD_TEMPLATES_REPO_OWNER, PAYLOAD_TEMPLATES_REPO_NAME or PAYLOAD_TEMPLATES_REF, verify those values"
                    .to_string(),
            );
        }
        _ => {
            hints.push("    - Check your internet connection".to_string());
            hints.push(
                "    - If you are behind a proxy, set HTTPS_PROXY and try again".to_string(),
            );
        }
    }
    hints.push("    - Run with RUST_LOG=debug for more detail".to_string());
    hints.push(String::new());

    hints
}
