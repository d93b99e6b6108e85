//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a success message
pub fn success(msg: &str) {
    println!("  {} {}", style("✓").green().bold(), style(msg).dim());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("  {} {}", style("✗").red().bold(), style(msg).red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("  {} {}", style("!").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("  {} {}", style("ℹ").blue().bold(), msg);
}

/// Print pre-rendered lines
pub fn lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Print the cancellation notice
pub fn cancelled() {
    println!();
    println!("  {}", style("Cancelled").yellow());
    println!();
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("  {spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("◐◓◑◒●"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
