//! Terminal output helpers.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner counting objective evaluations.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg} {pos} evaluations")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {}", title)).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {}", title)).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{}:", label)).dim(), value);
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Format a parameter vector with fixed precision.
pub fn format_params(params: &[f64]) -> String {
    let items: Vec<String> = params.iter().map(|p| format!("{:.6}", p)).collect();
    format!("[{}]", items.join(", "))
}
