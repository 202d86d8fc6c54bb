//! Terminal output utilities
//!
//! Operator-facing lines with colored status symbols. Results go to stdout,
//! failures to stderr; tracing logs are written to stderr separately.

use colored::Colorize;

/// Terminal display utilities for formatted CLI output
pub struct Display;

impl Display {
	/// Displays a success message with green checkmark
	pub fn success(message: &str) {
		println!("{} {}", "✓".green().bold(), message);
	}

	/// Displays an error message with red X symbol to stderr
	pub fn error(message: &str) {
		eprintln!("{} {}", "✗".red().bold(), message.red());
	}

	/// Displays a warning message with yellow warning symbol to stderr
	pub fn warning(message: &str) {
		eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
	}

	/// Displays a key-value pair with formatted labels
	pub fn kv(key: &str, value: &str) {
		println!("  {} {}", format!("{}:", key).bold(), value);
	}

	/// Displays a formatted section title with arrow prefix
	pub fn section(title: &str) {
		println!("\n{}", format!("▸ {}", title).bold());
	}

	/// Displays an indented list item
	pub fn item(text: &str) {
		println!("  • {}", text);
	}
}
