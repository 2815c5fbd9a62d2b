// ============================================================================
// outrocut-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Sections, status lines and the search spinner
//
// Lines are emitted through `info!`/`error!` so they reach both the console
// and the optional log file. Color is applied only when NO_COLOR is unset and
// stderr supports it.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use owo_colors::OwoColorize;
use std::time::Duration;

const LABEL_WIDTH: usize = 15;

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// `label:` padded to a fixed column, followed by `value`.
#[must_use]
pub fn status_line(label: &str, value: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.len()).max(1);
    format!("  {label}:{}{value}", " ".repeat(padding))
}

/// Print a section header
pub fn print_section(title: &str) {
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan().bold());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
}

/// Print a status line, optionally with the value in bold
pub fn print_status(label: &str, value: &str, highlight: bool) {
    if should_use_color() && highlight {
        info!("{}", status_line(label, &style(value).bold().to_string()));
    } else {
        info!("{}", status_line(label, value));
    }
}

pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

pub fn print_error(message: &str) {
    if should_use_color() {
        error!("  {} {}", style("✗").red().bold(), style(message).red());
    } else {
        error!("  ✗ {message}");
    }
}

/// Starts a spinner on stderr. Hidden when stderr is not a terminal.
pub fn start_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .template("  {spinner} {msg} ({elapsed})")
        .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "))
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
