/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

fn enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Wrap `value` in the given color (no-op when NO_COLOR is set).
pub fn paint(value: &str, color: &str) -> String {
    if enabled() && !value.is_empty() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Check-ins green, check-outs red, missing values grey.
pub fn colorize_in_out(value: &str, is_in: Option<bool>) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return paint(value, GREY);
    }

    match is_in {
        Some(true) => paint(value, GREEN),
        Some(false) => paint(value, RED),
        None => paint(value, GREY),
    }
}
