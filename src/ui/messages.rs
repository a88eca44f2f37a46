//! User-facing status lines. Every failure and confirmation the client
//! reports goes through here, so tests can match on plain text.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Honour the NO_COLOR convention (https://no-color.org).
fn colored() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if colored() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Section header, e.g. a project group title
pub fn header<T: fmt::Display>(msg: T) {
    if colored() {
        println!("{}{}=== {}{}", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("=== {}", msg);
    }
}
