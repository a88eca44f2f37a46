use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour of an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "mark" => Colour::Green,
        "mark_failed" => Colour::Red,
        "login" => Colour::Cyan,
        "logout" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max - 3).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One printable line per entry, `op (target)` coloured and padded.
    pub fn format_entries(entries: &[LogEntry], colored: bool) -> Vec<String> {
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        entries
            .iter()
            .map(|e| {
                let visible = truncate_visible(&op_target(e), MAX_OP_WIDTH);
                let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

                let shown = if colored {
                    let color = color_for_operation(&e.operation);
                    match visible.split_once(' ') {
                        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                        None => color.paint(visible.as_str()).to_string(),
                    }
                } else {
                    visible
                };

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    shown,
                    padding,
                    strip_ansi(&e.message),
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let colored = std::env::var_os("NO_COLOR").is_none();
        println!("📜 Internal log:\n");
        for line in Self::format_entries(&entries, colored) {
            println!("{}", line);
        }
        Ok(())
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
