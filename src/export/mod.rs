//! Export of an attendance table to CSV or JSON.

mod fs_utils;
mod json_csv;
mod model;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use model::AttendanceExport;

use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `rows` (already sorted) to `path` in the requested format.
pub fn export(rows: &[AttendanceRecord], format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;

    let flat: Vec<AttendanceExport> = rows.iter().map(AttendanceExport::from).collect();
    match format {
        ExportFormat::Csv => export_csv(&flat, path)?,
        ExportFormat::Json => export_json(&flat, path)?,
    }

    success(format!(
        "{} export completed: {} ({} rows)",
        format.as_str().to_uppercase(),
        path.display(),
        flat.len()
    ));
    Ok(())
}
