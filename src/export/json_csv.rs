use super::model::AttendanceExport;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

pub fn export_csv(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_json(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
