use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::session::{authenticated_client, require_login};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Handle the `attendance` subcommand
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance {
        project,
        date: day,
        area,
        role,
        export: export_file,
        format,
        force,
    } = cmd
    {
        let day = match day {
            Some(d) => date::parse_date(d)
                .or_else(|| date::parse_display_date(d))
                .ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let session = require_login(&pool)?;
        let api = authenticated_client(cfg, &session)?;

        let rows = AttendanceLogic::list_for_day(&api, project, day, area, role).await?;

        header(format!(
            "Project {} • {} • {} records",
            project,
            day.format(date::DISPLAY_DATE_FORMAT),
            rows.len()
        ));

        if rows.is_empty() {
            info("No attendance records for this day");
        } else {
            println!("{}", AttendanceLogic::render_table(&rows));
        }

        if let Some(file) = export_file {
            let path = expand_tilde(file);
            export::export(&rows, *format, &path, *force)?;
        }
    }

    Ok(())
}
