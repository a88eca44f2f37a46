use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::scan::ScanLogic;
use crate::core::session::{authenticated_client, require_login};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_type::AttendanceType;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{self, display_now, split_display_timestamp};

/// Handle the `mark` subcommand
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        project,
        kind,
        payload,
        at,
    } = cmd
    {
        let kind = AttendanceType::parse(kind)?;
        let qr = ScanLogic::validate(payload, project)?;

        let pool = DbPool::new(&cfg.database)?;
        let session = require_login(&pool)?;
        let api = authenticated_client(cfg, &session)?;

        let (display_date, display_time) = match at {
            Some(s) => split_display_timestamp(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => display_now(),
        };

        let submission = AttendanceLogic::build_submission(
            project,
            kind,
            &qr,
            &session.supervisor_id(),
            &display_date,
            &display_time,
        )?;

        info(format!(
            "Registering {} for {} at {}…",
            kind.label(),
            qr.full_name(),
            submission.timestamp
        ));

        if let Err(e) = AttendanceLogic::register(&api, &submission).await {
            ttlog_soft(
                &pool.conn,
                "mark_failed",
                &qr.user_id,
                &format!("{} on project {}: {}", kind.label(), project, e),
            );
            return Err(e);
        }

        ttlog_soft(
            &pool.conn,
            "mark",
            &qr.user_id,
            &format!(
                "{} {} on project {} at {}",
                kind.label(),
                qr.full_name(),
                project,
                submission.timestamp
            ),
        );
        success("Attendance registered successfully");

        // Refresh the day of the registration, as an operator would see it.
        let day = submission
            .timestamp
            .split(' ')
            .next()
            .and_then(date::parse_date)
            .unwrap_or_else(date::today);

        match AttendanceLogic::list_for_day(&api, project, day, "", "").await {
            Ok(rows) if rows.is_empty() => info("No attendance records for this day"),
            Ok(rows) => println!("{}", AttendanceLogic::render_table(&rows)),
            Err(e) => warning(format!("Failed to reload attendances: {e}")),
        }
    }

    Ok(())
}
