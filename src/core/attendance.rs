use crate::api::{ApiClient, ApiResponse, AttendanceQuery};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceSubmission, REGISTRATION_MODE_QR};
use crate::models::attendance_type::AttendanceType;
use crate::models::qr::QrPayload;
use crate::utils::colors::colorize_in_out;
use crate::utils::date::{self, to_storage_timestamp};
use crate::utils::table::{Column, Table};
use crate::utils::time::sort_by_time_desc;
use chrono::NaiveDate;
use tracing::debug;

pub const MISSING_DATA: &str = "Missing data required for registration";

/// High-level business logic for `mark` and `attendance`.
pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Assemble a submission from a validated badge.
    ///
    /// `display_date`/`display_time` are `dd/MM/yyyy` and `HH:mm:ss`.
    pub fn build_submission(
        project_id: &str,
        kind: AttendanceType,
        qr: &QrPayload,
        supervisor_id: &str,
        display_date: &str,
        display_time: &str,
    ) -> AppResult<AttendanceSubmission> {
        if supervisor_id.is_empty() {
            return Err(AppError::MissingData(MISSING_DATA.to_string()));
        }

        let submission = AttendanceSubmission {
            project_id: project_id.to_string(),
            assignment_id: qr.assignment_id.clone(),
            user_id: qr.user_id.clone(),
            area_id: qr.area_id.clone(),
            role_id: qr.role_id.clone(),
            attendance_type: kind.code().to_string(),
            timestamp: to_storage_timestamp(display_date, display_time),
            supervisor_id: supervisor_id.to_string(),
            registration_mode: REGISTRATION_MODE_QR.to_string(),
        };

        if let Some(field) = submission.first_missing_field() {
            return Err(AppError::MissingData(format!("{MISSING_DATA} ({field})")));
        }

        Ok(submission)
    }

    /// Interpret the registration answer: only the first element counts.
    pub fn check_response(response: &[ApiResponse]) -> AppResult<()> {
        let first = response
            .first()
            .ok_or_else(|| AppError::Registration("No response received from server".into()))?;

        if first.is_success() {
            Ok(())
        } else {
            Err(AppError::Registration(
                first
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Registration failed".to_string()),
            ))
        }
    }

    pub async fn register(api: &ApiClient, submission: &AttendanceSubmission) -> AppResult<()> {
        let response = api.register_attendance(submission).await?;
        Self::check_response(&response)
    }

    /// Attendance rows of one day, latest time of day first.
    pub async fn list_for_day(
        api: &ApiClient,
        project_id: &str,
        day: NaiveDate,
        area_id: &str,
        role_id: &str,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let d = date::format_day(&day);
        let query = AttendanceQuery {
            project_id: project_id.to_string(),
            area_id: area_id.to_string(),
            role_id: role_id.to_string(),
            from: d.clone(),
            to: d,
        };

        let mut rows = api.list_attendances(&query).await?;
        sort_by_time_desc(&mut rows);

        for (i, r) in rows.iter().enumerate() {
            debug!(pos = i + 1, time = %r.time(), employee = %r.employee(), "attendance row");
        }

        Ok(rows)
    }

    pub fn render_table(rows: &[AttendanceRecord]) -> String {
        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("Employee", 32),
            Column::new("Type", 11),
            Column::new("Time", 5),
            Column::new("Area", 20),
            Column::new("Role", 20),
            Column::new("Supervisor", 24),
        ]);

        for (i, r) in rows.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                r.employee(),
                r.type_label().to_string(),
                r.time(),
                r.area_name.clone().unwrap_or_default(),
                r.role_name.clone().unwrap_or_default(),
                r.supervisor(),
            ]);
        }

        // Color is applied after layout so escape codes don't count as width.
        table
            .render()
            .lines()
            .enumerate()
            .map(|(i, line)| match i.checked_sub(2).and_then(|k| rows.get(k)) {
                Some(r) => {
                    let label = r.type_label();
                    line.replacen(
                        label,
                        &colorize_in_out(label, r.kind().map(|k| k.is_check_in())),
                        1,
                    )
                }
                None => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qr() -> QrPayload {
        QrPayload::parse("15|120|Ana|Quispe|44556677|908|Obras|3|Operario|7|2024-01-01|2024-12-31")
            .unwrap()
    }

    #[test]
    fn builds_submission_in_storage_format() {
        let s = AttendanceLogic::build_submission(
            "120",
            AttendanceType::CheckOut1,
            &qr(),
            "2",
            "05/03/2024",
            "08:30:00",
        )
        .unwrap();

        assert_eq!(s.project_id, "120");
        assert_eq!(s.assignment_id, "908");
        assert_eq!(s.user_id, "15");
        assert_eq!(s.area_id, "3");
        assert_eq!(s.role_id, "7");
        assert_eq!(s.attendance_type, "2");
        assert_eq!(s.timestamp, "2024-03-05 08:30:00");
        assert_eq!(s.supervisor_id, "2");
        assert_eq!(s.registration_mode, "1");
    }

    #[test]
    fn missing_supervisor_or_field_is_rejected() {
        let err = AttendanceLogic::build_submission(
            "120",
            AttendanceType::CheckIn1,
            &qr(),
            "",
            "05/03/2024",
            "08:30:00",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MissingData(_)));

        let mut no_area = qr();
        no_area.area_id.clear();
        let err = AttendanceLogic::build_submission(
            "120",
            AttendanceType::CheckIn1,
            &no_area,
            "2",
            "05/03/2024",
            "08:30:00",
        )
        .unwrap_err();
        assert!(err.to_string().contains("id_area"));
    }

    #[test]
    fn response_interpretation() {
        let ok = ApiResponse {
            success: Some(true),
            ..Default::default()
        };
        let refused = ApiResponse {
            success: Some(false),
            message: Some("Already registered".into()),
            ..Default::default()
        };
        let silent = ApiResponse {
            success: Some(false),
            ..Default::default()
        };

        assert!(AttendanceLogic::check_response(&[ok]).is_ok());
        assert_eq!(
            AttendanceLogic::check_response(&[refused]).unwrap_err().to_string(),
            "Already registered"
        );
        assert_eq!(
            AttendanceLogic::check_response(&[silent]).unwrap_err().to_string(),
            "Registration failed"
        );
        assert_eq!(
            AttendanceLogic::check_response(&[]).unwrap_err().to_string(),
            "No response received from server"
        );
    }

    #[test]
    fn table_lists_rows_in_given_order() {
        let rows = vec![
            AttendanceRecord {
                user_first_names: Some("Ana".into()),
                attendance_type: Some(2),
                timestamp: Some("2024-03-05 17:10:00".into()),
                ..Default::default()
            },
            AttendanceRecord {
                user_first_names: Some("Luis".into()),
                attendance_type: Some(1),
                timestamp: Some("2024-03-05 08:01:00".into()),
                ..Default::default()
            },
        ];

        let out = AttendanceLogic::render_table(&rows);
        let ana = out.find("Ana").unwrap();
        let luis = out.find("Luis").unwrap();
        assert!(ana < luis);
        assert!(out.contains("17:10"));
        assert!(out.contains("CHECK-OUT 1"));
    }
}
