use crate::errors::{AppError, AppResult};
use crate::models::qr::QrPayload;
use tracing::debug;

/// Validation of a scanned badge against the project currently open.
pub struct ScanLogic;

impl ScanLogic {
    /// Parse `raw` and accept it only if it was issued for `open_project_id`.
    pub fn validate(raw: &str, open_project_id: &str) -> AppResult<QrPayload> {
        let payload = QrPayload::parse(raw)?;

        if payload.project_id != open_project_id {
            debug!(scanned = %payload.project_id, open = %open_project_id, "QR rejected");
            return Err(AppError::ProjectMismatch {
                scanned: payload.project_id,
                open: open_project_id.to_string(),
            });
        }

        Ok(payload)
    }
}
