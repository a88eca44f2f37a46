//! Employee QR payload.
//!
//! A printed badge encodes one assignment as twelve `|`-separated fields:
//!
//! ```text
//! user_id|project_id|first_name|last_name|national_id|assignment_id|
//! area_description|area_id|role_description|role_id|start_date|end_date
//! ```

use crate::errors::{AppError, AppResult};
use serde::Serialize;

pub const QR_SEPARATOR: char = '|';
pub const QR_FIELD_COUNT: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrPayload {
    pub user_id: String,
    pub project_id: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub assignment_id: String,
    pub area_description: String,
    pub area_id: String,
    pub role_description: String,
    pub role_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl QrPayload {
    /// Split a raw payload into its named fields.
    ///
    /// Fields are kept verbatim; anything after the twelfth field is ignored.
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.is_empty() {
            return Err(AppError::EmptyQr);
        }

        let parts: Vec<&str> = raw.split(QR_SEPARATOR).collect();
        if parts.len() < QR_FIELD_COUNT {
            return Err(AppError::InvalidQr {
                expected: QR_FIELD_COUNT,
                found: parts.len(),
            });
        }

        let f = |i: usize| parts[i].to_string();

        Ok(Self {
            user_id: f(0),
            project_id: f(1),
            first_name: f(2),
            last_name: f(3),
            national_id: f(4),
            assignment_id: f(5),
            area_description: f(6),
            area_id: f(7),
            role_description: f(8),
            role_id: f(9),
            start_date: f(10),
            end_date: f(11),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// (label, value) pairs in payload order, for display.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("User id", &self.user_id),
            ("Project id", &self.project_id),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("National id", &self.national_id),
            ("Assignment id", &self.assignment_id),
            ("Area", &self.area_description),
            ("Area id", &self.area_id),
            ("Role", &self.role_description),
            ("Role id", &self.role_id),
            ("Start date", &self.start_date),
            ("End date", &self.end_date),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str =
        "15|P-042|Ana|Quispe Mamani|44556677|908|Obras civiles|3|Operario|7|2024-01-01|2024-12-31";

    #[test]
    fn parses_all_twelve_fields_in_order() {
        let qr = QrPayload::parse(VALID).unwrap();
        assert_eq!(qr.user_id, "15");
        assert_eq!(qr.project_id, "P-042");
        assert_eq!(qr.first_name, "Ana");
        assert_eq!(qr.last_name, "Quispe Mamani");
        assert_eq!(qr.national_id, "44556677");
        assert_eq!(qr.assignment_id, "908");
        assert_eq!(qr.area_description, "Obras civiles");
        assert_eq!(qr.area_id, "3");
        assert_eq!(qr.role_description, "Operario");
        assert_eq!(qr.role_id, "7");
        assert_eq!(qr.start_date, "2024-01-01");
        assert_eq!(qr.end_date, "2024-12-31");
        assert_eq!(qr.full_name(), "Ana Quispe Mamani");
    }

    #[test]
    fn fewer_than_twelve_fields_is_rejected() {
        let err = QrPayload::parse("15|P-042|Ana|Quispe|44556677|908|Obras|3|Operario|7|2024-01-01")
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidQr {
                expected: 12,
                found: 11
            }
        ));
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert!(matches!(QrPayload::parse(""), Err(AppError::EmptyQr)));
    }

    #[test]
    fn extra_fields_are_ignored_and_empty_fields_kept() {
        let qr = QrPayload::parse("1|2|||||||||||trailing|more").unwrap();
        assert_eq!(qr.user_id, "1");
        assert_eq!(qr.project_id, "2");
        assert_eq!(qr.end_date, "");
    }
}
