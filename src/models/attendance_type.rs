use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Which of the four daily check-in/check-out events a record represents.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceType {
    CheckIn1,
    CheckOut1,
    CheckIn2,
    CheckOut2,
}

impl AttendanceType {
    /// Numeric code used on the wire (`tipo_asistencia`).
    pub fn code(&self) -> u8 {
        match self {
            AttendanceType::CheckIn1 => 1,
            AttendanceType::CheckOut1 => 2,
            AttendanceType::CheckIn2 => 3,
            AttendanceType::CheckOut2 => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(AttendanceType::CheckIn1),
            2 => Some(AttendanceType::CheckOut1),
            3 => Some(AttendanceType::CheckIn2),
            4 => Some(AttendanceType::CheckOut2),
            _ => None,
        }
    }

    /// Parse user input: either the code (`1`..`4`) or the short name (`in1`, `out2`, ...).
    pub fn parse(input: &str) -> AppResult<Self> {
        let s = input.trim().to_lowercase();
        let parsed = match s.as_str() {
            "1" | "in1" => Some(AttendanceType::CheckIn1),
            "2" | "out1" => Some(AttendanceType::CheckOut1),
            "3" | "in2" => Some(AttendanceType::CheckIn2),
            "4" | "out2" => Some(AttendanceType::CheckOut2),
            _ => None,
        };
        parsed.ok_or_else(|| AppError::InvalidAttendanceType(input.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceType::CheckIn1 => "CHECK-IN 1",
            AttendanceType::CheckOut1 => "CHECK-OUT 1",
            AttendanceType::CheckIn2 => "CHECK-IN 2",
            AttendanceType::CheckOut2 => "CHECK-OUT 2",
        }
    }

    /// Label for a code as returned by the backend; unknown codes are not an error.
    pub fn label_for(code: Option<i64>) -> &'static str {
        code.and_then(Self::from_code)
            .map(|t| t.label())
            .unwrap_or("UNKNOWN")
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, AttendanceType::CheckIn1 | AttendanceType::CheckIn2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_wire_contract() {
        assert_eq!(AttendanceType::CheckIn1.code(), 1);
        assert_eq!(AttendanceType::CheckOut1.code(), 2);
        assert_eq!(AttendanceType::CheckIn2.code(), 3);
        assert_eq!(AttendanceType::CheckOut2.code(), 4);
    }

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!(AttendanceType::parse("3").unwrap(), AttendanceType::CheckIn2);
        assert_eq!(AttendanceType::parse("OUT1").unwrap(), AttendanceType::CheckOut1);
        assert!(AttendanceType::parse("5").is_err());
        assert!(AttendanceType::parse("").is_err());
    }

    #[test]
    fn unknown_codes_render_as_unknown() {
        assert_eq!(AttendanceType::label_for(Some(2)), "CHECK-OUT 1");
        assert_eq!(AttendanceType::label_for(Some(9)), "UNKNOWN");
        assert_eq!(AttendanceType::label_for(None), "UNKNOWN");
    }
}
