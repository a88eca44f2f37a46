//! Date utilities: display ⇄ storage conversion, today's date, registration dates.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Timestamp format expected by the backend.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Date shown to the operator / typed on the command line.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M:%S";
/// Day parameter of the listing endpoint.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local date (`dd/MM/yyyy`) and time (`HH:mm:ss`).
pub fn display_now() -> (String, String) {
    let now = Local::now();
    (
        now.format(DISPLAY_DATE_FORMAT).to_string(),
        now.format(DISPLAY_TIME_FORMAT).to_string(),
    )
}

/// Convert a `dd/MM/yyyy` date plus a time into `yyyy-MM-dd <time>`.
///
/// Day and month are zero-padded, the year and the time are kept as given.
/// A date that does not have exactly three `/` parts falls back to now.
pub fn to_storage_timestamp(date: &str, time: &str) -> String {
    to_storage_timestamp_or(date, time, Local::now().naive_local())
}

pub fn to_storage_timestamp_or(date: &str, time: &str, fallback: NaiveDateTime) -> String {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() == 3 {
        let day = format!("{:0>2}", parts[0]);
        let month = format!("{:0>2}", parts[1]);
        let year = parts[2];
        format!("{}-{}-{} {}", year, month, day, time)
    } else {
        fallback.format(STORAGE_FORMAT).to_string()
    }
}

/// Split a `dd/MM/yyyy HH:mm:ss` override into its date and time halves.
pub fn split_display_timestamp(s: &str) -> Option<(String, String)> {
    let dt = NaiveDateTime::parse_from_str(s.trim(), "%d/%m/%Y %H:%M:%S").ok()?;
    Some((
        dt.format(DISPLAY_DATE_FORMAT).to_string(),
        dt.format(DISPLAY_TIME_FORMAT).to_string(),
    ))
}

/// `yyyy-MM-dd HH:mm:ss` → `dd-MM-yyyy`, for the project cards.
pub fn format_registration_date(s: Option<&str>) -> String {
    let s = match s {
        Some(v) if !v.is_empty() => v,
        _ => return "No date".to_string(),
    };

    match NaiveDateTime::parse_from_str(s, STORAGE_FORMAT) {
        Ok(dt) => dt.format("%d-%m-%Y").to_string(),
        Err(_) => s.split(' ').next().unwrap_or(s).to_string(),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DAY_FORMAT).ok()
}

/// `dd/MM/yyyy`, as typed by an operator.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DISPLAY_DATE_FORMAT).ok()
}

pub fn format_day(d: &NaiveDate) -> String {
    d.format(DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2030-01-02 03:04:05", STORAGE_FORMAT).unwrap()
    }

    #[test]
    fn converts_display_date_to_storage() {
        assert_eq!(
            to_storage_timestamp("05/03/2024", "08:30:00"),
            "2024-03-05 08:30:00"
        );
    }

    #[test]
    fn pads_single_digit_day_and_month() {
        assert_eq!(
            to_storage_timestamp_or("5/3/2024", "23:59:59", fallback()),
            "2024-03-05 23:59:59"
        );
    }

    #[test]
    fn malformed_date_falls_back() {
        assert_eq!(
            to_storage_timestamp_or("2024-03-05", "08:30:00", fallback()),
            "2030-01-02 03:04:05"
        );
        assert_eq!(
            to_storage_timestamp_or("05/03", "08:30:00", fallback()),
            "2030-01-02 03:04:05"
        );
    }

    #[test]
    fn splits_override_timestamp() {
        assert_eq!(
            split_display_timestamp("05/03/2024 08:30:00"),
            Some(("05/03/2024".to_string(), "08:30:00".to_string()))
        );
        assert_eq!(split_display_timestamp("2024-03-05 08:30"), None);
    }

    #[test]
    fn registration_date_formats() {
        assert_eq!(
            format_registration_date(Some("2023-11-20 10:15:00")),
            "20-11-2023"
        );
        assert_eq!(format_registration_date(Some("2023-11-20T10:15")), "2023-11-20T10:15");
        assert_eq!(format_registration_date(Some("2023-11-20 x")), "2023-11-20");
        assert_eq!(format_registration_date(Some("")), "No date");
        assert_eq!(format_registration_date(None), "No date");
    }

    #[test]
    fn day_parsers() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date("2024-03-05"), Some(d));
        assert_eq!(parse_display_date("05/03/2024"), Some(d));
        assert_eq!(parse_date("05/03/2024"), None);
        assert_eq!(format_day(&d), "2024-03-05");
    }
}
