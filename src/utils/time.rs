//! Time-of-day utilities: `HH:mm` extraction and most-recent-first ordering.

use crate::models::attendance::AttendanceRecord;
use crate::utils::date::STORAGE_FORMAT;
use chrono::NaiveDateTime;
use std::cmp::Reverse;

/// Extract `HH:mm` from a backend timestamp.
///
/// Falls back to characters 11..16 when the string is not in storage format,
/// and to the input itself when it is too short for that.
pub fn extract_hhmm(ts: Option<&str>) -> String {
    let s = match ts {
        Some(v) if !v.is_empty() => v,
        _ => return String::new(),
    };

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, STORAGE_FORMAT) {
        return dt.format("%H:%M").to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() >= 16 {
        chars[11..16].iter().collect()
    } else {
        s.to_string()
    }
}

/// Minutes since midnight of the `HH:mm` part; 0 when it cannot be read.
pub fn minutes_since_midnight(ts: Option<&str>) -> u32 {
    let hhmm = extract_hhmm(ts);
    if hhmm.is_empty() {
        return 0;
    }

    let parts: Vec<&str> = hhmm.split(':').collect();
    if parts.len() < 2 {
        return 0;
    }

    let hours: u32 = parts[0].trim().parse().unwrap_or(0);
    let minutes: u32 = parts[1].trim().parse().unwrap_or(0);
    hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .unwrap_or(0)
}

/// Latest time of day first. Stable: rows with the same minute keep their order.
pub fn sort_by_time_desc(rows: &mut [AttendanceRecord]) {
    rows.sort_by_key(|r| Reverse(minutes_since_midnight(r.timestamp.as_deref())));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, ts: &str) -> AttendanceRecord {
        AttendanceRecord {
            attendance_id: Some(id),
            timestamp: Some(ts.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn extracts_hhmm() {
        assert_eq!(extract_hhmm(Some("2024-03-05 08:30:00")), "08:30");
        assert_eq!(extract_hhmm(Some("2024-03-05T17:45:12.000Z")), "17:45");
        assert_eq!(extract_hhmm(Some("23:59")), "23:59");
        assert_eq!(extract_hhmm(Some("")), "");
        assert_eq!(extract_hhmm(None), "");
    }

    #[test]
    fn minutes_key() {
        assert_eq!(minutes_since_midnight(Some("2024-03-05 08:30:00")), 510);
        assert_eq!(minutes_since_midnight(Some("23:59")), 1439);
        assert_eq!(minutes_since_midnight(Some("00:01")), 1);
        assert_eq!(minutes_since_midnight(Some("garbage")), 0);
        assert_eq!(minutes_since_midnight(Some("ab:15")), 15);
        assert_eq!(minutes_since_midnight(None), 0);
    }

    #[test]
    fn oversized_hour_field_counts_as_zero() {
        assert_eq!(minutes_since_midnight(Some("99999999:00")), 0);
        assert_eq!(minutes_since_midnight(Some("4294967295:59")), 0);

        let mut rows = vec![row(1, "99999999:00"), row(2, "08:15")];
        sort_by_time_desc(&mut rows);
        assert_eq!(rows[0].attendance_id, Some(2));
    }

    #[test]
    fn late_evening_sorts_before_just_after_midnight() {
        let mut rows = vec![row(1, "00:01"), row(2, "23:59")];
        sort_by_time_desc(&mut rows);
        assert_eq!(rows[0].attendance_id, Some(2));
        assert_eq!(rows[1].attendance_id, Some(1));
    }

    #[test]
    fn sort_ignores_date_and_is_stable() {
        let mut rows = vec![
            row(1, "2024-03-05 08:00:00"),
            row(2, "2024-03-04 17:30:00"),
            row(3, "2024-03-05 08:00:59"),
            row(4, ""),
        ];
        sort_by_time_desc(&mut rows);
        let ids: Vec<_> = rows.iter().map(|r| r.attendance_id.unwrap()).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }
}
