use crate::models::attendance::AttendanceRecord;
use serde::Serialize;

/// Flat row written to CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub employee: String,
    pub attendance_type: String,
    pub type_label: String,
    pub timestamp: String,
    pub time: String,
    pub area: String,
    pub role: String,
    pub supervisor: String,
}

fn opt(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl From<&AttendanceRecord> for AttendanceExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: opt(r.attendance_id),
            project_id: opt(r.project_id),
            user_id: opt(r.user_id),
            employee: r.employee(),
            attendance_type: opt(r.attendance_type),
            type_label: r.type_label().to_string(),
            timestamp: r.timestamp.clone().unwrap_or_default(),
            time: r.time(),
            area: r.area_name.clone().unwrap_or_default(),
            role: r.role_name.clone().unwrap_or_default(),
            supervisor: r.supervisor(),
        }
    }
}
