use super::attendance_type::AttendanceType;
use super::de;
use crate::utils::time::extract_hhmm;
use serde::{Deserialize, Serialize};

/// One attendance row as returned by the day listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "id_asistencia", default, deserialize_with = "de::opt_i64")]
    pub attendance_id: Option<i64>,
    #[serde(rename = "id_proyecto", default, deserialize_with = "de::opt_i64")]
    pub project_id: Option<i64>,
    #[serde(rename = "id_usuario", default, deserialize_with = "de::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(rename = "nombres_usuario", default, deserialize_with = "de::opt_string")]
    pub user_first_names: Option<String>,
    #[serde(rename = "apellidos_usuario", default, deserialize_with = "de::opt_string")]
    pub user_last_names: Option<String>,
    #[serde(rename = "tipo_asistencia", default, deserialize_with = "de::opt_i64")]
    pub attendance_type: Option<i64>,
    #[serde(rename = "fecha_hora", default, deserialize_with = "de::opt_string")]
    pub timestamp: Option<String>,
    #[serde(rename = "nombre_area", default, deserialize_with = "de::opt_string")]
    pub area_name: Option<String>,
    #[serde(rename = "nombre_cargo", default, deserialize_with = "de::opt_string")]
    pub role_name: Option<String>,
    #[serde(rename = "nombres_supervisor", default, deserialize_with = "de::opt_string")]
    pub supervisor_first_names: Option<String>,
    #[serde(rename = "apellidos_supervisor", default, deserialize_with = "de::opt_string")]
    pub supervisor_last_names: Option<String>,
}

fn join_names(first: &Option<String>, last: &Option<String>) -> String {
    format!(
        "{} {}",
        first.as_deref().unwrap_or(""),
        last.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

impl AttendanceRecord {
    pub fn employee(&self) -> String {
        join_names(&self.user_first_names, &self.user_last_names)
    }

    pub fn supervisor(&self) -> String {
        join_names(&self.supervisor_first_names, &self.supervisor_last_names)
    }

    pub fn type_label(&self) -> &'static str {
        AttendanceType::label_for(self.attendance_type)
    }

    pub fn kind(&self) -> Option<AttendanceType> {
        self.attendance_type.and_then(AttendanceType::from_code)
    }

    /// `HH:mm` part of the timestamp.
    pub fn time(&self) -> String {
        extract_hhmm(self.timestamp.as_deref())
    }
}

/// Everything needed to submit one attendance event.
///
/// All fields must be non-empty; the backend stores whatever it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSubmission {
    #[serde(rename = "id_proyecto")]
    pub project_id: String,
    #[serde(rename = "id_asignacion")]
    pub assignment_id: String,
    #[serde(rename = "id_usuario")]
    pub user_id: String,
    #[serde(rename = "id_area")]
    pub area_id: String,
    #[serde(rename = "id_cargo")]
    pub role_id: String,
    #[serde(rename = "tipo_asistencia")]
    pub attendance_type: String,
    /// `yyyy-MM-dd HH:mm:ss`
    #[serde(rename = "fecha_hora")]
    pub timestamp: String,
    #[serde(rename = "id_supervisor")]
    pub supervisor_id: String,
    #[serde(rename = "modo_registro")]
    pub registration_mode: String,
}

/// Registration mode sent with every scan-based submission.
pub const REGISTRATION_MODE_QR: &str = "1";

impl AttendanceSubmission {
    /// Name of the first empty field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("id_proyecto", &self.project_id),
            ("id_asignacion", &self.assignment_id),
            ("id_usuario", &self.user_id),
            ("id_area", &self.area_id),
            ("id_cargo", &self.role_id),
            ("tipo_asistencia", &self.attendance_type),
            ("fecha_hora", &self.timestamp),
            ("id_supervisor", &self.supervisor_id),
            ("modo_registro", &self.registration_mode),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
    }
}
