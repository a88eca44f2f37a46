//! Request and response bodies of the backend API.

use crate::models::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

fn default_true() -> bool {
    true
}

/// One element of the authenticate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub id_usuario: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub nombres: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub token: Option<String>,
    /// Access tree, a JSON document sent as a string
    #[serde(default, deserialize_with = "de::opt_string")]
    pub arbol: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub fechaact: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub id_admin: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub menu_proy: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub nroproys: Option<i64>,
    /// 2 = account without system access
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub estado: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub conex: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub fechaserv: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub fechacul: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub configtema: Option<String>,
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub message: Option<String>,
}

impl Default for LoginResponse {
    fn default() -> Self {
        Self {
            id_usuario: None,
            role: None,
            nombres: None,
            token: None,
            arbol: None,
            fechaact: None,
            id_admin: None,
            menu_proy: None,
            nroproys: None,
            estado: None,
            conex: None,
            fechaserv: None,
            fechacul: None,
            configtema: None,
            success: true,
            message: None,
        }
    }
}

/// Account state that blocks access to the system.
pub const ESTADO_NO_ACCESS: i64 = 2;

impl LoginResponse {
    pub fn has_access(&self) -> bool {
        self.estado != Some(ESTADO_NO_ACCESS)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForceLogoutRequest {
    pub id_usuario: i64,
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForceLogoutResponse {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub message: Option<String>,
}

/// Generic `{success, message, data}` answer of write endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "de::opt_bool")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<serde_json::Map<String, serde_json::Value>>>,
}

impl ApiResponse {
    /// `true` for both a JSON `true` and the string `"true"`.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

/// Form body of the day listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceQuery {
    #[serde(rename = "id_proyecto")]
    pub project_id: String,
    #[serde(rename = "id_area")]
    pub area_id: String,
    #[serde(rename = "id_cargo")]
    pub role_id: String,
    /// `yyyy-MM-dd`
    #[serde(rename = "fecha_inicio")]
    pub from: String,
    #[serde(rename = "fecha_fin")]
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_accepts_bool_and_string() {
        let a: ApiResponse = serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        let b: ApiResponse = serde_json::from_str(r#"{"success":"true"}"#).unwrap();
        let c: ApiResponse = serde_json::from_str(r#"{"success":false,"message":"dup"}"#).unwrap();
        let d: ApiResponse = serde_json::from_str(r#"{"message":"?"}"#).unwrap();

        assert!(a.is_success());
        assert!(b.is_success());
        assert!(!c.is_success());
        assert!(!d.is_success());
    }

    #[test]
    fn login_request_uses_capitalised_keys() {
        let body = serde_json::to_value(LoginRequest {
            username: "u".into(),
            password: "p".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"Username": "u", "Password": "p"}));
    }

    #[test]
    fn estado_two_means_no_access() {
        let r: LoginResponse = serde_json::from_str(r#"{"id_usuario":3,"estado":2}"#).unwrap();
        assert!(!r.has_access());
        assert!(r.success);

        let ok: LoginResponse = serde_json::from_str(r#"{"id_usuario":3,"estado":"1"}"#).unwrap();
        assert!(ok.has_access());
    }
}
