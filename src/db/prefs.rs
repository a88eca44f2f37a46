//! Key-value preference store holding the session.

use crate::api::types::LoginResponse;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::{NO_USER, Session, keys};
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub fn put(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO prefs (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn get(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let v = pool
        .conn
        .query_row("SELECT value FROM prefs WHERE key = ?1", [key], |r| r.get(0))
        .optional()?;
    Ok(v)
}

pub fn get_or(pool: &DbPool, key: &str, default: &str) -> AppResult<String> {
    Ok(get(pool, key)?.unwrap_or_else(|| default.to_string()))
}

/// Remove every stored preference (logout).
pub fn clear(pool: &DbPool) -> AppResult<usize> {
    Ok(pool.conn.execute("DELETE FROM prefs", [])?)
}

/// Persist the fields present in a login response, plus the raw payload.
pub fn save_login(pool: &DbPool, user: &LoginResponse) -> AppResult<()> {
    if let Some(id) = user.id_usuario {
        put(pool, keys::USER_ID, &id.to_string())?;
    }
    if let Some(v) = &user.nombres {
        put(pool, keys::NAME, v)?;
    }
    if let Some(v) = &user.token {
        put(pool, keys::TOKEN, v)?;
    }
    if let Some(v) = &user.role {
        put(pool, keys::ROLE, v)?;
    }
    if let Some(v) = &user.arbol {
        put(pool, keys::ACCESS_TREE, v)?;
    }
    if let Some(v) = &user.configtema {
        put(pool, keys::THEME_CONFIG, v)?;
    }
    if let Some(id) = user.id_admin {
        put(pool, keys::ADMIN_ID, &id.to_string())?;
    }

    put(pool, keys::USER_DATA, &serde_json::to_string(user)?)?;
    Ok(())
}

pub fn load_session(pool: &DbPool) -> AppResult<Session> {
    let user_id = get(pool, keys::USER_ID)?
        .and_then(|s| s.parse().ok())
        .unwrap_or(NO_USER);

    Ok(Session {
        user_id,
        role: get_or(pool, keys::ROLE, "")?,
        name: get_or(pool, keys::NAME, "")?,
        token: get_or(pool, keys::TOKEN, "")?,
        access_tree: get_or(pool, keys::ACCESS_TREE, "[]")?,
        theme_config: get_or(pool, keys::THEME_CONFIG, "")?,
        admin_id: get(pool, keys::ADMIN_ID)?.and_then(|s| s.parse().ok()),
    })
}

/// Full login payload stored at login time, if any.
pub fn load_user_data(pool: &DbPool) -> AppResult<Option<LoginResponse>> {
    match get(pool, keys::USER_DATA)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login() -> LoginResponse {
        LoginResponse {
            id_usuario: Some(7),
            role: Some("SUPERVISOR".into()),
            nombres: Some("Luis Rojas".into()),
            token: Some("tok-123".into()),
            arbol: Some(r#"[{"id":1}]"#.into()),
            id_admin: Some(1),
            estado: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn empty_store_has_no_session() {
        let pool = DbPool::in_memory().unwrap();
        let s = load_session(&pool).unwrap();
        assert_eq!(s.user_id, NO_USER);
        assert_eq!(s.access_tree, "[]");
        assert!(!s.is_logged_in());
    }

    #[test]
    fn save_and_load_roundtrip_then_clear() {
        let pool = DbPool::in_memory().unwrap();
        save_login(&pool, &login()).unwrap();

        let s = load_session(&pool).unwrap();
        assert!(s.is_logged_in());
        assert_eq!(s.user_id, 7);
        assert_eq!(s.name, "Luis Rojas");
        assert_eq!(s.role, "SUPERVISOR");
        assert_eq!(s.admin_id, Some(1));
        assert!(s.theme_config.is_empty());

        let raw = load_user_data(&pool).unwrap().unwrap();
        assert_eq!(raw.token.as_deref(), Some("tok-123"));

        clear(&pool).unwrap();
        assert!(!load_session(&pool).unwrap().is_logged_in());
        assert!(load_user_data(&pool).unwrap().is_none());
    }

    #[test]
    fn put_overwrites() {
        let pool = DbPool::in_memory().unwrap();
        put(&pool, "token", "a").unwrap();
        put(&pool, "token", "b").unwrap();
        assert_eq!(get(&pool, "token").unwrap().as_deref(), Some("b"));
    }
}
