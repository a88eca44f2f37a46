//! SQLite connection wrapper (lightweight for CLI usage).

use crate::config::restrict_permissions;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the local store and make sure the schema is current.
    ///
    /// The store holds the bearer token, so the file is kept owner-only
    /// whether or not `init` created it.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        restrict_permissions(Path::new(path))?;
        Ok(Self { conn })
    }

    /// In-memory store, for tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::api::types::LoginResponse;
    use crate::db::prefs;
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn store_created_without_init_is_owner_only() {
        let path = env::temp_dir().join("qrattend_pool_mode.sqlite");
        fs::remove_file(&path).ok();
        let db_path = path.to_string_lossy().to_string();

        let pool = DbPool::new(&db_path).unwrap();
        prefs::save_login(
            &pool,
            &LoginResponse {
                id_usuario: Some(7),
                token: Some("tok-123".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);

        drop(pool);
        fs::remove_file(&path).ok();
    }
}
