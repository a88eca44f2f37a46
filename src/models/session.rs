use serde::Serialize;

/// Key names in the local `prefs` store.
pub mod keys {
    pub const USER_ID: &str = "user_id";
    pub const ROLE: &str = "role";
    pub const NAME: &str = "name";
    pub const TOKEN: &str = "token";
    pub const ACCESS_TREE: &str = "access_tree";
    pub const THEME_CONFIG: &str = "theme_config";
    pub const ADMIN_ID: &str = "admin_id";
    /// Full login payload as JSON
    pub const USER_DATA: &str = "user_data";
}

pub const NO_USER: i64 = -1;

/// The logged-in user, as persisted between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: i64,
    pub role: String,
    pub name: String,
    pub token: String,
    /// JSON array (as text) of the screens the user may access
    pub access_tree: String,
    pub theme_config: String,
    pub admin_id: Option<i64>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user_id: NO_USER,
            role: String::new(),
            name: String::new(),
            token: String::new(),
            access_tree: "[]".to_string(),
            theme_config: String::new(),
            admin_id: None,
        }
    }
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty() && self.user_id != NO_USER
    }

    /// Supervisor id sent with every submission; empty when nobody is logged in.
    pub fn supervisor_id(&self) -> String {
        if self.user_id == NO_USER {
            String::new()
        } else {
            self.user_id.to_string()
        }
    }
}
