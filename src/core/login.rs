use crate::api::ApiClient;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::prefs;
use crate::errors::AppResult;
use crate::models::login_state::LoginState;
use crate::models::session::Session;
use crate::ui::messages::warning;
use tracing::{debug, info};

/// High-level business logic for `login`, `logout` and `session`.
pub struct LoginLogic;

impl LoginLogic {
    /// Local check performed before any network call.
    pub fn check_input(username: &str, password: &str) -> LoginState {
        if username.is_empty() || password.is_empty() {
            LoginState::Error("Enter username and password".to_string())
        } else {
            LoginState::Idle
        }
    }

    /// Authenticate and, on success, store the session.
    ///
    /// Never returns `Idle` or `Loading`; every failure ends up in `Error`.
    pub async fn login(api: &ApiClient, pool: &DbPool, username: &str, password: &str) -> LoginState {
        if let LoginState::Error(msg) = Self::check_input(username, password) {
            return LoginState::Error(msg);
        }

        let users = match api.authenticate(username, password).await {
            Ok(u) => u,
            Err(e) => return LoginState::Error(e.to_string()),
        };

        let Some(user) = users.into_iter().next() else {
            return LoginState::Error("Invalid username or password".to_string());
        };

        if !user.has_access() {
            info!(user = ?user.id_usuario, "Login refused: account without access");
            return LoginState::Error("You do not have access to the system".to_string());
        }

        if let Err(e) = prefs::save_login(pool, &user) {
            return LoginState::Error(format!("Failed to store session: {e}"));
        }

        ttlog_soft(
            &pool.conn,
            "login",
            username,
            &format!(
                "User {} logged in (id {})",
                user.nombres.as_deref().unwrap_or(""),
                user.id_usuario.map(|i| i.to_string()).unwrap_or_default()
            ),
        );
        debug!(user = ?user.id_usuario, "Session stored");

        LoginState::Success(Box::new(user))
    }

    /// Clear the local session. With `api`, the token is also invalidated
    /// server-side; a remote failure only produces a warning.
    pub async fn logout(pool: &DbPool, api: Option<&ApiClient>) -> AppResult<Session> {
        let session = prefs::load_session(pool)?;

        if let Some(api) = api
            && session.is_logged_in()
        {
            match api.force_logout(session.user_id, &session.token).await {
                Ok(Some(r)) if r.success == Some(false) => warning(format!(
                    "Server refused logout: {}",
                    r.message.unwrap_or_default()
                )),
                Ok(_) => debug!("Remote logout done"),
                Err(e) => warning(format!("Remote logout failed: {e}")),
            }
        }

        prefs::clear(pool)?;
        ttlog_soft(
            &pool.conn,
            "logout",
            &session.supervisor_id(),
            &format!("Session of '{}' cleared", session.name),
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected_locally() {
        assert_eq!(
            LoginLogic::check_input("", "x"),
            LoginState::Error("Enter username and password".into())
        );
        assert_eq!(
            LoginLogic::check_input("u", ""),
            LoginState::Error("Enter username and password".into())
        );
        assert_eq!(LoginLogic::check_input("u", "p"), LoginState::Idle);
    }
}
