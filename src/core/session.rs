use crate::api::ApiClient;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::prefs;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;

/// Load the stored session and fail unless someone is logged in.
pub fn require_login(pool: &DbPool) -> AppResult<Session> {
    let session = prefs::load_session(pool)?;
    if !session.is_logged_in() {
        return Err(AppError::NotAuthenticated);
    }
    Ok(session)
}

/// API client carrying the stored bearer token.
pub fn authenticated_client(cfg: &Config, session: &Session) -> AppResult<ApiClient> {
    if session.token.is_empty() {
        return Err(AppError::SessionExpired);
    }
    Ok(ApiClient::new(cfg)?.with_token(&session.token))
}
