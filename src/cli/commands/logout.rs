use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::login::LoginLogic;
use crate::db::pool::DbPool;
use crate::db::prefs;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `logout` subcommand
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logout { remote } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let api = if *remote {
            let session = prefs::load_session(&pool)?;
            Some(ApiClient::new(cfg)?.with_token(&session.token))
        } else {
            None
        };

        let previous = LoginLogic::logout(&pool, api.as_ref()).await?;

        if previous.is_logged_in() {
            success(format!("Session of '{}' closed", previous.name));
        } else {
            info("No active session; local store cleared");
        }
    }

    Ok(())
}
