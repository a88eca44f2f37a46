use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::login::LoginLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::login_state::LoginState;
use crate::ui::messages::{info, success};
use std::io::{self, BufRead, Write};

fn read_password() -> AppResult<String> {
    eprint!("Password: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn report(state: &LoginState, username: &str) {
    match state {
        LoginState::Idle => {}
        LoginState::Loading => info(format!("Authenticating '{}'…", username)),
        LoginState::Success(user) => success(format!(
            "Welcome, {} ({})",
            user.nombres.as_deref().unwrap_or(username),
            user.role.as_deref().unwrap_or("no role")
        )),
        LoginState::Error(_) => {}
    }
}

/// Handle the `login` subcommand
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let password = match password {
            Some(p) => p.clone(),
            None => read_password()?,
        };

        if let LoginState::Error(msg) = LoginLogic::check_input(username, &password) {
            return Err(AppError::AuthFailed(msg));
        }

        let pool = DbPool::new(&cfg.database)?;
        let api = ApiClient::new(cfg)?;

        report(&LoginState::Loading, username);
        let state = LoginLogic::login(&api, &pool, username, &password).await;
        report(&state, username);

        if let LoginState::Error(msg) = state {
            return Err(AppError::AuthFailed(msg));
        }
    }

    Ok(())
}
