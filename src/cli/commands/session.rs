use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::prefs;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `session` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let session = prefs::load_session(&pool)?;

    if !session.is_logged_in() {
        info("No active session. Use `qrattend login -u <user>`.");
        return Ok(());
    }

    println!("👤 User     : {} (id {})", session.name, session.user_id);
    println!("🎭 Role     : {}", session.role);
    if let Some(admin) = session.admin_id {
        println!("🛡️  Admin id : {}", admin);
    }
    if let Some(user) = prefs::load_user_data(&pool)? {
        if let Some(n) = user.nroproys {
            println!("📁 Projects : {}", n);
        }
        if let Some(last) = user.fechacul.as_deref().filter(|s| !s.is_empty()) {
            println!("🕘 Last seen: {}", last);
        }
    }
    println!("🔑 Token    : {}…", session.token.chars().take(12).collect::<String>());
    println!("🌐 Backend  : {}", cfg.base_url);

    Ok(())
}
