use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the local SQLite store and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing qrattend…");

    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Local store : {}", &cfg.database);
    println!("🌐 Backend     : {}", &cfg.base_url);

    let pool = DbPool::new(&cfg.database)?;

    ttlog_soft(
        &pool.conn,
        "init",
        "local store",
        &format!("Local store initialized at {}", &cfg.database),
    );

    println!("🎉 qrattend initialization completed!");
    Ok(())
}
