use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects::{self, active_count, group_projects, project_count};
use crate::core::session::{authenticated_client, require_login};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::project::Project;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, paint};
use crate::utils::date::format_registration_date;

fn print_card(p: &Project) {
    let status = p.status();
    println!(
        "   • [{}] {}  {}",
        p.project_id(),
        p.description(),
        paint(status.label(), status.color())
    );

    let mut details = vec![format!(
        "registered {}",
        format_registration_date(p.fecha_registro.as_deref())
    )];
    if let Some(c) = p.desc_clasi.as_deref().filter(|s| !s.is_empty()) {
        details.push(c.to_string());
    }
    if let Some(m) = p.modalidad.as_deref().filter(|s| !s.is_empty()) {
        details.push(m.to_string());
    }
    if let Some(sym) = p.simbolo.as_deref().filter(|s| !s.is_empty()) {
        details.push(sym.to_string());
    }
    println!("     {}", paint(&details.join(" · "), GREY));
}

/// Handle the `projects` subcommand
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Projects { collapsed } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let session = require_login(&pool)?;
        let api = authenticated_client(cfg, &session)?;

        let rows = projects::fetch(&api, &session, &cfg.source).await?;
        let groups = group_projects(&rows);

        if groups.is_empty() {
            info("No projects available for this user");
            return Ok(());
        }

        for g in &groups {
            let active = active_count(&g.projects);
            let summary = if g.projects.is_empty() {
                "empty".to_string()
            } else if active > 0 {
                format!("{} projects, {} active", g.projects.len(), active)
            } else {
                format!("{} projects, All completed", g.projects.len())
            };
            header(format!("{}  ({})", g.name, summary));

            if !*collapsed {
                for p in &g.projects {
                    print_card(p);
                }
                println!();
            }
        }

        println!("{} groups • {} projects", groups.len(), project_count(&rows));
    }

    Ok(())
}
