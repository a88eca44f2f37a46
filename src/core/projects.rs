use crate::api::ApiClient;
use crate::models::project::{Project, ProjectGroup};
use crate::models::session::Session;
use crate::errors::AppResult;
use std::collections::HashMap;

const NO_GROUP: i64 = -1;

/// Build parent/child groups out of the flat project list.
///
/// Headers (`nro` set, no project id) open a group keyed by `id_grupo`; the
/// first header of an id wins and groups keep first-seen order. Projects are
/// then attached, in input order, to the group named by their `id_grupo`.
/// Projects whose group has no header are dropped.
pub fn group_projects(rows: &[Project]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for p in rows.iter().filter(|p| p.is_group_header()) {
        let group_id = p.id_grupo.unwrap_or(NO_GROUP);
        if group_id == NO_GROUP || index.contains_key(&group_id) {
            continue;
        }
        index.insert(group_id, groups.len());
        groups.push(ProjectGroup {
            group_id,
            name: p.descripcion.clone().unwrap_or_else(|| "Unnamed".to_string()),
            projects: Vec::new(),
        });
    }

    for p in rows.iter().filter(|p| p.is_project()) {
        let group_id = p.id_grupo.unwrap_or(NO_GROUP);
        if let Some(&i) = index.get(&group_id) {
            groups[i].projects.push(p.clone());
        }
    }

    groups
}

/// Projects still in progress.
pub fn active_count(projects: &[Project]) -> usize {
    projects.iter().filter(|p| p.status().is_active()).count()
}

/// Rows that are real projects (not group headers).
pub fn project_count(rows: &[Project]) -> usize {
    rows.iter().filter(|p| p.is_project()).count()
}

/// Fetch the list visible to the logged-in user.
pub async fn fetch(api: &ApiClient, session: &Session, source: &str) -> AppResult<Vec<Project>> {
    api.list_projects(&session.user_id.to_string(), source).await
}
