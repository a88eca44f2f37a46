use super::de;
use super::project_status::ProjectStatus;
use serde::{Deserialize, Serialize};

/// One row of the project list endpoint.
///
/// The same shape carries two kinds of rows: group headers (`nro` set, no
/// `id_proyecto`) and projects (`id_proyecto` set).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "de::opt_string")]
    pub nro: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub id_grupo: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id_proyecto: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id_clasificacion: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub modalidad: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub fecha_registro: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub fecha_modificacion: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub desc_clasi: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub icono: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub fuente: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub estado: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub moneda: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub mostrar: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub icomost: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub id_usuario: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub asignado: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub simbolo: Option<String>,
}

fn non_empty(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.is_empty())
}

impl Project {
    /// A group header row: numbered, without a project id.
    pub fn is_group_header(&self) -> bool {
        non_empty(&self.nro) && !non_empty(&self.id_proyecto)
    }

    /// A real project row.
    pub fn is_project(&self) -> bool {
        non_empty(&self.id_proyecto)
    }

    pub fn status(&self) -> ProjectStatus {
        ProjectStatus::from_code(self.estado.as_deref())
    }

    pub fn project_id(&self) -> &str {
        self.id_proyecto.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.descripcion.as_deref().unwrap_or("")
    }
}

/// A group header with the projects listed under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectGroup {
    pub group_id: i64,
    pub name: String,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numbers_and_strings_interchangeably() {
        let json = r#"{"nro":1,"id_grupo":"4","id_proyecto":120,"descripcion":"Bridge","estado":"0","mostrar":1}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.nro.as_deref(), Some("1"));
        assert_eq!(p.id_grupo, Some(4));
        assert_eq!(p.project_id(), "120");
        assert_eq!(p.status(), ProjectStatus::InProgress);
        assert!(p.is_project());
        assert!(!p.is_group_header());
    }

    #[test]
    fn header_rows_have_nro_and_no_project_id() {
        let p: Project = serde_json::from_str(r#"{"nro":"2","id_grupo":7,"id_proyecto":""}"#).unwrap();
        assert!(p.is_group_header());
        assert!(!p.is_project());
    }
}
