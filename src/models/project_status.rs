use serde::Serialize;

/// Project status as encoded in the `estado` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    InProgress, // 0
    Completed,  // 1
    Approved,   // 2
    Unknown,
}

impl ProjectStatus {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("0") => ProjectStatus::InProgress,
            Some("1") => ProjectStatus::Completed,
            Some("2") => ProjectStatus::Approved,
            _ => ProjectStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::Unknown => "Unknown status",
        }
    }

    /// ANSI color used when printing the status label.
    pub fn color(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "\x1b[34m",
            ProjectStatus::Completed => "\x1b[35m",
            ProjectStatus::Approved => "\x1b[32m",
            ProjectStatus::Unknown => "\x1b[90m",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::InProgress)
    }
}
