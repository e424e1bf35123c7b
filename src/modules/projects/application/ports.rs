use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::toggle::ToggleOutcome;

//
// ──────────────────────────────────────────────────────────
// Domain types
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        match raw {
            "Ongoing" => Ok(ProjectStatus::Ongoing),
            "Completed" => Ok(ProjectStatus::Completed),
            other => Err(ContentError::Validation(format!(
                "status must be Ongoing or Completed, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// A persisted project as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub status: ProjectStatus,
    pub completion_month: Option<String>,
    pub completion_year: Option<i32>,
    pub image_url: String,
    pub skill_ids: Vec<Uuid>,
    pub links: Vec<ProjectLink>,
    pub show_on_home: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw form input for create and update. `None` means the field was not
/// submitted; updates merge the draft over the stored record before
/// validation.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub status: Option<String>,
    pub completion_month: Option<String>,
    pub completion_year: Option<i32>,
    pub image_url: Option<String>,
    pub skill_ids: Option<Vec<Uuid>>,
    pub links: Option<Vec<ProjectLink>>,
    pub show_on_home: Option<bool>,
}

/// A fully validated set of project fields, ready to persist.
#[derive(Debug, Clone)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub status: ProjectStatus,
    pub completion_month: Option<String>,
    pub completion_year: Option<i32>,
    pub image_url: String,
    pub skill_ids: Vec<Uuid>,
    pub links: Vec<ProjectLink>,
    pub show_on_home: bool,
}

//
// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, fields: ProjectFields) -> Result<ProjectRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<ProjectRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ProjectRecord, RepoError>;
    async fn update(&self, id: Uuid, fields: ProjectFields) -> Result<ProjectRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn toggle_show_on_home(&self, id: Uuid) -> Result<bool, RepoError>;
}

//
// ──────────────────────────────────────────────────────────
// Incoming ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ContentError>;
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProjectRecord, ContentError>;
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectRecord, ContentError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: ProjectDraft) -> Result<ProjectRecord, ContentError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleProjectShowOnHomeUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError>;
}
