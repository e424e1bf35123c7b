use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationStatus {
    Completed,
    Pursuing,
}

impl EducationStatus {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        match raw {
            "Completed" => Ok(EducationStatus::Completed),
            "Pursuing" => Ok(EducationStatus::Pursuing),
            other => Err(ContentError::Validation(format!(
                "status must be Completed or Pursuing, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationStatus::Completed => "Completed",
            EducationStatus::Pursuing => "Pursuing",
        }
    }
}

/// Exactly one of `completion_year` / `expected_completion_year` is set,
/// matching the status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub id: Uuid,
    pub degree: String,
    pub specialization: Option<String>,
    pub institute_name: String,
    pub location: Option<String>,
    pub status: EducationStatus,
    pub completion_year: Option<i32>,
    pub expected_completion_year: Option<i32>,
    pub grade: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EducationRecord {
    /// The year used for sorting, whichever side of the invariant holds it.
    pub fn sort_year(&self) -> i32 {
        self.completion_year
            .or(self.expected_completion_year)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EducationDraft {
    pub degree: Option<String>,
    pub specialization: Option<String>,
    pub institute_name: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub completion_year: Option<i32>,
    pub expected_completion_year: Option<i32>,
    pub grade: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EducationFields {
    pub degree: String,
    pub specialization: Option<String>,
    pub institute_name: String,
    pub location: Option<String>,
    pub status: EducationStatus,
    pub completion_year: Option<i32>,
    pub expected_completion_year: Option<i32>,
    pub grade: Option<String>,
    pub logo_url: Option<String>,
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn insert(&self, fields: EducationFields) -> Result<EducationRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<EducationRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<EducationRecord, RepoError>;
    async fn update(&self, id: Uuid, fields: EducationFields)
        -> Result<EducationRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationRecord>, ContentError>;
}

#[async_trait]
pub trait GetEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<EducationRecord, ContentError>;
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, draft: EducationDraft) -> Result<EducationRecord, ContentError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: EducationDraft,
    ) -> Result<EducationRecord, ContentError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
