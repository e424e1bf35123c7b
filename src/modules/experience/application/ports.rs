use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceCategory {
    Job,
    Internship,
    Freelance,
}

impl ExperienceCategory {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        match raw {
            "Job" => Ok(ExperienceCategory::Job),
            "Internship" => Ok(ExperienceCategory::Internship),
            "Freelance" => Ok(ExperienceCategory::Freelance),
            other => Err(ContentError::Validation(format!(
                "category must be Job, Internship or Freelance, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceCategory::Job => "Job",
            ExperienceCategory::Internship => "Internship",
            ExperienceCategory::Freelance => "Freelance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceStatus {
    Ongoing,
    Completed,
}

impl ExperienceStatus {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        match raw {
            "Ongoing" => Ok(ExperienceStatus::Ongoing),
            "Completed" => Ok(ExperienceStatus::Completed),
            other => Err(ContentError::Validation(format!(
                "status must be Ongoing or Completed, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceStatus::Ongoing => "Ongoing",
            ExperienceStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub category: ExperienceCategory,
    pub company_name: String,
    pub role: String,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub status: ExperienceStatus,
    pub start_month: String,
    pub start_year: i32,
    pub end_month: Option<String>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
    pub technology_ids: Vec<Uuid>,
    pub skill_tags: Vec<String>,
    pub company_logo_url: Option<String>,
    pub offer_letter_url: Option<String>,
    pub completion_certificate_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub category: Option<String>,
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub start_month: Option<String>,
    pub start_year: Option<i32>,
    pub end_month: Option<String>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
    pub technology_ids: Option<Vec<Uuid>>,
    pub skill_tags: Option<Vec<String>>,
    pub company_logo_url: Option<String>,
    pub offer_letter_url: Option<String>,
    pub completion_certificate_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExperienceFields {
    pub category: ExperienceCategory,
    pub company_name: String,
    pub role: String,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub status: ExperienceStatus,
    pub start_month: String,
    pub start_year: i32,
    pub end_month: Option<String>,
    pub end_year: Option<i32>,
    pub description: Option<String>,
    pub technology_ids: Vec<Uuid>,
    pub skill_tags: Vec<String>,
    pub company_logo_url: Option<String>,
    pub offer_letter_url: Option<String>,
    pub completion_certificate_url: Option<String>,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn insert(&self, fields: ExperienceFields) -> Result<ExperienceRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<ExperienceRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ExperienceRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<ExperienceRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ContentError>;
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ExperienceRecord, ContentError>;
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(&self, draft: ExperienceDraft) -> Result<ExperienceRecord, ContentError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<ExperienceRecord, ContentError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
