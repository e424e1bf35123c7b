use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::links::SocialLink;
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationType {
    None,
    Experience,
    Education,
}

impl AssociationType {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        match raw {
            "none" => Ok(AssociationType::None),
            "experience" => Ok(AssociationType::Experience),
            "education" => Ok(AssociationType::Education),
            other => Err(ContentError::Validation(format!(
                "associatedWith.type must be none, experience or education, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationType::None => "none",
            AssociationType::Experience => "experience",
            AssociationType::Education => "education",
        }
    }
}

/// What the award is tied to. The id is a free reference; it is not checked
/// against the experience or education collections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    #[serde(rename = "type")]
    pub kind: AssociationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub associated_with: Association,
    pub description: Option<String>,
    pub issue_month: Option<String>,
    pub issue_year: Option<i32>,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
    pub certificate_link: Option<String>,
    pub featured: bool,
    pub social_links: Vec<SocialLink>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AwardDraft {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub associated_type: Option<String>,
    pub associated_id: Option<Uuid>,
    pub description: Option<String>,
    pub issue_month: Option<String>,
    pub issue_year: Option<i32>,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
    pub certificate_link: Option<String>,
    pub featured: Option<bool>,
    pub social_links: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone)]
pub struct AwardFields {
    pub title: String,
    pub organization: String,
    pub associated_with: Association,
    pub description: Option<String>,
    pub issue_month: Option<String>,
    pub issue_year: Option<i32>,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
    pub certificate_link: Option<String>,
    pub featured: bool,
    pub social_links: Vec<SocialLink>,
}

#[async_trait]
pub trait AwardRepository: Send + Sync {
    async fn insert(&self, fields: AwardFields) -> Result<AwardRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<AwardRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<AwardRecord, RepoError>;
    async fn update(&self, id: Uuid, fields: AwardFields) -> Result<AwardRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn toggle_featured(&self, id: Uuid) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait ListAwardsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AwardRecord>, ContentError>;
}

#[async_trait]
pub trait GetAwardUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<AwardRecord, ContentError>;
}

#[async_trait]
pub trait CreateAwardUseCase: Send + Sync {
    async fn execute(&self, draft: AwardDraft) -> Result<AwardRecord, ContentError>;
}

#[async_trait]
pub trait UpdateAwardUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: AwardDraft) -> Result<AwardRecord, ContentError>;
}

#[async_trait]
pub trait DeleteAwardUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleAwardFeaturedUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError>;
}
