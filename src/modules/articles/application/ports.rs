use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::links::SocialLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleStatus {
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        match raw {
            "Draft" => Ok(ArticleStatus::Draft),
            "Published" => Ok(ArticleStatus::Published),
            other => Err(ContentError::Validation(format!(
                "status must be Draft or Published, got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Published => "Published",
        }
    }
}

/// `published_at` is set when the article transitions to Published and
/// cleared when it goes back to Draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, fields: ArticleFields) -> Result<ArticleRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<ArticleRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ArticleRecord, RepoError>;
    async fn update(&self, id: Uuid, fields: ArticleFields) -> Result<ArticleRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait ListPublishedArticlesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ArticleRecord>, ContentError>;
}

#[async_trait]
pub trait ListAllArticlesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ArticleRecord>, ContentError>;
}

#[async_trait]
pub trait GetArticleUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ArticleRecord, ContentError>;
}

#[async_trait]
pub trait CreateArticleUseCase: Send + Sync {
    async fn execute(&self, draft: ArticleDraft) -> Result<ArticleRecord, ContentError>;
}

#[async_trait]
pub trait UpdateArticleUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: ArticleDraft) -> Result<ArticleRecord, ContentError>;
}

#[async_trait]
pub trait DeleteArticleUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleArticleStatusUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ArticleRecord, ContentError>;
}
