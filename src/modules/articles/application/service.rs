use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::articles::application::ports::{
    ArticleDraft, ArticleFields, ArticleRecord, ArticleRepository, ArticleStatus,
    CreateArticleUseCase, DeleteArticleUseCase, GetArticleUseCase, ListAllArticlesUseCase,
    ListPublishedArticlesUseCase, ToggleArticleStatusUseCase, UpdateArticleUseCase,
};
use crate::shared::content::error::ContentError;

#[derive(Debug, Clone)]
pub struct ArticleService<R>
where
    R: ArticleRepository,
{
    repository: R,
}

impl<R> ArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate(
    draft: ArticleDraft,
    existing: Option<&ArticleRecord>,
) -> Result<ArticleFields, ContentError> {
    let title = draft
        .title
        .or_else(|| existing.map(|e| e.title.clone()))
        .ok_or_else(|| ContentError::required("title"))?;

    let status = match draft.status {
        Some(raw) => ArticleStatus::parse(&raw)?,
        None => existing.map(|e| e.status).unwrap_or(ArticleStatus::Draft),
    };

    // Publication timestamps track status transitions. A record created as
    // Published gets stamped now; flipping back to Draft clears it.
    let published_at = match status {
        ArticleStatus::Published => existing
            .and_then(|e| e.published_at)
            .or_else(|| Some(Utc::now())),
        ArticleStatus::Draft => None,
    };

    Ok(ArticleFields {
        title,
        description: draft
            .description
            .or_else(|| existing.and_then(|e| e.description.clone())),
        thumbnail_url: draft
            .thumbnail_url
            .or_else(|| existing.and_then(|e| e.thumbnail_url.clone())),
        social_links: draft
            .social_links
            .or_else(|| existing.map(|e| e.social_links.clone()))
            .unwrap_or_default(),
        status,
        published_at,
    })
}

#[async_trait]
impl<R> ListPublishedArticlesUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self) -> Result<Vec<ArticleRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.retain(|r| r.status == ArticleStatus::Published);
        records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(records)
    }
}

#[async_trait]
impl<R> ListAllArticlesUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self) -> Result<Vec<ArticleRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[async_trait]
impl<R> GetArticleUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ArticleRecord, ContentError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> CreateArticleUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self, draft: ArticleDraft) -> Result<ArticleRecord, ContentError> {
        let fields = validate(draft, None)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateArticleUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self, id: Uuid, draft: ArticleDraft) -> Result<ArticleRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteArticleUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleArticleStatusUseCase for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ArticleRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;

        let (status, published_at) = match existing.status {
            ArticleStatus::Draft => (ArticleStatus::Published, Some(Utc::now())),
            ArticleStatus::Published => (ArticleStatus::Draft, None),
        };

        let fields = ArticleFields {
            title: existing.title.clone(),
            description: existing.description.clone(),
            thumbnail_url: existing.thumbnail_url.clone(),
            social_links: existing.social_links.clone(),
            status,
            published_at,
        };
        Ok(self.repository.update(id, fields).await?)
    }
}
