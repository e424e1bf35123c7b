use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::content::error::ContentError;
use crate::skills::application::ports::{
    CreateSkillCategoryUseCase, CreateSkillUseCase, DeleteSkillCategoryUseCase, DeleteSkillUseCase,
    ListSkillCatalogUseCase, SkillCatalogEntry, SkillCategoryDraft, SkillCategoryFields,
    SkillCategoryRecord, SkillDraft, SkillFields, SkillRecord, SkillRepository,
    UpdateSkillCategoryUseCase, UpdateSkillUseCase,
};

#[derive(Debug, Clone)]
pub struct SkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate_category(
    draft: SkillCategoryDraft,
    existing: Option<&SkillCategoryRecord>,
) -> Result<SkillCategoryFields, ContentError> {
    let name = draft
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .or_else(|| existing.map(|e| e.name.clone()))
        .ok_or_else(|| ContentError::required("name"))?;

    Ok(SkillCategoryFields {
        name,
        description: draft
            .description
            .or_else(|| existing.and_then(|e| e.description.clone())),
        color: draft.color.or_else(|| existing.and_then(|e| e.color.clone())),
        position: draft
            .position
            .or_else(|| existing.map(|e| e.position))
            .unwrap_or(0),
    })
}

fn validate_skill(
    draft: SkillDraft,
    existing: Option<&SkillRecord>,
) -> Result<SkillFields, ContentError> {
    let name = draft
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .or_else(|| existing.map(|e| e.name.clone()))
        .ok_or_else(|| ContentError::required("name"))?;

    let category_id = draft
        .category_id
        .or_else(|| existing.map(|e| e.category_id))
        .ok_or_else(|| ContentError::required("categoryId"))?;

    Ok(SkillFields {
        name,
        category_id,
        image_url: draft
            .image_url
            .or_else(|| existing.and_then(|e| e.image_url.clone())),
    })
}

#[async_trait]
impl<R> ListSkillCatalogUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self) -> Result<Vec<SkillCatalogEntry>, ContentError> {
        Ok(self.repository.catalog().await?)
    }
}

#[async_trait]
impl<R> CreateSkillCategoryUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(
        &self,
        draft: SkillCategoryDraft,
    ) -> Result<SkillCategoryRecord, ContentError> {
        let fields = validate_category(draft, None)?;
        Ok(self.repository.insert_category(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateSkillCategoryUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: SkillCategoryDraft,
    ) -> Result<SkillCategoryRecord, ContentError> {
        let existing = self.repository.find_category(id).await?;
        let fields = validate_category(draft, Some(&existing))?;
        Ok(self.repository.update_category(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteSkillCategoryUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_category(id).await?)
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self, draft: SkillDraft) -> Result<SkillRecord, ContentError> {
        let fields = validate_skill(draft, None)?;
        Ok(self.repository.insert_skill(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self, id: Uuid, draft: SkillDraft) -> Result<SkillRecord, ContentError> {
        let existing = self.repository.find_skill(id).await?;
        let fields = validate_skill(draft, Some(&existing))?;
        Ok(self.repository.update_skill(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for SkillService<R>
where
    R: SkillRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_skill(id).await?)
    }
}
