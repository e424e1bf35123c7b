use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};

//
// ──────────────────────────────────────────────────────────
// Domain types
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
}

/// One entry of the public catalog: a category with its skills inlined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: i32,
    pub skills: Vec<SkillRecord>,
}

/// Category create/update payload. Categories are plain JSON; name uniqueness
/// is a convention of the admin UI, not enforced here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SkillCategoryFields {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SkillDraft {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SkillFields {
    pub name: String,
    pub category_id: Uuid,
    pub image_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn insert_category(
        &self,
        fields: SkillCategoryFields,
    ) -> Result<SkillCategoryRecord, RepoError>;
    async fn find_category(&self, id: Uuid) -> Result<SkillCategoryRecord, RepoError>;
    async fn update_category(
        &self,
        id: Uuid,
        fields: SkillCategoryFields,
    ) -> Result<SkillCategoryRecord, RepoError>;
    /// Removes the category; its skills go with it (FK cascade).
    async fn delete_category(&self, id: Uuid) -> Result<(), RepoError>;

    /// Categories ordered by position, each carrying its skills.
    async fn catalog(&self) -> Result<Vec<SkillCatalogEntry>, RepoError>;

    async fn insert_skill(&self, fields: SkillFields) -> Result<SkillRecord, RepoError>;
    async fn find_skill(&self, id: Uuid) -> Result<SkillRecord, RepoError>;
    async fn update_skill(&self, id: Uuid, fields: SkillFields) -> Result<SkillRecord, RepoError>;
    async fn delete_skill(&self, id: Uuid) -> Result<(), RepoError>;
}

//
// ──────────────────────────────────────────────────────────
// Incoming ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListSkillCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillCatalogEntry>, ContentError>;
}

#[async_trait]
pub trait CreateSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, draft: SkillCategoryDraft)
        -> Result<SkillCategoryRecord, ContentError>;
}

#[async_trait]
pub trait UpdateSkillCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: SkillCategoryDraft,
    ) -> Result<SkillCategoryRecord, ContentError>;
}

#[async_trait]
pub trait DeleteSkillCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, draft: SkillDraft) -> Result<SkillRecord, ContentError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: SkillDraft) -> Result<SkillRecord, ContentError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
