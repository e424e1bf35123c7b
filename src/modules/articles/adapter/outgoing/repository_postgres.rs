use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Entity, Model};
use crate::articles::application::ports::{ArticleFields, ArticleRecord, ArticleRepository};
use crate::shared::content::error::RepoError;

#[derive(Debug, Clone)]
pub struct ArticleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ArticleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Database(other.to_string()),
    }
}

fn fields_to_active(fields: ArticleFields) -> ActiveModel {
    ActiveModel {
        title: Set(fields.title),
        description: Set(fields.description),
        thumbnail_url: Set(fields.thumbnail_url),
        social_links: Set(serde_json::json!(fields.social_links)),
        status: Set(fields.status.as_str().to_string()),
        published_at: Set(fields.published_at.map(Into::into)),
        ..Default::default()
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryPostgres {
    async fn insert(&self, fields: ArticleFields) -> Result<ArticleRecord, RepoError> {
        let mut active = fields_to_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<ArticleRecord>, RepoError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ArticleRecord, RepoError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record())
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: Uuid, fields: ArticleFields) -> Result<ArticleRecord, RepoError> {
        let mut active = fields_to_active(fields);
        active.id = Set(id);
        active.updated_at = Set(Utc::now().into());

        let updated: Model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
