use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::awards::application::ports::{AwardFields, AwardRecord, AwardRepository};
use crate::shared::content::error::RepoError;
use crate::shared::content::toggle::toggle_flag;

#[derive(Debug, Clone)]
pub struct AwardRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AwardRepositoryPostgres {
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

fn fields_to_active(fields: AwardFields) -> ActiveModel {
    ActiveModel {
        title: Set(fields.title),
        organization: Set(fields.organization),
        associated_type: Set(fields.associated_with.kind.as_str().to_string()),
        associated_id: Set(fields.associated_with.id),
        description: Set(fields.description),
        issue_month: Set(fields.issue_month),
        issue_year: Set(fields.issue_year),
        certificate_url: Set(fields.certificate_url),
        image_url: Set(fields.image_url),
        certificate_link: Set(fields.certificate_link),
        featured: Set(fields.featured),
        social_links: Set(serde_json::json!(fields.social_links)),
        ..Default::default()
    }
}

#[async_trait]
impl AwardRepository for AwardRepositoryPostgres {
    async fn insert(&self, fields: AwardFields) -> Result<AwardRecord, RepoError> {
        let mut active = fields_to_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<AwardRecord>, RepoError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<AwardRecord, RepoError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record())
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: Uuid, fields: AwardFields) -> Result<AwardRecord, RepoError> {
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

    async fn toggle_featured(&self, id: Uuid) -> Result<bool, RepoError> {
        toggle_flag::<Entity, _>(&*self.db, id, Column::Featured).await
    }
}
