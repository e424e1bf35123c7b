use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Entity, Model};
use crate::experience::application::ports::{
    ExperienceFields, ExperienceRecord, ExperienceRepository,
};
use crate::shared::content::error::RepoError;

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
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

fn fields_to_active(fields: ExperienceFields) -> ActiveModel {
    ActiveModel {
        category: Set(fields.category.as_str().to_string()),
        company_name: Set(fields.company_name),
        role: Set(fields.role),
        employment_type: Set(fields.employment_type),
        location: Set(fields.location),
        status: Set(fields.status.as_str().to_string()),
        start_month: Set(fields.start_month),
        start_year: Set(fields.start_year),
        end_month: Set(fields.end_month),
        end_year: Set(fields.end_year),
        description: Set(fields.description),
        technology_ids: Set(serde_json::json!(fields.technology_ids)),
        skill_tags: Set(serde_json::json!(fields.skill_tags)),
        company_logo_url: Set(fields.company_logo_url),
        offer_letter_url: Set(fields.offer_letter_url),
        completion_certificate_url: Set(fields.completion_certificate_url),
        ..Default::default()
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn insert(&self, fields: ExperienceFields) -> Result<ExperienceRecord, RepoError> {
        let mut active = fields_to_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<ExperienceRecord>, RepoError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ExperienceRecord, RepoError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record())
            .ok_or(RepoError::NotFound)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: ExperienceFields,
    ) -> Result<ExperienceRecord, RepoError> {
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
