use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::certifications::application::ports::{
    CertificationFields, CertificationRecord, CertificationRepository,
};
use crate::shared::content::error::RepoError;
use crate::shared::content::toggle::toggle_flag;

#[derive(Debug, Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
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

fn fields_to_active(fields: CertificationFields) -> ActiveModel {
    ActiveModel {
        title: Set(fields.title),
        organization: Set(fields.organization),
        completion_month: Set(fields.completion_month),
        completion_year: Set(fields.completion_year),
        credential_id: Set(fields.credential_id),
        credential_url: Set(fields.credential_url),
        description: Set(fields.description),
        skills: Set(serde_json::json!(fields.skills)),
        pinned: Set(fields.pinned),
        certificate_url: Set(fields.certificate_url),
        image_url: Set(fields.image_url),
        ..Default::default()
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryPostgres {
    async fn insert(&self, fields: CertificationFields) -> Result<CertificationRecord, RepoError> {
        let mut active = fields_to_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<CertificationRecord>, RepoError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CertificationRecord, RepoError> {
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
        fields: CertificationFields,
    ) -> Result<CertificationRecord, RepoError> {
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

    async fn toggle_pinned(&self, id: Uuid) -> Result<bool, RepoError> {
        toggle_flag::<Entity, _>(&*self.db, id, Column::Pinned).await
    }
}
