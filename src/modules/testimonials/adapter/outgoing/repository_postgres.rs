use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::shared::content::error::RepoError;
use crate::shared::content::toggle::toggle_flag;
use crate::testimonials::application::ports::{
    TestimonialFields, TestimonialRecord, TestimonialRepository,
};

#[derive(Debug, Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
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

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn insert(&self, fields: TestimonialFields) -> Result<TestimonialRecord, RepoError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(fields.full_name),
            email: Set(fields.email),
            rating: Set(fields.rating),
            feedback: Set(fields.feedback),
            website_link: Set(fields.website_link),
            profile_image_url: Set(fields.profile_image_url),
            is_approved: Set(fields.is_approved),
            ..Default::default()
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<TestimonialRecord>, RepoError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(Model::to_record).collect())
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

    async fn toggle_approval(&self, id: Uuid) -> Result<bool, RepoError> {
        toggle_flag::<Entity, _>(&*self.db, id, Column::IsApproved).await
    }
}
