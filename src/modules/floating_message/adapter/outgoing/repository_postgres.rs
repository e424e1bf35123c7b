use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::floating_message::application::ports::{
    FloatingMessageFields, FloatingMessageRecord, FloatingMessageRepository,
};
use crate::shared::content::error::RepoError;

#[derive(Debug, Clone)]
pub struct FloatingMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FloatingMessageRepositoryPostgres {
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

fn fields_to_active(fields: FloatingMessageFields) -> ActiveModel {
    ActiveModel {
        message: Set(fields.message),
        highlight_text: Set(fields.highlight_text),
        is_active: Set(fields.is_active),
        ..Default::default()
    }
}

#[async_trait]
impl FloatingMessageRepository for FloatingMessageRepositoryPostgres {
    async fn insert(
        &self,
        fields: FloatingMessageFields,
    ) -> Result<FloatingMessageRecord, RepoError> {
        let mut active = fields_to_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<FloatingMessageRecord>, RepoError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.iter().map(Model::to_record).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<FloatingMessageRecord, RepoError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record())
            .ok_or(RepoError::NotFound)
    }

    async fn find_active(&self) -> Result<Option<FloatingMessageRecord>, RepoError> {
        Ok(Entity::find()
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record()))
    }

    async fn update(
        &self,
        id: Uuid,
        fields: FloatingMessageFields,
    ) -> Result<FloatingMessageRecord, RepoError> {
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

    async fn deactivate_all(&self) -> Result<(), RepoError> {
        Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
