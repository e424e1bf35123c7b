use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::contact::application::ports::{
    ContactMessageFields, ContactMessageRecord, ContactMessageRepository,
};
use crate::shared::content::error::RepoError;
use crate::shared::content::toggle::toggle_flag;

#[derive(Debug, Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
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
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn insert(
        &self,
        fields: ContactMessageFields,
    ) -> Result<ContactMessageRecord, RepoError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(fields.full_name),
            email: Set(fields.email),
            phone: Set(fields.phone),
            reason: Set(fields.reason),
            message: Set(fields.message),
            is_read: Set(fields.is_read),
            ..Default::default()
        };

        let inserted: Model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_all(&self) -> Result<Vec<ContactMessageRecord>, RepoError> {
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

    async fn toggle_read(&self, id: Uuid) -> Result<bool, RepoError> {
        toggle_flag::<Entity, _>(&*self.db, id, Column::IsRead).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: Uuid) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+44 20 7946 0000".to_string()),
            reason: Some("Collaboration".to_string()),
            message: "Let's build something.".to_string(),
            is_read: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id)]])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .insert(ContactMessageFields {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
                reason: None,
                message: "Let's build something.".to_string(),
                is_read: false,
            })
            .await
            .unwrap();

        assert_eq!(record.id, id);
        assert!(!record.is_read);
    }
}
