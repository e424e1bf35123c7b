use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::{category, skill};
use crate::shared::content::error::RepoError;
use crate::skills::application::ports::{
    SkillCatalogEntry, SkillCategoryFields, SkillCategoryRecord, SkillFields, SkillRecord,
    SkillRepository,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
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

fn category_active(fields: SkillCategoryFields) -> category::ActiveModel {
    category::ActiveModel {
        name: Set(fields.name),
        description: Set(fields.description),
        color: Set(fields.color),
        position: Set(fields.position),
        ..Default::default()
    }
}

fn skill_active(fields: SkillFields) -> skill::ActiveModel {
    skill::ActiveModel {
        category_id: Set(fields.category_id),
        name: Set(fields.name),
        image_url: Set(fields.image_url),
        ..Default::default()
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn insert_category(
        &self,
        fields: SkillCategoryFields,
    ) -> Result<SkillCategoryRecord, RepoError> {
        let mut active = category_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_category(&self, id: Uuid) -> Result<SkillCategoryRecord, RepoError> {
        category::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record())
            .ok_or(RepoError::NotFound)
    }

    async fn update_category(
        &self,
        id: Uuid,
        fields: SkillCategoryFields,
    ) -> Result<SkillCategoryRecord, RepoError> {
        let mut active = category_active(fields);
        active.id = Set(id);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.to_record())
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), RepoError> {
        let result = category::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn catalog(&self) -> Result<Vec<SkillCatalogEntry>, RepoError> {
        let rows = category::Entity::find()
            .order_by_asc(category::Column::Position)
            .find_with_related(skill::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(c, skills)| SkillCatalogEntry {
                id: c.id,
                name: c.name,
                description: c.description,
                color: c.color,
                position: c.position,
                skills: skills.iter().map(skill::Model::to_record).collect(),
            })
            .collect())
    }

    async fn insert_skill(&self, fields: SkillFields) -> Result<SkillRecord, RepoError> {
        let mut active = skill_active(fields);
        active.id = Set(Uuid::new_v4());

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_record())
    }

    async fn find_skill(&self, id: Uuid) -> Result<SkillRecord, RepoError> {
        skill::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_record())
            .ok_or(RepoError::NotFound)
    }

    async fn update_skill(&self, id: Uuid, fields: SkillFields) -> Result<SkillRecord, RepoError> {
        let mut active = skill_active(fields);
        active.id = Set(id);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(updated.to_record())
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), RepoError> {
        let result = skill::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
