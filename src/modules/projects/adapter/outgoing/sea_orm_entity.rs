use sea_orm::entity::prelude::*;

use crate::projects::application::ports::{ProjectLink, ProjectRecord, ProjectStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub detailed_description: Option<String>,

    pub status: String,

    pub completion_month: Option<String>,

    pub completion_year: Option<i32>,

    pub image_url: String,

    pub skill_ids: Json,

    pub links: Json,

    pub show_on_home: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ProjectRecord {
        let skill_ids: Vec<Uuid> =
            serde_json::from_value(self.skill_ids.clone()).unwrap_or_default();
        let links: Vec<ProjectLink> =
            serde_json::from_value(self.links.clone()).unwrap_or_default();

        ProjectRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            detailed_description: self.detailed_description.clone(),
            status: ProjectStatus::parse(&self.status).unwrap_or(ProjectStatus::Ongoing),
            completion_month: self.completion_month.clone(),
            completion_year: self.completion_year,
            image_url: self.image_url.clone(),
            skill_ids,
            links,
            show_on_home: self.show_on_home,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
