use sea_orm::entity::prelude::*;

use crate::experience::application::ports::{
    ExperienceCategory, ExperienceRecord, ExperienceStatus,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub category: String,

    pub company_name: String,

    pub role: String,

    pub employment_type: Option<String>,

    pub location: Option<String>,

    pub status: String,

    pub start_month: String,

    pub start_year: i32,

    pub end_month: Option<String>,

    pub end_year: Option<i32>,

    pub description: Option<String>,

    pub technology_ids: Json,

    pub skill_tags: Json,

    pub company_logo_url: Option<String>,

    pub offer_letter_url: Option<String>,

    pub completion_certificate_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ExperienceRecord {
        let technology_ids: Vec<Uuid> =
            serde_json::from_value(self.technology_ids.clone()).unwrap_or_default();
        let skill_tags: Vec<String> =
            serde_json::from_value(self.skill_tags.clone()).unwrap_or_default();

        ExperienceRecord {
            id: self.id,
            category: ExperienceCategory::parse(&self.category)
                .unwrap_or(ExperienceCategory::Job),
            company_name: self.company_name.clone(),
            role: self.role.clone(),
            employment_type: self.employment_type.clone(),
            location: self.location.clone(),
            status: ExperienceStatus::parse(&self.status).unwrap_or(ExperienceStatus::Ongoing),
            start_month: self.start_month.clone(),
            start_year: self.start_year,
            end_month: self.end_month.clone(),
            end_year: self.end_year,
            description: self.description.clone(),
            technology_ids,
            skill_tags,
            company_logo_url: self.company_logo_url.clone(),
            offer_letter_url: self.offer_letter_url.clone(),
            completion_certificate_url: self.completion_certificate_url.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
