use sea_orm::entity::prelude::*;

use crate::education::application::ports::{EducationRecord, EducationStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub degree: String,

    pub specialization: Option<String>,

    pub institute_name: String,

    pub location: Option<String>,

    pub status: String,

    pub completion_year: Option<i32>,

    pub expected_completion_year: Option<i32>,

    pub grade: Option<String>,

    pub logo_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> EducationRecord {
        EducationRecord {
            id: self.id,
            degree: self.degree.clone(),
            specialization: self.specialization.clone(),
            institute_name: self.institute_name.clone(),
            location: self.location.clone(),
            status: EducationStatus::parse(&self.status).unwrap_or(EducationStatus::Completed),
            completion_year: self.completion_year,
            expected_completion_year: self.expected_completion_year,
            grade: self.grade.clone(),
            logo_url: self.logo_url.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
