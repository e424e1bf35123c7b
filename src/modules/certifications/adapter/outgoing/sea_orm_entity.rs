use sea_orm::entity::prelude::*;

use crate::certifications::application::ports::CertificationRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub organization: String,

    pub completion_month: Option<String>,

    pub completion_year: Option<i32>,

    pub credential_id: Option<String>,

    pub credential_url: Option<String>,

    pub description: Option<String>,

    pub skills: Json,

    pub pinned: bool,

    pub certificate_url: Option<String>,

    pub image_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> CertificationRecord {
        let skills: Vec<String> = serde_json::from_value(self.skills.clone()).unwrap_or_default();

        CertificationRecord {
            id: self.id,
            title: self.title.clone(),
            organization: self.organization.clone(),
            completion_month: self.completion_month.clone(),
            completion_year: self.completion_year,
            credential_id: self.credential_id.clone(),
            credential_url: self.credential_url.clone(),
            description: self.description.clone(),
            skills,
            pinned: self.pinned,
            certificate_url: self.certificate_url.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
