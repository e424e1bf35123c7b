use sea_orm::entity::prelude::*;

use crate::testimonials::application::ports::TestimonialRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub full_name: String,

    pub email: String,

    pub rating: i16,

    pub feedback: String,

    pub website_link: Option<String>,

    pub profile_image_url: Option<String>,

    pub is_approved: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> TestimonialRecord {
        TestimonialRecord {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            rating: self.rating,
            feedback: self.feedback.clone(),
            website_link: self.website_link.clone(),
            profile_image_url: self.profile_image_url.clone(),
            is_approved: self.is_approved,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
