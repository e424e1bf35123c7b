use sea_orm::entity::prelude::*;

use crate::awards::application::ports::{Association, AssociationType, AwardRecord};
use crate::shared::content::links::SocialLink;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "awards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub organization: String,

    pub associated_type: String,

    pub associated_id: Option<Uuid>,

    pub description: Option<String>,

    pub issue_month: Option<String>,

    pub issue_year: Option<i32>,

    pub certificate_url: Option<String>,

    pub image_url: Option<String>,

    pub certificate_link: Option<String>,

    pub featured: bool,

    pub social_links: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> AwardRecord {
        let social_links: Vec<SocialLink> =
            serde_json::from_value(self.social_links.clone()).unwrap_or_default();
        let kind =
            AssociationType::parse(&self.associated_type).unwrap_or(AssociationType::None);

        AwardRecord {
            id: self.id,
            title: self.title.clone(),
            organization: self.organization.clone(),
            associated_with: Association {
                kind,
                id: match kind {
                    AssociationType::None => None,
                    _ => self.associated_id,
                },
            },
            description: self.description.clone(),
            issue_month: self.issue_month.clone(),
            issue_year: self.issue_year,
            certificate_url: self.certificate_url.clone(),
            image_url: self.image_url.clone(),
            certificate_link: self.certificate_link.clone(),
            featured: self.featured,
            social_links,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
