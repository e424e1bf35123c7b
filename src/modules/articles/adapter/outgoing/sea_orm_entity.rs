use sea_orm::entity::prelude::*;

use crate::articles::application::ports::{ArticleRecord, ArticleStatus};
use crate::shared::content::links::SocialLink;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    pub thumbnail_url: Option<String>,

    pub social_links: Json,

    pub status: String,

    pub published_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ArticleRecord {
        let social_links: Vec<SocialLink> =
            serde_json::from_value(self.social_links.clone()).unwrap_or_default();
        let status = ArticleStatus::parse(&self.status).unwrap_or(ArticleStatus::Draft);

        ArticleRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            social_links,
            status,
            published_at: self.published_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
