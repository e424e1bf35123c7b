use sea_orm::entity::prelude::*;

use crate::floating_message::application::ports::FloatingMessageRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "floating_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub message: String,

    pub highlight_text: String,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> FloatingMessageRecord {
        FloatingMessageRecord {
            id: self.id,
            message: self.message.clone(),
            highlight_text: self.highlight_text.clone(),
            is_active: self.is_active,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
