use sea_orm::entity::prelude::*;

use crate::contact::application::ports::ContactMessageRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub full_name: String,

    pub email: String,

    pub phone: Option<String>,

    pub reason: Option<String>,

    pub message: String,

    pub is_read: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> ContactMessageRecord {
        ContactMessageRecord {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            reason: self.reason.clone(),
            message: self.message.clone(),
            is_read: self.is_read,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
