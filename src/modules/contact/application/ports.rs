use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// JSON body of the public contact form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageDraft {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactMessageFields {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub message: String,
    pub is_read: bool,
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, fields: ContactMessageFields)
        -> Result<ContactMessageRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<ContactMessageRecord>, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn toggle_read(&self, id: Uuid) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        draft: ContactMessageDraft,
    ) -> Result<ContactMessageRecord, ContentError>;
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessageRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteContactMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleContactReadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError>;
}
