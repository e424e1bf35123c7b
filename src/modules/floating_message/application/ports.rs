use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::toggle::ToggleOutcome;

pub const MESSAGE_MAX_LEN: usize = 200;
pub const HIGHLIGHT_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingMessageRecord {
    pub id: Uuid,
    pub message: String,
    pub highlight_text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingMessageDraft {
    pub message: Option<String>,
    pub highlight_text: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct FloatingMessageFields {
    pub message: String,
    pub highlight_text: String,
    pub is_active: bool,
}

/// What the public banner endpoint returns. `message` is null when no record
/// is active.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub message: Option<String>,
    pub highlight_text: String,
}

#[async_trait]
pub trait FloatingMessageRepository: Send + Sync {
    async fn insert(&self, fields: FloatingMessageFields)
        -> Result<FloatingMessageRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<FloatingMessageRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<FloatingMessageRecord, RepoError>;
    async fn find_active(&self) -> Result<Option<FloatingMessageRecord>, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        fields: FloatingMessageFields,
    ) -> Result<FloatingMessageRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    /// Clears `is_active` on every record. First half of the activation
    /// sequence; see the service for the ordering contract.
    async fn deactivate_all(&self) -> Result<(), RepoError>;
}

#[async_trait]
pub trait GetActiveBannerUseCase: Send + Sync {
    async fn execute(&self) -> Result<BannerView, ContentError>;
}

#[async_trait]
pub trait ListFloatingMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FloatingMessageRecord>, ContentError>;
}

#[async_trait]
pub trait CreateFloatingMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        draft: FloatingMessageDraft,
    ) -> Result<FloatingMessageRecord, ContentError>;
}

#[async_trait]
pub trait UpdateFloatingMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: FloatingMessageDraft,
    ) -> Result<FloatingMessageRecord, ContentError>;
}

#[async_trait]
pub trait DeleteFloatingMessageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleFloatingMessageActiveUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError>;
}
