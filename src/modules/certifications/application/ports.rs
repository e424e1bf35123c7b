use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub completion_month: Option<String>,
    pub completion_year: Option<i32>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub pinned: bool,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CertificationDraft {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub completion_month: Option<String>,
    pub completion_year: Option<i32>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub pinned: Option<bool>,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CertificationFields {
    pub title: String,
    pub organization: String,
    pub completion_month: Option<String>,
    pub completion_year: Option<i32>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub pinned: bool,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn insert(&self, fields: CertificationFields) -> Result<CertificationRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<CertificationRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<CertificationRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        fields: CertificationFields,
    ) -> Result<CertificationRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn toggle_pinned(&self, id: Uuid) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait ListCertificationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CertificationRecord>, ContentError>;
}

#[async_trait]
pub trait GetCertificationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<CertificationRecord, ContentError>;
}

#[async_trait]
pub trait CreateCertificationUseCase: Send + Sync {
    async fn execute(&self, draft: CertificationDraft)
        -> Result<CertificationRecord, ContentError>;
}

#[async_trait]
pub trait UpdateCertificationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: CertificationDraft,
    ) -> Result<CertificationRecord, ContentError>;
}

#[async_trait]
pub trait DeleteCertificationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleCertificationPinnedUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError>;
}
