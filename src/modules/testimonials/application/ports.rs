use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::error::{ContentError, RepoError};
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub rating: i16,
    pub feedback: String,
    pub website_link: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw multipart fields from the public submission form.
#[derive(Debug, Clone, Default)]
pub struct TestimonialDraft {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
    pub website_link: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TestimonialFields {
    pub full_name: String,
    pub email: String,
    pub rating: i16,
    pub feedback: String,
    pub website_link: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_approved: bool,
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn insert(&self, fields: TestimonialFields) -> Result<TestimonialRecord, RepoError>;
    async fn find_all(&self) -> Result<Vec<TestimonialRecord>, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn toggle_approval(&self, id: Uuid) -> Result<bool, RepoError>;
}

#[async_trait]
pub trait SubmitTestimonialUseCase: Send + Sync {
    async fn execute(&self, draft: TestimonialDraft) -> Result<TestimonialRecord, ContentError>;
}

#[async_trait]
pub trait ListApprovedTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TestimonialRecord>, ContentError>;
}

#[async_trait]
pub trait ListAllTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TestimonialRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteTestimonialUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait ToggleTestimonialApprovalUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError>;
}
