use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::shared::content::error::ContentError;
use crate::shared::content::toggle::ToggleOutcome;
use crate::testimonials::application::ports::{
    DeleteTestimonialUseCase, ListAllTestimonialsUseCase, ListApprovedTestimonialsUseCase,
    SubmitTestimonialUseCase, TestimonialDraft, TestimonialFields, TestimonialRecord,
    TestimonialRepository, ToggleTestimonialApprovalUseCase,
};

#[derive(Debug, Clone)]
pub struct TestimonialService<R>
where
    R: TestimonialRepository,
{
    repository: R,
}

impl<R> TestimonialService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate(draft: TestimonialDraft) -> Result<TestimonialFields, ContentError> {
    let full_name = draft.full_name.ok_or_else(|| ContentError::required("fullName"))?;

    let email = draft.email.ok_or_else(|| ContentError::required("email"))?;
    if !EmailAddress::is_valid(&email) {
        return Err(ContentError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    let rating = draft.rating.ok_or_else(|| ContentError::required("rating"))?;
    if !(1..=5).contains(&rating) {
        return Err(ContentError::Validation(format!(
            "rating must be between 1 and 5, got {}",
            rating
        )));
    }

    let feedback = draft
        .feedback
        .ok_or_else(|| ContentError::required("feedback"))?;

    Ok(TestimonialFields {
        full_name,
        email,
        rating: rating as i16,
        feedback,
        website_link: draft.website_link,
        profile_image_url: draft.profile_image_url,
        // Public submissions always start hidden. Approval is a separate
        // admin action.
        is_approved: false,
    })
}

#[async_trait]
impl<R> SubmitTestimonialUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self, draft: TestimonialDraft) -> Result<TestimonialRecord, ContentError> {
        let fields = validate(draft)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> ListApprovedTestimonialsUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self) -> Result<Vec<TestimonialRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.retain(|r| r.is_approved);
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[async_trait]
impl<R> ListAllTestimonialsUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self) -> Result<Vec<TestimonialRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[async_trait]
impl<R> DeleteTestimonialUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleTestimonialApprovalUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError> {
        let enabled = self.repository.toggle_approval(id).await?;
        Ok(ToggleOutcome { id, enabled })
    }
}
