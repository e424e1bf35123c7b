use async_trait::async_trait;
use uuid::Uuid;

use crate::certifications::application::ports::{
    CertificationDraft, CertificationFields, CertificationRecord, CertificationRepository,
    CreateCertificationUseCase, DeleteCertificationUseCase, GetCertificationUseCase,
    ListCertificationsUseCase, ToggleCertificationPinnedUseCase, UpdateCertificationUseCase,
};
use crate::shared::content::error::ContentError;
use crate::shared::content::months;
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone)]
pub struct CertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
}

impl<R> CertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Pinned first, then newest by completion date. Applying this to an already
/// sorted list leaves it untouched.
pub fn sort_for_listing(records: &mut [CertificationRecord]) {
    records.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| {
                b.completion_year
                    .unwrap_or(0)
                    .cmp(&a.completion_year.unwrap_or(0))
            })
            .then_with(|| {
                months::ordinal_or_zero(b.completion_month.as_deref())
                    .cmp(&months::ordinal_or_zero(a.completion_month.as_deref()))
            })
    });
}

fn validate(
    draft: CertificationDraft,
    existing: Option<&CertificationRecord>,
) -> Result<CertificationFields, ContentError> {
    let title = draft
        .title
        .or_else(|| existing.map(|e| e.title.clone()))
        .ok_or_else(|| ContentError::required("title"))?;

    let organization = draft
        .organization
        .or_else(|| existing.map(|e| e.organization.clone()))
        .ok_or_else(|| ContentError::required("organization"))?;

    let completion_month = draft
        .completion_month
        .or_else(|| existing.and_then(|e| e.completion_month.clone()));
    if let Some(month) = &completion_month {
        if !months::is_valid(month) {
            return Err(ContentError::Validation(format!(
                "completionMonth '{}' is not a month",
                month
            )));
        }
    }

    Ok(CertificationFields {
        title,
        organization,
        completion_month,
        completion_year: draft
            .completion_year
            .or_else(|| existing.and_then(|e| e.completion_year)),
        credential_id: draft
            .credential_id
            .or_else(|| existing.and_then(|e| e.credential_id.clone())),
        credential_url: draft
            .credential_url
            .or_else(|| existing.and_then(|e| e.credential_url.clone())),
        description: draft
            .description
            .or_else(|| existing.and_then(|e| e.description.clone())),
        skills: draft
            .skills
            .or_else(|| existing.map(|e| e.skills.clone()))
            .unwrap_or_default(),
        pinned: draft
            .pinned
            .or_else(|| existing.map(|e| e.pinned))
            .unwrap_or(false),
        certificate_url: draft
            .certificate_url
            .or_else(|| existing.and_then(|e| e.certificate_url.clone())),
        image_url: draft
            .image_url
            .or_else(|| existing.and_then(|e| e.image_url.clone())),
    })
}

#[async_trait]
impl<R> ListCertificationsUseCase for CertificationService<R>
where
    R: CertificationRepository,
{
    async fn execute(&self) -> Result<Vec<CertificationRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        sort_for_listing(&mut records);
        Ok(records)
    }
}

#[async_trait]
impl<R> GetCertificationUseCase for CertificationService<R>
where
    R: CertificationRepository,
{
    async fn execute(&self, id: Uuid) -> Result<CertificationRecord, ContentError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> CreateCertificationUseCase for CertificationService<R>
where
    R: CertificationRepository,
{
    async fn execute(
        &self,
        draft: CertificationDraft,
    ) -> Result<CertificationRecord, ContentError> {
        let fields = validate(draft, None)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateCertificationUseCase for CertificationService<R>
where
    R: CertificationRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: CertificationDraft,
    ) -> Result<CertificationRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteCertificationUseCase for CertificationService<R>
where
    R: CertificationRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleCertificationPinnedUseCase for CertificationService<R>
where
    R: CertificationRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError> {
        let enabled = self.repository.toggle_pinned(id).await?;
        Ok(ToggleOutcome { id, enabled })
    }
}
