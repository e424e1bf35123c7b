use async_trait::async_trait;
use uuid::Uuid;

use crate::experience::application::ports::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceDraft, ExperienceCategory,
    ExperienceFields, ExperienceRecord, ExperienceRepository, ExperienceStatus,
    GetExperienceUseCase, ListExperiencesUseCase, UpdateExperienceUseCase,
};
use crate::shared::content::error::ContentError;
use crate::shared::content::months;

#[derive(Debug, Clone)]
pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Newest first: start year desc, then start month ordinal desc.
pub fn sort_newest_first(records: &mut [ExperienceRecord]) {
    records.sort_by(|a, b| {
        b.start_year.cmp(&a.start_year).then_with(|| {
            months::ordinal_or_zero(Some(&b.start_month))
                .cmp(&months::ordinal_or_zero(Some(&a.start_month)))
        })
    });
}

fn validate(
    draft: ExperienceDraft,
    existing: Option<&ExperienceRecord>,
) -> Result<ExperienceFields, ContentError> {
    let category = match draft.category {
        Some(raw) => ExperienceCategory::parse(&raw)?,
        None => existing
            .map(|e| e.category)
            .ok_or_else(|| ContentError::required("category"))?,
    };

    let company_name = draft
        .company_name
        .or_else(|| existing.map(|e| e.company_name.clone()))
        .ok_or_else(|| ContentError::required("companyName"))?;

    let role = draft
        .role
        .or_else(|| existing.map(|e| e.role.clone()))
        .ok_or_else(|| ContentError::required("role"))?;

    let status = match draft.status {
        Some(raw) => ExperienceStatus::parse(&raw)?,
        None => existing
            .map(|e| e.status)
            .ok_or_else(|| ContentError::required("status"))?,
    };

    let start_month = draft
        .start_month
        .or_else(|| existing.map(|e| e.start_month.clone()))
        .ok_or_else(|| ContentError::required("startMonth"))?;
    if !months::is_valid(&start_month) {
        return Err(ContentError::Validation(format!(
            "startMonth '{}' is not a month",
            start_month
        )));
    }

    let start_year = draft
        .start_year
        .or_else(|| existing.map(|e| e.start_year))
        .ok_or_else(|| ContentError::required("startYear"))?;

    let end_month = draft
        .end_month
        .or_else(|| existing.and_then(|e| e.end_month.clone()));
    let end_year = draft.end_year.or_else(|| existing.and_then(|e| e.end_year));

    let (end_month, end_year) = match status {
        ExperienceStatus::Completed => {
            let month = end_month
                .ok_or_else(|| ContentError::required_when("endMonth", "status is Completed"))?;
            if !months::is_valid(&month) {
                return Err(ContentError::Validation(format!(
                    "endMonth '{}' is not a month",
                    month
                )));
            }
            let year = end_year
                .ok_or_else(|| ContentError::required_when("endYear", "status is Completed"))?;
            (Some(month), Some(year))
        }
        ExperienceStatus::Ongoing => (None, None),
    };

    Ok(ExperienceFields {
        category,
        company_name,
        role,
        employment_type: draft
            .employment_type
            .or_else(|| existing.and_then(|e| e.employment_type.clone())),
        location: draft
            .location
            .or_else(|| existing.and_then(|e| e.location.clone())),
        status,
        start_month,
        start_year,
        end_month,
        end_year,
        description: draft
            .description
            .or_else(|| existing.and_then(|e| e.description.clone())),
        technology_ids: draft
            .technology_ids
            .or_else(|| existing.map(|e| e.technology_ids.clone()))
            .unwrap_or_default(),
        skill_tags: draft
            .skill_tags
            .or_else(|| existing.map(|e| e.skill_tags.clone()))
            .unwrap_or_default(),
        company_logo_url: draft
            .company_logo_url
            .or_else(|| existing.and_then(|e| e.company_logo_url.clone())),
        offer_letter_url: draft
            .offer_letter_url
            .or_else(|| existing.and_then(|e| e.offer_letter_url.clone())),
        completion_certificate_url: draft
            .completion_certificate_url
            .or_else(|| existing.and_then(|e| e.completion_certificate_url.clone())),
    })
}

#[async_trait]
impl<R> ListExperiencesUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }
}

#[async_trait]
impl<R> GetExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ExperienceRecord, ContentError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self, draft: ExperienceDraft) -> Result<ExperienceRecord, ContentError> {
        let fields = validate(draft, None)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<ExperienceRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}
