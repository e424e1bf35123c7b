use async_trait::async_trait;
use uuid::Uuid;

use crate::awards::application::ports::{
    Association, AssociationType, AwardDraft, AwardFields, AwardRecord, AwardRepository,
    CreateAwardUseCase, DeleteAwardUseCase, GetAwardUseCase, ListAwardsUseCase,
    ToggleAwardFeaturedUseCase, UpdateAwardUseCase,
};
use crate::shared::content::error::ContentError;
use crate::shared::content::months;
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone)]
pub struct AwardService<R>
where
    R: AwardRepository,
{
    repository: R,
}

impl<R> AwardService<R>
where
    R: AwardRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Featured first, then newest by issue date.
pub fn sort_for_listing(records: &mut [AwardRecord]) {
    records.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| b.issue_year.unwrap_or(0).cmp(&a.issue_year.unwrap_or(0)))
            .then_with(|| {
                months::ordinal_or_zero(b.issue_month.as_deref())
                    .cmp(&months::ordinal_or_zero(a.issue_month.as_deref()))
            })
    });
}

fn validate(draft: AwardDraft, existing: Option<&AwardRecord>) -> Result<AwardFields, ContentError> {
    let title = draft
        .title
        .or_else(|| existing.map(|e| e.title.clone()))
        .ok_or_else(|| ContentError::required("title"))?;

    let organization = draft
        .organization
        .or_else(|| existing.map(|e| e.organization.clone()))
        .ok_or_else(|| ContentError::required("organization"))?;

    let kind = match draft.associated_type {
        Some(raw) => AssociationType::parse(&raw)?,
        None => existing
            .map(|e| e.associated_with.kind)
            .unwrap_or(AssociationType::None),
    };

    let id = draft
        .associated_id
        .or_else(|| existing.and_then(|e| e.associated_with.id));

    let associated_with = match kind {
        AssociationType::None => Association { kind, id: None },
        _ => {
            let id = id.ok_or_else(|| {
                ContentError::required_when(
                    "associatedWith.id",
                    "associatedWith.type is not none",
                )
            })?;
            Association { kind, id: Some(id) }
        }
    };

    let issue_month = draft
        .issue_month
        .or_else(|| existing.and_then(|e| e.issue_month.clone()));
    if let Some(month) = &issue_month {
        if !months::is_valid(month) {
            return Err(ContentError::Validation(format!(
                "issueMonth '{}' is not a month",
                month
            )));
        }
    }

    Ok(AwardFields {
        title,
        organization,
        associated_with,
        description: draft
            .description
            .or_else(|| existing.and_then(|e| e.description.clone())),
        issue_month,
        issue_year: draft
            .issue_year
            .or_else(|| existing.and_then(|e| e.issue_year)),
        certificate_url: draft
            .certificate_url
            .or_else(|| existing.and_then(|e| e.certificate_url.clone())),
        image_url: draft
            .image_url
            .or_else(|| existing.and_then(|e| e.image_url.clone())),
        certificate_link: draft
            .certificate_link
            .or_else(|| existing.and_then(|e| e.certificate_link.clone())),
        featured: draft
            .featured
            .or_else(|| existing.map(|e| e.featured))
            .unwrap_or(false),
        social_links: draft
            .social_links
            .or_else(|| existing.map(|e| e.social_links.clone()))
            .unwrap_or_default(),
    })
}

#[async_trait]
impl<R> ListAwardsUseCase for AwardService<R>
where
    R: AwardRepository,
{
    async fn execute(&self) -> Result<Vec<AwardRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        sort_for_listing(&mut records);
        Ok(records)
    }
}

#[async_trait]
impl<R> GetAwardUseCase for AwardService<R>
where
    R: AwardRepository,
{
    async fn execute(&self, id: Uuid) -> Result<AwardRecord, ContentError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> CreateAwardUseCase for AwardService<R>
where
    R: AwardRepository,
{
    async fn execute(&self, draft: AwardDraft) -> Result<AwardRecord, ContentError> {
        let fields = validate(draft, None)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateAwardUseCase for AwardService<R>
where
    R: AwardRepository,
{
    async fn execute(&self, id: Uuid, draft: AwardDraft) -> Result<AwardRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteAwardUseCase for AwardService<R>
where
    R: AwardRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleAwardFeaturedUseCase for AwardService<R>
where
    R: AwardRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError> {
        let enabled = self.repository.toggle_featured(id).await?;
        Ok(ToggleOutcome { id, enabled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::error::RepoError;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<AwardRecord>>,
    }

    fn record_from(id: Uuid, fields: AwardFields) -> AwardRecord {
        AwardRecord {
            id,
            title: fields.title,
            organization: fields.organization,
            associated_with: fields.associated_with,
            description: fields.description,
            issue_month: fields.issue_month,
            issue_year: fields.issue_year,
            certificate_url: fields.certificate_url,
            image_url: fields.image_url,
            certificate_link: fields.certificate_link,
            featured: fields.featured,
            social_links: fields.social_links,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl AwardRepository for InMemoryRepo {
        async fn insert(&self, fields: AwardFields) -> Result<AwardRecord, RepoError> {
            let record = record_from(Uuid::new_v4(), fields);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<AwardRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<AwardRecord, RepoError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        async fn update(&self, id: Uuid, fields: AwardFields) -> Result<AwardRecord, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            *slot = record_from(id, fields);
            Ok(slot.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }

        async fn toggle_featured(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            slot.featured = !slot.featured;
            Ok(slot.featured)
        }
    }

    fn plain_draft(title: &str) -> AwardDraft {
        AwardDraft {
            title: Some(title.to_string()),
            organization: Some("Hackathon Org".to_string()),
            associated_type: Some("none".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn association_id_required_unless_type_is_none() {
        let service = AwardService::new(InMemoryRepo::default());
        let draft = AwardDraft {
            associated_type: Some("experience".to_string()),
            ..plain_draft("Best Project")
        };

        let err = CreateAwardUseCase::execute(&service, draft).await.unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[tokio::test]
    async fn association_id_is_not_checked_for_existence() {
        let service = AwardService::new(InMemoryRepo::default());
        let dangling = Uuid::new_v4();
        let draft = AwardDraft {
            associated_type: Some("education".to_string()),
            associated_id: Some(dangling),
            ..plain_draft("Dean's List")
        };

        let record = CreateAwardUseCase::execute(&service, draft).await.unwrap();
        assert_eq!(record.associated_with.kind, AssociationType::Education);
        assert_eq!(record.associated_with.id, Some(dangling));
    }

    #[tokio::test]
    async fn type_none_drops_a_submitted_id() {
        let service = AwardService::new(InMemoryRepo::default());
        let draft = AwardDraft {
            associated_id: Some(Uuid::new_v4()),
            ..plain_draft("Best Project")
        };

        let record = CreateAwardUseCase::execute(&service, draft).await.unwrap();
        assert_eq!(record.associated_with.kind, AssociationType::None);
        assert!(record.associated_with.id.is_none());
    }

    #[tokio::test]
    async fn listing_puts_featured_first_then_newest() {
        let service = AwardService::new(InMemoryRepo::default());
        for (title, month, year, featured) in [
            ("Old", "February", 2020, false),
            ("Featured", "March", 2019, true),
            ("New", "October", 2024, false),
        ] {
            CreateAwardUseCase::execute(
                &service,
                AwardDraft {
                    issue_month: Some(month.to_string()),
                    issue_year: Some(year),
                    featured: Some(featured),
                    ..plain_draft(title)
                },
            )
            .await
            .unwrap();
        }

        let records = ListAwardsUseCase::execute(&service).await.unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Featured", "New", "Old"]);
    }

    #[tokio::test]
    async fn toggle_featured_flips_flag() {
        let service = AwardService::new(InMemoryRepo::default());
        let created = CreateAwardUseCase::execute(&service, plain_draft("Best Project"))
            .await
            .unwrap();

        let outcome = ToggleAwardFeaturedUseCase::execute(&service, created.id)
            .await
            .unwrap();
        assert!(outcome.enabled);
    }
}
