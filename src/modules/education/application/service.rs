use async_trait::async_trait;
use uuid::Uuid;

use crate::education::application::ports::{
    CreateEducationUseCase, DeleteEducationUseCase, EducationDraft, EducationFields,
    EducationRecord, EducationRepository, EducationStatus, GetEducationUseCase,
    ListEducationUseCase, UpdateEducationUseCase,
};
use crate::shared::content::error::ContentError;

#[derive(Debug, Clone)]
pub struct EducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// The year field that does not match the status is dropped, so a stored
/// record can never carry both.
fn validate(
    draft: EducationDraft,
    existing: Option<&EducationRecord>,
) -> Result<EducationFields, ContentError> {
    let degree = draft
        .degree
        .or_else(|| existing.map(|e| e.degree.clone()))
        .ok_or_else(|| ContentError::required("degree"))?;

    let institute_name = draft
        .institute_name
        .or_else(|| existing.map(|e| e.institute_name.clone()))
        .ok_or_else(|| ContentError::required("instituteName"))?;

    let status = match draft.status {
        Some(raw) => EducationStatus::parse(&raw)?,
        None => existing
            .map(|e| e.status)
            .ok_or_else(|| ContentError::required("status"))?,
    };

    let completion_year = draft
        .completion_year
        .or_else(|| existing.and_then(|e| e.completion_year));
    let expected_completion_year = draft
        .expected_completion_year
        .or_else(|| existing.and_then(|e| e.expected_completion_year));

    let (completion_year, expected_completion_year) = match status {
        EducationStatus::Completed => {
            let year = completion_year.ok_or_else(|| {
                ContentError::required_when("completionYear", "status is Completed")
            })?;
            (Some(year), None)
        }
        EducationStatus::Pursuing => {
            let year = expected_completion_year.ok_or_else(|| {
                ContentError::required_when("expectedCompletionYear", "status is Pursuing")
            })?;
            (None, Some(year))
        }
    };

    Ok(EducationFields {
        degree,
        specialization: draft
            .specialization
            .or_else(|| existing.and_then(|e| e.specialization.clone())),
        institute_name,
        location: draft
            .location
            .or_else(|| existing.and_then(|e| e.location.clone())),
        status,
        completion_year,
        expected_completion_year,
        grade: draft.grade.or_else(|| existing.and_then(|e| e.grade.clone())),
        logo_url: draft
            .logo_url
            .or_else(|| existing.and_then(|e| e.logo_url.clone())),
    })
}

#[async_trait]
impl<R> ListEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn execute(&self) -> Result<Vec<EducationRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.sort_by(|a, b| b.sort_year().cmp(&a.sort_year()));
        Ok(records)
    }
}

#[async_trait]
impl<R> GetEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn execute(&self, id: Uuid) -> Result<EducationRecord, ContentError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn execute(&self, draft: EducationDraft) -> Result<EducationRecord, ContentError> {
        let fields = validate(draft, None)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: EducationDraft,
    ) -> Result<EducationRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for EducationService<R>
where
    R: EducationRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
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
        records: Mutex<Vec<EducationRecord>>,
    }

    fn record_from(id: Uuid, fields: EducationFields) -> EducationRecord {
        EducationRecord {
            id,
            degree: fields.degree,
            specialization: fields.specialization,
            institute_name: fields.institute_name,
            location: fields.location,
            status: fields.status,
            completion_year: fields.completion_year,
            expected_completion_year: fields.expected_completion_year,
            grade: fields.grade,
            logo_url: fields.logo_url,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl EducationRepository for InMemoryRepo {
        async fn insert(&self, fields: EducationFields) -> Result<EducationRecord, RepoError> {
            let record = record_from(Uuid::new_v4(), fields);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<EducationRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<EducationRecord, RepoError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        async fn update(
            &self,
            id: Uuid,
            fields: EducationFields,
        ) -> Result<EducationRecord, RepoError> {
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
    }

    fn completed_draft(degree: &str, year: i32) -> EducationDraft {
        EducationDraft {
            degree: Some(degree.to_string()),
            institute_name: Some("State University".to_string()),
            status: Some("Completed".to_string()),
            completion_year: Some(year),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn completed_record_drops_expected_year() {
        let service = EducationService::new(InMemoryRepo::default());
        let draft = EducationDraft {
            expected_completion_year: Some(2026),
            ..completed_draft("BSc", 2020)
        };

        let record = CreateEducationUseCase::execute(&service, draft)
            .await
            .unwrap();
        assert_eq!(record.completion_year, Some(2020));
        assert!(record.expected_completion_year.is_none());
    }

    #[tokio::test]
    async fn pursuing_record_drops_completion_year() {
        let service = EducationService::new(InMemoryRepo::default());
        let draft = EducationDraft {
            degree: Some("MSc".to_string()),
            institute_name: Some("State University".to_string()),
            status: Some("Pursuing".to_string()),
            completion_year: Some(2020),
            expected_completion_year: Some(2027),
            ..Default::default()
        };

        let record = CreateEducationUseCase::execute(&service, draft)
            .await
            .unwrap();
        assert!(record.completion_year.is_none());
        assert_eq!(record.expected_completion_year, Some(2027));
    }

    #[tokio::test]
    async fn pursuing_without_expected_year_is_400() {
        let service = EducationService::new(InMemoryRepo::default());
        let draft = EducationDraft {
            degree: Some("MSc".to_string()),
            institute_name: Some("State University".to_string()),
            status: Some("Pursuing".to_string()),
            ..Default::default()
        };

        let err = CreateEducationUseCase::execute(&service, draft)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[tokio::test]
    async fn list_sorts_by_year_desc_across_both_fields() {
        let service = EducationService::new(InMemoryRepo::default());
        CreateEducationUseCase::execute(&service, completed_draft("BSc", 2018))
            .await
            .unwrap();
        CreateEducationUseCase::execute(
            &service,
            EducationDraft {
                degree: Some("MSc".to_string()),
                institute_name: Some("State University".to_string()),
                status: Some("Pursuing".to_string()),
                expected_completion_year: Some(2027),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        CreateEducationUseCase::execute(&service, completed_draft("Diploma", 2015))
            .await
            .unwrap();

        let records = ListEducationUseCase::execute(&service).await.unwrap();
        let degrees: Vec<_> = records.iter().map(|r| r.degree.as_str()).collect();
        assert_eq!(degrees, vec!["MSc", "BSc", "Diploma"]);
    }

    #[tokio::test]
    async fn status_flip_on_update_resolves_year_fields() {
        let service = EducationService::new(InMemoryRepo::default());
        let created = CreateEducationUseCase::execute(
            &service,
            EducationDraft {
                degree: Some("MSc".to_string()),
                institute_name: Some("State University".to_string()),
                status: Some("Pursuing".to_string()),
                expected_completion_year: Some(2026),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = UpdateEducationUseCase::execute(
            &service,
            created.id,
            EducationDraft {
                status: Some("Completed".to_string()),
                completion_year: Some(2026),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.completion_year, Some(2026));
        assert!(updated.expected_completion_year.is_none());
    }
}
