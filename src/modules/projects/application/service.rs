use async_trait::async_trait;
use uuid::Uuid;

use crate::projects::application::ports::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, ListProjectsUseCase,
    ProjectDraft, ProjectFields, ProjectRecord, ProjectRepository, ProjectStatus,
    ToggleProjectShowOnHomeUseCase, UpdateProjectUseCase,
};
use crate::shared::content::error::ContentError;
use crate::shared::content::months;
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Merges a draft over an optional existing record and validates the result.
/// Completion fields are only kept for Completed projects; an Ongoing project
/// stores them unset even if the form supplied them.
fn validate(draft: ProjectDraft, existing: Option<&ProjectRecord>) -> Result<ProjectFields, ContentError> {
    let title = draft
        .title
        .or_else(|| existing.map(|e| e.title.clone()))
        .ok_or_else(|| ContentError::required("title"))?;

    let description = draft
        .description
        .or_else(|| existing.map(|e| e.description.clone()))
        .ok_or_else(|| ContentError::required("description"))?;

    let image_url = draft
        .image_url
        .or_else(|| existing.map(|e| e.image_url.clone()))
        .ok_or_else(|| ContentError::required("image"))?;

    let status = match draft.status {
        Some(raw) => ProjectStatus::parse(&raw)?,
        None => existing
            .map(|e| e.status)
            .ok_or_else(|| ContentError::required("status"))?,
    };

    let completion_month = draft
        .completion_month
        .or_else(|| existing.and_then(|e| e.completion_month.clone()));
    let completion_year = draft
        .completion_year
        .or_else(|| existing.and_then(|e| e.completion_year));

    let (completion_month, completion_year) = match status {
        ProjectStatus::Completed => {
            let month = completion_month.ok_or_else(|| {
                ContentError::required_when("completionMonth", "status is Completed")
            })?;
            if !months::is_valid(&month) {
                return Err(ContentError::Validation(format!(
                    "completionMonth '{}' is not a month",
                    month
                )));
            }
            let year = completion_year.ok_or_else(|| {
                ContentError::required_when("completionYear", "status is Completed")
            })?;
            (Some(month), Some(year))
        }
        ProjectStatus::Ongoing => (None, None),
    };

    Ok(ProjectFields {
        title,
        description,
        detailed_description: draft
            .detailed_description
            .or_else(|| existing.and_then(|e| e.detailed_description.clone())),
        status,
        completion_month,
        completion_year,
        image_url,
        skill_ids: draft
            .skill_ids
            .or_else(|| existing.map(|e| e.skill_ids.clone()))
            .unwrap_or_default(),
        links: draft
            .links
            .or_else(|| existing.map(|e| e.links.clone()))
            .unwrap_or_default(),
        show_on_home: draft
            .show_on_home
            .or_else(|| existing.map(|e| e.show_on_home))
            .unwrap_or(false),
    })
}

#[async_trait]
impl<R> ListProjectsUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ContentError> {
        Ok(self.repository.find_all().await?)
    }
}

#[async_trait]
impl<R> GetProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ProjectRecord, ContentError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectRecord, ContentError> {
        let fields = validate(draft, None)?;
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid, draft: ProjectDraft) -> Result<ProjectRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleProjectShowOnHomeUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError> {
        let enabled = self.repository.toggle_show_on_home(id).await?;
        Ok(ToggleOutcome { id, enabled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::error::RepoError;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory repository; validation is what these tests exercise.
    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<ProjectRecord>>,
    }

    fn record_from(id: Uuid, fields: ProjectFields) -> ProjectRecord {
        ProjectRecord {
            id,
            title: fields.title,
            description: fields.description,
            detailed_description: fields.detailed_description,
            status: fields.status,
            completion_month: fields.completion_month,
            completion_year: fields.completion_year,
            image_url: fields.image_url,
            skill_ids: fields.skill_ids,
            links: fields.links,
            show_on_home: fields.show_on_home,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl ProjectRepository for InMemoryRepo {
        async fn insert(&self, fields: ProjectFields) -> Result<ProjectRecord, RepoError> {
            let record = record_from(Uuid::new_v4(), fields);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<ProjectRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<ProjectRecord, RepoError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        async fn update(&self, id: Uuid, fields: ProjectFields) -> Result<ProjectRecord, RepoError> {
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

        async fn toggle_show_on_home(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            slot.show_on_home = !slot.show_on_home;
            Ok(slot.show_on_home)
        }
    }

    fn ongoing_draft() -> ProjectDraft {
        ProjectDraft {
            title: Some("Portfolio".to_string()),
            description: Some("My site".to_string()),
            status: Some("Ongoing".to_string()),
            image_url: Some("https://assets.test/shot.png".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn ongoing_project_persists_without_completion_fields() {
        let service = ProjectService::new(InMemoryRepo::default());

        let record = CreateProjectUseCase::execute(&service, ongoing_draft())
            .await
            .unwrap();

        assert_eq!(record.status, ProjectStatus::Ongoing);
        assert!(record.completion_month.is_none());
        assert!(record.completion_year.is_none());
    }

    #[tokio::test]
    async fn ongoing_project_discards_submitted_completion_fields() {
        let service = ProjectService::new(InMemoryRepo::default());
        let draft = ProjectDraft {
            completion_month: Some("June".to_string()),
            completion_year: Some(2024),
            ..ongoing_draft()
        };

        let record = CreateProjectUseCase::execute(&service, draft).await.unwrap();
        assert!(record.completion_month.is_none());
        assert!(record.completion_year.is_none());
    }

    #[tokio::test]
    async fn completed_project_requires_completion_month() {
        let service = ProjectService::new(InMemoryRepo::default());
        let draft = ProjectDraft {
            status: Some("Completed".to_string()),
            completion_year: Some(2024),
            ..ongoing_draft()
        };

        let err = CreateProjectUseCase::execute(&service, draft)
            .await
            .unwrap_err();

        match err {
            ContentError::Validation(msg) => assert!(msg.contains("required")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn completed_project_rejects_fake_month() {
        let service = ProjectService::new(InMemoryRepo::default());
        let draft = ProjectDraft {
            status: Some("Completed".to_string()),
            completion_month: Some("Smarch".to_string()),
            completion_year: Some(2024),
            ..ongoing_draft()
        };

        let result = CreateProjectUseCase::execute(&service, draft).await;
        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn create_requires_image() {
        let service = ProjectService::new(InMemoryRepo::default());
        let draft = ProjectDraft {
            image_url: None,
            ..ongoing_draft()
        };

        let err = CreateProjectUseCase::execute(&service, draft)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("image"));
    }

    #[tokio::test]
    async fn update_keeps_unsubmitted_fields() {
        let service = ProjectService::new(InMemoryRepo::default());
        let created = CreateProjectUseCase::execute(&service, ongoing_draft())
            .await
            .unwrap();

        let updated = UpdateProjectUseCase::execute(
            &service,
            created.id,
            ProjectDraft {
                description: Some("Rewritten".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "Portfolio");
        assert_eq!(updated.description, "Rewritten");
        assert_eq!(updated.image_url, "https://assets.test/shot.png");
    }

    #[tokio::test]
    async fn update_to_completed_without_dates_is_rejected() {
        let service = ProjectService::new(InMemoryRepo::default());
        let created = CreateProjectUseCase::execute(&service, ongoing_draft())
            .await
            .unwrap();

        let result = UpdateProjectUseCase::execute(
            &service,
            created.id,
            ProjectDraft {
                status: Some("Completed".to_string()),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_project_is_not_found() {
        let service = ProjectService::new(InMemoryRepo::default());

        let result = DeleteProjectUseCase::execute(&service, Uuid::new_v4()).await;
        assert!(matches!(result, Err(ContentError::NotFound)));
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let service = ProjectService::new(InMemoryRepo::default());
        let created = CreateProjectUseCase::execute(&service, ongoing_draft())
            .await
            .unwrap();
        assert!(!created.show_on_home);

        let first = ToggleProjectShowOnHomeUseCase::execute(&service, created.id)
            .await
            .unwrap();
        let second = ToggleProjectShowOnHomeUseCase::execute(&service, created.id)
            .await
            .unwrap();

        assert!(first.enabled);
        assert!(!second.enabled);
    }
}
