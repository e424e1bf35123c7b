use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::contact::application::ports::{
    ContactMessageDraft, ContactMessageFields, ContactMessageRecord, ContactMessageRepository,
    DeleteContactMessageUseCase, ListContactMessagesUseCase, SubmitContactMessageUseCase,
    ToggleContactReadUseCase,
};
use crate::email::application::ports::{ContactNotification, ContactNotifier};
use crate::shared::content::error::ContentError;
use crate::shared::content::toggle::ToggleOutcome;

pub struct ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
    notifier: Arc<dyn ContactNotifier>,
}

impl<R> ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

fn validate(draft: ContactMessageDraft) -> Result<ContactMessageFields, ContentError> {
    let full_name = draft.full_name.ok_or_else(|| ContentError::required("fullName"))?;

    let email = draft.email.ok_or_else(|| ContentError::required("email"))?;
    if !EmailAddress::is_valid(&email) {
        return Err(ContentError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    let message = draft.message.ok_or_else(|| ContentError::required("message"))?;

    Ok(ContactMessageFields {
        full_name,
        email,
        phone: draft.phone,
        reason: draft.reason,
        message,
        is_read: false,
    })
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(
        &self,
        draft: ContactMessageDraft,
    ) -> Result<ContactMessageRecord, ContentError> {
        let fields = validate(draft)?;
        let record = self.repository.insert(fields).await?;

        // The submission succeeds once the row is stored. Email delivery is
        // best-effort; a failed fan-out is logged and swallowed.
        let notification = ContactNotification {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            reason: record.reason.clone(),
            message: record.message.clone(),
        };
        if let Err(e) = self.notifier.notify(notification).await {
            tracing::error!(message_id = %record.id, error = %e, "contact email fan-out failed");
        }

        Ok(record)
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self) -> Result<Vec<ContactMessageRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[async_trait]
impl<R> DeleteContactMessageUseCase for ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleContactReadUseCase for ContactMessageService<R>
where
    R: ContactMessageRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError> {
        let enabled = self.repository.toggle_read(id).await?;
        Ok(ToggleOutcome { id, enabled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::error::RepoError;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<ContactMessageRecord>>,
    }

    #[async_trait]
    impl ContactMessageRepository for InMemoryRepo {
        async fn insert(
            &self,
            fields: ContactMessageFields,
        ) -> Result<ContactMessageRecord, RepoError> {
            let record = ContactMessageRecord {
                id: Uuid::new_v4(),
                full_name: fields.full_name,
                email: fields.email,
                phone: fields.phone,
                reason: fields.reason,
                message: fields.message,
                is_read: fields.is_read,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<ContactMessageRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
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

        async fn toggle_read(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            slot.is_read = !slot.is_read;
            Ok(slot.is_read)
        }
    }

    #[derive(Default)]
    struct StubNotifier {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ContactNotifier for StubNotifier {
        async fn notify(&self, _notification: ContactNotification) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("smtp down".to_string());
            }
            Ok(())
        }
    }

    fn draft() -> ContactMessageDraft {
        ContactMessageDraft {
            full_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            message: Some("Let's build something.".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn submission_persists_and_notifies() {
        let notifier = Arc::new(StubNotifier::default());
        let service = ContactMessageService::new(InMemoryRepo::default(), notifier.clone());

        let record = SubmitContactMessageUseCase::execute(&service, draft())
            .await
            .unwrap();

        assert!(!record.is_read);
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn email_failure_does_not_fail_the_submission() {
        let notifier = Arc::new(StubNotifier {
            fail: true,
            ..Default::default()
        });
        let service = ContactMessageService::new(InMemoryRepo::default(), notifier);

        let result = SubmitContactMessageUseCase::execute(&service, draft()).await;
        assert!(result.is_ok());

        let stored = ListContactMessagesUseCase::execute(&service).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn invalid_submission_sends_no_email() {
        let notifier = Arc::new(StubNotifier::default());
        let service = ContactMessageService::new(InMemoryRepo::default(), notifier.clone());

        let mut bad = draft();
        bad.email = Some("not-an-email".to_string());

        let err = SubmitContactMessageUseCase::execute(&service, bad)
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn toggle_read_flips_flag() {
        let service =
            ContactMessageService::new(InMemoryRepo::default(), Arc::new(StubNotifier::default()));
        let record = SubmitContactMessageUseCase::execute(&service, draft())
            .await
            .unwrap();

        let outcome = ToggleContactReadUseCase::execute(&service, record.id)
            .await
            .unwrap();
        assert!(outcome.enabled);

        let outcome = ToggleContactReadUseCase::execute(&service, record.id)
            .await
            .unwrap();
        assert!(!outcome.enabled);
    }
}
