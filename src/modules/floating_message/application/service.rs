use async_trait::async_trait;
use uuid::Uuid;

use crate::floating_message::application::ports::{
    BannerView, CreateFloatingMessageUseCase, DeleteFloatingMessageUseCase, FloatingMessageDraft,
    FloatingMessageFields, FloatingMessageRecord, FloatingMessageRepository,
    GetActiveBannerUseCase, ListFloatingMessagesUseCase, ToggleFloatingMessageActiveUseCase,
    UpdateFloatingMessageUseCase, HIGHLIGHT_MAX_LEN, MESSAGE_MAX_LEN,
};
use crate::shared::content::error::ContentError;
use crate::shared::content::toggle::ToggleOutcome;

#[derive(Debug, Clone)]
pub struct FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    repository: R,
}

impl<R> FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate(
    draft: FloatingMessageDraft,
    existing: Option<&FloatingMessageRecord>,
) -> Result<FloatingMessageFields, ContentError> {
    let message = draft
        .message
        .or_else(|| existing.map(|e| e.message.clone()))
        .ok_or_else(|| ContentError::required("message"))?;
    if message.chars().count() > MESSAGE_MAX_LEN {
        return Err(ContentError::Validation(format!(
            "message must be at most {} characters",
            MESSAGE_MAX_LEN
        )));
    }

    let highlight_text = draft
        .highlight_text
        .or_else(|| existing.map(|e| e.highlight_text.clone()))
        .unwrap_or_default();
    if highlight_text.chars().count() > HIGHLIGHT_MAX_LEN {
        return Err(ContentError::Validation(format!(
            "highlightText must be at most {} characters",
            HIGHLIGHT_MAX_LEN
        )));
    }

    Ok(FloatingMessageFields {
        message,
        highlight_text,
        is_active: draft
            .is_active
            .or_else(|| existing.map(|e| e.is_active))
            .unwrap_or(false),
    })
}

#[async_trait]
impl<R> GetActiveBannerUseCase for FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    async fn execute(&self) -> Result<BannerView, ContentError> {
        Ok(match self.repository.find_active().await? {
            Some(record) => BannerView {
                message: Some(record.message),
                highlight_text: record.highlight_text,
            },
            None => BannerView {
                message: None,
                highlight_text: String::new(),
            },
        })
    }
}

#[async_trait]
impl<R> ListFloatingMessagesUseCase for FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    async fn execute(&self) -> Result<Vec<FloatingMessageRecord>, ContentError> {
        let mut records = self.repository.find_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[async_trait]
impl<R> CreateFloatingMessageUseCase for FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    async fn execute(
        &self,
        draft: FloatingMessageDraft,
    ) -> Result<FloatingMessageRecord, ContentError> {
        let fields = validate(draft, None)?;

        // Activation always deactivates the rest of the collection first.
        // The two writes are separate statements; a crash in between leaves
        // zero active records, which the public endpoint renders as "no
        // banner".
        if fields.is_active {
            self.repository.deactivate_all().await?;
        }
        Ok(self.repository.insert(fields).await?)
    }
}

#[async_trait]
impl<R> UpdateFloatingMessageUseCase for FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: FloatingMessageDraft,
    ) -> Result<FloatingMessageRecord, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let fields = validate(draft, Some(&existing))?;

        if fields.is_active {
            self.repository.deactivate_all().await?;
        }
        Ok(self.repository.update(id, fields).await?)
    }
}

#[async_trait]
impl<R> DeleteFloatingMessageUseCase for FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete(id).await?)
    }
}

#[async_trait]
impl<R> ToggleFloatingMessageActiveUseCase for FloatingMessageService<R>
where
    R: FloatingMessageRepository,
{
    async fn execute(&self, id: Uuid) -> Result<ToggleOutcome, ContentError> {
        let existing = self.repository.find_by_id(id).await?;
        let activate = !existing.is_active;

        if activate {
            self.repository.deactivate_all().await?;
        }
        let fields = FloatingMessageFields {
            message: existing.message,
            highlight_text: existing.highlight_text,
            is_active: activate,
        };
        let updated = self.repository.update(id, fields).await?;
        Ok(ToggleOutcome {
            id,
            enabled: updated.is_active,
        })
    }
}
