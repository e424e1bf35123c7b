use async_trait::async_trait;

use crate::shared::api::multipart::UploadedFile;
use crate::shared::content::error::ContentError;

/// A file lifted out of an admin (or testimonial) form submission, on its way
/// to the external store.
#[derive(Debug, Clone)]
pub struct AssetUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl From<&UploadedFile> for AssetUpload {
    fn from(file: &UploadedFile) -> Self {
        Self {
            file_name: file.file_name.clone(),
            content_type: file.content_type.clone(),
            bytes: file.bytes.clone(),
        }
    }
}

/// The stable reference persisted on the content record. Deleting the record
/// (or replacing the field) does not remove the stored object.
#[derive(Debug, Clone)]
pub struct StoredAsset {
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetStoreError {
    #[error("empty upload")]
    EmptyUpload,

    #[error("asset store unavailable: {0}")]
    Unavailable(String),
}

/// External file-hosting collaborator. Uploads block the handling request
/// until the store round-trip completes.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn store(&self, upload: AssetUpload) -> Result<StoredAsset, AssetStoreError>;
}

/// Stores one optional form file, mapping failures into the shared taxonomy.
/// Returns the stored URL, or `None` when no file part was submitted.
pub async fn store_form_file(
    store: &dyn AssetStore,
    file: Option<&UploadedFile>,
) -> Result<Option<String>, ContentError> {
    match file {
        None => Ok(None),
        Some(file) => {
            let stored = store
                .store(AssetUpload::from(file))
                .await
                .map_err(|e| ContentError::Repository(e.to_string()))?;
            Ok(Some(stored.url))
        }
    }
}
