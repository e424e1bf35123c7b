use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::assets::application::ports::{AssetStore, AssetStoreError, AssetUpload, StoredAsset};

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

/// Objects are bucketed by month so the store stays browsable; the uuid prefix
/// keeps repeated uploads of `logo.png` from clobbering each other.
fn object_key(file_name: &str) -> String {
    let now = Utc::now();
    let safe_name: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "{}/{}-{}",
        now.format("%Y/%m"),
        Uuid::new_v4(),
        safe_name
    )
}

/// Internal seam so tests never talk to GCS.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[derive(Clone)]
pub struct GcsAssetStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsAssetStore {
    /// Synchronous constructor; the client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    pub fn from_env() -> Self {
        let bucket = std::env::var("ASSET_BUCKET").expect("ASSET_BUCKET not set");
        Self::new(bucket)
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, String> {
        self.client
            .get_or_try_init(|| async {
                let real = RealGcsClient::new().await?;
                Ok(Box::new(real) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("https://storage.googleapis.com/{}/{}", self.bucket, object_name)
    }

    #[cfg(test)]
    fn with_client(client: Box<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(client);
        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl AssetStore for GcsAssetStore {
    async fn store(&self, upload: AssetUpload) -> Result<StoredAsset, AssetStoreError> {
        if upload.bytes.is_empty() {
            return Err(AssetStoreError::EmptyUpload);
        }

        let client = self
            .get_client()
            .await
            .map_err(AssetStoreError::Unavailable)?;

        let object = object_key(&upload.file_name);

        client
            .upload_object(&bucket_resource(&self.bucket), &object, upload.bytes)
            .await
            .map_err(AssetStoreError::Unavailable)?;

        Ok(StoredAsset {
            url: self.public_url(&object),
        })
    }
}

// ============================================================================
// Real Google Cloud Storage client
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e.to_string()
            })?;

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_unbuffered()
            .await
            .map(|_object| ())
            .map_err(|e| e.to_string())
    }
}
