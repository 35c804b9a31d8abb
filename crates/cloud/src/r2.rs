//! Cloudflare R2 blob store, talking to R2's S3-compatible API.

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use inkpost_core::blob::BlobStore;
use inkpost_core::error::CoreError;

/// Connection settings for an R2 bucket.
#[derive(Debug, Clone, Default)]
pub struct R2Config {
    /// S3 API endpoint, e.g. `https://<account>.r2.cloudflarestorage.com`.
    pub endpoint: String,
    pub bucket: String,
    /// Public base URL objects are served from. No trailing slash.
    pub public_url: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl R2Config {
    /// Load from `CLOUDFLARE_R2_*` environment variables.
    ///
    /// Missing values default to empty so the server can start without
    /// storage configured; uploads then fail at request time.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            endpoint: var("CLOUDFLARE_R2_ENDPOINT"),
            bucket: var("CLOUDFLARE_R2_BUCKET_NAME"),
            public_url: var("CLOUDFLARE_R2_PUBLIC_URL")
                .trim_end_matches('/')
                .to_string(),
            access_key_id: var("CLOUDFLARE_R2_ACCESS_KEY_ID"),
            secret_access_key: var("CLOUDFLARE_R2_SECRET_ACCESS_KEY"),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.bucket.is_empty()
            && !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
    }

    /// Public URL of the object stored under `key`.
    pub fn public_url_for(&self, key: &str) -> String {
        format!("{}/{key}", self.public_url)
    }
}

/// [`BlobStore`] backed by an R2 bucket.
pub struct R2BlobStore {
    client: Client,
    config: R2Config,
}

impl R2BlobStore {
    pub fn new(config: R2Config) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "r2-static",
        );
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .endpoint_url(config.endpoint.clone())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            config,
        }
    }
}

#[async_trait]
impl BlobStore for R2BlobStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<String, CoreError> {
        if !self.config.is_configured() {
            return Err(CoreError::Internal("Object storage is not configured".into()));
        }

        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key, "R2 upload failed");
                CoreError::Internal(format!("Upload failed: {e}"))
            })?;

        tracing::info!(key, size, "Stored object in R2");
        Ok(self.config.public_url_for(key))
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }
}
