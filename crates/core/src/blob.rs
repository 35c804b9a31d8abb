//! Image uploads to object storage.
//!
//! Validation and key generation happen here; the actual write goes through
//! the [`BlobStore`] trait so the storage backend can be swapped (R2 in
//! production, in-memory in tests).

use async_trait::async_trait;
use rand::Rng;

use crate::error::CoreError;

/// Largest accepted upload (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Folder for article thumbnails and inline article images.
pub const FOLDER_THUMBNAILS: &str = "thumbnails";

/// Length of the random suffix in generated object keys.
const KEY_SUFFIX_LEN: usize = 11;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Accepted image MIME types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

/// An object store that accepts a buffer and returns its public URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `body` under `key` and return the object's public URL.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<String, CoreError>;

    /// Whether the store has what it needs to accept writes.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Check type and size of an upload before it is sent anywhere.
pub fn validate_upload(mime: &str, len: usize) -> Result<ImageType, CoreError> {
    let image_type = ImageType::from_mime(mime).ok_or_else(|| {
        CoreError::Validation("Invalid file type. Use JPEG, PNG, GIF, or WebP.".into())
    })?;
    if len > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation("File too large. Max 5MB.".into()));
    }
    Ok(image_type)
}

/// Build an object key of the form `<folder>/<unix-millis>-<random>.<ext>`.
pub fn object_key(folder: &str, image_type: ImageType) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..KEY_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{folder}/{millis}-{suffix}.{}", image_type.extension())
}

/// Validate an image and store it under `folder`, returning its public URL.
pub async fn upload_image(
    store: &dyn BlobStore,
    folder: &str,
    body: Vec<u8>,
    mime: &str,
) -> Result<String, CoreError> {
    let image_type = validate_upload(mime, body.len())?;
    let key = object_key(folder, image_type);
    store.put(&key, body, image_type.mime()).await
}
