use chrono::Utc;
use rand::Rng;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::config;

/// Image types accepted by the upload endpoint, checked against both the
/// file extension and the declared content-type.
pub const ALLOWED_TYPES: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// 10 MiB ceiling per uploaded file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file was uploaded")]
    NoFile,

    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("file too large: {0} bytes")]
    TooLarge(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A persisted upload and the public URL it resolves to.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub filename: String,
    pub url: String,
}

/// Accepts a single image per request, validates it against the allow-list
/// and size ceiling, and writes it under a timestamp+random filename so
/// concurrent uploads never collide.
pub struct UploadService;

impl UploadService {
    pub fn new() -> Self {
        Self
    }

    pub async fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let ext = validate(original_name, content_type, data.len())?;

        let filename = unique_filename(&ext);
        let dir = &config().uploads_dir;
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(dir.join(&filename), data).await?;

        let url = format!("{}/uploads/{}", config().base_url.trim_end_matches('/'), filename);
        info!(filename = %filename, size = data.len(), "stored uploaded image");

        Ok(StoredUpload { filename, url })
    }

    /// Unlink a locally-hosted image referenced by a deleted record. Only
    /// paths under the uploads convention are touched; failure is logged
    /// and swallowed, never propagated.
    pub async fn remove_local_image(image: &str) {
        if !image.contains("/uploads/") {
            return;
        }
        let Some(filename) = image.rsplit('/').next().filter(|f| !f.is_empty()) else {
            return;
        };

        let path = config().uploads_dir.join(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => info!(path = %path.display(), "removed orphaned image"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not remove orphaned image"),
        }
    }
}

impl Default for UploadService {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate name, declared type and size; returns the lowercased extension.
fn validate(
    original_name: &str,
    content_type: Option<&str>,
    size: usize,
) -> Result<String, UploadError> {
    let ext = extension_of(original_name)
        .filter(|e| ALLOWED_TYPES.contains(&e.as_str()))
        .ok_or_else(|| UploadError::UnsupportedType(original_name.to_string()))?;

    if let Some(ct) = content_type {
        if !ALLOWED_TYPES.iter().any(|t| ct.contains(t)) {
            return Err(UploadError::UnsupportedType(ct.to_string()));
        }
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size));
    }

    Ok(ext)
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn unique_filename(ext: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("product-{}-{}.{}", Utc::now().timestamp_millis(), suffix, ext)
}
