//! Blob storage for customer-uploaded images.
//!
//! The order assembler needs exactly one capability from storage: turn
//! bytes into a public URL, or fail. [`BlobStorage`] is the seam; the HTTP
//! implementation posts to a Cloudinary-style unsigned upload endpoint.
//! When no endpoint is configured, uploads fail cleanly and any order that
//! required one is aborted rather than persisted with a missing image.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use cakebox_core::error::CoreError;

use crate::config::ServerConfig;

/// Upload interface consumed by the order handlers.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Upload a file and return its public URL.
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, CoreError>;
}

/// Build the storage backend described by the configuration.
pub fn from_config(config: &ServerConfig) -> Arc<dyn BlobStorage> {
    match &config.upload_url {
        Some(url) => Arc::new(HttpBlobStorage::new(url.clone(), config.upload_preset.clone())),
        None => Arc::new(UnconfiguredStorage),
    }
}

/// Successful upload response from the storage endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// `secure_url` in Cloudinary responses; `url` as a fallback.
    secure_url: Option<String>,
    url: Option<String>,
}

/// HTTP multipart upload client (Cloudinary-style unsigned upload).
pub struct HttpBlobStorage {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: Option<String>,
}

impl HttpBlobStorage {
    pub fn new(upload_url: String, upload_preset: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url,
            upload_preset,
        }
    }
}

#[async_trait]
impl BlobStorage for HttpBlobStorage {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, CoreError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(preset) = &self.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CoreError::Upload(format!("storage request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(CoreError::Upload(format!(
                "storage endpoint returned {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Upload(format!("unreadable storage response: {e}")))?;

        body.secure_url
            .or(body.url)
            .ok_or_else(|| CoreError::Upload("storage response carried no URL".to_string()))
    }
}

/// Placeholder backend used when no upload endpoint is configured.
pub struct UnconfiguredStorage;

#[async_trait]
impl BlobStorage for UnconfiguredStorage {
    async fn upload(&self, _filename: &str, _bytes: Vec<u8>) -> Result<String, CoreError> {
        Err(CoreError::Upload(
            "blob storage is not configured (set UPLOAD_URL)".to_string(),
        ))
    }
}
