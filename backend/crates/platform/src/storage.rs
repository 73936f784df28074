//! Object Storage Client
//!
//! Bucket-scoped object storage over a storage REST API. The rest of the
//! system only sees opaque locator strings; this module is the one place
//! that knows how a locator maps back onto a stored object.

use thiserror::Error;

/// Object storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload file error: {0}")]
    Upload(String),

    #[error("delete file error: {0}")]
    Delete(String),

    #[error("locator does not belong to this store: {0}")]
    InvalidLocator(String),
}

/// Object storage port
///
/// `store` returns an opaque locator for the stored object; `remove`
/// accepts a locator previously returned by `store`.
#[trait_variant::make(ObjectStore: Send)]
pub trait LocalObjectStore {
    /// Store an object, returning its locator
    async fn store(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Remove a previously stored object
    async fn remove(&self, locator: &str) -> Result<(), StorageError>;
}

/// Storage service configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage API endpoint, e.g. `https://xyz.supabase.co/storage/v1`
    pub endpoint: String,
    /// Bucket objects are stored under
    pub bucket: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Public base URL locators are built from (trailing slash included)
    pub public_url: String,
}

/// HTTP-backed object store
#[derive(Clone)]
pub struct HttpObjectStore {
    config: StorageConfig,
    client: reqwest::Client,
}

impl HttpObjectStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Map a locator back to its `bucket/key` object path
    fn object_path<'a>(&self, locator: &'a str) -> Result<&'a str, StorageError> {
        locator
            .strip_prefix(&self.config.public_url)
            .filter(|path| !path.is_empty())
            .ok_or_else(|| StorageError::InvalidLocator(locator.to_string()))
    }
}

impl ObjectStore for HttpObjectStore {
    async fn store(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!(
            "{}/object/{}/{}",
            self.config.endpoint, self.config.bucket, key
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Upload(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        Ok(format!(
            "{}{}/{}",
            self.config.public_url, self.config.bucket, key
        ))
    }

    async fn remove(&self, locator: &str) -> Result<(), StorageError> {
        let path = self.object_path(locator)?;
        let url = format!("{}/object/{}", self.config.endpoint, path);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| StorageError::Delete(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Delete(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }
}
