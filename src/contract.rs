//! # contract: interface for pushing documents into a vector store
//!
//! This module defines the [`Uploader`] trait and the plain data types that flow
//! through it. A real implementation talks to the OpenAI HTTP API
//! (see [`crate::upload::OpenAIClient`]); tests use the generated `MockUploader`.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`, so orchestration in [`crate::register`]
//!   can be exercised without network access.
//! - Mocks are exported under the default `test-export-mocks` feature for use in
//!   integration tests.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Purpose tag attached to every uploaded document.
pub const FILE_PURPOSE_USER_DATA: &str = "user_data";

/// Error type for the Uploader trait (simple boxed error, as returned by the HTTP layer).
pub type UploadError = Box<dyn std::error::Error + Send + Sync>;

/// The data needed to create a new remote file resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRemoteFile {
    /// Filename the remote resource is created under.
    pub display_name: String,
    /// Purpose tag, e.g. [`FILE_PURPOSE_USER_DATA`].
    pub purpose: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

/// A file resource as returned by the service after creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoteFile {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Membership record of a file inside a vector store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VectorStoreFile {
    /// Id of the member file (equal to the uploaded file id).
    pub id: String,
    pub vector_store_id: String,
    /// Ingestion status reported by the service (`in_progress`, `completed`, ...).
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Trait for uploading files and registering them with a vector store.
///
/// The implementor owns authentication and transport. Calls are independent;
/// sequencing (upload first, then attach) is the caller's job.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload raw bytes as a new file resource.
    async fn create_file(&self, req: NewRemoteFile) -> Result<RemoteFile, UploadError>;

    /// Add an already uploaded file to a vector store.
    async fn attach_file(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> Result<VectorStoreFile, UploadError>;
}
