//! Upload-and-register pipeline: read a local document, upload it, attach it to a vector store.
//!
//! The two remote calls are issued strictly in sequence. If attaching fails after
//! the upload succeeded, the uploaded file is left in place and its id is carried
//! in [`RegisterError::AttachFile`].

use sha2::{Digest, Sha256};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::contract::{NewRemoteFile, UploadError, Uploader, FILE_PURPOSE_USER_DATA};

/// Outcome of a successful run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RegisterReport {
    pub display_name: String,
    pub content_hash: String,
    pub bytes: usize,
    pub file_id: String,
    pub vector_store_id: String,
    pub vector_store_file_status: String,
}

#[derive(Debug)]
pub enum RegisterError {
    /// The local file could not be read; nothing was sent.
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The upload call failed; nothing was created.
    CreateFile { source: UploadError },
    /// The upload succeeded but attaching did not. `file_id` is left orphaned.
    AttachFile {
        file_id: String,
        vector_store_id: String,
        source: UploadError,
    },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::ReadFile { path, source } => {
                write!(f, "Failed to read file {}: {}", path.display(), source)
            }
            RegisterError::CreateFile { source } => {
                write!(f, "Failed to upload file: {source}")
            }
            RegisterError::AttachFile {
                file_id,
                vector_store_id,
                source,
            } => write!(
                f,
                "Uploaded file {file_id} could not be added to vector store {vector_store_id}: {source}"
            ),
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegisterError::ReadFile { source, .. } => Some(source),
            RegisterError::CreateFile { source } => Some(source.as_ref()),
            RegisterError::AttachFile { source, .. } => Some(source.as_ref()),
        }
    }
}

/// Remote filename for a document: `{doc_id}_{basename}`.
///
/// The basename is the last `/`-separated segment of the path exactly as given.
pub fn display_name(doc_id: &str, file_path: &Path) -> String {
    let path = file_path.to_string_lossy();
    let base = path.rsplit('/').next().unwrap_or_default();
    format!("{doc_id}_{base}")
}

fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

pub async fn upload_and_register<U>(
    uploader: &U,
    file_path: &Path,
    doc_id: &str,
    vector_store_id: &str,
) -> Result<RegisterReport, RegisterError>
where
    U: Uploader + ?Sized,
{
    let display_name = display_name(doc_id, file_path);
    info!(
        file_path = %file_path.display(),
        doc_id,
        display_name = %display_name,
        "[REGISTER] Starting upload-and-register"
    );

    let content = match tokio::fs::read(file_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(file_path = %file_path.display(), error = ?e, "[REGISTER][ERROR] Failed to read file");
            return Err(RegisterError::ReadFile {
                path: file_path.to_path_buf(),
                source: e,
            });
        }
    };
    let bytes = content.len();
    let content_hash = sha256_hex(&content);
    debug!(bytes, content_hash = %content_hash, "[REGISTER] File read");

    let new_file = NewRemoteFile {
        display_name: display_name.clone(),
        purpose: FILE_PURPOSE_USER_DATA.to_string(),
        content,
    };
    let file = match uploader.create_file(new_file).await {
        Ok(file) => {
            info!(file_id = %file.id, "[REGISTER][UPLOAD] create_file succeeded");
            file
        }
        Err(e) => {
            error!(error = ?e, display_name = %display_name, "[REGISTER][ERROR][UPLOAD] create_file failed");
            return Err(RegisterError::CreateFile { source: e });
        }
    };

    let member = match uploader.attach_file(vector_store_id, &file.id).await {
        Ok(member) => {
            info!(
                file_id = %file.id,
                vector_store_id,
                status = %member.status,
                "[REGISTER][ATTACH] attach_file succeeded"
            );
            member
        }
        Err(e) => {
            warn!(
                file_id = %file.id,
                vector_store_id,
                "[REGISTER][ATTACH] Uploaded file left without vector store membership"
            );
            error!(error = ?e, "[REGISTER][ERROR][ATTACH] attach_file failed");
            return Err(RegisterError::AttachFile {
                file_id: file.id,
                vector_store_id: vector_store_id.to_string(),
                source: e,
            });
        }
    };

    Ok(RegisterReport {
        display_name,
        content_hash,
        bytes,
        file_id: file.id,
        vector_store_id: vector_store_id.to_string(),
        vector_store_file_status: member.status,
    })
}
