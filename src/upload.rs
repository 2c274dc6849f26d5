#![doc = "Uploader implementation backed by the OpenAI HTTP API: file creation and vector store membership."]
//
//! # OpenAI client
//!
//! [`OpenAIClient`] wires the [`Uploader`] trait to two OpenAI endpoints:
//!
//! - `POST /files` (multipart upload, returns a file object)
//! - `POST /vector_stores/{id}/files` (JSON body, returns a vector store file object)
//!
//! Construct it from an [`UploadConfig`]. Every non-2xx response becomes an error
//! that carries the status and the service's response body. Requests are sent once.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart;
use serde::Serialize;

use crate::contract::{NewRemoteFile, RemoteFile, UploadError, Uploader, VectorStoreFile};
use crate::load_config::UploadConfig;

const BETA_HEADER: &str = "openai-beta";
const ORGANIZATION_HEADER: &str = "openai-organization";
const PROJECT_HEADER: &str = "openai-project";
const BETA_ASSISTANTS_V2: &str = "assistants=v2";

pub struct OpenAIClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct AttachFileBody<'a> {
    file_id: &'a str,
}

impl OpenAIClient {
    pub fn new(config: &UploadConfig) -> Result<Self, UploadError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        if let Some(org) = &config.organization {
            headers.insert(ORGANIZATION_HEADER, HeaderValue::from_str(org)?);
        }
        if let Some(project) = &config.project {
            headers.insert(PROJECT_HEADER, HeaderValue::from_str(project)?);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        tracing::info!(
            base_url = %config.base_url,
            organization_set = config.organization.is_some(),
            project_set = config.project.is_some(),
            "Initialized OpenAIClient"
        );
        Ok(OpenAIClient {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

/// Turns a non-success response into an error that keeps the service's diagnostic.
async fn api_error(action: &str, resp: reqwest::Response) -> UploadError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    tracing::error!(%status, body = %body, action, "OpenAI API returned an error");
    format!("API error {action}: {status} - {body}").into()
}

#[async_trait]
impl Uploader for OpenAIClient {
    async fn create_file(&self, req: NewRemoteFile) -> Result<RemoteFile, UploadError> {
        tracing::info!(
            display_name = %req.display_name,
            purpose = %req.purpose,
            bytes = req.content.len(),
            "Uploading new file"
        );

        let part = multipart::Part::bytes(req.content)
            .file_name(req.display_name.clone())
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new()
            .text("purpose", req.purpose)
            .part("file", part);

        let url = format!("{}/files", self.base_url);
        let resp = self.http.post(&url).multipart(form).send().await.map_err(|e| {
            tracing::error!(error = ?e, url = %url, "Failed to send file upload request");
            e
        })?;
        if !resp.status().is_success() {
            return Err(api_error("creating file", resp).await);
        }

        let file: RemoteFile = resp.json().await?;
        tracing::info!(
            file_id = %file.id,
            filename = %file.filename,
            bytes = file.bytes,
            "Successfully created file"
        );
        Ok(file)
    }

    async fn attach_file(
        &self,
        vector_store_id: &str,
        file_id: &str,
    ) -> Result<VectorStoreFile, UploadError> {
        tracing::info!(vector_store_id, file_id, "Adding file to vector store");

        let url = format!("{}/vector_stores/{}/files", self.base_url, vector_store_id);
        let resp = self
            .http
            .post(&url)
            .header(BETA_HEADER, BETA_ASSISTANTS_V2)
            .json(&AttachFileBody { file_id })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, url = %url, "Failed to send vector store request");
                e
            })?;
        if !resp.status().is_success() {
            return Err(api_error("adding file to vector store", resp).await);
        }

        let member: VectorStoreFile = resp.json().await?;
        tracing::info!(
            file_id = %member.id,
            vector_store_id = %member.vector_store_id,
            status = %member.status,
            "Successfully added file to vector store"
        );
        Ok(member)
    }
}
