//! `load_config` module: reads the upload settings from the process environment.
//!
//! Secrets never live in a file checked into the project; the binary seeds the
//! environment from a local `.env` (via `dotenvy`) before this runs.
//!
//! # Variables
//! - `OPENAI_API_KEY` (required)
//! - `OPENAI_VECTOR_STORE_ID` (required)
//! - `OPENAI_BASE_URL` (optional, defaults to [`DEFAULT_BASE_URL`])
//! - `OPENAI_ORG_ID`, `OPENAI_PROJECT_ID` (optional)
//!
//! # Errors
//! A missing or empty required variable yields an `anyhow::Error` that names it.

use anyhow::Result;
use std::env;
use tracing::{error, info};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const VECTOR_STORE_ID_VAR: &str = "OPENAI_VECTOR_STORE_ID";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ORG_ID_VAR: &str = "OPENAI_ORG_ID";
pub const PROJECT_ID_VAR: &str = "OPENAI_PROJECT_ID";

/// Everything the OpenAI client and the register step need.
#[derive(Clone)]
pub struct UploadConfig {
    pub api_key: String,
    pub vector_store_id: String,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
}

// Keeps the key out of `{:?}` output and logs.
impl std::fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadConfig")
            .field("api_key", &"<redacted>")
            .field("vector_store_id", &self.vector_store_id)
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => {
            error!(var = name, "Environment variable is empty");
            Err(anyhow::anyhow!("{name} environment variable is empty"))
        }
        Err(e) => {
            error!(error = ?e, var = name, "Environment variable not set");
            Err(anyhow::anyhow!("{name} environment variable not set: {e}"))
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Loads the upload configuration from the environment.
pub fn load_config() -> Result<UploadConfig> {
    let api_key = required_var(API_KEY_VAR)?;
    info!(api_key_len = api_key.len(), "{API_KEY_VAR} found in env");

    let vector_store_id = required_var(VECTOR_STORE_ID_VAR)?;

    let base_url = optional_var(BASE_URL_VAR)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let config = UploadConfig {
        api_key,
        vector_store_id,
        base_url,
        organization: optional_var(ORG_ID_VAR),
        project: optional_var(PROJECT_ID_VAR),
    };

    info!(
        vector_store_id = %config.vector_store_id,
        base_url = %config.base_url,
        organization_set = config.organization.is_some(),
        project_set = config.project.is_some(),
        "Config loaded from environment"
    );

    Ok(config)
}
