use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::load_config::load_config;
use crate::register::upload_and_register;
use crate::upload::OpenAIClient;

/// Printed to stdout once the file is a member of the vector store.
pub const SUCCESS_MESSAGE: &str = "File added to vector store.";

/// CLI for vector-upload: push one document into the configured OpenAI vector store.
#[derive(Parser, Debug)]
#[clap(
    name = "vector-upload",
    version,
    about = "Upload a file to OpenAI and add it to the vector store named by OPENAI_VECTOR_STORE_ID"
)]
pub struct Cli {
    /// Path of the local file to upload
    pub file_path: PathBuf,
    /// Document id; the remote file is named `{doc_id}_{file name}`
    pub doc_id: String,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let config = load_config()?;
    let client = OpenAIClient::new(&config)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to construct OpenAI client")?;

    let report = upload_and_register(&client, &cli.file_path, &cli.doc_id, &config.vector_store_id)
        .await
        .with_context(|| format!("Failed to register {}", cli.file_path.display()))?;

    tracing::info!(
        file_id = %report.file_id,
        display_name = %report.display_name,
        content_hash = %report.content_hash,
        bytes = report.bytes,
        vector_store_id = %report.vector_store_id,
        status = %report.vector_store_file_status,
        "Upload-and-register complete"
    );
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}
