use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vector_upload::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Existing environment variables take precedence over .env entries.
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is reserved for the confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vector_upload=info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    tracing::info!(file_path = %cli.file_path.display(), doc_id = %cli.doc_id, "CLI arguments parsed, invoking run");
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("CLI completed successfully"),
        Err(e) => tracing::error!(error = %e, "CLI exited with error"),
    }
    result
}
