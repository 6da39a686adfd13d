use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::domain::ports::ScoreStoreBox;
use receipt_points::infrastructure::in_memory::InMemoryScoreStore;
use receipt_points::interfaces::http::{AppState, ServerConfig, serve};
use tracing_subscriber::EnvFilter;

/// Scores purchase receipts over HTTP on port 8080.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store: ScoreStoreBox = Box::new(InMemoryScoreStore::new());
    let state = AppState::new(ReceiptProcessor::new(store));

    let config = ServerConfig::default();
    let listener = config.bind().await.into_diagnostic()?;
    serve(listener, state).await.into_diagnostic()?;

    Ok(())
}
