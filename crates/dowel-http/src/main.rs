//! Dowel HTTP server binary.

use anyhow::Result;
use clap::Parser;
use dowel::seed::seed;
use dowel::storage::new_in_memory_store;
use dowel_http::server::{AppState, app_router};
use tracing_subscriber::EnvFilter;

/// In-memory issue tracker HTTP API.
#[derive(Debug, Parser)]
#[command(name = "dowel-http", version)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "DOWEL_HOST")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8000, env = "DOWEL_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber, controlled via RUST_LOG.
    // Example: RUST_LOG=dowel=debug,dowel_http=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dowel=info,dowel_http=info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    // Fresh store every start, pre-loaded with the sample issues.
    let store = new_in_memory_store();
    seed(store.as_ref()).await?;

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app_router(AppState { store })).await?;

    Ok(())
}
