use contact_directory::contacts::store::InMemoryContactStore;
use contact_directory::server::{self, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // .with_max_level(tracing::Level::DEBUG)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_args(std::env::args().skip(1))?;

    // 1. Storage layer:
    let store = Arc::new(InMemoryContactStore::new());

    // 2. HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Press Ctrl+C to shutdown");

    server::serve(listener, store, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    })
    .await
}
