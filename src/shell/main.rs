use std::net::SocketAddr;
use std::sync::Arc;

use award_votes::shared::infrastructure::config::{Config, StoreLocation};
use award_votes::shared::infrastructure::vote_store::VoteStore;
use award_votes::shared::infrastructure::vote_store::in_memory::InMemoryVoteStore;
use award_votes::shared::infrastructure::vote_store::json_file::JsonFileVoteStore;
use award_votes::shell::http::router;
use award_votes::shell::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) => debug!(error = %e, "No environment file loaded"),
    }

    let config = Config::load()?;
    let store: Arc<dyn VoteStore> = match &config.store {
        StoreLocation::InMemory => {
            warn!("Using the in-memory vote store; votes are lost on restart");
            Arc::new(InMemoryVoteStore::new())
        }
        StoreLocation::JsonFile(path) => {
            let store = JsonFileVoteStore::open(path.clone()).await?;
            info!(path = %store.path().display(), "Using the JSON file vote store");
            Arc::new(store)
        }
    };

    let state = AppState::new(store, config.awards.clone());
    let app = router(state, &config.allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
