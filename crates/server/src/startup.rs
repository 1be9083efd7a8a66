use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the database (schema ensured), serve until Ctrl+C, then close the pool.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    if let Some(dir) = cfg.database.sqlite_file().as_deref().and_then(Path::parent) {
        common::env::ensure_dir(dir).await?;
    }

    let db = models::db::bootstrap(&cfg.database).await?;
    let state = ServerState { db: db.clone() };
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!(event = "db_closed", "database connection closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // keep serving; the process can still be stopped externally
        error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}
