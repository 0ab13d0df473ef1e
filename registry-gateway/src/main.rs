// registry-gateway/src/main.rs

//! Registry gateway binary.
//!
//! This binary exposes a small HTTP API on top of the `asset-core`
//! crate:
//!
//! - `GET /health`
//! - `POST /resources/register`
//! - `GET /resources/:id`
//! - `POST /graph/nodes`, `POST /graph/edges`
//! - `GET /graph/paths`, `GET /graph/prov`
//!
//! It holds an in-memory resource registry and a shared relationship
//! graph; this is explicitly a demo HTTP surface, not a durable store.

mod config;
mod routes;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tokio::sync::Mutex;

use asset_core::{CoreConfig, ResourceGraph};
use config::ApiConfig;
use routes::{graph, health, resources};
use state::{AppState, Registry, SharedState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "registry_gateway=info,asset_core=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let api_cfg = ApiConfig::default();
    let core_cfg = CoreConfig::default();

    let app_state: SharedState = Arc::new(AppState {
        config: core_cfg,
        registry: Mutex::new(Registry::new()),
        graph: Mutex::new(ResourceGraph::new()),
    });

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/resources/register", post(resources::register_resource))
        .route("/resources/{id}", get(resources::get_resource))
        .route("/graph/nodes", post(graph::add_node))
        .route("/graph/edges", post(graph::add_edge))
        .route("/graph/paths", get(graph::find_paths))
        .route("/graph/prov", get(graph::prov_document))
        .with_state(app_state);

    tracing::info!("registry gateway listening on http://{}", api_cfg.listen_addr);

    let listener = tokio::net::TcpListener::bind(api_cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", api_cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("API server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
