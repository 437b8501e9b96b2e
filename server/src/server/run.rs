// Run and routing helpers (build_router, run_server).

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;
use anyhow::{Context, Result};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({ "ok": true })) }),
        )
        .route("/ws/:table_id", get(crate::server::ws::ws_handler))
        .route("/api/tables/:table_id/action", post(crate::server::http::message_handler))
        .with_state(state)
}

pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = build_router(state);

    tracing::info!(%addr, "table server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    axum::serve(listener, app)
        .await
        .context("server loop exited with an error")?;
    Ok(())
}
