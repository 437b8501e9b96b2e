// HTTP handlers for the table API.
//
// Provides a transport-agnostic endpoint that mirrors the websocket action
// path, so a client without a persistent connection can still act on a table.

use axum::{
    extract::{Path, State},
    Json,
};
use holdem_shared::Action;

use crate::server::state::AppState;

pub async fn message_handler(
    State(state): State<AppState>,
    Path(table_id): Path<String>,
    Json(action): Json<Action>,
) -> Json<holdem_shared::TableStatePublic> {
    let handle = state.registry.get_or_create(&table_id);
    let state = handle
        .dispatch_wait(action)
        .await
        .unwrap_or_else(|_| handle.current_state());
    Json(state)
}
