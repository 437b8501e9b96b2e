// WebSocket handler: translates client JSON into table actions and relays
// the table's broadcast stream back out, one socket per connection.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use crate::server::state::AppState;
use holdem_shared::{ClientMsg, ServerMsg};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(table_id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, table_id, state))
}

async fn handle_socket(socket: WebSocket, table_id: String, state: AppState) {
    tracing::info!(table_id, "client connected");

    let (mut sink, mut stream) = socket.split();
    let handle = state.registry.get_or_create(&table_id);

    let bootstrap = ServerMsg::Update {
        table_id: table_id.clone(),
        seq: 0,
        state: handle.current_state(),
        events: Vec::new(),
    };
    send_ws(&mut sink, &bootstrap).await;

    let mut rx = state.sockets.subscribe(&table_id);

    loop {
        tokio::select! {
            biased;

            broadcasted = rx.recv() => {
                match broadcasted {
                    Ok(raw) => {
                        if sink.send(Message::Text(raw)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }

            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(txt))) => {
                        match serde_json::from_str::<ClientMsg>(&txt) {
                            Ok(ClientMsg::Action(action)) => handle.dispatch(action),
                            Ok(ClientMsg::RequestState) => {
                                let snapshot = ServerMsg::Update {
                                    table_id: table_id.clone(),
                                    seq: 0,
                                    state: handle.current_state(),
                                    events: Vec::new(),
                                };
                                send_ws(&mut sink, &snapshot).await;
                            }
                            Err(err) => {
                                tracing::warn!(%err, raw = %txt, "failed to parse ClientMsg");
                                let _ = send_ws(
                                    &mut sink,
                                    &ServerMsg::Error { message: "malformed message".into() },
                                ).await;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::info!(table_id, "client disconnected");
}

async fn send_ws(
    sink: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &ServerMsg,
) {
    match serde_json::to_string(msg) {
        Ok(txt) => {
            let _ = sink.send(Message::Text(txt)).await;
        }
        Err(err) => {
            tracing::error!(%err, "failed to serialize ServerMsg for websocket send");
        }
    }
}
