//! End-to-end WebSocket test: joining a table over one socket broadcasts the
//! updated state to every other socket subscribed to that same table.

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use holdem_server::config::Config;
use holdem_server::server::{run::build_router, AppState};
use holdem_shared::{Action, ClientMsg, ServerMsg};
use std::time::Duration;

#[tokio::test]
async fn joining_a_table_broadcasts_state_to_other_clients() -> Result<()> {
    let state = AppState::new(&Config::default());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_handle = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            eprintln!("server error: {err}");
        }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let ws_url = format!("ws://127.0.0.1:{}/ws/table1", addr.port());
    let (ws1, _) = tokio_tungstenite::connect_async(&ws_url).await?;
    let (ws2, _) = tokio_tungstenite::connect_async(&ws_url).await?;
    let (mut write1, mut read1) = ws1.split();
    let (_write2, mut read2) = ws2.split();

    // Drain each socket's bootstrap snapshot.
    let _ = next_server_msg(&mut read1).await;
    let _ = next_server_msg(&mut read2).await;

    let join = ClientMsg::Action(Action::Join {
        player_id: "alice".into(),
        username: "alice".to_string(),
        buyin: 1000,
    });
    write1
        .send(tokio_tungstenite::tungstenite::Message::Text(
            serde_json::to_string(&join)?,
        ))
        .await?;

    let received = next_server_msg(&mut read2)
        .await
        .expect("client2 should observe the join broadcast from client1");
    match received {
        ServerMsg::Update { state, .. } => {
            assert_eq!(state.players.len(), 1);
            assert_eq!(state.players[0].username, "alice");
        }
        ServerMsg::Error { message } => panic!("unexpected error: {message}"),
    }

    server_handle.abort();
    Ok(())
}

async fn next_server_msg<R>(read: &mut R) -> Option<ServerMsg>
where
    R: StreamExt<
            Item = Result<
                tokio_tungstenite::tungstenite::Message,
                tokio_tungstenite::tungstenite::Error,
            >,
        > + Unpin,
{
    let msg = tokio::time::timeout(Duration::from_secs(2), read.next())
        .await
        .ok()??
        .ok()?;
    match msg {
        tokio_tungstenite::tungstenite::Message::Text(txt) => serde_json::from_str(&txt).ok(),
        _ => None,
    }
}
