//! Per-table actor. Each table runs on its own task, draining an unbounded
//! FIFO queue of actions one at a time behind a leased mutex, then fanning
//! the resulting events out to the collaborator ports in a fixed order:
//! cache, bus, sockets, with the audit log for closed-out hands written
//! concurrently since it has no bearing on what players see next.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use holdem_shared::{Action, Event, ServerMsg, TableStatePublic};
use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tokio::time::timeout;

use crate::game::Game;
use crate::ports::{AuditPort, BusPort, CachePort, SocketPort};

pub const DEFAULT_LOCK_LEASE: Duration = Duration::from_secs(5);

struct Command {
    action: Action,
    reply: Option<oneshot::Sender<TableStatePublic>>,
}

/// A cheap, cloneable reference to a running table's action queue.
#[derive(Clone)]
pub struct TableHandle {
    table_id: String,
    tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<TableStatePublic>,
}

impl TableHandle {
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// A snapshot of the table's current public state, for a client that
    /// just connected and needs something to render before the next event.
    pub fn current_state(&self) -> TableStatePublic {
        self.state_rx.borrow().clone()
    }

    /// Enqueue an action without waiting for it to be processed.
    pub fn dispatch(&self, action: Action) {
        let _ = self.tx.send(Command {
            action,
            reply: None,
        });
    }

    /// Enqueue an action and wait for the resulting public state, for
    /// callers (e.g. an HTTP request/response endpoint) that need it inline.
    pub async fn dispatch_wait(&self, action: Action) -> anyhow::Result<TableStatePublic> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Command {
                action,
                reply: Some(reply_tx),
            })
            .map_err(|_| anyhow::anyhow!("table engine task has shut down"))?;
        Ok(reply_rx.await?)
    }
}

pub struct TableEngine {
    game: Mutex<Game>,
    seq: AtomicU64,
    cache: Arc<dyn CachePort>,
    bus: Arc<dyn BusPort>,
    audit: Arc<dyn AuditPort>,
    sockets: Arc<dyn SocketPort>,
    lock_lease: Duration,
    state_tx: watch::Sender<TableStatePublic>,
}

#[allow(clippy::too_many_arguments)]
pub fn spawn(
    table_id: String,
    min_bet: u32,
    cache: Arc<dyn CachePort>,
    bus: Arc<dyn BusPort>,
    audit: Arc<dyn AuditPort>,
    sockets: Arc<dyn SocketPort>,
    lock_lease: Duration,
) -> TableHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let initial_game = Game::new(table_id.clone(), min_bet);
    let (state_tx, state_rx) = watch::channel(initial_game.public());
    let engine = Arc::new(TableEngine {
        game: Mutex::new(initial_game),
        seq: AtomicU64::new(0),
        cache,
        bus,
        audit,
        sockets,
        lock_lease,
        state_tx,
    });

    tokio::spawn(run(engine, rx));

    TableHandle {
        table_id,
        tx,
        state_rx,
    }
}

async fn run(engine: Arc<TableEngine>, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(cmd) = rx.recv().await {
        let state = engine.handle(cmd.action).await;
        if let Some(reply) = cmd.reply {
            let _ = reply.send(state);
        }
    }
}

impl TableEngine {
    async fn handle(&self, action: Action) -> TableStatePublic {
        let mut game = match timeout(self.lock_lease, self.game.lock()).await {
            Ok(guard) => guard,
            Err(_) => {
                tracing::error!(
                    lease_ms = self.lock_lease.as_millis() as u64,
                    "table lock lease expired, dropping action"
                );
                return self.game.lock().await.public();
            }
        };

        // The hand this action might be closing out, captured before `apply`
        // runs so a showdown-triggered auto-start of the next hand doesn't
        // shadow which hand_id the audit entry belongs to.
        let hand_before = game.hand_id.clone();

        let events = game.apply(action);
        if events.is_empty() {
            // Illegal or no-op action: FSM state is unchanged, nothing to
            // publish or audit.
            return game.public();
        }

        let state = game.public();
        let table_id = game.table_id.clone();

        if let (Some(hand_id), Some(Event::Showdown {
            server_secret,
            commitment,
            ..
        })) = (
            hand_before,
            events.iter().find(|e| matches!(e, Event::Showdown { .. })),
        ) {
            if let Ok(events_json) = serde_json::to_string(&events) {
                let audit = self.audit.clone();
                let table_id = table_id.clone();
                let secret = server_secret.clone();
                let commitment = commitment.clone();
                tokio::spawn(async move {
                    if let Err(err) = audit
                        .log_hand(&table_id, &hand_id, &secret, &commitment, &events_json)
                        .await
                    {
                        tracing::error!(?err, table_id, hand_id, "failed to write audit log");
                    }
                });
            }
        }

        // Seq increments once per emitted event, not once per dequeued
        // action: a join that auto-starts a hand carries player_joined,
        // state_update, and hand_started, and each gets its own seq and its
        // own publish to the bus/cache/sockets.
        for event in events {
            let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
            let msg = ServerMsg::Update {
                table_id: table_id.clone(),
                seq,
                state: state.clone(),
                events: vec![event],
            };

            if let Ok(payload) = serde_json::to_string(&msg) {
                if let Err(err) = self
                    .cache
                    .hset(&format!("table:{table_id}:state"), "data", payload.clone())
                    .await
                {
                    tracing::warn!(?err, table_id, "cache write failed");
                }
                if let Err(err) = self
                    .bus
                    .publish(&format!("table.{table_id}.events"), payload.clone().into_bytes())
                    .await
                {
                    tracing::warn!(?err, table_id, "bus publish failed");
                }
                self.sockets.broadcast(&table_id, payload).await;
            }
        }

        let _ = self.state_tx.send(state.clone());
        state
    }
}
