//! Client/server wire envelopes.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::event::Event;
use crate::game::{Action, Phase};
use crate::player::{PlayerId, PlayerPublic};

/// Complete public view of a table's state, sent inside an [`UpdateEnvelope`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableStatePublic {
    pub table_id: String,
    pub players: Vec<PlayerPublic>,
    pub community: Vec<Card>,
    pub pot: u32,
    pub sb: u32,
    pub bb: u32,
    pub dealer_seat: usize,
    pub to_act: Option<PlayerId>,
    pub phase: Phase,
    #[serde(default)]
    pub winner_ids: Vec<PlayerId>,
    pub current_bet: u32,
    pub min_raise: u32,
}

/// `{"type":"action", ...}` sent by a client to act at a table.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Action(Action),
    RequestState,
}

/// `{"type":"update","table_id":"...","seq":N,"state":...,"events":[...]}`
/// sent by the server after every accepted action.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    Update {
        table_id: String,
        seq: u64,
        state: TableStatePublic,
        events: Vec<Event>,
    },
    Error {
        message: String,
    },
}
