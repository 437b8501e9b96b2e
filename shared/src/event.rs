//! Stable, externally-observed event names pushed to clients, the socket
//! bus, and the audit log. Unlike [`crate::game::ActionEvent`] (the engine's
//! internal history record), these names and shapes are a stability
//! contract: they must not change without a protocol version bump.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HandResult;
use crate::player::PlayerId;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Event {
    PlayerJoined {
        player_id: PlayerId,
        username: String,
        seat: usize,
    },
    StateUpdate,
    HandStarted {
        hand_id: String,
        dealer_seat: usize,
        commitment: String,
    },
    PlayerAction {
        player_id: PlayerId,
        action: String,
        amount: Option<u32>,
    },
    PhaseChange {
        phase: Phase,
        community: Vec<Card>,
    },
    Showdown {
        results: Vec<HandResult>,
        winners: Vec<PlayerId>,
        pot: u32,
        winning_hand: String,
        hand_id: String,
        server_secret: String,
        commitment: String,
    },
}

impl Event {
    /// The stable snake_case name used on the wire and in the audit log.
    pub fn name(&self) -> &'static str {
        match self {
            Event::PlayerJoined { .. } => "player_joined",
            Event::StateUpdate => "state_update",
            Event::HandStarted { .. } => "hand_started",
            Event::PlayerAction { .. } => "player_action",
            Event::PhaseChange { .. } => "phase_change",
            Event::Showdown { .. } => "showdown",
        }
    }
}
