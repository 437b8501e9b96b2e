//! Table phases and player actions for the Hold'em engine.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandResult;
use crate::player::PlayerId;

/// The current phase of a table. `Waiting` is the idle phase before a hand
/// has been dealt (not enough players, or between hands).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// A client-submitted action. `player_id` names the acting player; the
/// engine rejects the action if it is not that player's turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Join {
        player_id: PlayerId,
        username: String,
        buyin: u32,
    },
    Fold {
        player_id: PlayerId,
    },
    Check {
        player_id: PlayerId,
    },
    Call {
        player_id: PlayerId,
    },
    Raise {
        player_id: PlayerId,
        amount: u32,
    },
}

impl Action {
    pub fn player_id(&self) -> &PlayerId {
        match self {
            Action::Join { player_id, .. }
            | Action::Fold { player_id }
            | Action::Check { player_id }
            | Action::Call { player_id }
            | Action::Raise { player_id, .. } => player_id,
        }
    }
}

/// Player-side action kinds used in audit/history records, keeping richer
/// detail than the wire-level [`Action`] (e.g. the resolved call/raise
/// amount rather than just the player's intent).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call(u32),
    Raise { to: u32, by: u32 },
    PostBlind { kind: BlindKind, amount: u32 },
}

/// Dealer/table-level occurrences, distinct from player-initiated actions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameAction {
    PhaseChanged(Phase),
    DealtHole { player_id: PlayerId },
    DealtCommunity { cards: Vec<Card> },
    Showdown { hand_results: Vec<HandResult> },
    PotAwarded { winners: Vec<PlayerId>, amount: u32 },
}

/// A single recorded action/event in the table's history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ActionEvent {
    PlayerAction {
        player_id: PlayerId,
        action: ActionKind,
    },
    GameAction(GameAction),
}

impl ActionEvent {
    pub fn player(player_id: PlayerId, action: ActionKind) -> Self {
        ActionEvent::PlayerAction { player_id, action }
    }

    pub fn game(action: GameAction) -> Self {
        ActionEvent::GameAction(action)
    }
}

/// Types of blinds that can be posted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    SmallBlind,
    BigBlind,
}
