//! Player identity and the public view of a seated player.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Stable, client-chosen identifier for a player. Persists across hands and
/// across reconnects; distinct from a player's seat index, which only
/// reflects position in the seating ring.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub String);

impl From<String> for PlayerId {
    fn from(v: String) -> Self {
        PlayerId(v)
    }
}

impl From<&str> for PlayerId {
    fn from(v: &str) -> Self {
        PlayerId(v.to_owned())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public view of a seated player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub username: String,
    pub chips: u32,
    pub current_bet: u32,
    pub folded: bool,
    pub all_in: bool,
    /// Hole cards, present once dealt. The core persists full state; masking
    /// other players' cards for a given viewer is a transport/view concern.
    pub hole_cards: Vec<Card>,
}
