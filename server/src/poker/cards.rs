use holdem_shared::Card;

pub use holdem_shared::{CardRank, CardSuit};

/// Returns a string like "A♣", "T♦", etc.
pub fn card_str(c: Card) -> String {
    c.to_string()
}
