//! Hand evaluation types.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::PlayerId;

/// Categories of poker hands, ordered from weakest to strongest. Declared in
/// this order so the derived `Ord` impl on [`HandRank`] gives the natural
/// "bigger category beats smaller category" comparison used internally by
/// the evaluator; the engine's public total order (lower is stronger) is
/// exposed separately via [`HandRank::rank_value`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRankCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
    StraightFlush,
}

impl HandRankCategory {
    pub fn label(self) -> &'static str {
        match self {
            HandRankCategory::HighCard => "High Card",
            HandRankCategory::Pair => "Pair",
            HandRankCategory::TwoPair => "Two Pair",
            HandRankCategory::ThreeKind => "Three of a Kind",
            HandRankCategory::Straight => "Straight",
            HandRankCategory::Flush => "Flush",
            HandRankCategory::FullHouse => "Full House",
            HandRankCategory::FourKind => "Four of a Kind",
            HandRankCategory::StraightFlush => "Straight Flush",
        }
    }
}

/// Complete hand ranking: category plus descending tiebreaker values.
/// `Ord` compares category first, then tiebreakers lexicographically, both
/// using the natural "greater means stronger" direction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank {
    pub category: HandRankCategory,
    pub tiebreakers: Vec<u8>,
}

impl HandRank {
    /// The engine's documented total order where a *lower* value is a
    /// *stronger* hand (see spec 4.2). This is a monotonic inversion of the
    /// natural internal ordering above, exposed for external/audit
    /// consumers; winner selection at showdown uses this value with `min`.
    pub fn rank_value(&self) -> u64 {
        let mut score: u64 = self.category as u64;
        for i in 0..5 {
            let tb = *self.tiebreakers.get(i).unwrap_or(&0) as u64;
            score = (score << 4) | tb;
        }
        u64::MAX - score
    }
}

/// Result of evaluating one player's hand at showdown.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandResult {
    pub player_id: PlayerId,
    pub rank: HandRank,
    /// `rank.rank_value()`, the documented lower-is-stronger total order,
    /// carried on the wire so external consumers don't need `HandRank`'s
    /// internal category/tiebreaker shape to compare results.
    pub rank_value: u64,
    pub category_label: String,
    pub best_five: Vec<Card>,
}
