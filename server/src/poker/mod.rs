//! Hand evaluation: ranking 2 hole + up to 5 community cards to a total order.

pub mod cards;
pub mod constants;
pub mod evaluation;
pub mod hand_ranking;

pub use cards::card_str;
pub use evaluation::{evaluate_best_hand, pick_best_five};
