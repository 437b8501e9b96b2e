//! Regression tests pinned to specific hand/board combinations that have
//! previously tripped up the evaluator's tiebreaker ordering.

use holdem_server::poker::{evaluate_best_hand, pick_best_five};
use holdem_shared::{Card, CardRank, CardSuit, HandRankCategory};

#[test]
fn pair_of_nines_with_king_kicker() {
    let hole = [
        Card::new(CardRank::Jack, CardSuit::Clubs),
        Card::new(CardRank::Seven, CardSuit::Hearts),
    ];
    let community = vec![
        Card::new(CardRank::King, CardSuit::Hearts),
        Card::new(CardRank::Ten, CardSuit::Spades),
        Card::new(CardRank::Nine, CardSuit::Hearts),
        Card::new(CardRank::Nine, CardSuit::Clubs),
        Card::new(CardRank::Four, CardSuit::Clubs),
    ];

    let rank = evaluate_best_hand(hole, &community);
    let best_five = pick_best_five(hole, &community);

    assert_eq!(rank.category, HandRankCategory::Pair);
    assert_eq!(rank.tiebreakers, vec![9, 13, 11, 10]);
    assert_eq!(best_five.len(), 5);
}

#[test]
fn two_pair_kings_and_nines() {
    let hole = [
        Card::new(CardRank::King, CardSuit::Clubs),
        Card::new(CardRank::Four, CardSuit::Spades),
    ];
    let community = vec![
        Card::new(CardRank::King, CardSuit::Hearts),
        Card::new(CardRank::Ten, CardSuit::Spades),
        Card::new(CardRank::Nine, CardSuit::Hearts),
        Card::new(CardRank::Nine, CardSuit::Clubs),
        Card::new(CardRank::Four, CardSuit::Clubs),
    ];

    let rank = evaluate_best_hand(hole, &community);

    assert_eq!(rank.category, HandRankCategory::TwoPair);
    assert_eq!(rank.tiebreakers, vec![13, 9, 10]);
}
