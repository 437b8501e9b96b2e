//! Card types and the canonical deck ordering.

use serde::{Deserialize, Serialize};

/// Card rank values (0=Ace, 1=2, ..., 12=King)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl CardRank {
    /// Convert from u8 to CardRank. Panics if value > 12.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CardRank::Ace,
            1 => CardRank::Two,
            2 => CardRank::Three,
            3 => CardRank::Four,
            4 => CardRank::Five,
            5 => CardRank::Six,
            6 => CardRank::Seven,
            7 => CardRank::Eight,
            8 => CardRank::Nine,
            9 => CardRank::Ten,
            10 => CardRank::Jack,
            11 => CardRank::Queen,
            12 => CardRank::King,
            _ => panic!("invalid card rank: {value}"),
        }
    }

    /// Convert to usize for array indexing.
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// High-Ace numeric value used by hand evaluation (2..=14).
    pub fn high_value(self) -> u8 {
        match self {
            CardRank::Ace => 14,
            CardRank::Two => 2,
            CardRank::Three => 3,
            CardRank::Four => 4,
            CardRank::Five => 5,
            CardRank::Six => 6,
            CardRank::Seven => 7,
            CardRank::Eight => 8,
            CardRank::Nine => 9,
            CardRank::Ten => 10,
            CardRank::Jack => 11,
            CardRank::Queen => 12,
            CardRank::King => 13,
        }
    }
}

/// Card suit values (0=Clubs, 1=Diamonds, 2=Hearts, 3=Spades)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardSuit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl CardSuit {
    /// Convert from u8 to CardSuit. Panics if value > 3.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CardSuit::Clubs,
            1 => CardSuit::Diamonds,
            2 => CardSuit::Hearts,
            3 => CardSuit::Spades,
            _ => panic!("invalid card suit: {value}"),
        }
    }

    /// Convert to usize for array indexing.
    pub fn as_usize(self) -> usize {
        self as usize
    }
}

/// A playing card represented as a compact u8 value (0..52).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card(pub u8);

impl Card {
    /// Create a new card from rank and suit
    pub fn new(rank: CardRank, suit: CardSuit) -> Self {
        Card((suit as u8) * 13 + (rank as u8))
    }

    /// Get the rank of this card
    pub fn rank(self) -> CardRank {
        CardRank::from_u8(self.0 % 13)
    }

    /// Get the suit of this card
    pub fn suit(self) -> CardSuit {
        CardSuit::from_u8(self.0 / 13)
    }

    /// Get the rank as a string (A, 2, 3, ..., T, J, Q, K)
    pub fn rank_str(self) -> &'static str {
        match self.rank() {
            CardRank::Ace => "A",
            CardRank::Two => "2",
            CardRank::Three => "3",
            CardRank::Four => "4",
            CardRank::Five => "5",
            CardRank::Six => "6",
            CardRank::Seven => "7",
            CardRank::Eight => "8",
            CardRank::Nine => "9",
            CardRank::Ten => "T",
            CardRank::Jack => "J",
            CardRank::Queen => "Q",
            CardRank::King => "K",
        }
    }

    /// Get the suit as its canonical one-letter code: s, h, d, c.
    pub fn suit_letter(self) -> char {
        match self.suit() {
            CardSuit::Spades => 's',
            CardSuit::Hearts => 'h',
            CardSuit::Diamonds => 'd',
            CardSuit::Clubs => 'c',
        }
    }

    /// Get the suit as a display glyph (♣, ♦, ♥, ♠).
    pub fn suit_char(self) -> char {
        match self.suit() {
            CardSuit::Clubs => '♣',
            CardSuit::Diamonds => '♦',
            CardSuit::Hearts => '♥',
            CardSuit::Spades => '♠',
        }
    }

    /// Get the card as a short code like "As", "Td".
    pub fn code(self) -> String {
        format!("{}{}", self.rank_str(), self.suit_letter())
    }

    /// Get the card as a string like "A♣", "T♦", etc.
    pub fn to_string(self) -> String {
        format!("{}{}", self.rank_str(), self.suit_char())
    }

    /// Check if this is a red suit (hearts or diamonds)
    pub fn is_red(self) -> bool {
        matches!(self.suit(), CardSuit::Hearts | CardSuit::Diamonds)
    }

    /// Check if this is a black suit (clubs or spades)
    pub fn is_black(self) -> bool {
        matches!(self.suit(), CardSuit::Clubs | CardSuit::Spades)
    }
}

/// Canonical ordering used before shuffling: ranks "23456789TJQKA" outer,
/// suits "shdc" inner, producing 52 distinct cards.
pub fn canonical_deck() -> Vec<Card> {
    const RANKS: [CardRank; 13] = [
        CardRank::Two,
        CardRank::Three,
        CardRank::Four,
        CardRank::Five,
        CardRank::Six,
        CardRank::Seven,
        CardRank::Eight,
        CardRank::Nine,
        CardRank::Ten,
        CardRank::Jack,
        CardRank::Queen,
        CardRank::King,
        CardRank::Ace,
    ];
    const SUITS: [CardSuit; 4] = [
        CardSuit::Spades,
        CardSuit::Hearts,
        CardSuit::Diamonds,
        CardSuit::Clubs,
    ];
    let mut deck = Vec::with_capacity(52);
    for rank in RANKS {
        for suit in SUITS {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_deck_has_52_distinct_cards() {
        let deck = canonical_deck();
        assert_eq!(deck.len(), 52);
        let set: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn canonical_deck_ordering_matches_spec() {
        let deck = canonical_deck();
        assert_eq!(deck[0].code(), "2s");
        assert_eq!(deck[1].code(), "2h");
        assert_eq!(deck[3].code(), "2c");
        assert_eq!(deck[4].code(), "3s");
        assert_eq!(deck[48].code(), "As");
        assert_eq!(deck[51].code(), "Ac");
    }
}
