//! Five-card hand ranking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank, Suit};
use super::game::HAND_SIZE;

/// Hand category, weakest first. The discriminant is the rank number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandRank {
    /// Rank number, 1 (high card) to 9 (straight flush).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Multiple of the stake returned in solo play.
    #[must_use]
    pub const fn payout_multiplier(self) -> u32 {
        match self {
            HandRank::StraightFlush => 20,
            HandRank::FourOfAKind => 10,
            HandRank::FullHouse => 7,
            HandRank::Flush => 5,
            HandRank::Straight => 4,
            HandRank::ThreeOfAKind => 3,
            HandRank::TwoPair => 2,
            HandRank::OnePair => 1,
            HandRank::HighCard => 0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HandRank::StraightFlush => "straight flush",
            HandRank::FourOfAKind => "four of a kind",
            HandRank::FullHouse => "full house",
            HandRank::Flush => "flush",
            HandRank::Straight => "straight",
            HandRank::ThreeOfAKind => "three of a kind",
            HandRank::TwoPair => "two pair",
            HandRank::OnePair => "one pair",
            HandRank::HighCard => "high card",
        }
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Occurrences of each rank in `cards`.
#[must_use]
pub fn rank_counts(cards: &[Card]) -> FxHashMap<Rank, u8> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// Occurrences of each suit in `cards`.
#[must_use]
pub fn suit_counts(cards: &[Card]) -> FxHashMap<Suit, u8> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.suit).or_insert(0) += 1;
    }
    counts
}

/// True when every card shares one suit.
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    suit_counts(cards).len() == 1
}

/// Five consecutive ranks, counting A-2-3-4-5 as the low straight.
#[must_use]
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != HAND_SIZE {
        return false;
    }
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable();
    if values == [2, 3, 4, 5, 14] {
        return true;
    }
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Category of a five-card hand.
///
/// ```
/// use tabletop_ai::games::poker::{evaluate_hand, Card, HandRank};
///
/// let hand: Vec<Card> = ["AS", "2D", "3C", "4H", "5S"]
///     .iter()
///     .filter_map(|t| Card::parse(t))
///     .collect();
/// assert_eq!(evaluate_hand(&hand), HandRank::Straight);
/// ```
#[must_use]
pub fn evaluate_hand(cards: &[Card]) -> HandRank {
    let counts = rank_counts(cards);
    let has = |n: u8| counts.values().any(|&c| c == n);
    let pairs = counts.values().filter(|&&c| c == 2).count();
    let flush = is_flush(cards);
    let straight = is_straight(cards);

    if flush && straight {
        HandRank::StraightFlush
    } else if has(4) {
        HandRank::FourOfAKind
    } else if has(3) && has(2) {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if has(3) {
        HandRank::ThreeOfAKind
    } else if pairs == 2 {
        HandRank::TwoPair
    } else if pairs == 1 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    }
}
