//! Playing cards and the 52-card deck.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.letter() == letter.to_ascii_uppercase())
    }
}

/// Card rank, 2 through 14 with the ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// `None` outside `2..=14`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (2..=14).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Ten through ace.
    #[must_use]
    pub fn is_high(self) -> bool {
        self >= Rank::TEN
    }

    /// All thirteen ranks, deuce first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (2..=14).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            14 => write!(f, "A"),
            n => write!(f, "{}", n),
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse text such as `AS`, `10H` or `7c`.
    ///
    /// ```
    /// use tabletop_ai::games::poker::{Card, Rank, Suit};
    ///
    /// let card = Card::parse("QD").unwrap();
    /// assert_eq!(card, Card::new(Rank::QUEEN, Suit::Diamonds));
    /// assert_eq!(card.to_string(), "QD");
    /// assert!(Card::parse("1S").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let suit = Suit::from_letter(text.chars().last()?)?;
        let head = &text[..text.len() - 1];
        let value = match head.to_ascii_uppercase().as_str() {
            "A" => 14,
            "K" => 13,
            "Q" => 12,
            "J" => 11,
            digits => digits.parse().ok()?,
        };
        Some(Self::new(Rank::new(value)?, suit))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

/// Draw pile. Cards are taken from the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Full, unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.reset();
        deck
    }

    /// Refill with all 52 cards in suit-then-rank order.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            self.cards.extend(Rank::all().map(|rank| Card::new(rank, suit)));
        }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Top card, `None` once empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Up to `count` cards; fewer when the deck runs out.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(count);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
