//! Rule-driven poker opponent.

use crate::core::GameRng;
use crate::decision::RuleEngine;

use super::cards::Card;
use super::hand::{is_flush, rank_counts, suit_counts};

/// Stake when all five cards share a suit.
pub const FLUSH_BET: u32 = 20;
/// Stake when the hand holds at least one pair.
pub const PAIR_BET: u32 = 10;
/// Stake otherwise.
pub const MIN_BET: u32 = 5;

/// Chooses stakes and which cards to exchange.
///
/// Discards come from three rules, highest priority first:
///
/// | rule              | priority | fires when           | discards           |
/// |-------------------|----------|----------------------|--------------------|
/// | `flush draw`      | 5        | four cards of a suit | the off-suit cards |
/// | `keep pairs`      | 4        | any rank repeats     | unpaired cards     |
/// | `keep high cards` | 1        | always               | cards below ten    |
#[derive(Debug)]
pub struct PokerBot {
    engine: RuleEngine<Vec<Card>, Vec<usize>>,
}

impl Default for PokerBot {
    fn default() -> Self {
        Self::new()
    }
}

impl PokerBot {
    #[must_use]
    pub fn new() -> Self {
        let mut engine = RuleEngine::new(|_: &Vec<Card>, _: &mut GameRng| Vec::new());

        engine.add_rule(
            "flush draw",
            |hand: &Vec<Card>| suit_counts(hand).values().any(|&n| n >= 4),
            |hand: &Vec<Card>| {
                let counts = suit_counts(hand);
                let target = counts.iter().find(|(_, n)| **n >= 4).map(|(&suit, _)| suit);
                discard_where(hand, |card| Some(card.suit) != target)
            },
            5,
        );

        engine.add_rule(
            "keep pairs",
            |hand: &Vec<Card>| rank_counts(hand).values().any(|&n| n >= 2),
            |hand: &Vec<Card>| {
                let counts = rank_counts(hand);
                discard_where(hand, |card| counts.get(&card.rank).copied().unwrap_or(0) < 2)
            },
            4,
        );

        engine.add_default_rule(
            "keep high cards",
            |_: &Vec<Card>| true,
            |hand: &Vec<Card>| discard_where(hand, |card| !card.rank.is_high()),
        );

        Self { engine }
    }

    /// Stake for the current hand.
    #[must_use]
    pub fn decide_bet(&self, hand: &[Card]) -> u32 {
        if is_flush(hand) {
            FLUSH_BET
        } else if rank_counts(hand).values().any(|&n| n >= 2) {
            PAIR_BET
        } else {
            MIN_BET
        }
    }

    /// Indices of the cards to exchange, ascending.
    pub fn choose_discards(&self, hand: &Vec<Card>, rng: &mut GameRng) -> Vec<usize> {
        self.engine.decide(hand, rng)
    }

    /// Rule names and priorities in consultation order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, i32)> {
        self.engine.rules()
    }
}

fn discard_where(hand: &[Card], discard: impl Fn(&Card) -> bool) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| discard(card))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(text: &str) -> Vec<Card> {
        text.split_whitespace().map(|t| Card::parse(t).unwrap()).collect()
    }

    fn discards(text: &str) -> Vec<usize> {
        PokerBot::new().choose_discards(&hand(text), &mut GameRng::new(0))
    }

    #[test]
    fn test_rule_order() {
        let bot = PokerBot::new();
        let rules: Vec<_> = bot.rules().collect();
        assert_eq!(
            rules,
            vec![("flush draw", 5), ("keep pairs", 4), ("keep high cards", 1)]
        );
    }

    #[test]
    fn test_flush_draw_beats_pair() {
        // Four hearts and a pair of sevens: chase the flush.
        assert_eq!(discards("7H 2H 9H KH 7S"), vec![4]);
        assert_eq!(discards("7H 2H 9H KH 3H"), Vec::<usize>::new());
    }

    #[test]
    fn test_keeps_pairs() {
        assert_eq!(discards("7H 7S 9D KC 2H"), vec![2, 3, 4]);
        assert_eq!(discards("7H 7S 9D 9C 2H"), vec![4]);
    }

    #[test]
    fn test_keeps_high_cards() {
        assert_eq!(discards("AH 3S 10D 6C JH"), vec![1, 3]);
        assert_eq!(discards("2H 3S 4D 6C 8H"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_bets() {
        let bot = PokerBot::new();
        assert_eq!(bot.decide_bet(&hand("2H 5H 9H JH KH")), FLUSH_BET);
        assert_eq!(bot.decide_bet(&hand("2H 2S 9H JH KH")), PAIR_BET);
        assert_eq!(bot.decide_bet(&hand("2H 3S 9H JH KH")), MIN_BET);
    }
}
