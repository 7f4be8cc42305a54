//! One table of five-card draw.
//!
//! A round runs betting, then exchange, then showdown:
//!
//! 1. `bet` stakes an amount, or `call` matches the bot's stake. Either
//!    way the bot stakes per `PokerBot::decide_bet`.
//! 2. `exchange` replaces the chosen cards; the bot exchanges by its rules.
//!    `fold` instead concedes the pot.
//! 3. Showdown settles credits and the round is finished. `start_round`
//!    deals the next one.
//!
//! In solo play there is no opponent and the stake is paid back times the
//! hand's payout multiplier.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, Result};
use crate::rules::Outcome;

use super::bot::PokerBot;
use super::cards::{Card, Deck};
use super::hand::{evaluate_hand, HandRank};

/// Credits each seat starts with.
pub const STARTING_CREDITS: u32 = 1000;

/// Cards per hand.
pub const HAND_SIZE: usize = 5;

/// Who sits across the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PokerMode {
    /// Paid by the payout table.
    Solo,
    /// Heads-up against `PokerBot`.
    #[default]
    VersusBot,
}

/// Stage of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Betting,
    Exchange,
    Finished,
}

/// A seat's hand, bank and stake in the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub hand: Vec<Card>,
    pub credits: u32,
    pub bet: u32,
}

impl Seat {
    fn new() -> Self {
        Self {
            hand: Vec::with_capacity(HAND_SIZE),
            credits: STARTING_CREDITS,
            bet: 0,
        }
    }

    fn stake(&mut self, amount: u32) {
        self.credits -= amount;
        self.bet += amount;
    }
}

/// How a round ended, from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// `None` after a fold.
    pub player_rank: Option<HandRank>,
    /// `None` after a fold or in solo play.
    pub opponent_rank: Option<HandRank>,
    pub outcome: Outcome,
    /// Credits returned to the player.
    pub payout: u32,
}

/// Five-card draw table.
#[derive(Debug)]
pub struct Poker {
    mode: PokerMode,
    deck: Deck,
    rng: GameRng,
    bot: PokerBot,
    player: Seat,
    opponent: Option<Seat>,
    phase: Phase,
}

impl Poker {
    /// Seat the table and deal the first round.
    #[must_use]
    pub fn new(mode: PokerMode, rng: GameRng) -> Self {
        let mut game = Self {
            mode,
            deck: Deck::new(),
            rng,
            bot: PokerBot::new(),
            player: Seat::new(),
            opponent: (mode == PokerMode::VersusBot).then(Seat::new),
            phase: Phase::Finished,
        };
        game.deal();
        game
    }

    #[must_use]
    pub fn mode(&self) -> PokerMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player(&self) -> &Seat {
        &self.player
    }

    /// The bot's seat; `None` in solo play.
    #[must_use]
    pub fn opponent(&self) -> Option<&Seat> {
        self.opponent.as_ref()
    }

    #[must_use]
    pub fn bot(&self) -> &PokerBot {
        &self.bot
    }

    /// Credits staked this round by both seats.
    #[must_use]
    pub fn pot(&self) -> u32 {
        self.player.bet + self.opponent.as_ref().map_or(0, |o| o.bet)
    }

    /// True once a seat has run out of credits.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.player.credits == 0 || self.opponent.as_ref().is_some_and(|o| o.credits == 0)
    }

    /// Deal the next round after the previous one finished.
    pub fn start_round(&mut self) -> Result<()> {
        if self.phase != Phase::Finished {
            return Err(EngineError::IllegalMove("round still in progress".into()));
        }
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        self.deal();
        Ok(())
    }

    /// Stake `amount`; the bot answers with its own stake.
    pub fn bet(&mut self, amount: u32) -> Result<()> {
        self.expect_phase(Phase::Betting)?;
        if amount == 0 || amount > self.player.credits {
            return Err(EngineError::IllegalMove(format!(
                "cannot bet {} with {} credits",
                amount, self.player.credits
            )));
        }

        self.player.stake(amount);
        let answer = self.bot_stake();
        debug!("player bets {}, bot answers {}", amount, answer);
        self.phase = Phase::Exchange;
        Ok(())
    }

    /// Match the bot's stake.
    pub fn call(&mut self) -> Result<()> {
        self.expect_phase(Phase::Betting)?;
        let Some(opponent) = &self.opponent else {
            return Err(EngineError::IllegalMove("nothing to call in solo play".into()));
        };

        let wanted = self.bot.decide_bet(&opponent.hand).min(opponent.credits);
        if wanted > self.player.credits {
            return Err(EngineError::IllegalMove(format!(
                "cannot call {} with {} credits",
                wanted, self.player.credits
            )));
        }

        self.bot_stake();
        self.player.stake(wanted);
        debug!("player calls {}", wanted);
        self.phase = Phase::Exchange;
        Ok(())
    }

    /// Concede the round; the bot takes the pot.
    pub fn fold(&mut self) -> Result<RoundResult> {
        self.expect_phase(Phase::Exchange)?;
        let pot = self.pot();
        if let Some(opponent) = &mut self.opponent {
            opponent.credits = opponent.credits.saturating_add(pot);
        }
        debug!("player folds, {} forfeited", pot);
        self.finish();
        Ok(RoundResult {
            player_rank: None,
            opponent_rank: None,
            outcome: Outcome::Loss,
            payout: 0,
        })
    }

    /// Replace the cards at `discards`, let the bot exchange, then settle.
    pub fn exchange(&mut self, discards: &[usize]) -> Result<RoundResult> {
        self.expect_phase(Phase::Exchange)?;
        for (i, &index) in discards.iter().enumerate() {
            if index >= self.player.hand.len() || discards[..i].contains(&index) {
                return Err(EngineError::IllegalMove(format!(
                    "bad discard index {}",
                    index
                )));
            }
        }

        let bot_discards = match &self.opponent {
            Some(opponent) => self.bot.choose_discards(&opponent.hand, &mut self.rng),
            None => Vec::new(),
        };
        if discards.len() + bot_discards.len() > self.deck.len() {
            return Err(EngineError::ContractViolation("deck exhausted".into()));
        }

        replace_cards(&mut self.player.hand, discards, &mut self.deck);
        if let Some(opponent) = &mut self.opponent {
            replace_cards(&mut opponent.hand, &bot_discards, &mut self.deck);
        }
        debug!(
            "player exchanges {} cards, bot exchanges {}",
            discards.len(),
            bot_discards.len()
        );

        Ok(self.showdown())
    }

    fn showdown(&mut self) -> RoundResult {
        let player_rank = evaluate_hand(&self.player.hand);
        let pot = self.pot();

        let result = match &mut self.opponent {
            Some(opponent) => {
                let opponent_rank = evaluate_hand(&opponent.hand);
                let (outcome, payout) = match player_rank.cmp(&opponent_rank) {
                    std::cmp::Ordering::Greater => (Outcome::Win, pot),
                    std::cmp::Ordering::Less => {
                        opponent.credits = opponent.credits.saturating_add(pot);
                        (Outcome::Loss, 0)
                    }
                    std::cmp::Ordering::Equal => {
                        opponent.credits = opponent.credits.saturating_add(opponent.bet);
                        (Outcome::Draw, self.player.bet)
                    }
                };
                RoundResult {
                    player_rank: Some(player_rank),
                    opponent_rank: Some(opponent_rank),
                    outcome,
                    payout,
                }
            }
            None => {
                let stake = self.player.bet;
                let payout = stake.saturating_mul(player_rank.payout_multiplier());
                let outcome = match payout.cmp(&stake) {
                    std::cmp::Ordering::Greater => Outcome::Win,
                    std::cmp::Ordering::Equal => Outcome::Draw,
                    std::cmp::Ordering::Less => Outcome::Loss,
                };
                RoundResult {
                    player_rank: Some(player_rank),
                    opponent_rank: None,
                    outcome,
                    payout,
                }
            }
        };

        self.player.credits = self.player.credits.saturating_add(result.payout);
        debug!("showdown: {:?}", result);
        self.finish();
        result
    }

    fn bot_stake(&mut self) -> u32 {
        let Some(opponent) = &mut self.opponent else {
            return 0;
        };
        let amount = self.bot.decide_bet(&opponent.hand).min(opponent.credits);
        opponent.stake(amount);
        amount
    }

    fn expect_phase(&self, phase: Phase) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(EngineError::IllegalMove(format!(
                "expected {:?} phase, in {:?}",
                phase, self.phase
            )))
        }
    }

    fn finish(&mut self) {
        self.player.bet = 0;
        if let Some(opponent) = &mut self.opponent {
            opponent.bet = 0;
        }
        self.phase = Phase::Finished;
    }

    fn deal(&mut self) {
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        self.player.hand = self.deck.draw_multiple(HAND_SIZE);
        if let Some(opponent) = &mut self.opponent {
            opponent.hand = self.deck.draw_multiple(HAND_SIZE);
        }
        self.phase = Phase::Betting;
    }
}

fn replace_cards(hand: &mut [Card], indices: &[usize], deck: &mut Deck) {
    for &index in indices {
        if let Some(card) = deck.draw() {
            hand[index] = card;
        }
    }
}
