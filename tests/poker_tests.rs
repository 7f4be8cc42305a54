//! Five-card draw integration tests.

use tabletop_ai::core::GameRng;
use tabletop_ai::games::poker::{
    evaluate_hand, Card, HandRank, Phase, Poker, PokerBot, PokerMode, STARTING_CREDITS,
};
use tabletop_ai::rules::Outcome;

fn hand(text: &str) -> Vec<Card> {
    text.split_whitespace().map(|t| Card::parse(t).unwrap()).collect()
}

// =============================================================================
// Table Flow
// =============================================================================

#[test]
fn test_credits_are_conserved_against_the_bot() {
    let mut game = Poker::new(PokerMode::VersusBot, GameRng::new(21));
    let advisor = PokerBot::new();
    let mut rng = GameRng::new(5);

    for round in 0..25 {
        if round > 0 {
            if game.is_over() {
                break;
            }
            game.start_round().unwrap();
        }
        assert_eq!(game.phase(), Phase::Betting);

        let stake = 25.min(game.player().credits);
        game.bet(stake).unwrap();
        let discards = advisor.choose_discards(&game.player().hand, &mut rng);
        let result = game.exchange(&discards).unwrap();

        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(result.player_rank, Some(evaluate_hand(&game.player().hand)));
        assert_eq!(game.pot(), 0);
        let bot = game.opponent().unwrap().credits;
        assert_eq!(game.player().credits + bot, 2 * STARTING_CREDITS);
    }
}

#[test]
fn test_same_seed_same_table() {
    let play = |seed| {
        let mut game = Poker::new(PokerMode::VersusBot, GameRng::new(seed));
        game.call().unwrap();
        let result = game.exchange(&[0, 1]).unwrap();
        (game.player().hand.clone(), result)
    };
    assert_eq!(play(3), play(3));
}

#[test]
fn test_solo_round_pays_by_table() {
    let mut game = Poker::new(PokerMode::Solo, GameRng::new(8));
    game.bet(10).unwrap();
    let result = game.exchange(&[]).unwrap();

    let rank = result.player_rank.unwrap();
    assert_eq!(result.payout, 10 * rank.payout_multiplier());
    assert_eq!(game.player().credits, STARTING_CREDITS - 10 + result.payout);
    assert!(result.opponent_rank.is_none());
    let expected = if rank == HandRank::HighCard {
        Outcome::Loss
    } else if rank == HandRank::OnePair {
        Outcome::Draw
    } else {
        Outcome::Win
    };
    assert_eq!(result.outcome, expected);
}

#[test]
fn test_fold_after_call() {
    let mut game = Poker::new(PokerMode::VersusBot, GameRng::new(13));
    game.call().unwrap();
    let staked = game.player().bet;
    assert!(staked >= 5);
    let result = game.fold().unwrap();
    assert_eq!(result.outcome, Outcome::Loss);
    assert_eq!(game.player().credits, STARTING_CREDITS - staked);
    game.start_round().unwrap();
    assert_eq!(game.phase(), Phase::Betting);
}

// =============================================================================
// Bot Policy
// =============================================================================

#[test]
fn test_bot_keeps_made_hands() {
    let bot = PokerBot::new();
    let mut rng = GameRng::new(0);
    assert!(bot.choose_discards(&hand("3S 3H 3D 9C 9S"), &mut rng).is_empty());
    assert!(bot.choose_discards(&hand("2D 8D 5D JD KD"), &mut rng).is_empty());
    assert_eq!(bot.choose_discards(&hand("QS QH 4D 7C AS"), &mut rng), vec![2, 3, 4]);
}

#[test]
fn test_bot_stakes() {
    let bot = PokerBot::new();
    assert_eq!(bot.decide_bet(&hand("2D 8D 5D JD KD")), 20);
    assert_eq!(bot.decide_bet(&hand("QS QH 4D 7C AS")), 10);
    assert_eq!(bot.decide_bet(&hand("2S 8H 5D JC KD")), 5);
}
