//! Search engine integration tests against the bundled board games.

use tabletop_ai::core::{EngineError, GameRng, Side};
use tabletop_ai::games::chess::{Chess, ChessBoard, ChessMove};
use tabletop_ai::games::othello::{Board, Othello, Square};
use tabletop_ai::rules::{PlayableGame, SearchableGame};
use tabletop_ai::search::{
    minimax_unpruned, Bot, Minimax, MonteCarlo, RandomMover, SearchConfig, Strategy,
};

/// Othello position after `plies` random permanent moves (passing when stuck).
fn scrambled_othello(seed: u64, plies: usize) -> Othello {
    let mut game = Othello::new();
    let mut rng = GameRng::new(seed);
    for _ in 0..plies {
        if game.is_over() {
            break;
        }
        let moves = game.valid_moves();
        match rng.choose(&moves) {
            Some(mv) => game.play(mv).unwrap(),
            None => game.pass().unwrap(),
        }
    }
    game
}

fn scrambled_chess(seed: u64, plies: usize) -> Chess {
    let mut game = Chess::new();
    let mut rng = GameRng::new(seed);
    for _ in 0..plies {
        let moves = game.valid_moves();
        let Some(mv) = rng.choose(&moves) else {
            break;
        };
        game.play(mv).unwrap();
    }
    game
}

fn alpha_beta<G: SearchableGame>(game: &mut G, depth: u32) -> f64 {
    let perspective = game.side_to_move();
    Minimax::with_depth(depth.max(1))
        .search(game, perspective, depth, true, f64::NEG_INFINITY, f64::INFINITY)
        .unwrap()
}

// =============================================================================
// Alpha-Beta Agrees With Plain Minimax
// =============================================================================

#[test]
fn test_alpha_beta_matches_unpruned_on_othello() {
    for seed in 0..6 {
        let mut game = scrambled_othello(seed, 10 + seed as usize * 4);
        let perspective = game.side_to_move();
        for depth in 1..=3 {
            let pruned = alpha_beta(&mut game, depth);
            let plain = minimax_unpruned(&mut game, perspective, depth, true).unwrap();
            assert_eq!(pruned, plain, "seed {} depth {}", seed, depth);
        }
    }
}

#[test]
fn test_alpha_beta_matches_unpruned_on_chess() {
    for seed in 0..4 {
        let mut game = scrambled_chess(seed, 6 + seed as usize * 3);
        let perspective = game.side_to_move();
        for depth in 1..=2 {
            let pruned = alpha_beta(&mut game, depth);
            let plain = minimax_unpruned(&mut game, perspective, depth, true).unwrap();
            assert_eq!(pruned, plain, "seed {} depth {}", seed, depth);
        }
    }
}

#[test]
fn test_pruning_skips_work() {
    let mut game = Othello::new();
    let mut engine = Minimax::with_depth(4);
    engine.choose_move(&mut game).unwrap();
    assert!(engine.stats().cutoffs > 0);
}

// =============================================================================
// Leaves and State Restoration
// =============================================================================

#[test]
fn test_depth_zero_is_evaluation() {
    let mut game = scrambled_othello(3, 12);
    for side in [Side::Black, Side::White] {
        let value = Minimax::with_depth(1)
            .search(&mut game, side, 0, true, f64::NEG_INFINITY, f64::INFINITY)
            .unwrap();
        assert_eq!(value, game.evaluate(side));
    }

    let mut chess = scrambled_chess(1, 5);
    assert_eq!(
        minimax_unpruned(&mut chess, Side::White, 0, false).unwrap(),
        chess.evaluate(Side::White)
    );
}

#[test]
fn test_search_leaves_game_untouched() {
    let mut othello = scrambled_othello(7, 15);
    let before = othello.clone();
    Minimax::with_depth(3).choose_move(&mut othello).unwrap();
    MonteCarlo::with_simulations(5).choose_move(&mut othello).unwrap();
    assert_eq!(othello, before);
    assert_eq!(othello.pending_depth(), 0);

    let mut chess = scrambled_chess(2, 8);
    let before = chess.clone();
    Minimax::with_depth(2).choose_move(&mut chess).unwrap();
    MonteCarlo::with_simulations(2).choose_move(&mut chess).unwrap();
    assert_eq!(chess, before);
}

#[test]
fn test_no_moves_means_no_choice() {
    let board = Board::parse([
        "BBB.....", "........", "........", "........",
        "........", "........", "........", "......W.",
    ]);
    let mut game = Othello::from_board(board, Side::Black);
    assert_eq!(Minimax::with_depth(3).choose_move(&mut game).unwrap(), None);
    assert_eq!(MonteCarlo::with_simulations(3).choose_move(&mut game).unwrap(), None);
}

#[test]
fn test_zero_settings_are_rejected() {
    let mut game = Othello::new();
    let config = SearchConfig::default().with_depth(0);
    assert!(matches!(
        Minimax::new(config).choose_move(&mut game),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        MonteCarlo::with_simulations(0).choose_move(&mut game),
        Err(EngineError::InvalidConfig(_))
    ));
}

// =============================================================================
// End-to-End Choices
// =============================================================================

#[test]
fn test_othello_opening_choice() {
    // Every opening reply scores the same, so the first one is kept.
    let mut game = Othello::new();
    let mv = Minimax::with_depth(1).choose_move(&mut game).unwrap();
    assert_eq!(mv, Some(Square::new(2, 3)));

    game.play(&Square::new(2, 3)).unwrap();
    assert_eq!(game.board().get(Square::new(3, 3)), Some(Side::Black));
    assert_eq!(game.disc_count(Side::Black), 4);
    assert_eq!(game.disc_count(Side::White), 1);
}

#[test]
fn test_chess_takes_free_material() {
    let board = ChessBoard::parse([
        ".......k", "........", "........", "........",
        "R....n..", "........", "........", ".......K",
    ]);
    let mut game = Chess::from_board(board, Side::White);
    let mv = Minimax::with_depth(1).choose_move(&mut game).unwrap();
    assert_eq!(mv, Some(ChessMove::new(4, 0, 4, 5)));
}

#[test]
fn test_chess_grabs_the_king() {
    let board = ChessBoard::parse([
        "....k...", "........", "........", "........",
        "....R...", "........", "........", "Q......K",
    ]);
    let mut game = Chess::from_board(board, Side::White);
    let mut bot = Bot::new(Minimax::with_depth(2));
    let mv = bot.take_turn(&mut game).unwrap();
    assert_eq!(mv, Some(ChessMove::new(4, 4, 0, 4)));
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Side::White));
}

#[test]
fn test_monte_carlo_is_reproducible() {
    let config = SearchConfig::default().with_simulations(20).with_seed(99);
    let mut a = MonteCarlo::new(config.clone());
    let mut b = MonteCarlo::new(config);
    let mut game = scrambled_othello(11, 8);

    let scores_a = a.score_moves(&mut game).unwrap();
    let scores_b = b.score_moves(&mut game).unwrap();
    assert_eq!(scores_a, scores_b);
    assert!(scores_a.iter().all(|(_, rate)| (0.0..=1.0).contains(rate)));
}

#[test]
fn test_full_othello_match() {
    let mut game = Othello::new();
    let mut black = Bot::new(Minimax::with_depth(2));
    let mut white = Bot::new(RandomMover::new(GameRng::new(8)));
    assert_eq!(Strategy::<Othello>::name(black.strategy()), "minimax");

    let mut turns = 0;
    while !game.is_over() {
        let moved = match game.side_to_move() {
            Side::Black => black.take_turn(&mut game).unwrap(),
            Side::White => white.take_turn(&mut game).unwrap(),
        };
        if moved.is_none() {
            game.pass().unwrap();
        }
        turns += 1;
        assert!(turns < 200, "game did not terminate");
    }

    let discs = game.disc_count(Side::Black) + game.disc_count(Side::White);
    assert!(discs <= 64);
    assert_eq!(game.history().len(), turns);
}
