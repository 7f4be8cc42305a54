//! Arena: pit the engines against each other.
//!
//! ## Usage
//!
//! - `arena othello` - minimax (black) against Monte-Carlo (white)
//! - `arena chess` - minimax (white) against a random mover (black)
//! - `arena poker` - a rule-bot seat against the table's bot
//!
//! Search settings come from `--config <file.json>` and are overridden by
//! `--depth`, `--simulations` and `--seed`. Set `RUST_LOG=debug` to watch
//! the engines think.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use tabletop_ai::games::chess::Chess;
use tabletop_ai::games::othello::Othello;
use tabletop_ai::games::poker::{Poker, PokerBot, PokerMode};
use tabletop_ai::{
    Bot, GameRng, Minimax, MonteCarlo, Outcome, PlayableGame, RandomMover, SearchConfig,
    SearchableGame, Side, SideMap,
};

/// Engine-versus-engine matches for the bundled games
#[derive(Parser)]
#[command(name = "arena")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding a search configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimax depth in plies
    #[arg(long, global = true)]
    depth: Option<u32>,

    /// Monte-Carlo playouts per candidate move
    #[arg(long, global = true)]
    simulations: Option<u32>,

    /// RNG seed
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimax against Monte-Carlo rollouts
    Othello {
        /// Games to play
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Minimax against a random mover
    Chess {
        /// Games to play
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// Plies before a game is scored as a draw
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
    },
    /// Five-card draw against the rule-based bot
    Poker {
        /// Rounds to play
        #[arg(long, default_value_t = 5)]
        rounds: u32,

        /// Stake per round
        #[arg(long, default_value_t = 10)]
        bet: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!("search config: {:?}", config);

    match cli.command {
        Commands::Othello { games } => othello(&config, games),
        Commands::Chess { games, max_plies } => chess(&config, games, max_plies),
        Commands::Poker { rounds, bet } => poker(&config, rounds, bet),
    }
}

fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth);
    }
    if let Some(simulations) = cli.simulations {
        config = config.with_simulations(simulations);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<SearchConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn othello(config: &SearchConfig, games: u32) -> Result<()> {
    let mut wins = SideMap::with_value(0u32);

    for round in 0..games {
        let mut game = Othello::new();
        let mut black = Bot::new(Minimax::new(config.clone()));
        let mut white = Bot::new(MonteCarlo::new(
            config.clone().with_seed(config.seed.wrapping_add(u64::from(round))),
        ));

        while !game.is_over() {
            let moved = match game.side_to_move() {
                Side::Black => black.take_turn(&mut game)?,
                Side::White => white.take_turn(&mut game)?,
            };
            if moved.is_none() {
                info!("{} passes", game.side_to_move());
                game.pass()?;
            }
        }

        println!("{}", game.board());
        println!(
            "game {}: black {} - white {}",
            round + 1,
            game.disc_count(Side::Black),
            game.disc_count(Side::White)
        );
        if let Some(side) = game.winner() {
            wins[side] += 1;
        }
    }

    report(&wins, games, "minimax", "monte-carlo");
    Ok(())
}

fn chess(config: &SearchConfig, games: u32, max_plies: u32) -> Result<()> {
    let mut wins = SideMap::with_value(0u32);
    let mut rng = GameRng::new(config.seed);

    for round in 0..games {
        let mut game = Chess::new();
        let mut white = Bot::new(Minimax::new(config.clone()));
        let mut black = Bot::new(RandomMover::new(rng.fork()));

        let mut plies = 0;
        while !game.is_over() && plies < max_plies {
            let moved = match game.side_to_move() {
                Side::White => white.take_turn(&mut game)?,
                Side::Black => black.take_turn(&mut game)?,
            };
            if moved.is_none() {
                break;
            }
            plies += 1;
        }

        println!("{}", game.board());
        let winner = game.winner();
        println!(
            "game {}: {} after {} plies (white material {:+})",
            round + 1,
            winner.map_or("no king taken".to_string(), |s| format!("{} wins", s)),
            plies,
            game.evaluate(Side::White)
        );
        if let Some(side) = winner {
            wins[side] += 1;
        }
    }

    report(&wins, games, "random", "minimax");
    Ok(())
}

fn poker(config: &SearchConfig, rounds: u32, bet: u32) -> Result<()> {
    let mut rng = GameRng::new(config.seed);
    let mut game = Poker::new(PokerMode::VersusBot, rng.fork());
    let advisor = PokerBot::new();

    for round in 0..rounds {
        if round > 0 {
            if game.is_over() {
                break;
            }
            game.start_round()?;
        }

        game.bet(bet.min(game.player().credits))?;
        let discards = advisor.choose_discards(&game.player().hand, &mut rng);
        let result = game.exchange(&discards)?;

        let verdict = match result.outcome {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Draw => "split",
        };
        println!(
            "round {}: {:?} vs {:?} -> {} (+{})",
            round + 1,
            result.player_rank,
            result.opponent_rank,
            verdict,
            result.payout
        );
    }

    let opponent = game.opponent().map_or(0, |o| o.credits);
    println!(
        "credits: player {} - bot {}",
        game.player().credits,
        opponent
    );
    Ok(())
}

fn report(wins: &SideMap<u32>, games: u32, black: &str, white: &str) {
    let decided: u32 = wins.iter().map(|(_, &n)| n).sum();
    println!(
        "{} games: black ({}) {} - white ({}) {}, {} undecided",
        games,
        black,
        wins[Side::Black],
        white,
        wins[Side::White],
        games - decided
    );
}
