//! Othello game model.

use im::Vector;

use crate::core::{EngineError, GameRng, Result, Side, TempStack};
use crate::rules::{Outcome, PlayableGame, RolloutGame, SearchableGame};

use super::board::{Board, Flips, Square, SIZE};

const CORNER_VALUE: f64 = 30.0;
const NEAR_CORNER_VALUE: f64 = -10.0;
const EDGE_VALUE: f64 = 5.0;
const INNER_VALUE: f64 = 1.0;

/// One turn: a placement with the discs it flipped, or a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// Side that moved.
    pub side: Side,
    /// Square played, `None` for a pass.
    pub placed: Option<Square>,
    /// Opponent discs turned over.
    pub flips: Flips,
}

/// Othello game state.
///
/// Black moves first. Permanent turns are kept in an `im::Vector` so the
/// whole game clones in O(1) for rollouts; temporary search moves live on
/// a separate stack and never touch the history.
#[derive(Clone, Debug, PartialEq)]
pub struct Othello {
    board: Board,
    to_move: Side,
    history: Vector<TurnRecord>,
    pending: TempStack<TurnRecord>,
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

impl Othello {
    /// Standard opening position, black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Side::Black)
    }

    /// Arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Self {
            board,
            to_move,
            history: Vector::new(),
            pending: TempStack::new(),
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Permanent turns played so far.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Number of temporary moves not yet undone.
    #[must_use]
    pub fn pending_depth(&self) -> usize {
        self.pending.depth()
    }

    /// Discs of one colour.
    #[must_use]
    pub fn disc_count(&self, side: Side) -> u32 {
        self.board.count(side)
    }

    /// Winner by disc count once the game is over; `None` while play
    /// continues or on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        let black = self.disc_count(Side::Black);
        let white = self.disc_count(Side::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Hand the turn over when the side to move has no placement.
    pub fn pass(&mut self) -> Result<()> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.board.has_moves(self.to_move) {
            return Err(EngineError::IllegalMove(format!(
                "{} cannot pass while holding a legal move",
                self.to_move
            )));
        }
        self.history.push_back(TurnRecord {
            side: self.to_move,
            placed: None,
            flips: Flips::new(),
        });
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Take back the last permanent turn. Returns `false` when there is
    /// nothing to take back.
    pub fn undo_last(&mut self) -> bool {
        match self.history.pop_back() {
            Some(record) => {
                self.restore(&record);
                true
            }
            None => false,
        }
    }

    /// Place a disc for the side to move and flip every bounded run.
    fn place(&mut self, sq: Square) -> Result<TurnRecord> {
        let side = self.to_move;
        let flips = self.board.flips(sq, side);
        if flips.is_empty() {
            return Err(EngineError::IllegalMove(format!(
                "{} cannot play {}",
                side, sq
            )));
        }

        self.board.set(sq, Some(side));
        for &cell in &flips {
            self.board.set(cell, Some(side));
        }
        self.to_move = side.opponent();

        Ok(TurnRecord {
            side,
            placed: Some(sq),
            flips,
        })
    }

    /// Reverse a recorded turn from its flip list.
    fn restore(&mut self, record: &TurnRecord) {
        if let Some(sq) = record.placed {
            self.board.set(sq, None);
        }
        for &cell in &record.flips {
            self.board.set(cell, Some(record.side.opponent()));
        }
        self.to_move = record.side;
    }
}

/// Positional weight of a square.
fn square_value(sq: Square) -> f64 {
    let last = (SIZE - 1) as u8;
    let edge_row = sq.row == 0 || sq.row == last;
    let edge_col = sq.col == 0 || sq.col == last;
    let near_row = sq.row <= 1 || sq.row >= last - 1;
    let near_col = sq.col <= 1 || sq.col >= last - 1;

    if edge_row && edge_col {
        CORNER_VALUE
    } else if near_row && near_col {
        NEAR_CORNER_VALUE
    } else if edge_row || edge_col {
        EDGE_VALUE
    } else {
        INNER_VALUE
    }
}

impl SearchableGame for Othello {
    type Move = Square;
    type Player = Side;

    fn side_to_move(&self) -> Side {
        self.to_move
    }

    fn valid_moves(&self) -> Vec<Square> {
        self.board.legal_moves(self.to_move)
    }

    fn apply_temporary(&mut self, mv: &Square) -> Result<()> {
        let record = self.place(*mv)?;
        self.pending.push(record);
        Ok(())
    }

    fn undo_temporary(&mut self, mv: &Square) -> Result<()> {
        let record = self.pending.pop()?;
        if record.placed != Some(*mv) {
            let outstanding = format!("{:?}", record.placed);
            self.pending.push(record);
            return Err(EngineError::ContractViolation(format!(
                "undo of {} does not match outstanding move {}",
                mv, outstanding
            )));
        }
        self.restore(&record);
        Ok(())
    }

    fn evaluate(&self, perspective: Side) -> f64 {
        Board::squares()
            .filter_map(|sq| self.board.get(sq).map(|disc| (sq, disc)))
            .map(|(sq, disc)| {
                let value = square_value(sq);
                if disc == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

impl RolloutGame for Othello {
    fn simulate_random_game(&mut self, perspective: Side, rng: &mut GameRng) -> Outcome {
        let mut board = self.board;
        let mut side = self.to_move;
        let mut passes = 0;

        while passes < 2 {
            let moves = board.legal_moves(side);
            let Some(&sq) = rng.choose(&moves) else {
                passes += 1;
                side = side.opponent();
                continue;
            };
            passes = 0;
            for cell in board.flips(sq, side) {
                board.set(cell, Some(side));
            }
            board.set(sq, Some(side));
            side = side.opponent();
        }

        let mine = i64::from(board.count(perspective));
        let theirs = i64::from(board.count(perspective.opponent()));
        Outcome::from_score(mine - theirs)
    }
}

impl PlayableGame for Othello {
    fn play(&mut self, mv: &Square) -> Result<()> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let record = self.place(*mv)?;
        self.history.push_back(record);
        Ok(())
    }

    fn is_over(&self) -> bool {
        !self.board.has_moves(self.to_move) && !self.board.has_moves(self.to_move.opponent())
    }
}
