//! Chess game model: side to move, reversible moves and king-capture end.

use crate::core::{EngineError, GameRng, Result, Side, TempStack};
use crate::rules::{Outcome, PlayableGame, RolloutGame, SearchableGame};

use super::board::{ChessBoard, ChessMove};
use super::piece::Piece;

/// Plies a random playout runs before it is scored on material.
const ROLLOUT_PLY_LIMIT: usize = 200;

/// Undo record for one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub mv: ChessMove,
    pub captured: Option<Piece>,
}

/// Chess game state. White moves first.
#[derive(Clone, Debug, PartialEq)]
pub struct Chess {
    board: ChessBoard,
    to_move: Side,
    history: Vec<MoveRecord>,
    pending: TempStack<MoveRecord>,
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl Chess {
    /// Standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(ChessBoard::standard(), Side::White)
    }

    /// Arbitrary position.
    #[must_use]
    pub fn from_board(board: ChessBoard, to_move: Side) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
            pending: TempStack::new(),
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    /// Permanent moves played so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of temporary moves not yet undone.
    #[must_use]
    pub fn pending_depth(&self) -> usize {
        self.pending.depth()
    }

    /// The side whose king survives once the other's has been taken.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match (
            self.board.has_king(Side::White),
            self.board.has_king(Side::Black),
        ) {
            (true, false) => Some(Side::White),
            (false, true) => Some(Side::Black),
            _ => None,
        }
    }

    /// Take back the last permanent move.
    pub fn undo_last(&mut self) -> bool {
        match self.history.pop() {
            Some(record) => {
                self.board.unshift(record.mv, record.captured);
                self.to_move = record.side;
                true
            }
            None => false,
        }
    }

    fn kings_present(board: &ChessBoard) -> bool {
        board.has_king(Side::White) && board.has_king(Side::Black)
    }

    fn make(&mut self, mv: ChessMove) -> Result<MoveRecord> {
        let side = self.to_move;
        // `is_valid_move` bounds-checks, so it must run before the lookup.
        let legal = self.board.is_valid_move(mv)
            && self
                .board
                .get(usize::from(mv.from_row), usize::from(mv.from_col))
                .is_some_and(|p| p.side == side);
        if !legal {
            return Err(EngineError::IllegalMove(format!(
                "{} cannot play {}",
                side, mv
            )));
        }
        let captured = self.board.shift(mv);
        self.to_move = side.opponent();
        Ok(MoveRecord { side, mv, captured })
    }
}

impl SearchableGame for Chess {
    type Move = ChessMove;
    type Player = Side;

    fn side_to_move(&self) -> Side {
        self.to_move
    }

    fn valid_moves(&self) -> Vec<ChessMove> {
        if !Self::kings_present(&self.board) {
            return Vec::new();
        }
        self.board.legal_moves(self.to_move)
    }

    fn apply_temporary(&mut self, mv: &ChessMove) -> Result<()> {
        let record = self.make(*mv)?;
        self.pending.push(record);
        Ok(())
    }

    fn undo_temporary(&mut self, mv: &ChessMove) -> Result<()> {
        let record = self.pending.pop()?;
        if record.mv != *mv {
            self.pending.push(record);
            return Err(EngineError::ContractViolation(format!(
                "undo of {} does not match outstanding move {}",
                mv, record.mv
            )));
        }
        self.board.unshift(record.mv, record.captured);
        self.to_move = record.side;
        Ok(())
    }

    fn evaluate(&self, perspective: Side) -> f64 {
        self.board.score(perspective)
    }
}

impl RolloutGame for Chess {
    fn simulate_random_game(&mut self, perspective: Side, rng: &mut GameRng) -> Outcome {
        let mut board = self.board;
        let mut side = self.to_move;

        for _ in 0..ROLLOUT_PLY_LIMIT {
            if !Self::kings_present(&board) {
                break;
            }
            let moves = board.legal_moves(side);
            let Some(&mv) = rng.choose(&moves) else {
                break;
            };
            board.shift(mv);
            side = side.opponent();
        }

        match (board.has_king(perspective), board.has_king(perspective.opponent())) {
            (true, false) => Outcome::Win,
            (false, true) => Outcome::Loss,
            _ => {
                let score = board.score(perspective);
                if score > 0.0 {
                    Outcome::Win
                } else if score < 0.0 {
                    Outcome::Loss
                } else {
                    Outcome::Draw
                }
            }
        }
    }
}

impl PlayableGame for Chess {
    fn play(&mut self, mv: &ChessMove) -> Result<()> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let record = self.make(*mv)?;
        self.history.push(record);
        Ok(())
    }

    fn is_over(&self) -> bool {
        !Self::kings_present(&self.board) || self.board.legal_moves(self.to_move).is_empty()
    }
}
