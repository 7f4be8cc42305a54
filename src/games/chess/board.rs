//! Chess board and piece-movement geometry.
//!
//! Legality here is purely geometric: the piece must move the way its type
//! moves, sliders need a clear path, and the target must not hold a piece
//! of the mover's colour. There is no check detection, castling,
//! en passant or promotion.

use serde::{Deserialize, Serialize};

use crate::core::Side;

use super::piece::{Piece, PieceKind};

/// Board edge length.
pub const SIZE: usize = 8;

const CENTER: [(usize, usize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];
const CENTER_BONUS: f64 = 0.5;

/// A move from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessMove {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl ChessMove {
    #[must_use]
    pub const fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    fn origin(self) -> (usize, usize) {
        (usize::from(self.from_row), usize::from(self.from_col))
    }

    fn target(self) -> (usize, usize) {
        (usize::from(self.to_row), usize::from(self.to_col))
    }
}

impl std::fmt::Display for ChessMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})->({}, {})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// 8x8 grid of pieces. Row 0 is black's back rank, row 7 is white's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChessBoard {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::empty()
    }
}

impl ChessBoard {
    /// Board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// Standard starting position.
    #[must_use]
    pub fn standard() -> Self {
        Self::parse([
            "rnbqkbnr", "pppppppp", "........", "........",
            "........", "........", "PPPPPPPP", "RNBQKBNR",
        ])
    }

    /// Build a board from eight rows of piece letters and `.`.
    ///
    /// Uppercase letters are white, lowercase black; anything else is an
    /// empty square.
    #[must_use]
    pub fn parse(rows: [&str; SIZE]) -> Self {
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(SIZE).enumerate() {
                board.squares[r][c] = Piece::from_char(ch);
            }
        }
        board
    }

    /// Piece on a square.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.squares[row][col]
    }

    /// Overwrite a square.
    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) {
        self.squares[row][col] = piece;
    }

    /// True when `side` still has its king.
    #[must_use]
    pub fn has_king(&self, side: Side) -> bool {
        self.squares
            .iter()
            .flatten()
            .any(|&sq| sq == Some(Piece::new(PieceKind::King, side)))
    }

    /// Material plus centre occupation, positive when `perspective` is ahead.
    #[must_use]
    pub fn score(&self, perspective: Side) -> f64 {
        let signed = |piece: Piece, value: f64| {
            if piece.side == perspective {
                value
            } else {
                -value
            }
        };

        let material: f64 = self
            .squares
            .iter()
            .flatten()
            .flatten()
            .map(|&piece| signed(piece, piece.kind.value()))
            .sum();

        let center: f64 = CENTER
            .iter()
            .filter_map(|&(r, c)| self.squares[r][c])
            .map(|piece| signed(piece, CENTER_BONUS))
            .sum();

        material + center
    }

    /// Geometric legality of `mv` for whatever piece stands on its origin.
    #[must_use]
    pub fn is_valid_move(&self, mv: ChessMove) -> bool {
        let (fr, fc) = mv.origin();
        let (tr, tc) = mv.target();
        if fr >= SIZE || fc >= SIZE || tr >= SIZE || tc >= SIZE {
            return false;
        }

        let Some(piece) = self.squares[fr][fc] else {
            return false;
        };
        let target = self.squares[tr][tc];
        if target.is_some_and(|t| t.side == piece.side) {
            return false;
        }

        let dr = tr as i32 - fr as i32;
        let dc = tc as i32 - fc as i32;

        match piece.kind {
            PieceKind::Pawn => self.pawn_can_move(piece.side, (fr, fc), dr, dc, target.is_some()),
            PieceKind::Knight => {
                (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
            }
            PieceKind::Bishop => dr.abs() == dc.abs() && self.path_clear((fr, fc), (tr, tc)),
            PieceKind::Rook => (dr == 0 || dc == 0) && self.path_clear((fr, fc), (tr, tc)),
            PieceKind::Queen => {
                (dr == 0 || dc == 0 || dr.abs() == dc.abs())
                    && self.path_clear((fr, fc), (tr, tc))
            }
            PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
        }
    }

    /// Pawns move one square forward onto an empty square, two from their
    /// start row when both squares ahead are empty, and capture one square
    /// diagonally forward.
    fn pawn_can_move(
        &self,
        side: Side,
        (fr, fc): (usize, usize),
        dr: i32,
        dc: i32,
        captures: bool,
    ) -> bool {
        let (forward, start_row) = match side {
            Side::White => (-1, 6),
            Side::Black => (1, 1),
        };

        if dc == 0 && dr == forward && !captures {
            return true;
        }
        if dc == 0 && fr == start_row && dr == 2 * forward && !captures {
            let middle = (fr as i32 + forward) as usize;
            return self.squares[middle][fc].is_none();
        }
        dc.abs() == 1 && dr == forward && captures
    }

    /// Step unit vectors from `from` toward `to`; every square strictly
    /// between them must be empty.
    fn path_clear(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        let step_r = (to.0 as i32 - from.0 as i32).signum();
        let step_c = (to.1 as i32 - from.1 as i32).signum();
        let mut r = from.0 as i32 + step_r;
        let mut c = from.1 as i32 + step_c;

        while (r, c) != (to.0 as i32, to.1 as i32) {
            if self.squares[r as usize][c as usize].is_some() {
                return false;
            }
            r += step_r;
            c += step_c;
        }
        true
    }

    /// Legal moves for `side`: origins row-major, then targets row-major.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for fr in 0..SIZE {
            for fc in 0..SIZE {
                if !self.squares[fr][fc].is_some_and(|p| p.side == side) {
                    continue;
                }
                for tr in 0..SIZE {
                    for tc in 0..SIZE {
                        let mv = ChessMove::new(fr as u8, fc as u8, tr as u8, tc as u8);
                        if self.is_valid_move(mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Move a piece, returning whatever stood on the target.
    pub(crate) fn shift(&mut self, mv: ChessMove) -> Option<Piece> {
        let (fr, fc) = mv.origin();
        let (tr, tc) = mv.target();
        let captured = self.squares[tr][tc];
        self.squares[tr][tc] = self.squares[fr][fc].take();
        captured
    }

    /// Reverse `shift` given the captured piece it returned.
    pub(crate) fn unshift(&mut self, mv: ChessMove, captured: Option<Piece>) {
        let (fr, fc) = mv.origin();
        let (tr, tc) = mv.target();
        self.squares[fr][fc] = self.squares[tr][tc];
        self.squares[tr][tc] = captured;
    }
}

impl std::fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.squares {
            for sq in row {
                write!(f, "{}", sq.map_or('.', Piece::to_char))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
