//! Pieces and their material values.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Piece type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the evaluation.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 100.0,
        }
    }

    /// Lowercase letter (`p`, `n`, `b`, `r`, `q`, `k`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A coloured piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Parse a board letter: uppercase is white, lowercase is black.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let side = if ch.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Self { kind, side })
    }

    /// Board letter, uppercase for white.
    #[must_use]
    pub fn to_char(self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for ch in "PNBRQKpnbrqk".chars() {
            assert_eq!(Piece::from_char(ch).unwrap().to_char(), ch);
        }
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(
            Piece::from_char('Q'),
            Some(Piece::new(PieceKind::Queen, Side::White))
        );
    }

    #[test]
    fn test_values() {
        assert_eq!(PieceKind::Pawn.value(), 1.0);
        assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
        assert_eq!(PieceKind::Queen.value(), 9.0);
        assert_eq!(PieceKind::King.value(), 100.0);
    }
}
