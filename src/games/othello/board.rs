//! Othello board geometry: squares, directions and flip detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Side;

/// Board edge length.
pub const SIZE: usize = 8;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell on the board; also the Othello move type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square. Coordinates must be below `SIZE`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True when both coordinates are below `SIZE`.
    #[must_use]
    pub fn on_board(self) -> bool {
        usize::from(self.row) < SIZE && usize::from(self.col) < SIZE
    }

    fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (usize::from(row) < SIZE && usize::from(col) < SIZE).then_some(Self { row, col })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cells flipped by one placement. Most moves flip only a handful.
pub type Flips = SmallVec<[Square; 12]>;

/// 8x8 grid of discs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Side>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no discs.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Standard opening: white on (3,3) and (4,4), black on (3,4) and (4,3).
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.set(Square::new(3, 3), Some(Side::White));
        board.set(Square::new(3, 4), Some(Side::Black));
        board.set(Square::new(4, 3), Some(Side::Black));
        board.set(Square::new(4, 4), Some(Side::White));
        board
    }

    /// Build a board from eight rows of `B`, `W` and `.`.
    ///
    /// ```
    /// use tabletop_ai::core::Side;
    /// use tabletop_ai::games::othello::{Board, Square};
    ///
    /// let board = Board::parse([
    ///     "........", "........", "........", "...WB...",
    ///     "...BW...", "........", "........", "........",
    /// ]);
    /// assert_eq!(board, Board::standard());
    /// assert_eq!(board.get(Square::new(3, 4)), Some(Side::Black));
    /// ```
    #[must_use]
    pub fn parse(rows: [&str; SIZE]) -> Self {
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(SIZE).enumerate() {
                let disc = match ch {
                    'B' | 'b' => Some(Side::Black),
                    'W' | 'w' => Some(Side::White),
                    _ => None,
                };
                board.cells[r][c] = disc;
            }
        }
        board
    }

    /// Disc on a square.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Side> {
        self.cells[usize::from(sq.row)][usize::from(sq.col)]
    }

    /// Overwrite a square.
    pub fn set(&mut self, sq: Square, disc: Option<Side>) {
        self.cells[usize::from(sq.row)][usize::from(sq.col)] = disc;
    }

    /// Number of discs of one colour.
    #[must_use]
    pub fn count(&self, side: Side) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(side))
            .count() as u32
    }

    /// Every square, row-major.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..SIZE as u8).flat_map(|row| (0..SIZE as u8).map(move |col| Square::new(row, col)))
    }

    /// Opponent discs that `side` would flip by playing `sq`.
    ///
    /// A run counts only when it holds at least one opponent disc and ends
    /// on a `side` disc before leaving the board or hitting an empty cell.
    /// Empty when `sq` is off the board, occupied, or nothing would flip.
    #[must_use]
    pub fn flips(&self, sq: Square, side: Side) -> Flips {
        let mut flips = Flips::new();
        if !sq.on_board() || self.get(sq).is_some() {
            return flips;
        }

        for (dr, dc) in DIRECTIONS {
            let mut run = Flips::new();
            let mut cursor = sq.offset(dr, dc);
            while let Some(cell) = cursor {
                match self.get(cell) {
                    None => break,
                    Some(disc) if disc == side => {
                        flips.extend(run.drain(..));
                        break;
                    }
                    Some(_) => run.push(cell),
                }
                cursor = cell.offset(dr, dc);
            }
        }

        flips
    }

    /// True when `side` may play `sq`.
    #[must_use]
    pub fn is_legal(&self, sq: Square, side: Side) -> bool {
        !self.flips(sq, side).is_empty()
    }

    /// Legal placements for `side`, row-major.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Square> {
        Self::squares().filter(|&sq| self.is_legal(sq, side)).collect()
    }

    /// True when `side` has at least one legal placement.
    #[must_use]
    pub fn has_moves(&self, side: Side) -> bool {
        Self::squares().any(|sq| self.is_legal(sq, side))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Some(Side::Black) => 'B',
                    Some(Side::White) => 'W',
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
        assert_eq!(Square::new(3, 3).offset(1, -1), Some(Square::new(4, 2)));
    }

    #[test]
    fn test_standard_opening_moves() {
        let board = Board::standard();
        assert_eq!(
            board.legal_moves(Side::Black),
            vec![
                Square::new(2, 3),
                Square::new(3, 2),
                Square::new(4, 5),
                Square::new(5, 4)
            ]
        );
        assert_eq!(board.count(Side::Black), 2);
        assert_eq!(board.count(Side::White), 2);
    }

    #[test]
    fn test_run_must_be_capped() {
        // White run to the right ends at the edge: nothing flips.
        let board = Board::parse([
            ".WWWWWWW", "........", "........", "........",
            "........", "........", "........", "........",
        ]);
        assert!(board.flips(Square::new(0, 0), Side::Black).is_empty());
        assert!(!board.has_moves(Side::Black));
    }

    #[test]
    fn test_flips_in_several_directions() {
        let board = Board::parse([
            "........", "...B....", "...W....", "BWW.WB..",
            "....W...", ".....W..", "........", "........",
        ]);
        let mut flips: Vec<_> = board.flips(Square::new(3, 3), Side::Black).into_iter().collect();
        flips.sort_by_key(|s| (s.row, s.col));

        // The down-right run is left open by the empty (6,6).
        assert_eq!(
            flips,
            vec![
                Square::new(2, 3),
                Square::new(3, 1),
                Square::new(3, 2),
                Square::new(3, 4)
            ]
        );
    }

    #[test]
    fn test_off_board_square_never_flips() {
        let board = Board::standard();
        assert!(!Square::new(8, 0).on_board());
        assert!(board.flips(Square::new(8, 0), Side::Black).is_empty());
        assert!(!board.is_legal(Square::new(3, 200), Side::Black));
    }

    #[test]
    fn test_occupied_square_never_flips() {
        let board = Board::standard();
        assert!(board.flips(Square::new(3, 3), Side::Black).is_empty());
        assert!(!board.is_legal(Square::new(4, 4), Side::Black));
    }

    #[test]
    fn test_display_round_trip() {
        let board = Board::standard();
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        let parsed = Board::parse(rows.try_into().unwrap());
        assert_eq!(parsed, board);
    }
}
