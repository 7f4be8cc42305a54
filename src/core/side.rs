//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Every game in this crate is a two-sided contest. `Side` names the two
//! seats (`Black` moves first in Othello, `White` moves first in chess).
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for credits, disc counts
//! and anything else kept once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a board or card game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Both sides, `Black` first.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Slot index used by `SideMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ```
/// use tabletop_ai::core::{Side, SideMap};
///
/// let mut credits = SideMap::with_value(1000);
/// credits[Side::White] -= 20;
/// assert_eq!(credits[Side::Black], 1000);
/// assert_eq!(credits[Side::White], 980);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from a factory called once per side.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Black), factory(Side::White)],
        }
    }

    /// Create a map with both entries set to `value`.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over `(Side, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
