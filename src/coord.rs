//! Board coordinates.
//!
//! Coordinates are 1-based: `x` is the column and `y` the row, both valid in
//! `1..=BOARD_SIZE`. Fields are signed so that any parsed pair of integers can
//! be represented and rejected by bounds checks rather than by the parser.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Offsets of the 8-neighbourhood, diagonals included.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` when the coordinate lies within `[1, BOARD_SIZE]` on both axes.
    pub fn in_bounds(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }

    /// Zero-based `(row, col)` grid index, or `None` when out of bounds.
    pub fn index(&self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some(((self.y - 1) as usize, (self.x - 1) as usize))
        } else {
            None
        }
    }

    /// Coordinate shifted by `(dx, dy)`. The result may be out of bounds.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// In-bounds cells of the 8-neighbourhood.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        NEIGHBOURS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
            .filter(Coord::in_bounds)
    }

    /// Every coordinate on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
