//! Ship geometry and health.

use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend in increasing `x` from the origin.
    Horizontal,
    /// Cells extend in increasing `y` from the origin.
    Vertical,
}

/// A straight run of cells with remaining health.
///
/// Geometry is fixed at construction and is not validated here; the board
/// rejects ships that leave the grid. Only the health changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    origin: Coord,
    orientation: Orientation,
    cells: Vec<Coord>,
    health: usize,
}

impl Ship {
    /// Build a ship of `length` cells starting at `origin`.
    pub fn new(length: usize, origin: Coord, orientation: Orientation) -> Self {
        let cells = (0..length as i32)
            .map(|i| match orientation {
                Orientation::Horizontal => origin.offset(i, 0),
                Orientation::Vertical => origin.offset(0, i),
            })
            .collect();
        Ship {
            length,
            origin,
            orientation,
            cells,
            health: length,
        }
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Register a hit at `coord`.
    /// Returns `true` if the coordinate belongs to the ship and health was taken.
    pub fn apply_hit(&mut self, coord: Coord) -> bool {
        if self.contains(coord) && self.health > 0 {
            self.health -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn remaining_health(&self) -> usize {
        self.health
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?}, health: {} }}",
            self.length, self.origin.x, self.origin.y, self.orientation, self.health,
        )
    }
}
