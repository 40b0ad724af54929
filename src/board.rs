//! Game board: a fixed grid of cells plus the ships placed on it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::cell::{Cell, ShotState};
use crate::common::{BoardError, GuessResult};
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH};
use crate::coord::Coord;
use crate::ship::Ship;

const GRID: usize = BOARD_SIZE as usize;

/// Whether unhit ship cells are shown to a viewer other than the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Concealed,
}

/// Main board state: cells, ship placements and visibility.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; GRID]; GRID],
    ships: Vec<Ship>,
    visibility: Visibility,
}

impl Board {
    /// Create an empty, visible board.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::default(); GRID]; GRID],
            ships: Vec::new(),
            visibility: Visibility::Visible,
        }
    }

    /// Create an empty board with the given visibility.
    pub fn with_visibility(visibility: Visibility) -> Self {
        Board {
            visibility,
            ..Board::new()
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        coord.index().map(|(r, c)| &self.grid[r][c])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        match coord.index() {
            Some((r, c)) => Some(&mut self.grid[r][c]),
            None => None,
        }
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships still afloat, recomputed from ship health.
    pub fn live_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Number of cells covered by ships.
    pub fn occupied_cells(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.occupied).count()
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.live_ship_count() == 0
    }

    /// Validate and place a ship.
    ///
    /// Checks run in order: length, bounds, occupation, buffer. On success the ship's
    /// cells are marked occupied and its own 8-neighbourhood is buffered.
    /// Buffers of earlier ships are never revisited.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if !(1..=MAX_SHIP_LENGTH).contains(&ship.length()) {
            return Err(BoardError::InvalidShipLength(ship.length()));
        }
        if ship.cells().iter().any(|c| !c.in_bounds()) {
            return Err(BoardError::OutOfBounds);
        }
        if ship.cells().iter().any(|&c| self.is_occupied(c)) {
            return Err(BoardError::CellOccupied);
        }
        if ship.cells().iter().any(|&c| self.is_buffered(c)) {
            return Err(BoardError::CellBuffered);
        }

        for &coord in ship.cells() {
            if let Some(cell) = self.cell_mut(coord) {
                cell.occupied = true;
            }
        }
        self.buffer(&ship);
        self.ships.push(ship);
        Ok(())
    }

    fn is_occupied(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.occupied)
    }

    fn is_buffered(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|c| c.buffered)
    }

    // Marks the in-bounds, unoccupied neighbours of `ship` as buffered.
    fn buffer(&mut self, ship: &Ship) {
        for &coord in ship.cells() {
            for n in coord.neighbours() {
                if let Some(cell) = self.cell_mut(n) {
                    if !cell.occupied {
                        cell.buffered = true;
                    }
                }
            }
        }
    }

    /// Resolve a shot at `coord`, marking the cell and damaging the ship hit.
    pub fn shot(&mut self, coord: Coord) -> Result<GuessResult, BoardError> {
        let cell = self.cell_mut(coord).ok_or(BoardError::OutOfBounds)?;
        if cell.is_resolved() {
            return Err(BoardError::AlreadyShot);
        }
        if !cell.occupied {
            cell.state = ShotState::Miss;
            return Ok(GuessResult::Miss);
        }
        cell.state = ShotState::Hit;

        match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                ship.apply_hit(coord);
                if ship.is_sunk() {
                    Ok(GuessResult::Sink(ship.length()))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
            // occupied cells always belong to a placed ship
            None => Ok(GuessResult::Hit),
        }
    }

    /// Render the board as text.
    ///
    /// Unhit ship cells are drawn only for the owner or on a visible board.
    /// Hits and misses are always drawn.
    pub fn render(&self, for_owner: bool) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = self.write_grid(&mut out, for_owner);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, for_owner: bool) -> fmt::Result {
        let show_ships = for_owner || self.visibility == Visibility::Visible;
        out.write_str(" |")?;
        for x in 1..=GRID {
            write!(out, "{}|", x)?;
        }
        out.write_char('\n')?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(out, "{}|", r + 1)?;
            for cell in row {
                write!(out, "{}|", cell.glyph(show_ships))?;
            }
            out.write_char('\n')?;
        }
        writeln!(out, "----------")
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, false)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  visibility: {:?},\n  live: {},\n  ships: {:?}\n}}",
            self.visibility,
            self.live_ship_count(),
            self.ships
        )
    }
}
