//! Random fleet layout.
//!
//! Generation is two-level: each ship gets a bounded number of random
//! placement attempts and is abandoned when they run out; a board missing any
//! ship is thrown away and generation starts again from an empty board.
//! There is no upper bound on the number of board restarts.

use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET, MAX_TRY_COUNT, NUM_SHIPS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Builds boards carrying the full fleet at random positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetGenerator {
    max_tries: usize,
}

impl FleetGenerator {
    /// Generator with the default per-ship budget of `MAX_TRY_COUNT` attempts.
    pub fn new() -> Self {
        Self::with_max_tries(MAX_TRY_COUNT)
    }

    pub fn with_max_tries(max_tries: usize) -> Self {
        Self { max_tries }
    }

    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Generate a board holding every ship of `FLEET`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut restarts = 0usize;
        loop {
            let mut board = Board::new();
            let placed = self.fill(rng, &mut board, &FLEET);
            if placed == NUM_SHIPS {
                if restarts > 0 {
                    info!("fleet generated after {} restarts", restarts);
                }
                return board;
            }
            restarts += 1;
            info!(
                "incomplete fleet ({} of {} ships), restarting",
                placed, NUM_SHIPS
            );
        }
    }

    /// One pass over `lengths`: each ship gets its own budget and is skipped
    /// when the budget runs out. Returns the number of ships placed.
    pub fn fill<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        lengths: &[usize],
    ) -> usize {
        let mut placed = 0;
        for &length in lengths {
            if self.place_ship(rng, board, length) {
                placed += 1;
            } else {
                debug!(
                    "abandoned ship of length {} after {} attempts",
                    length, self.max_tries
                );
            }
        }
        placed
    }

    /// Try to place one ship of `length`, retrying on any placement error.
    /// Returns `false` when the budget runs out.
    pub fn place_ship<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        length: usize,
    ) -> bool {
        for _ in 0..self.max_tries {
            if board.add_ship(random_ship(rng, length)).is_ok() {
                return true;
            }
        }
        false
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A ship of `length` with a uniformly random origin and orientation.
/// The origin is drawn over the whole board, so the ship may not fit.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Ship {
    let origin = Coord::new(
        rng.random_range(1..=BOARD_SIZE),
        rng.random_range(1..=BOARD_SIZE),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(length, origin, orientation)
}

/// Shorthand for `FleetGenerator::new().generate(rng)`.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    FleetGenerator::new().generate(rng)
}
