//! Game session: two boards and the move cycle between them.

use log::debug;
use rand::Rng;

use crate::board::{Board, Visibility};
use crate::common::{BoardError, GuessResult, InputError, TargetError};
use crate::coord::Coord;
use crate::fleet::FleetGenerator;
use crate::targeting::Targeting;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What happened during one move cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Hit(Coord),
    /// Hit that sank a ship of the given length.
    Sink(Coord, usize),
    Miss(Coord),
    /// The board refused the shot; the same side moves again.
    Rejected(Coord, BoardError),
    /// The strategy produced unusable input; the same side moves again.
    InvalidInput(InputError),
}

impl MoveOutcome {
    /// Only a miss hands the turn to the opponent.
    pub fn passes_turn(&self) -> bool {
        matches!(self, MoveOutcome::Miss(_))
    }
}

/// Both boards of a running game and whose turn it is.
pub struct Game {
    boards: [Board; 2],
    shots: [usize; 2],
    current: Side,
}

impl Game {
    /// Start a game. The computer's board is concealed and the player moves first.
    pub fn new(player_board: Board, mut computer_board: Board) -> Self {
        computer_board.set_visibility(Visibility::Concealed);
        Self {
            boards: [player_board, computer_board],
            shots: [0; 2],
            current: Side::Player,
        }
    }

    /// Start a game with two freshly generated fleets.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let generator = FleetGenerator::new();
        let player_board = generator.generate(rng);
        let computer_board = generator.generate(rng);
        Self::new(player_board, computer_board)
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn player_board(&self) -> &Board {
        self.board(Side::Player)
    }

    pub fn computer_board(&self) -> &Board {
        self.board(Side::Computer)
    }

    /// Side whose move it is.
    pub fn current(&self) -> Side {
        self.current
    }

    /// Shots fired by `side` that the opposing board accepted.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Run one move cycle for the current side.
    ///
    /// The target is submitted to the opponent's board. Rejected shots and
    /// malformed input keep the turn, hits keep the turn, misses pass it.
    /// Errors that cannot be retried are returned to the caller.
    pub fn take_turn<T: Targeting + ?Sized>(
        &mut self,
        targeting: &mut T,
    ) -> Result<MoveOutcome, TargetError> {
        let shooter = self.current;
        let coord = match targeting.next_target() {
            Ok(coord) => coord,
            Err(TargetError::Invalid(e)) => return Ok(MoveOutcome::InvalidInput(e)),
            Err(e) => return Err(e),
        };

        let target = &mut self.boards[shooter.opponent().index()];
        let outcome = match target.shot(coord) {
            Ok(result) => {
                self.shots[shooter.index()] += 1;
                match result {
                    GuessResult::Miss => MoveOutcome::Miss(coord),
                    GuessResult::Hit => MoveOutcome::Hit(coord),
                    GuessResult::Sink(len) => MoveOutcome::Sink(coord, len),
                }
            }
            Err(e) => MoveOutcome::Rejected(coord, e),
        };
        debug!("{:?} shot {} -> {:?}", shooter, coord, outcome);

        if outcome.passes_turn() {
            self.current = shooter.opponent();
        }
        Ok(outcome)
    }

    /// Evaluate the current game status. The computer's fleet is checked first.
    pub fn status(&self) -> GameStatus {
        if self.computer_board().is_defeated() {
            GameStatus::Won
        } else if self.player_board().is_defeated() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
