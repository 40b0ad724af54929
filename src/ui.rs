#![cfg(feature = "std")]

//! Console text for the interactive game.

use std::string::String;

use crate::{
    common::{BoardError, InputError},
    game::{Game, MoveOutcome, Side},
};

pub const GREETING: &str = "Welcome to Sea Battle!\n\
The player and the computer each have a board with ships already placed:\n\
one ship of 3 cells, two ships of 2 cells and four ships of 1 cell.\n\
Players take turns shooting at the opponent's board; a hit earns another shot.\n\
Shot coordinates must be within the board, from 1 to 6 inclusive.\n\
The first to sink every enemy ship wins.\nGood luck!\n";

pub const WIN_BANNER: &str = "\n-------------\nYou won!\n-------------\n";
pub const LOSS_BANNER: &str = "\n-------------\nYou lost\n-------------\n";

/// Both boards as the player sees them: own ships shown, enemy concealed.
pub fn player_view(game: &Game) -> String {
    std::format!(
        "Your board\n{}Enemy board\n{}",
        game.player_board().render(true),
        game.computer_board().render(false)
    )
}

/// Message reported after a move cycle, addressed to the player.
pub fn outcome_message(side: Side, outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Hit(_) => String::from("\n---Hit!---\n"),
        MoveOutcome::Sink(_, len) => std::format!("\n---Hit! A {}-cell ship is sunk---\n", len),
        MoveOutcome::Miss(_) => String::from("\n---Miss---\n"),
        MoveOutcome::Rejected(_, BoardError::OutOfBounds) => String::from(
            "\nTry again. Shot coordinates must be from 1 to 6 inclusive\n",
        ),
        MoveOutcome::Rejected(_, _) if side == Side::Player => {
            String::from("\nTry again. Choose other coordinates.\n")
        }
        MoveOutcome::Rejected(c, e) => std::format!("\nComputer shot {} rejected: {}\n", c, e),
        MoveOutcome::InvalidInput(e) => input_hint(*e),
    }
}

fn input_hint(err: InputError) -> String {
    std::format!("{}\n", err)
}
