//! Target selection: the human prompt and the automated random shooter.

use alloc::collections::BTreeSet;
use core::num::IntErrorKind;
use log::trace;
use rand::Rng;

use crate::common::{InputError, TargetError};
use crate::config::{BOARD_SIZE, NUM_CELLS};
use crate::coord::Coord;

/// Source of shot coordinates for one side of the game.
pub trait Targeting {
    /// Produce the next coordinate to shoot at.
    ///
    /// Coordinates are only syntactically valid; bounds and repeats are
    /// checked by the board receiving the shot.
    fn next_target(&mut self) -> Result<Coord, TargetError>;
}

/// Parse `"x y"`: exactly two whitespace separated integers.
///
/// Range is not checked here, `"1 7"` parses and is rejected by the board.
/// Integers too large for `i32` saturate, so they are rejected the same way.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let mut values = [0i32; 2];
    let mut count = 0usize;
    for token in input.split_whitespace() {
        let value = parse_int(token)?;
        if count < values.len() {
            values[count] = value;
        }
        count += 1;
    }
    if count != 2 {
        return Err(InputError::WrongArity(count));
    }
    Ok(Coord::new(values[0], values[1]))
}

fn parse_int(token: &str) -> Result<i32, InputError> {
    match token.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(InputError::NotANumber),
        },
    }
}

/// Automated strategy: uniform random coordinates, never repeated.
pub struct RandomTargeting<R: Rng> {
    rng: R,
    used: BTreeSet<Coord>,
}

impl<R: Rng> RandomTargeting<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            used: BTreeSet::new(),
        }
    }

    /// Coordinates produced so far.
    pub fn used(&self) -> &BTreeSet<Coord> {
        &self.used
    }

    pub fn remaining(&self) -> usize {
        NUM_CELLS - self.used.len()
    }
}

impl<R: Rng> Targeting for RandomTargeting<R> {
    fn next_target(&mut self) -> Result<Coord, TargetError> {
        if self.used.len() >= NUM_CELLS {
            return Err(TargetError::Exhausted);
        }
        loop {
            let coord = Coord::new(
                self.rng.random_range(1..=BOARD_SIZE),
                self.rng.random_range(1..=BOARD_SIZE),
            );
            if self.used.insert(coord) {
                trace!("automated target {}", coord);
                return Ok(coord);
            }
        }
    }
}

#[cfg(feature = "std")]
pub use cli::CliTargeting;

#[cfg(feature = "std")]
mod cli {
    use std::io::{BufRead, Write};
    use std::string::String;

    use super::{parse_coord, Targeting};
    use crate::common::TargetError;
    use crate::coord::Coord;

    const PROMPT: &str = "Enter shot coordinates x and y separated by a space, e.g. \"1 2\": ";

    /// Human strategy: prompts on `output` and reads one line from `input`.
    pub struct CliTargeting<I: BufRead, O: Write> {
        input: I,
        output: O,
    }

    impl<I: BufRead, O: Write> CliTargeting<I, O> {
        pub fn new(input: I, output: O) -> Self {
            Self { input, output }
        }
    }

    impl CliTargeting<std::io::StdinLock<'static>, std::io::Stdout> {
        /// Strategy bound to the process's stdin and stdout.
        pub fn stdio() -> Self {
            Self::new(std::io::stdin().lock(), std::io::stdout())
        }
    }

    impl<I: BufRead, O: Write> Targeting for CliTargeting<I, O> {
        fn next_target(&mut self) -> Result<Coord, TargetError> {
            write!(self.output, "{}", PROMPT).map_err(|_| TargetError::InputClosed)?;
            self.output.flush().map_err(|_| TargetError::InputClosed)?;
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => Err(TargetError::InputClosed),
                Ok(_) => Ok(parse_coord(&line)?),
            }
        }
    }
}
