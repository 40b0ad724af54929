#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod cell;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod targeting;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use targeting::*;
