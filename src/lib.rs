#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod ship;
pub mod shot;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::Console;
pub use coord::{CoordinateError, Position};
pub use fleet::Fleet;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::PlacementError;
pub use ship::*;
