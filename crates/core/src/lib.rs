//! Othello rules used by the search and self-play crates.
//!
//! The board wraps `rust_reversi_core`'s bitboard. Cells are addressed row-major
//! (`id = row * 8 + col`) and the extra id [`PASS_ACTION`] stands for a pass,
//! so every decision lives in an action space of [`ACTION_SPACE`] ids.

mod action;
mod board;
mod error;
mod side;

pub use action::{ActionId, Move, ACTION_SPACE, BOARD_SIZE, NUM_CELLS, PASS_ACTION};
pub use board::{Board, StateId};
pub use error::{BoardError, Result};
pub use side::{GameResult, Side};
