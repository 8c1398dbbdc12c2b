use std::fmt;

use crate::error::{BoardError, Result};

/// Index into the policy vector: one per cell plus the pass id
pub type ActionId = usize;

pub const BOARD_SIZE: usize = 8;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Reserved id for passing, always the last one
pub const PASS_ACTION: ActionId = NUM_CELLS;

/// Length of every policy vector (64 cells + pass)
pub const ACTION_SPACE: usize = NUM_CELLS + 1;

/// A move as a board coordinate, or the pass sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place { row: usize, col: usize },
    Pass,
}

impl Move {
    pub fn place(row: usize, col: usize) -> Self {
        Move::Place { row, col }
    }

    /// Row-major id of this move (`row * 8 + col`), [`PASS_ACTION`] for a pass
    pub fn action_id(&self) -> ActionId {
        match *self {
            Move::Place { row, col } => row * BOARD_SIZE + col,
            Move::Pass => PASS_ACTION,
        }
    }

    /// Inverse of [`Move::action_id`]
    pub fn from_action_id(action: ActionId) -> Result<Self> {
        match action {
            PASS_ACTION => Ok(Move::Pass),
            a if a < NUM_CELLS => Ok(Move::Place {
                row: a / BOARD_SIZE,
                col: a % BOARD_SIZE,
            }),
            a => Err(BoardError::InvalidAction(a)),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // Usual notation: column letter, 1-based row
            Move::Place { row, col } => write!(f, "{}{}", (b'a' + col as u8) as char, row + 1),
            Move::Pass => write!(f, "pass"),
        }
    }
}
