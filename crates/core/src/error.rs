use thiserror::Error;

use crate::action::ActionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Illegal move at action {0}")]
    IllegalMove(ActionId),

    #[error("Action id out of range: {0}")]
    InvalidAction(ActionId),

    #[error("Pass is only allowed when no legal move exists")]
    PassNotAllowed,

    #[error("Invalid board grid: {0}")]
    InvalidGrid(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
