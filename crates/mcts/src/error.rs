use thiserror::Error;

#[derive(Error, Debug)]
pub enum MctsError {
    #[error("Board error: {0}")]
    BoardError(#[from] reversi_core::BoardError),

    #[error("Estimator returned a policy of length {got}, expected {expected}")]
    PolicyShape { expected: usize, got: usize },

    #[error("NN evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No legal moves available")]
    NoLegalMoves,
}

pub type Result<T> = std::result::Result<T, MctsError>;
