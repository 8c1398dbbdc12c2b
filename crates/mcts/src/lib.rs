//! Guided Monte Carlo tree search for Othello.
//!
//! A decision runs a fixed number of simulations over per-edge statistics
//! (visit count, total value, mean value, prior), backed by a policy/value
//! estimator, and turns the root visit counts into a move with a
//! temperature-shaped draw.

// Module declarations
mod backup;
mod config;
mod error;
mod evaluation;
mod expansion;
mod game;
mod mcts;
mod search_result;
mod selection;
mod selector;
mod stats;
#[cfg(test)]
mod testing;

// Public exports
pub use backup::backpropagate;
pub use config::MctsConfig;
pub use error::{MctsError, Result};
pub use evaluation::{evaluate_position, normalize_legal_priors, PolicyValueModel, PRIOR_EPSILON};
pub use game::{actions_or_pass, GameRules};
pub use mcts::Mcts;
pub use search_result::SearchResult;
pub use selection::{select_action, selection_score};
pub use selector::{
    normalize_policy, sample_action, shape_policy, MoveSelector, PendingSample, GREEDY_TEMPERATURE,
};
pub use stats::{Edge, EdgeStats, StatsStore};
