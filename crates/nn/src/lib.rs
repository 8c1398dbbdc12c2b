//! Position estimators consumed by the search.
//!
//! Every model maps an encoded position (`[3, 8, 8]` planes) to a prior over the
//! 65 action ids and a scalar value in `[-1, 1]`, positive when Black is ahead.

mod heuristic;
#[cfg(feature = "torch")]
mod torch;

pub use heuristic::{DiscCountModel, UniformModel};
#[cfg(feature = "torch")]
pub use torch::NnModel;
