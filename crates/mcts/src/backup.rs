use crate::stats::{Edge, StatsStore};

/// Back one simulation's value up its visited path.
///
/// `value` is already in the root side's frame, so every edge on the path
/// receives it unchanged.
pub fn backpropagate(stats: &mut StatsStore, path: &[Edge], value: f32) {
    for &(state, action) in path {
        stats.record(state, action, value);
    }
}
