use std::collections::HashMap;

use reversi_core::{ActionId, StateId};

/// Lookup key for one (position, action) edge
pub type Edge = (StateId, ActionId);

/// Search statistics for a single edge
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeStats {
    /// Number of simulations that went through this edge
    pub visit_count: u32,

    /// Sum of values backed up through this edge
    pub total_value: f32,

    /// `total_value / visit_count`, 0 while unvisited
    pub mean_value: f32,

    /// Prior probability from the estimator
    pub prior: f32,
}

/// Per-decision edge statistics.
///
/// Unknown edges read as all zeros; nothing has to be inserted up front.
#[derive(Debug, Default)]
pub struct StatsStore {
    edges: HashMap<Edge, EdgeStats>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self {
            edges: HashMap::with_capacity(4096),
        }
    }

    pub fn get(&self, state: StateId, action: ActionId) -> Option<&EdgeStats> {
        self.edges.get(&(state, action))
    }

    /// Stats for the edge, zeros if it was never touched
    pub fn stats(&self, state: StateId, action: ActionId) -> EdgeStats {
        self.get(state, action).copied().unwrap_or_default()
    }

    pub fn visits(&self, state: StateId, action: ActionId) -> u32 {
        self.get(state, action).map_or(0, |e| e.visit_count)
    }

    pub fn total_value(&self, state: StateId, action: ActionId) -> f32 {
        self.get(state, action).map_or(0.0, |e| e.total_value)
    }

    pub fn mean_value(&self, state: StateId, action: ActionId) -> f32 {
        self.get(state, action).map_or(0.0, |e| e.mean_value)
    }

    pub fn prior(&self, state: StateId, action: ActionId) -> f32 {
        self.get(state, action).map_or(0.0, |e| e.prior)
    }

    /// Overwrite the prior, keeping any visit statistics
    pub fn set_prior(&mut self, state: StateId, action: ActionId, prior: f32) {
        self.edges.entry((state, action)).or_default().prior = prior;
    }

    /// Add one visit with `value` to the edge
    pub fn record(&mut self, state: StateId, action: ActionId, value: f32) {
        let edge = self.edges.entry((state, action)).or_default();
        edge.visit_count += 1;
        edge.total_value += value;
        edge.mean_value = edge.total_value / edge.visit_count as f32;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Edge, &EdgeStats)> {
        self.edges.iter()
    }

    /// Number of edges with stored statistics
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: StateId = StateId(42);

    #[test]
    fn test_unseen_edge_reads_zero() {
        let store = StatsStore::new();
        assert_eq!(store.visits(S, 3), 0);
        assert_eq!(store.total_value(S, 3), 0.0);
        assert_eq!(store.mean_value(S, 3), 0.0);
        assert_eq!(store.prior(S, 3), 0.0);
        assert_eq!(store.stats(S, 3), EdgeStats::default());
        // Reads never insert
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_keeps_mean_in_sync() {
        let mut store = StatsStore::new();

        store.record(S, 1, 0.5);
        assert_eq!(store.visits(S, 1), 1);
        assert_eq!(store.mean_value(S, 1), 0.5);

        store.record(S, 1, 0.3);
        let e = store.stats(S, 1);
        assert_eq!(e.visit_count, 2);
        approx::assert_relative_eq!(e.total_value, 0.8, epsilon = 1e-6);
        assert_eq!(e.mean_value, e.total_value / e.visit_count as f32);

        store.record(S, 1, -1.0);
        let e = store.stats(S, 1);
        assert_eq!(e.mean_value, e.total_value / 3.0);
    }

    #[test]
    fn test_set_prior_keeps_visits() {
        let mut store = StatsStore::new();
        store.record(S, 7, 1.0);
        store.set_prior(S, 7, 0.25);

        let e = store.stats(S, 7);
        assert_eq!(e.prior, 0.25);
        assert_eq!(e.visit_count, 1);
        assert_eq!(e.mean_value, 1.0);
    }

    #[test]
    fn test_edges_are_keyed_by_state_and_action() {
        let mut store = StatsStore::new();
        store.record(S, 1, 1.0);
        store.record(StateId(43), 1, -1.0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.mean_value(S, 1), 1.0);
        assert_eq!(store.mean_value(StateId(43), 1), -1.0);

        store.clear();
        assert!(store.is_empty());
    }
}
