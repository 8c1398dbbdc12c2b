use reversi_core::{ActionId, ACTION_SPACE};

/// Result of one search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Root visit counts over all action ids (cells + pass), zero for illegal ids
    pub raw_policy: Vec<f32>,

    /// Visit counts for each legal root action: (action, visit_count)
    pub root_visit_counts: Vec<(ActionId, u32)>,

    /// Number of simulations actually run
    pub num_simulations_run: u32,

    /// Estimator calls made, root evaluation included
    pub evaluations: u32,
}

impl SearchResult {
    /// Create a new search result
    pub fn new(
        raw_policy: Vec<f32>,
        root_visit_counts: Vec<(ActionId, u32)>,
        num_simulations_run: u32,
        evaluations: u32,
    ) -> Self {
        Self {
            raw_policy,
            root_visit_counts,
            num_simulations_run,
            evaluations,
        }
    }

    /// All mass on `action` without searching
    pub fn forced(action: ActionId) -> Self {
        let mut raw_policy = vec![0.0; ACTION_SPACE];
        raw_policy[action] = 1.0;
        Self::new(raw_policy, vec![(action, 1)], 0, 0)
    }

    /// Get the visit count for a specific action
    pub fn visit_count_for_move(&self, action: ActionId) -> u32 {
        self.root_visit_counts
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    /// Get the total number of visits to root edges
    pub fn total_visits(&self) -> u32 {
        self.root_visit_counts.iter().map(|(_, v)| v).sum()
    }

    /// Most visited root action, first in enumeration order on ties
    pub fn best_action(&self) -> Option<ActionId> {
        let mut best: Option<(ActionId, u32)> = None;
        for &(action, visits) in &self.root_visit_counts {
            if best.map_or(true, |(_, v)| visits > v) {
                best = Some((action, visits));
            }
        }
        best.map(|(a, _)| a)
    }
}
