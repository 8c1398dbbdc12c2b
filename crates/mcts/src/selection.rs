use reversi_core::{ActionId, StateId};

use crate::stats::StatsStore;

/// Pick the action with the highest score at `state`.
///
/// The first action in `actions` order wins ties. Returns `None` only for an
/// empty slice.
pub fn select_action(stats: &StatsStore, state: StateId, actions: &[ActionId]) -> Option<ActionId> {
    let mut best: Option<(ActionId, f32)> = None;

    for &action in actions {
        let score = selection_score(stats, state, action);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((action, score)),
        }
    }

    best.map(|(action, _)| action)
}

/// Selection score of one edge
///
/// score(s, a) = Q(s, a) + P(s, a) / (N(s, a) + 1)
///
/// There is no exploration constant and no parent-visit term: the prior bonus
/// decays with the edge's own visits only.
pub fn selection_score(stats: &StatsStore, state: StateId, action: ActionId) -> f32 {
    let edge = stats.stats(state, action);
    edge.mean_value + edge.prior / (edge.visit_count as f32 + 1.0)
}
