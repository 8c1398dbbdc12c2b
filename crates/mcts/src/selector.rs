use ndarray::Array3;
use rand::Rng;
use reversi_core::{ActionId, Side, PASS_ACTION};

use crate::game::{actions_or_pass, GameRules};

/// Training target recorded at decision time; the outcome is filled in later
#[derive(Debug, Clone)]
pub struct PendingSample {
    /// Encoded position the decision was made from
    pub position: Array3<f32>,
    /// Raw visit counts normalised by their sum
    pub policy: Vec<f32>,
}

/// `raw` divided by its sum. An all-zero policy stays all zero.
pub fn normalize_policy(raw: &[f32]) -> Vec<f32> {
    let total: f32 = raw.iter().sum();
    if total <= 0.0 {
        return vec![0.0; raw.len()];
    }
    raw.iter().map(|&v| v / total).collect()
}

/// Below this temperature shaping is a plain argmax
pub const GREEDY_TEMPERATURE: f32 = 0.01;

/// Raise every entry to `1 / tau` and renormalise.
///
/// Entries are scaled by the maximum first so small temperatures do not
/// overflow; this leaves the normalised result unchanged. Below
/// [`GREEDY_TEMPERATURE`] all mass goes to the first maximal entry, so tied
/// maxima resolve to the lowest action id.
pub fn shape_policy(raw: &[f32], tau: f32) -> Vec<f32> {
    let max = raw.iter().copied().fold(0.0f32, f32::max);
    if max <= 0.0 {
        return vec![0.0; raw.len()];
    }

    if tau < GREEDY_TEMPERATURE {
        let mut shaped = vec![0.0; raw.len()];
        if let Some(first) = raw.iter().position(|&v| v == max) {
            shaped[first] = 1.0;
        }
        return shaped;
    }

    let inv_tau = 1.0f64 / tau as f64;
    let powered: Vec<f64> = raw
        .iter()
        .map(|&v| {
            if v <= 0.0 {
                0.0
            } else {
                (v as f64 / max as f64).powf(inv_tau)
            }
        })
        .collect();
    let total: f64 = powered.iter().sum();

    powered.iter().map(|&w| (w / total) as f32).collect()
}

/// Walk `actions` in order subtracting each shaped probability from `r` and
/// return the first action that brings it to zero or below.
///
/// If rounding leaves `r` positive after the last action, that last action is
/// returned.
pub fn sample_action(actions: &[ActionId], shaped: &[f32], r: f32) -> ActionId {
    let mut remaining = r;
    for &action in actions {
        remaining -= shaped[action];
        if remaining <= 0.0 {
            return action;
        }
    }
    actions.last().copied().unwrap_or(PASS_ACTION)
}

/// Turns a search's raw visit counts into one move.
///
/// In training mode every decision also queues its position and normalised
/// visit distribution until the game's outcome is known.
pub struct MoveSelector<R: Rng> {
    rng: R,
    training: bool,
    pending: Vec<PendingSample>,
}

impl<R: Rng> MoveSelector<R> {
    pub fn new(rng: R, training: bool) -> Self {
        Self {
            rng,
            training,
            pending: Vec::new(),
        }
    }

    pub fn is_training(&self) -> bool {
        self.training
    }

    pub fn set_training(&mut self, training: bool) {
        self.training = training;
    }

    /// Pick a move for `side` from `raw_policy` at temperature `tau`.
    ///
    /// Returns [`PASS_ACTION`] when `side` has no legal move.
    pub fn select_move<G: GameRules>(
        &mut self,
        game: &G,
        side: Side,
        raw_policy: &[f32],
        tau: f32,
    ) -> ActionId {
        let actions = actions_or_pass(game, side);

        if self.training {
            self.pending.push(PendingSample {
                position: game.encode(side),
                policy: normalize_policy(raw_policy),
            });
        }

        let shaped = shape_policy(raw_policy, tau);
        let r: f32 = self.rng.gen();
        sample_action(&actions, &shaped, r)
    }

    pub fn pending(&self) -> &[PendingSample] {
        &self.pending
    }

    /// Take every queued sample, leaving the queue empty
    pub fn drain_pending(&mut self) -> Vec<PendingSample> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}
