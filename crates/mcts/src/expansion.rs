use reversi_core::Side;

use crate::error::Result;
use crate::evaluation::{evaluate_position, normalize_legal_priors, PolicyValueModel};
use crate::game::GameRules;
use crate::stats::StatsStore;

/// Evaluate `game` with `side` to move and store its priors.
///
/// Priors are restricted to the legal actions (or the single pass id) and
/// written as P for this position's edges. Returns the estimator's raw value.
pub fn expand_and_evaluate<G: GameRules, M: PolicyValueModel>(
    stats: &mut StatsStore,
    game: &G,
    side: Side,
    model: &M,
) -> Result<f32> {
    let (policy, value) = evaluate_position(model, &game.encode(side))?;

    let state = game.fingerprint();
    let legal = game.legal_actions(side);
    for (action, prior) in normalize_legal_priors(&policy, &legal) {
        stats.set_prior(state, action, prior);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingModel;
    use approx::assert_relative_eq;
    use reversi_core::{Board, PASS_ACTION};

    #[test]
    fn test_expand_root_priors_sum_to_one() {
        let board = Board::new();
        let model = CountingModel::uniform(0.25);
        let mut stats = StatsStore::new();

        let value = expand_and_evaluate(&mut stats, &board, Side::Black, &model).unwrap();

        assert_eq!(value, 0.25);
        assert_eq!(model.calls(), 1);
        let state = board.fingerprint();
        let sum: f32 = board
            .legal_actions(Side::Black)
            .iter()
            .map(|&a| stats.prior(state, a))
            .sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        // Only legal edges get a prior
        assert_eq!(stats.len(), 4);
        assert_eq!(stats.visits(state, 19), 0);
    }

    #[test]
    fn test_pass_only_position_gets_pass_prior() {
        let board = Board::from_grid(
            "OX--------------------------------------------------------------",
        )
        .unwrap();
        let model = CountingModel::uniform(0.0);
        let mut stats = StatsStore::new();

        expand_and_evaluate(&mut stats, &board, Side::Black, &model).unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats.prior(board.fingerprint(), PASS_ACTION), 1.0);
    }
}
