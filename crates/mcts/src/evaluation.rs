use ndarray::Array3;
use reversi_core::{ActionId, ACTION_SPACE, PASS_ACTION};
use reversi_nn::{DiscCountModel, UniformModel};

use crate::error::{MctsError, Result};

/// Added to the prior normaliser so an all-zero legal prior never divides by zero
pub const PRIOR_EPSILON: f32 = 1e-10;

/// Minimal interface required from a policy-value estimator.
///
/// `evaluate` returns a prior over all [`ACTION_SPACE`] ids and a value in
/// `[-1, 1]` in the same frame as finished-game outcomes (positive favours Black).
pub trait PolicyValueModel {
    fn evaluate(&self, planes: &Array3<f32>) -> Result<(Vec<f32>, f32)>;
}

impl PolicyValueModel for UniformModel {
    fn evaluate(&self, planes: &Array3<f32>) -> Result<(Vec<f32>, f32)> {
        Ok(self.predict(planes))
    }
}

impl PolicyValueModel for DiscCountModel {
    fn evaluate(&self, planes: &Array3<f32>) -> Result<(Vec<f32>, f32)> {
        Ok(self.predict(planes))
    }
}

#[cfg(feature = "torch")]
impl PolicyValueModel for reversi_nn::NnModel {
    fn evaluate(&self, planes: &Array3<f32>) -> Result<(Vec<f32>, f32)> {
        self.predict(planes)
            .map_err(|e| MctsError::EvaluationFailed(e.to_string()))
    }
}

/// Evaluate one encoded position.
///
/// A prior of the wrong length aborts the decision; nothing is corrected here.
pub fn evaluate_position<M: PolicyValueModel>(
    model: &M,
    planes: &Array3<f32>,
) -> Result<(Vec<f32>, f32)> {
    let (policy, value) = model.evaluate(planes)?;
    if policy.len() != ACTION_SPACE {
        return Err(MctsError::PolicyShape {
            expected: ACTION_SPACE,
            got: policy.len(),
        });
    }
    Ok((policy, value))
}

/// Restrict `policy` to `legal` and renormalise by their sum plus [`PRIOR_EPSILON`].
///
/// With no legal action the single pass id gets prior 1.
pub fn normalize_legal_priors(policy: &[f32], legal: &[ActionId]) -> Vec<(ActionId, f32)> {
    if legal.is_empty() {
        return vec![(PASS_ACTION, 1.0)];
    }

    let total: f32 = PRIOR_EPSILON + legal.iter().map(|&a| policy[a]).sum::<f32>();

    legal.iter().map(|&a| (a, policy[a] / total)).collect()
}
