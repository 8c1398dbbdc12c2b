use ndarray::{Array3, Axis};
use reversi_core::{ACTION_SPACE, NUM_CELLS};

/// Uniform prior over every action id and a neutral value
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformModel;

impl UniformModel {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, _planes: &Array3<f32>) -> (Vec<f32>, f32) {
        (uniform_policy(), 0.0)
    }
}

/// Uniform prior with a value read off the disc difference.
///
/// `value = tanh(scale * (black - white) / 64)`
#[derive(Debug, Clone, Copy)]
pub struct DiscCountModel {
    scale: f32,
}

impl DiscCountModel {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn predict(&self, planes: &Array3<f32>) -> (Vec<f32>, f32) {
        let black = planes.index_axis(Axis(0), 0).sum();
        let white = planes.index_axis(Axis(0), 1).sum();
        let value = (self.scale * (black - white) / NUM_CELLS as f32).tanh();
        (uniform_policy(), value)
    }
}

impl Default for DiscCountModel {
    fn default() -> Self {
        Self::new(4.0)
    }
}

fn uniform_policy() -> Vec<f32> {
    vec![1.0 / ACTION_SPACE as f32; ACTION_SPACE]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use reversi_core::{Board, Side};

    #[test]
    fn test_uniform_model_shape() {
        let planes = Board::new().to_planes(Side::Black);
        let (policy, value) = UniformModel::new().predict(&planes);
        assert_eq!(policy.len(), ACTION_SPACE);
        assert_relative_eq!(policy.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_disc_count_model_sign() {
        let model = DiscCountModel::default();

        let (_, even) = model.predict(&Board::new().to_planes(Side::Black));
        assert_eq!(even, 0.0);

        let mut board = Board::new();
        board.apply(19, Side::Black).unwrap();
        let (_, black_ahead) = model.predict(&board.to_planes(Side::White));
        assert!(black_ahead > 0.0 && black_ahead <= 1.0);

        let grid = "O".repeat(64);
        let (_, white_wins) = model.predict(&Board::from_grid(&grid).unwrap().to_planes(Side::Black));
        assert!(white_wins < -0.99);
    }
}
