use ndarray::Array3;
use reversi_core::{ActionId, Board, GameResult, Side, StateId, PASS_ACTION};

/// Rules interface the search drives.
///
/// Implementations must be cheap to clone: every simulation works on its own
/// copy of the root position.
pub trait GameRules: Clone {
    /// Legal placements for `side` in a fixed order; empty means a forced pass
    fn legal_actions(&self, side: Side) -> Vec<ActionId>;

    /// Play `action` (or [`PASS_ACTION`]) for `side` in place
    fn apply(&mut self, action: ActionId, side: Side) -> reversi_core::Result<()>;

    fn is_terminal(&self) -> bool;

    /// Only meaningful once [`GameRules::is_terminal`] holds
    fn winner(&self) -> GameResult;

    fn fingerprint(&self) -> StateId;

    /// Estimator input for this position with `side` to move
    fn encode(&self, side: Side) -> Array3<f32>;
}

impl GameRules for Board {
    fn legal_actions(&self, side: Side) -> Vec<ActionId> {
        Board::legal_actions(self, side)
    }

    fn apply(&mut self, action: ActionId, side: Side) -> reversi_core::Result<()> {
        Board::apply(self, action, side)
    }

    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }

    fn winner(&self) -> GameResult {
        Board::winner(self)
    }

    fn fingerprint(&self) -> StateId {
        Board::fingerprint(self)
    }

    fn encode(&self, side: Side) -> Array3<f32> {
        self.to_planes(side)
    }
}

/// Legal actions, or just the pass id when there are none
pub fn actions_or_pass<G: GameRules>(game: &G, side: Side) -> Vec<ActionId> {
    let actions = game.legal_actions(side);
    if actions.is_empty() {
        vec![PASS_ACTION]
    } else {
        actions
    }
}
