//! Stub games and estimators shared by the unit tests.

use std::cell::Cell;

use ndarray::Array3;
use reversi_core::{ActionId, BoardError, GameResult, Side, StateId, ACTION_SPACE};

use crate::error::Result;
use crate::evaluation::PolicyValueModel;
use crate::game::GameRules;

/// Uniform prior, fixed value, counts calls
pub(crate) struct CountingModel {
    value: f32,
    calls: Cell<u32>,
}

impl CountingModel {
    pub(crate) fn uniform(value: f32) -> Self {
        Self {
            value,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl PolicyValueModel for CountingModel {
    fn evaluate(&self, _planes: &Array3<f32>) -> Result<(Vec<f32>, f32)> {
        self.calls.set(self.calls.get() + 1);
        Ok((vec![1.0 / ACTION_SPACE as f32; ACTION_SPACE], self.value))
    }
}

/// Values positions by the first move played: +1 after `good`, -1 after
/// anything else, 0 at the root.
pub(crate) struct FirstMoveModel {
    good: ActionId,
    calls: Cell<u32>,
}

impl FirstMoveModel {
    pub(crate) fn new(good: ActionId) -> Self {
        Self {
            good,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl PolicyValueModel for FirstMoveModel {
    fn evaluate(&self, planes: &Array3<f32>) -> Result<(Vec<f32>, f32)> {
        self.calls.set(self.calls.get() + 1);
        let marker = planes[[0, 0, 0]];
        let value = if marker == 0.0 {
            0.0
        } else if marker == self.good as f32 + 1.0 {
            1.0
        } else {
            -1.0
        };
        Ok((vec![1.0 / ACTION_SPACE as f32; ACTION_SPACE], value))
    }
}

/// Game with the same action set everywhere that ends after `depth` moves
/// with a fixed result.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedGame {
    history: Vec<ActionId>,
    actions: Vec<ActionId>,
    depth: usize,
    result: GameResult,
}

impl ScriptedGame {
    pub(crate) fn new(actions: Vec<ActionId>, depth: usize, result: GameResult) -> Self {
        Self {
            history: Vec::new(),
            actions,
            depth,
            result,
        }
    }
}

impl GameRules for ScriptedGame {
    fn legal_actions(&self, _side: Side) -> Vec<ActionId> {
        if self.is_terminal() {
            Vec::new()
        } else {
            self.actions.clone()
        }
    }

    fn apply(&mut self, action: ActionId, _side: Side) -> reversi_core::Result<()> {
        if !self.actions.contains(&action) {
            return Err(BoardError::IllegalMove(action));
        }
        self.history.push(action);
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.history.len() >= self.depth
    }

    fn winner(&self) -> GameResult {
        self.result
    }

    fn fingerprint(&self) -> StateId {
        StateId(
            self.history
                .iter()
                .fold(1u128, |h, &a| h * ACTION_SPACE as u128 + a as u128),
        )
    }

    fn encode(&self, _side: Side) -> Array3<f32> {
        let mut planes = Array3::<f32>::zeros((3, 8, 8));
        planes[[0, 0, 0]] = self.history.first().map_or(0.0, |&a| a as f32 + 1.0);
        planes[[0, 0, 1]] = self.history.len() as f32;
        planes
    }
}
