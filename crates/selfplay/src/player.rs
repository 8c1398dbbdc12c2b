use anyhow::Result;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reversi_core::{Board, GameResult, Move, Side};
use reversi_mcts::{evaluate_position, Mcts, MctsConfig, MoveSelector, PolicyValueModel};
use tracing::debug;

use crate::buffer::ReplayBuffer;
use crate::data::TrainingSample;

/// Anything that can choose moves in a game
pub trait Player {
    /// Choose a move for `side`. Must be [`Move::Pass`] exactly when `side`
    /// has no legal placement.
    fn pick_move(&mut self, board: &Board, side: Side) -> Result<Move>;

    /// Called once the game this player took part in is over
    fn finish_game(&mut self, _result: GameResult) {}

    fn name(&self) -> &str;
}

/// Settings for an [`AiPlayer`]
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub mcts: MctsConfig,
    /// Replay buffer capacity
    pub buffer_size: usize,
    /// Record training samples for every decision
    pub training: bool,
    /// RNG seed for move sampling; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl PlayerConfig {
    pub fn new(mcts: MctsConfig) -> Self {
        Self {
            mcts,
            ..Self::default()
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn with_training(mut self, training: bool) -> Self {
        self.training = training;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mcts: MctsConfig::default(),
            buffer_size: 10_000,
            training: false,
            seed: None,
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Search-driven player.
///
/// Each decision runs a fresh search and samples a move from the shaped
/// visit counts. In training mode the decisions are queued and become
/// [`TrainingSample`]s once [`AiPlayer::update_buffer`] learns the result.
pub struct AiPlayer<M: PolicyValueModel> {
    model: M,
    config: MctsConfig,
    mcts: Mcts,
    selector: MoveSelector<ChaCha8Rng>,
    buffer: ReplayBuffer,
}

impl<M: PolicyValueModel> AiPlayer<M> {
    pub fn new(model: M, config: PlayerConfig) -> Result<Self> {
        config.mcts.validate()?;
        Ok(Self {
            model,
            config: config.mcts,
            mcts: Mcts::new(),
            selector: MoveSelector::new(seeded_rng(config.seed), config.training),
            buffer: ReplayBuffer::new(config.buffer_size),
        })
    }

    /// Drain the queued decisions into the replay buffer with the game's
    /// absolute outcome. Returns how many samples were added.
    pub fn update_buffer(&mut self, result: GameResult) -> usize {
        let outcome = result.value();
        let pending = self.selector.drain_pending();
        let added = pending.len();
        for sample in pending {
            self.buffer
                .add(TrainingSample::new(sample.position, sample.policy, outcome));
        }
        debug!(added, buffered = self.buffer.len(), ?result, "replay buffer updated");
        added
    }

    pub fn set_training(&mut self, training: bool) {
        self.selector.set_training(training);
    }

    pub fn is_training(&self) -> bool {
        self.selector.is_training()
    }

    /// Estimator value for `board` with `side` to move, positive when Black is ahead
    pub fn evaluate(&self, board: &Board, side: Side) -> Result<f32> {
        let (_, value) = evaluate_position(&self.model, &board.to_planes(side))?;
        Ok(value)
    }

    /// Decisions queued since the last buffer update
    pub fn pending_len(&self) -> usize {
        self.selector.pending().len()
    }

    pub fn buffer(&self) -> &ReplayBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut ReplayBuffer {
        &mut self.buffer
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl<M: PolicyValueModel> Player for AiPlayer<M> {
    fn pick_move(&mut self, board: &Board, side: Side) -> Result<Move> {
        let result = self.mcts.search(board, side, &self.model, &self.config)?;
        let action =
            self.selector
                .select_move(board, side, &result.raw_policy, self.config.temperature);
        Ok(Move::from_action_id(action)?)
    }

    fn finish_game(&mut self, result: GameResult) {
        if self.is_training() {
            self.update_buffer(result);
        } else {
            self.selector.clear_pending();
        }
    }

    fn name(&self) -> &str {
        "mcts"
    }
}

/// Plays a uniformly random legal move
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn pick_move(&mut self, board: &Board, side: Side) -> Result<Move> {
        let actions = board.legal_actions(side);
        match actions.choose(&mut self.rng) {
            Some(&action) => Ok(Move::from_action_id(action)?),
            None => Ok(Move::Pass),
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
