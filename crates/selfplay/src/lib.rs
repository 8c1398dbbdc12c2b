//! Players, games and training-sample collection built on the search.
//!
//! An [`AiPlayer`] searches every decision, samples its move from the
//! temperature-shaped visit counts and, in training mode, queues the
//! position with its visit distribution. When the game ends the queue is
//! finalised with the absolute winner value and moved into a fixed-capacity
//! [`ReplayBuffer`].
//!
//! # Example
//!
//! ```no_run
//! use reversi_mcts::MctsConfig;
//! use reversi_nn::UniformModel;
//! use reversi_selfplay::{play_selfplay_game, AiPlayer, PlayerConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = PlayerConfig::new(MctsConfig::default().with_simulations(100))
//!     .with_training(true)
//!     .with_seed(7);
//! let mut player = AiPlayer::new(UniformModel::new(), config)?;
//!
//! let record = play_selfplay_game(&mut player)?;
//! println!("Game finished with {} moves", record.len());
//! println!("Buffered {} samples", player.buffer().len());
//! # Ok(())
//! # }
//! ```

mod buffer;
mod data;
mod game;
mod player;

// Re-export public API
pub use buffer::ReplayBuffer;
pub use data::{GameRecord, MatchStats, TrainingSample};
pub use game::{play_game, play_match, play_selfplay_game};
pub use player::{AiPlayer, Player, PlayerConfig, RandomPlayer};
