//! Command-line configuration

#[cfg(feature = "torch")]
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use reversi_mcts::MctsConfig;
use reversi_selfplay::PlayerConfig;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "reversi-cli")]
#[command(about = "Othello guided tree search: self-play and baseline matches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play games of the search player against itself and fill its replay buffer
    Selfplay(RunArgs),
    /// Play the search player against a uniformly random opponent
    VersusRandom(RunArgs),
}

impl Command {
    pub fn args(&self) -> &RunArgs {
        match self {
            Command::Selfplay(args) | Command::VersusRandom(args) => args,
        }
    }
}

/// Built-in position estimators
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimator {
    /// Uniform prior, value 0
    Uniform,
    /// Uniform prior, value from the disc difference
    DiscCount,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    pub games: u32,

    /// Number of simulations per move
    #[arg(long, default_value_t = 100)]
    pub simulations: u32,

    /// Move selection temperature
    #[arg(long, default_value_t = 1.0)]
    pub temperature: f32,

    /// Replay buffer capacity
    #[arg(long, default_value_t = 10_000)]
    pub buffer_size: usize,

    /// RNG seed; omitted means seeded from entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Estimator used when no model file is given
    #[arg(long, value_enum, default_value_t = Estimator::DiscCount)]
    pub estimator: Estimator,

    /// TorchScript model file
    #[cfg(feature = "torch")]
    #[arg(long)]
    pub model: Option<PathBuf>,
}

impl RunArgs {
    pub fn player_config(&self, training: bool) -> PlayerConfig {
        let mcts = MctsConfig::default()
            .with_simulations(self.simulations)
            .with_temperature(self.temperature);
        let config = PlayerConfig::new(mcts)
            .with_buffer_size(self.buffer_size)
            .with_training(training);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    #[cfg(feature = "torch")]
    pub fn model_path(&self) -> Option<&PathBuf> {
        self.model.as_ref()
    }
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        let args = self.command.args();

        if args.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if args.simulations == 0 {
            return Err(anyhow!("simulations must be greater than 0"));
        }

        if !(args.temperature.is_finite() && args.temperature > 0.0) {
            return Err(anyhow!(
                "temperature must be greater than 0, got {}",
                args.temperature
            ));
        }

        if args.buffer_size == 0 {
            return Err(anyhow!("buffer_size must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}
