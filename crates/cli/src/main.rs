//! reversi-cli - runs the search player in self-play or against a random baseline

use anyhow::Result;
use clap::Parser;
use reversi_mcts::PolicyValueModel;
use reversi_nn::{DiscCountModel, UniformModel};
use reversi_selfplay::{play_match, play_selfplay_game, AiPlayer, RandomPlayer};
use tracing::info;

mod config;

use crate::config::{Cli, Command, Estimator, RunArgs};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;

    init_tracing(&cli.log_level)?;
    info!(log_level = %cli.log_level, "Tracing initialized");

    let args = cli.command.args();

    #[cfg(feature = "torch")]
    if let Some(path) = args.model_path() {
        let device = tch::Device::cuda_if_available();
        info!(path = %path.display(), ?device, "Loading TorchScript model");
        let model = reversi_nn::NnModel::load(path, device)?;
        return run(model, &cli.command);
    }

    info!(estimator = ?args.estimator, "Using built-in estimator");
    match args.estimator {
        Estimator::Uniform => run(UniformModel::new(), &cli.command),
        Estimator::DiscCount => run(DiscCountModel::default(), &cli.command),
    }
}

fn run<M: PolicyValueModel>(model: M, command: &Command) -> Result<()> {
    match command {
        Command::Selfplay(args) => selfplay(model, args),
        Command::VersusRandom(args) => versus_random(model, args),
    }
}

fn selfplay<M: PolicyValueModel>(model: M, args: &RunArgs) -> Result<()> {
    let mut player = AiPlayer::new(model, args.player_config(true))?;
    let mut black_wins = 0u32;

    for game in 0..args.games {
        let record = play_selfplay_game(&mut player)?;
        if record.winner.winner() == Some(reversi_core::Side::Black) {
            black_wins += 1;
        }
        info!(
            game = game + 1,
            plies = record.len(),
            passes = record.passes(),
            result = ?record.winner,
            buffered = player.buffer().len(),
            "Self-play game finished"
        );
    }

    info!(
        games = args.games,
        black_win_rate = black_wins as f32 / args.games as f32,
        buffered = player.buffer().len(),
        capacity = player.buffer().capacity(),
        "Self-play finished"
    );
    Ok(())
}

fn versus_random<M: PolicyValueModel>(model: M, args: &RunArgs) -> Result<()> {
    let mut player = AiPlayer::new(model, args.player_config(false))?;
    let mut random = RandomPlayer::new(args.seed.map(|s| s.wrapping_add(1)));

    let stats = play_match(args.games, &mut player, &mut random)?;

    info!(
        games = stats.games,
        wins = stats.first_wins,
        losses = stats.second_wins,
        draws = stats.draws,
        win_rate = stats.first_win_rate(),
        "Match against random finished"
    );
    Ok(())
}
