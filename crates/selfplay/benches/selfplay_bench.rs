use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi_mcts::MctsConfig;
use reversi_nn::UniformModel;
use reversi_selfplay::{play_selfplay_game, AiPlayer, PlayerConfig};

/// Benchmark for a single self-play game with different simulation counts
fn bench_single_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_game");
    group.sample_size(10);

    for num_sims in [1u32, 10, 30].iter() {
        let config = PlayerConfig::new(
            MctsConfig::default()
                .with_simulations(*num_sims)
                .with_temperature(1.0),
        )
        .with_training(true)
        .with_seed(0);

        group.bench_with_input(BenchmarkId::from_parameter(num_sims), num_sims, |b, _| {
            let mut player =
                AiPlayer::new(UniformModel::new(), config.clone()).expect("Invalid config");
            b.iter(|| {
                let record = play_selfplay_game(black_box(&mut player)).expect("Game failed");
                black_box(record)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_game);
criterion_main!(benches);
