use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use snake_common::games::SessionRng;
use snake_common::games::snake::{
    GameKey, GameMode, RetainedScene, SnakeGame, SnakeSettings, TickOutcome, Ticker,
};

fn create_game(mode: GameMode) -> SnakeGame<RetainedScene, Ticker> {
    let settings = SnakeSettings {
        mode,
        ..SnakeSettings::default()
    };
    let ticker = Ticker::new(settings.min_fps, settings.max_fps);
    SnakeGame::new(settings, RetainedScene::new(), ticker, SessionRng::from_random()).unwrap()
}

fn bench_no_die_1000_ticks() {
    let mut game = create_game(GameMode::NoDie);
    game.toggle_play().unwrap();

    let turns = [GameKey::Left, GameKey::Up, GameKey::Right, GameKey::Up];
    for tick in 0..1000 {
        if tick % 7 == 0 {
            game.handle_key(turns[(tick / 7) % turns.len()]);
        }
        game.run_frame().unwrap();
    }
}

fn bench_rounds_until_wall(mode: GameMode) {
    let mut game = create_game(mode);
    for _ in 0..20 {
        game.toggle_play().unwrap();
        while game.run_frame().unwrap() == TickOutcome::Continued {}
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_tick");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("no_die_1000_ticks", |b| {
        b.iter(bench_no_die_1000_ticks)
    });

    group.bench_function("classic_20_rounds", |b| {
        b.iter(|| bench_rounds_until_wall(GameMode::Classic))
    });

    group.bench_function("walls_20_rounds", |b| {
        b.iter(|| bench_rounds_until_wall(GameMode::Walls))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
