use brickfield::{Difficulty, Game, GameConfig};
use criterion::{criterion_group, criterion_main, Criterion};

fn full_board_cascade(c: &mut Criterion) {
    c.bench_function("cascade_empty_255x255", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.setup(Some(GameConfig::new(Difficulty::Custom(0), (255, 255))))
                .unwrap();
            game.reveal((127, 127)).unwrap()
        })
    });
}

fn setup_pipeline(c: &mut Criterion) {
    c.bench_function("setup_hard_255x255", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.setup(Some(GameConfig::new(Difficulty::Hard, (255, 255))))
                .unwrap();
            game.grid().unwrap().mine_count()
        })
    });
}

criterion_group!(benches, full_board_cascade, setup_pipeline);
criterion_main!(benches);
