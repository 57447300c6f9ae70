use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::config::GameConfig;
use blockfall::core::{Arena, Engine};
use blockfall::types::RotateDir;

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(GameConfig::default(), 12345).unwrap();
    engine.start();

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            engine.tick(black_box(16));
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let config = GameConfig::default();
    let i_matrix = &config.pieces[0].matrix;

    c.bench_function("rotate_i_matrix", |b| {
        b.iter(|| black_box(i_matrix.rotated(RotateDir::Clockwise)))
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_full_rows", |b| {
        b.iter(|| {
            let mut arena = Arena::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    arena.set(x, y, 1);
                }
            }
            for _ in 0..4 {
                arena.clear_row(19);
            }
            black_box(arena)
        })
    });
}

criterion_group!(benches, bench_tick, bench_rotation, bench_clear_rows);
criterion_main!(benches);
