use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweeper_core::{Board, GameConfig};

fn first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");

    for (name, config) in [
        ("beginner", GameConfig::beginner()),
        ("expert", GameConfig::expert()),
        ("sparse_255", GameConfig::new_unchecked((255, 255), 1000)),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let mut board = Board::new(config, seed);
                let (w, h) = config.size;
                black_box(board.reveal((w / 2, h / 2)))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, first_reveal);
criterion_main!(benches);
