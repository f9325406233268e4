use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minesweeper_core::*;

const TIERS: [(Coord, CellCount); 4] = [(9, 10), (16, 40), (30, 180), (300, 18_000)];

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (size, mines) in TIERS {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}/{mines}")),
            &Settings::new(size, mines),
            |b, settings| {
                let mut sampler = RandomSampler::new(0x5eed);
                b.iter(|| Board::generate(black_box(settings), &mut sampler).unwrap());
            },
        );
    }
    group.finish();
}

fn open_board_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_board_reveal");
    for size in [16, 128, 512] {
        let mut engine = MinesweeperEngine::new(0);
        engine.set_settings(SettingsPatch::default().size(size).mine_count(0));
        engine.init_new_game().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter_batched(
                || engine.clone(),
                |mut engine| engine.reveal_field(black_box(1)).unwrap(),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, generate, open_board_reveal);
criterion_main!(benches);
