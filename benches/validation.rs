use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dfs_lineup::{
    contest::{
        lineup::{Lineup, LineupBuilder, LineupSlots},
        player_pool::ContestPlayer,
    },
    types::{Position, Salary, Slot},
};

fn entry(id: u32, positions: &[Position], game: u32, salary: Salary) -> ContestPlayer {
    ContestPlayer::from_parts(
        id.to_string(),
        format!("player {id}"),
        positions.iter().copied().collect(),
        format!("g{game}"),
        salary,
    )
    .expect("entry")
}

fn slots(offset: u32) -> LineupSlots {
    LineupSlots {
        point_guard: entry(offset, &[Position::PointGuard], 1, 6_000),
        shooting_guard: entry(offset + 1, &[Position::ShootingGuard], 1, 6_000),
        small_forward: entry(offset + 2, &[Position::SmallForward], 1, 6_000),
        power_forward: entry(offset + 3, &[Position::PowerForward], 2, 6_000),
        center: entry(offset + 4, &[Position::Center], 2, 6_000),
        guard: entry(offset + 5, &[Position::PointGuard, Position::ShootingGuard], 2, 6_000),
        forward: entry(offset + 6, &[Position::SmallForward, Position::PowerForward], 3, 6_000),
        utility: entry(offset + 7, &Position::ALL, 3, 6_000),
    }
}

fn bench_validate(c: &mut Criterion) {
    let input = slots(0);
    c.bench_function("lineup_validate", |b| {
        b.iter(|| Lineup::new(input.clone()).expect("lineup"));
    });
}

fn bench_builder(c: &mut Criterion) {
    let input = slots(0);
    c.bench_function("lineup_builder", |b| {
        b.iter(|| {
            let mut builder = LineupBuilder::new();
            for slot in Slot::ALL {
                builder.set(slot, input.get(slot).clone()).expect("set");
            }
            builder.build().expect("build")
        });
    });
}

fn bench_many_lineups(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_many");
    for n in [10u32, 100, 1000] {
        let inputs: Vec<LineupSlots> = (0..n).map(|i| slots(i * 8)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &inputs, |b, inputs| {
            b.iter(|| {
                for s in inputs {
                    black_box(Lineup::new(black_box(s).clone()));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate, bench_builder, bench_many_lineups);
criterion_main!(benches);
