//! Benchmarks for the full solving pipeline.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gradus_core::Grid;
use gradus_solver::{Solver, SolverConfig};

const EASY: &str = "
    0 2 3 4 5 6 7 8 0
    4 5 6 7 8 9 1 2 3
    7 8 9 1 2 3 4 5 6
    2 3 4 5 6 7 8 9 1
    5 6 7 8 0 1 2 3 4
    8 9 1 2 3 4 5 6 7
    3 4 5 6 7 8 9 1 2
    6 7 8 9 1 2 3 4 5
    0 1 2 3 4 5 6 7 0
";

fn bench_solve(c: &mut Criterion) {
    let easy: Grid = EASY.parse().expect("valid grid");
    let empty = Grid::default();

    c.bench_function("solve_easy", |b| {
        b.iter(|| Solver::new().solve(black_box(&easy)));
    });
    c.bench_function("solve_empty_to_cap", |b| {
        b.iter(|| Solver::new().solve(black_box(&empty)));
    });
    c.bench_function("solve_easy_with_x_wing", |b| {
        let solver = Solver::with_config(SolverConfig::new().with_x_wing(true));
        b.iter(|| solver.solve(black_box(&easy)));
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
