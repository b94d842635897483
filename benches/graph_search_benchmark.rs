use pursuit::graph_search::{ExpansionStats, Strategy};
use pursuit::grid::{GridHeuristic, Layout, Position, PositionSearchProblem};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let problem = PositionSearchProblem::new(Layout::load("openMaze").unwrap());
    // Cross the whole pursuit layout, where no single food marks a goal.
    let pursuit = PositionSearchProblem::new(Layout::load("smallPursuit").unwrap())
        .with_goal(Position::new(8, 5));

    for strategy in [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::IterativeDeepening,
    ]
    .iter()
    {
        c.bench_function(&format!("{} open maze", strategy), |b| {
            b.iter(|| solve(*strategy, &problem))
        });
    }

    c.bench_function("astar small pursuit", |b| {
        b.iter(|| solve(Strategy::AStar, &pursuit))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn solve(strategy: Strategy, problem: &PositionSearchProblem) {
    let mut stats = ExpansionStats::new();
    let plan = strategy.search(&mut stats, problem, &GridHeuristic::Manhattan);
    assert!(plan.is_some());
}
