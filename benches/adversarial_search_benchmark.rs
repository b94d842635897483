use pursuit::adversarial_searcher::{search, SearchContext, Strategy};
use pursuit::evaluate::better_evaluation;
use pursuit::game::PursuitState;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let state = PursuitState::load("smallPursuit").unwrap();

    for strategy in [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax].iter() {
        c.bench_function(&format!("{} depth 3 small pursuit", strategy), |b| {
            b.iter(|| best_action(*strategy, &state))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn best_action(strategy: Strategy, state: &PursuitState) {
    let mut context = SearchContext::new(3);
    search(strategy, &mut context, state, &better_evaluation::<PursuitState>).unwrap();
}
