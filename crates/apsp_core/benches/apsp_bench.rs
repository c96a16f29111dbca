use std::hint::black_box;

use apsp_core::{
    graph_source::generate_random_graph,
    params::{ApspParams, GraphParams, Threads},
    solver::ApspSolver,
    strategy::apsp_strategy::ApspStrategy,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

fn strategies_benchmark(c: &mut Criterion) {
    let solver = ApspSolver::new(ApspParams {
        threads: Threads::Auto,
        ..Default::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("apsp");
    group.sample_size(20);

    for vertices in [64, 256] {
        let params = GraphParams {
            vertices,
            ..Default::default()
        };
        let input = generate_random_graph(&params, &mut SmallRng::seed_from_u64(2427121)).unwrap();

        for strategy in solver.strategies() {
            group.bench_with_input(
                BenchmarkId::new(strategy.id(), vertices),
                &input,
                |b, input| b.iter(|| black_box(solver.solve(&strategy, input).unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, strategies_benchmark);
criterion_main!(benches);
