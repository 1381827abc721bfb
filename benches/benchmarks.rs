//! Criterion benchmarks for mycelium-paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mycelium_paths::engine::{all_pairs_shortest_paths, dijkstra, PathStatistics};
use mycelium_paths::graph::{
    breadth_first_search, depth_first_search, generate_network, GeneratorParams, MyceliumGraph,
};

/// Weighted random network with roughly `mean_degree` connections per cell.
fn make_network(node_count: usize, mean_degree: f64) -> MyceliumGraph {
    let params = GeneratorParams {
        num_nodes: node_count,
        connection_probability: (mean_degree / node_count as f64).min(1.0),
        weight_range: Some((0.1, 5.0)),
    };
    generate_network(&params, &mut StdRng::seed_from_u64(42)).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let params = GeneratorParams {
        num_nodes: 1_000,
        connection_probability: 0.01,
        weight_range: Some((0.1, 5.0)),
    };
    c.bench_function("generate_1k", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generate_network(&params, &mut rng).unwrap())
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_network(10_000, 6.0);
    c.bench_function("dfs_10k", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| {
            let s = rng.gen_range(0..10_000u64);
            let t = rng.gen_range(0..10_000u64);
            black_box(depth_first_search(&graph, s, t).unwrap())
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_network(10_000, 6.0);
    c.bench_function("bfs_10k", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            let s = rng.gen_range(0..10_000u64);
            let t = rng.gen_range(0..10_000u64);
            black_box(breadth_first_search(&graph, s, t).unwrap())
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_network(10_000, 6.0);
    c.bench_function("dijkstra_10k", |b| {
        let mut rng = StdRng::seed_from_u64(4);
        b.iter(|| {
            let s = rng.gen_range(0..10_000u64);
            black_box(dijkstra(&graph, s).unwrap())
        })
    });
}

fn bench_all_pairs(c: &mut Criterion) {
    // The original workload: 200 cells at p = 0.03.
    let graph = make_network(200, 6.0);
    c.bench_function("all_pairs_200", |b| {
        b.iter(|| {
            let result = all_pairs_shortest_paths(&graph).unwrap();
            black_box(PathStatistics::from_result(&result))
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_dfs,
    bench_bfs,
    bench_dijkstra,
    bench_all_pairs,
);
criterion_main!(benches);
