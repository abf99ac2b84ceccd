//! Criterion benchmarks for route annealing.
//!
//! Uses synthetic grid instances so timings reflect the loop itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_route_anneal::annealing::{swap_neighbor, AnnealingConfig, AnnealingRunner};
use u_route_anneal::distance::CostMatrix;
use u_route_anneal::evaluation::{CostEvaluator, CostWeights};
use u_route_anneal::models::{build_initial_routes, NodeId, RouteSet};

/// Nodes on a square grid; fuel is a fixed fraction of Manhattan distance.
fn grid_instance(nodes: usize) -> (CostMatrix, CostMatrix) {
    let side = (nodes as f64).sqrt().ceil() as usize;
    let coord = |i: usize| ((i % side) as f64, (i / side) as f64);
    let mut dist = CostMatrix::new(nodes);
    let mut fuel = CostMatrix::new(nodes);
    for i in 0..nodes {
        for j in 0..nodes {
            let (xi, yi) = coord(i);
            let (xj, yj) = coord(j);
            let d = (xi - xj).abs() + (yi - yj).abs();
            dist.set(i, j, d);
            fuel.set(i, j, 0.3 * d);
        }
    }
    (dist, fuel)
}

fn initial_routes(vehicles: usize, nodes: usize) -> RouteSet {
    let depots: Vec<NodeId> = (1..=vehicles).filter_map(NodeId::new).collect();
    let mut rng = StdRng::seed_from_u64(42);
    build_initial_routes(vehicles, &depots, nodes, &mut rng).expect("valid instance")
}

fn bench_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_cost");
    for &nodes in &[50, 200] {
        let (dist, fuel) = grid_instance(nodes);
        let routes = initial_routes(10, nodes);
        let eval = CostEvaluator::new(&dist, &fuel, CostWeights::default()).expect("same size");
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &routes, |b, r| {
            b.iter(|| eval.total_cost(black_box(r)));
        });
    }
    group.finish();
}

fn bench_neighbor(c: &mut Criterion) {
    let routes = initial_routes(10, 200);
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("swap_neighbor_200", |b| {
        b.iter(|| swap_neighbor(black_box(&routes), &mut rng));
    });
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);
    for &nodes in &[30, 100] {
        let (dist, fuel) = grid_instance(nodes);
        let config = AnnealingConfig::default()
            .with_min_temperature(1.0)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &n| {
            b.iter(|| {
                AnnealingRunner::run(initial_routes(5, n), &dist, &fuel, &config)
                    .expect("valid instance")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cost, bench_neighbor, bench_optimize);
criterion_main!(benches);
