//! Benchmarks for the dispatch pipeline.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mst_vrp::config::{Config, ScheduleRetention};
use mst_vrp::distance::build_leg_distances;
use mst_vrp::geometry::Point;
use mst_vrp::graph::build_graph;
use mst_vrp::load::{Load, LoadTable};
use mst_vrp::partition::partition;
use mst_vrp::Dispatcher;

/// Create a benchmark load table of specified size.
fn create_benchmark_loads(size: usize) -> LoadTable {
    // Pickups on a grid, dropoffs offset by a size-dependent amount
    let grid_size = (size as f64).sqrt().ceil() as usize;
    (0..size)
        .map(|i| {
            let row = i / grid_size;
            let col = i % grid_size;
            let pickup = Point::new(col as f64 * 10.0, row as f64 * 10.0);
            let dropoff = Point::new(pickup.x + (i % 7) as f64, pickup.y - (i % 5) as f64);
            Load::new(format!("{}", i + 1), pickup, dropoff)
        })
        .collect()
}

#[cfg(feature = "bench")]
fn benchmark_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");

    for size in [50, 200, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let loads = create_benchmark_loads(size);
            let legs = build_leg_distances(&loads);

            b.iter(|| build_graph(&loads, &legs));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for size in [50, 200, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let loads = create_benchmark_loads(size);
            let graph = build_graph(&loads, &build_leg_distances(&loads));

            b.iter(|| partition(&graph, ScheduleRetention::AllComponents));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for size in [50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let loads = create_benchmark_loads(size);
            let config = Config::new().with_max_edge_weight(8.0);

            b.iter(|| {
                let mut dispatcher = Dispatcher::new(loads.clone(), config.clone());
                dispatcher.run().get_driver_count()
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_graph_construction,
    benchmark_partition,
    benchmark_full_run
);

#[cfg(feature = "bench")]
criterion_main!(benches);
