use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mincut::graph::{Contraction, Graph, Karger, KargerConfig, Selection, StoerWagner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [32, 64, 128];

/// Connected graph: a spanning path plus each remaining pair with probability `density`.
fn random_graph(n: usize, density: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);
    for v in 1..n {
        graph.set_edge(v - 1, v, 1).unwrap();
    }
    for u in 0..n {
        for v in u + 2..n {
            if rng.gen_bool(density) {
                graph.set_edge(u, v, 1).unwrap();
            }
        }
    }
    graph
}

fn bench_stoer_wagner(c: &mut Criterion) {
    let mut group = c.benchmark_group("stoer_wagner");
    for &n in &SIZES {
        let graph = random_graph(n, 0.5, n as u64);
        for (name, selection) in [
            ("linear_scan", Selection::LinearScan),
            ("priority_queue", Selection::PriorityQueue),
        ] {
            let engine = StoerWagner::new(selection);
            group.bench_with_input(BenchmarkId::new(name, n), &graph, |b, graph| {
                b.iter(|| engine.min_cut(black_box(graph)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_karger(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger");
    for &n in &SIZES {
        let graph = random_graph(n, 0.5, n as u64);
        for (name, contraction) in [
            ("rejection_sampling", Contraction::RejectionSampling),
            ("shuffled_scan", Contraction::ShuffledScan),
        ] {
            let config = KargerConfig::new(100)
                .with_contraction(contraction)
                .with_seed(1);
            let engine = Karger::new(config).unwrap();
            group.bench_with_input(BenchmarkId::new(name, n), &graph, |b, graph| {
                b.iter(|| engine.estimate(black_box(graph)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_karger_parallel(c: &mut Criterion) {
    let graph = random_graph(128, 0.5, 7);
    let config = KargerConfig::new(200).with_seed(1).with_parallel(true);
    let engine = Karger::new(config).unwrap();
    c.bench_function("karger parallel 200 trials n=128", |b| {
        b.iter(|| engine.estimate(black_box(&graph)).unwrap())
    });
}

criterion_group!(benches, bench_stoer_wagner, bench_karger, bench_karger_parallel);
criterion_main!(benches);
