use contact_tracer::{Graph, PropagationStrategy};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

static SEED: u64 = 123;
static MEAN_CONTACTS: f64 = 3.0;
static INFECTED_FRACTION: f64 = 0.05;

fn contact_graph(population: usize) -> Graph {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut graph = Graph::new();
    for i in 0..population {
        graph
            .add_vertex(
                &i.to_string(),
                &format!("Person {i}"),
                rng.random_range(0..90),
                0.5,
            )
            .expect("valid severity");
    }
    #[allow(clippy::cast_precision_loss)]
    let edge_probability = (MEAN_CONTACTS / population as f64).min(1.0);
    for i in 0..population {
        for j in (i + 1)..population {
            if rng.random_bool(edge_probability) {
                graph
                    .add_edge(&i.to_string(), &j.to_string(), rng.random_range(0.0..1.0))
                    .expect("valid contact");
            }
        }
    }
    let infected: Vec<String> = (0..population)
        .filter(|_| rng.random_bool(INFECTED_FRACTION))
        .map(|i| i.to_string())
        .collect();
    graph.set_infected(&infected).expect("known people");
    graph
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_degrees");
    for population in [20, 200, 2000] {
        let mut graph = contact_graph(population);
        graph.set_propagation_strategy(PropagationStrategy::BreadthFirst);
        group.bench_function(BenchmarkId::new("breadth_first", population), |bencher| {
            bencher.iter(|| graph.recompute_degrees());
        });
    }

    // The exhaustive walk follows every simple path; only tiny graphs finish.
    let mut graph = contact_graph(20);
    graph.set_propagation_strategy(PropagationStrategy::ExhaustivePaths);
    group.bench_function(BenchmarkId::new("exhaustive_paths", 20), |bencher| {
        bencher.iter(|| graph.recompute_degrees());
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
