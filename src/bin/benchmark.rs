use std::time::{Duration, Instant};

use floyd_apsp::graph::generators::random_graph;
use floyd_apsp::graph::{AdjacencyMatrix, Graph};
use floyd_apsp::{AllPairsShortestPath, FloydWarshall};

// Function to benchmark a solver configuration on a graph
fn benchmark_solver(name: &str, solver: &FloydWarshall, graph: &AdjacencyMatrix<i32>) -> Duration {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match solver.solve(graph) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - {} failed: {}", name, e);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    // Count reachable ordered pairs
    let reachable = result.all_paths().count();
    println!("  - Found {} reachable pairs in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![100, 200, 400, 800];

    // Probability that any ordered pair has a direct edge
    let edge_probability = 0.1;

    let sequential = FloydWarshall::new();
    let parallel = FloydWarshall::new().with_parallel(true);
    let algorithm = <FloydWarshall as AllPairsShortestPath<i32, AdjacencyMatrix<i32>>>::name(&sequential);

    println!("=====================================================");
    println!("Benchmark: {} sequential vs parallel", algorithm);
    println!("Edge probability: {}", edge_probability);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = match random_graph(size, edge_probability, 100, size as u64) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Could not generate graph: {}", e);
                continue;
            }
        };
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let sequential_time = benchmark_solver("Sequential", &sequential, &graph);
        let parallel_time = benchmark_solver("Parallel", &parallel, &graph);

        results.push((size, sequential_time, parallel_time));

        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - Parallel vs Sequential: {:.2}x", speedup);
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Sequential (ms)", "Parallel (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);

        println!("{:<10} | {:<15} | {:<15} | {:<10.2}",
                 size,
                 sequential_time.as_millis(),
                 parallel_time.as_millis(),
                 speedup);
    }
}
