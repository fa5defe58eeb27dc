//! floyd: all-pairs shortest paths for a graph file
//!
//! Usage: floyd <graph_file> [--parallel] [--json]

use std::env;
use std::process;

use floyd_apsp::graph::display::{render_cells, render_weights};
use floyd_apsp::graph::{read_graph_file, Graph};
use floyd_apsp::report::PathReport;
use floyd_apsp::{FloydWarshall, Result, ShortestPathEngine, SolverConfig};

struct Options {
    path: String,
    parallel: bool,
    json: bool,
}

fn parse_args() -> Option<Options> {
    let mut path = None;
    let mut parallel = false;
    let mut json = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--parallel" => parallel = true,
            "--json" => json = true,
            _ if arg.starts_with("--") => return None,
            _ if path.is_none() => path = Some(arg),
            _ => return None,
        }
    }

    path.map(|path| Options {
        path,
        parallel,
        json,
    })
}

fn run(options: &Options) -> Result<()> {
    let parsed = read_graph_file(&options.path)?;
    let solver = FloydWarshall::with_config(SolverConfig {
        parallel: options.parallel,
        ..SolverConfig::default()
    });
    let mut engine = ShortestPathEngine::with_solver(parsed.graph, solver);

    if !options.json {
        println!("Total Vertices: {}\n", engine.graph().vertex_count());
        print!("{}", engine.graph());
    }

    let result = engine.solve()?;

    if options.json {
        println!("{}", PathReport::from_result(result, parsed.directed).to_json()?);
        return Ok(());
    }

    println!("\nMatrix D:");
    print!("{}", render_weights(result.distances()));

    println!("\nMatrix P:");
    print!("{}", render_cells(result.split_points()));

    println!("\nShortest paths between vertices:");
    for path in result.all_paths() {
        println!("{}", path);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let options = parse_args().unwrap_or_else(|| {
        eprintln!("Usage: floyd <graph_file> [--parallel] [--json]");
        process::exit(1);
    });

    if let Err(e) = run(&options) {
        eprintln!("floyd: {}", e);
        process::exit(1);
    }
}
