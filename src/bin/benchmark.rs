use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use transit_sssp::benchmark::{render_latex, render_table, run_benchmarks, BenchmarkReport};
use transit_sssp::graph::generators::generate_random_graph;
use transit_sssp::graph::sampling::prefix_subgraphs;
use transit_sssp::graph::{DirectedGraph, Graph, Vertex};
use transit_sssp::transit::load_stop_times;

/// Benchmark Dijkstra (binary vs Fibonacci heap) and Bellman-Ford on transit graphs
#[derive(Parser, Debug)]
#[command(name = "benchmark", version)]
struct Args {
    /// Path to a GTFS stop_times.txt file
    #[arg(default_value = "gtfs/stop_times.txt")]
    stop_times: PathBuf,

    /// Subgraph sizes (number of stops) to benchmark
    #[arg(long, value_delimiter = ',', default_value = "50,100,200,300,400,500")]
    sizes: Vec<usize>,

    /// Use a random graph with this many vertices instead of stop_times
    #[arg(long)]
    synthetic: Option<usize>,

    /// Seed for --synthetic
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Skip Bellman-Ford, which is O(V * E)
    #[arg(long)]
    no_bellman_ford: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also write a LaTeX table to this path
    #[arg(long)]
    latex: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.synthetic {
        Some(n) => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            let graph = generate_random_graph(n, 2.0, &mut rng);
            run(&args, &graph)
        }
        None => {
            let graph = load_stop_times(&args.stop_times)?;
            run(&args, &graph)
        }
    }
}

fn run<V: Vertex>(args: &Args, graph: &DirectedGraph<V, f64>) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Loaded graph with {} vertices and {} directed edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let subgraphs = prefix_subgraphs(graph, &args.sizes);
    let rows = run_benchmarks(&subgraphs, !args.no_bellman_ford)?;

    if args.json {
        let report = BenchmarkReport::new(rows.clone());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&rows));
    }

    if let Some(path) = &args.latex {
        fs::write(path, render_latex(&rows))?;
        println!("Performance table saved to {}", path.display());
    }

    Ok(())
}
