//! Timing harness comparing the queue backends and Bellman-Ford

use std::fmt::{Debug, Write};
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{info, warn};
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::bellman_ford::bellman_ford;
use crate::algorithm::dijkstra::{dijkstra, QueueKind};
use crate::graph::{DirectedGraph, Graph, Vertex};
use crate::Result;

/// Timings for one subgraph
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRow {
    pub size: usize,
    pub vertices: usize,
    /// Undirected edge count (directed edges / 2)
    pub edges: usize,
    pub reachable: usize,
    pub binary_heap_secs: f64,
    pub fibonacci_heap_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bellman_ford_secs: Option<f64>,
}

impl BenchmarkRow {
    /// Bellman-Ford time over Fibonacci-heap Dijkstra time
    pub fn bellman_ford_ratio(&self) -> Option<f64> {
        let bellman_ford = self.bellman_ford_secs?;
        (self.fibonacci_heap_secs > 0.0).then(|| bellman_ford / self.fibonacci_heap_secs)
    }
}

/// A complete benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkReport {
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        BenchmarkReport {
            generated_at: Utc::now(),
            rows,
        }
    }
}

/// Times every algorithm on each subgraph, starting from its first vertex
///
/// Empty subgraphs are skipped, as are subgraphs with negative edge weights,
/// on which Dijkstra is not defined.
pub fn run_benchmarks<V, W>(
    subgraphs: &[(usize, DirectedGraph<V, W>)],
    include_bellman_ford: bool,
) -> Result<Vec<BenchmarkRow>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    let mut rows = Vec::with_capacity(subgraphs.len());

    for (size, graph) in subgraphs {
        let Some(start) = graph.vertices().first() else {
            warn!("Skipping empty subgraph for size {}", size);
            continue;
        };
        if graph.has_negative_weights() {
            warn!("Skipping subgraph for size {}: negative edge weights", size);
            continue;
        }

        let timer = Instant::now();
        let binary = dijkstra(graph, start, QueueKind::Binary)?;
        let binary_heap_secs = timer.elapsed().as_secs_f64();

        let timer = Instant::now();
        let fibonacci = dijkstra(graph, start, QueueKind::Fibonacci)?;
        let fibonacci_heap_secs = timer.elapsed().as_secs_f64();

        if binary.reachable_count() != fibonacci.reachable_count() {
            warn!(
                "Queue backends disagree on size {}: {} vs {} reachable vertices",
                size,
                binary.reachable_count(),
                fibonacci.reachable_count()
            );
        }

        let bellman_ford_secs = if include_bellman_ford {
            let timer = Instant::now();
            bellman_ford(graph, start)?;
            Some(timer.elapsed().as_secs_f64())
        } else {
            None
        };

        let row = BenchmarkRow {
            size: *size,
            vertices: graph.vertex_count(),
            edges: graph.edge_count() / 2,
            reachable: fibonacci.reachable_count(),
            binary_heap_secs,
            fibonacci_heap_secs,
            bellman_ford_secs,
        };
        info!(
            "Completed benchmark for graph size {}: {} vertices, {} edges",
            row.size, row.vertices, row.edges
        );
        rows.push(row);
    }

    Ok(rows)
}

/// Renders the rows as a plain-text table
pub fn render_table(rows: &[BenchmarkRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} | {:<8} | {:<8} | {:<9} | {:<14} | {:<14} | {:<14}",
        "Size", "Vertices", "Edges", "Reachable", "Binary (s)", "Fibonacci (s)", "Bellman-Ford (s)"
    );
    let _ = writeln!(out, "{}", "-".repeat(92));
    for row in rows {
        let bellman_ford = row
            .bellman_ford_secs
            .map(|secs| format!("{:.6}", secs))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<8} | {:<8} | {:<8} | {:<9} | {:<14.6} | {:<14.6} | {:<14}",
            row.size,
            row.vertices,
            row.edges,
            row.reachable,
            row.binary_heap_secs,
            row.fibonacci_heap_secs,
            bellman_ford
        );
    }
    out
}

/// Renders the rows as a LaTeX table
pub fn render_latex(rows: &[BenchmarkRow]) -> String {
    let mut out = String::from(
        "\\begin{table}[htbp]\n\
         \\centering\n\
         \\caption{Shortest path algorithm performance}\n\
         \\begin{tabular}{|c|c|c|c|c|c|c|}\n\
         \\hline\n\
         \\textbf{Size} & \\textbf{$|V|$} & \\textbf{$|E|$} & \\textbf{Dijkstra binary (s)} & \\textbf{Dijkstra Fibonacci (s)} & \\textbf{Bellman-Ford (s)} & \\textbf{B-F/Fibo} \\\\\n\
         \\hline\n",
    );

    for row in rows {
        let bellman_ford = row
            .bellman_ford_secs
            .map(|secs| format!("{:.6}", secs))
            .unwrap_or_else(|| "N/A".to_string());
        let ratio = row
            .bellman_ford_ratio()
            .map(|ratio| format!("{:.2}", ratio))
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            out,
            "{} & {} & {} & {:.6} & {:.6} & {} & {} \\\\\n\\hline",
            row.size,
            row.vertices,
            row.edges,
            row.binary_heap_secs,
            row.fibonacci_heap_secs,
            bellman_ford,
            ratio
        );
    }

    out.push_str("\\end{tabular}\n\\label{tab:performance_comparison}\n\\end{table}\n");
    out
}
