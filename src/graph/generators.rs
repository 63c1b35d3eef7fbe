use crate::graph::{DirectedGraph, MutableGraph};
use rand::Rng;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges
///
/// Weights are drawn from `1.0..100.0`; self-loops are skipped.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1.0..100.0));
        }
    }

    graph
}

/// Generates a random DAG whose weights may be negative
///
/// Edges only run from lower to higher ids, so no cycle (negative or not) can
/// exist. Useful as Bellman-Ford input.
pub fn generate_random_dag<R: Rng>(
    n: usize,
    edge_factor: f64,
    min_weight: f64,
    max_weight: f64,
    rng: &mut R,
) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            graph.add_edge(a.min(b), a.max(b), rng.gen_range(min_weight..max_weight));
        }
    }

    graph
}

/// Generates an undirected `width * height` grid with unit weights
///
/// Vertex `y * width + x` is connected to its 4 neighbours.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_undirected_edge(current, current + 1, 1.0);
            }
            if y + 1 < height {
                graph.add_undirected_edge(current, current + width, 1.0);
            }
        }
    }

    graph
}
