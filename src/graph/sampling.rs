use crate::graph::{DirectedGraph, Graph, MutableGraph, Vertex};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Builds the subgraph induced by the first `size` vertices in insertion order
///
/// `size` is clamped to the vertex count. Only edges with both endpoints
/// inside the prefix are kept, in their original order.
pub fn prefix_subgraph<V, W, G>(graph: &G, size: usize) -> DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    let size = size.min(graph.vertex_count());
    let mut subgraph = DirectedGraph::with_capacity(size);

    // Ids are dense and ordered, so the prefix is exactly `0..size`
    for id in 0..size {
        if let Some(vertex) = graph.vertex(id) {
            subgraph.add_vertex(vertex.clone());
        }
    }

    for id in 0..size {
        let Some(from) = graph.vertex(id) else { continue };
        for (target, weight) in graph.outgoing_edges(id) {
            if target < size {
                if let Some(to) = graph.vertex(target) {
                    subgraph.add_edge(from.clone(), to.clone(), weight);
                }
            }
        }
    }

    subgraph
}

/// Builds one prefix subgraph per distinct size after clamping to the vertex count
///
/// Sizes keep the order of their first request, so asking for several sizes
/// beyond `|V|` yields the full graph once.
pub fn prefix_subgraphs<V, W, G>(graph: &G, sizes: &[usize]) -> Vec<(usize, DirectedGraph<V, W>)>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    let mut subgraphs: Vec<(usize, DirectedGraph<V, W>)> = Vec::with_capacity(sizes.len());
    for &requested in sizes {
        let size = requested.min(graph.vertex_count());
        if subgraphs.iter().any(|(seen, _)| *seen == size) {
            continue;
        }
        subgraphs.push((size, prefix_subgraph(graph, size)));
    }
    subgraphs
}
