use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for vertex identifiers: stop ids, integers, anything hashable
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted directed graph
///
/// Vertices are interned to dense ids (`0..vertex_count()`) so algorithms can
/// keep their state in plain vectors; labels are only needed at the edges of
/// the API.
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the dense id of a vertex, if it is part of the graph
    fn vertex_id(&self, vertex: &V) -> Option<usize>;

    /// Returns the vertex label for a dense id
    fn vertex(&self, id: usize) -> Option<&V>;

    /// Returns an iterator over the outgoing edges `(target_id, weight)` of a vertex id
    fn outgoing_edges(&self, id: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertex_id(vertex).is_some()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of the first edge between two vertices if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let from = self.vertex_id(from)?;
        let to = self.vertex_id(to)?;
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns true if any edge carries a negative weight
    fn has_negative_weights(&self) -> bool {
        (0..self.vertex_count())
            .any(|id| self.outgoing_edges(id).any(|(_, weight)| weight < W::zero()))
    }
}

/// Trait for building graphs
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its id; an existing vertex keeps its id
    fn add_vertex(&mut self, vertex: V) -> usize;

    /// Appends a directed edge, adding missing endpoints as vertices
    ///
    /// Parallel edges and self-loops are kept as given; negative weights are
    /// accepted so the graph can feed Bellman-Ford.
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Appends an edge in both directions
    fn add_undirected_edge(&mut self, a: V, b: V, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Removes every edge from `from` to `to`
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;
}
