use crate::graph::traits::{Graph, MutableGraph, Vertex};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Vertices are kept in insertion order, which fixes the edge-iteration order
/// the algorithms see and therefore which predecessor wins a tie.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Vertex labels indexed by dense id
    vertices: Vec<V>,

    /// Label -> dense id
    ids: HashMap<V, usize>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Number of directed edges
    edge_count: usize,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            ids: HashMap::new(),
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            ids: HashMap::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from `vertex -> [(neighbor, weight)]` adjacency entries
    ///
    /// Keys are interned in the order given; neighbors that never appear as a
    /// key are added as isolated-outgoing vertices after all keys.
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let entries: Vec<(V, Vec<(V, W)>)> = adjacency
            .into_iter()
            .map(|(vertex, edges)| (vertex, edges.into_iter().collect()))
            .collect();

        let mut graph = DirectedGraph::with_capacity(entries.len());
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, edges) in entries {
            for (neighbor, weight) in edges {
                graph.add_edge(vertex.clone(), neighbor, weight);
            }
        }
        graph
    }

    /// Returns the vertex labels in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        !self.has_negative_weights()
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex_id(&self, vertex: &V) -> Option<usize> {
        self.ids.get(vertex).copied()
    }

    fn vertex(&self, id: usize) -> Option<&V> {
        self.vertices.get(id)
    }

    fn outgoing_edges(&self, id: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(id) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&id) = self.ids.get(&vertex) {
            return id;
        }
        let new_id = self.vertices.len();
        self.ids.insert(vertex.clone(), new_id);
        self.vertices.push(vertex);
        self.outgoing_edges.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let (Some(from), Some(to)) = (self.vertex_id(from), self.vertex_id(to)) else {
            return false;
        };

        let outgoing = &mut self.outgoing_edges[from];
        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to);
        let removed = len_before - outgoing.len();
        self.edge_count -= removed;

        removed > 0
    }
}
