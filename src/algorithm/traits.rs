use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// Indexed by dense vertex id. Unreachable vertices have an infinite distance
/// and no predecessor; the source has distance zero and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Fresh state for `n` vertices: everything at infinity except the source
    pub(crate) fn initial(n: usize, source: usize) -> Self {
        let mut distances = vec![W::infinity(); n];
        distances[source] = W::zero();
        ShortestPathResult {
            distances,
            predecessors: vec![None; n],
            source,
        }
    }

    /// Returns true if the vertex id was reached from the source
    pub fn is_reachable(&self, id: usize) -> bool {
        self.distances.get(id).is_some_and(|d| d.is_finite())
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Get the shortest path from source to target as a sequence of vertex ids
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(current);
            // A reachable non-source vertex always has a predecessor
            current = self.predecessors[current]?;
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }

    /// Same as [`ShortestPathResult::path_to`], with vertex labels
    pub fn vertex_path<V, G>(&self, graph: &G, target: &V) -> Option<Vec<V>>
    where
        V: Vertex,
        G: Graph<V, W>,
    {
        let target = graph.vertex_id(target)?;
        self.path_to(target)?
            .into_iter()
            .map(|id| graph.vertex(id).cloned())
            .collect()
    }

    /// Distance map keyed by vertex label
    pub fn distance_map<V, G>(&self, graph: &G) -> HashMap<V, W>
    where
        V: Vertex,
        G: Graph<V, W>,
    {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(id, &d)| graph.vertex(id).map(|v| (v.clone(), d)))
            .collect()
    }

    /// Predecessor map keyed by vertex label
    pub fn predecessor_map<V, G>(&self, graph: &G) -> HashMap<V, Option<V>>
    where
        V: Vertex,
        G: Graph<V, W>,
    {
        self.predecessors
            .iter()
            .enumerate()
            .filter_map(|(id, pred)| {
                let vertex = graph.vertex(id)?.clone();
                let pred = pred.and_then(|p| graph.vertex(p).cloned());
                Some((vertex, pred))
            })
            .collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
