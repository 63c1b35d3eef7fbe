use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::debug;

use crate::graph::{Graph, Vertex};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryMinHeap, FibonacciHeap, PriorityQueue};
use crate::{Error, Result};

/// Priority queue backend driving Dijkstra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueKind {
    /// Binary min-heap with duplicate pushes and lazy deletion
    Binary,
    /// Fibonacci heap with in-place decrease-key
    #[default]
    Fibonacci,
}

/// Classic Dijkstra's algorithm implementation
///
/// Edge weights must be non-negative. This is not checked: negative weights
/// give wrong distances, and a negative cycle keeps the queue from draining.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    queue: QueueKind,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance backed by a Fibonacci heap
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates a new Dijkstra algorithm instance with the given queue backend
    pub fn with_queue(queue: QueueKind) -> Self {
        Dijkstra { queue }
    }

    /// The configured queue backend
    pub fn queue(&self) -> QueueKind {
        self.queue
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        match self.queue {
            QueueKind::Binary => "Dijkstra (binary heap)",
            QueueKind::Fibonacci => "Dijkstra (Fibonacci heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<W>> {
        dijkstra(graph, source, self.queue)
    }
}

/// Runs Dijkstra from `start` with the chosen queue backend
pub fn dijkstra<V, W, G>(graph: &G, start: &V, queue: QueueKind) -> Result<ShortestPathResult<W>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    let source = graph
        .vertex_id(start)
        .ok_or_else(|| Error::UnknownVertex(format!("{:?}", start)))?;

    match queue {
        QueueKind::Binary => {
            let heap = BinaryMinHeap::with_capacity(graph.vertex_count());
            dijkstra_with_queue(graph, source, heap)
        }
        QueueKind::Fibonacci => dijkstra_with_queue(graph, source, FibonacciHeap::new()),
    }
}

/// Dijkstra over dense vertex ids, generic over the queue backend
///
/// `queue` must be empty. Entries whose priority exceeds the vertex's current
/// best distance are stale leftovers of lazy deletion and are skipped.
pub fn dijkstra_with_queue<V, W, G, Q>(
    graph: &G,
    source: usize,
    mut queue: Q,
) -> Result<ShortestPathResult<W>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
    Q: PriorityQueue<usize, W>,
{
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::UnknownVertex(format!("#{}", source)));
    }

    let mut result: ShortestPathResult<W> = ShortestPathResult::initial(n, source);
    queue.insert(W::zero(), source)?;

    let mut settled = 0usize;
    let mut stale = 0usize;

    // Main Dijkstra loop
    while !queue.is_empty() {
        let (dist_u, u) = queue.extract_min()?;

        // If we've already found a shorter path to u, skip
        if dist_u > result.distances[u] {
            stale += 1;
            continue;
        }
        settled += 1;

        // Relax all outgoing edges
        for (v, weight) in graph.outgoing_edges(u) {
            let candidate = dist_u + weight;
            if candidate < result.distances[v] {
                result.distances[v] = candidate;
                result.predecessors[v] = Some(u);
                queue.push_or_decrease(candidate, v)?;
            }
        }
    }

    debug!(
        "Dijkstra from #{}: settled {} of {} vertices, skipped {} stale entries",
        source, settled, n, stale
    );

    Ok(result)
}
