use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::info;

use crate::graph::{Graph, Vertex};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::{Dijkstra, QueueKind};
use crate::Result;

/// Picks the algorithm from the graph's weights
///
/// Graphs with any negative edge weight go to Bellman-Ford, everything else
/// to Dijkstra with the configured queue backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoSelect {
    queue: QueueKind,
}

impl AutoSelect {
    /// Creates a selector that runs Dijkstra on a Fibonacci heap when it can
    pub fn new() -> Self {
        AutoSelect::default()
    }

    /// Set the queue backend used when Dijkstra is selected
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for AutoSelect
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Auto"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<W>> {
        if graph.has_negative_weights() {
            info!("Negative edge weights present, using Bellman-Ford");
            BellmanFord::new().compute_shortest_paths(graph, source)
        } else {
            info!("All edge weights non-negative, using Dijkstra ({:?})", self.queue);
            Dijkstra::with_queue(self.queue).compute_shortest_paths(graph, source)
        }
    }
}
