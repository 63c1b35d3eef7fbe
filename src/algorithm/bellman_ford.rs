use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::{debug, warn};

use crate::graph::{Graph, Vertex};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Bellman-Ford relaxation with negative-cycle detection
///
/// Runs `|V| - 1` passes over every edge, O(V * E). Accepts negative weights;
/// fails with [`Error::NegativeCycle`] when a negative cycle is reachable from
/// the source.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord {
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance that always runs every pass
    pub fn new() -> Self {
        BellmanFord::default()
    }

    /// Stop as soon as a full pass changes nothing
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BellmanFord
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<W>> {
        let source = graph
            .vertex_id(source)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", source)))?;
        run(graph, source, self.early_exit)
    }
}

/// Runs Bellman-Ford from `source`, always performing all `|V| - 1` passes
pub fn bellman_ford<V, W, G>(graph: &G, source: &V) -> Result<ShortestPathResult<W>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    BellmanFord::new().compute_shortest_paths(graph, source)
}

fn run<V, W, G>(graph: &G, source: usize, early_exit: bool) -> Result<ShortestPathResult<W>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    let n = graph.vertex_count();
    let mut result: ShortestPathResult<W> = ShortestPathResult::initial(n, source);

    let mut passes = 0;
    for _ in 1..n {
        passes += 1;
        let mut updated = false;

        for u in 0..n {
            let dist_u = result.distances[u];
            // Nothing can improve through an unreached vertex
            if !dist_u.is_finite() {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = result.distances[u] + weight;
                if candidate < result.distances[v] {
                    result.distances[v] = candidate;
                    result.predecessors[v] = Some(u);
                    updated = true;
                }
            }
        }

        if early_exit && !updated {
            break;
        }
    }

    // One more scan: anything that still relaxes sits on or behind a negative cycle
    for u in 0..n {
        let dist_u = result.distances[u];
        if !dist_u.is_finite() {
            continue;
        }
        for (v, weight) in graph.outgoing_edges(u) {
            if dist_u + weight < result.distances[v] {
                let vertex = graph
                    .vertex(v)
                    .map(|label| format!("{:?}", label))
                    .unwrap_or_else(|| format!("#{}", v));
                warn!("Bellman-Ford found a negative cycle reaching {}", vertex);
                return Err(Error::NegativeCycle { vertex });
            }
        }
    }

    debug!(
        "Bellman-Ford from #{}: {} passes, {} reachable vertices",
        source,
        passes,
        result.reachable_count()
    );

    Ok(result)
}
