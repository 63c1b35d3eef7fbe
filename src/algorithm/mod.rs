pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod auto;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
