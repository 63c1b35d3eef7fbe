pub mod traits;
pub mod directed;
pub mod generators;
pub mod sampling;

pub use traits::{Graph, MutableGraph, Vertex};
pub use directed::DirectedGraph;
