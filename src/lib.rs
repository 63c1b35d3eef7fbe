//! Transit SSSP - Single-Source Shortest Paths over transit schedules
//!
//! This library computes single-source shortest paths on weighted graphs built
//! from GTFS `stop_times` data and compares two priority-queue strategies for
//! Dijkstra's algorithm:
//!
//! - an array-backed binary min-heap with lazy deletion of stale entries
//! - a Fibonacci heap with amortized O(1) decrease-key
//!
//! Bellman-Ford is provided as a correctness baseline and as the fallback for
//! graphs with negative edge weights, with negative-cycle detection.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;
pub mod transit;

pub use algorithm::{
    auto::AutoSelect,
    bellman_ford::{bellman_ford, BellmanFord},
    dijkstra::{dijkstra, Dijkstra, QueueKind},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{BinaryMinHeap, FibonacciHeap, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Vertex not found in graph: {0}")]
    UnknownVertex(String),

    #[error("Negative-weight cycle reachable from source (still relaxes at {vertex})")]
    NegativeCycle { vertex: String },

    #[error("Value is already queued: {0}")]
    DuplicateEntry(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
