pub mod binary_heap;
pub mod fibonacci_heap;
pub mod priority_queue;

pub use binary_heap::BinaryMinHeap;
pub use fibonacci_heap::{FibonacciHeap, NodeHandle};
pub use priority_queue::PriorityQueue;
