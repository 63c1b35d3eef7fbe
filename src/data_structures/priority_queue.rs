use crate::Result;

/// Min-priority queue contract the Dijkstra engine is generic over
///
/// Both backends pop the smallest priority first. They differ in how they
/// handle an improved priority for a value that may already be queued:
/// the binary heap pushes a duplicate and relies on the caller discarding
/// stale entries, the Fibonacci heap lowers the existing key in place.
pub trait PriorityQueue<V, P> {
    /// Enqueues a value with the given priority
    fn insert(&mut self, priority: P, value: V) -> Result<()>;

    /// Removes and returns the entry with the smallest priority
    ///
    /// Fails with [`crate::Error::EmptyQueue`] when nothing is queued.
    fn extract_min(&mut self) -> Result<(P, V)>;

    /// Records a better priority for `value`, enqueueing it if needed
    fn push_or_decrease(&mut self, priority: P, value: V) -> Result<()>;

    /// Returns true if the priority queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the priority queue
    fn len(&self) -> usize;
}
