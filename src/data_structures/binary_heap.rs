use std::fmt::Debug;

use crate::data_structures::PriorityQueue;
use crate::{Error, Result};

/// Array-backed binary min-heap
///
/// The storage is a complete binary tree laid out in a `Vec`: the children of
/// slot `i` live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Every
/// slot's priority is `<=` both children's.
///
/// There is no decrease-key. Callers that need one push a fresh entry and
/// drop the superseded one when it surfaces (lazy deletion).
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    heap: Vec<(P, V)>,
}

impl<V, P> BinaryMinHeap<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        BinaryMinHeap { heap: Vec::new() }
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryMinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Appends an entry and sifts it up
    pub fn push(&mut self, priority: P, value: V) {
        self.heap.push((priority, value));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Result<(P, V)> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        // Moves the last slot into the root
        let min = self.heap.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(P, &V)> {
        self.heap.first().map(|(priority, value)| (*priority, value))
    }

    /// Clears the heap
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].0 < self.heap[parent].0 {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<V, P> Default for BinaryMinHeap<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> PriorityQueue<V, P> for BinaryMinHeap<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn insert(&mut self, priority: P, value: V) -> Result<()> {
        self.push(priority, value);
        Ok(())
    }

    fn extract_min(&mut self) -> Result<(P, V)> {
        self.pop()
    }

    /// Pushes a duplicate; the superseded entry stays queued until popped
    fn push_or_decrease(&mut self, priority: P, value: V) -> Result<()> {
        self.push(priority, value);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        BinaryMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryMinHeap::len(self)
    }
}
