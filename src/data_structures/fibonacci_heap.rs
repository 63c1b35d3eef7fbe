//! Fibonacci heap with O(1) amortized decrease-key
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other through
//! `usize` handles: `parent`, one representative `child`, and `left`/`right`
//! siblings forming a circular list. Roots share one circular list, and
//! `min` always points at the smallest-keyed root.
//!
//! - `insert` splices a singleton root next to the minimum.
//! - `extract_min` promotes the minimum's children to roots, then
//!   consolidates: roots of equal degree are linked (larger key under smaller
//!   key) until all root degrees differ, which bounds degrees by O(log n).
//! - `decrease_key` cuts a node that now beats its parent and cascades: an
//!   unmarked parent is marked, a marked parent is cut too and the cascade
//!   continues upward.
//!
//! A side index maps each queued value to its node, so callers address
//! entries by value rather than by handle.

use std::collections::HashMap;
use std::fmt::Debug;

use log::trace;

use crate::data_structures::PriorityQueue;
use crate::graph::Vertex;
use crate::{Error, Result};

/// Stable arena handle of a heap node
pub type NodeHandle = usize;

#[derive(Debug, Clone)]
struct Node<V, K> {
    key: K,
    value: V,
    degree: usize,
    /// Lost a child since it last became a child itself
    marked: bool,
    parent: Option<NodeHandle>,
    child: Option<NodeHandle>,
    left: NodeHandle,
    right: NodeHandle,
}

/// Fibonacci min-heap keyed by `K`, holding unique values `V`
#[derive(Debug, Clone)]
pub struct FibonacciHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    nodes: Vec<Node<V, K>>,
    /// Arena slots released by `extract_min`
    free: Vec<NodeHandle>,
    index: HashMap<V, NodeHandle>,
    min: Option<NodeHandle>,
    len: usize,
}

impl<V, K> FibonacciHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            min: None,
            len: 0,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of queued values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if `value` is currently queued
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// Returns the current key of a queued value
    pub fn key_of(&self, value: &V) -> Option<K> {
        self.index.get(value).map(|&handle| self.nodes[handle].key)
    }

    /// Returns the minimum entry without removing it
    pub fn peek_min(&self) -> Option<(K, &V)> {
        self.min.map(|handle| {
            let node = &self.nodes[handle];
            (node.key, &node.value)
        })
    }

    /// Inserts a new value as a singleton root
    ///
    /// A value may be queued at most once; inserting it again fails with
    /// [`Error::DuplicateEntry`]. Use [`FibonacciHeap::push_or_decrease`] to
    /// insert-or-update.
    pub fn insert(&mut self, key: K, value: V) -> Result<NodeHandle> {
        if self.index.contains_key(&value) {
            return Err(Error::DuplicateEntry(format!("{:?}", value)));
        }

        let handle = self.alloc(key, value.clone());
        match self.min {
            None => self.min = Some(handle),
            Some(min) => {
                self.splice_after(min, handle);
                if key < self.nodes[min].key {
                    self.min = Some(handle);
                }
            }
        }

        self.index.insert(value, handle);
        self.len += 1;
        Ok(handle)
    }

    /// Removes and returns the entry with the smallest key
    pub fn extract_min(&mut self) -> Result<(K, V)> {
        let z = self.min.ok_or(Error::EmptyQueue)?;

        // Promote every child of z to the root list
        if let Some(first_child) = self.nodes[z].child.take() {
            for child in self.siblings(first_child) {
                self.unlink(child);
                self.nodes[child].parent = None;
                self.splice_after(z, child);
            }
            self.nodes[z].degree = 0;
        }

        let next = self.nodes[z].right;
        self.unlink(z);

        if next == z {
            self.min = None;
        } else {
            self.min = Some(next);
            self.consolidate();
        }

        self.len -= 1;
        self.free.push(z);
        let node = &self.nodes[z];
        self.index.remove(&node.value);
        Ok((node.key, node.value.clone()))
    }

    /// Lowers the key of a queued value
    ///
    /// Returns `false` and changes nothing when `value` is not queued or
    /// `new_key` is greater than its current key. An equal key is accepted
    /// and leaves the structure untouched.
    pub fn decrease_key(&mut self, value: &V, new_key: K) -> bool {
        let Some(&x) = self.index.get(value) else {
            return false;
        };
        if new_key > self.nodes[x].key {
            return false;
        }

        self.nodes[x].key = new_key;
        if let Some(parent) = self.nodes[x].parent {
            if new_key < self.nodes[parent].key {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }

        if let Some(min) = self.min {
            if new_key < self.nodes[min].key {
                self.min = Some(x);
            }
        }

        true
    }

    /// Inserts `value`, or lowers its key if it is already queued
    ///
    /// Returns `false` only when the value is queued with a smaller key.
    pub fn push_or_decrease(&mut self, key: K, value: V) -> Result<bool> {
        if self.index.contains_key(&value) {
            Ok(self.decrease_key(&value, key))
        } else {
            self.insert(key, value)?;
            Ok(true)
        }
    }

    fn alloc(&mut self, key: K, value: V) -> NodeHandle {
        let handle = self.free.pop().unwrap_or(self.nodes.len());
        let node = Node {
            key,
            value,
            degree: 0,
            marked: false,
            parent: None,
            child: None,
            left: handle,
            right: handle,
        };
        if handle == self.nodes.len() {
            self.nodes.push(node);
        } else {
            self.nodes[handle] = node;
        }
        handle
    }

    /// Handles of the circular sibling list starting at `start`
    fn siblings(&self, start: NodeHandle) -> Vec<NodeHandle> {
        let mut out = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            out.push(current);
            current = self.nodes[current].right;
        }
        out
    }

    /// Inserts `node` to the right of `anchor` in anchor's circular list
    fn splice_after(&mut self, anchor: NodeHandle, node: NodeHandle) {
        let right = self.nodes[anchor].right;
        self.nodes[node].left = anchor;
        self.nodes[node].right = right;
        self.nodes[anchor].right = node;
        self.nodes[right].left = node;
    }

    /// Removes `node` from its circular list, leaving it a singleton
    fn unlink(&mut self, node: NodeHandle) {
        let left = self.nodes[node].left;
        let right = self.nodes[node].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[node].left = node;
        self.nodes[node].right = node;
    }

    fn consolidate(&mut self) {
        let Some(start) = self.min else { return };
        let roots = self.siblings(start);

        let mut by_degree: Vec<Option<NodeHandle>> = Vec::new();
        for root in roots {
            let mut x = root;
            let mut degree = self.nodes[x].degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree].take() else { break };
                if self.nodes[y].key < self.nodes[x].key {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                degree += 1;
            }
            by_degree[degree] = Some(x);
        }

        self.min = None;
        for root in by_degree.into_iter().flatten() {
            let smaller = match self.min {
                Some(min) => self.nodes[root].key < self.nodes[min].key,
                None => true,
            };
            if smaller {
                self.min = Some(root);
            }
        }
    }

    /// Makes root `child` a child of root `parent`
    fn link(&mut self, child: NodeHandle, parent: NodeHandle) {
        self.unlink(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[child].marked = false;

        match self.nodes[parent].child {
            None => self.nodes[parent].child = Some(child),
            Some(first) => self.splice_after(first, child),
        }
        self.nodes[parent].degree += 1;
    }

    /// Moves `node` from `parent`'s child list to the root list
    fn cut(&mut self, node: NodeHandle, parent: NodeHandle) {
        if self.nodes[parent].child == Some(node) {
            let right = self.nodes[node].right;
            self.nodes[parent].child = if right == node { None } else { Some(right) };
        }
        self.unlink(node);
        self.nodes[parent].degree -= 1;

        if let Some(min) = self.min {
            self.splice_after(min, node);
        }
        self.nodes[node].parent = None;
        self.nodes[node].marked = false;
        trace!("cut {:?} to the root list", self.nodes[node].value);
    }

    fn cascading_cut(&mut self, mut node: NodeHandle) {
        while let Some(parent) = self.nodes[node].parent {
            if !self.nodes[node].marked {
                self.nodes[node].marked = true;
                return;
            }
            self.cut(node, parent);
            node = parent;
        }
    }
}

impl<V, K> Default for FibonacciHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K> PriorityQueue<V, K> for FibonacciHeap<V, K>
where
    V: Vertex,
    K: PartialOrd + Copy + Debug,
{
    fn insert(&mut self, priority: K, value: V) -> Result<()> {
        FibonacciHeap::insert(self, priority, value).map(|_| ())
    }

    fn extract_min(&mut self) -> Result<(K, V)> {
        FibonacciHeap::extract_min(self)
    }

    fn push_or_decrease(&mut self, priority: K, value: V) -> Result<()> {
        FibonacciHeap::push_or_decrease(self, priority, value).map(|_| ())
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }
}
