//! Binary heap with insertion-order tie-breaking.

use std::fmt;

use crate::error::{Error, Result};

struct Entry<T> {
    seq: u64,
    item: T,
}

/// A priority queue ordered by a caller-supplied `precedes(a, b)` predicate.
///
/// `precedes(a, b)` returns `true` when `a` should leave the queue before
/// `b`. It need not be total: whenever neither element precedes the other,
/// the one added first is removed first.
///
/// # Complexity
///
/// `add` and `remove` are O(log n); `is_empty`, `len` and `peek` are O(1).
///
/// # Examples
///
/// ```
/// use u_parcel::queue::StablePriorityQueue;
///
/// // Shorter words first; equal lengths keep insertion order.
/// let mut q = StablePriorityQueue::new(|a: &&str, b: &&str| a.len() < b.len());
/// q.extend(["fig", "apple", "kiwi", "pea"]);
///
/// assert_eq!(q.remove().unwrap(), "fig");
/// assert_eq!(q.remove().unwrap(), "pea");
/// assert_eq!(q.remove().unwrap(), "kiwi");
/// assert_eq!(q.remove().unwrap(), "apple");
/// assert!(q.remove().is_err());
/// ```
pub struct StablePriorityQueue<T, F> {
    heap: Vec<Entry<T>>,
    next_seq: u64,
    precedes: F,
}

impl<T, F> StablePriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by `precedes`.
    pub fn new(precedes: F) -> Self {
        Self::with_capacity(0, precedes)
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, precedes: F) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            next_seq: 0,
            precedes,
        }
    }

    /// Inserts `item`, stamping it with the next sequence number.
    pub fn add(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, item });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the highest-priority element.
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn remove(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop().ok_or(Error::EmptyQueue)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(top.item)
    }

    /// Returns the element `remove` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|e| &e.item)
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Heap order: predicate first, then earlier sequence number.
    fn outranks(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.heap[i], &self.heap[j]);
        if (self.precedes)(&a.item, &b.item) {
            true
        } else if (self.precedes)(&b.item, &a.item) {
            false
        } else {
            a.seq < b.seq
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.outranks(i, parent) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && self.outranks(left, best) {
                best = left;
            }
            if right < n && self.outranks(right, best) {
                best = right;
            }
            if best == i {
                break;
            }
            self.heap.swap(i, best);
            i = best;
        }
    }
}

impl<T, F> Extend<T> for StablePriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Adds every element in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, F> fmt::Debug for StablePriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StablePriorityQueue")
            .field("len", &self.heap.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}
