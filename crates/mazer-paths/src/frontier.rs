//! Frontier disciplines: FIFO queue, LIFO stack and a min-priority queue.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use mazer_core::Point;

use crate::traits::Frontier;

/// Ordering key for the priority queue. Smaller keys are popped first,
/// compared on `primary` then `secondary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    pub primary: i32,
    pub secondary: i32,
}

impl Key {
    #[inline]
    pub const fn new(primary: i32, secondary: i32) -> Self {
        Self { primary, secondary }
    }
}

/// First discovered, first expanded.
#[derive(Debug, Default)]
pub struct Fifo {
    queue: VecDeque<Point>,
}

impl Fifo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Fifo {
    fn push(&mut self, p: Point, _key: Key) {
        self.queue.push_back(p);
    }

    fn pop(&mut self) -> Option<Point> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Most recently discovered, first expanded.
#[derive(Debug, Default)]
pub struct Lifo {
    stack: Vec<Point>,
}

impl Lifo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Lifo {
    fn push(&mut self, p: Point, _key: Key) {
        self.stack.push(p);
    }

    fn pop(&mut self) -> Option<Point> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// An entry in the priority queue.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    key: Key,
    /// Monotonically increasing counter used to break ties.
    /// Lower = inserted earlier = popped first.
    seq: u64,
    pos: Point,
}

/// Min-priority queue keyed by [`Key`].
///
/// Entries with equal keys are popped in insertion order, so a search is
/// fully deterministic for a given grid.
#[derive(Debug, Default)]
pub struct MinQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for MinQueue {
    fn push(&mut self, pos: Point, key: Key) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { key, seq, pos }));
    }

    fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|Reverse(e)| e.pos)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}
