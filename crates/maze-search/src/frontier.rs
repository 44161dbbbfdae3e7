//! Frontier disciplines.
//!
//! A frontier holds discovered-but-not-expanded [`Entry`] values. Pushing
//! is always cheap; entries for cells that were expanded in the meantime are
//! left in place and skipped by the search loop when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use maze_core::Cell;

/// A discovered cell waiting to be expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The discovered cell.
    pub cell: Cell,
    /// The expanded cell that discovered it (`None` for the start).
    pub parent: Option<Cell>,
    /// Steps from the start along the path this entry extends.
    pub g: i32,
}

/// Ordering policy over pending entries.
pub trait Frontier {
    /// Add an entry. `key` is its priority; disciplines that do not order
    /// by priority ignore it.
    fn push(&mut self, key: i32, entry: Entry);

    /// Remove the next entry.
    fn pop(&mut self) -> Option<Entry>;

    /// The entry [`pop`](Self::pop) would return next.
    fn peek(&self) -> Option<&Entry>;

    /// Number of pending entries, stale ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// FIFO / LIFO
// ---------------------------------------------------------------------------

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Entry>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, _key: i32, entry: Entry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<&Entry> {
        self.queue.front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Entry>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, _key: i32, entry: Entry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.stack.pop()
    }

    fn peek(&self) -> Option<&Entry> {
        self.stack.last()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Heap item ordered by `(key, cell, seq)`, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Keyed {
    key: i32,
    seq: u64,
    entry: Entry,
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.entry.cell.cmp(&self.entry.cell))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue. Equal keys come out by cell (row, then column), then
/// in push order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Keyed>,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, key: i32, entry: Entry) {
        self.heap.push(Keyed {
            key,
            seq: self.seq,
            entry,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|k| k.entry)
    }

    fn peek(&self) -> Option<&Entry> {
        self.heap.peek().map(|k| &k.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
