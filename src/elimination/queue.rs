//! An index-addressable binary heap over point weights. The entry with the largest weight (the
//! smallest key, since keys are negated weights) is always at the top; ties go to the lower index.
//! Popped entries are gone from the queue entirely, and any later attempt to reposition them is
//! an error rather than a silent no-op.

use crate::errors::EliminationError;
use std::cmp::Ordering;

pub struct WeightQueue {
    /// Point indices in heap order
    heap: Vec<usize>,

    /// For each point index, its position in `heap` while it is still active
    positions: Vec<Option<usize>>,

    weights: Vec<f64>,
}

impl WeightQueue {
    /// Build a queue holding every index of `weights`, in O(n).
    pub fn build(weights: &[f64]) -> Result<Self, EliminationError> {
        let n = weights.len();
        let mut heap = Vec::new();
        let mut positions = Vec::new();
        let mut owned = Vec::new();
        heap.try_reserve_exact(n)?;
        positions.try_reserve_exact(n)?;
        owned.try_reserve_exact(n)?;

        heap.extend(0..n);
        positions.extend((0..n).map(Some));
        owned.extend_from_slice(weights);

        let mut queue = Self {
            heap,
            positions,
            weights: owned,
        };
        for i in (0..n / 2).rev() {
            queue.sift_down(i);
        }

        Ok(queue)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        matches!(self.positions.get(index), Some(Some(_)))
    }

    /// The current weight of an active entry.
    pub fn weight(&self, index: usize) -> Option<f64> {
        if self.is_active(index) {
            Some(self.weights[index])
        } else {
            None
        }
    }

    /// The index that `pop_min` would return next, without removing it.
    pub fn peek_min(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Remove and return the index with the largest weight.
    pub fn pop_min(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.positions[top] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Set a new weight for an active entry and move it to its place in the heap. Lowering the
    /// weight raises the key, so the entry generally moves towards the leaves.
    pub fn decrease_key(&mut self, index: usize, weight: f64) -> Result<(), EliminationError> {
        let position = match self.positions.get(index) {
            Some(Some(p)) => *p,
            _ => return Err(EliminationError::InactiveQueueEntry(index)),
        };

        self.weights[index] = weight;
        let position = self.sift_up(position);
        self.sift_down(position);
        Ok(())
    }

    /// Whether the entry for index `a` belongs above the entry for index `b`.
    fn outranks(&self, a: usize, b: usize) -> bool {
        match self.weights[a].total_cmp(&self.weights[b]) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => a < b,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i]] = Some(i);
        self.positions[self.heap[j]] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.outranks(self.heap[i], self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && self.outranks(self.heap[left], self.heap[best]) {
                best = left;
            }
            if right < n && self.outranks(self.heap[right], self.heap[best]) {
                best = right;
            }
            if best == i {
                return;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
