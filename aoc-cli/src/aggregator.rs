//! Result aggregator for ordering parallel solver results
//!
//! Workers finish in any order; output must follow (year, day, part). Two
//! min-heaps track what is still expected and what has arrived early.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    pub fn new(year: u16, day: u8, part: u8) -> Self {
        Self { year, day, part }
    }

    /// One key per part of every work item
    pub fn for_work(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| w.parts.clone().map(move |p| ResultKey::new(w.year, w.day, p)))
            .collect()
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self::new(r.year, r.day, r.part)
    }
}

/// Early arrival, ordered by key only
struct Buffered(SolverResult);

impl Buffered {
    fn key(&self) -> ResultKey {
        ResultKey::from(&self.0)
    }
}

impl Ord for Buffered {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Buffered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Buffered {}

impl PartialEq for Buffered {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Reverse<Buffered>>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Reverse(Buffered(result)));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(Reverse(top))) =
            (self.expected.peek(), self.pending.peek())
        {
            if top.key() != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(Reverse(Buffered(result))) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Remaining buffered results in order, for when some never arrived
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|Reverse(b)| b.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }

    /// Keys still waiting on a result
    pub fn outstanding(&self) -> usize {
        self.expected.len()
    }
}
