use super::config::StepRange;
use crate::utils::grid::{Direction, Position};
use std::cmp::Ordering;

/// A node of the search graph.
///
/// The same cell reached from a different direction, or after a different
/// number of straight moves, is a different state with its own best cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchState {
    pub position: Position,
    /// Direction of the move that entered `position`; `None` only at the start
    pub direction: Option<Direction>,
    /// Consecutive moves made in `direction`
    pub run_length: u32,
}

impl SearchState {
    pub fn start(position: Position) -> Self {
        Self {
            position,
            direction: None,
            run_length: 0,
        }
    }

    pub fn is_start(&self) -> bool {
        self.direction.is_none()
    }

    /// Run length after moving in `next`, or `None` when the step rules
    /// forbid that move from this state. Grid bounds are not checked here.
    pub fn run_after(&self, next: Direction, steps: StepRange) -> Option<u32> {
        let Some(current) = self.direction else {
            return Some(1);
        };

        if next == current.reverse() {
            None
        } else if next == current {
            (self.run_length < steps.max()).then_some(self.run_length + 1)
        } else {
            (self.run_length >= steps.min()).then_some(1)
        }
    }
}

/// Frontier entry; `BinaryHeap` pops the lowest estimate first, then the
/// lowest heuristic, then the smallest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub estimate: u64,
    pub heuristic: u64,
    pub cost: u64,
    pub state: SearchState,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.state.cmp(&self.state))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
