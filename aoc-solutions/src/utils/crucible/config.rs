//! Search configuration and its validation.

use crate::utils::grid::{GridError, Position};
use std::fmt;
use thiserror::Error;

/// Inclusive bounds on how many cells a crucible may travel in a straight
/// line: at least `min` before turning or stopping, at most `max` before it
/// must turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRange {
    min: u32,
    max: u32,
}

impl StepRange {
    /// At most three blocks in a row, no minimum
    pub const CRUCIBLE: StepRange = StepRange { min: 1, max: 3 };
    /// Four to ten blocks in a row
    pub const ULTRA_CRUCIBLE: StepRange = StepRange { min: 4, max: 10 };

    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min == 0 {
            return Err(ConfigError::ZeroMinStep);
        }
        if min > max {
            return Err(ConfigError::InvertedStepRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> u32 {
        self.min
    }

    pub fn max(self) -> u32 {
        self.max
    }
}

impl fmt::Display for StepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Estimate of the cost still to pay from a position to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// No estimate: plain uniform-cost (Dijkstra) search
    Zero,
    /// Manhattan distance scaled by the cheapest cell in the grid
    #[default]
    Manhattan,
}

impl Heuristic {
    /// Never exceeds the true remaining cost, since each of the at least
    /// `manhattan` remaining moves enters a cell costing `cheapest_cell` or more.
    pub(crate) fn estimate(self, from: Position, goal: Position, cheapest_cell: u32) -> u64 {
        match self {
            Heuristic::Zero => 0,
            Heuristic::Manhattan => {
                (from.manhattan(goal) as u64).saturating_mul(u64::from(cheapest_cell))
            }
        }
    }
}

/// Rejected search input, reported before any search starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("start {position} lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("end {position} lies outside the {width}x{height} grid")]
    EndOutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("minimum run length must be at least 1")]
    ZeroMinStep,
    #[error("minimum run length {min} exceeds maximum {max}")]
    InvertedStepRange { min: u32, max: u32 },
}
