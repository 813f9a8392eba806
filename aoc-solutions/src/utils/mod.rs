//! Shared building blocks for solutions

pub mod crucible;
pub mod grid;
