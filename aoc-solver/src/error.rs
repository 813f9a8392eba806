//! Error types for the solver library

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not follow the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Input ended before all required data was read
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error raised while solving one part of a puzzle
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares this part but has no implementation for it yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part is zero or above the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The solver ran but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error returned by registry lookups and solver creation
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the supported calendar")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error returned while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register year {0} day {1}: outside the supported calendar")]
    InvalidYearDay(u16, u8),
}
