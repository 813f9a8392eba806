//! Advent of Code Solver Library
//!
//! A small framework for writing one solver per year-day puzzle and running
//! them uniformly.
//!
//! - [`AocParser`] turns raw input into the data every part shares.
//! - [`PartSolver<N>`] answers part `N`; `#[derive(AocSolver)]` generates the
//!   [`Solver`] impl that dispatches between parts.
//! - [`SolverInstance`] holds parsed input and implements the type-erased
//!   [`DynSolver`], recording parse and solve timestamps.
//! - [`SolverRegistryBuilder`] collects factories, either explicitly or from
//!   plugins submitted with `#[derive(AutoRegisterSolver)]`, and builds an
//!   immutable, thread-shareable [`SolverRegistry`].
//!
//! ```ignore
//! use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
//!
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 1)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! pub struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<u32>;
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> { /* ... */ }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Generated plugin submissions go through this path
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
