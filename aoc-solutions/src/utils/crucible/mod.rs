//! Minimum-heat-loss routing for crucibles with bounded straight runs
//!
//! A crucible starts on one cell of a [`CostGrid`] and moves one cell at a
//! time north, east, south or west. Entering a cell costs that cell's value.
//! It may never reverse, must turn after `max` consecutive moves in one
//! direction, and may only turn (or stop on the goal) after at least `min`.
//!
//! The search runs over states of position, last direction and current run
//! length, so one cell appears as many distinct nodes. With
//! [`Heuristic::Manhattan`] it is A*; with [`Heuristic::Zero`] it is
//! Dijkstra. Both return the same cost.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::crucible::{CruciblePathfinder, Heuristic, StepRange};
//! use aoc_solutions::utils::grid::{CostGrid, Position};
//!
//! let grid: CostGrid = "111111111111\n999999999991\n999999999991\n999999999991\n999999999991"
//!     .parse()
//!     .unwrap();
//!
//! let ultra = CruciblePathfinder::corner_to_corner(&grid, StepRange::ULTRA_CRUCIBLE);
//! assert_eq!(ultra.min_cost(), Some(71));
//!
//! let dijkstra = ultra.with_heuristic(Heuristic::Zero);
//! assert_eq!(dijkstra.min_cost(), Some(71));
//!
//! let route = ultra.find_route().unwrap();
//! assert_eq!(route.cost(), 71);
//! assert_eq!(route.positions().last(), Some(Position::new(11, 4)));
//! ```
//!
//! [`CostGrid`]: crate::utils::grid::CostGrid

mod config;
mod route;
mod search;
mod state;


pub use config::{ConfigError, Heuristic, StepRange};
pub use route::Route;
pub use search::CruciblePathfinder;
pub use state::SearchState;
