use super::config::{ConfigError, Heuristic, StepRange};
use super::route::Route;
use super::state::{FrontierEntry, SearchState};
use crate::utils::grid::{CostGrid, Direction, Position};
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, trace};

/// Minimum-cost route search for a crucible whose straight runs are bounded
/// by a [`StepRange`].
///
/// Cost is the sum of every cell entered; the start cell is free. A route may
/// only end on the goal once its final run is at least `steps.min()` long,
/// unless start and goal coincide.
///
/// # Example
///
/// ```
/// use aoc_solutions::utils::crucible::{CruciblePathfinder, StepRange};
/// use aoc_solutions::utils::grid::CostGrid;
///
/// let grid: CostGrid = "119\n911\n991".parse().unwrap();
/// let pathfinder = CruciblePathfinder::corner_to_corner(&grid, StepRange::CRUCIBLE);
/// assert_eq!(pathfinder.min_cost(), Some(4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CruciblePathfinder<'g> {
    grid: &'g CostGrid,
    start: Position,
    goal: Position,
    steps: StepRange,
    heuristic: Heuristic,
}

/// Best cost per state, plus the predecessor of each state when a route is wanted.
struct Explored {
    best: HashMap<SearchState, u64>,
    came_from: Option<HashMap<SearchState, SearchState>>,
}

impl<'g> CruciblePathfinder<'g> {
    pub fn new(
        grid: &'g CostGrid,
        start: Position,
        goal: Position,
        steps: StepRange,
    ) -> Result<Self, ConfigError> {
        if !grid.contains(start) {
            return Err(ConfigError::StartOutOfBounds {
                position: start,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if !grid.contains(goal) {
            return Err(ConfigError::EndOutOfBounds {
                position: goal,
                width: grid.width(),
                height: grid.height(),
            });
        }

        Ok(Self {
            grid,
            start,
            goal,
            steps,
            heuristic: Heuristic::default(),
        })
    }

    /// Top-left to bottom-right, the only pairing that can never be out of bounds.
    pub fn corner_to_corner(grid: &'g CostGrid, steps: StepRange) -> Self {
        Self {
            grid,
            start: Position::new(0, 0),
            goal: grid.bottom_right(),
            steps,
            heuristic: Heuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn steps(&self) -> StepRange {
        self.steps
    }

    /// Cost of the cheapest legal route, or `None` if the goal is unreachable.
    pub fn min_cost(&self) -> Option<u64> {
        self.search(false).map(|(cost, _, _)| cost)
    }

    /// The cheapest legal route itself. Its cost always equals [`Self::min_cost`].
    pub fn find_route(&self) -> Option<Route> {
        let (cost, goal_state, explored) = self.search(true)?;
        let came_from = explored.came_from.unwrap_or_default();

        let mut moves = Vec::new();
        let mut current = goal_state;
        while let Some(direction) = current.direction {
            moves.push((current.position, direction));
            current = *came_from
                .get(&current)
                .expect("every non-start state on a route has a predecessor");
        }
        moves.reverse();

        Some(Route::new(cost, self.start, moves))
    }

    fn is_goal(&self, state: &SearchState) -> bool {
        state.position == self.goal && (state.is_start() || state.run_length >= self.steps.min())
    }

    fn entry(&self, state: SearchState, cost: u64, cheapest_cell: u32) -> FrontierEntry {
        let heuristic = self
            .heuristic
            .estimate(state.position, self.goal, cheapest_cell);
        FrontierEntry {
            estimate: cost.saturating_add(heuristic),
            heuristic,
            cost,
            state,
        }
    }

    fn search(&self, record_path: bool) -> Option<(u64, SearchState, Explored)> {
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            start = %self.start,
            goal = %self.goal,
            steps = %self.steps,
            heuristic = ?self.heuristic,
            "starting crucible search"
        );

        let cheapest_cell = self.grid.min_cost();
        let start = SearchState::start(self.start);
        let mut explored = Explored {
            best: HashMap::from([(start, 0)]),
            came_from: record_path.then(HashMap::new),
        };
        let mut frontier = BinaryHeap::from([self.entry(start, 0, cheapest_cell)]);
        let mut expanded = 0usize;

        while let Some(FrontierEntry { cost, state, .. }) = frontier.pop() {
            if explored.best.get(&state).is_some_and(|&known| cost > known) {
                continue;
            }

            if self.is_goal(&state) {
                debug!(cost, expanded, "crucible search reached goal");
                return Some((cost, state, explored));
            }

            expanded += 1;
            trace!(?state, cost, "expanding");

            for direction in Direction::ALL {
                let Some(run_length) = state.run_after(direction, self.steps) else {
                    continue;
                };
                let Some(position) = self.grid.neighbour(state.position, direction) else {
                    continue;
                };

                let next = SearchState {
                    position,
                    direction: Some(direction),
                    run_length,
                };
                let step_cost = self
                    .grid
                    .cost(position)
                    .expect("neighbour lies inside the grid");
                let tentative = cost + u64::from(step_cost);

                if explored
                    .best
                    .get(&next)
                    .is_none_or(|&known| tentative < known)
                {
                    explored.best.insert(next, tentative);
                    if let Some(came_from) = explored.came_from.as_mut() {
                        came_from.insert(next, state);
                    }
                    frontier.push(self.entry(next, tentative, cheapest_cell));
                }
            }
        }

        debug!(expanded, "crucible search exhausted without reaching goal");
        None
    }
}
