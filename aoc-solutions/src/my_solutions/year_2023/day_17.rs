use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::crucible::{CruciblePathfinder, StepRange};
use crate::utils::grid::CostGrid;

/// Clumsy Crucible: least heat loss from the lava pool to the factory.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["grid", "pathfinding"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = CostGrid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse::<CostGrid>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(shared, StepRange::CRUCIBLE)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(shared, StepRange::ULTRA_CRUCIBLE)
    }
}

fn least_heat_loss(grid: &CostGrid, steps: StepRange) -> Result<String, SolveError> {
    let pathfinder = CruciblePathfinder::corner_to_corner(grid, steps);
    let cost = pathfinder.min_cost().ok_or_else(|| {
        SolveError::SolveFailed(
            anyhow!(
                "no route from the top-left to the bottom-right corner of the {}x{} grid moving {steps} blocks at a time",
                grid.width(),
                grid.height()
            )
            .into(),
        )
    })?;

    debug!(%steps, cost, "least heat loss");
    Ok(cost.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverExt;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    #[test]
    fn test_example_part_1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 1).unwrap(), "102");
    }

    #[test]
    fn test_example_part_2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part_checked_range(&mut shared, 2).unwrap(), "94");
    }

    #[test]
    fn test_part_3_out_of_range() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert!(matches!(
            Solver::solve_part_checked_range(&mut shared, 3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_cell() {
        let err = Solver::parse("123\n4a6\n789").unwrap_err();
        assert!(
            matches!(&err, ParseError::InvalidFormat(msg) if msg == "line 2, column 2: expected a digit, found 'a'"),
            "{err}"
        );
    }

    #[test]
    fn test_unreachable_goal_fails_with_reason() {
        let mut shared = Solver::parse("111\n111\n111").unwrap();
        let err = Solver::solve_part_checked_range(&mut shared, 2).unwrap_err();
        match err {
            SolveError::SolveFailed(source) => {
                let message = source.to_string();
                assert!(message.contains("3x3"), "{message}");
                assert!(message.contains("4..=10"), "{message}");
            }
            other => panic!("expected SolveFailed, got {other:?}"),
        }
    }
}
