//! Property tests for the crucible pathfinder against an independent reference search

use aoc_solutions::utils::crucible::{CruciblePathfinder, Heuristic, StepRange};
use aoc_solutions::utils::grid::{CostGrid, Position};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// (dx, dy) per direction, indexed so that `(d + 2) % 4` is the reverse
const DELTAS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Uniform-cost search over (x, y, last direction, run) written directly
/// from the movement rules, using an ordered set as its queue.
fn reference_cost(rows: &[Vec<u32>], min: u32, max: u32) -> Option<u64> {
    let height = rows.len() as isize;
    let width = rows[0].len() as isize;
    let goal = (width - 1, height - 1);

    type Node = (isize, isize, Option<usize>, u32);
    let start: Node = (0, 0, None, 0);
    let mut dist: BTreeMap<Node, u64> = BTreeMap::from([(start, 0)]);
    let mut queue: BTreeSet<(u64, Node)> = BTreeSet::from([(0, start)]);

    while let Some((cost, node)) = queue.pop_first() {
        let (x, y, dir, run) = node;
        if (x, y) == goal && (dir.is_none() || run >= min) {
            return Some(cost);
        }

        for (d, (dx, dy)) in DELTAS.iter().enumerate() {
            let run_next = match dir {
                None => 1,
                Some(prev) if prev == d => {
                    if run == max {
                        continue;
                    }
                    run + 1
                }
                Some(prev) if (prev + 2) % 4 == d => continue,
                Some(_) => {
                    if run < min {
                        continue;
                    }
                    1
                }
            };

            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx >= width || ny >= height {
                continue;
            }

            let next: Node = (nx, ny, Some(d), run_next);
            let next_cost = cost + u64::from(rows[ny as usize][nx as usize]);
            if dist.get(&next).is_none_or(|&known| next_cost < known) {
                if let Some(&old) = dist.get(&next) {
                    queue.remove(&(old, next));
                }
                dist.insert(next, next_cost);
                queue.insert((next_cost, next));
            }
        }
    }
    None
}

/// Plain cell-graph shortest path with no movement constraints.
fn unconstrained_cost(rows: &[Vec<u32>]) -> u64 {
    let height = rows.len();
    let width = rows[0].len();
    let mut dist = vec![vec![u64::MAX; width]; height];
    let mut queue = BTreeSet::from([(0u64, 0usize, 0usize)]);
    dist[0][0] = 0;

    while let Some((cost, x, y)) = queue.pop_first() {
        if cost > dist[y][x] {
            continue;
        }
        for (dx, dy) in DELTAS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if nx >= width || ny >= height {
                continue;
            }
            let next_cost = cost + u64::from(rows[ny][nx]);
            if next_cost < dist[ny][nx] {
                dist[ny][nx] = next_cost;
                queue.insert((next_cost, nx, ny));
            }
        }
    }
    dist[height - 1][width - 1]
}

fn rows_strategy(max_side: usize) -> impl Strategy<Value = Vec<Vec<u32>>> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(0u32..=9, width), height)
    })
}

fn steps_strategy() -> impl Strategy<Value = StepRange> {
    (1u32..=4, 0u32..=3).prop_map(|(min, extra)| StepRange::new(min, min + extra).unwrap())
}

fn min_cost(grid: &CostGrid, steps: StepRange) -> Option<u64> {
    CruciblePathfinder::corner_to_corner(grid, steps).min_cost()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_matches_reference_search(rows in rows_strategy(6), steps in steps_strategy()) {
        let grid = CostGrid::from_rows(rows.clone()).unwrap();
        prop_assert_eq!(
            min_cost(&grid, steps),
            reference_cost(&rows, steps.min(), steps.max())
        );
    }

    #[test]
    fn prop_forced_turns_match_reference(rows in rows_strategy(6)) {
        let grid = CostGrid::from_rows(rows.clone()).unwrap();
        let steps = StepRange::new(1, 1).unwrap();
        prop_assert_eq!(min_cost(&grid, steps), reference_cost(&rows, 1, 1));
    }

    #[test]
    fn prop_unbounded_runs_equal_plain_shortest_path(rows in rows_strategy(7)) {
        let grid = CostGrid::from_rows(rows.clone()).unwrap();
        let longest = grid.width().max(grid.height()) as u32;
        let steps = StepRange::new(1, longest).unwrap();
        prop_assert_eq!(min_cost(&grid, steps), Some(unconstrained_cost(&rows)));
    }

    #[test]
    fn prop_heuristic_does_not_change_cost(rows in rows_strategy(8), steps in steps_strategy()) {
        let grid = CostGrid::from_rows(rows).unwrap();
        let astar = CruciblePathfinder::corner_to_corner(&grid, steps);
        let dijkstra = astar.with_heuristic(Heuristic::Zero);
        prop_assert_eq!(astar.min_cost(), dijkstra.min_cost());
    }

    #[test]
    fn prop_repeated_search_is_identical(rows in rows_strategy(8), steps in steps_strategy()) {
        let grid = CostGrid::from_rows(rows).unwrap();
        let pathfinder = CruciblePathfinder::corner_to_corner(&grid, steps);
        prop_assert_eq!(pathfinder.min_cost(), pathfinder.min_cost());
        prop_assert_eq!(pathfinder.find_route(), pathfinder.find_route());
    }

    #[test]
    fn prop_route_cost_is_sum_of_entered_cells(rows in rows_strategy(8), steps in steps_strategy()) {
        let grid = CostGrid::from_rows(rows).unwrap();
        let pathfinder = CruciblePathfinder::corner_to_corner(&grid, steps);
        let route = pathfinder.find_route();
        prop_assert_eq!(route.as_ref().map(|r| r.cost()), pathfinder.min_cost());

        if let Some(route) = route {
            let positions: Vec<Position> = route.positions().collect();
            let paid: u64 = positions[1..]
                .iter()
                .map(|&pos| u64::from(grid.cost(pos).unwrap()))
                .sum();
            prop_assert_eq!(paid, route.cost());
            prop_assert_eq!(positions.first().copied(), Some(Position::new(0, 0)));
            prop_assert_eq!(positions.last().copied(), Some(grid.bottom_right()));
            for pair in positions.windows(2) {
                prop_assert_eq!(pair[0].manhattan(pair[1]), 1);
            }
        }
    }

    #[test]
    fn prop_raising_max_never_costs_more(rows in rows_strategy(7), min in 1u32..=3, max_extra in 0u32..=3) {
        let grid = CostGrid::from_rows(rows).unwrap();
        let narrow = StepRange::new(min, min + max_extra).unwrap();
        let wide = StepRange::new(min, min + max_extra + 1).unwrap();

        if let Some(narrow_cost) = min_cost(&grid, narrow) {
            let wide_cost = min_cost(&grid, wide);
            prop_assert!(wide_cost.is_some_and(|c| c <= narrow_cost));
        }
    }

    #[test]
    fn prop_lowering_min_never_costs_more(rows in rows_strategy(7), min in 2u32..=4, max_extra in 0u32..=3) {
        let grid = CostGrid::from_rows(rows).unwrap();
        let strict = StepRange::new(min, min + max_extra).unwrap();
        let relaxed = StepRange::new(min - 1, min + max_extra).unwrap();

        if let Some(strict_cost) = min_cost(&grid, strict) {
            let relaxed_cost = min_cost(&grid, relaxed);
            prop_assert!(relaxed_cost.is_some_and(|c| c <= strict_cost));
        }
    }

    #[test]
    fn prop_single_row_costs_its_tail(cells in prop::collection::vec(0u32..=9, 1..=12)) {
        let grid = CostGrid::from_rows(vec![cells.clone()]).unwrap();
        let steps = StepRange::new(1, cells.len() as u32).unwrap();
        let expected: u64 = cells[1..].iter().copied().map(u64::from).sum();
        prop_assert_eq!(min_cost(&grid, steps), Some(expected));
    }
}

#[test]
fn test_reference_agrees_on_city_example() {
    let city = "2413432311323\n3215453535623\n3255245654254\n3446585845452\n4546657867536\n\
                1438598798454\n4457876987766\n3637877979653\n4654967986887\n4564679986453\n\
                1224686865563\n2546548887735\n4322674655533";
    let grid: CostGrid = city.parse().unwrap();
    let rows: Vec<Vec<u32>> = grid.rows().map(<[u32]>::to_vec).collect();

    assert_eq!(reference_cost(&rows, 1, 3), Some(102));
    assert_eq!(reference_cost(&rows, 4, 10), Some(94));
    assert_eq!(min_cost(&grid, StepRange::CRUCIBLE), Some(102));
}
