//! Benchmark comparing Dijkstra and A* on the crucible search.
//!
//! Run with: cargo run --example crucible_benchmark --release
//!
//! Both variants search the same generated grids for each step range and must
//! agree on every cost; only the number of expanded states differs, which
//! shows up here as wall-clock time.

use aoc_solutions::utils::crucible::{CruciblePathfinder, Heuristic, StepRange};
use aoc_solutions::utils::grid::CostGrid;
use rayon::prelude::*;
use std::time::{Duration, Instant};

const GRID_SIZE: usize = 141;
const NUM_GRIDS: usize = 8;

/// Generate a random digit grid for benchmarking
fn generate_random_grid(seed: u64, size: usize, min_value: u32) -> CostGrid {
    let mut rng = seed;
    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                    min_value + ((rng >> 33) % u64::from(10 - min_value)) as u32
                })
                .collect()
        })
        .collect();
    CostGrid::from_rows(rows).expect("generated grids are rectangular and non-empty")
}

fn run(grids: &[CostGrid], steps: StepRange, heuristic: Heuristic) -> (Vec<Option<u64>>, Duration) {
    let start = Instant::now();
    let costs = grids
        .iter()
        .map(|grid| {
            CruciblePathfinder::corner_to_corner(grid, steps)
                .with_heuristic(heuristic)
                .min_cost()
        })
        .collect();
    (costs, start.elapsed())
}

fn run_parallel(grids: &[CostGrid], steps: StepRange) -> (Vec<Option<u64>>, Duration) {
    let start = Instant::now();
    let costs = grids
        .par_iter()
        .map(|grid| CruciblePathfinder::corner_to_corner(grid, steps).min_cost())
        .collect();
    (costs, start.elapsed())
}

fn main() {
    println!("Crucible Search Benchmark");
    println!("=========================\n");

    // Cells of 1..=9 keep the Manhattan estimate at one per move; 5..=9 scales it up.
    for min_value in [1, 5] {
        let grids: Vec<CostGrid> = (0..NUM_GRIDS)
            .map(|i| generate_random_grid(42 + i as u64, GRID_SIZE, min_value))
            .collect();

        for steps in [StepRange::CRUCIBLE, StepRange::ULTRA_CRUCIBLE] {
            println!(
                "=== {GRID_SIZE}x{GRID_SIZE}, {NUM_GRIDS} grids, cells {min_value}..=9, steps {steps} ==="
            );

            let (dijkstra, dijkstra_time) = run(&grids, steps, Heuristic::Zero);
            println!("Dijkstra (zero heuristic):   {:?}", dijkstra_time);

            let (astar, astar_time) = run(&grids, steps, Heuristic::Manhattan);
            println!("A* (scaled Manhattan):       {:?}", astar_time);

            let (parallel, parallel_time) = run_parallel(&grids, steps);
            println!("A* + par_iter:               {:?}", parallel_time);

            assert_eq!(dijkstra, astar, "heuristic changed a result");
            assert_eq!(astar, parallel, "parallel run changed a result");

            println!(
                "A* speedup over Dijkstra:    {:.2}x",
                dijkstra_time.as_secs_f64() / astar_time.as_secs_f64().max(f64::EPSILON)
            );
            println!("Sample costs: {:?}\n", &astar[..3]);
        }
    }
}
