//! Plugin discovery and tag filtering
//!
//! Two solvers register themselves through `#[derive(AutoRegisterSolver)]`;
//! the registry is then built from every plugin and from a tag-filtered subset.
//!
//! Run with: cargo run --example plugin_system

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {}", line)))
        })
        .collect()
}

/// Sum, then product
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["easy", "numbers"])]
pub struct Totals;

impl AocParser for Totals {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for Totals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Totals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Largest value
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 3, tags = ["numbers"])]
pub struct Largest;

impl AocParser for Largest {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for Largest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no numbers".into()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "1\n2\n3\n4\n5";

    println!("--- All plugins ---");
    let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
    for info in registry.iter_info() {
        let mut solver = registry.create_solver(info.year, info.day, input)?;
        for part in 1..=info.parts {
            let result = solver.solve(part)?;
            println!(
                "{}/{:02} Part {}: {} ({}us)",
                info.year,
                info.day,
                part,
                result.answer,
                result.duration().num_microseconds().unwrap_or(0)
            );
        }
    }

    println!("\n--- Tagged \"easy\" ---");
    let easy = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))?
        .build();
    for info in easy.iter_info() {
        println!("{}/{:02} with {} part(s)", info.year, info.day, info.parts);
    }

    Ok(())
}
