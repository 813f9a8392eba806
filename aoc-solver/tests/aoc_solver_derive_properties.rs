//! Property tests for `#[derive(AocSolver)]` part dispatch and
//! `#[derive(AutoRegisterSolver)]` plugin discovery

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(Debug)]
struct Numbers {
    values: Vec<i64>,
    sum: Option<i64>,
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 4, tags = ["derive-test", "numbers"])]
struct SumThenDouble;

impl AocParser for SumThenDouble {
    type SharedData<'a> = Numbers;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int {l:?}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Numbers { values, sum: None })
    }
}

impl PartSolver<1> for SumThenDouble {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.values.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for SumThenDouble {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = match shared.sum {
            Some(sum) => sum,
            None => shared.values.iter().sum(),
        };
        Ok((sum * 2).to_string())
    }
}

fn to_input(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn derived_dispatch_matches_part_solver(
        values in prop::collection::vec(-50i64..50, 1..8),
        part in 1u8..=2,
    ) {
        let input = to_input(&values);
        let mut via_solver = SumThenDouble::parse(&input).unwrap();
        let mut direct = SumThenDouble::parse(&input).unwrap();

        let dispatched = <SumThenDouble as Solver>::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <SumThenDouble as PartSolver<1>>::solve(&mut direct),
            _ => <SumThenDouble as PartSolver<2>>::solve(&mut direct),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn derived_dispatch_rejects_unknown_parts(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumThenDouble::parse("1\n2").unwrap();
        match <SumThenDouble as Solver>::solve_part(&mut shared, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn part_one_cache_is_visible_to_part_two(values in prop::collection::vec(0i64..100, 1..8)) {
        let expected: i64 = values.iter().sum();
        let mut shared = SumThenDouble::parse(&to_input(&values)).unwrap();

        prop_assert_eq!(<SumThenDouble as Solver>::solve_part(&mut shared, 1).unwrap(), expected.to_string());
        prop_assert_eq!(shared.sum, Some(expected));
        prop_assert_eq!(<SumThenDouble as Solver>::solve_part(&mut shared, 2).unwrap(), (expected * 2).to_string());
    }
}

#[test]
fn test_derive_sets_part_count() {
    assert_eq!(<SumThenDouble as Solver>::PARTS, 2);
}

#[test]
fn test_submitted_plugin_is_discovered_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"derive-test"))
        .unwrap()
        .build();

    let info = registry.get_info(2016, 4).expect("plugin registered");
    assert_eq!(info.parts, 2);

    let mut solver = registry.create_solver(2016, 4, "5\n6").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "11");
    assert_eq!(solver.solve(2).unwrap().answer, "22");
}

#[test]
fn test_tag_filter_excludes_plugin() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(!registry.contains(2016, 4));
}
