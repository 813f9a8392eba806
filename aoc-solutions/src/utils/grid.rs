//! Rectangular grids of per-cell traversal costs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cell coordinate: `x` is the column, `y` the row, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Arrow drawn on a rendered map for a move in this direction
    pub const fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: expected a digit, found {found:?}")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}

/// Immutable row-major grid of traversal costs.
///
/// Always rectangular and non-empty; both are checked at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    width: usize,
    height: usize,
    costs: Vec<u32>,
}

impl CostGrid {
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let height = rows.len();
        let mut costs = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            costs.extend(cells);
        }

        Ok(Self {
            width,
            height,
            costs,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn cost(&self, pos: Position) -> Option<u32> {
        self.contains(pos)
            .then(|| self.costs[pos.y * self.width + pos.x])
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.width - 1, self.height - 1)
    }

    /// Cheapest cell anywhere in the grid
    pub fn min_cost(&self) -> u32 {
        self.costs.iter().copied().min().unwrap_or(0)
    }

    /// The adjacent cell in `direction`, if it is inside the grid.
    pub fn neighbour(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = match direction {
            Direction::North => Position::new(pos.x, pos.y.checked_sub(1)?),
            Direction::East => Position::new(pos.x + 1, pos.y),
            Direction::South => Position::new(pos.x, pos.y + 1),
            Direction::West => Position::new(pos.x.checked_sub(1)?, pos.y),
        };
        self.contains(next).then_some(next)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.costs.chunks_exact(self.width)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    /// Parses one row per line, one decimal digit per cell.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim_end()
                    .chars()
                    .enumerate()
                    .map(|(col_idx, ch)| {
                        ch.to_digit(10).ok_or(GridError::InvalidCell {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            found: ch,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}
