use crate::utils::grid::{CostGrid, Direction, Position};

/// A legal crucible route together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cost: u64,
    start: Position,
    /// Each cell entered, with the direction it was entered from
    moves: Vec<(Position, Direction)>,
}

impl Route {
    pub(crate) fn new(cost: u64, start: Position, moves: Vec<(Position, Direction)>) -> Self {
        Self { cost, start, moves }
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[(Position, Direction)] {
        &self.moves
    }

    /// Every visited cell in order, starting with the start cell.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.start).chain(self.moves.iter().map(|&(pos, _)| pos))
    }

    /// The grid's digits with each entered cell replaced by the arrow of the
    /// move that entered it, one line per row.
    pub fn render(&self, grid: &CostGrid) -> String {
        let mut canvas: Vec<Vec<char>> = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&cost| char::from_digit(cost, 10).unwrap_or('#'))
                    .collect()
            })
            .collect();

        for &(pos, direction) in &self.moves {
            if let Some(cell) = canvas.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
                *cell = direction.arrow();
            }
        }

        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
