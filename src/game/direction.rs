use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Step `pos` one cell in this direction.  Returns `None` when the step
    /// would leave the grid; there is no wraparound.
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = x.checked_add(1)?,
            Direction::South => y = y.checked_add(1)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        let next = Position { x, y };
        grid.contains(next).then_some(next)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::South, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::East, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::West, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::North, Position::new(2, 0), None)]
    #[case(Direction::South, Position::new(2, 14), None)]
    #[case(Direction::East, Position::new(9, 7), None)]
    #[case(Direction::West, Position::new(0, 7), None)]
    fn test_advance(#[case] d: Direction, #[case] pos: Position, #[case] r: Option<Position>) {
        assert_eq!(d.advance(pos, Grid::new(10, 15)), r);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::West, Direction::East)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
