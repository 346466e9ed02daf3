use super::direction::Direction;
use super::grid::Grid;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state: the occupied cells plus the current and requested headings.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the cells behind the head, with the tail end at the
    /// front and the neck at the back
    pub(super) body: VecDeque<Position>,

    /// The heading currently being applied to movement
    pub(super) direction: Direction,

    /// The latest requested heading, applied at the next tick unless it would
    /// reverse `direction`
    pub(super) pending: Option<Direction>,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing in `direction`,
    /// with `length` total cells laid out behind the head opposite the
    /// direction of travel (clipped at the grid edge, so callers should keep
    /// the head away from it).
    pub(super) fn new(head: Position, direction: Direction, length: usize, grid: Grid) -> Snake {
        let rearward = direction.reverse();
        let mut body = VecDeque::with_capacity(length);
        for pos in std::iter::successors(Some(head), |&p| rearward.advance(p, grid))
            .skip(1)
            .take(length.saturating_sub(1))
        {
            body.push_front(pos);
        }
        Snake {
            head,
            body,
            direction,
            pending: None,
        }
    }

    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// The positions of the cells behind the head (tail end first)
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// All occupied cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().rev().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether `pos` is occupied by any cell of the snake, the head and the
    /// about-to-be-vacated tail included
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.cells().any(|cell| cell == pos)
    }

    /// Buffer a requested heading.  A request that would exactly reverse the
    /// *committed* heading is dropped — comparing against the committed value
    /// rather than the buffer means rapid inputs within one tick still cannot
    /// produce a reversal.  Otherwise the latest request wins.
    pub(super) fn request_turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = Some(direction);
        }
    }

    /// Promote the buffered heading to committed at the start of a tick.
    /// Re-checks the reversal rule in case of reordering.
    pub(super) fn resolve_turn(&mut self) {
        if let Some(direction) = self.pending.take() {
            if direction != self.direction.reverse() {
                self.direction = direction;
            }
        }
    }

    /// The cell the head would move into this tick, or `None` at a wall
    pub(super) fn next_head(&self, grid: Grid) -> Option<Position> {
        self.direction.advance(self.head, grid)
    }

    /// Commit a new head cell; the old head becomes the neck
    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_back(self.head);
        self.head = pos;
    }

    /// Vacate the tail cell (skipped on the tick the snake grows)
    pub(super) fn drop_tail(&mut self) {
        let _ = self.body.pop_front();
    }
}
