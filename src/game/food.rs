use super::grid::Grid;
use super::snake::Snake;
use rand::Rng;
use ratatui::layout::Position;

/// Pick a uniformly random cell not occupied by the snake.
///
/// Rejection sampling: draw until the candidate misses the snake.  With the
/// grid far larger than the snake this takes a couple of draws; on a nearly
/// full grid it degrades to O(free cells) expected draws, which is fine at
/// this scale.  Callers must ensure at least one free cell exists.
pub(super) fn spawn<R: Rng>(grid: Grid, snake: &Snake, rng: &mut R) -> Position {
    debug_assert!(
        snake.len() < grid.cell_count(),
        "food cannot spawn on a full grid"
    );
    loop {
        let pos = Position::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if !snake.occupies(pos) {
            return pos;
        }
    }
}
