use super::direction::Direction;
use super::food;
use super::grid::Grid;
use super::snake::Snake;
use crate::config::Tempo;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;
use std::time::Duration;

/// The coarse lifecycle state of a round
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// What a single simulation step did.  The presentation layer maps these to
/// audio cues; the collision variants report why the round ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MoveOutcome {
    /// The snake moved into an empty cell
    Moved,
    /// The snake moved onto the food cell and grew
    Ate,
    /// The head would have left the grid
    WallCollision,
    /// The head would have landed on the snake's own body
    SelfCollision,
}

/// The complete simulation state of one round.  Created whole by [`new`] and
/// replaced wholesale on restart; the only mutation path while a round runs
/// is [`step`] plus the input buffer.
///
/// [`new`]: GameState::new
/// [`step`]: GameState::step
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(super) grid: Grid,
    pub(super) snake: Snake,
    pub(super) food: Position,
    pub(super) score: u32,
    pub(super) level: u32,
    pub(super) interval: Duration,
    pub(super) tempo: Tempo,
    pub(super) phase: Phase,
}

impl GameState {
    /// Start a round: score 0, level 1, tick interval at the tempo's base, a
    /// fresh snake centered on the grid moving east, and food spawned clear
    /// of it.
    pub(crate) fn new<R: Rng>(grid: Grid, tempo: Tempo, rng: &mut R) -> GameState {
        let snake = Snake::new(
            grid.center(),
            Direction::East,
            consts::INITIAL_SNAKE_LENGTH,
            grid,
        );
        let food = food::spawn(grid, &snake, rng);
        GameState {
            grid,
            snake,
            food,
            score: 0,
            level: 1,
            interval: tempo.initial(),
            tempo,
            phase: Phase::Playing,
        }
    }

    /// Advance the simulation by one tick.  Returns `None` without touching
    /// anything unless the phase is Playing.
    ///
    /// The buffered heading is promoted first, then the head moves one cell.
    /// Collisions are judged against the grid edge and the *pre-move* body —
    /// the tail cell counts even though it is about to be vacated — and on a
    /// collision the attempted head is not committed and the phase becomes
    /// GameOver.  Landing on food grows the snake by one, scores a point,
    /// raises the level every [`consts::POINTS_PER_LEVEL`]th point (shrinking
    /// the tick interval along the tempo curve), and respawns the food.
    pub(crate) fn step<R: Rng>(&mut self, rng: &mut R) -> Option<MoveOutcome> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.snake.resolve_turn();
        let Some(head) = self.snake.next_head(self.grid) else {
            self.phase = Phase::GameOver;
            return Some(MoveOutcome::WallCollision);
        };
        if self.snake.occupies(head) {
            self.phase = Phase::GameOver;
            return Some(MoveOutcome::SelfCollision);
        }
        self.snake.push_head(head);
        if head == self.food {
            self.score += 1;
            if self.score % consts::POINTS_PER_LEVEL == 0 {
                self.level += 1;
                self.interval = self.tempo.interval_for(self.level);
            }
            if self.snake.len() == self.grid.cell_count() {
                // nowhere left to put food; the round is over
                self.phase = Phase::GameOver;
            } else {
                self.food = food::spawn(self.grid, &self.snake, rng);
            }
            Some(MoveOutcome::Ate)
        } else {
            self.snake.drop_tail();
            Some(MoveOutcome::Moved)
        }
    }

    /// Buffer a directional intent.  Works while Playing or Paused (a turn
    /// requested during a pause takes effect on resume); ignored once the
    /// round is over.
    pub(crate) fn request_direction(&mut self, direction: Direction) {
        if self.phase != Phase::GameOver {
            self.snake.request_turn(direction);
        }
    }

    /// Toggle between Playing and Paused.  Returns `false` (and does
    /// nothing) once the round is over — there is no GameOver → Paused
    /// transition.
    pub(crate) fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                true
            }
            Phase::GameOver => false,
        }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Position {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn level(&self) -> u32 {
        self.level
    }

    /// The current tick interval (shrinks as the level climbs)
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }
}
