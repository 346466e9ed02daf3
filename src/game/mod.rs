mod direction;
mod food;
mod grid;
mod snake;
mod state;
use self::direction::Direction;
pub(crate) use self::grid::Grid;
use self::state::{GameState, MoveOutcome, Phase};
use crate::app::Screen;
use crate::audio::Audio;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::tick::Ticker;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event, MouseEventKind};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// One round of snake, wired to the terminal: the simulation state plus the
/// tick scheduler, the rng feeding the food spawner, and the audio cues.
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    ticker: Ticker,
    audio: Option<Audio>,
    config: Config,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: Config, mut rng: R) -> Game<R> {
        let state = GameState::new(config.grid, config.tempo, &mut rng);
        let ticker = Ticker::new(state.interval());
        let audio = if config.sound { Audio::new() } else { None };
        Game {
            rng,
            state,
            ticker,
            audio,
            config,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.state.phase() == Phase::Playing {
            let wait = self.ticker.remaining(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick(Instant::now());
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run one due simulation step and route the outcome to the audio cues.
    /// A level-up changes the state's tick interval, so the ticker is
    /// recadenced after every meal.
    fn tick(&mut self, now: Instant) {
        if !self.ticker.fire(now) {
            return;
        }
        let Some(outcome) = self.state.step(&mut self.rng) else {
            return;
        };
        if let Some(audio) = self.audio.as_ref() {
            match outcome {
                MoveOutcome::Moved => audio.play_move_cue(),
                MoveOutcome::Ate => {
                    audio.play_move_cue();
                    audio.play_eat_cue();
                }
                MoveOutcome::WallCollision | MoveOutcome::SelfCollision => (),
            }
        }
        if outcome == MoveOutcome::Ate {
            self.ticker.set_interval(self.state.interval());
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if event == Event::FocusLost {
            if self.state.phase() == Phase::Playing {
                self.toggle_pause();
            }
            return None;
        }
        if let Event::Mouse(ev) = event {
            // pointer input: a click restarts a finished round
            if matches!(ev.kind, MouseEventKind::Down(_)) && self.state.phase() == Phase::GameOver
            {
                return Some(self.restart());
            }
            return None;
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.state.request_direction(Direction::North),
            Command::Left => self.state.request_direction(Direction::West),
            Command::Down => self.state.request_direction(Direction::South),
            Command::Right => self.state.request_direction(Direction::East),
            Command::P | Command::Esc => self.toggle_pause(),
            Command::R | Command::Enter | Command::Space => {
                if self.state.phase() == Phase::GameOver {
                    return Some(self.restart());
                }
            }
            Command::Q => {
                if self.state.phase() != Phase::Playing {
                    return Some(Screen::Quit);
                }
            }
        }
        None
    }

    fn toggle_pause(&mut self) {
        if self.state.toggle_pause() {
            // don't count time spent paused against the next tick
            self.ticker.reset();
        }
    }

    /// A restart throws the whole round away and builds a fresh one
    fn restart(&self) -> Screen {
        Screen::Game(Game::new(self.config))
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn head_symbol(&self) -> char {
        match self.state.snake().direction() {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [hud_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}   Level: {}",
                self.state.score(),
                self.state.level()
            ),
            consts::HUD_BAR_STYLE,
        )
        .render(hud_area, buf);

        let mut block_size = self.state.grid().size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let board = block_area.inner(Margin::new(1, 1));
        let mut canvas = Canvas { area: board, buf };
        for &p in self.state.snake().body() {
            canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.state.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // the head goes last so a collision overwrites whatever was hit
        if self.state.phase() == Phase::GameOver {
            canvas.draw_cell(
                self.state.snake().head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.state.snake().head(), self.head_symbol(), consts::SNAKE_STYLE);
        }

        match self.state.phase() {
            Phase::Playing => (),
            Phase::Paused => {
                Span::from(" — PAUSED —").render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Resume ("),
                    Span::styled("p", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            Phase::GameOver => {
                Span::from(" — GAME OVER —").render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123_4567_89AB_CDEF;

    fn quiet_config() -> Config {
        Config {
            sound: false,
            ..Config::default()
        }
    }

    fn seeded_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(quiet_config(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn new_game() {
        let mut game = seeded_game();
        game.state.food = Position::new(3, 4);
        let area = Rect::new(0, 0, 80, 25);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 0   Level: 1                                                            ",
            "                             ┌────────────────────┐                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │   ●                │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │        ⚬⚬>         │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             └────────────────────┘                             ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::HUD_BAR_STYLE);
        expected.set_style(Rect::new(38, 12, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(33, 6, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn game_over() {
        let mut game = seeded_game();
        game.state.score = 3;
        game.state.snake.head = Position::new(5, 2);
        game.state.snake.body =
            VecDeque::from([Position::new(5, 3), Position::new(6, 3), Position::new(6, 2)]);
        game.state.snake.direction = Direction::West;
        game.state.phase = Phase::GameOver;
        game.state.food = Position::new(3, 4);
        let area = Rect::new(0, 0, 80, 25);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 3   Level: 1                                                            ",
            "                             ┌────────────────────┐                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │     ×⚬             │                             ",
            "                             │     ⚬⚬             │                             ",
            "                             │   ●                │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             └────────────────────┘                             ",
            " — GAME OVER —                                                                  ",
            " Restart (r) — Quit (q)                                                         ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::HUD_BAR_STYLE);
        expected.set_style(Rect::new(35, 4, 1, 1), consts::COLLISION_STYLE);
        expected.set_style(Rect::new(36, 4, 1, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(35, 5, 2, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(33, 6, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(10, 24, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(21, 24, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn paused() {
        let mut game = seeded_game();
        game.state.food = Position::new(3, 4);
        assert!(game
            .handle_event(Event::Key(KeyCode::Char('p').into()))
            .is_none());
        assert_eq!(game.state.phase(), Phase::Paused);
        let area = Rect::new(0, 0, 80, 25);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            " Score: 0   Level: 1                                                            ",
            "                             ┌────────────────────┐                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │   ●                │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │        ⚬⚬>         │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             │                    │                             ",
            "                             └────────────────────┘                             ",
            " — PAUSED —                                                                     ",
            " Resume (p)                                                                     ",
        ]);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::HUD_BAR_STYLE);
        expected.set_style(Rect::new(38, 12, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(33, 6, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(9, 24, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn quit_command() {
        let mut game = seeded_game();
        let screen = game.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(matches!(screen, Some(Screen::Quit)));
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut game = seeded_game();
        // while playing, 'r' does nothing
        assert!(game
            .handle_event(Event::Key(KeyCode::Char('r').into()))
            .is_none());
        game.state.phase = Phase::GameOver;
        let screen = game.handle_event(Event::Key(KeyCode::Char('r').into()));
        match screen {
            Some(Screen::Game(fresh)) => {
                assert_eq!(fresh.state.score(), 0);
                assert_eq!(fresh.state.phase(), Phase::Playing);
            }
            other => panic!("expected a fresh game screen, got {other:?}"),
        }
    }

    #[test]
    fn focus_loss_pauses() {
        let mut game = seeded_game();
        assert!(game.handle_event(Event::FocusLost).is_none());
        assert_eq!(game.state.phase(), Phase::Paused);
        // losing focus while already paused stays paused
        assert!(game.handle_event(Event::FocusLost).is_none());
        assert_eq!(game.state.phase(), Phase::Paused);
    }

    #[test]
    fn direction_keys_buffer_turns() {
        let mut game = seeded_game();
        assert!(game
            .handle_event(Event::Key(KeyCode::Up.into()))
            .is_none());
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        game.state.food = Position::new(0, 0);
        assert_eq!(game.state.step(&mut rng), Some(MoveOutcome::Moved));
        assert_eq!(game.state.snake().head(), Position::new(10, 9));
    }
}
