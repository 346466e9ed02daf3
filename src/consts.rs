//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Time between simulation steps before any level-ups
pub(crate) const BASE_TICK: Duration = Duration::from_millis(250);

/// Shortest the tick interval is ever allowed to get
pub(crate) const MIN_TICK: Duration = Duration::from_millis(60);

/// How much the tick interval shrinks per level
pub(crate) const TICK_STEP: Duration = Duration::from_millis(15);

/// Food items eaten per level-up
pub(crate) const POINTS_PER_LEVEL: u32 = 5;

/// Snake length at the start of a round
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Board dimensions when the config file doesn't say otherwise
pub(crate) const DEFAULT_GRID_WIDTH: u16 = 20;
pub(crate) const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Board widths that fit inside [`DISPLAY_SIZE`] with the border
pub(crate) const GRID_WIDTH_RANGE: RangeInclusive<u16> = 8..=78;

/// Board heights that fit inside [`DISPLAY_SIZE`] with the border, the HUD
/// bar, and the two message lines
pub(crate) const GRID_HEIGHT_RANGE: RangeInclusive<u16> = 8..=20;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 25,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the cells of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food cell
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head on the tick it collided with something
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food cell
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score/level bar at the top of the game screen
pub(crate) const HUD_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
