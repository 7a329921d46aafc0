mod field;
mod food;
mod game;
mod game_state;
mod geometry;
mod runner;
mod scene;
mod settings;
mod snake;
#[cfg(test)]
mod test_support;
mod ticker;
mod types;

pub use field::{Field, Side, Wall, Walls, WrapOffsets};
pub use food::{EatContext, Food, FoodBehavior, FoodItem, FoodVariant};
pub use game::{GameError, SnakeGame};
pub use game_state::{accept_direction, GameState, ScoreBoard};
pub use geometry::{overlaps, Rect};
pub use runner::TickPolicy;
pub use scene::{Entity, EntityId, EntityKind, RetainedScene, Scene, SceneError};
pub use settings::{
    SnakeSettings, DEFAULT_CELL_SIZE, DEFAULT_FIELD_CELLS, DEFAULT_MAX_FPS, DEFAULT_MIN_FPS,
    DEFAULT_POINTS_PER_FOOD, DEFAULT_SPEED_FACTOR,
};
pub use snake::{Snake, START_LENGTH};
pub use ticker::{TickSource, Ticker, TickerId};
pub use types::{Direction, GameKey, GameMode, Point, RoundEndReason, TickOutcome};
