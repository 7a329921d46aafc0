use super::field::Field;
use super::types::GameMode;

pub const DEFAULT_FIELD_CELLS: i32 = 20;
pub const DEFAULT_CELL_SIZE: i32 = 35;
pub const DEFAULT_MAX_FPS: f64 = 1.0;
pub const DEFAULT_MIN_FPS: f64 = 10.0;
pub const DEFAULT_SPEED_FACTOR: f64 = 1.1;
pub const DEFAULT_POINTS_PER_FOOD: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub field_width: i32,
    pub field_height: i32,
    pub cell_size: i32,
    /// Tick rate at the start of every round.
    pub max_fps: f64,
    pub min_fps: f64,
    /// Applied to both rates each time speed food is eaten.
    pub speed_factor: f64,
    pub points_per_food: u32,
    pub mode: GameMode,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_CELLS,
            field_height: DEFAULT_FIELD_CELLS,
            cell_size: DEFAULT_CELL_SIZE,
            max_fps: DEFAULT_MAX_FPS,
            min_fps: DEFAULT_MIN_FPS,
            speed_factor: DEFAULT_SPEED_FACTOR,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
            mode: GameMode::Classic,
        }
    }
}

impl SnakeSettings {
    /// Clamps values the engine cannot work with instead of rejecting them;
    /// user-facing validation happens when the config file is loaded.
    pub fn sanitized(mut self) -> Self {
        self.field_width = self.field_width.max(4);
        self.field_height = self.field_height.max(4);
        self.cell_size = self.cell_size.max(1);
        if self.max_fps.is_nan() || self.max_fps <= 0.0 {
            self.max_fps = DEFAULT_MAX_FPS;
        }
        if self.min_fps.is_nan() || self.min_fps <= 0.0 {
            self.min_fps = DEFAULT_MIN_FPS;
        }
        if self.speed_factor.is_nan() || self.speed_factor < 1.0 {
            self.speed_factor = DEFAULT_SPEED_FACTOR;
        }
        self
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height, self.cell_size)
    }
}
