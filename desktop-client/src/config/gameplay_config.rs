use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{GameMode, DEFAULT_POINTS_PER_FOOD, DEFAULT_SPEED_FACTOR};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameplayConfig {
    pub mode: GameMode,
    pub speed_factor: f64,
    pub points_per_food: u32,
}

impl Validate for GameplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.speed_factor.is_nan() || self.speed_factor < 1.0 {
            return Err("speed_factor must be at least 1".to_string());
        }
        if self.speed_factor > 3.0 {
            return Err("speed_factor must not exceed 3".to_string());
        }
        if self.points_per_food == 0 {
            return Err("points_per_food must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            speed_factor: DEFAULT_SPEED_FACTOR,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
        }
    }
}
