use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{DEFAULT_MAX_FPS, DEFAULT_MIN_FPS};

/// Tick rates at the start of a round. Speed food raises both while playing.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TimingConfig {
    pub ticks_per_second: f64,
    /// Caps how much wall-clock time a single stalled frame may account for.
    pub min_fps: f64,
}

impl Validate for TimingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ticks_per_second.is_nan() || self.ticks_per_second <= 0.0 {
            return Err("ticks_per_second must be greater than 0".to_string());
        }
        if self.ticks_per_second > 60.0 {
            return Err("ticks_per_second must not exceed 60".to_string());
        }
        if self.min_fps.is_nan() || self.min_fps <= 0.0 {
            return Err("min_fps must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_MAX_FPS,
            min_fps: DEFAULT_MIN_FPS,
        }
    }
}
