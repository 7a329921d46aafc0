use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::{DEFAULT_CELL_SIZE, DEFAULT_FIELD_CELLS};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct FieldConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Validate for FieldConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 5 || self.height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.width > 60 || self.height > 60 {
            return Err("field dimensions must not exceed 60x60".to_string());
        }
        if self.cell_size < 8 {
            return Err("cell_size must be at least 8".to_string());
        }
        if self.cell_size > 80 {
            return Err("cell_size must not exceed 80".to_string());
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_CELLS as u32,
            height: DEFAULT_FIELD_CELLS as u32,
            cell_size: DEFAULT_CELL_SIZE as u32,
        }
    }
}
