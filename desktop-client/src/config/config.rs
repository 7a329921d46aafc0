use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::games::snake::SnakeSettings;
use std::path::PathBuf;

use super::{FieldConfig, GameplayConfig, TimingConfig};

const CONFIG_FILE_NAME: &str = "snake_modes_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// `path` overrides the default location next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub field: FieldConfig,
    pub timing: TimingConfig,
    pub gameplay: GameplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.field.validate()?;
        self.timing.validate()?;
        self.gameplay.validate()?;
        Ok(())
    }
}

impl From<&Config> for SnakeSettings {
    fn from(config: &Config) -> Self {
        SnakeSettings {
            field_width: config.field.width as i32,
            field_height: config.field.height as i32,
            cell_size: config.field.cell_size as i32,
            max_fps: config.timing.ticks_per_second,
            min_fps: config.timing.min_fps,
            speed_factor: config.gameplay.speed_factor,
            points_per_food: config.gameplay.points_per_food,
            mode: config.gameplay.mode,
        }
    }
}
