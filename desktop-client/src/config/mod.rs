mod config;
mod field_config;
mod gameplay_config;
mod timing_config;

pub use config::{get_config_manager, Config};
pub use field_config::FieldConfig;
pub use gameplay_config::GameplayConfig;
pub use timing_config::TimingConfig;
