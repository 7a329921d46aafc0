mod colors;
mod config;
mod game_ui;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use snake_common::games::SessionRng;
use snake_common::games::snake::{RetainedScene, SnakeGame, SnakeSettings, Ticker};
use snake_common::{log, logger};

use config::{get_config_manager, Config};
use ui::{SnakeApp, SIDE_PANEL_WIDTH};

#[derive(Parser)]
#[command(name = "snake_modes")]
struct Args {
    /// Settings file; defaults to snake_modes_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Also log per-tick events
    #[arg(long)]
    verbose: bool,
    /// Fixed seed for food and wall placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let (config, startup_error) = match get_config_manager(args.config).get_config() {
        Ok(config) => (config, None),
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            (Config::default(), Some(format!("Failed to load config, using defaults: {}", e)))
        }
    };

    let settings = SnakeSettings::from(&config);
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let ticker = Ticker::new(settings.min_fps, settings.max_fps);
    let game = SnakeGame::new(settings, RetainedScene::new(), ticker, rng)?;

    let (width, height) = game.field().pixel_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32 + SIDE_PANEL_WIDTH, height as f32])
            .with_resizable(false)
            .with_title("Snake Modes"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Modes",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(game, startup_error)))),
    )?;

    Ok(())
}
