use std::time::Instant;

use eframe::egui;
use snake_common::games::snake::{
    GameMode, RetainedScene, RoundEndReason, SnakeGame, TickOutcome, Ticker,
};
use snake_common::log;

use crate::colors;
use crate::game_ui;

pub const SIDE_PANEL_WIDTH: f32 = 220.0;

pub type DesktopGame = SnakeGame<RetainedScene, Ticker>;

pub struct SnakeApp {
    game: DesktopGame,
    last_frame: Instant,
    error: Option<String>,
    last_round_end: Option<RoundEndReason>,
    confirm_exit: bool,
}

fn round_end_message(reason: RoundEndReason) -> Option<&'static str> {
    match reason {
        RoundEndReason::WallCollision => Some("You hit a wall"),
        RoundEndReason::SelfCollision => Some("You bit yourself"),
        RoundEndReason::Stopped => None,
    }
}

impl SnakeApp {
    pub fn new(game: DesktopGame, startup_error: Option<String>) -> Self {
        Self {
            game,
            last_frame: Instant::now(),
            error: startup_error,
            last_round_end: None,
            confirm_exit: false,
        }
    }

    fn toggle_play(&mut self) {
        match self.game.toggle_play() {
            Ok(()) => {
                if self.game.is_playing() {
                    self.last_round_end = None;
                }
            }
            Err(e) => {
                log!("Failed to toggle round: {}", e);
                self.error = Some(format!("Failed to start round: {}", e));
            }
        }
    }

    fn select_mode(&mut self, index: usize) {
        if let Err(e) = self.game.set_mode_index(index) {
            log!("Failed to switch mode: {}", e);
            self.error = Some(e.to_string());
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        for key in game_ui::pressed_keys(ctx) {
            self.game.handle_key(key);
        }
    }

    fn advance(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        match self.game.update(elapsed) {
            Ok(TickOutcome::Continued) => {}
            Ok(TickOutcome::RoundEnded(reason)) => {
                self.last_round_end = Some(reason);
            }
            Err(e) => {
                log!("Tick failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        let board = self.game.score_board();
        let playing = self.game.is_playing();
        let current_mode = self.game.mode();

        ui.add_space(8.0);
        ui.heading("Snake");
        ui.separator();
        ui.label(egui::RichText::new(format!("Best: {}", board.best)).size(20.0));
        ui.label(egui::RichText::new(format!("Score: {}", board.score)).size(20.0));
        ui.separator();

        let mut selected = None;
        ui.add_enabled_ui(!playing, |ui| {
            ui.label("Mode:");
            for (index, mode) in GameMode::ALL.iter().enumerate() {
                if ui.radio(*mode == current_mode, mode.label()).clicked() {
                    selected = Some(index);
                }
            }
        });
        if let Some(index) = selected
            && GameMode::from_index(index) != Some(current_mode)
        {
            self.select_mode(index);
        }

        if let Some(message) = self.last_round_end.and_then(round_end_message) {
            ui.separator();
            ui.colored_label(colors::FOOD, message);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            if playing {
                if ui.button("☰ Menu").clicked() {
                    self.toggle_play();
                }
            } else {
                ui.horizontal(|ui| {
                    if ui.button("▶ Play").clicked() {
                        self.toggle_play();
                    }
                    if ui.button("🚪 Exit").clicked() {
                        self.confirm_exit = true;
                    }
                });
            }
        });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(error) = self.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        }

        if self.confirm_exit {
            egui::Window::new("Exit")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Exit from game?");
                    ui.horizontal(|ui| {
                        if ui.button("Exit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        if ui.button("Cancel").clicked() {
                            self.confirm_exit = false;
                        }
                    });
                });
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.advance();
        self.render_dialogs(ctx);

        egui::SidePanel::right("sidebar")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                self.render_side_panel(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                game_ui::paint_scene(ui, self.game.scene(), self.game.field().pixel_size());
            });

        if self.game.is_playing() {
            ctx.request_repaint();
        }
    }
}
