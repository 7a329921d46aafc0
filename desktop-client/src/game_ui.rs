use eframe::egui;
use snake_common::games::snake::{GameKey, Rect, RetainedScene};

use crate::colors;

const KEY_BINDINGS: [(egui::Key, GameKey); 7] = [
    (egui::Key::ArrowUp, GameKey::Up),
    (egui::Key::ArrowDown, GameKey::Down),
    (egui::Key::ArrowLeft, GameKey::Left),
    (egui::Key::ArrowRight, GameKey::Right),
    (egui::Key::R, GameKey::Restart),
    (egui::Key::P, GameKey::Pause),
    (egui::Key::Escape, GameKey::Stop),
];

pub fn game_key(key: egui::Key) -> Option<GameKey> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, game_key)| *game_key)
}

pub fn pressed_keys(ctx: &egui::Context) -> Vec<GameKey> {
    ctx.input(|i| {
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, game_key)| *game_key)
            .collect()
    })
}

pub fn to_screen_rect(rect: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

/// Paints visible entities in scene order over the field background.
pub fn paint_scene(ui: &mut egui::Ui, scene: &RetainedScene, pixel_size: (i32, i32)) {
    let (width, height) = pixel_size;
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width as f32, height as f32), egui::Sense::hover());

    let origin = response.rect.min;
    painter.rect_filled(response.rect, 0.0, colors::FIELD);

    for entity in scene.entities() {
        if !entity.visible {
            continue;
        }
        painter.rect_filled(
            to_screen_rect(entity.rect, origin),
            0.0,
            colors::entity_color(entity.kind),
        );
    }
}
