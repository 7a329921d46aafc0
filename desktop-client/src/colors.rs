use eframe::egui;
use snake_common::games::snake::EntityKind;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x07, 0x74, 0x82);
pub const FIELD: egui::Color32 = egui::Color32::from_rgb(0x57, 0x57, 0x57);
pub const WALL: egui::Color32 = egui::Color32::from_rgb(0xA9, 0x6A, 0x0E);
pub const FOOD: egui::Color32 = egui::Color32::from_rgb(0xE0, 0x3C, 0x31);
pub const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(0x2E, 0x7D, 0x32);
pub const SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(0x66, 0xBB, 0x6A);

pub fn entity_color(kind: EntityKind) -> egui::Color32 {
    match kind {
        EntityKind::Wall => WALL,
        EntityKind::Food => FOOD,
        EntityKind::SnakeHead => SNAKE_HEAD,
        EntityKind::SnakeBody => SNAKE_BODY,
    }
}
