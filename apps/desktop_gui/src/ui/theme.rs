//! Visual palette per resume layout.

use eframe::egui;
use shared::domain::Layout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPalette {
    pub page_fill: egui::Color32,
    pub heading: egui::Color32,
    pub accent: egui::Color32,
    pub chip_fill: egui::Color32,
    pub chip_text: egui::Color32,
    pub rule: egui::Color32,
}

pub fn palette_for(layout: Layout) -> LayoutPalette {
    match layout {
        Layout::Classic => LayoutPalette {
            page_fill: egui::Color32::WHITE,
            heading: egui::Color32::from_rgb(17, 24, 39),
            accent: egui::Color32::from_rgb(37, 99, 235),
            chip_fill: egui::Color32::from_rgb(229, 231, 235),
            chip_text: egui::Color32::from_rgb(55, 65, 81),
            rule: egui::Color32::from_rgb(209, 213, 219),
        },
        Layout::Modern => LayoutPalette {
            page_fill: egui::Color32::from_rgb(240, 253, 244),
            heading: egui::Color32::from_rgb(22, 101, 52),
            accent: egui::Color32::from_rgb(37, 99, 235),
            chip_fill: egui::Color32::from_rgb(220, 252, 231),
            chip_text: egui::Color32::from_rgb(22, 101, 52),
            rule: egui::Color32::from_rgb(134, 239, 172),
        },
    }
}

pub fn error_banner_colors() -> (egui::Color32, egui::Stroke) {
    (
        egui::Color32::from_rgb(254, 226, 226),
        egui::Stroke::new(1.0, egui::Color32::from_rgb(220, 38, 38)),
    )
}

pub fn error_text() -> egui::Color32 {
    egui::Color32::from_rgb(185, 28, 28)
}

/// Parses `#rrggbb`; falls back to a neutral grey.
pub fn hex_color(hex: &str) -> egui::Color32 {
    egui::Color32::from_hex(hex).unwrap_or(egui::Color32::from_gray(200))
}

pub fn apply_base_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
