//! Draws a [`ResumeDocument`] with egui widgets.

use eframe::egui;
use resume_view::{Block, CalendarStrip, Entry, ResumeDocument, Section};
use shared::domain::Layout;

use crate::ui::theme::{hex_color, palette_for, LayoutPalette};

const CELL: f32 = 10.0;
const CELL_GAP: f32 = 2.0;

pub fn show_document(ui: &mut egui::Ui, document: &ResumeDocument) {
    let palette = palette_for(document.layout);

    egui::Frame::NONE
        .fill(palette.page_fill)
        .stroke(egui::Stroke::new(1.0, palette.rule))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(28, 24))
        .show(ui, |ui| {
            ui.set_max_width(820.0);
            show_header(ui, document, &palette);
            for section in &document.sections {
                ui.add_space(14.0);
                show_section(ui, section, document.layout, &palette);
            }
            if !document.footer.is_empty() {
                ui.add_space(18.0);
                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("Contact:").strong());
                    for (idx, block) in document.footer.iter().enumerate() {
                        if idx > 0 {
                            ui.label("|");
                        }
                        show_block(ui, block, &palette);
                    }
                });
            }
        });
}

fn show_header(ui: &mut egui::Ui, document: &ResumeDocument, palette: &LayoutPalette) {
    ui.horizontal(|ui| {
        if document.avatar_url.is_some() {
            avatar_badge(ui, &document.title, palette);
        }
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&document.title)
                    .size(28.0)
                    .strong()
                    .color(palette.heading),
            );
            if let Some(tagline) = &document.tagline {
                ui.label(egui::RichText::new(tagline).size(16.0));
            }
            ui.horizontal_wrapped(|ui| {
                for block in &document.header {
                    show_block(ui, block, palette);
                    ui.add_space(8.0);
                }
            });
        });
    });
}

/// Initial-letter disc in place of the remote avatar image.
fn avatar_badge(ui: &mut egui::Ui, title: &str, palette: &LayoutPalette) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(72.0, 72.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), 34.0, palette.chip_fill);
    painter.circle_stroke(rect.center(), 34.0, egui::Stroke::new(3.0, palette.rule));
    let initial = title
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(32.0),
        palette.heading,
    );
}

fn show_section(ui: &mut egui::Ui, section: &Section, layout: Layout, palette: &LayoutPalette) {
    ui.label(
        egui::RichText::new(&section.heading)
            .size(19.0)
            .strong()
            .color(palette.heading),
    );
    ui.add(egui::Separator::default().spacing(4.0));

    let entries: Vec<&Entry> = section.entries().collect();
    if layout == Layout::Modern && !entries.is_empty() {
        egui::Grid::new(("entries", &section.heading))
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                for (idx, entry) in entries.iter().enumerate() {
                    egui::Frame::NONE
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(1.0, palette.rule))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(360.0);
                            show_entry(ui, entry, palette);
                        });
                    if idx % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    for block in &section.blocks {
        if layout == Layout::Modern && matches!(block, Block::Entry(_)) {
            continue;
        }
        show_block(ui, block, palette);
    }
}

fn show_block(ui: &mut egui::Ui, block: &Block, palette: &LayoutPalette) {
    match block {
        Block::Paragraph(text) => {
            ui.label(text);
        }
        Block::Field { label, value } => {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{label}:")).strong());
                ui.label(value);
            });
        }
        Block::Link { label, url } => {
            ui.hyperlink_to(egui::RichText::new(label).color(palette.accent), url);
        }
        Block::Chips(chips) => show_chips(ui, chips, palette),
        Block::Entry(entry) => {
            ui.add_space(4.0);
            show_entry(ui, entry, palette);
        }
        Block::Calendar(strip) => show_calendar(ui, strip),
    }
}

fn show_entry(ui: &mut egui::Ui, entry: &Entry, palette: &LayoutPalette) {
    let title = egui::RichText::new(&entry.title).size(16.0).strong();
    match &entry.url {
        Some(url) => {
            ui.hyperlink_to(title.color(palette.accent), url);
        }
        None => {
            ui.label(title);
        }
    }
    for line in &entry.lines {
        ui.label(line);
    }
    if !entry.chips.is_empty() {
        show_chips(ui, &entry.chips, palette);
    }
}

fn show_chips(ui: &mut egui::Ui, chips: &[String], palette: &LayoutPalette) {
    ui.horizontal_wrapped(|ui| {
        for chip in chips {
            egui::Frame::NONE
                .fill(palette.chip_fill)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(chip).small().color(palette.chip_text));
                });
        }
    });
}

fn show_calendar(ui: &mut egui::Ui, strip: &CalendarStrip) {
    let rows = strip.weeks.iter().map(Vec::len).max().unwrap_or(0);
    let width = strip.weeks.len() as f32 * (CELL + CELL_GAP);
    let height = rows as f32 * (CELL + CELL_GAP);

    ui.add_space(6.0);
    egui::ScrollArea::horizontal()
        .id_salt("contribution_calendar")
        .show(ui, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
            let painter = ui.painter_at(rect);
            let mut hovered = None;

            for (col, week) in strip.weeks.iter().enumerate() {
                for (row, cell) in week.iter().enumerate() {
                    let min = rect.min
                        + egui::vec2(col as f32 * (CELL + CELL_GAP), row as f32 * (CELL + CELL_GAP));
                    let cell_rect = egui::Rect::from_min_size(min, egui::vec2(CELL, CELL));
                    painter.rect_filled(cell_rect, 2.0, hex_color(cell.color()));
                    if response
                        .hover_pos()
                        .is_some_and(|pos| cell_rect.contains(pos))
                    {
                        hovered = Some(cell);
                    }
                }
            }

            if let Some(cell) = hovered {
                response.on_hover_text(format!("{} contributions on {}", cell.count, cell.date));
            }
        });
    ui.label(
        egui::RichText::new(format!("{} contributions in the last year", strip.total)).small(),
    );
}
