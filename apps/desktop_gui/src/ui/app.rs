use client_core::{Completion, FetchTicket, ResumeController};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use resume_view::{print_job, render, Screen, SearchBar};
use serde::{Deserialize, Serialize};
use shared::domain::Layout;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{category_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::platform::DesktopPlatform;
use crate::ui::{document_view::show_document, theme};

pub const SETTINGS_STORAGE_KEY: &str = "resume_desktop_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDesktopSettings {
    pub layout: Layout,
}

pub struct ResumeDesktopApp {
    controller: ResumeController<DesktopPlatform>,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    layout: Layout,
    search_input: String,
    notice: Option<String>,
    status_banner: Option<UiError>,
    style_applied: bool,
}

impl ResumeDesktopApp {
    pub fn new(
        platform: DesktopPlatform,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        layout: Layout,
    ) -> Self {
        let mut app = Self {
            controller: ResumeController::new(platform),
            cmd_tx,
            ui_rx,
            layout,
            search_input: String::new(),
            notice: None,
            status_banner: None,
            style_applied: false,
        };

        if let Some(ticket) = app.controller.start() {
            app.search_input = ticket.username.to_string();
            app.send_fetch(ticket);
        }
        app
    }

    fn submit_search(&mut self) {
        self.notice = None;
        if let Ok(ticket) = self.controller.begin_search(&self.search_input) {
            self.send_fetch(ticket);
        }
    }

    fn send_fetch(&mut self, ticket: FetchTicket) {
        let cmd = BackendCommand::FetchResume {
            ticket: ticket.clone(),
        };
        if let Err(reason) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.controller.abandon(&ticket, reason);
            self.status_banner = Some(UiError::from_message(UiErrorContext::Fetch, reason));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ResumeFetched { ticket, outcome } => {
                    if self.controller.complete(&ticket, outcome) == Completion::Stale {
                        tracing::debug!(seq = ticket.seq, "ignored superseded resume response");
                    }
                }
                UiEvent::Error(err) => {
                    tracing::warn!(context = ?err.context(), "{}", err.message());
                    self.status_banner = Some(err);
                }
            }
        }
    }

    fn share(&mut self) {
        let notice = self.controller.share_link();
        match UiError::from_notice(&notice) {
            Some(err) => {
                self.notice = None;
                self.status_banner = Some(err);
            }
            None => self.notice = Some(notice.message()),
        }
    }

    fn print(&mut self) {
        let Some(payload) = self.controller.state().payload() else {
            self.notice = Some("Generate a resume before printing.".to_string());
            return;
        };
        let job = print_job(&resume_view::build_document(payload, self.layout));
        match self.controller.print(&job) {
            Some(notice) => match UiError::from_notice(&notice) {
                Some(err) => self.status_banner = Some(err),
                None => self.notice = Some(notice.message()),
            },
            None => match self.controller.platform().last_export() {
                Some(path) => self.notice = Some(format!("Saved resume to {}", path.display())),
                None => self.notice = None,
            },
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        let (fill, stroke) = theme::error_banner_colors();
        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            category_label(banner.category()),
                            banner.message()
                        ))
                        .color(theme::error_text()),
                    );
                    if !banner.is_fatal() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    }
                });
            });
    }

    fn show_search_bar(&mut self, ui: &mut egui::Ui, search: &SearchBar) {
        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                search.enabled,
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Enter GitHub username")
                    .desired_width(280.0),
            );
            if response.changed() {
                self.controller.clear_validation();
            }
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(search.enabled, egui::Button::new(search.submit_label))
                .clicked();
            if search.enabled && (enter || clicked) {
                self.submit_search();
            }
        });
        if let Some(message) = &search.inline_error {
            ui.label(egui::RichText::new(message).color(theme::error_text()));
        }
    }

    fn show_layout_selector(&mut self, ui: &mut egui::Ui, screen: &Screen) {
        if screen.layouts().is_empty() {
            return;
        }
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Resume style:").strong());
            for choice in screen.layouts() {
                if ui
                    .selectable_label(choice.selected, choice.layout.label())
                    .clicked()
                {
                    self.layout = choice.layout;
                }
            }
        });
    }

    fn show_actions(&mut self, ui: &mut egui::Ui, screen: &Screen) {
        if !screen.shows_actions() {
            return;
        }
        ui.horizontal(|ui| {
            if ui.button("Share").clicked() {
                self.share();
            }
            if ui.button("Print / Export").clicked() {
                self.print();
            }
            if let Some(notice) = &self.notice {
                ui.label(notice);
            }
        });
    }

    fn show_loading_skeleton(ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Generating resume...");
        });
        for width in [420.0, 320.0, 520.0, 260.0] {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 14.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 4.0, egui::Color32::from_gray(225));
            ui.add_space(4.0);
        }
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        let screen = render(
            self.controller.state(),
            self.layout,
            self.controller.input_error(),
        );

        egui::TopBottomPanel::top("search_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("GitHub Resume Generator");
            self.show_status_banner(ui);
            self.show_search_bar(ui, screen.search());
            self.show_layout_selector(ui, &screen);
            self.show_actions(ui, &screen);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Link:").small());
                ui.label(egui::RichText::new(self.controller.share_url().as_str()).small());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &screen {
                Screen::Landing { .. } => {
                    ui.add_space(24.0);
                    ui.label("Enter a GitHub username and choose a style to generate a resume.");
                }
                Screen::Loading { .. } => Self::show_loading_skeleton(ui),
                Screen::Failed { .. } => {
                    ui.add_space(24.0);
                    ui.label("Check the username and try again.");
                }
                Screen::Resume { document, .. } => show_document(ui, document),
            });
        });
    }
}

impl eframe::App for ResumeDesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            theme::apply_base_style(ctx);
            self.style_applied = true;
        }

        self.process_ui_events();
        self.show_main(ctx);

        if self.controller.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDesktopSettings {
            layout: self.layout,
        };
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
