use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    settings::SettingsData,
};

const ZOOM_STEP: f32 = 0.1;

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings: &SettingsData,
        origin: &str,
        pending: usize,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut dark_mode = settings.dark_mode;
                    if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                        actions.push(UiAction::SetDarkMode(dark_mode));
                    }
                    ui.horizontal(|ui| {
                        if ui.button("－").clicked() {
                            actions.push(UiAction::SetZoom(settings.zoom - ZOOM_STEP));
                        }
                        ui.label(format!("{:.0}%", settings.zoom * 100.0));
                        if ui.button("＋").clicked() {
                            actions.push(UiAction::SetZoom(settings.zoom + ZOOM_STEP));
                        }
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, origin, pending);
                });
            });
        });
    }

    fn show_status(ui: &mut egui::Ui, origin: &str, pending: usize) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.small(origin).on_hover_text("Flashcard service");
            if pending > 0 {
                ui.add(egui::Spinner::new().size(12.0));
                ui.small(format!("Sending… ({pending})"));
            }
        });
    }
}
