use eframe::egui;

use crate::core::{
    Notice,
    NoticeLevel,
};

/// Alert-style dialog for one [`Notice`] at a time.
pub struct NoticeModal {
    open: bool,
    notice: Option<Notice>,
}

impl NoticeModal {
    pub fn new() -> Self {
        Self { open: false, notice: None }
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true on the frame the dialog is dismissed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }
        let Some(notice) = &self.notice else {
            self.open = false;
            return false;
        };

        let (icon, color) = match notice.level {
            NoticeLevel::Info => ("ℹ", egui::Color32::from_rgb(100, 150, 255)),
            NoticeLevel::Warning => ("⚠", egui::Color32::from_rgb(255, 180, 60)),
            NoticeLevel::Error => ("⚠", egui::Color32::RED),
        };

        let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_width(450.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(24.0).color(color));
                ui.label(egui::RichText::new(&notice.title).size(18.0).strong());
            });

            ui.add_space(10.0);

            ui.label(egui::RichText::new(&notice.message).size(14.0));

            if let Some(details) = &notice.details {
                ui.add_space(10.0);
                ui.collapsing("Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
            self.notice = None;
            return true;
        }

        false
    }
}

impl Default for NoticeModal {
    fn default() -> Self {
        Self::new()
    }
}
