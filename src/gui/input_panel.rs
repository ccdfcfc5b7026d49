use std::path::{
    Path,
    PathBuf,
};

use eframe::egui;
use rfd::FileDialog;

use super::actions::{
    ActionQueue,
    UiAction,
};

pub const FILE_INPUT_ID: &str = "fileInput";
pub const TEXT_INPUT_ID: &str = "textInput";

#[derive(Default)]
pub struct InputState {
    pub selected_file: Option<PathBuf>,
    pub text: String,
}

pub struct InputPanel;

impl InputPanel {
    pub fn show(
        ctx: &egui::Context,
        state: &mut InputState,
        last_directory: Option<&Path>,
        actions: &mut ActionQueue,
    ) {
        egui::SidePanel::left("input_panel").resizable(true).default_width(320.0).show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Upload a document");
            ui.add_space(6.0);

            ui.push_id(FILE_INPUT_ID, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Choose File…").clicked() {
                        if let Some(path) = pick_file(last_directory) {
                            actions.push(UiAction::FileChosen(path));
                        }
                    }
                    let name = state
                        .selected_file
                        .as_deref()
                        .and_then(|path| path.file_name())
                        .map(|name| name.to_string_lossy().to_string());
                    match name {
                        Some(name) => ui.label(name),
                        None => ui.weak("No file chosen"),
                    };
                });
            });

            ui.add_space(6.0);
            if ui.button("Upload").clicked() {
                actions.push(UiAction::UploadFile);
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.heading("Or paste text");
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut state.text)
                    .id(egui::Id::new(TEXT_INPUT_ID))
                    .hint_text("Paste notes, definitions or questions…")
                    .desired_rows(14)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            if ui.button("Process Text").clicked() {
                actions.push(UiAction::ProcessText);
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            if ui.button("Load Saved Flashcards").on_hover_text("Cards stored by the service").clicked()
            {
                actions.push(UiAction::LoadSaved);
            }
        });
    }
}

fn pick_file(last_directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .add_filter("Documents", &["pdf", "docx", "txt", "md"])
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .add_filter("All files", &["*"]);
    if let Some(directory) = last_directory {
        dialog = dialog.set_directory(directory);
    }
    dialog.pick_file()
}
