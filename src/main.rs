use eframe::egui;
use flashstudy::{
    gui::{
        settings::{
            SettingsData,
            SETTINGS_FILE,
        },
        FlashstudyApp,
    },
    persistence::load_json_or_default,
    telemetry::init_tracing,
};

fn main() -> eframe::Result {
    init_tracing();

    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashstudy")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flashstudy",
        options,
        Box::new(|cc| Ok(Box::new(FlashstudyApp::new(cc, settings)?))),
    )
}
