use console_panel::bridge::LoggingBridge;
use console_panel::gui::PanelApp;
use console_panel::logging;
use console_panel::settings::{default_settings_path, PanelSettings};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings_path = default_settings_path();
    let (settings, load_error) = match PanelSettings::load(&settings_path) {
        Ok(s) => (s, None),
        Err(e) => (PanelSettings::default(), Some(e)),
    };
    logging::init(settings.debug_logging);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "failed to load settings; using defaults");
    }
    tracing::info!(path = %settings_path.display(), "starting console panel preview");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Console Command Panel",
        native_options,
        Box::new(move |_cc| {
            let mut app = PanelApp::new(settings, settings_path, Box::new(LoggingBridge::default()));
            app.visible = true;
            let app: Box<dyn eframe::App> = Box::new(app);
            app
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run preview window: {e}"))
}
