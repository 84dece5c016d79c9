mod app;
mod canvas;

// Re-export library modules so that `crate::state` resolves to the lib
// crate types everywhere in the binary.
pub use fillet2d_gui_lib::state;

use app::FilletApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fillet2d_gui=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Corner Fillet Demo")
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "fillet2d-gui",
        native_options,
        Box::new(|cc| Ok(Box::new(FilletApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
