//! Omok desktop board
//!
//! Two players take turns on one screen.

use omok::config::AppConfig;
use omok::error::AppError;
use omok::logging;
use omok::ui::OmokApp;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    logging::init(&config.log_filter);
    tracing::info!(?config, "starting omok");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([
                omok::config::MIN_WINDOW_WIDTH,
                omok::config::MIN_WINDOW_HEIGHT,
            ])
            .with_title("Omok"),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, &config)))),
    )?;

    Ok(())
}
