mod app;
mod color;
mod config;
mod data;
mod importance;
mod metrics;
mod recommend;
mod regressor;
mod state;
mod ui;

use app::AdmissionApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };
    log::debug!("Using {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Admission Predict",
        options,
        Box::new(|cc| Ok(Box::new(AdmissionApp::new(cc, config)))),
    )
}
