mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::AeroDashApp;
use data::loader::{self, DATA_PATH};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Loader failures are fatal: without the table there is nothing to show.
    let dataset = loader::load_file(Path::new(DATA_PATH))
        .with_context(|| format!("loading station data from {DATA_PATH}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Guanyuan Air Quality Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(AeroDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
