mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchBoardApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path on the command line; otherwise File → Open.
    let mut state = AppState::default();
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                // A missing or malformed dataset is fatal at startup.
                log::error!("Failed to load {}: {e:#}", path.display());
                eprintln!("Failed to load {}: {e:#}", path.display());
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – SpaceX Launch Records",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(state)))),
    )
}
