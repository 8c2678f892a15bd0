mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::TweetScopeApp;
use eframe::egui;
use state::AppState;

/// Dataset read once at startup when no path is given on the command line.
const DEFAULT_DATASET: &str = "ProcessedTweets.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // A malformed dataset is fatal: fail before any window opens.
    let dataset = data::loader::load_file(&path)
        .with_context(|| format!("loading dataset from {}", path.display()))?;
    log::info!(
        "Loaded {} tweets across {} months from {}",
        dataset.len(),
        dataset.months().len(),
        path.display()
    );

    let state = AppState::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TweetScope – Tweet Sentiment Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(TweetScopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
