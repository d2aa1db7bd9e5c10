use std::path::PathBuf;

use car_compare::app::CarCompareApp;
use car_compare::config::ViewerConfig;
use car_compare::data::fixture::bundled_pool;
use car_compare::data::loader::load_file;
use car_compare::data::pool::{CarPool, CarSource};
use car_compare::state::AppState;
use clap::Parser;
use eframe::egui;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare cars across six attributes")]
struct Args {
    /// JSON viewer configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Car table (.json, .csv or .parquet) to use instead of the bundled one.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ViewerConfig::load(path).unwrap_or_else(|e| {
            log::error!("{e:#}; using default settings");
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    };

    let pool = initial_pool(args.data.as_ref().or(config.data_path.as_ref()))?;
    log::info!("Starting with {} cars", pool.len());
    let state = AppState::new(pool, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Compare",
        options,
        Box::new(|_cc| Ok(Box::new(CarCompareApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}

/// The pool from `path`, or the bundled fixture when no path is given or the
/// file cannot be read.
fn initial_pool(path: Option<&PathBuf>) -> anyhow::Result<CarPool> {
    if let Some(path) = path {
        match load_file(path) {
            Ok(pool) => return Ok(pool),
            Err(e) => log::error!("Failed to load {}: {e:#}", path.display()),
        }
    }
    bundled_pool()
}
