mod app;
mod config;
mod data;
mod detail;
mod navigation;
mod resolver;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use app::StormViewerApp;
use clap::Parser;
use config::ViewerConfig;
use eframe::egui;

#[derive(Parser, Debug)]
#[command(
    name = "storm-viewer",
    version,
    about = "Browse a folder of storm pictures"
)]
struct Cli {
    /// Directory to scan for pictures
    #[arg(long, env = "STORM_VIEWER_DIR")]
    dir: Option<PathBuf>,

    /// Only list entries whose name starts with this prefix
    #[arg(long)]
    prefix: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(cli: Cli) -> Result<ViewerConfig> {
    let base = match &cli.config {
        Some(path) => ViewerConfig::from_file(path)?,
        None => ViewerConfig::default(),
    };
    base.with_overrides(cli.dir, cli.prefix)
}

fn main() -> eframe::Result {
    env_logger::init();

    let config = load_config(Cli::parse()).unwrap_or_else(|e| {
        log::error!("Invalid configuration, using defaults: {e:#}");
        ViewerConfig::default()
    });
    log::info!(
        "Scanning {} for {:?} pictures",
        config.resource_dir.display(),
        config.prefix
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let window_title = config.title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render png/jpg from file:// URIs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(StormViewerApp::new(config)))
        }),
    )
}
