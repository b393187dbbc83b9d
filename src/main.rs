mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::IqPlotApp;
use clap::Parser;
use eframe::egui;

use cli::Args;
use state::ViewState;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let analysis = data::analyze(&args.file, args.data_type, args.samplerate, args.floor_db)?;

    if let Some(path) = &args.export {
        data::export::write_spectrum_csv(path, &analysis.spectrum)
            .context("exporting spectrum")?;
    }

    if args.no_window {
        return Ok(());
    }

    let state = ViewState::new(args.file.clone(), &analysis);
    let title = state.title();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(IqPlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}
