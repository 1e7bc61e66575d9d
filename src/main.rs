mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::GdpDashboardApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::{AppState, load_dataset};

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();

    if let Some(out) = &config.export {
        let table = load_dataset(&config.data)
            .with_context(|| format!("loading {}", config.data.display()))?;
        let figure = chart::build_figure(&table, &config.initial_selection(&table));
        return chart::export_json(&figure, out);
    }

    let mut state = AppState::default();
    match load_dataset(&config.data) {
        Ok(table) => {
            let selection = config.initial_selection(&table);
            state.set_dataset(table, Some(config.data.clone()));
            state.set_selection(selection);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GDP Analysis Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(GdpDashboardApp { state }))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
