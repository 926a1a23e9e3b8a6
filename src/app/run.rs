//! Top-level entry point for running the chart as a native window.

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::LiveChartConfig;
use crate::error::RunError;
use crate::ChartCommand;

use super::LiveChartApp;

/// Launch the live chart in a native window.
///
/// Validates `cfg`, builds a [`LiveChartApp`] around `rx`, and enters the
/// eframe event loop. The call blocks until the window is closed.
pub fn run_live_chart(
    rx: Receiver<ChartCommand>,
    mut cfg: LiveChartConfig,
) -> Result<(), RunError> {
    let app = LiveChartApp::new(rx, &cfg)?;

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1000.0, 700.0));
    }

    tracing::info!(
        capacity = cfg.capacity,
        floor = cfg.floor,
        minimum_range = cfg.minimum_range(),
        "opening chart window"
    );
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    tracing::info!("chart window closed");
    Ok(())
}
