//! Standalone application wrapper for the live current chart.
//!
//! [`LiveChartApp`] owns the [`LiveChart`] and the receiving end of the
//! command channel, and implements [`eframe::App`] so the chart can run as a
//! native window. All chart mutation happens here, on the UI thread.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;
use egui_plot::{Line, Plot};

use crate::chart::LiveChart;
use crate::config::LiveChartConfig;
use crate::error::ConfigError;
use crate::ChartCommand;

/// Standalone chart application that implements [`eframe::App`].
pub struct LiveChartApp {
    pub(crate) chart: LiveChart,
    pub(crate) rx: Receiver<ChartCommand>,
    /// Set once every [`CurrentSink`](crate::CurrentSink) has been dropped.
    pub(crate) producers_gone: bool,
    title_font_size: f32,
    x_label: String,
    y_label: String,
}

impl LiveChartApp {
    /// Create the app. Fails if `config` does not validate.
    pub fn new(rx: Receiver<ChartCommand>, config: &LiveChartConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            chart: LiveChart::new(config)?,
            rx,
            producers_gone: false,
            title_font_size: config.title_font_size,
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
        })
    }

    pub fn chart(&self) -> &LiveChart {
        &self.chart
    }

    /// `true` once the channel has reported that all producers are gone.
    pub fn producers_gone(&self) -> bool {
        self.producers_gone
    }

    fn render_title(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("currentplot_title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(self.chart.title()).size(self.title_font_size));
            });
        });
    }

    fn render_plot(&self, ui: &mut egui::Ui) {
        let frame = self.chart.frame();
        let points = self.chart.buffer().points();

        // Zoom and pan are disabled: bounds come exclusively from the rescaler.
        let plot = Plot::new("current_plot")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .x_axis_label(self.x_label.clone())
            .y_axis_label(self.y_label.clone())
            .y_axis_formatter(|y, _range| LiveChart::format_axis_label(y.value));

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(frame.x_bounds.as_range());
            plot_ui.set_plot_bounds_y(frame.y_bounds.as_range());
            plot_ui.line(Line::new("current", points));
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for LiveChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_commands();

        self.render_title(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_plot(ui);
        });

        // Keep polling the channel (~60 fps) while producers are alive.
        if !self.producers_gone {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
