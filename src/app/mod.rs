//! Main application module for the live current chart.
//!
//! | Sub-module          | Responsibility |
//! | ------------------- | -------------- |
//! | [`live_chart_app`]  | [`LiveChartApp`] (eframe): channel draining and plot rendering |
//! | [`update`]          | Per-frame command ingestion, independent of egui |
//! | [`run`]             | Top-level [`run_live_chart()`] entry point |

mod live_chart_app;
mod run;
mod update;

pub use live_chart_app::LiveChartApp;
pub use run::run_live_chart;
pub use update::DrainStats;
