//! currentplot crate root: re-exports and module wiring.
//!
//! A live electrical-current chart built on egui/eframe:
//! - `data`: rolling sample buffer, floor-constrained axis rescaling, SI current tick labels
//! - `chart`: the view core tying the data pieces together per sample
//! - `sink`: bounded channel for feeding samples from any thread
//! - `config`: chart configuration, loadable from YAML or JSON
//! - `app`: eframe application and `run_live_chart`
//! - `test_signal`: synthetic microamp waveform producer

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod sink;
pub mod test_signal;

// Public re-exports for a compact external API
pub use app::{run_live_chart, DrainStats, LiveChartApp};
pub use chart::{ChartFrame, LiveChart};
pub use config::LiveChartConfig;
pub use data::rescale::{rescale, AutoFit, AxisBounds, AxisRescaler};
pub use data::rolling::RollingBuffer;
pub use data::y_formatter::{format_current, CurrentUnit};
pub use error::{ConfigError, RunError, SampleError};
pub use sink::{channel_current, ChartCommand, CurrentSink};
pub use test_signal::{TestSignal, TestSignalHandle};
