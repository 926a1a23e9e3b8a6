//! Per-frame data ingestion for [`LiveChartApp`].
//!
//! [`drain_commands`](LiveChartApp::drain_commands) empties the command
//! channel and applies every command to the chart in arrival order. It needs
//! no egui context, so it can be driven directly from tests.

use std::sync::mpsc::TryRecvError;

use crate::ChartCommand;

use super::LiveChartApp;

/// What one drain pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainStats {
    /// Samples pushed into the buffer.
    pub applied: usize,
    /// Non-finite samples dropped.
    pub rejected: usize,
    pub title_changed: bool,
    /// The channel reported that every producer is gone.
    pub disconnected: bool,
}

impl LiveChartApp {
    /// Apply every pending command without blocking.
    pub fn drain_commands(&mut self) -> DrainStats {
        let mut stats = DrainStats::default();
        loop {
            match self.rx.try_recv() {
                Ok(cmd) => self.apply_command(cmd, &mut stats),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.producers_gone {
                        tracing::warn!("all sample producers disconnected; chart is now static");
                        self.producers_gone = true;
                    }
                    stats.disconnected = true;
                    break;
                }
            }
        }
        stats
    }

    fn apply_command(&mut self, cmd: ChartCommand, stats: &mut DrainStats) {
        match cmd {
            ChartCommand::Sample(value) => self.apply_sample(value, stats),
            ChartCommand::Samples(values) => {
                for value in values {
                    self.apply_sample(value, stats);
                }
            }
            ChartCommand::SetTitle(title) => {
                tracing::debug!(%title, "title changed");
                self.chart.set_title(title);
                stats.title_changed = true;
            }
        }
    }

    fn apply_sample(&mut self, value: f64, stats: &mut DrainStats) {
        match self.chart.on_new_sample(value) {
            Ok(_) => stats.applied += 1,
            Err(e) => {
                tracing::warn!("dropping sample: {e}");
                stats.rejected += 1;
            }
        }
    }
}
