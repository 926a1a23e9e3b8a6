//! Producer-side handle for feeding current samples into the chart.
//!
//! Samples may be produced on any thread. They are handed to the UI thread
//! through a bounded channel; the UI drains it once per frame and applies
//! every command in arrival order. Nothing on the producer side touches the
//! chart directly.

use std::sync::mpsc::{Receiver, SendError, SyncSender, TrySendError};

/// Messages sent over the channel to drive the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartCommand {
    /// Append a single sample (amperes).
    Sample(f64),
    /// Append a chunk of samples in order.
    Samples(Vec<f64>),
    /// Replace the title shown above the plot.
    SetTitle(String),
}

/// Convenience sender for feeding samples into the live chart.
#[derive(Clone, Debug)]
pub struct CurrentSink {
    tx: SyncSender<ChartCommand>,
}

impl CurrentSink {
    /// Send one sample, blocking while the channel is full.
    pub fn send_sample(&self, value: f64) -> Result<(), SendError<ChartCommand>> {
        self.tx.send(ChartCommand::Sample(value))
    }

    /// Send one sample without blocking. Fails with `Full` if the UI is behind.
    pub fn try_send_sample(&self, value: f64) -> Result<(), TrySendError<ChartCommand>> {
        self.tx.try_send(ChartCommand::Sample(value))
    }

    /// Send a chunk of samples (more efficient than sample-by-sample).
    pub fn send_samples<I>(&self, values: I) -> Result<(), SendError<ChartCommand>>
    where
        I: Into<Vec<f64>>,
    {
        self.tx.send(ChartCommand::Samples(values.into()))
    }

    /// Change the plot title.
    pub fn set_title<S: Into<String>>(&self, title: S) -> Result<(), SendError<ChartCommand>> {
        self.tx.send(ChartCommand::SetTitle(title.into()))
    }
}

/// Create a bounded channel pair: `(CurrentSink, Receiver<ChartCommand>)`.
///
/// `capacity` is the number of queued commands before `send_sample` blocks.
pub fn channel_current(capacity: usize) -> (CurrentSink, Receiver<ChartCommand>) {
    let (tx, rx) = std::sync::mpsc::sync_channel(capacity);
    (CurrentSink { tx }, rx)
}
