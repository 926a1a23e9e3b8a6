//! Synthetic current waveform for demos and manual testing.
//!
//! Produces a microamp-scale sum of three harmonics plus a little uniform
//! noise, advancing time by a fixed step per sample:
//!
//! `1e-6 * (sin(2πt) + 0.5·sin(4πt) + 0.25·sin(8πt) + 0.1·(u - 0.5))`,
//! with `u` uniform in `[0, 1)`.

use std::f64::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::TrySendError;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use rand::Rng;

use crate::CurrentSink;

/// Time advanced per sample, in waveform seconds.
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Wall-clock interval between samples when spawned.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Back-off while the chart is not draining.
const FULL_RETRY_INTERVAL: Duration = Duration::from_millis(5);

/// Deterministic part of the waveform plus a noise term.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSignal {
    time: f64,
    step: f64,
}

impl TestSignal {
    pub fn new(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Waveform value at time `t` for a noise draw `u` in `[0, 1)`.
    ///
    /// ```
    /// # use currentplot::test_signal::TestSignal;
    /// assert!(TestSignal::value_at(0.0, 0.5).abs() < 1e-18);
    /// ```
    pub fn value_at(t: f64, u: f64) -> f64 {
        1e-6 * ((2.0 * PI * t).sin()
            + 0.5 * (4.0 * PI * t).sin()
            + 0.25 * (8.0 * PI * t).sin()
            + 0.1 * (u - 0.5))
    }

    /// Produce the next sample and advance time.
    pub fn next_sample<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let value = Self::value_at(self.time, rng.gen::<f64>());
        self.time += self.step;
        value
    }

    /// Stream samples into `sink` on a background thread every `interval`.
    ///
    /// The thread exits when the returned handle is stopped or dropped, or
    /// when the receiving side of the sink has gone away.
    pub fn spawn(mut self, sink: CurrentSink, interval: Duration) -> TestSignalHandle {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let thread = std::thread::spawn(move || {
            let mut rng = rand::thread_rng();
            'produce: while !flag.load(Ordering::Relaxed) {
                let value = self.next_sample(&mut rng);
                // Never block on a full channel, so a stop request is always seen.
                loop {
                    match sink.try_send_sample(value) {
                        Ok(()) => break,
                        Err(TrySendError::Full(_)) => {
                            if flag.load(Ordering::Relaxed) {
                                break 'produce;
                            }
                            std::thread::sleep(FULL_RETRY_INTERVAL);
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            tracing::info!("chart closed; stopping test signal");
                            break 'produce;
                        }
                    }
                }
                std::thread::sleep(interval);
            }
        });
        TestSignalHandle {
            stop,
            thread: Some(thread),
        }
    }
}

impl Default for TestSignal {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

/// Owner of a running test-signal thread.
#[derive(Debug)]
pub struct TestSignalHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TestSignalHandle {
    /// Ask the producer thread to stop and wait for it.
    pub fn stop(mut self) {
        self.shutdown();
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("test signal thread panicked");
            }
        }
    }
}

impl Drop for TestSignalHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
