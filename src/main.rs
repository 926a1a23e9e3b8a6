//! currentplot: live current waveform window fed by a synthetic test signal.
//!
//! Run with:  `RUST_LOG=info currentplot [CONFIG.yaml|CONFIG.json]`

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use currentplot::test_signal::{TestSignal, DEFAULT_INTERVAL};
use currentplot::{channel_current, run_live_chart, LiveChartConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("currentplot v{} starting", env!("CARGO_PKG_VERSION"));

    let cfg = match std::env::args_os().nth(1) {
        Some(path) => LiveChartConfig::load(&path)
            .with_context(|| format!("loading config {}", path.to_string_lossy()))?,
        None => LiveChartConfig::default(),
    };

    let (sink, rx) = channel_current(cfg.channel_capacity);
    let producer = TestSignal::default().spawn(sink, DEFAULT_INTERVAL);

    // The receiver is dropped with the window, which unblocks and ends the producer.
    let result = run_live_chart(rx, cfg);
    producer.stop();
    result.map_err(|e| anyhow::anyhow!("{e}"))
}
