//! View core: rolling buffer, axis rescaling and title state for one chart.
//!
//! [`LiveChart`] has no rendering dependency. The UI layer calls
//! [`on_new_sample`](LiveChart::on_new_sample) for every incoming value and
//! draws whatever [`ChartFrame`] comes back; it calls
//! [`format_axis_label`](LiveChart::format_axis_label) for every Y tick.

use crate::config::LiveChartConfig;
use crate::data::rescale::{AutoFit, AxisBounds, AxisRescaler};
use crate::data::rolling::RollingBuffer;
use crate::data::y_formatter::format_current;
use crate::error::{ConfigError, SampleError};

/// Snapshot handed to the presentation layer after each sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame<'a> {
    /// Buffer contents, oldest first.
    pub samples: &'a [f64],
    /// New visible Y extent.
    pub y_bounds: AxisBounds,
    /// Visible X extent (sample indices).
    pub x_bounds: AxisBounds,
}

pub struct LiveChart {
    buffer: RollingBuffer,
    rescaler: AxisRescaler,
    auto_fit: AutoFit,
    y_bounds: AxisBounds,
    title: String,
}

impl LiveChart {
    /// Build a chart from a validated configuration.
    pub fn new(config: &LiveChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rescaler = AxisRescaler::new(config.floor, config.range_basis);
        Ok(Self {
            buffer: RollingBuffer::new(config.capacity)?,
            y_bounds: rescaler.initial_bounds(config.initial_ceiling),
            rescaler,
            auto_fit: AutoFit::new(config.auto_fit_margin),
            title: config.title.clone(),
        })
    }

    /// Push one sample and recompute the Y bounds.
    ///
    /// Non-finite samples are rejected and leave the chart unchanged.
    pub fn on_new_sample(&mut self, value: f64) -> Result<ChartFrame<'_>, SampleError> {
        if !value.is_finite() {
            return Err(SampleError::NonFinite(value));
        }
        self.buffer.push(value);

        // The buffer holds only finite samples, so the fit always succeeds.
        let fit = self
            .auto_fit
            .fit(self.buffer.iter())
            .unwrap_or(AxisBounds::new(value, value));
        let bounds = self.rescaler.rescale(fit.min, fit.max);
        if fit.max <= self.rescaler.floor() {
            tracing::debug!(
                data_max = fit.max,
                y_max = bounds.max,
                "data below floor, holding minimum range"
            );
        }
        tracing::trace!(value, y_min = bounds.min, y_max = bounds.max, "sample");
        self.y_bounds = bounds;
        Ok(self.frame())
    }

    /// Tick label for a Y value.
    pub fn format_axis_label(value: f64) -> String {
        format_current(value)
    }

    /// Current state without pushing anything.
    pub fn frame(&self) -> ChartFrame<'_> {
        ChartFrame {
            samples: self.buffer.as_slice(),
            y_bounds: self.y_bounds,
            x_bounds: self.x_bounds(),
        }
    }

    pub fn buffer(&self) -> &RollingBuffer {
        &self.buffer
    }

    pub fn y_bounds(&self) -> AxisBounds {
        self.y_bounds
    }

    /// `0..=capacity-1`, the sample index axis.
    pub fn x_bounds(&self) -> AxisBounds {
        AxisBounds::new(0.0, (self.buffer.len() - 1) as f64)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }
}
