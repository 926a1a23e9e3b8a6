//! Configuration for the live current chart.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::rolling::DEFAULT_CAPACITY;
use crate::error::ConfigError;

/// Permanent lower Y bound, in amperes.
pub const DEFAULT_FLOOR: f64 = -1e-9;

/// Upper Y bound shown before the first sample, unless `floor * 10` is larger.
pub const DEFAULT_INITIAL_CEILING: f64 = 1e-3;

/// Top-level configuration for the live chart.
///
/// | Field              | Purpose |
/// |--------------------|---------|
/// | `capacity`         | Samples retained and displayed |
/// | `floor`            | Fixed lower Y bound |
/// | `range_basis`      | Minimum Y span is `abs(range_basis)` |
/// | `initial_ceiling`  | Upper Y bound before the first sample |
/// | `auto_fit_margin`  | Headroom fraction added to the data span |
/// | `channel_capacity` | Bound of the producer → UI channel |
///
/// Unknown fields in a config file are rejected; missing ones take defaults.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiveChartConfig {
    // ── Scope / data ─────────────────────────────────────────────────────────
    pub capacity: usize,
    pub floor: f64,
    pub range_basis: f64,
    pub initial_ceiling: f64,
    pub auto_fit_margin: f64,
    pub channel_capacity: usize,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Title rendered above the plot.
    pub title: String,
    pub title_font_size: f32,
    pub x_label: String,
    pub y_label: String,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for LiveChartConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            floor: DEFAULT_FLOOR,
            range_basis: DEFAULT_FLOOR,
            initial_ceiling: DEFAULT_INITIAL_CEILING,
            auto_fit_margin: 0.0,
            channel_capacity: 1024,

            title: "Real Time Data".to_string(),
            title_font_size: 32.0,
            x_label: "Point".to_string(),
            y_label: "Current".to_string(),
            native_options: None,
        }
    }
}

impl std::fmt::Debug for LiveChartConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveChartConfig")
            .field("capacity", &self.capacity)
            .field("floor", &self.floor)
            .field("range_basis", &self.range_basis)
            .field("initial_ceiling", &self.initial_ceiling)
            .field("auto_fit_margin", &self.auto_fit_margin)
            .field("channel_capacity", &self.channel_capacity)
            .field("title", &self.title)
            .field("title_font_size", &self.title_font_size)
            .field("x_label", &self.x_label)
            .field("y_label", &self.y_label)
            .finish_non_exhaustive()
    }
}

impl LiveChartConfig {
    /// Minimum visible Y span enforced when the data never rises above the floor.
    pub fn minimum_range(&self) -> f64 {
        self.range_basis.abs()
    }

    /// Check every invariant the chart relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        for (field, value) in [
            ("floor", self.floor),
            ("range_basis", self.range_basis),
            ("initial_ceiling", self.initial_ceiling),
            ("auto_fit_margin", self.auto_fit_margin),
            ("title_font_size", f64::from(self.title_font_size)),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if self.minimum_range() == 0.0 {
            return Err(ConfigError::ZeroMinimumRange {
                basis: self.range_basis,
            });
        }
        if self.title_font_size <= 0.0 {
            return Err(ConfigError::NonPositiveFontSize(self.title_font_size));
        }
        if self.auto_fit_margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.auto_fit_margin));
        }
        Ok(())
    }

    /// Parse a YAML document and validate it.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a JSON document and validate it.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a `.yaml`/`.yml` or `.json` file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnknownFormat(path.to_path_buf())),
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = parse(&raw)?;
        tracing::info!("Loaded chart config from '{}'", path.display());
        Ok(cfg)
    }
}
