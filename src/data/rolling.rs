//! Fixed-capacity rolling sample buffer.
//!
//! The buffer always holds exactly `capacity` samples in time order: index 0
//! is the oldest retained sample, index `capacity - 1` the newest. Every
//! [`push`](RollingBuffer::push) evicts the oldest sample; overflow is the
//! steady state, not an error.

use crate::data::rescale::finite_extent;
use crate::error::ConfigError;

/// Number of samples shown by the live chart unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 300;

/// Most-recent-N store with shift-on-insert semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingBuffer {
    samples: Vec<f64>,
}

impl RollingBuffer {
    /// Create a buffer of `capacity` zero samples.
    ///
    /// ```
    /// # use currentplot::data::rolling::RollingBuffer;
    /// let buf = RollingBuffer::new(4).unwrap();
    /// assert_eq!(buf.as_slice(), &[0.0; 4]);
    /// assert!(RollingBuffer::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            samples: vec![0.0; capacity],
        })
    }

    /// Append `value` as the newest sample, discarding the oldest.
    pub fn push(&mut self, value: f64) {
        let last = self.samples.len() - 1;
        self.samples.copy_within(1.., 0);
        self.samples[last] = value;
    }

    /// Always equal to the construction capacity.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A constructed buffer is never empty; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// The most recently pushed sample (or `0.0` before the first push).
    pub fn latest(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// The oldest retained sample.
    pub fn oldest(&self) -> f64 {
        self.samples[0]
    }

    /// Finite `(min, max)` over the retained samples, or `None` if no sample is finite.
    pub fn extent(&self) -> Option<(f64, f64)> {
        finite_extent(self.iter())
    }

    /// `[index, value]` pairs in time order, ready to hand to a line series.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }
}

impl Default for RollingBuffer {
    fn default() -> Self {
        Self {
            samples: vec![0.0; DEFAULT_CAPACITY],
        }
    }
}
