//! Y-axis rescaling under a floor constraint.
//!
//! The visible lower bound is pinned to the floor for the lifetime of the
//! view and is never derived from data. The upper bound follows the
//! auto-fit maximum, except that it never sits at or below the floor: in that
//! case it is lifted to `floor + minimum_range`.

/// Visible vertical extent of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn as_range(&self) -> std::ops::RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// Compute new Y bounds from the auto-fit data range.
///
/// `_data_min` is accepted so callers can pass the full auto-fit range, but
/// the lower bound is always `floor`.
///
/// ```
/// # use currentplot::data::rescale::rescale;
/// let b = rescale(-5e-9, -2e-9, -1e-9, 1e-9);
/// assert_eq!((b.min, b.max), (-1e-9, 0.0));
/// let b = rescale(0.0, 4e-6, -1e-9, 1e-9);
/// assert_eq!(b.max, 4e-6);
/// ```
pub fn rescale(_data_min: f64, data_max: f64, floor: f64, minimum_range: f64) -> AxisBounds {
    // f64::max ignores a NaN operand, so a NaN maximum falls back to the floor.
    let mut max = data_max.max(floor);
    if max <= floor {
        max = floor + minimum_range;
    }
    AxisBounds { min: floor, max }
}

/// Floor and minimum range captured at view construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRescaler {
    floor: f64,
    minimum_range: f64,
}

impl AxisRescaler {
    /// `minimum_range` is `|range_basis|`.
    pub fn new(floor: f64, range_basis: f64) -> Self {
        Self {
            floor,
            minimum_range: range_basis.abs(),
        }
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn minimum_range(&self) -> f64 {
        self.minimum_range
    }

    pub fn rescale(&self, data_min: f64, data_max: f64) -> AxisBounds {
        rescale(data_min, data_max, self.floor, self.minimum_range)
    }

    /// Bounds shown before the first sample: `(floor, max(floor * 10, ceiling))`.
    pub fn initial_bounds(&self, ceiling: f64) -> AxisBounds {
        AxisBounds {
            min: self.floor,
            max: (self.floor * 10.0).max(ceiling),
        }
    }
}

/// `(min, max)` over the finite values, or `None` if there are none.
pub fn finite_extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Natural data extents plus proportional headroom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFit {
    margin: f64,
}

impl AutoFit {
    /// `margin` is a fraction of the data span added above and below.
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// Fit the finite samples; `None` if there are none.
    pub fn fit<I>(&self, samples: I) -> Option<AxisBounds>
    where
        I: IntoIterator<Item = f64>,
    {
        let (lo, hi) = finite_extent(samples)?;
        let pad = (hi - lo) * self.margin;
        Some(AxisBounds {
            min: lo - pad,
            max: hi + pad,
        })
    }
}

impl Default for AutoFit {
    fn default() -> Self {
        Self { margin: 0.0 }
    }
}
