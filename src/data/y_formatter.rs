//! Y-axis value formatter for electrical current.
//!
//! Values are amperes. The unit bucket is chosen from the absolute value and
//! the signed value is scaled into it, then rendered with one fixed decimal
//! and the unit suffix appended without a space (`"3.2nA"`). Formatting goes
//! through `format!`, which is locale-independent, so the decimal separator is
//! always `.`.

// ─────────────────────────────────────────────────────────────────────────────
// CurrentUnit
// ─────────────────────────────────────────────────────────────────────────────

/// SI current unit used for a tick label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CurrentUnit {
    Picoamps,
    Nanoamps,
    Microamps,
    Milliamps,
    Amps,
}

impl CurrentUnit {
    /// Pick the unit for a value by its magnitude.
    ///
    /// ```
    /// # use currentplot::data::y_formatter::CurrentUnit;
    /// assert_eq!(CurrentUnit::for_magnitude(0.0), CurrentUnit::Picoamps);
    /// assert_eq!(CurrentUnit::for_magnitude(-4e-6), CurrentUnit::Microamps);
    /// assert_eq!(CurrentUnit::for_magnitude(1.0), CurrentUnit::Amps);
    /// ```
    pub fn for_magnitude(value: f64) -> Self {
        let abs = value.abs();
        if abs < 1e-9 {
            CurrentUnit::Picoamps
        } else if abs < 1e-6 {
            CurrentUnit::Nanoamps
        } else if abs < 1e-3 {
            CurrentUnit::Microamps
        } else if abs < 1.0 {
            CurrentUnit::Milliamps
        } else {
            CurrentUnit::Amps
        }
    }

    /// Factor that converts amperes into this unit.
    pub fn scale(&self) -> f64 {
        match self {
            CurrentUnit::Picoamps => 1e12,
            CurrentUnit::Nanoamps => 1e9,
            CurrentUnit::Microamps => 1e6,
            CurrentUnit::Milliamps => 1e3,
            CurrentUnit::Amps => 1.0,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            CurrentUnit::Picoamps => "pA",
            CurrentUnit::Nanoamps => "nA",
            CurrentUnit::Microamps => "µA",
            CurrentUnit::Milliamps => "mA",
            CurrentUnit::Amps => "A",
        }
    }
}

impl std::fmt::Display for CurrentUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Format an ampere value as a tick label.
///
/// Values that round to zero print as `0.0` without a minus sign. Non-finite
/// values print as `NaN`, `inf` or `-inf` with no unit.
///
/// ```
/// # use currentplot::data::y_formatter::format_current;
/// assert_eq!(format_current(3.2e-9), "3.2nA");
/// assert_eq!(format_current(-2.5e-3), "-2.5mA");
/// assert_eq!(format_current(0.999), "999.0mA");
/// ```
pub fn format_current(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let unit = CurrentUnit::for_magnitude(value);
    let mut number = format!("{:.1}", value * unit.scale());
    if number == "-0.0" {
        number.remove(0);
    }
    number.push_str(unit.suffix());
    number
}
