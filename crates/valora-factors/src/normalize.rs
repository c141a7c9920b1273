//! Numeric helpers shared by every factor calculator.
//!
//! All helpers propagate NaN instead of swallowing it, so a calculator can
//! detect a poisoned result once at its terminal step with [`nan_to_zero`].
//! None of them panic, whatever bounds they are given.

use serde::{Deserialize, Serialize};

/// Decimal places every reported score is rounded to.
pub const SCORE_PRECISION: i32 = 2;

/// Round to [`SCORE_PRECISION`] decimals, half away from zero.
#[must_use]
pub fn round(value: f64) -> f64 {
    round_to(value, SCORE_PRECISION)
}

/// Round to `precision` decimals, half away from zero.
///
/// The value is scaled by `10^precision`, rounded to the nearest integer and
/// scaled back.
#[must_use]
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}

/// Clamp to `[lo, hi]`, passing NaN through.
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Raise to at least `lo`, passing NaN through.
#[must_use]
pub fn at_least(value: f64, lo: f64) -> f64 {
    if value < lo { lo } else { value }
}

/// Cap at `hi`, passing NaN through.
#[must_use]
pub fn at_most(value: f64, hi: f64) -> f64 {
    if value > hi { hi } else { value }
}

/// Round to two decimals, then clamp to `[lo, hi]`.
#[must_use]
pub fn clamp_round(value: f64, lo: f64, hi: f64) -> f64 {
    clamp(round(value), lo, hi)
}

/// Replace NaN with `0.0`.
#[must_use]
pub const fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// Clamp to `[0, 100]`, then round, for a score that is reported as is.
///
/// NaN becomes `0.0`, and so does negative zero: adding `0.0` leaves every
/// other value unchanged but turns `-0.0` into `+0.0`.
#[must_use]
pub fn reported_score(value: f64) -> f64 {
    nan_to_zero(round(clamp(value, 0.0, 100.0))) + 0.0
}

/// Map a ratio onto `(0, 100)` with a logistic curve centered at `midpoint`.
///
/// The input is first clamped to `midpoint ± 2|midpoint|` (`± 1` when the
/// midpoint is zero) so outliers cannot saturate the curve arbitrarily.
#[must_use]
pub fn sigmoid_scale(value: f64, midpoint: f64, steepness: f64) -> f64 {
    let range = if midpoint == 0.0 {
        1.0
    } else {
        midpoint.abs() * 2.0
    };
    let capped = clamp(value, midpoint - range, midpoint + range);
    let exponent = -steepness * (capped - midpoint);
    100.0 / (1.0 + exponent.exp())
}

/// Map `value` onto `[0, 100]` logarithmically between `min` and `max`.
///
/// The input is rounded and clamped to `[min, max]` first; `min` maps to 0
/// and `max` to 100.
#[must_use]
pub fn log_scale(value: f64, min: f64, max: f64) -> f64 {
    let clamped = clamp_round(value, min, max);
    100.0 * ((clamped / min).ln() / (max / min).ln())
}

/// Midpoint and steepness of one sigmoid sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidParams {
    /// Value that maps to a score of 50.
    pub midpoint: f64,
    /// Slope of the curve around the midpoint.
    pub steepness: f64,
}

impl SigmoidParams {
    /// Create a parameter pair.
    #[must_use]
    pub const fn new(midpoint: f64, steepness: f64) -> Self {
        Self {
            midpoint,
            steepness,
        }
    }

    /// Score `value` on this curve.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        sigmoid_scale(value, self.midpoint, self.steepness)
    }
}

/// Sum `(score, weight)` pairs in the given order, then floor at 0, cap at
/// 100 and round. A NaN sum yields `0.0`.
#[must_use]
pub fn weighted_score(pairs: &[(f64, f64)]) -> f64 {
    let total = pairs
        .iter()
        .fold(0.0, |acc, &(score, weight)| acc + score * weight);
    reported_score(total)
}
