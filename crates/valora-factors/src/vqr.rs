//! Valuation-to-quality ratios.
//!
//! These ratios divide a price multiple by the matching return measure:
//! how much is paid per point of profitability. Lower is cheaper. They are
//! only defined when both sides are positive.

use valora_traits::{CompanyMetrics, Metric};

use crate::normalize::round;

fn ratio(multiple: f64, profitability: f64) -> Option<f64> {
    (multiple > 0.0 && profitability > 0.0).then(|| round(multiple * 100.0 / profitability))
}

/// Price-to-EBIT multiple per point of ROIC.
///
/// # Example
///
/// ```
/// use valora_factors::vqr::valuation_to_quality;
/// use valora_traits::{CompanyMetrics, Metric};
///
/// let record = CompanyMetrics::new("WEGE3")
///     .with(Metric::PriceToEbit, 20.0)
///     .with(Metric::ReturnOnInvestedCapital, 25.0);
///
/// assert_eq!(valuation_to_quality(&record), Some(80.0));
/// ```
#[must_use]
pub fn valuation_to_quality(metrics: &CompanyMetrics) -> Option<f64> {
    ratio(
        metrics.value(Metric::PriceToEbit),
        metrics.value(Metric::ReturnOnInvestedCapital),
    )
}

/// P/E multiple per point of ROE.
#[must_use]
pub fn pe_to_roe(metrics: &CompanyMetrics) -> Option<f64> {
    ratio(
        metrics.value(Metric::PriceToEarnings),
        metrics.value(Metric::ReturnOnEquity),
    )
}
