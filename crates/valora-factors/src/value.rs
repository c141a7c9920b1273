//! Value factor built from price multiples.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};

use crate::normalize::{log_scale, nan_to_zero};

/// Configuration for the value factor.
///
/// Each multiple is inverted into a yield, square-rooted and scaled by its
/// coefficient. The average is discounted for every non-positive multiple
/// and mapped onto `[0, 100]` logarithmically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueConfig {
    /// Coefficient applied to the square-rooted earnings yield (default: 6.0)
    pub earnings_coefficient: f64,

    /// Coefficient applied to the square-rooted book yield (default: 3.5)
    pub book_coefficient: f64,

    /// Coefficient applied to the square-rooted EBIT yield (default: 5.0)
    pub ebit_coefficient: f64,

    /// Multiplicative discount per non-positive multiple (default: 0.15)
    pub negative_penalty: f64,

    /// Doubled average that maps to a score of 0 (default: 20.0)
    pub floor: f64,

    /// Doubled average that maps to a score of 100 (default: 100.0)
    pub ceiling: f64,
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            earnings_coefficient: 6.0,
            book_coefficient: 3.5,
            ebit_coefficient: 5.0,
            negative_penalty: 0.15,
            floor: 20.0,
            ceiling: 100.0,
        }
    }
}

/// Percent yield of a multiple; non-positive multiples yield nothing.
fn multiple_yield(multiple: f64) -> f64 {
    if multiple > 0.0 {
        (1.0 / multiple) * 100.0
    } else {
        0.0
    }
}

/// Compute the value score of a company.
///
/// Reads P/E, P/B and EV/EBIT. A multiple that is zero, negative or absent
/// contributes no yield and counts toward the negative-multiple discount.
#[must_use]
pub fn value_score(metrics: &CompanyMetrics, config: &ValueConfig) -> f64 {
    let pe = metrics.value(Metric::PriceToEarnings);
    let pb = metrics.value(Metric::PriceToBook);
    let ev_ebit = metrics.value(Metric::EvToEbit);

    let earnings = multiple_yield(pe).sqrt() * config.earnings_coefficient;
    let book = multiple_yield(pb).sqrt() * config.book_coefficient;
    let ebit = multiple_yield(ev_ebit).sqrt() * config.ebit_coefficient;

    let mut score = (earnings + book + ebit) / 3.0;
    let negative_count = [pe, pb, ev_ebit].iter().filter(|&&m| m <= 0.0).count();
    score *= 1.0 - negative_count as f64 * config.negative_penalty;

    nan_to_zero(log_scale(score * 2.0, config.floor, config.ceiling))
}

/// Value factor.
///
/// # Example
///
/// ```
/// use valora_factors::value::ValueFactor;
/// use valora_traits::{CompanyMetrics, Factor, Metric};
///
/// let record = CompanyMetrics::new("PETR4")
///     .with(Metric::PriceToEarnings, 10.0)
///     .with(Metric::PriceToBook, 1.0)
///     .with(Metric::EvToEbit, 5.0);
///
/// let score = ValueFactor::default().score(&record, record.sector());
/// assert!((score - 58.03).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueFactor {
    config: ValueConfig,
}

impl ValueFactor {
    /// Metrics read by this factor.
    pub const REQUIRED_METRICS: &[Metric] = &[Metric::PriceToEarnings, Metric::PriceToBook, Metric::EvToEbit];

    /// Create a new value factor with the given configuration.
    #[must_use]
    pub const fn new(config: ValueConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ValueConfig {
        &self.config
    }
}

impl Factor for ValueFactor {
    fn name(&self) -> &str {
        "value"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Value
    }

    fn required_metrics(&self) -> &[Metric] {
        Self::REQUIRED_METRICS
    }

    fn score(&self, metrics: &CompanyMetrics, _sector: Sector) -> f64 {
        value_score(metrics, &self.config)
    }
}
