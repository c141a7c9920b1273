//! Dividend factor: yield discounted by payout safety.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};

use crate::normalize::{at_most, clamp, nan_to_zero, round};

/// Configuration for the dividend factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DividendConfig {
    /// Points per percent of dividend yield (default: 1.5)
    pub yield_multiplier: f64,

    /// Maximum yield sub-score (default: 50.0)
    pub yield_cap: f64,

    /// Payout ratio (percent) above which safety stops decreasing (default: 95.0)
    pub payout_cap: f64,

    /// Multiplier applied to the safety-adjusted yield (default: 2.0)
    pub amplifier: f64,
}

impl Default for DividendConfig {
    fn default() -> Self {
        Self {
            yield_multiplier: 1.5,
            yield_cap: 50.0,
            payout_cap: 95.0,
            amplifier: 2.0,
        }
    }
}

/// Compute the dividend score of a company.
///
/// The safety factor is `sqrt((100 - min(payout, cap)) / 100)`; capping the
/// payout keeps the root argument positive for payouts above 100%.
#[must_use]
pub fn dividend_score(metrics: &CompanyMetrics, config: &DividendConfig) -> f64 {
    let dividend_yield = metrics.value(Metric::DividendYield);
    let payout = metrics.value(Metric::PayoutRatio);

    let yield_score = at_most(dividend_yield * config.yield_multiplier, config.yield_cap);
    let safety = ((100.0 - at_most(payout, config.payout_cap)) / 100.0).sqrt();

    nan_to_zero(round(clamp(
        yield_score * safety * config.amplifier,
        0.0,
        100.0,
    )))
}

/// Dividend factor.
#[derive(Debug, Clone, Default)]
pub struct DividendFactor {
    config: DividendConfig,
}

impl DividendFactor {
    /// Metrics read by this factor.
    pub const REQUIRED_METRICS: &[Metric] = &[Metric::DividendYield, Metric::PayoutRatio];

    /// Create a new dividend factor with the given configuration.
    #[must_use]
    pub const fn new(config: DividendConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &DividendConfig {
        &self.config
    }
}

impl Factor for DividendFactor {
    fn name(&self) -> &str {
        "dividend"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Dividend
    }

    fn required_metrics(&self) -> &[Metric] {
        Self::REQUIRED_METRICS
    }

    fn score(&self, metrics: &CompanyMetrics, _sector: Sector) -> f64 {
        dividend_score(metrics, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(dividend_yield: f64, payout: f64) -> f64 {
        let record = CompanyMetrics::new("TEST3")
            .with(Metric::DividendYield, dividend_yield)
            .with(Metric::PayoutRatio, payout);
        dividend_score(&record, &DividendConfig::default())
    }

    #[test]
    fn test_typical_payer() {
        // 6% * 1.5 = 9; sqrt(0.5) * 9 * 2
        assert_eq!(score(6.0, 50.0), 12.73);
        assert_eq!(score(10.0, 0.0), 30.0);
    }

    #[test]
    fn test_yield_sub_score_is_capped() {
        // 40% yield caps at 50, no payout gives full safety
        assert_eq!(score(40.0, 0.0), 100.0);
        assert_eq!(score(100.0, 0.0), 100.0);
    }

    #[test]
    fn test_payout_above_cap() {
        assert_eq!(score(10.0, 95.0), score(10.0, 250.0));
        assert_eq!(score(10.0, 95.0), 6.71);
    }

    #[test]
    fn test_non_payer() {
        assert_eq!(score(0.0, 0.0), 0.0);
        assert_eq!(dividend_score(&CompanyMetrics::new("EMPTY3"), &DividendConfig::default()), 0.0);
    }

    #[test]
    fn test_negative_yield_floors_at_zero() {
        assert_eq!(score(-5.0, 30.0), 0.0);
    }

    #[test]
    fn test_non_finite_inputs() {
        // 0 * inf safety is NaN and reads as zero
        assert_eq!(score(0.0, f64::NEG_INFINITY), 0.0);
        assert_eq!(score(f64::INFINITY, 0.0), 100.0);
    }

    #[test]
    fn test_factor_metadata() {
        let factor = DividendFactor::default();
        assert_eq!(factor.name(), "dividend");
        assert_eq!(factor.required_metrics(), &[Metric::DividendYield, Metric::PayoutRatio]);
    }

    #[test]
    fn test_factor_uses_its_config() {
        let factor = DividendFactor::new(DividendConfig {
            payout_cap: 80.0,
            ..Default::default()
        });
        assert_eq!(factor.config().payout_cap, 80.0);
        assert_eq!(factor.config().yield_cap, DividendConfig::default().yield_cap);
    }
}
