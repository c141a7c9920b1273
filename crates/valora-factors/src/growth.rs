//! Growth factor built from five-year CAGRs.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};

use crate::normalize::{at_least, clamp, nan_to_zero, round};

/// Configuration for the growth factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// CAGR (percent) that maps to 0 (default: -20.0)
    pub min_cagr: f64,

    /// CAGR (percent) that maps to 100 (default: 50.0)
    pub max_cagr: f64,

    /// Weight of the revenue CAGR (default: 0.45)
    pub revenue_weight: f64,

    /// Weight of the profit CAGR (default: 0.55)
    pub profit_weight: f64,

    /// Points deducted when both CAGRs are negative (default: 25.0)
    pub dual_negative_penalty: f64,

    /// Points deducted when exactly one CAGR is negative (default: 10.0)
    pub single_negative_penalty: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            min_cagr: -20.0,
            max_cagr: 50.0,
            revenue_weight: 0.45,
            profit_weight: 0.55,
            dual_negative_penalty: 25.0,
            single_negative_penalty: 10.0,
        }
    }
}

impl GrowthConfig {
    /// Map a CAGR linearly onto `[0, 100]`.
    fn normalize(&self, cagr: f64) -> f64 {
        clamp(
            (cagr - self.min_cagr) / (self.max_cagr - self.min_cagr) * 100.0,
            0.0,
            100.0,
        )
    }

    /// Tiered deduction for shrinking revenue and/or profit.
    fn penalty(&self, revenue_cagr: f64, profit_cagr: f64) -> f64 {
        match (revenue_cagr < 0.0, profit_cagr < 0.0) {
            (true, true) => self.dual_negative_penalty,
            (true, false) | (false, true) => self.single_negative_penalty,
            (false, false) => 0.0,
        }
    }
}

/// Compute the growth score of a company.
///
/// Absent CAGRs count as zero growth.
#[must_use]
pub fn growth_score(metrics: &CompanyMetrics, config: &GrowthConfig) -> f64 {
    let profit_cagr = metrics.value(Metric::ProfitCagr5y);
    let revenue_cagr = metrics.value(Metric::RevenueCagr5y);

    let base = config.normalize(revenue_cagr) * config.revenue_weight
        + config.normalize(profit_cagr) * config.profit_weight;
    let score = at_least(base - config.penalty(revenue_cagr, profit_cagr), 0.0);

    nan_to_zero(round(score))
}

/// Growth factor.
#[derive(Debug, Clone, Default)]
pub struct GrowthFactor {
    config: GrowthConfig,
}

impl GrowthFactor {
    /// Metrics read by this factor.
    pub const REQUIRED_METRICS: &[Metric] = &[Metric::ProfitCagr5y, Metric::RevenueCagr5y];

    /// Create a new growth factor with the given configuration.
    #[must_use]
    pub const fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }
}

impl Factor for GrowthFactor {
    fn name(&self) -> &str {
        "growth"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Growth
    }

    fn required_metrics(&self) -> &[Metric] {
        Self::REQUIRED_METRICS
    }

    fn score(&self, metrics: &CompanyMetrics, _sector: Sector) -> f64 {
        growth_score(metrics, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn score(profit: f64, revenue: f64) -> f64 {
        let record = CompanyMetrics::new("TEST3")
            .with(Metric::ProfitCagr5y, profit)
            .with(Metric::RevenueCagr5y, revenue);
        growth_score(&record, &GrowthConfig::default())
    }

    #[test]
    fn test_balanced_growth() {
        assert_eq!(score(10.03, 8.07), 41.64);
        assert_eq!(score(25.0, 15.0), 57.86);
    }

    #[test]
    fn test_single_negative() {
        assert_eq!(score(-5.0, 12.0), 22.36);
        assert_eq!(score(8.0, -2.0), 23.57);
        assert_eq!(score(25.0, -2.0), 36.93);
        assert_abs_diff_eq!(score(-19.0, 20.0), 16.5, epsilon = 1e-9);
    }

    #[test]
    fn test_dual_negative() {
        assert_eq!(score(-5.0, -3.0), 0.0);
        assert_eq!(score(-15.0, -10.0), 0.0);
        assert_eq!(score(-30.0, -25.0), 0.0);
    }

    #[test]
    fn test_zero_and_missing_growth() {
        assert_eq!(score(0.0, 0.0), 28.57);
        let empty = CompanyMetrics::new("EMPTY3");
        assert_eq!(growth_score(&empty, &GrowthConfig::default()), 28.57);
    }

    #[test]
    fn test_clamped_at_hundred() {
        assert_eq!(score(200.0, 80.0), 100.0);
        assert_eq!(score(50.0, 50.0), 100.0);
        assert_eq!(score(f64::INFINITY, f64::INFINITY), 100.0);
    }

    #[test]
    fn test_nan_reads_as_zero() {
        assert_eq!(score(f64::NAN, f64::NAN), 28.57);
    }

    #[test]
    fn test_factor_metadata() {
        let factor = GrowthFactor::default();
        assert_eq!(factor.name(), "growth");
        assert_eq!(factor.category(), FactorCategory::Growth);
        assert_eq!(factor.config().profit_weight, 0.55);
    }
}
