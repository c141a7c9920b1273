//! Volatility penalty.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};

use crate::normalize::{clamp, log_scale, nan_to_zero, round};

/// Configuration for the volatility penalty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Annualized volatility (percent) considered very stable, penalty 0 (default: 15.0)
    pub min_volatility: f64,

    /// Annualized volatility (percent) at which the penalty saturates at 100 (default: 65.0)
    pub max_volatility: f64,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            min_volatility: 15.0,
            max_volatility: 65.0,
        }
    }
}

/// The volatility the penalty is computed from.
///
/// Twelve-month volatility is preferred; total volatility is the fallback
/// when the former is absent or non-positive. Returns `None` when neither is
/// usable.
#[must_use]
pub fn effective_volatility(metrics: &CompanyMetrics) -> Option<f64> {
    [Metric::Volatility12M, Metric::VolatilityTotal]
        .into_iter()
        .map(|m| metrics.value(m))
        .find(|&v| v > 0.0)
}

/// Compute the volatility penalty of a company.
///
/// Higher is worse. Companies without a usable volatility get no penalty.
#[must_use]
pub fn volatility_penalty(metrics: &CompanyMetrics, config: &VolatilityConfig) -> f64 {
    let Some(volatility) = effective_volatility(metrics) else {
        return 0.0;
    };

    let score = log_scale(volatility, config.min_volatility, config.max_volatility);
    nan_to_zero(round(clamp(score, 0.0, 100.0)))
}

/// Volatility penalty factor.
#[derive(Debug, Clone, Default)]
pub struct VolatilityFactor {
    config: VolatilityConfig,
}

impl VolatilityFactor {
    /// Metrics read by this factor.
    pub const REQUIRED_METRICS: &[Metric] = &[Metric::Volatility12M, Metric::VolatilityTotal];

    /// Create a new volatility factor with the given configuration.
    #[must_use]
    pub const fn new(config: VolatilityConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &VolatilityConfig {
        &self.config
    }
}

impl Factor for VolatilityFactor {
    fn name(&self) -> &str {
        "volatility"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Volatility
    }

    fn required_metrics(&self) -> &[Metric] {
        Self::REQUIRED_METRICS
    }

    fn is_penalty(&self) -> bool {
        true
    }

    fn score(&self, metrics: &CompanyMetrics, _sector: Sector) -> f64 {
        volatility_penalty(metrics, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalty(record: &CompanyMetrics) -> f64 {
        volatility_penalty(record, &VolatilityConfig::default())
    }

    #[test]
    fn test_bounds() {
        let calm = CompanyMetrics::new("TAEE11").with(Metric::Volatility12M, 15.0);
        let wild = CompanyMetrics::new("AZUL4").with(Metric::Volatility12M, 65.0);
        assert_eq!(penalty(&calm), 0.0);
        assert_eq!(penalty(&wild), 100.0);
    }

    #[test]
    fn test_log_curve() {
        let record = CompanyMetrics::new("VALE3").with(Metric::Volatility12M, 30.0);
        assert_eq!(penalty(&record), 47.27);
    }

    #[test]
    fn test_clamped_outside_range() {
        let below = CompanyMetrics::new("A").with(Metric::Volatility12M, 5.0);
        let above = CompanyMetrics::new("B").with(Metric::Volatility12M, 140.0);
        assert_eq!(penalty(&below), 0.0);
        assert_eq!(penalty(&above), 100.0);
    }

    #[test]
    fn test_falls_back_to_total() {
        let record = CompanyMetrics::new("VALE3")
            .with(Metric::Volatility12M, 0.0)
            .with(Metric::VolatilityTotal, 30.0);
        assert_eq!(penalty(&record), 47.27);

        let negative = CompanyMetrics::new("VALE3")
            .with(Metric::Volatility12M, -3.0)
            .with(Metric::VolatilityTotal, 30.0);
        assert_eq!(effective_volatility(&negative), Some(30.0));
    }

    #[test]
    fn test_prefers_twelve_month() {
        let record = CompanyMetrics::new("VALE3")
            .with(Metric::Volatility12M, 20.0)
            .with(Metric::VolatilityTotal, 60.0);
        assert_eq!(effective_volatility(&record), Some(20.0));
    }

    #[test]
    fn test_no_volatility_no_penalty() {
        assert_eq!(penalty(&CompanyMetrics::new("EMPTY3")), 0.0);

        let record = CompanyMetrics::new("X")
            .with(Metric::Volatility12M, f64::NAN)
            .with(Metric::VolatilityTotal, -1.0);
        assert_eq!(penalty(&record), 0.0);
    }

    #[test]
    fn test_infinite_volatility_saturates() {
        let record = CompanyMetrics::new("X").with(Metric::Volatility12M, f64::INFINITY);
        assert_eq!(penalty(&record), 100.0);
    }

    #[test]
    fn test_factor_metadata() {
        let factor = VolatilityFactor::default();
        assert!(factor.is_penalty());
        assert_eq!(factor.category(), FactorCategory::Volatility);
    }

    #[test]
    fn test_factor_uses_its_config() {
        let factor = VolatilityFactor::new(VolatilityConfig {
            max_volatility: 30.0,
            ..Default::default()
        });
        assert_eq!(factor.config().max_volatility, 30.0);
        let record = CompanyMetrics::new("VALE3").with(Metric::Volatility12M, 30.0);
        assert_eq!(factor.score(&record, Sector::Universal), 100.0);
    }
}
