//! Fixed-weight aggregation of the six factor scores.

use tracing::{trace, warn};
use valora_factors::{
    dividend::dividend_score,
    growth::growth_score,
    leverage::leverage_penalty,
    normalize::{reported_score, weighted_score},
    quality::quality_score,
    value::value_score,
    volatility::volatility_penalty,
};
use valora_traits::{CompanyMetrics, Result};

use crate::{
    combiner::{Combiner, ComponentScores, ScoreResult},
    config::EngineConfig,
    weights::FactorWeights,
};

/// Combiner that sums the six factor scores with fixed weights.
///
/// The sector is classified once per record and handed to the two
/// sector-aware factors. The weighted sum is built in one declared order
/// (value, quality, growth, dividend, leverage, volatility), clamped to
/// `[0, 100]`, and NaN becomes 0.
///
/// # Examples
///
/// ```
/// use valora_combine::{Combiner, WeightedCombiner};
/// use valora_traits::{CompanyMetrics, Metric};
///
/// let combiner = WeightedCombiner::default();
/// let record = CompanyMetrics::new("WEGE3")
///     .with(Metric::PriceToEarnings, 10.0)
///     .with(Metric::PriceToBook, 1.0)
///     .with(Metric::EvToEbit, 5.0);
///
/// let result = combiner.score(&record);
/// assert_eq!(result.value, 58.03);
/// assert!((0.0..=100.0).contains(&result.total));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedCombiner {
    config: EngineConfig,
}

impl WeightedCombiner {
    /// Create a combiner with the given weights and default factor tables.
    ///
    /// The weights are not validated; see [`WeightedCombiner::try_new`].
    #[must_use]
    pub fn new(weights: FactorWeights) -> Self {
        Self::with_config(EngineConfig::with_weights(weights))
    }

    /// Create a combiner after checking the weights.
    ///
    /// # Errors
    ///
    /// Returns [`valora_traits::ValoraError::InvalidConfig`] when
    /// [`FactorWeights::validate`] rejects the weights.
    pub fn try_new(weights: FactorWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self::new(weights))
    }

    /// Create a combiner from a full configuration.
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the aggregation weights.
    #[must_use]
    pub const fn weights(&self) -> &FactorWeights {
        &self.config.weights
    }
}

impl Combiner for WeightedCombiner {
    fn components(&self, metrics: &CompanyMetrics) -> ComponentScores {
        let sector = metrics.sector();
        trace!(ticker = %metrics.ticker, %sector, "Scoring record");

        let config = &self.config;
        ComponentScores {
            value: value_score(metrics, &config.value),
            quality: quality_score(metrics, sector, &config.quality),
            growth: growth_score(metrics, &config.growth),
            dividend: dividend_score(metrics, &config.dividend),
            leverage_penalty: leverage_penalty(metrics, sector, &config.leverage),
            volatility_penalty: volatility_penalty(metrics, &config.volatility),
        }
    }

    fn combine(&self, components: &ComponentScores) -> ScoreResult {
        let weights = &self.config.weights;
        let pairs = [
            (components.value, weights.value),
            (components.quality, weights.quality),
            (components.growth, weights.growth),
            (components.dividend, weights.dividend),
            (components.leverage_penalty, weights.leverage_penalty),
            (components.volatility_penalty, weights.volatility_penalty),
        ];
        if pairs.iter().any(|(score, weight)| (score * weight).is_nan()) {
            warn!(?components, "NaN in weighted sum, total coerced to 0");
        }

        ScoreResult {
            value: reported_score(components.value),
            quality: reported_score(components.quality),
            growth: reported_score(components.growth),
            dividend: reported_score(components.dividend),
            low_leverage: reported_score(100.0 - components.leverage_penalty),
            low_vol: reported_score(100.0 - components.volatility_penalty),
            total: weighted_score(&pairs),
        }
    }

    fn name(&self) -> &str {
        "weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use valora_traits::{Metric, ValoraError};

    fn sample() -> CompanyMetrics {
        CompanyMetrics::new("WEGE3")
            .with(Metric::PriceToEarnings, 10.0)
            .with(Metric::PriceToBook, 1.0)
            .with(Metric::EvToEbit, 5.0)
            .with(Metric::ReturnOnInvestedCapital, 18.0)
            .with(Metric::ReturnOnEquity, 20.0)
            .with(Metric::ReturnOnAssets, 12.0)
            .with(Metric::EbitMargin, 15.0)
            .with(Metric::ProfitCagr5y, 10.03)
            .with(Metric::RevenueCagr5y, 8.07)
            .with(Metric::DividendYield, 6.0)
            .with(Metric::PayoutRatio, 50.0)
            .with(Metric::NetDebtToEquity, 0.3)
            .with(Metric::NetDebtToEbitda, 1.0)
            .with(Metric::NetDebtToEbit, 2.0)
            .with(Metric::NetDebt, -1e8)
            .with(Metric::Equity, 1e9)
            .with(Metric::Volatility12M, 30.0)
    }

    #[test]
    fn test_components() {
        let components = WeightedCombiner::default().components(&sample());
        assert_abs_diff_eq!(components.value, 58.03, epsilon = 0.01);
        assert_eq!(components.quality, 74.45);
        assert_eq!(components.growth, 41.64);
        assert_eq!(components.dividend, 12.73);
        assert_eq!(components.leverage_penalty, 16.0);
        assert_eq!(components.volatility_penalty, 47.27);
    }

    #[test]
    fn test_score() {
        let result = WeightedCombiner::default().score(&sample());
        assert_eq!(result.value, 58.03);
        assert_eq!(result.low_leverage, 84.0);
        assert_eq!(result.low_vol, 52.73);
        assert_eq!(result.total, 40.85);
    }

    #[test]
    fn test_combine_weighted_sum() {
        let components = ComponentScores {
            value: 60.0,
            quality: 80.0,
            growth: 40.0,
            dividend: 20.0,
            leverage_penalty: 10.0,
            volatility_penalty: 30.0,
        };
        // 30 + 24 + 6 + 1 - 2 - 9
        let result = WeightedCombiner::default().combine(&components);
        assert_eq!(result.total, 50.0);
        assert_eq!(result.low_leverage, 90.0);
        assert_eq!(result.low_vol, 70.0);
    }

    #[test]
    fn test_total_is_clamped() {
        let combiner = WeightedCombiner::default();
        let penalized = ComponentScores {
            leverage_penalty: 100.0,
            volatility_penalty: 100.0,
            ..Default::default()
        };
        assert_eq!(combiner.combine(&penalized).total, 0.0);

        let generous = WeightedCombiner::new(FactorWeights {
            value: 3.0,
            ..Default::default()
        });
        let perfect = ComponentScores {
            value: 100.0,
            ..Default::default()
        };
        assert_eq!(generous.combine(&perfect).total, 100.0);
    }

    #[test]
    fn test_slightly_negative_total_is_positive_zero() {
        let components = ComponentScores {
            leverage_penalty: 0.01,
            ..Default::default()
        };
        let result = WeightedCombiner::default().combine(&components);
        assert_eq!(result.total.to_bits(), 0.0f64.to_bits());
        assert_eq!(result.low_leverage, 99.99);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""total":0.0"#), "{json}");
        assert!(!json.contains("-0.0"), "{json}");
    }

    #[test]
    fn test_nan_components_become_zero() {
        let components = ComponentScores {
            value: f64::NAN,
            quality: 50.0,
            volatility_penalty: f64::NAN,
            ..Default::default()
        };
        let result = WeightedCombiner::default().combine(&components);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.quality, 50.0);
        assert_eq!(result.low_vol, 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_empty_record() {
        let result = WeightedCombiner::default().score(&CompanyMetrics::new("EMPTY3"));
        for value in result.values() {
            assert!((0.0..=100.0).contains(&value));
        }
        assert_eq!(result.value, 0.0);
        assert_eq!(result.low_vol, 100.0);
    }

    #[test]
    fn test_sector_routes_quality_and_leverage() {
        let combiner = WeightedCombiner::default();
        let bank = sample()
            .with_segment("Bancos")
            .with(Metric::TotalAssets, 1.25e10);
        let universal = combiner.components(&sample());
        let banked = combiner.components(&bank);

        assert_eq!(universal.quality, 74.45);
        assert_eq!(banked.quality, 58.96);
        // equity / assets = 8%, exactly the Tier 1 minimum
        assert_eq!(banked.leverage_penalty, 20.0);
        assert_eq!(universal.value, banked.value);
        assert_eq!(universal.volatility_penalty, banked.volatility_penalty);
    }

    #[test]
    fn test_try_new_validates() {
        let bad = FactorWeights {
            leverage_penalty: 0.2,
            ..Default::default()
        };
        assert!(matches!(
            WeightedCombiner::try_new(bad),
            Err(ValoraError::InvalidConfig(_))
        ));
        assert!(WeightedCombiner::try_new(FactorWeights::dynamic()).is_ok());
        assert_eq!(WeightedCombiner::new(bad).weights().leverage_penalty, 0.2);
    }

    #[test]
    fn test_scoring_is_repeatable() {
        let combiner = WeightedCombiner::default();
        let record = sample();
        let before = record.clone();
        assert_eq!(combiner.score(&record), combiner.score(&record));
        assert_eq!(record, before);
    }
}
