//! Full scoring configuration.

use serde::{Deserialize, Serialize};
use valora_factors::{
    DividendConfig, GrowthConfig, LeverageConfig, QualityConfig, ValueConfig, VolatilityConfig,
};

use crate::weights::FactorWeights;

/// Every table the scoring engine reads: aggregation weights plus one
/// configuration per factor.
///
/// Missing sections fall back to their defaults, so an override document only
/// needs the keys it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Aggregation weights.
    pub weights: FactorWeights,
    /// Value factor.
    pub value: ValueConfig,
    /// Quality factor, per sector.
    pub quality: QualityConfig,
    /// Growth factor.
    pub growth: GrowthConfig,
    /// Dividend factor.
    pub dividend: DividendConfig,
    /// Leverage penalty, per sector.
    pub leverage: LeverageConfig,
    /// Volatility penalty.
    pub volatility: VolatilityConfig,
}

impl EngineConfig {
    /// Default factor tables with the given weights.
    #[must_use]
    pub fn with_weights(weights: FactorWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_override() {
        let json = r#"{
            "weights": { "value": 0.6 },
            "growth": { "profit_weight": 0.5 },
            "volatility": { "max_volatility": 80.0 }
        }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.weights.value, 0.6);
        assert_eq!(config.weights.quality, 0.3);
        assert_eq!(config.growth.profit_weight, 0.5);
        assert_eq!(config.volatility.max_volatility, 80.0);
        assert_eq!(config.volatility.min_volatility, 15.0);
        assert_eq!(config.leverage.offset, 10.0);
    }

    #[test]
    fn test_with_weights_keeps_factor_defaults() {
        let weights = FactorWeights {
            dividend: 0.0,
            ..Default::default()
        };
        let config = EngineConfig::with_weights(weights);
        assert_eq!(config.weights.dividend, 0.0);
        assert_eq!(config.dividend.payout_cap, DividendConfig::default().payout_cap);
    }
}
