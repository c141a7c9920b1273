//! Core trait definition for factor combiners.

use serde::{Deserialize, Serialize};
use valora_traits::CompanyMetrics;

/// The six factor scores of one company, before aggregation.
///
/// Penalties are kept in their raw orientation: a higher value is worse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Value score
    pub value: f64,
    /// Quality score
    pub quality: f64,
    /// Growth score
    pub growth: f64,
    /// Dividend score
    pub dividend: f64,
    /// Normalized leverage penalty
    pub leverage_penalty: f64,
    /// Volatility penalty
    pub volatility_penalty: f64,
}

/// Final scores of one company.
///
/// Penalties are reported inverted (`low_leverage`, `low_vol`) so every field
/// reads "higher is better". All seven values lie in `[0, 100]` and carry two
/// decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Value score
    pub value: f64,
    /// Quality score
    pub quality: f64,
    /// Growth score
    pub growth: f64,
    /// Dividend score
    pub dividend: f64,
    /// `100 - leverage penalty`
    pub low_leverage: f64,
    /// `100 - volatility penalty`
    pub low_vol: f64,
    /// Weighted composite
    pub total: f64,
}

impl ScoreResult {
    /// The seven values in reporting order, ending with the total.
    #[must_use]
    pub const fn values(&self) -> [f64; 7] {
        [
            self.value,
            self.quality,
            self.growth,
            self.dividend,
            self.low_leverage,
            self.low_vol,
            self.total,
        ]
    }
}

/// Turns a company record into a composite score.
///
/// Implementations must be total: any record, including one with missing or
/// non-finite metrics, yields a [`ScoreResult`] inside `[0, 100]`. They are
/// `Send + Sync` so batches can be scored in parallel.
pub trait Combiner: Send + Sync {
    /// Compute the six factor scores of a record.
    fn components(&self, metrics: &CompanyMetrics) -> ComponentScores;

    /// Aggregate component scores into the final result.
    fn combine(&self, components: &ComponentScores) -> ScoreResult;

    /// Score a record end to end.
    fn score(&self, metrics: &CompanyMetrics) -> ScoreResult {
        self.combine(&self.components(metrics))
    }

    /// Name of this combination strategy.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant;

    impl Combiner for Constant {
        fn components(&self, _metrics: &CompanyMetrics) -> ComponentScores {
            ComponentScores {
                value: 40.0,
                ..Default::default()
            }
        }

        fn combine(&self, components: &ComponentScores) -> ScoreResult {
            ScoreResult {
                value: components.value,
                total: components.value / 2.0,
                ..Default::default()
            }
        }

        fn name(&self) -> &str {
            "constant"
        }
    }

    #[test]
    fn test_score_chains_components_and_combine() {
        let result = Constant.score(&CompanyMetrics::new("TEST3"));
        assert_eq!(result.value, 40.0);
        assert_eq!(result.total, 20.0);
        assert_eq!(Constant.name(), "constant");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ScoreResult {
            low_leverage: 84.0,
            low_vol: 52.73,
            ..Default::default()
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["lowLeverage"], 84.0);
        assert_eq!(json["lowVol"], 52.73);
        assert!(json.get("low_vol").is_none());
    }

    #[test]
    fn test_values_order() {
        let result = ScoreResult {
            value: 1.0,
            low_vol: 6.0,
            total: 7.0,
            ..Default::default()
        };
        let values = result.values();
        assert_eq!(values[0], 1.0);
        assert_eq!(values[5], 6.0);
        assert_eq!(values[6], 7.0);
    }
}
