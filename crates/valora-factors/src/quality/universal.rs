//! Quality model for non-financial companies.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Metric};

use crate::normalize::{SigmoidParams, weighted_score};

/// Configuration for the universal quality model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalQualityConfig {
    /// ROIC curve (default: midpoint 8, steepness 0.175)
    pub roic: SigmoidParams,
    /// ROE curve (default: midpoint 12, steepness 0.15)
    pub roe: SigmoidParams,
    /// ROA curve (default: midpoint 6, steepness 0.2)
    pub roa: SigmoidParams,
    /// EBIT margin curve (default: midpoint 10, steepness 0.175)
    pub margin: SigmoidParams,

    /// ROIC weight (default: 0.4)
    pub roic_weight: f64,
    /// ROE weight before the leverage discount (default: 0.25)
    pub roe_weight: f64,
    /// ROA weight (default: 0.2)
    pub roa_weight: f64,
    /// EBIT margin weight (default: 0.15)
    pub margin_weight: f64,

    /// Net debt / EBITDA at which ROE stops counting (default: 4.0)
    pub leverage_ceiling: f64,
}

impl Default for UniversalQualityConfig {
    fn default() -> Self {
        Self {
            roic: SigmoidParams::new(8.0, 0.175),
            roe: SigmoidParams::new(12.0, 0.15),
            roa: SigmoidParams::new(6.0, 0.2),
            margin: SigmoidParams::new(10.0, 0.175),
            roic_weight: 0.4,
            roe_weight: 0.25,
            roa_weight: 0.2,
            margin_weight: 0.15,
            leverage_ceiling: 4.0,
        }
    }
}

/// Whether the company is unprofitable enough to score zero outright.
///
/// That is the case when ROIC is negative, or when more than one of ROE,
/// ROA and EBIT margin is negative; a single positive ROE inflated by debt
/// must not mask losses elsewhere.
fn is_unprofitable(roic: f64, roe: f64, roa: f64, margin: f64) -> bool {
    roic < 0.0 || [roe, roa, margin].iter().filter(|&&v| v < 0.0).count() > 1
}

/// Compute the quality score of a non-financial company.
#[must_use]
pub fn universal_quality(metrics: &CompanyMetrics, config: &UniversalQualityConfig) -> f64 {
    let roic = metrics.value(Metric::ReturnOnInvestedCapital);
    let roe = metrics.value(Metric::ReturnOnEquity);
    let roa = metrics.value(Metric::ReturnOnAssets);
    let margin = metrics.value(Metric::EbitMargin);

    if is_unprofitable(roic, roe, roa, margin) {
        return 0.0;
    }

    let leverage_factor =
        (metrics.value(Metric::NetDebtToEbitda) / config.leverage_ceiling).min(1.0);
    let roe_weight = config.roe_weight * (1.0 - leverage_factor);

    weighted_score(&[
        (config.roic.scale(roic), config.roic_weight),
        (config.roe.scale(roe), roe_weight),
        (config.roa.scale(roa), config.roa_weight),
        (config.margin.scale(margin), config.margin_weight),
    ])
}
