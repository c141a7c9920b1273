//! Quality model for insurers.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Metric};

use crate::normalize::{SigmoidParams, clamp, weighted_score};

/// Configuration for the insurance quality model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsuranceQualityConfig {
    /// ROIC curve (default: midpoint 25, steepness 0.15)
    pub roic: SigmoidParams,
    /// ROE curve (default: midpoint 30, steepness 0.12)
    pub roe: SigmoidParams,
    /// ROA curve (default: midpoint 10, steepness 0.2)
    pub roa: SigmoidParams,
    /// Equity-to-assets curve, in percent (default: midpoint 25, steepness 0.18)
    pub capital: SigmoidParams,
    /// Cash buffer curve, in percent of assets (default: midpoint 20, steepness 0.25)
    pub cash: SigmoidParams,

    /// ROIC weight (default: 0.35)
    pub roic_weight: f64,
    /// ROE weight (default: 0.25)
    pub roe_weight: f64,
    /// ROA weight (default: 0.15)
    pub roa_weight: f64,
    /// Capital ratio weight (default: 0.15)
    pub capital_weight: f64,
    /// Cash buffer weight (default: 0.1)
    pub cash_weight: f64,

    /// Lower bound of the cash buffer (default: -25.0)
    pub cash_floor: f64,
    /// Upper bound of the cash buffer (default: 50.0)
    pub cash_ceiling: f64,
}

impl Default for InsuranceQualityConfig {
    fn default() -> Self {
        Self {
            roic: SigmoidParams::new(25.0, 0.15),
            roe: SigmoidParams::new(30.0, 0.12),
            roa: SigmoidParams::new(10.0, 0.2),
            capital: SigmoidParams::new(25.0, 0.18),
            cash: SigmoidParams::new(20.0, 0.25),
            roic_weight: 0.35,
            roe_weight: 0.25,
            roa_weight: 0.15,
            capital_weight: 0.15,
            cash_weight: 0.1,
            cash_floor: -25.0,
            cash_ceiling: 50.0,
        }
    }
}

/// Net cash as a percentage of total assets, clamped to the configured band.
///
/// Net debt of zero over zero assets is undefined and yields NaN, which
/// zeroes the quality score.
#[must_use]
pub fn cash_buffer(metrics: &CompanyMetrics, config: &InsuranceQualityConfig) -> f64 {
    let raw = -metrics.value(Metric::NetDebt) / metrics.value(Metric::TotalAssets) * 100.0;
    clamp(raw, config.cash_floor, config.cash_ceiling)
}

/// Compute the quality score of an insurer.
#[must_use]
pub fn insurance_quality(metrics: &CompanyMetrics, config: &InsuranceQualityConfig) -> f64 {
    let capital_ratio = metrics.value(Metric::EquityToAssets) * 100.0;
    let cash = cash_buffer(metrics, config);

    weighted_score(&[
        (
            config.roic.scale(metrics.value(Metric::ReturnOnInvestedCapital)),
            config.roic_weight,
        ),
        (config.roe.scale(metrics.value(Metric::ReturnOnEquity)), config.roe_weight),
        (config.roa.scale(metrics.value(Metric::ReturnOnAssets)), config.roa_weight),
        (config.capital.scale(capital_ratio), config.capital_weight),
        (config.cash.scale(cash), config.cash_weight),
    ])
}
