//! Quality model for banks.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Metric};

use crate::normalize::{SigmoidParams, weighted_score};

/// Configuration for the banking quality model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BankQualityConfig {
    /// ROE curve (default: midpoint 11, steepness 0.25)
    pub roe: SigmoidParams,
    /// ROA curve (default: midpoint 1.2, steepness 3)
    pub roa: SigmoidParams,
    /// Net margin curve (default: midpoint 10, steepness 0.5)
    pub net_margin: SigmoidParams,
    /// Equity-to-assets curve, in percent (default: midpoint 10.5, steepness 0.2)
    pub capital: SigmoidParams,

    /// ROE weight (default: 0.35)
    pub roe_weight: f64,
    /// ROA weight (default: 0.25)
    pub roa_weight: f64,
    /// Net margin weight (default: 0.2)
    pub net_margin_weight: f64,
    /// Capital ratio weight (default: 0.2)
    pub capital_weight: f64,
}

impl Default for BankQualityConfig {
    fn default() -> Self {
        Self {
            roe: SigmoidParams::new(11.0, 0.25),
            roa: SigmoidParams::new(1.2, 3.0),
            net_margin: SigmoidParams::new(10.0, 0.5),
            capital: SigmoidParams::new(10.5, 0.2),
            roe_weight: 0.35,
            roa_weight: 0.25,
            net_margin_weight: 0.2,
            capital_weight: 0.2,
        }
    }
}

/// Compute the quality score of a bank.
///
/// The capital ratio is equity-to-assets expressed in percent.
#[must_use]
pub fn bank_quality(metrics: &CompanyMetrics, config: &BankQualityConfig) -> f64 {
    let capital_ratio = metrics.value(Metric::EquityToAssets) * 100.0;

    weighted_score(&[
        (config.roe.scale(metrics.value(Metric::ReturnOnEquity)), config.roe_weight),
        (config.roa.scale(metrics.value(Metric::ReturnOnAssets)), config.roa_weight),
        (config.net_margin.scale(metrics.value(Metric::NetMargin)), config.net_margin_weight),
        (config.capital.scale(capital_ratio), config.capital_weight),
    ])
}
