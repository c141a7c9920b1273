//! Factor registry for discovering and instantiating the scoring factors.
//!
//! This module provides metadata and name-based construction for every
//! factor in the valora-factors library.

use serde::Serialize;
use valora_traits::{Factor, FactorCategory, Metric, Result, ValoraError};

use crate::{
    dividend::DividendFactor, growth::GrowthFactor, leverage::LeverageFactor,
    quality::QualityFactor, value::ValueFactor, volatility::VolatilityFactor,
};

/// Metadata about a factor.
#[derive(Debug, Clone, Serialize)]
pub struct FactorInfo {
    /// Unique identifier for the factor
    pub name: &'static str,

    /// Category classification
    pub category: FactorCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Whether a higher raw score is unfavorable
    pub is_penalty: bool,

    /// Whether the formula depends on the sector variant
    pub sector_aware: bool,

    /// Metrics the factor reads; absent ones count as zero
    pub required_metrics: &'static [Metric],
}

/// Get information about all available factors, in aggregation order.
#[must_use]
pub fn available_factors() -> Vec<FactorInfo> {
    vec![
        FactorInfo {
            name: "value",
            category: FactorCategory::Value,
            description: "Square-rooted earnings, book and EBIT yields on a log scale",
            is_penalty: false,
            sector_aware: false,
            required_metrics: ValueFactor::REQUIRED_METRICS,
        },
        FactorInfo {
            name: "quality",
            category: FactorCategory::Quality,
            description: "Sigmoid-scaled profitability, with bank and insurer models",
            is_penalty: false,
            sector_aware: true,
            required_metrics: QualityFactor::REQUIRED_METRICS,
        },
        FactorInfo {
            name: "growth",
            category: FactorCategory::Growth,
            description: "Five-year revenue and profit CAGR with negative-growth deductions",
            is_penalty: false,
            sector_aware: false,
            required_metrics: GrowthFactor::REQUIRED_METRICS,
        },
        FactorInfo {
            name: "dividend",
            category: FactorCategory::Dividend,
            description: "Dividend yield discounted by payout safety",
            is_penalty: false,
            sector_aware: false,
            required_metrics: DividendFactor::REQUIRED_METRICS,
        },
        FactorInfo {
            name: "leverage",
            category: FactorCategory::Leverage,
            description: "Debt ratios above thresholds, or Tier 1 shortfall for banks",
            is_penalty: true,
            sector_aware: true,
            required_metrics: LeverageFactor::REQUIRED_METRICS,
        },
        FactorInfo {
            name: "volatility",
            category: FactorCategory::Volatility,
            description: "Annualized volatility between 15% and 65% on a log scale",
            is_penalty: true,
            sector_aware: false,
            required_metrics: VolatilityFactor::REQUIRED_METRICS,
        },
    ]
}

/// Get information about a specific factor by name.
#[must_use]
pub fn get_factor_info(name: &str) -> Option<FactorInfo> {
    available_factors()
        .into_iter()
        .find(|info| info.name == name)
}

/// Create a factor with its default configuration by name.
///
/// # Errors
///
/// Returns [`ValoraError::FactorNotFound`] for an unknown name.
pub fn create_factor(name: &str) -> Result<Box<dyn Factor>> {
    match name {
        "value" => Ok(Box::new(ValueFactor::default())),
        "quality" => Ok(Box::new(QualityFactor::default())),
        "growth" => Ok(Box::new(GrowthFactor::default())),
        "dividend" => Ok(Box::new(DividendFactor::default())),
        "leverage" | "leverage_penalty" => Ok(Box::new(LeverageFactor::default())),
        "volatility" | "volatility_penalty" => Ok(Box::new(VolatilityFactor::default())),
        _ => Err(ValoraError::FactorNotFound(format!(
            "Unknown factor: '{name}'"
        ))),
    }
}
