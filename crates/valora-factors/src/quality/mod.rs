//! Quality factor with sector-specific models.
//!
//! This module scores profitability with one of three formula sets chosen by
//! the company's [`Sector`]:
//! - Universal: ROIC, ROE, ROA and EBIT margin, with ROE discounted for leverage
//! - Bank: ROE, ROA, net margin and equity-to-assets capital ratio
//! - Insurance: ROIC, ROE, ROA, capital ratio and a net cash buffer
//!
//! Every sub-score is a sigmoid on a sector-calibrated midpoint; the weighted
//! sum is rounded and clamped to `[0, 100]`.

mod bank;
mod insurance;
mod universal;

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};

pub use bank::{BankQualityConfig, bank_quality};
pub use insurance::{InsuranceQualityConfig, cash_buffer, insurance_quality};
pub use universal::{UniversalQualityConfig, universal_quality};

/// Configuration for the quality factor, one table per sector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Non-financial companies.
    pub universal: UniversalQualityConfig,
    /// Banks.
    pub bank: BankQualityConfig,
    /// Insurers.
    pub insurance: InsuranceQualityConfig,
}

/// Compute the quality score of a company under its sector model.
#[must_use]
pub fn quality_score(metrics: &CompanyMetrics, sector: Sector, config: &QualityConfig) -> f64 {
    match sector {
        Sector::Universal => universal_quality(metrics, &config.universal),
        Sector::Bank => bank_quality(metrics, &config.bank),
        Sector::Insurance => insurance_quality(metrics, &config.insurance),
    }
}

/// Quality factor.
///
/// # Example
///
/// ```
/// use valora_factors::quality::QualityFactor;
/// use valora_traits::{CompanyMetrics, Factor, Metric};
///
/// let record = CompanyMetrics::new("WEGE3")
///     .with(Metric::ReturnOnInvestedCapital, 18.0)
///     .with(Metric::ReturnOnEquity, 20.0)
///     .with(Metric::ReturnOnAssets, 12.0)
///     .with(Metric::EbitMargin, 15.0)
///     .with(Metric::NetDebtToEbitda, 1.2);
///
/// let score = QualityFactor::default().score(&record, record.sector());
/// assert_eq!(score, 73.48);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QualityFactor {
    config: QualityConfig,
}

impl QualityFactor {
    /// Metrics read by this factor.
    pub const REQUIRED_METRICS: &[Metric] = &[
        Metric::ReturnOnInvestedCapital,
        Metric::ReturnOnEquity,
        Metric::ReturnOnAssets,
        Metric::EbitMargin,
        Metric::NetMargin,
        Metric::EquityToAssets,
        Metric::NetDebtToEbitda,
        Metric::NetDebt,
        Metric::TotalAssets,
    ];

    /// Create a new quality factor with the given configuration.
    #[must_use]
    pub const fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &QualityConfig {
        &self.config
    }
}

impl Factor for QualityFactor {
    fn name(&self) -> &str {
        "quality"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Quality
    }

    fn required_metrics(&self) -> &[Metric] {
        Self::REQUIRED_METRICS
    }

    fn is_sector_aware(&self) -> bool {
        true
    }

    fn score(&self, metrics: &CompanyMetrics, sector: Sector) -> f64 {
        quality_score(metrics, sector, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SigmoidParams;

    fn profitable() -> CompanyMetrics {
        CompanyMetrics::new("TEST3")
            .with(Metric::ReturnOnInvestedCapital, 12.0)
            .with(Metric::ReturnOnEquity, 15.0)
            .with(Metric::ReturnOnAssets, 8.0)
            .with(Metric::EbitMargin, 10.0)
            .with(Metric::NetMargin, 9.0)
            .with(Metric::EquityToAssets, 0.2)
            .with(Metric::NetDebtToEbitda, 1.5)
            .with(Metric::NetDebt, -1e8)
            .with(Metric::TotalAssets, 1e9)
    }

    #[test]
    fn test_dispatch_follows_sector() {
        let record = profitable();
        let config = QualityConfig::default();

        assert_eq!(
            quality_score(&record, Sector::Universal, &config),
            universal_quality(&record, &config.universal)
        );
        assert_eq!(
            quality_score(&record, Sector::Bank, &config),
            bank_quality(&record, &config.bank)
        );
        assert_eq!(
            quality_score(&record, Sector::Insurance, &config),
            insurance_quality(&record, &config.insurance)
        );
    }

    #[test]
    fn test_models_differ() {
        let record = profitable();
        let config = QualityConfig::default();
        let universal = quality_score(&record, Sector::Universal, &config);
        let bank = quality_score(&record, Sector::Bank, &config);
        let insurance = quality_score(&record, Sector::Insurance, &config);
        assert_ne!(universal, bank);
        assert_ne!(universal, insurance);
    }

    #[test]
    fn test_segment_routes_through_factor() {
        let factor = QualityFactor::default();
        let bank = profitable().with_segment("Bank");
        let universal = profitable();
        assert_eq!(
            factor.score(&bank, bank.sector()),
            bank_quality(&bank, &factor.config().bank)
        );
        assert_eq!(
            factor.score(&universal, universal.sector()),
            universal_quality(&universal, &factor.config().universal)
        );
    }

    #[test]
    fn test_partial_config_override() {
        let json = r#"{
            "bank": { "roe_weight": 0.5, "capital": { "midpoint": 12.0, "steepness": 0.3 } }
        }"#;
        let config: QualityConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.bank.roe_weight, 0.5);
        assert_eq!(config.bank.capital, SigmoidParams::new(12.0, 0.3));
        assert_eq!(config.bank.roa_weight, 0.25);
        assert_eq!(config.universal.roic, SigmoidParams::new(8.0, 0.175));
        assert_eq!(config.insurance.cash_ceiling, 50.0);
    }

    #[test]
    fn test_factor_metadata() {
        let factor = QualityFactor::default();
        assert_eq!(factor.name(), "quality");
        assert!(factor.is_sector_aware());
        assert!(!factor.is_penalty());
    }
}
