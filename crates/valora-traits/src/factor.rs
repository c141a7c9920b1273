//! Factor trait for scoring one company on one dimension.
//!
//! This module defines the `Factor` trait, the core abstraction behind each
//! component of the composite score. A factor is a pure function of a
//! single company record and its sector variant.

use serde::{Deserialize, Serialize};

use crate::{CompanyMetrics, Metric, Sector};

/// Factor category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorCategory {
    /// Price multiples
    Value,
    /// Profitability and capital adequacy
    Quality,
    /// Revenue and profit growth
    Growth,
    /// Dividend yield and payout safety
    Dividend,
    /// Indebtedness
    Leverage,
    /// Price volatility
    Volatility,
}

impl FactorCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Value => "Valuation multiples turned into yields",
            Self::Quality => "Profitability ratios, sector-aware",
            Self::Growth => "Five-year revenue and profit growth",
            Self::Dividend => "Dividend yield discounted by payout safety",
            Self::Leverage => "Debt burden, sector-aware (penalty)",
            Self::Volatility => "Annualized price volatility (penalty)",
        }
    }
}

/// A single component of the composite score.
///
/// Implementations must be thread-safe (`Send + Sync`) so batches can be
/// scored in parallel, and total: `score` returns a value in `[0, 100]` for
/// every input, never NaN.
///
/// # Example
///
/// ```
/// use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};
///
/// struct YieldOnly;
///
/// impl Factor for YieldOnly {
///     fn name(&self) -> &str {
///         "yield_only"
///     }
///
///     fn category(&self) -> FactorCategory {
///         FactorCategory::Dividend
///     }
///
///     fn required_metrics(&self) -> &[Metric] {
///         &[Metric::DividendYield]
///     }
///
///     fn score(&self, metrics: &CompanyMetrics, _sector: Sector) -> f64 {
///         metrics.value(Metric::DividendYield).clamp(0.0, 100.0)
///     }
/// }
///
/// let record = CompanyMetrics::new("TAEE11").with(Metric::DividendYield, 9.4);
/// assert_eq!(YieldOnly.score(&record, record.sector()), 9.4);
/// ```
pub trait Factor: Send + Sync {
    /// Returns the name of this factor.
    ///
    /// The name is unique and is used for lookup in the registry and in
    /// log output.
    fn name(&self) -> &str;

    /// Returns the category this factor belongs to.
    fn category(&self) -> FactorCategory;

    /// Returns the metrics this factor reads.
    ///
    /// Missing metrics never make a factor fail; this list is used for
    /// introspection and for deciding which columns a batch should carry.
    fn required_metrics(&self) -> &[Metric];

    /// Whether a higher score is unfavorable.
    ///
    /// Penalty factors are inverted (`100 - score`) when reported and carry
    /// negative aggregation weights.
    fn is_penalty(&self) -> bool {
        false
    }

    /// Whether the factor switches formulas on the sector variant.
    fn is_sector_aware(&self) -> bool {
        false
    }

    /// Computes the factor score for one company.
    ///
    /// `sector` is classified once by the caller and passed to every factor;
    /// sector-agnostic factors ignore it.
    fn score(&self, metrics: &CompanyMetrics, sector: Sector) -> f64;
}
