#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valora/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Crate Organization
//!
//! - [`traits`] - Shared types and the [`Factor`] trait
//! - [`factors`] - The six factor calculators and their configuration
//! - [`combine`] - Weighted aggregation, batch ranking and the VQR screen
//!
//! ## Pipeline
//!
//! 1. The segment label of a record is classified once into a [`Sector`]
//! 2. **Factors** score the record on a 0 to 100 scale; quality and leverage
//!    pick their model from the sector
//! 3. The **combiner** inverts the two penalties and blends all six scores
//!    into a weighted total
//! 4. **Ranking** scores a batch in parallel and sorts it by total, keeping
//!    input order among ties

/// Version information for the valora crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types and traits.
///
/// Re-exports [`valora_traits`]: the metric catalogue, [`CompanyMetrics`],
/// [`MarketData`], [`Sector`], the [`Factor`] trait and the error type.
pub mod traits {
    pub use valora_traits::*;
}

// Re-export core types at top level for convenience
pub use valora_combine::{Combiner, ScoreResult, WeightedCombiner};
pub use valora_traits::{CompanyMetrics, Factor, MarketData, Metric, Sector};

// Re-export error types
pub use valora_traits::{Result, ValoraError};

// ============================================================================
// Factor Implementations
// ============================================================================

/// Factor calculators.
///
/// ## Positive factors
///
/// - **Value**: square-rooted earnings, book and EBIT yields on a log scale
/// - **Quality**: sigmoid-scaled profitability, with bank and insurer models
/// - **Growth**: five-year revenue and profit CAGR
/// - **Dividend**: yield discounted by payout safety
///
/// ## Penalties
///
/// - **Leverage**: debt ratios above thresholds, or Tier 1 shortfall for banks
/// - **Volatility**: annualized volatility on a log scale
///
/// # Example
///
/// ```
/// use valora::factors::create_factor;
/// use valora::{CompanyMetrics, Metric, Sector};
///
/// let growth = create_factor("growth").unwrap();
/// let record = CompanyMetrics::new("TEST3")
///     .with(Metric::ProfitCagr5y, 10.03)
///     .with(Metric::RevenueCagr5y, 8.07);
///
/// assert_eq!(growth.score(&record, Sector::Universal), 41.64);
/// ```
pub mod factors {
    pub use valora_factors::*;
}

// ============================================================================
// Aggregation
// ============================================================================

/// Aggregation and ranking.
///
/// [`WeightedCombiner`] blends the six factor scores with the weights of a
/// [`combine::FactorWeights`] table. [`combine::score_batch`] and
/// [`combine::rank_frame`] rank whole batches; [`combine::vqr_screen`] lists
/// companies by price paid per point of ROIC.
///
/// # Example
///
/// ```
/// use valora::combine::{FactorWeights, WeightedCombiner};
///
/// let weights = FactorWeights {
///     value: 0.6,
///     growth: 0.05,
///     ..FactorWeights::default()
/// };
/// let combiner = WeightedCombiner::try_new(weights).unwrap();
/// assert_eq!(combiner.weights().value, 0.6);
/// ```
pub mod combine {
    pub use valora_combine::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use valora::prelude::*;
/// ```
///
/// This brings into scope the record and batch types, the [`Factor`] and
/// [`Combiner`] traits, the default combiner, the batch functions and the
/// error types.
pub mod prelude {
    pub use crate::combine::{
        EngineConfig, FactorWeights, RankedScore, ScoreResult, WeightedCombiner, rank_frame,
        score_batch, vqr_screen,
    };
    pub use crate::traits::{CompanyMetrics, MarketData, Metric, Sector};
    pub use crate::{Combiner, Factor};
    pub use crate::{Result, ValoraError};
}

// ============================================================================
// Tests
// ============================================================================
