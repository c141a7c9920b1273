//! Factor calculators for the valora ranking engine.
//!
//! This crate provides the six components of the composite score:
//! - Value: earnings, book and EBIT yields derived from price multiples
//! - Quality: profitability, with separate bank and insurer models
//! - Growth: five-year revenue and profit CAGR
//! - Dividend: yield discounted by payout safety
//! - Leverage: debt burden penalty, with a bank capital model
//! - Volatility: annualized volatility penalty
//!
//! Every calculator is a pure function of one [`CompanyMetrics`] record
//! returning a score in `[0, 100]`; none of them fail or return NaN.
//!
//! # Example
//!
//! ```
//! use valora_factors::quality::{QualityConfig, quality_score};
//! use valora_factors::registry::available_factors;
//! use valora_traits::{CompanyMetrics, Metric};
//!
//! let record = CompanyMetrics::new("ITUB4")
//!     .with_segment("Bancos")
//!     .with(Metric::ReturnOnEquity, 21.0)
//!     .with(Metric::EquityToAssets, 0.08);
//!
//! let score = quality_score(&record, record.sector(), &QualityConfig::default());
//! assert!((0.0..=100.0).contains(&score));
//! assert_eq!(available_factors().len(), 6);
//! ```
//!
//! [`CompanyMetrics`]: valora_traits::CompanyMetrics

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod dividend;
pub mod growth;
pub mod leverage;
pub mod normalize;
pub mod quality;
pub mod registry;
pub mod value;
pub mod volatility;
pub mod vqr;

// Re-export key types
pub use dividend::{DividendConfig, DividendFactor};
pub use growth::{GrowthConfig, GrowthFactor};
pub use leverage::{LeverageConfig, LeverageFactor};
pub use normalize::SigmoidParams;
pub use quality::{QualityConfig, QualityFactor};
pub use registry::{FactorInfo, available_factors, create_factor};
pub use value::{ValueConfig, ValueFactor};
pub use volatility::{VolatilityConfig, VolatilityFactor};
