//! Score aggregation and ranking for the valora equity ranking engine.
//!
//! This crate turns company records into composite scores and ranks them.
//! It provides:
//! - [`FactorWeights`] and [`EngineConfig`]: the aggregation weights and every
//!   factor table, all overridable through serde
//! - [`Combiner`] and [`WeightedCombiner`]: per-record scoring
//! - [`score_batch`] and [`rank_frame`]: parallel batch scoring with a stable
//!   total-descending ranking
//! - [`vqr_screen`]: the valuation-to-quality ratio screen
//!
//! # Examples
//!
//! ```rust
//! use valora_combine::{WeightedCombiner, score_batch};
//! use valora_traits::{CompanyMetrics, Metric};
//!
//! let records = vec![
//!     CompanyMetrics::new("WEGE3")
//!         .with(Metric::ReturnOnInvestedCapital, 25.0)
//!         .with(Metric::Volatility12M, 22.0),
//!     CompanyMetrics::new("ITUB4")
//!         .with_segment("Bancos")
//!         .with(Metric::ReturnOnEquity, 21.0),
//! ];
//!
//! let ranked = score_batch(&records, &WeightedCombiner::default());
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].rank, 1);
//! ```

mod combiner;
mod config;
mod ranking;
mod screen;
mod weighted;
mod weights;

#[cfg(test)]
mod properties;

// Re-export main types
pub use combiner::{Combiner, ComponentScores, ScoreResult};
pub use config::EngineConfig;
pub use ranking::{RankedScore, rank_frame, score_batch};
pub use screen::{VqrEntry, vqr_screen};
pub use weighted::WeightedCombiner;
pub use weights::FactorWeights;
