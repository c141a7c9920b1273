#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valora/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the Valora equity ranking engine.
//!
//! This crate provides the foundational abstractions shared by the factor
//! calculators and the aggregator: company records, the sector variant,
//! and the factor interface.

/// The version of the valora-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod factor;
pub mod sector;
pub mod types;

// Re-exports
pub use error::{Result, ValoraError};
pub use factor::{Factor, FactorCategory};
pub use sector::Sector;
pub use types::{CompanyMetrics, MarketData, Metric, Ticker};
