//! Common types used throughout the Valora engine.
//!
//! This module defines the metric catalogue, the per-company record consumed
//! by the calculators, and the tabular batch wrapper.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Result, Sector, ValoraError};

/// A listed company identifier, typically an exchange ticker like "WEGE3".
pub type Ticker = String;

/// Name of the identifier column in a [`MarketData`] frame.
pub const TICKER_COLUMN: &str = "ticker";

/// Name of the segment label column in a [`MarketData`] frame.
pub const SEGMENT_COLUMN: &str = "segment";

/// Numeric fields produced by the data-acquisition layer.
///
/// Ratios and margins are expressed in percent unless noted otherwise.
/// Each variant serializes to the camelCase key the acquisition layer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Price to earnings (P/E).
    PriceToEarnings,
    /// Price to book value (P/B).
    PriceToBook,
    /// Price to EBIT.
    PriceToEbit,
    /// Enterprise value to EBIT.
    EvToEbit,
    /// Return on equity.
    ReturnOnEquity,
    /// Return on invested capital.
    ReturnOnInvestedCapital,
    /// Return on assets.
    ReturnOnAssets,
    /// EBIT margin.
    EbitMargin,
    /// Net margin.
    NetMargin,
    /// Equity to total assets, as a fraction.
    EquityToAssets,
    /// Net debt to equity.
    NetDebtToEquity,
    /// Net debt to EBITDA.
    NetDebtToEbitda,
    /// Net debt to EBIT.
    NetDebtToEbit,
    /// Gross debt to equity.
    GrossDebtToEquity,
    /// Total assets, in currency units.
    TotalAssets,
    /// Shareholder equity, in currency units.
    Equity,
    /// Net debt, in currency units. Negative means a net cash position.
    NetDebt,
    /// Trailing dividend yield.
    DividendYield,
    /// Dividend payout ratio.
    PayoutRatio,
    /// Five-year profit CAGR.
    ProfitCagr5y,
    /// Five-year revenue CAGR.
    RevenueCagr5y,
    /// Annualized volatility over the last twelve months.
    #[serde(rename = "volatility12M")]
    Volatility12M,
    /// Annualized volatility over the full price history.
    VolatilityTotal,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::PriceToEarnings,
        Self::PriceToBook,
        Self::PriceToEbit,
        Self::EvToEbit,
        Self::ReturnOnEquity,
        Self::ReturnOnInvestedCapital,
        Self::ReturnOnAssets,
        Self::EbitMargin,
        Self::NetMargin,
        Self::EquityToAssets,
        Self::NetDebtToEquity,
        Self::NetDebtToEbitda,
        Self::NetDebtToEbit,
        Self::GrossDebtToEquity,
        Self::TotalAssets,
        Self::Equity,
        Self::NetDebt,
        Self::DividendYield,
        Self::PayoutRatio,
        Self::ProfitCagr5y,
        Self::RevenueCagr5y,
        Self::Volatility12M,
        Self::VolatilityTotal,
    ];

    /// The canonical record key for this metric.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::PriceToEarnings => "priceToEarnings",
            Self::PriceToBook => "priceToBook",
            Self::PriceToEbit => "priceToEbit",
            Self::EvToEbit => "evToEbit",
            Self::ReturnOnEquity => "returnOnEquity",
            Self::ReturnOnInvestedCapital => "returnOnInvestedCapital",
            Self::ReturnOnAssets => "returnOnAssets",
            Self::EbitMargin => "ebitMargin",
            Self::NetMargin => "netMargin",
            Self::EquityToAssets => "equityToAssets",
            Self::NetDebtToEquity => "netDebtToEquity",
            Self::NetDebtToEbitda => "netDebtToEbitda",
            Self::NetDebtToEbit => "netDebtToEbit",
            Self::GrossDebtToEquity => "grossDebtToEquity",
            Self::TotalAssets => "totalAssets",
            Self::Equity => "equity",
            Self::NetDebt => "netDebt",
            Self::DividendYield => "dividendYield",
            Self::PayoutRatio => "payoutRatio",
            Self::ProfitCagr5y => "profitCagr5y",
            Self::RevenueCagr5y => "revenueCagr5y",
            Self::Volatility12M => "volatility12M",
            Self::VolatilityTotal => "volatilityTotal",
        }
    }

    /// Look up a metric by its record key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One company's fundamentals and market metrics.
///
/// Any metric may be absent, zero, negative or non-finite. Calculators read
/// values through [`CompanyMetrics::value`], which treats absent and NaN
/// values as `0.0`; infinities are kept and absorbed by each calculator's
/// clamps.
///
/// # Example
///
/// ```
/// use valora_traits::{CompanyMetrics, Metric, Sector};
///
/// let record = CompanyMetrics::new("ITUB4")
///     .with_segment("Bancos")
///     .with(Metric::ReturnOnEquity, 21.3)
///     .with(Metric::EquityToAssets, 0.08);
///
/// assert_eq!(record.sector(), Sector::Bank);
/// assert_eq!(record.value(Metric::ReturnOnEquity), 21.3);
/// assert_eq!(record.value(Metric::ReturnOnAssets), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyMetrics {
    /// Caller-supplied identifier.
    pub ticker: Ticker,

    /// Free-text segment label used for sector classification.
    #[serde(default)]
    pub segment: Option<String>,

    /// Metric values keyed by metric.
    #[serde(default)]
    pub values: BTreeMap<Metric, f64>,
}

impl CompanyMetrics {
    /// Create an empty record for a ticker.
    pub fn new(ticker: impl Into<Ticker>) -> Self {
        Self {
            ticker: ticker.into(),
            segment: None,
            values: BTreeMap::new(),
        }
    }

    /// Set a metric value, consuming and returning the record.
    #[must_use]
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.values.insert(metric, value);
        self
    }

    /// Set the segment label, consuming and returning the record.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Set a metric value in place.
    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values.insert(metric, value);
    }

    /// The raw value of a metric, if present.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// The value of a metric with absent and NaN values read as `0.0`.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        match self.get(metric) {
            Some(v) if !v.is_nan() => v,
            _ => 0.0,
        }
    }

    /// The sector variant derived from the segment label.
    #[must_use]
    pub fn sector(&self) -> Sector {
        Sector::classify(self.segment.as_deref())
    }
}

/// Tabular batch of company records.
///
/// `MarketData` wraps a Polars DataFrame with one row per company.
///
/// # Expected Schema
///
/// - `ticker`: company identifier (required, string)
/// - `segment`: segment label (optional, string)
/// - any subset of metric columns named by [`Metric::key`], numeric
///
/// Null cells are read as absent metrics. Unknown columns are ignored.
///
/// # Example
///
/// ```no_run
/// use valora_traits::MarketData;
/// use polars::prelude::*;
///
/// let df = df! {
///     "ticker" => &["WEGE3", "ITUB4"],
///     "segment" => &["Motores", "Bancos"],
///     "priceToEarnings" => &[28.5, 9.1],
/// }.unwrap();
///
/// let records = MarketData::new(df).records().unwrap();
/// assert_eq!(records.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MarketData {
    /// The underlying DataFrame.
    data: DataFrame,
}

impl MarketData {
    /// Creates a new `MarketData` instance from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns the number of companies in the batch.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Checks if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Metrics that have a column in this batch.
    pub fn metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| self.has_column(m.key()))
            .collect()
    }

    /// Convert every row into a [`CompanyMetrics`] record, in row order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the `ticker` column is missing
    /// - a ticker cell is null
    /// - a metric column cannot be cast to `Float64`
    pub fn records(&self) -> Result<Vec<CompanyMetrics>> {
        if !self.has_column(TICKER_COLUMN) {
            return Err(ValoraError::MissingColumn(TICKER_COLUMN.to_string()));
        }

        let tickers = self
            .data
            .column(TICKER_COLUMN)?
            .as_materialized_series()
            .cast(&DataType::String)?;
        let tickers = tickers.str()?;

        let mut records = Vec::with_capacity(self.len());
        for (row, ticker) in tickers.into_iter().enumerate() {
            let ticker = ticker.ok_or_else(|| {
                ValoraError::InvalidData(format!("Null ticker at row {row}"))
            })?;
            records.push(CompanyMetrics::new(ticker));
        }

        if self.has_column(SEGMENT_COLUMN) {
            let segments = self
                .data
                .column(SEGMENT_COLUMN)?
                .as_materialized_series()
                .cast(&DataType::String)?;
            for (record, segment) in records.iter_mut().zip(segments.str()?.into_iter()) {
                record.segment = segment.map(str::to_string);
            }
        }

        for metric in self.metrics() {
            let values = self
                .data
                .column(metric.key())?
                .as_materialized_series()
                .cast(&DataType::Float64)?;
            for (record, value) in records.iter_mut().zip(values.f64()?.into_iter()) {
                if let Some(value) = value {
                    record.set(metric, value);
                }
            }
        }

        Ok(records)
    }
}
