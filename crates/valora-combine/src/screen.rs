//! Valuation-to-quality ratio screen.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;
use valora_factors::vqr::{pe_to_roe, valuation_to_quality};
use valora_traits::{CompanyMetrics, Metric, Ticker};

/// One company that passed the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VqrEntry {
    /// Company identifier
    pub ticker: Ticker,
    /// Price-to-book
    pub pb: f64,
    /// Price-to-EBIT
    pub price_to_ebit: f64,
    /// Price-to-earnings
    pub pe: f64,
    /// Return on invested capital, in percent
    pub roic: f64,
    /// Return on equity, in percent
    pub roe: f64,
    /// Price-to-EBIT per point of ROIC
    pub vqr: f64,
    /// P/E per point of ROE
    pub pe_roe: f64,
    /// Position in the screen (0-based)
    pub position: usize,
}

/// Screen companies by valuation-to-quality ratio, cheapest first.
///
/// A company is kept when both ratios are defined and positive and its
/// price-to-book is positive. Equal ratios keep their input order.
///
/// # Example
///
/// ```
/// use valora_combine::vqr_screen;
/// use valora_traits::{CompanyMetrics, Metric};
///
/// let company = |ticker: &str, p_ebit: f64| {
///     CompanyMetrics::new(ticker)
///         .with(Metric::PriceToEbit, p_ebit)
///         .with(Metric::ReturnOnInvestedCapital, 20.0)
///         .with(Metric::PriceToEarnings, 10.0)
///         .with(Metric::ReturnOnEquity, 20.0)
///         .with(Metric::PriceToBook, 1.5)
/// };
///
/// let screen = vqr_screen(&[company("PRICEY3", 30.0), company("CHEAP3", 6.0)]);
/// assert_eq!(screen[0].ticker, "CHEAP3");
/// assert_eq!(screen[0].vqr, 30.0);
/// ```
#[must_use]
pub fn vqr_screen(records: &[CompanyMetrics]) -> Vec<VqrEntry> {
    let mut kept: Vec<VqrEntry> = records
        .iter()
        .filter_map(|record| {
            let vqr = valuation_to_quality(record).filter(|&v| v > 0.0)?;
            let pe_roe = pe_to_roe(record).filter(|&v| v > 0.0)?;
            let pb = record.value(Metric::PriceToBook);
            (pb > 0.0).then(|| VqrEntry {
                ticker: record.ticker.clone(),
                pb,
                price_to_ebit: record.value(Metric::PriceToEbit),
                pe: record.value(Metric::PriceToEarnings),
                roic: record.value(Metric::ReturnOnInvestedCapital),
                roe: record.value(Metric::ReturnOnEquity),
                vqr,
                pe_roe,
                position: 0,
            })
        })
        .collect();

    kept.sort_by(|a, b| a.vqr.partial_cmp(&b.vqr).unwrap_or(Ordering::Equal));
    for (position, entry) in kept.iter_mut().enumerate() {
        entry.position = position;
    }

    debug!(
        screened = records.len(),
        kept = kept.len(),
        "Valuation-to-quality screen"
    );
    kept
}
