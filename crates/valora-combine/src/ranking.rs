//! Batch scoring and ranking.
//!
//! Records are scored in parallel, then ordered by total score, highest
//! first. The sort is stable, so companies with equal totals keep their
//! input order and the ranking is reproducible whatever the thread count.

use std::cmp::Ordering;

use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};
use valora_traits::{
    CompanyMetrics, MarketData, Result, Ticker, ValoraError, types::TICKER_COLUMN,
};

use crate::combiner::{Combiner, ScoreResult};

/// Score of one company together with its position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    /// Company identifier
    pub ticker: Ticker,
    /// Position of the record in the input batch (0-based)
    pub index: usize,
    /// Position in the ranking (1-based)
    pub rank: usize,
    /// Scores of the company
    #[serde(flatten)]
    pub score: ScoreResult,
}

fn descending_total(a: &ScoreResult, b: &ScoreResult) -> Ordering {
    b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal)
}

/// Score every record and rank the batch by total, highest first.
///
/// Ties keep their input order.
///
/// # Example
///
/// ```
/// use valora_combine::{WeightedCombiner, score_batch};
/// use valora_traits::{CompanyMetrics, Metric};
///
/// let records = vec![
///     CompanyMetrics::new("EXPENSIVE3").with(Metric::PriceToEarnings, 80.0),
///     CompanyMetrics::new("CHEAP3")
///         .with(Metric::PriceToEarnings, 4.0)
///         .with(Metric::PriceToBook, 0.8)
///         .with(Metric::EvToEbit, 3.0),
/// ];
///
/// let ranked = score_batch(&records, &WeightedCombiner::default());
/// assert_eq!(ranked[0].ticker, "CHEAP3");
/// assert_eq!(ranked[0].rank, 1);
/// assert_eq!(ranked[0].index, 1);
/// ```
pub fn score_batch<C>(records: &[CompanyMetrics], combiner: &C) -> Vec<RankedScore>
where
    C: Combiner + ?Sized,
{
    debug!(
        records = records.len(),
        combiner = combiner.name(),
        "Scoring batch"
    );

    let scores: Vec<ScoreResult> = records.par_iter().map(|r| combiner.score(r)).collect();

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| descending_total(&scores[a], &scores[b]));

    order
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let ticker = records[index].ticker.clone();
            trace!(%ticker, rank = position + 1, total = scores[index].total, "Ranked");
            RankedScore {
                ticker,
                index,
                rank: position + 1,
                score: scores[index],
            }
        })
        .collect()
}

fn score_column(ranked: &[RankedScore], field: fn(&ScoreResult) -> f64) -> Vec<f64> {
    ranked.iter().map(|r| field(&r.score)).collect()
}

fn rank_column(ranked: &[RankedScore]) -> Result<Vec<u32>> {
    ranked
        .iter()
        .map(|r| {
            u32::try_from(r.rank).map_err(|_| {
                ValoraError::InvalidData(format!("Rank {} of {} exceeds u32", r.rank, r.ticker))
            })
        })
        .collect()
}

/// Score a tabular batch and return the ranking as a DataFrame.
///
/// The output has one row per company, highest total first, with columns
/// `ticker`, `rank`, `value`, `quality`, `growth`, `dividend`,
/// `low_leverage`, `low_vol` and `total`.
///
/// # Errors
///
/// Returns an error if the batch cannot be converted into records (see
/// [`MarketData::records`]) or the output frame cannot be built.
pub fn rank_frame<C>(data: &MarketData, combiner: &C) -> Result<DataFrame>
where
    C: Combiner + ?Sized,
{
    let records = data.records()?;
    let ranked = score_batch(&records, combiner);

    let tickers: Vec<&str> = ranked.iter().map(|r| r.ticker.as_str()).collect();
    let ranks = rank_column(&ranked)?;

    let frame = df!(
        TICKER_COLUMN => tickers,
        "rank" => ranks,
        "value" => score_column(&ranked, |s| s.value),
        "quality" => score_column(&ranked, |s| s.quality),
        "growth" => score_column(&ranked, |s| s.growth),
        "dividend" => score_column(&ranked, |s| s.dividend),
        "low_leverage" => score_column(&ranked, |s| s.low_leverage),
        "low_vol" => score_column(&ranked, |s| s.low_vol),
        "total" => score_column(&ranked, |s| s.total),
    )?;

    Ok(frame)
}
