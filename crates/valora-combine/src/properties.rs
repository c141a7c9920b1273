use proptest::prelude::*;
use valora_traits::{CompanyMetrics, Metric};

use crate::{Combiner, WeightedCombiner, score_batch};

fn metric_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        6 => -1e4..1e4f64,
        2 => -1e12..1e12f64,
        1 => Just(0.0),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn segment() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["Bancos", "Seguradoras", "Insurance", "Industrial", ""])
            .prop_map(str::to_string),
    )
}

fn company() -> impl Strategy<Value = CompanyMetrics> {
    (
        prop::collection::vec(prop::option::of(metric_value()), Metric::ALL.len()),
        segment(),
    )
        .prop_map(|(values, segment)| {
            let mut record = CompanyMetrics::new("PROP3");
            record.segment = segment;
            for (metric, value) in Metric::ALL.into_iter().zip(values) {
                if let Some(value) = value {
                    record.set(metric, value);
                }
            }
            record
        })
}

proptest! {
    #[test]
    fn every_score_is_in_bounds(record in company()) {
        let result = WeightedCombiner::default().score(&record);
        for value in result.values() {
            prop_assert!((0.0..=100.0).contains(&value), "{value} out of range: {result:?}");
        }
    }

    #[test]
    fn components_are_never_nan(record in company()) {
        let components = WeightedCombiner::default().components(&record);
        prop_assert!(!components.value.is_nan());
        prop_assert!(!components.quality.is_nan());
        prop_assert!(!components.growth.is_nan());
        prop_assert!(!components.dividend.is_nan());
        prop_assert!(!components.leverage_penalty.is_nan());
        prop_assert!(!components.volatility_penalty.is_nan());
    }

    #[test]
    fn scoring_is_idempotent(record in company()) {
        let combiner = WeightedCombiner::default();
        let before = record.clone();
        let first = combiner.score(&record);
        let second = combiner.score(&record);
        let bits = |values: [f64; 7]| values.map(f64::to_bits);
        prop_assert_eq!(bits(first.values()), bits(second.values()));
        // NaN metrics make PartialEq useless here
        prop_assert_eq!(format!("{record:?}"), format!("{before:?}"));
    }

    #[test]
    fn ranking_is_a_sorted_permutation(records in prop::collection::vec(company(), 0..24)) {
        let ranked = score_batch(&records, &WeightedCombiner::default());
        prop_assert_eq!(ranked.len(), records.len());

        let mut indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..records.len()).collect::<Vec<_>>());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score.total >= pair[1].score.total);
            if pair[0].score.total == pair[1].score.total {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }
}
