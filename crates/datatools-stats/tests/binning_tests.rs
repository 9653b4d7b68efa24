//! Binning and aggregation integration tests
//!
//! Table cases with rstest, invariants with property-based testing

use datatools_stats::{
    bin_average, bin_count_heuristic, empirical_ccdf, empirical_cdf, histogram, log_histogram,
    value_counts, value_counts_f64, BinningOptions, StatsError,
};
use proptest::prelude::*;
use rstest::rstest;

fn integral(densities_and_widths: impl Iterator<Item = (f64, f64)>) -> f64 {
    densities_and_widths.map(|(density, width)| density * width).sum()
}

// === Bin count heuristic ===

#[rstest]
#[case(0, 1)]
#[case(1, 2)]
#[case(8, 3)]
#[case(9, 4)]
#[case(100, 11)]
#[case(10_000, 101)]
fn test_bin_count_heuristic(#[case] n: usize, #[case] expected: usize) {
    assert_eq!(bin_count_heuristic(n), expected);
}

// === Histograms ===

#[test]
fn test_histogram_reference_example() {
    let hist = histogram(&[1.0, 2.0, 3.0, 4.0], Some(2)).unwrap();
    assert_eq!(hist.edges(), &[1.0, 2.5, 4.0]);
    assert_eq!(hist.centers(), &[1.75, 3.25]);
    assert_eq!(hist.counts(), &[2, 2]);
}

#[test]
fn test_histogram_empty() {
    assert_eq!(
        histogram(&[], None),
        Err(StatsError::Empty {
            operation: "histogram"
        })
    );
}

#[rstest]
#[case(vec![0.0, 1.0])]
#[case(vec![-5.0, 10.0])]
#[case(vec![1.0, 2.0, -0.5])]
fn test_log_histogram_domain(#[case] data: Vec<f64>) {
    assert!(matches!(
        log_histogram(&data, None),
        Err(StatsError::NonPositive { .. })
    ));
}

#[test]
fn test_log_histogram_centers_are_arithmetic() {
    let hist = log_histogram(&[1.0, 100.0], Some(1)).unwrap();
    assert_eq!(hist.centers(), &[50.5]);
}

// === Binned averages ===

#[test]
fn test_bin_average_unique_reference_example() {
    let pairs = [(1.0, 10.0), (1.0, 20.0), (2.0, 30.0)];
    let (xs, ys) = bin_average(&pairs, &BinningOptions::new().unique(true))
        .unwrap()
        .into_parts();
    assert_eq!(xs, vec![1.0, 2.0]);
    assert_eq!(ys, vec![15.0, 30.0]);
}

#[test]
fn test_bin_average_inexact_maximum() {
    // 0.1 + 0.2 is not 0.3; the maximum must still land in the last bin
    let pairs = [(0.1, 1.0), (0.2, 2.0), (0.1 + 0.2, 3.0)];
    let options = BinningOptions::new().with_num_bins(3);
    let result = bin_average(&pairs, &options).unwrap();
    assert_eq!(result.counts().iter().sum::<usize>(), 3);
    assert!(result.len() <= 3);
}

// === Distribution functions ===

#[test]
fn test_ccdf_last_value_is_zero() {
    let dist = empirical_ccdf(&[5.0, 1.0, 3.0]).unwrap();
    assert_eq!(dist.probabilities().last(), Some(&0.0));
}

// === Properties ===

fn finite_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..200)
}

fn positive_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0e-3..1.0e6f64, 1..200)
}

proptest! {
    #[test]
    fn test_histogram_density_integrates_to_one(data in finite_sample(), k in 1usize..50) {
        let hist = histogram(&data, Some(k)).unwrap();
        let total = integral(hist.densities().iter().copied().zip(hist.widths()));
        prop_assert!((total - 1.0).abs() < 1e-9, "integral was {}", total);
    }

    #[test]
    fn test_log_histogram_density_integrates_to_one(data in positive_sample(), k in 1usize..50) {
        let hist = log_histogram(&data, Some(k)).unwrap();
        let total = integral(hist.densities().iter().copied().zip(hist.widths()));
        prop_assert!((total - 1.0).abs() < 1e-9, "integral was {}", total);
    }

    #[test]
    fn test_histogram_has_requested_bins(data in finite_sample(), k in 1usize..100) {
        let hist = histogram(&data, Some(k)).unwrap();
        prop_assert_eq!(hist.len(), k);
        prop_assert_eq!(hist.centers().len(), k);
        prop_assert_eq!(hist.total(), data.len());
    }

    #[test]
    fn test_histogram_edges_increase(data in finite_sample(), k in 1usize..50) {
        let hist = histogram(&data, Some(k)).unwrap();
        prop_assert!(hist.edges().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(hist.densities().iter().all(|&d| d >= 0.0));
    }

    #[test]
    fn test_narrow_cluster_never_yields_non_finite_density(
        base in -1.0e16..1.0e16f64,
        steps in prop::collection::vec(0u32..8, 1..20),
        k in 1usize..50,
    ) {
        // Values a few ulps apart
        let data: Vec<f64> = steps
            .iter()
            .map(|&n| f64::from_bits(base.to_bits() + u64::from(n)))
            .collect();
        match histogram(&data, Some(k)) {
            Ok(hist) => {
                prop_assert!(hist.edges().windows(2).all(|w| w[0] < w[1]));
                prop_assert!(hist.densities().iter().all(|d| d.is_finite()));
            }
            Err(err) => prop_assert!(
                matches!(err, StatsError::UnresolvableRange { num_bins, .. } if num_bins == k),
                "unexpected error {:?}",
                err
            ),
        }
    }

    #[test]
    fn test_cdf_non_decreasing_ending_at_one(data in finite_sample()) {
        let dist = empirical_cdf(&data).unwrap();
        let probs = dist.probabilities();
        prop_assert!(probs.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(probs.iter().all(|&p| p > 0.0 && p <= 1.0));
        prop_assert_eq!(probs[probs.len() - 1], 1.0);
        prop_assert!(dist.values().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_cdf_and_ccdf_sum_to_one(data in finite_sample()) {
        let cdf = empirical_cdf(&data).unwrap();
        let ccdf = empirical_ccdf(&data).unwrap();
        prop_assert_eq!(cdf.values(), ccdf.values());
        for (p, q) in cdf.probabilities().iter().zip(ccdf.probabilities()) {
            prop_assert!((p + q - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_value_counts_preserve_multiset(data in prop::collection::vec(-20i32..20, 0..200)) {
        let table = value_counts(&data);
        prop_assert_eq!(table.total(), data.len());

        let mut distinct = data.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(table.len(), distinct.len());

        let mut rebuilt: Vec<i32> = table
            .rows()
            .flat_map(|(&value, count)| std::iter::repeat(value).take(count))
            .collect();
        let mut original = data;
        original.sort();
        rebuilt.sort();
        prop_assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_value_counts_f64_total(data in prop::collection::vec((0u8..10).prop_map(f64::from), 0..100)) {
        let table = value_counts_f64(&data).unwrap();
        prop_assert_eq!(table.total(), data.len());
        prop_assert!(table.values().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bin_average_counts_every_pair(
        pairs in prop::collection::vec((-1.0e3..1.0e3f64, -1.0e3..1.0e3f64), 1..200),
        k in 1usize..30,
    ) {
        let result = bin_average(&pairs, &BinningOptions::new().with_num_bins(k)).unwrap();
        prop_assert_eq!(result.counts().iter().sum::<usize>(), pairs.len());
        prop_assert!(result.len() <= k);
        prop_assert!(result.xs().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.ys().iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_bin_average_unique_one_row_per_x(
        pairs in prop::collection::vec(((0u8..20).prop_map(f64::from), -1.0e3..1.0e3f64), 1..200),
    ) {
        let result = bin_average(&pairs, &BinningOptions::new().unique(true)).unwrap();
        let distinct = value_counts_f64(&pairs.iter().map(|p| p.0).collect::<Vec<_>>()).unwrap();
        prop_assert_eq!(result.xs(), distinct.values());
        prop_assert_eq!(result.counts(), distinct.counts());
    }
}
