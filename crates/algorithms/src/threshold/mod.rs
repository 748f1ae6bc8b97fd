//! Optimal threshold search
//!
//! Criterion-driven scan for the scalar threshold that best bi-partitions
//! a value distribution. The criterion is a pluggable scoring strategy;
//! the search itself only sorts, enumerates candidates and takes the
//! argmin.

use cranioseg_core::{Error, Result};

/// Scoring strategy for a candidate threshold over a sorted distribution.
///
/// Lower cost is better. Implementations receive the full sorted value
/// array and the candidate; values strictly below the candidate form the
/// left group.
pub trait ThresholdCriterion {
    fn cost(&self, sorted_values: &[f64], candidate: f64) -> f64;
}

/// Summed within-group variance criterion (Otsu-style).
///
/// Splits the sorted array at the candidate's insertion index and scores
/// the split by `variance(left) + variance(right)`. A degenerate split
/// (either side empty) costs the variance of the whole array, and the
/// variance of an empty partition is 0, never NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithinGroupVariance;

impl ThresholdCriterion for WithinGroupVariance {
    fn cost(&self, sorted_values: &[f64], candidate: f64) -> f64 {
        let index = sorted_values.partition_point(|&v| v < candidate);
        if index == 0 || index == sorted_values.len() {
            variance(sorted_values)
        } else {
            variance(&sorted_values[..index]) + variance(&sorted_values[index..])
        }
    }
}

/// Classical Otsu between-class variance criterion, negated so that
/// lower cost is better. Degenerate splits score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetweenGroupVariance;

impl ThresholdCriterion for BetweenGroupVariance {
    fn cost(&self, sorted_values: &[f64], candidate: f64) -> f64 {
        let index = sorted_values.partition_point(|&v| v < candidate);
        if index == 0 || index == sorted_values.len() {
            return 0.0;
        }
        let n = sorted_values.len() as f64;
        let w0 = index as f64 / n;
        let w1 = 1.0 - w0;
        let m0 = mean(&sorted_values[..index]);
        let m1 = mean(&sorted_values[index..]);
        -(w0 * w1 * (m0 - m1) * (m0 - m1))
    }
}

/// Find the threshold minimizing `criterion` over a value distribution.
///
/// Candidates are the sorted unique input values plus a sentinel strictly
/// greater than the maximum (the smallest representable value above it),
/// so the all-on-one-side split is tested exactly once. Ties break toward
/// the smallest candidate, so a uniform distribution (every split
/// degenerate, every candidate equal in cost) yields the value itself,
/// never an error; an empty input is rejected.
pub fn find_best_threshold<C: ThresholdCriterion>(values: &[f64], criterion: &C) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::InvalidParameter {
            name: "values",
            value: "[]".to_string(),
            reason: "cannot search a threshold over an empty distribution".to_string(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut candidates: Vec<f64> = Vec::with_capacity(sorted.len() + 1);
    for &v in &sorted {
        if candidates.last() != Some(&v) {
            candidates.push(v);
        }
    }
    let max = sorted[sorted.len() - 1];
    candidates.push(max.next_up());

    let mut best = candidates[0];
    let mut best_cost = f64::INFINITY;
    for &candidate in &candidates {
        let cost = criterion.cost(&sorted, candidate);
        if cost < best_cost {
            best_cost = cost;
            best = candidate;
        }
    }
    Ok(best)
}

/// Population mean; 0 for an empty slice
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; 0 for an empty slice
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bimodal_split_has_zero_cost() {
        let values = [1.0, 1.0, 1.0, 5.0, 5.0, 5.0];
        let best = find_best_threshold(&values, &WithinGroupVariance).unwrap();
        assert!(best > 1.0 && best <= 5.0, "best {} outside (1, 5]", best);

        let mut sorted = values;
        sorted.sort_by(f64::total_cmp);
        assert_eq!(WithinGroupVariance.cost(&sorted, best), 0.0);
    }

    #[test]
    fn test_result_within_bounds() {
        let values = [3.0, 9.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let best = find_best_threshold(&values, &WithinGroupVariance).unwrap();
        assert!((1.0..=10.0).contains(&best), "best {} out of range", best);
        let best = find_best_threshold(&values, &BetweenGroupVariance).unwrap();
        assert!((1.0..=10.0).contains(&best), "best {} out of range", best);
    }

    #[test]
    fn test_uniform_distribution_returns_the_value() {
        // Both candidates (the value and the sentinel) cost 0; the
        // first-occurrence tie-break keeps the value itself
        let values = [2.0, 2.0, 2.0];
        let best = find_best_threshold(&values, &WithinGroupVariance).unwrap();
        assert_eq!(best, 2.0);
        assert_ne!(best, 2.0_f64.next_up());
    }

    #[test]
    fn test_single_value_returns_the_value() {
        let best = find_best_threshold(&[7.0], &WithinGroupVariance).unwrap();
        assert_eq!(best, 7.0);
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(find_best_threshold(&[], &WithinGroupVariance).is_err());
    }

    #[test]
    fn test_degenerate_split_costs_whole_variance() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        let whole = variance(&sorted);
        // Candidate at or below the minimum: left side empty
        assert_eq!(WithinGroupVariance.cost(&sorted, 1.0), whole);
        assert_eq!(WithinGroupVariance.cost(&sorted, 0.5), whole);
        // Candidate above the maximum: right side empty
        assert_eq!(WithinGroupVariance.cost(&sorted, 4.5), whole);
    }

    #[test]
    fn test_tie_breaks_toward_smallest_candidate() {
        // Candidates 1.0 and 2.0 both cost 0.25; the scan keeps the first
        let values = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let sorted = values;
        assert_eq!(
            WithinGroupVariance.cost(&sorted, 1.0),
            WithinGroupVariance.cost(&sorted, 2.0)
        );
        let best = find_best_threshold(&values, &WithinGroupVariance).unwrap();
        assert_eq!(best, 1.0);
    }

    #[test]
    fn test_between_group_variance_agrees_on_bimodal() {
        let values = [1.0, 1.0, 1.0, 5.0, 5.0, 5.0];
        let within = find_best_threshold(&values, &WithinGroupVariance).unwrap();
        let between = find_best_threshold(&values, &BetweenGroupVariance).unwrap();
        assert_eq!(within, between);
    }

    #[test]
    fn test_variance_helpers() {
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(variance(&[3.0]), 0.0);
        assert_eq!(variance(&[1.0, 3.0]), 1.0);
        assert_eq!(mean(&[]), 0.0);
    }
}
