use serde::{Deserialize, Serialize};

use crate::percentiles;

/// Descriptive statistics summarizing a cohort's score sample.
///
/// This structure bundles measures of central tendency, dispersion and the
/// quartiles of a dataset of `f64` scores. For an empty sample every field
/// is zero (see [`CohortStatistics::default`]).
///
/// Invariants for non-empty samples: `min <= q1 <= q2 <= q3 <= max`,
/// `q2 == median` and `std_dev >= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CohortStatistics {
    /// The arithmetic mean (average) of the scores.
    pub mean: f64,
    /// The median score.
    pub median: f64,
    /// The population standard deviation (divisor `N`).
    pub std_dev: f64,
    /// The minimum score.
    pub min: f64,
    /// The maximum score.
    pub max: f64,
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile (always equal to `median`).
    pub q2: f64,
    /// The 75th percentile.
    pub q3: f64,
    /// The number of scores in the sample.
    pub count: usize,
}

impl CohortStatistics {
    /// Computes cohort statistics from unsorted values.
    ///
    /// The values are copied and sorted internally; the caller's slice is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cohort_stats::descriptive::CohortStatistics;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = CohortStatistics::new(&values);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.q1, 2.0);
    /// assert_eq!(stats.q3, 4.0);
    ///
    /// assert_eq!(CohortStatistics::new(&[]), CohortStatistics::default());
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let sorted = percentiles::sorted_copy(values);
        Self::from_sorted(&sorted)
    }

    /// Computes cohort statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self::default();
        };
        let median = median_of_sorted(sorted_values);

        Self {
            mean: mean(sorted_values),
            median,
            std_dev: std_dev(sorted_values),
            min,
            max,
            q1: percentiles::interpolate_sorted(sorted_values, 25.0),
            q2: percentiles::interpolate_sorted(sorted_values, 50.0),
            q3: percentiles::interpolate_sorted(sorted_values, 75.0),
            count: sorted_values.len(),
        }
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Coefficient of variation (`std_dev / mean`).
    ///
    /// Follows IEEE semantics when the mean is zero (`NaN` or infinity), so
    /// threshold comparisons against it simply fail or pass.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> f64 {
        self.std_dev / self.mean
    }
}

/// Arithmetic mean of the values. Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// # use cohort_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values. Returns `0.0` for an empty slice.
///
/// For an even number of values this is the average of the two central
/// values.
///
/// # Examples
///
/// ```
/// # use cohort_stats::descriptive::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    median_of_sorted(&percentiles::sorted_copy(values))
}

fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    let len = sorted_values.len();
    if len == 0 {
        return 0.0;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        (sorted_values[mid - 1] + sorted_values[mid]) / 2.0
    } else {
        sorted_values[mid]
    }
}

/// Population standard deviation (divisor `N`).
///
/// Returns `0.0` for empty and single-element slices.
///
/// # Examples
///
/// ```
/// # use cohort_stats::descriptive::std_dev;
/// assert_eq!(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
/// assert_eq!(std_dev(&[42.0]), 0.0);
/// ```
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let squared_diffs = values.iter().map(|v| (v - avg).powi(2)).collect::<Vec<_>>();
    mean(&squared_diffs).sqrt()
}
