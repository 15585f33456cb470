use serde::{Deserialize, Serialize};

use crate::StatsError;

/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for lookup of arbitrary
/// percentile points requested by a caller (e.g. P10/P90 next to the
/// quartiles already carried by
/// [`CohortStatistics`](crate::descriptive::CohortStatistics)).
///
/// # Examples
///
/// ```
/// use cohort_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[10.0, 50.0, 90.0])?;
///
/// assert_eq!(percentiles.get(50.0), Some(5.5));
/// assert_eq!(percentiles.get(25.0), None);
/// # Ok::<(), cohort_stats::StatsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from unsorted values.
    ///
    /// Fails if any requested point lies outside `[0, 100]`.
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Result<Self, StatsError> {
        Self::from_sorted(&sorted_copy(values), percentile_points)
    }

    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(
        sorted_values: &[f64],
        percentile_points: &[f64],
    ) -> Result<Self, StatsError> {
        let values = percentile_points
            .iter()
            .map(|&p| compute_percentile(sorted_values, p).map(|value| (p, value)))
            .collect::<Result<_, _>>()?;
        Ok(Self { values })
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns all percentile-value pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a percentile of unsorted values.
///
/// The values are copied before sorting, so the caller's order is preserved
/// and permuting the input never changes the result.
///
/// # Errors
///
/// Returns [`StatsError::PercentileOutOfRange`] if `percentile` is outside
/// `[0, 100]`. An empty sample with a valid percentile yields `0.0`.
///
/// # Examples
///
/// ```
/// use cohort_stats::percentiles::percentile;
///
/// let values = [40.0, 10.0, 30.0, 20.0];
/// assert_eq!(percentile(&values, 25.0)?, 17.5);
/// assert_eq!(percentile(&[], 25.0)?, 0.0);
/// # Ok::<(), cohort_stats::StatsError>(())
/// ```
pub fn percentile(values: &[f64], percentile: f64) -> Result<f64, StatsError> {
    validate_percentile(percentile)?;
    Ok(interpolate_sorted(&sorted_copy(values), percentile))
}

/// Computes a single percentile value from sorted data.
///
/// Uses the linear-interpolation method: the fractional index is
/// `p / 100 * (n - 1)`; integral indices select that element, otherwise the
/// floor and ceil neighbours are blended by the fractional part.
///
/// # Errors
///
/// Returns [`StatsError::PercentileOutOfRange`] if `percentile` is outside
/// `[0, 100]`.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> Result<f64, StatsError> {
    validate_percentile(percentile)?;
    Ok(interpolate_sorted(sorted_values, percentile))
}

fn validate_percentile(percentile: f64) -> Result<(), StatsError> {
    if (0.0..=100.0).contains(&percentile) {
        Ok(())
    } else {
        Err(StatsError::PercentileOutOfRange { percentile })
    }
}

/// Interpolates an already validated percentile over sorted values.
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub(crate) fn interpolate_sorted(sorted_values: &[f64], percentile: f64) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    if sorted_values.is_empty() {
        return 0.0;
    }

    let idx = percentile / 100.0 * (sorted_values.len() - 1) as f64;
    if idx.fract() == 0.0 {
        return sorted_values[idx as usize];
    }
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    let weight = idx - idx.floor();
    sorted_values[lower] * (1.0 - weight) + sorted_values[upper] * weight
}

/// Returns an ascending copy of the values, leaving the input untouched.
pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptive;

    #[test]
    fn test_rejects_out_of_range_percentiles() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(
            percentile(&values, -1.0),
            Err(StatsError::PercentileOutOfRange { percentile: -1.0 })
        );
        assert_eq!(
            percentile(&values, 101.0),
            Err(StatsError::PercentileOutOfRange { percentile: 101.0 })
        );
        assert!(percentile(&values, f64::NAN).is_err());
        assert!(percentile(&[], 150.0).is_err());
    }

    #[test]
    fn test_bounds_are_min_and_max() {
        let values = [42.0, 7.0, 99.5, 63.0];
        assert_eq!(percentile(&values, 0.0).unwrap(), 7.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 99.5);
    }

    #[test]
    fn test_linear_interpolation() {
        // idx = 0.25 * 4 = 1.0 -> exact element
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0, 5.0], 25.0).unwrap(), 2.0);
        // idx = 0.25 * 3 = 0.75 -> 10 * 0.25 + 20 * 0.75
        assert_eq!(percentile(&[10.0, 20.0, 30.0, 40.0], 25.0).unwrap(), 17.5);
    }

    #[test]
    fn test_p50_equals_median() {
        let samples: [&[f64]; 5] = [
            &[],
            &[3.0],
            &[0.1, 0.7],
            &[67.3, 12.9, 45.1, 45.1, 99.0, 23.3],
            &[81.0, 77.5, 90.25, 64.0, 59.0, 70.0, 88.8],
        ];
        for sample in samples {
            assert_eq!(
                percentile(sample, 50.0).unwrap(),
                descriptive::median(sample),
                "{sample:?}"
            );
        }
    }

    #[test]
    fn test_permutation_invariant() {
        let values = [55.0, 12.0, 78.5, 33.0, 91.0, 47.0, 60.0];
        let mut reversed = values;
        reversed.reverse();
        let mut rotated = values;
        rotated.rotate_left(3);
        for p in [0.0, 10.0, 33.3, 50.0, 75.0, 99.0, 100.0] {
            let expected = percentile(&values, p).unwrap();
            assert_eq!(percentile(&reversed, p).unwrap(), expected);
            assert_eq!(percentile(&rotated, p).unwrap(), expected);
        }
    }

    #[test]
    fn test_percentiles_collection_propagates_errors() {
        let values = [1.0, 2.0, 3.0];
        assert!(Percentiles::new(&values, &[10.0, 200.0]).is_err());

        let percentiles = Percentiles::new(&values, &[90.0, 10.0]).unwrap();
        let points = percentiles.iter().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(points, vec![90.0, 10.0]);
        assert_eq!(percentiles.get(90.0), percentile(&values, 90.0).ok());
        assert_eq!(percentiles.get(50.0), None);
    }
}
