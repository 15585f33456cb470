use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A fixed-width histogram of a dataset's distribution.
///
/// The sample range `[min, max]` is divided into `num_bins` bins of equal
/// width. A value `v` falls into bin `floor((v - min) / width)`, clamped to
/// the last bin so that the maximum itself is counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
    /// Width shared by every bin. Zero when all values are equal.
    pub bin_width: f64,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin. The last bin also contains
    /// its end point.
    pub range: Range<f64>,
    /// The number of values that fall within this bin.
    pub count: usize,
}

impl HistogramBin {
    /// Midpoint of the bin range.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins spanning the
    /// sample range.
    ///
    /// Returns a histogram without bins if `values` is empty or `num_bins`
    /// is zero. If every value is equal the bins collapse to zero width and
    /// every value is counted in the last bin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cohort_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 2.5, 4.0, 5.0];
    /// let histogram = Histogram::new(&values, 4);
    /// assert_eq!(histogram.bin_width, 1.0);
    /// assert_eq!(histogram.counts(), vec![1, 2, 0, 2]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return Self {
                bins: vec![],
                bin_width: 0.0,
            };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute boundaries from the index to avoid accumulation errors
                let start = min + bin_idx as f64 * bin_width;
                let end = if bin_idx == num_bins - 1 {
                    max
                } else {
                    start + bin_width
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in values {
            let idx = bin_index(val, min, bin_width, num_bins);
            bins[idx].count += 1;
        }

        Self { bins, bin_width }
    }

    /// Returns the count of each bin in order.
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn bin_index(value: f64, min: f64, bin_width: f64, num_bins: usize) -> usize {
    let last = num_bins - 1;
    if bin_width <= 0.0 {
        return last;
    }
    let normalized_position = (value - min) / bin_width;
    if normalized_position.is_nan() {
        return last;
    }
    (normalized_position.floor() as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_or_zero_bins() {
        assert!(Histogram::new(&[], 10).bins.is_empty());
        assert!(Histogram::new(&[1.0, 2.0], 0).bins.is_empty());
    }

    #[test]
    fn test_max_value_is_absorbed_by_last_bin() {
        let values = [0.0, 25.0, 50.0, 75.0, 100.0];
        let histogram = Histogram::new(&values, 4);
        assert_eq!(histogram.counts(), vec![1, 1, 1, 2]);
        assert_eq!(histogram.bins[3].range, 75.0..100.0);
    }

    #[test]
    fn test_identical_values_collapse_into_last_bin() {
        let histogram = Histogram::new(&[7.0; 12], 10);
        assert_eq!(histogram.bin_width, 0.0);
        assert_eq!(histogram.bins.len(), 10);
        assert_eq!(histogram.bins[9].count, 12);
        assert_eq!(histogram.total_count(), 12);
    }

    #[test]
    fn test_evenly_spaced_values_fill_bins_evenly() {
        let values = (0..100).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, 10);
        assert_eq!(histogram.counts(), vec![10; 10]);
    }

    #[test]
    fn test_bin_centers() {
        let histogram = Histogram::new(&[0.0, 100.0], 10);
        assert_eq!(histogram.bins[0].center(), 5.0);
        assert_eq!(histogram.bins[2].center(), 25.0);
    }
}
