//! Chart-ready data derived from a score sample
//!
//! Produces histogram bars, a box-plot summary and a sampled Gaussian curve
//! for downstream rendering. Display values are rounded (1 decimal for
//! positions and percentages, 3 decimals for densities) so repeated renders
//! of the same cohort stay identical.

use cohort_stats::{density, descriptive::CohortStatistics, histogram::Histogram};
use serde::{Deserialize, Serialize};

use crate::{outliers::OutlierFences, policy::CohortPolicy};

/// Number of segments the Gaussian curve is sampled with (points = segments + 1).
pub const GAUSSIAN_CURVE_SEGMENTS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub histogram: Vec<ChartBin>,
    pub box_plot: BoxPlot,
    pub gaussian_curve: GaussianCurve,
}

/// One histogram bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBin {
    pub min: f64,
    pub max: f64,
    pub count: usize,
    /// Share of the sample in this bin, in percent
    pub percentage: f64,
}

/// Five-number summary plus the scores beyond the IQR fences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlot {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub outliers: Vec<f64>,
}

/// Normal density with the sample's own mean and standard deviation.
///
/// This is a visual reference curve, not a goodness-of-fit claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianCurve {
    pub mean: f64,
    pub std_dev: f64,
    pub data_points: Vec<CurvePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl VisualizationData {
    /// Builds all chart data for a score sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{policy::CohortPolicy, visualization::VisualizationData};
    ///
    /// let scores = [45.0, 52.0, 61.0, 64.0, 70.0, 73.0, 78.0, 85.0, 91.0, 12.0];
    /// let data = VisualizationData::from_scores(&scores, &CohortPolicy::default());
    /// assert_eq!(data.histogram.len(), 10);
    /// assert_eq!(data.box_plot.min, 12.0);
    /// assert_eq!(data.gaussian_curve.data_points.len(), 51);
    /// ```
    #[must_use]
    pub fn from_scores(values: &[f64], policy: &CohortPolicy) -> Self {
        let stats = CohortStatistics::new(values);
        let fences = OutlierFences::from_stats(&stats, policy.outlier_iqr_factor);

        Self {
            histogram: chart_bins(values, policy.distribution.bin_count),
            box_plot: BoxPlot {
                min: stats.min,
                q1: stats.q1,
                median: stats.median,
                q3: stats.q3,
                max: stats.max,
                outliers: values
                    .iter()
                    .copied()
                    .filter(|&v| fences.classify(v).is_some())
                    .collect(),
            },
            gaussian_curve: GaussianCurve {
                mean: stats.mean,
                std_dev: stats.std_dev,
                data_points: gaussian_points(&stats),
            },
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn chart_bins(values: &[f64], bin_count: usize) -> Vec<ChartBin> {
    let total = values.len() as f64;
    Histogram::new(values, bin_count)
        .bins
        .iter()
        .map(|bin| ChartBin {
            min: round_to(bin.range.start, 1),
            max: round_to(bin.range.end, 1),
            count: bin.count,
            percentage: round_to(bin.count as f64 / total * 100.0, 1),
        })
        .collect()
}

fn gaussian_points(stats: &CohortStatistics) -> Vec<CurvePoint> {
    if stats.count == 0 {
        return vec![];
    }
    let step = (stats.max - stats.min) / f64::from(GAUSSIAN_CURVE_SEGMENTS);
    (0..=GAUSSIAN_CURVE_SEGMENTS)
        .map_while(|i| {
            let x = stats.min + step * f64::from(i);
            let y = density::normal_pdf(x, stats.mean, stats.std_dev)?;
            Some(CurvePoint {
                x: round_to(x, 1),
                y: round_to(y, 3),
            })
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{BIMODAL_SCORES, evenly_spaced};

    fn build(values: &[f64]) -> VisualizationData {
        VisualizationData::from_scores(values, &CohortPolicy::default())
    }

    #[test]
    fn test_histogram_bars_cover_sample() {
        let data = build(&BIMODAL_SCORES);
        let counts = data.histogram.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, vec![2, 5, 11, 5, 2, 2, 5, 11, 5, 2]);
        assert_eq!(data.histogram[2].min, 20.0);
        assert_eq!(data.histogram[2].max, 30.0);
        assert_eq!(data.histogram[2].percentage, 22.0);
        assert_eq!(data.histogram[9].max, 100.0);
    }

    #[test]
    fn test_box_plot_reports_outlier_scores() {
        let data = build(&[10.0, 12.0, 11.0, 13.0, 12.0, 90.0]);
        assert_eq!(data.box_plot.min, 10.0);
        assert_eq!(data.box_plot.median, 12.0);
        assert_eq!(data.box_plot.max, 90.0);
        assert_eq!(data.box_plot.outliers, vec![90.0]);
    }

    #[test]
    fn test_gaussian_curve_spans_range_and_peaks_at_mean() {
        let data = build(&evenly_spaced(100));
        let points = &data.gaussian_curve.data_points;
        assert_eq!(points.len(), 51);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[50].x, 99.0);
        assert!(points.iter().all(|p| p.y >= 0.0));

        // Rounded densities plateau around the mean; the mean must lie within the plateau
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let plateau = points.iter().filter(|p| p.y == max_y).collect::<Vec<_>>();
        let (first, last) = (plateau[0].x, plateau[plateau.len() - 1].x);
        assert!(first <= 49.5 && 49.5 <= last, "plateau {first}..={last}");
    }

    #[test]
    fn test_degenerate_samples() {
        let empty = build(&[]);
        assert!(empty.histogram.is_empty());
        assert!(empty.gaussian_curve.data_points.is_empty());
        assert!(empty.box_plot.outliers.is_empty());

        let constant = build(&[80.0; 5]);
        assert_eq!(constant.histogram.len(), 10);
        assert_eq!(constant.histogram[9].count, 5);
        assert!(constant.gaussian_curve.data_points.is_empty());
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(0.012_345, 3), 0.012);
    }
}
