//! Distribution shape detection
//!
//! Classifies a score sample as normal, bimodal, multimodal or uniform by
//! scanning a coarse fixed-width histogram for interior local maxima.
//!
//! # Algorithm
//!
//! 1. Samples smaller than [`DistributionPolicy::min_samples`] are reported
//!    as normal with low confidence
//! 2. Build a histogram with [`DistributionPolicy::bin_count`] bins over
//!    `[min, max]`
//! 3. Interior bin `i` is a peak if its count strictly exceeds both
//!    neighbours; its position is `min + (i + 0.5) * width`
//! 4. Classify by peak count; two peaks are bimodal only if they are more
//!    than [`DistributionPolicy::bimodal_separation`] standard deviations
//!    apart
//! 5. If the bin counts are nearly flat (coefficient of variation below
//!    [`DistributionPolicy::uniform_flatness`]) the verdict becomes uniform
//!
//! Step 5 runs after every other verdict, so a flat histogram overrides even
//! a confident bimodal result.

use cohort_stats::{
    descriptive::{self, CohortStatistics},
    histogram::Histogram,
};
use serde::{Deserialize, Serialize};

use crate::policy::DistributionPolicy;

const SPARSE_CONFIDENCE: f64 = 0.3;
const SINGLE_PEAK_CONFIDENCE: f64 = 0.7;
const CLOSE_PEAKS_CONFIDENCE: f64 = 0.6;
const MULTIMODAL_CONFIDENCE: f64 = 0.7;
const UNIFORM_CONFIDENCE: f64 = 0.8;
const MAX_BIMODAL_CONFIDENCE: f64 = 0.9;

/// Detected shape of a score distribution.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum DistributionType {
    #[display("normal")]
    Normal,
    #[display("bimodal")]
    Bimodal,
    #[display("multimodal")]
    Multimodal,
    #[display("uniform")]
    Uniform,
}

/// Result of distribution shape detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionMode {
    /// Detected shape
    #[serde(rename = "type")]
    pub kind: DistributionType,
    /// Positions of the detected peaks; never empty (falls back to the mean)
    pub peaks: Vec<f64>,
    /// Confidence of the verdict in `[0, 1]`
    pub confidence: f64,
}

impl DistributionMode {
    /// Detects the distribution shape of a score sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{
    ///     distribution::{DistributionMode, DistributionType},
    ///     policy::DistributionPolicy,
    /// };
    ///
    /// let scores = [70.0, 72.0, 68.0];
    /// let mode = DistributionMode::detect(&scores, &DistributionPolicy::default());
    /// assert_eq!(mode.kind, DistributionType::Normal);
    /// assert_eq!(mode.peaks, vec![70.0]);
    /// assert_eq!(mode.confidence, 0.3);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn detect(values: &[f64], policy: &DistributionPolicy) -> Self {
        let stats = CohortStatistics::new(values);
        if values.len() < policy.min_samples {
            return Self {
                kind: DistributionType::Normal,
                peaks: vec![stats.mean],
                confidence: SPARSE_CONFIDENCE,
            };
        }

        let histogram = Histogram::new(values, policy.bin_count);
        let counts = histogram.counts();
        let peaks = find_peaks(&counts)
            .map(|i| stats.min + (i as f64 + 0.5) * histogram.bin_width)
            .collect::<Vec<_>>();

        let (mut kind, mut confidence) = match peaks.as_slice() {
            [] | [_] => (DistributionType::Normal, SINGLE_PEAK_CONFIDENCE),
            [first, second] => {
                let separation = (second - first).abs() / stats.std_dev;
                if separation > policy.bimodal_separation {
                    let confidence = (0.5 + separation / 4.0).min(MAX_BIMODAL_CONFIDENCE);
                    (DistributionType::Bimodal, confidence)
                } else {
                    (DistributionType::Normal, CLOSE_PEAKS_CONFIDENCE)
                }
            }
            _ => (DistributionType::Multimodal, MULTIMODAL_CONFIDENCE),
        };

        // TODO: decide whether a confident bimodal verdict should survive a flat histogram
        if is_flat(&counts, policy.uniform_flatness) {
            kind = DistributionType::Uniform;
            confidence = UNIFORM_CONFIDENCE;
        }

        Self {
            kind,
            peaks: if peaks.is_empty() {
                vec![stats.mean]
            } else {
                peaks
            },
            confidence,
        }
    }

    /// Whether the verdict is bimodal with confidence strictly above
    /// `min_confidence`.
    #[must_use]
    pub fn is_confident_bimodal(&self, min_confidence: f64) -> bool {
        self.kind.is_bimodal() && self.confidence > min_confidence
    }
}

/// Indices of interior bins whose count strictly exceeds both neighbours.
fn find_peaks(counts: &[usize]) -> impl Iterator<Item = usize> + '_ {
    (1..counts.len().saturating_sub(1))
        .filter(|&i| counts[i] > counts[i - 1] && counts[i] > counts[i + 1])
}

#[expect(clippy::cast_precision_loss)]
fn is_flat(counts: &[usize], max_variation: f64) -> bool {
    let counts = counts.iter().map(|&c| c as f64).collect::<Vec<_>>();
    let mean = descriptive::mean(&counts);
    mean > 0.0 && descriptive::std_dev(&counts) / mean < max_variation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{BIMODAL_SCORES, evenly_spaced};

    fn detect(values: &[f64]) -> DistributionMode {
        DistributionMode::detect(values, &DistributionPolicy::default())
    }

    #[test]
    fn test_small_sample_falls_back_to_normal() {
        let mode = detect(&[10.0, 90.0, 15.0, 85.0, 50.0, 20.0, 80.0, 30.0, 70.0]);
        assert_eq!(mode.kind, DistributionType::Normal);
        assert_eq!(mode.confidence, 0.3);
        assert_eq!(mode.peaks, vec![50.0]);

        let empty = detect(&[]);
        assert_eq!(empty.peaks, vec![0.0]);
    }

    #[test]
    fn test_two_separated_clusters_are_bimodal() {
        let mode = detect(&BIMODAL_SCORES);
        assert_eq!(mode.kind, DistributionType::Bimodal);
        assert!(mode.confidence > 0.7, "confidence {}", mode.confidence);
        assert!(mode.confidence <= 0.9);
        assert_eq!(mode.peaks.len(), 2);
        assert!((mode.peaks[0] - 25.0).abs() < 1e-9);
        assert!((mode.peaks[1] - 75.0).abs() < 1e-9);
        assert!(mode.is_confident_bimodal(0.7));
    }

    #[test]
    fn test_evenly_spaced_values_are_uniform() {
        let mode = detect(&evenly_spaced(100));
        assert_eq!(mode.kind, DistributionType::Uniform);
        assert_eq!(mode.confidence, 0.8);
        assert!(!mode.peaks.is_empty());
    }

    #[test]
    fn test_single_peak_is_normal() {
        // Counts per bin: [1, 2, 4, 6, 8, 6, 4, 2, 1, 1]
        let mut values = vec![0.0, 100.0];
        for (bin, count) in [(1, 2), (2, 4), (3, 6), (4, 8), (5, 6), (6, 4), (7, 2), (8, 1)] {
            values.extend((0..count).map(|_| f64::from(bin) * 10.0 + 5.0));
        }
        let mode = detect(&values);
        assert_eq!(mode.kind, DistributionType::Normal);
        assert_eq!(mode.confidence, 0.7);
        assert_eq!(mode.peaks.len(), 1);
        assert!((mode.peaks[0] - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_peaks_are_multimodal() {
        // Counts per bin: [1, 6, 1, 1, 6, 1, 1, 6, 1, 1]
        let mut values = vec![0.0, 100.0];
        for (bin, count) in [(1, 6), (2, 1), (3, 1), (4, 6), (5, 1), (6, 1), (7, 6), (8, 1)] {
            values.extend((0..count).map(|_| f64::from(bin) * 10.0 + 5.0));
        }
        let mode = detect(&values);
        assert_eq!(mode.kind, DistributionType::Multimodal);
        assert_eq!(mode.confidence, 0.7);
        assert_eq!(mode.peaks.len(), 3);
    }

    #[test]
    fn test_identical_scores_have_no_peaks() {
        let mode = detect(&[64.0; 20]);
        assert_eq!(mode.kind, DistributionType::Normal);
        assert_eq!(mode.peaks, vec![64.0]);
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let json = serde_json::to_value(detect(&BIMODAL_SCORES)).unwrap();
        assert_eq!(json["type"], "bimodal");
    }
}
