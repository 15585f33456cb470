//! IQR-based outlier detection
//!
//! Scores below `q1 - k * IQR` or above `q3 + k * IQR` are outliers, where
//! `k` is the policy's IQR factor (1.5 by default).

use cohort_stats::descriptive::CohortStatistics;
use serde::{Deserialize, Serialize};

use crate::score::{self, StudentId, StudentScore};

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
pub enum OutlierType {
    #[display("low")]
    Low,
    #[display("high")]
    High,
}

/// A student whose score lies outside the IQR fences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub student_id: StudentId,
    pub score: f64,
    #[serde(rename = "type")]
    pub kind: OutlierType,
    /// Absolute distance from the cohort median
    pub deviation_from_median: f64,
}

/// Lower and upper outlier fences derived from the quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierFences {
    pub lower: f64,
    pub upper: f64,
}

impl OutlierFences {
    #[must_use]
    pub fn from_stats(stats: &CohortStatistics, iqr_factor: f64) -> Self {
        let iqr = stats.iqr();
        Self {
            lower: stats.q1 - iqr_factor * iqr,
            upper: stats.q3 + iqr_factor * iqr,
        }
    }

    /// Returns the outlier side of `score`, or `None` if it is within the
    /// fences (inclusive).
    #[must_use]
    pub fn classify(&self, score: f64) -> Option<OutlierType> {
        if score < self.lower {
            Some(OutlierType::Low)
        } else if score > self.upper {
            Some(OutlierType::High)
        } else {
            None
        }
    }
}

impl Outlier {
    /// Finds every outlier in the cohort, in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{
    ///     outliers::{Outlier, OutlierType},
    ///     score::with_positional_ids,
    /// };
    ///
    /// let records = with_positional_ids(&[10.0, 12.0, 11.0, 13.0, 12.0, 90.0]);
    /// let outliers = Outlier::identify_all(&records, 1.5);
    /// assert_eq!(outliers.len(), 1);
    /// assert_eq!(outliers[0].student_id, 5);
    /// assert_eq!(outliers[0].kind, OutlierType::High);
    /// assert_eq!(outliers[0].deviation_from_median, 78.0);
    /// ```
    #[must_use]
    pub fn identify_all(records: &[StudentScore], iqr_factor: f64) -> Vec<Self> {
        let stats = CohortStatistics::new(&score::scores_of(records));
        let fences = OutlierFences::from_stats(&stats, iqr_factor);

        records
            .iter()
            .filter_map(|record| {
                let kind = fences.classify(record.score)?;
                let deviation_from_median = match kind {
                    OutlierType::Low => stats.median - record.score,
                    OutlierType::High => record.score - stats.median,
                };
                Some(Self {
                    student_id: record.student_id,
                    score: record.score,
                    kind,
                    deviation_from_median,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        policy::OUTLIER_IQR_FACTOR,
        test_util::{BIMODAL_SCORES, records},
    };

    #[test]
    fn test_tight_cluster_flags_only_high_value() {
        let cohort = records(&[10.0, 12.0, 11.0, 13.0, 12.0, 90.0]);
        let outliers = Outlier::identify_all(&cohort, OUTLIER_IQR_FACTOR);
        assert_eq!(outliers.len(), 1);
        assert_eq!(outliers[0].score, 90.0);
        assert!(outliers[0].kind.is_high());
        assert!(outliers.iter().all(|o| !o.kind.is_low()));
    }

    #[test]
    fn test_low_outlier_deviation_is_positive() {
        let cohort = records(&[70.0, 72.0, 71.0, 73.0, 72.0, 5.0]);
        let outliers = Outlier::identify_all(&cohort, OUTLIER_IQR_FACTOR);
        assert_eq!(outliers.len(), 1);
        assert_eq!(outliers[0].kind, OutlierType::Low);
        assert_eq!(outliers[0].student_id, 5);
        assert_eq!(outliers[0].deviation_from_median, 66.5);
    }

    #[test]
    fn test_wide_distribution_has_no_outliers() {
        assert!(Outlier::identify_all(&records(&BIMODAL_SCORES), OUTLIER_IQR_FACTOR).is_empty());
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(Outlier::identify_all(&[], OUTLIER_IQR_FACTOR).is_empty());
        assert!(Outlier::identify_all(&records(&[50.0]), OUTLIER_IQR_FACTOR).is_empty());
        assert!(Outlier::identify_all(&records(&[50.0; 8]), OUTLIER_IQR_FACTOR).is_empty());
    }

    #[test]
    fn test_fences_are_inclusive() {
        let fences = OutlierFences {
            lower: 10.0,
            upper: 20.0,
        };
        assert_eq!(fences.classify(10.0), None);
        assert_eq!(fences.classify(20.0), None);
        assert_eq!(fences.classify(9.9), Some(OutlierType::Low));
        assert_eq!(fences.classify(20.1), Some(OutlierType::High));
    }
}
