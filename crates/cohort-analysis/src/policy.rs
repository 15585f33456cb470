//! Pedagogical policy thresholds
//!
//! Every threshold used to classify students, detect distribution shapes and
//! pick a teaching strategy lives here. The defaults reproduce the standard
//! policy; courses may override any subset by deserializing a partial JSON
//! document (missing fields fall back to the defaults).
//!
//! # Example
//!
//! ```
//! use cohort_analysis::policy::CohortPolicy;
//!
//! let policy: CohortPolicy =
//!     serde_json::from_str(r#"{ "skill": { "beginner_max": 50.0 } }"#).unwrap();
//! assert_eq!(policy.skill.beginner_max, 50.0);
//! assert_eq!(policy.skill.intermediate_max, 70.0);
//! assert_eq!(policy.distribution.bin_count, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Highest score still classified as beginner.
pub const BEGINNER_MAX_SCORE: f64 = 40.0;
/// Highest score still classified as intermediate.
pub const INTERMEDIATE_MAX_SCORE: f64 = 70.0;
/// Highest score still classified as advanced.
pub const ADVANCED_MAX_SCORE: f64 = 85.0;

/// Number of equal-width histogram bins used for shape detection and charts.
pub const DEFAULT_BIN_COUNT: usize = 10;
/// Below this sample size the distribution shape is not analyzed.
pub const MIN_SHAPE_SAMPLES: usize = 10;
/// Minimum peak distance, in standard deviations, for a bimodal verdict.
pub const BIMODAL_MIN_SEPARATION: f64 = 1.5;
/// Histogram coefficient of variation below which bins count as flat.
pub const UNIFORM_MAX_FLATNESS: f64 = 0.3;

/// Bimodal confidence required before splitting into two tracks.
pub const SPLIT_MIN_CONFIDENCE: f64 = 0.7;
/// Score coefficient of variation required before splitting into 3+ tracks.
pub const MULTI_TRACK_MIN_VARIATION: f64 = 0.4;

/// IQR multiplier for the outlier fences.
pub const OUTLIER_IQR_FACTOR: f64 = 1.5;

/// Complete policy for cohort analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CohortPolicy {
    pub skill: SkillThresholds,
    pub distribution: DistributionPolicy,
    pub strategy: StrategyPolicy,
    pub assessment: AssessmentPolicy,
    /// IQR multiplier for the outlier fences
    pub outlier_iqr_factor: f64,
}

/// Upper score bounds (inclusive) of each skill tier; anything above
/// `advanced_max` is expert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillThresholds {
    pub beginner_max: f64,
    pub intermediate_max: f64,
    pub advanced_max: f64,
}

/// Parameters of histogram-based shape detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionPolicy {
    pub bin_count: usize,
    pub min_samples: usize,
    pub bimodal_separation: f64,
    pub uniform_flatness: f64,
}

/// Thresholds of the cohort strategy decision table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyPolicy {
    pub bimodal_confidence: f64,
    pub multi_track_variation: f64,
}

/// Thresholds that trigger assessment recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentPolicy {
    /// Mean score below which the cohort is considered struggling
    pub low_mean: f64,
    /// Mean score above which the cohort is considered strong
    pub high_mean: f64,
    /// Standard deviation above which skill gaps are flagged
    pub high_std_dev: f64,
    /// Beginner share (percent) above which pacing should slow down
    pub beginner_share: f64,
    /// Expert share (percent) above which mentoring is suggested
    pub expert_share: f64,
}

impl Default for CohortPolicy {
    fn default() -> Self {
        Self {
            skill: SkillThresholds::default(),
            distribution: DistributionPolicy::default(),
            strategy: StrategyPolicy::default(),
            assessment: AssessmentPolicy::default(),
            outlier_iqr_factor: OUTLIER_IQR_FACTOR,
        }
    }
}

impl Default for SkillThresholds {
    fn default() -> Self {
        Self {
            beginner_max: BEGINNER_MAX_SCORE,
            intermediate_max: INTERMEDIATE_MAX_SCORE,
            advanced_max: ADVANCED_MAX_SCORE,
        }
    }
}

impl Default for DistributionPolicy {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            min_samples: MIN_SHAPE_SAMPLES,
            bimodal_separation: BIMODAL_MIN_SEPARATION,
            uniform_flatness: UNIFORM_MAX_FLATNESS,
        }
    }
}

impl Default for StrategyPolicy {
    fn default() -> Self {
        Self {
            bimodal_confidence: SPLIT_MIN_CONFIDENCE,
            multi_track_variation: MULTI_TRACK_MIN_VARIATION,
        }
    }
}

impl Default for AssessmentPolicy {
    fn default() -> Self {
        Self {
            low_mean: 50.0,
            high_mean: 80.0,
            high_std_dev: 20.0,
            beginner_share: 40.0,
            expert_share: 20.0,
        }
    }
}

impl CohortPolicy {
    /// Returns this policy with a different histogram bin count.
    #[must_use]
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.distribution.bin_count = bin_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default_policy() {
        let policy: CohortPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, CohortPolicy::default());
        assert_eq!(policy.outlier_iqr_factor, OUTLIER_IQR_FACTOR);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{ "strategy": { "bimodal_confidence": 0.8 }, "outlier_iqr_factor": 3.0 }"#;
        let policy: CohortPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.strategy.bimodal_confidence, 0.8);
        assert_eq!(
            policy.strategy.multi_track_variation,
            MULTI_TRACK_MIN_VARIATION
        );
        assert_eq!(policy.outlier_iqr_factor, 3.0);
        assert_eq!(policy.skill, SkillThresholds::default());
    }
}
