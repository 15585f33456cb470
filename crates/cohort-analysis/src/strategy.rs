//! Cohort teaching-strategy recommendation
//!
//! Combines descriptive statistics, distribution shape and tier counts into
//! one of three strategies. Rules are checked in order and the first match
//! wins:
//!
//! 1. Confident bimodal distribution → two tracks split at the median
//! 2. High coefficient of variation and a multimodal distribution → three
//!    tracks by skill tier
//! 3. Otherwise → a single track for everyone

use cohort_stats::descriptive::CohortStatistics;
use serde::{Deserialize, Serialize};

use crate::{
    classification::{LevelCounts, StudentClassification},
    distribution::{DistributionMode, DistributionType},
    policy::CohortPolicy,
    score::{self, StudentScore},
};

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
pub enum StrategyType {
    #[display("single_track")]
    SingleTrack,
    #[display("split_two_tracks")]
    SplitTwoTracks,
    #[display("split_multiple_tracks")]
    SplitMultipleTracks,
}

/// A suggested teaching group with its own pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedGroup {
    pub name: String,
    pub target_levels: Vec<String>,
    pub student_count: usize,
    pub recommended_pace: String,
}

impl SuggestedGroup {
    fn new(name: &str, target_levels: &[&str], student_count: usize, pace: &str) -> Self {
        Self {
            name: name.to_owned(),
            target_levels: target_levels.iter().map(|&level| level.to_owned()).collect(),
            student_count,
            recommended_pace: pace.to_owned(),
        }
    }
}

/// Recommended way to teach a cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortStrategy {
    #[serde(rename = "type")]
    pub kind: StrategyType,
    /// Human-readable justification citing the deciding statistics
    pub reasoning: String,
    pub suggested_groups: Vec<SuggestedGroup>,
}

impl CohortStrategy {
    /// Recommends a strategy for the cohort.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{
    ///     policy::CohortPolicy,
    ///     score::with_positional_ids,
    ///     strategy::{CohortStrategy, StrategyType},
    /// };
    ///
    /// let records = with_positional_ids(&[72.0, 75.0, 78.0, 80.0, 74.0]);
    /// let strategy = CohortStrategy::recommend(&records, &CohortPolicy::default());
    /// assert_eq!(strategy.kind, StrategyType::SingleTrack);
    /// assert_eq!(strategy.suggested_groups[0].student_count, 5);
    /// ```
    #[must_use]
    pub fn recommend(records: &[StudentScore], policy: &CohortPolicy) -> Self {
        let scores = score::scores_of(records);
        let stats = CohortStatistics::new(&scores);
        let distribution = DistributionMode::detect(&scores, &policy.distribution);

        if distribution.is_confident_bimodal(policy.strategy.bimodal_confidence) {
            return Self::split_at_median(records, &stats, &distribution);
        }

        if stats.coefficient_of_variation() > policy.strategy.multi_track_variation
            && distribution.kind == DistributionType::Multimodal
        {
            let classifications = StudentClassification::classify_all(records, &policy.skill);
            let counts = LevelCounts::from_classifications(&classifications);
            return Self::split_by_level(&stats, counts);
        }

        Self::single_track(&stats, records.len())
    }

    fn split_at_median(
        records: &[StudentScore],
        stats: &CohortStatistics,
        distribution: &DistributionMode,
    ) -> Self {
        let below_median = records.iter().filter(|r| r.score < stats.median).count();
        let at_or_above_median = records.len() - below_median;

        Self {
            kind: StrategyType::SplitTwoTracks,
            reasoning: format!(
                "Cohort shows clear bimodal distribution (confidence: {:.0}%) with two distinct \
                 groups. Splitting will allow better pacing for each group.",
                distribution.confidence * 100.0
            ),
            suggested_groups: vec![
                SuggestedGroup::new(
                    "Track A - Foundation",
                    &["beginner", "intermediate-low"],
                    below_median,
                    "slower with more examples and support",
                ),
                SuggestedGroup::new(
                    "Track B - Advanced",
                    &["intermediate-high", "advanced", "expert"],
                    at_or_above_median,
                    "faster with challenging materials",
                ),
            ],
        }
    }

    fn split_by_level(stats: &CohortStatistics, counts: LevelCounts) -> Self {
        Self {
            kind: StrategyType::SplitMultipleTracks,
            reasoning: format!(
                "High variance (std dev: {:.1}) and multiple skill clusters detected. \
                 Consider 3 tracks for optimal learning.",
                stats.std_dev
            ),
            suggested_groups: vec![
                SuggestedGroup::new(
                    "Beginner Track",
                    &["beginner"],
                    counts.beginner,
                    "foundational with extensive support",
                ),
                SuggestedGroup::new(
                    "Intermediate Track",
                    &["intermediate"],
                    counts.intermediate,
                    "standard curriculum",
                ),
                SuggestedGroup::new(
                    "Advanced Track",
                    &["advanced", "expert"],
                    counts.advanced + counts.expert,
                    "accelerated with enrichment",
                ),
            ],
        }
    }

    fn single_track(stats: &CohortStatistics, student_count: usize) -> Self {
        Self {
            kind: StrategyType::SingleTrack,
            reasoning: format!(
                "Cohort is relatively homogeneous (std dev: {:.1}, mean: {:.1}). Single track \
                 appropriate with differentiated support for outliers.",
                stats.std_dev, stats.mean
            ),
            suggested_groups: vec![SuggestedGroup::new(
                "Unified Cohort",
                &["all levels"],
                student_count,
                "standard with individual adaptations",
            )],
        }
    }

    /// Total number of students across all suggested groups.
    #[must_use]
    pub fn grouped_student_count(&self) -> usize {
        self.suggested_groups.iter().map(|g| g.student_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{BIMODAL_SCORES, evenly_spaced, records};

    fn recommend(scores: &[f64]) -> CohortStrategy {
        CohortStrategy::recommend(&records(scores), &CohortPolicy::default())
    }

    #[test]
    fn test_bimodal_cohort_splits_into_two_tracks() {
        let strategy = recommend(&BIMODAL_SCORES);
        assert_eq!(strategy.kind, StrategyType::SplitTwoTracks);
        assert_eq!(strategy.suggested_groups.len(), 2);
        assert!(strategy.suggested_groups.iter().all(|g| g.student_count > 0));
        assert_eq!(strategy.grouped_student_count(), BIMODAL_SCORES.len());
        assert_eq!(strategy.suggested_groups[0].student_count, 25);
        assert!(
            strategy.reasoning.contains("confidence: 90%"),
            "{}",
            strategy.reasoning
        );
    }

    #[test]
    fn test_multimodal_high_variance_splits_by_level() {
        // Counts per bin: [1, 6, 1, 1, 6, 1, 1, 6, 1, 1]; mean 47, std dev above 0.4 * mean
        let mut scores = vec![0.0, 100.0];
        for (bin, count) in [(1, 6), (2, 1), (3, 1), (4, 6), (5, 1), (6, 1), (7, 6), (8, 1)] {
            scores.extend((0..count).map(|_| f64::from(bin) * 10.0 + 5.0));
        }
        let strategy = recommend(&scores);
        assert_eq!(strategy.kind, StrategyType::SplitMultipleTracks);
        assert_eq!(strategy.suggested_groups.len(), 3);
        assert_eq!(strategy.grouped_student_count(), scores.len());
        assert_eq!(strategy.suggested_groups[0].student_count, 9);
        assert_eq!(strategy.suggested_groups[1].student_count, 8);
        assert_eq!(strategy.suggested_groups[2].student_count, 8);
    }

    #[test]
    fn test_uniform_cohort_stays_single_track() {
        let strategy = recommend(&evenly_spaced(100));
        assert_eq!(strategy.kind, StrategyType::SingleTrack);
        assert_eq!(strategy.grouped_student_count(), 100);
        assert!(strategy.reasoning.contains("mean: 49.5"), "{}", strategy.reasoning);
    }

    #[test]
    fn test_stricter_policy_prevents_split() {
        let mut policy = CohortPolicy::default();
        policy.strategy.bimodal_confidence = 0.95;
        let strategy = CohortStrategy::recommend(&records(&BIMODAL_SCORES), &policy);
        assert_eq!(strategy.kind, StrategyType::SingleTrack);
    }

    #[test]
    fn test_empty_cohort() {
        let strategy = recommend(&[]);
        assert_eq!(strategy.kind, StrategyType::SingleTrack);
        assert_eq!(strategy.grouped_student_count(), 0);
    }
}
