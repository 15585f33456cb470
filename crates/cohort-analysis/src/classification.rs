//! Student skill-tier classification
//!
//! A student's tier depends only on their own score and the
//! [`SkillThresholds`]; their percentile rank depends on the whole cohort.

use serde::{Deserialize, Serialize};

use crate::{
    policy::SkillThresholds,
    score::{StudentId, StudentScore},
};

/// Skill tier assigned from absolute score thresholds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[display("beginner")]
    Beginner,
    #[display("intermediate")]
    Intermediate,
    #[display("advanced")]
    Advanced,
    #[display("expert")]
    Expert,
}

impl SkillLevel {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Maps a score to its tier. Upper bounds are inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{classification::SkillLevel, policy::SkillThresholds};
    ///
    /// let thresholds = SkillThresholds::default();
    /// assert_eq!(SkillLevel::from_score(40.0, &thresholds), SkillLevel::Beginner);
    /// assert_eq!(SkillLevel::from_score(40.5, &thresholds), SkillLevel::Intermediate);
    /// assert_eq!(SkillLevel::from_score(86.0, &thresholds), SkillLevel::Expert);
    /// ```
    #[must_use]
    pub fn from_score(score: f64, thresholds: &SkillThresholds) -> Self {
        if score <= thresholds.beginner_max {
            Self::Beginner
        } else if score <= thresholds.intermediate_max {
            Self::Intermediate
        } else if score <= thresholds.advanced_max {
            Self::Advanced
        } else {
            Self::Expert
        }
    }
}

/// A student's tier and percentile rank within the cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentClassification {
    pub student_id: StudentId,
    pub score: f64,
    pub level: SkillLevel,
    /// Share of the cohort scoring at or below this student, rounded (0-100)
    pub percentile: u8,
}

impl StudentClassification {
    /// Classifies every record, preserving input order.
    ///
    /// Students tied on the same score share the same percentile rank, which
    /// counts every score less than or equal to theirs.
    #[must_use]
    pub fn classify_all(records: &[StudentScore], thresholds: &SkillThresholds) -> Vec<Self> {
        let mut sorted = records
            .iter()
            .map(|r| r.score)
            .filter(|s| !s.is_nan())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);

        records
            .iter()
            .map(|record| Self {
                student_id: record.student_id,
                score: record.score,
                level: SkillLevel::from_score(record.score, thresholds),
                percentile: percentile_rank(&sorted, records.len(), record.score),
            })
            .collect()
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
/// `sorted_scores` holds the cohort's non-NaN scores; `-0.0` and `0.0` compare equal.
fn percentile_rank(sorted_scores: &[f64], cohort_size: usize, score: f64) -> u8 {
    let at_or_below = sorted_scores.partition_point(|&s| s <= score);
    let rank = at_or_below as f64 / cohort_size as f64 * 100.0;
    rank.round() as u8
}

/// Number of students in each skill tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
    pub expert: usize,
}

impl LevelCounts {
    #[must_use]
    pub fn from_classifications(classifications: &[StudentClassification]) -> Self {
        let mut counts = Self::default();
        for classification in classifications {
            *counts.get_mut(classification.level) += 1;
        }
        counts
    }

    #[must_use]
    pub fn get(&self, level: SkillLevel) -> usize {
        match level {
            SkillLevel::Beginner => self.beginner,
            SkillLevel::Intermediate => self.intermediate,
            SkillLevel::Advanced => self.advanced,
            SkillLevel::Expert => self.expert,
        }
    }

    fn get_mut(&mut self, level: SkillLevel) -> &mut usize {
        match level {
            SkillLevel::Beginner => &mut self.beginner,
            SkillLevel::Intermediate => &mut self.intermediate,
            SkillLevel::Advanced => &mut self.advanced,
            SkillLevel::Expert => &mut self.expert,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.beginner + self.intermediate + self.advanced + self.expert
    }

    /// Percentage of the cohort in `level`, or `None` for an empty cohort.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn share(&self, level: SkillLevel) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.get(level) as f64 / total as f64 * 100.0)
    }
}
