//! Cohort assessment report
//!
//! Bundles the descriptive statistics, distribution shape and tier counts of
//! a cohort with a list of plain-language recommendations for the instructor.

use cohort_stats::descriptive::CohortStatistics;
use serde::{Deserialize, Serialize};

use crate::{
    classification::{LevelCounts, SkillLevel, StudentClassification},
    distribution::DistributionMode,
    outliers::OutlierFences,
    policy::CohortPolicy,
    score::{self, StudentScore},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortAssessment {
    pub statistics: CohortStatistics,
    pub distribution: DistributionMode,
    pub classification: LevelCounts,
    /// Recommendations in a fixed order: distribution, mean, spread, tier
    /// shares, outliers
    pub recommendations: Vec<String>,
}

impl CohortAssessment {
    /// Assesses a cohort.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{
    ///     assessment::CohortAssessment, policy::CohortPolicy, score::with_positional_ids,
    /// };
    ///
    /// let records = with_positional_ids(&[20.0, 25.0, 30.0, 35.0, 45.0]);
    /// let assessment = CohortAssessment::analyze(&records, &CohortPolicy::default());
    /// assert_eq!(assessment.classification.beginner, 4);
    /// assert!(assessment.recommendations[0].starts_with("LOW AVERAGE SCORE"));
    /// ```
    #[must_use]
    pub fn analyze(records: &[StudentScore], policy: &CohortPolicy) -> Self {
        let scores = score::scores_of(records);
        let statistics = CohortStatistics::new(&scores);
        let distribution = DistributionMode::detect(&scores, &policy.distribution);
        let classification = LevelCounts::from_classifications(
            &StudentClassification::classify_all(records, &policy.skill),
        );
        let recommendations =
            recommendations(&statistics, &distribution, &classification, policy);

        Self {
            statistics,
            distribution,
            classification,
            recommendations,
        }
    }
}

fn recommendations(
    stats: &CohortStatistics,
    distribution: &DistributionMode,
    counts: &LevelCounts,
    policy: &CohortPolicy,
) -> Vec<String> {
    let thresholds = &policy.assessment;
    let mut out = vec![];

    if distribution.is_confident_bimodal(policy.strategy.bimodal_confidence) {
        out.push(
            "BIMODAL DISTRIBUTION DETECTED: Consider splitting cohort into two tracks for \
             optimal learning outcomes."
                .to_owned(),
        );
    }

    if stats.mean < thresholds.low_mean {
        out.push(
            "LOW AVERAGE SCORE: Majority of cohort struggling. Consider reviewing \
             prerequisites and adding foundational materials."
                .to_owned(),
        );
    } else if stats.mean > thresholds.high_mean {
        out.push(
            "HIGH AVERAGE SCORE: Cohort performing well. Consider adding enrichment and \
             advanced challenges."
                .to_owned(),
        );
    }

    if stats.std_dev > thresholds.high_std_dev {
        out.push(
            "HIGH VARIANCE: Large skill gaps in cohort. Personalized support and \
             differentiated instruction recommended."
                .to_owned(),
        );
    }

    if let Some(share) = counts
        .share(SkillLevel::Beginner)
        .filter(|&share| share > thresholds.beginner_share)
    {
        out.push(format!(
            "{share:.0}% are beginners: Adjust pace and add more scaffolding to curriculum."
        ));
    }

    if let Some(share) = counts
        .share(SkillLevel::Expert)
        .filter(|&share| share > thresholds.expert_share)
    {
        out.push(format!(
            "{share:.0}% are experts: Provide peer mentoring opportunities and advanced projects."
        ));
    }

    let fences = OutlierFences::from_stats(stats, policy.outlier_iqr_factor);
    if stats.count > 0 && stats.min < fences.lower {
        out.push(
            "LOW OUTLIERS DETECTED: Some students significantly below cohort average. \
             Immediate intervention needed."
                .to_owned(),
        );
    }

    out
}
