//! Cohort-level analysis of student assessment scores
//!
//! This crate turns a cohort's scores into pedagogical decisions: how the
//! scores are distributed, which tier each student belongs to, who stands out,
//! and whether the cohort should be taught as one group or split into tracks.
//!
//! # Overview
//!
//! ## Cohort Analysis Workflow
//!
//! 1. **Load Scores** ([`score::StudentScore`]): One record per student
//! 2. **Detect Shape** ([`distribution::DistributionMode`]): Normal, bimodal,
//!    multimodal or uniform, from a coarse histogram
//! 3. **Classify Students** ([`classification::StudentClassification`]): Skill
//!    tier and percentile rank per student
//! 4. **Find Outliers** ([`outliers::Outlier`]): Scores beyond the IQR fences
//! 5. **Recommend Strategy** ([`strategy::CohortStrategy`]): Single track, two
//!    tracks or three tracks
//!
//! ## Reporting
//!
//! - [`assessment::CohortAssessment`]: Statistics, shape, tier counts and
//!   plain-language recommendations
//! - [`leaderboard::Leaderboard`]: Ranked scores with cohort summary
//! - [`visualization::VisualizationData`]: Histogram, box plot and Gaussian
//!   curve for charting
//!
//! Every threshold is taken from a [`policy::CohortPolicy`]; its default
//! reproduces the standard pedagogical policy.
//!
//! All operations are pure functions of their inputs. Nothing here logs,
//! performs I/O or keeps state between calls.
//!
//! # Examples
//!
//! ```
//! use cohort_analysis::{
//!     policy::CohortPolicy,
//!     score::with_positional_ids,
//!     strategy::{CohortStrategy, StrategyType},
//! };
//!
//! let records = with_positional_ids(&[62.0, 68.0, 71.0, 74.0, 77.0, 80.0]);
//! let strategy = CohortStrategy::recommend(&records, &CohortPolicy::default());
//! assert_eq!(strategy.kind, StrategyType::SingleTrack);
//! ```

pub mod assessment;
pub mod classification;
pub mod distribution;
pub mod leaderboard;
pub mod outliers;
pub mod policy;
pub mod score;
pub mod strategy;
pub mod visualization;

#[cfg(test)]
mod test_util;
