//! Ranked cohort leaderboard

use cohort_stats::descriptive::CohortStatistics;
use serde::{Deserialize, Serialize};

use crate::score::{self, StudentId, StudentScore};

/// Ordering of leaderboard entries.
///
/// Parses case-insensitively from the variant name (`"score"`, `"id"`).
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardOrder {
    /// Highest score first; ties keep input order
    #[default]
    Score,
    /// Ascending student id
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the leaderboard
    pub rank: usize,
    pub student_id: StudentId,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl Leaderboard {
    /// Builds a leaderboard. Summary values are all zero for an empty cohort.
    ///
    /// # Examples
    ///
    /// ```
    /// use cohort_analysis::{
    ///     leaderboard::{Leaderboard, LeaderboardOrder},
    ///     score::StudentScore,
    /// };
    ///
    /// let records = [StudentScore::new(1, 70.0), StudentScore::new(2, 90.0)];
    /// let board = Leaderboard::new(&records, LeaderboardOrder::Score);
    /// assert_eq!(board.entries[0].student_id, 2);
    /// assert_eq!(board.entries[0].rank, 1);
    /// assert_eq!(board.average, 80.0);
    /// ```
    #[must_use]
    pub fn new(records: &[StudentScore], order: LeaderboardOrder) -> Self {
        let mut sorted = records.to_vec();
        match order {
            LeaderboardOrder::Score => sorted.sort_by(|a, b| b.score.total_cmp(&a.score)),
            LeaderboardOrder::Id => sorted.sort_by_key(|r| r.student_id),
        }

        let entries = (1..)
            .zip(sorted)
            .map(|(rank, record)| LeaderboardEntry {
                rank,
                student_id: record.student_id,
                score: record.score,
            })
            .collect();

        let stats = CohortStatistics::new(&score::scores_of(records));
        Self {
            entries,
            average: stats.mean,
            highest: stats.max,
            lowest: stats.min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cohort() -> Vec<StudentScore> {
        vec![
            StudentScore::new(3, 55.0),
            StudentScore::new(1, 80.0),
            StudentScore::new(4, 80.0),
            StudentScore::new(2, 95.0),
        ]
    }

    #[test]
    fn test_score_order_is_stable_for_ties() {
        let board = Leaderboard::new(&cohort(), LeaderboardOrder::Score);
        let ids = board.entries.iter().map(|e| e.student_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 1, 4, 3]);
        let ranks = board.entries.iter().map(|e| e.rank).collect::<Vec<_>>();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_id_order() {
        let board = Leaderboard::new(&cohort(), LeaderboardOrder::Id);
        let ids = board.entries.iter().map(|e| e.student_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_summary() {
        let board = Leaderboard::new(&cohort(), LeaderboardOrder::Score);
        assert_eq!(board.average, 77.5);
        assert_eq!(board.highest, 95.0);
        assert_eq!(board.lowest, 55.0);
    }

    #[test]
    fn test_empty_cohort() {
        let board = Leaderboard::new(&[], LeaderboardOrder::Score);
        assert!(board.entries.is_empty());
        assert_eq!((board.average, board.highest, board.lowest), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("score".parse::<LeaderboardOrder>().unwrap(), LeaderboardOrder::Score);
        assert_eq!("id".parse::<LeaderboardOrder>().unwrap(), LeaderboardOrder::Id);
        assert!("name".parse::<LeaderboardOrder>().is_err());
    }
}
