use serde::{Deserialize, Serialize};

/// Opaque, caller-supplied student key. Uniqueness is assumed, not checked.
pub type StudentId = i64;

/// One student's result on an assessment.
///
/// Deserializes from both `student_id` and `studentId` keys so score files
/// exported by the course platform can be read unchanged.
///
/// # Examples
///
/// ```
/// use cohort_analysis::score::StudentScore;
///
/// let records: Vec<StudentScore> =
///     serde_json::from_str(r#"[{"studentId": 7, "score": 81.5}]"#).unwrap();
/// assert_eq!(records[0], StudentScore::new(7, 81.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentScore {
    /// Student identifier
    #[serde(alias = "studentId")]
    pub student_id: StudentId,
    /// Score on the assessment (0-100 expected, not enforced)
    pub score: f64,
}

impl StudentScore {
    #[must_use]
    pub fn new(student_id: StudentId, score: f64) -> Self {
        Self { student_id, score }
    }
}

/// Extracts the bare score sample, preserving record order.
#[must_use]
pub fn scores_of(records: &[StudentScore]) -> Vec<f64> {
    records.iter().map(|record| record.score).collect()
}

/// Pairs bare scores with positional ids (`0..n`).
#[must_use]
pub fn with_positional_ids(scores: &[f64]) -> Vec<StudentScore> {
    (0..).zip(scores).map(|(id, &score)| StudentScore::new(id, score)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_snake_and_camel_case_keys() {
        let json = r#"[{"student_id": 1, "score": 40}, {"studentId": 2, "score": 72.5}]"#;
        let records: Vec<StudentScore> = serde_json::from_str(json).unwrap();
        assert_eq!(
            records,
            vec![StudentScore::new(1, 40.0), StudentScore::new(2, 72.5)]
        );
        assert_eq!(scores_of(&records), vec![40.0, 72.5]);
    }

    #[test]
    fn test_positional_ids() {
        let records = with_positional_ids(&[9.0, 8.0, 7.0]);
        let ids = records.iter().map(|r| r.student_id).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
