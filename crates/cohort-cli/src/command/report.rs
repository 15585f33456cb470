use std::path::PathBuf;

use chrono::{DateTime, Utc};
use cohort_analysis::{
    assessment::CohortAssessment, classification::StudentClassification,
    distribution::DistributionMode, outliers::Outlier, policy::CohortPolicy, score,
    strategy::CohortStrategy, visualization::VisualizationData,
};
use cohort_stats::descriptive::CohortStatistics;
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Path to the scores JSON file
    scores: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CohortReport {
    generated_at: DateTime<Utc>,
    source: PathBuf,
    policy: CohortPolicy,
    statistics: CohortStatistics,
    distribution: DistributionMode,
    classifications: Vec<StudentClassification>,
    outliers: Vec<Outlier>,
    strategy: CohortStrategy,
    assessment: CohortAssessment,
    visualization: VisualizationData,
}

pub(crate) fn run(arg: &ReportArg, policy: &CohortPolicy) -> anyhow::Result<()> {
    let records = util::read_scores_file(&arg.scores)?;
    let scores = score::scores_of(&records);

    eprintln!("Analyzing cohort...");
    let report = CohortReport {
        generated_at: Utc::now(),
        source: arg.scores.clone(),
        policy: policy.clone(),
        statistics: CohortStatistics::new(&scores),
        distribution: DistributionMode::detect(&scores, &policy.distribution),
        classifications: StudentClassification::classify_all(&records, &policy.skill),
        outliers: Outlier::identify_all(&records, policy.outlier_iqr_factor),
        strategy: CohortStrategy::recommend(&records, policy),
        assessment: CohortAssessment::analyze(&records, policy),
        visualization: VisualizationData::from_scores(&scores, policy),
    };

    Output::save_json(&report, arg.output.clone())
}
