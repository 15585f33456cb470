use std::path::PathBuf;

use cohort_analysis::{policy::CohortPolicy, score, visualization::VisualizationData};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct VisualizeArg {
    /// Path to the scores JSON file
    scores: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &VisualizeArg, policy: &CohortPolicy) -> anyhow::Result<()> {
    let records = util::read_scores_file(&arg.scores)?;
    let data = VisualizationData::from_scores(&score::scores_of(&records), policy);
    Output::save_json(&data, arg.output.clone())
}
