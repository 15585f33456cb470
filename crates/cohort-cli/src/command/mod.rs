use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cohort_analysis::score::StudentScore;

use crate::util;

use self::{
    assess::AssessArg, classify::ClassifyArg, distribution::DistributionArg,
    generate_scores::GenerateScoresArg, leaderboard::LeaderboardArg, outliers::OutliersArg,
    report::ReportArg, stats::StatsArg, strategy::StrategyArg, visualize::VisualizeArg,
};

mod assess;
mod classify;
mod distribution;
mod generate_scores;
mod leaderboard;
mod outliers;
mod report;
mod stats;
mod strategy;
mod visualize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// JSON file overriding parts of the default analysis policy
    #[arg(long, global = true)]
    policy: Option<PathBuf>,
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Show descriptive statistics of a score file
    Stats(#[clap(flatten)] StatsArg),
    /// Detect the shape of the score distribution
    Distribution(#[clap(flatten)] DistributionArg),
    /// Classify every student into a skill tier
    Classify(#[clap(flatten)] ClassifyArg),
    /// List students outside the IQR fences
    Outliers(#[clap(flatten)] OutliersArg),
    /// Recommend a teaching strategy for the cohort
    Strategy(#[clap(flatten)] StrategyArg),
    /// Assess the cohort and print recommendations
    Assess(#[clap(flatten)] AssessArg),
    /// Rank students by score or id
    Leaderboard(#[clap(flatten)] LeaderboardArg),
    /// Export chart data (histogram, box plot, Gaussian curve) as JSON
    Visualize(#[clap(flatten)] VisualizeArg),
    /// Export every analysis of the cohort as one JSON document
    Report(#[clap(flatten)] ReportArg),
    /// Generate a synthetic score file from Gaussian clusters
    GenerateScores(#[clap(flatten)] GenerateScoresArg),
}

/// Score file argument shared by the analysis subcommands.
#[derive(Debug, Clone, Args)]
pub(crate) struct ScoresInput {
    /// Path to the scores JSON file
    pub scores: PathBuf,
    /// Print the result as JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

impl ScoresInput {
    fn load(&self) -> anyhow::Result<Vec<StudentScore>> {
        util::read_scores_file(&self.scores)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let policy = util::read_policy_file(args.policy.as_deref())?;
    match args.mode {
        Mode::Stats(arg) => stats::run(&arg)?,
        Mode::Distribution(arg) => distribution::run(&arg, policy)?,
        Mode::Classify(arg) => classify::run(&arg, &policy)?,
        Mode::Outliers(arg) => outliers::run(&arg, &policy)?,
        Mode::Strategy(arg) => strategy::run(&arg, &policy)?,
        Mode::Assess(arg) => assess::run(&arg, &policy)?,
        Mode::Leaderboard(arg) => leaderboard::run(&arg)?,
        Mode::Visualize(arg) => visualize::run(&arg, &policy)?,
        Mode::Report(arg) => report::run(&arg, &policy)?,
        Mode::GenerateScores(arg) => generate_scores::run(&arg)?,
    }
    Ok(())
}
