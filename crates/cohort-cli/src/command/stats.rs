use cohort_analysis::score;
use cohort_stats::{descriptive::CohortStatistics, percentiles::Percentiles};
use serde::Serialize;

use super::ScoresInput;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    #[clap(flatten)]
    input: ScoresInput,
    /// Extra percentiles to report (0-100)
    #[arg(long, value_delimiter = ',', default_values_t = [10.0, 90.0])]
    percentiles: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    statistics: CohortStatistics,
    percentiles: Percentiles,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let scores = score::scores_of(&arg.input.load()?);
    let statistics = CohortStatistics::new(&scores);
    let percentiles = Percentiles::new(&scores, &arg.percentiles)?;

    if arg.input.json {
        return Output::stdout().write_json(StatsOutput {
            statistics,
            percentiles,
        });
    }

    println!("Cohort Statistics ({} students)", statistics.count);
    println!("==========================================");
    println!("  {:<10} {:>8.2}", "Mean", statistics.mean);
    println!("  {:<10} {:>8.2}", "Median", statistics.median);
    println!("  {:<10} {:>8.2}", "Std Dev", statistics.std_dev);
    println!("  {:<10} {:>8.2}", "Min", statistics.min);
    println!("  {:<10} {:>8.2}", "Q1", statistics.q1);
    println!("  {:<10} {:>8.2}", "Q3", statistics.q3);
    println!("  {:<10} {:>8.2}", "Max", statistics.max);
    println!("  {:<10} {:>8.2}", "IQR", statistics.iqr());
    println!("  {:<10} {:>8.3}", "CV", statistics.coefficient_of_variation());

    if !arg.percentiles.is_empty() {
        println!();
        println!("Percentiles:");
        for (p, value) in percentiles.iter() {
            println!("  {:<10} {value:>8.2}", format!("P{p}"));
        }
    }

    Ok(())
}
