use cohort_analysis::{distribution::DistributionMode, policy::CohortPolicy, score};
use cohort_stats::histogram::Histogram;

use super::ScoresInput;
use crate::util::Output;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DistributionArg {
    #[clap(flatten)]
    input: ScoresInput,
    /// Number of histogram bins (defaults to the policy's bin count)
    #[arg(long)]
    bins: Option<usize>,
}

pub(crate) fn run(arg: &DistributionArg, mut policy: CohortPolicy) -> anyhow::Result<()> {
    if let Some(bins) = arg.bins {
        anyhow::ensure!(bins > 0, "--bins must be at least 1");
        policy = policy.with_bin_count(bins);
    }

    let scores = score::scores_of(&arg.input.load()?);
    let mode = DistributionMode::detect(&scores, &policy.distribution);

    if arg.input.json {
        return Output::stdout().write_json(&mode);
    }

    println!("Distribution Analysis ({} students)", scores.len());
    println!("==========================================");
    println!("  Type:       {}", mode.kind);
    println!("  Confidence: {:.0}%", mode.confidence * 100.0);
    let peaks = mode
        .peaks
        .iter()
        .map(|p| format!("{p:.1}"))
        .collect::<Vec<_>>();
    println!("  Peaks:      {}", peaks.join(", "));
    println!();

    print_histogram(&Histogram::new(&scores, policy.distribution.bin_count));
    Ok(())
}

fn print_histogram(histogram: &Histogram) {
    let max_count = histogram
        .bins
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(0);
    if max_count == 0 {
        return;
    }

    println!("Histogram:");
    for bin in &histogram.bins {
        let bar_len = bin.count * BAR_WIDTH / max_count;
        println!(
            "  {:>6.1} - {:<6.1} {:>4} {}",
            bin.range.start,
            bin.range.end,
            bin.count,
            "#".repeat(bar_len)
        );
    }
}
