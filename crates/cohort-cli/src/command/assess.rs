use cohort_analysis::{
    assessment::CohortAssessment, classification::SkillLevel, policy::CohortPolicy,
};

use super::ScoresInput;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AssessArg {
    #[clap(flatten)]
    input: ScoresInput,
}

pub(crate) fn run(arg: &AssessArg, policy: &CohortPolicy) -> anyhow::Result<()> {
    let records = arg.input.load()?;
    let assessment = CohortAssessment::analyze(&records, policy);

    if arg.input.json {
        return Output::stdout().write_json(&assessment);
    }

    let stats = &assessment.statistics;
    println!("Cohort Assessment ({} students)", stats.count);
    println!("==========================================");
    println!(
        "  Mean {:.1}, median {:.1}, std dev {:.1}, range {:.1}-{:.1}",
        stats.mean, stats.median, stats.std_dev, stats.min, stats.max
    );
    println!(
        "  Distribution: {} ({:.0}% confidence)",
        assessment.distribution.kind,
        assessment.distribution.confidence * 100.0
    );
    let tiers = SkillLevel::ALL
        .iter()
        .map(|&level| format!("{level} {}", assessment.classification.get(level)))
        .collect::<Vec<_>>();
    println!("  Tiers: {}", tiers.join(", "));
    println!();

    println!("Recommendations:");
    if assessment.recommendations.is_empty() {
        println!("  None, the cohort looks balanced");
    }
    for (i, recommendation) in assessment.recommendations.iter().enumerate() {
        println!("  {}. {recommendation}", i + 1);
    }

    Ok(())
}
