use cohort_analysis::{policy::CohortPolicy, strategy::CohortStrategy};

use super::ScoresInput;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StrategyArg {
    #[clap(flatten)]
    input: ScoresInput,
}

pub(crate) fn run(arg: &StrategyArg, policy: &CohortPolicy) -> anyhow::Result<()> {
    let records = arg.input.load()?;
    let strategy = CohortStrategy::recommend(&records, policy);

    if arg.input.json {
        return Output::stdout().write_json(&strategy);
    }

    println!("Recommended Strategy: {}", strategy.kind);
    println!("==========================================");
    println!("{}", strategy.reasoning);
    println!();

    println!(
        "  {:<24} {:>8}  {:<32} Pace",
        "Group", "Students", "Target Levels"
    );
    println!("  {}", "-".repeat(100));
    for group in &strategy.suggested_groups {
        println!(
            "  {:<24} {:>8}  {:<32} {}",
            group.name,
            group.student_count,
            group.target_levels.join(", "),
            group.recommended_pace
        );
    }

    Ok(())
}
