use cohort_analysis::{outliers::Outlier, policy::CohortPolicy};

use super::ScoresInput;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OutliersArg {
    #[clap(flatten)]
    input: ScoresInput,
}

pub(crate) fn run(arg: &OutliersArg, policy: &CohortPolicy) -> anyhow::Result<()> {
    let records = arg.input.load()?;
    let outliers = Outlier::identify_all(&records, policy.outlier_iqr_factor);

    if arg.input.json {
        return Output::stdout().write_json(&outliers);
    }

    println!(
        "Outliers (IQR factor {}): {} of {} students",
        policy.outlier_iqr_factor,
        outliers.len(),
        records.len()
    );
    println!("==========================================");
    if outliers.is_empty() {
        println!("  No outliers detected");
        return Ok(());
    }

    println!(
        "  {:>10} {:>8} {:<6} {:>10}",
        "Student", "Score", "Type", "From Med."
    );
    println!("  {}", "-".repeat(37));
    for outlier in &outliers {
        println!(
            "  {:>10} {:>8.1} {:<6} {:>10.1}",
            outlier.student_id,
            outlier.score,
            outlier.kind.to_string(),
            outlier.deviation_from_median
        );
    }

    Ok(())
}
