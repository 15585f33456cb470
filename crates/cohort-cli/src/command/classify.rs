use cohort_analysis::{
    classification::{LevelCounts, SkillLevel, StudentClassification},
    policy::CohortPolicy,
};
use serde::Serialize;

use super::ScoresInput;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    #[clap(flatten)]
    input: ScoresInput,
}

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    students: Vec<StudentClassification>,
    counts: LevelCounts,
}

pub(crate) fn run(arg: &ClassifyArg, policy: &CohortPolicy) -> anyhow::Result<()> {
    let records = arg.input.load()?;
    let students = StudentClassification::classify_all(&records, &policy.skill);
    let counts = LevelCounts::from_classifications(&students);

    if arg.input.json {
        return Output::stdout().write_json(ClassifyOutput { students, counts });
    }

    println!("Student Classification");
    println!("==========================================");
    println!(
        "  {:>10} {:>8} {:<14} {:>10}",
        "Student", "Score", "Level", "Percentile"
    );
    println!("  {}", "-".repeat(45));
    for student in &students {
        println!(
            "  {:>10} {:>8.1} {:<14} {:>10}",
            student.student_id,
            student.score,
            student.level.to_string(),
            student.percentile
        );
    }
    println!();

    println!("Tier Counts:");
    for level in SkillLevel::ALL {
        let share = counts.share(level).unwrap_or(0.0);
        println!(
            "  {:<14} {:>6} ({share:.1}%)",
            level.to_string(),
            counts.get(level)
        );
    }

    Ok(())
}
