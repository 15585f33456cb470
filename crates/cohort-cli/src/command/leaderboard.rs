use cohort_analysis::leaderboard::{Leaderboard, LeaderboardOrder};

use super::ScoresInput;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LeaderboardArg {
    #[clap(flatten)]
    input: ScoresInput,
    /// Sort order: score or id
    #[arg(long, default_value = "score")]
    sort: LeaderboardOrder,
    /// Show only the first N entries
    #[arg(long)]
    top: Option<usize>,
}

pub(crate) fn run(arg: &LeaderboardArg) -> anyhow::Result<()> {
    let records = arg.input.load()?;
    let mut leaderboard = Leaderboard::new(&records, arg.sort);
    if let Some(top) = arg.top {
        leaderboard.entries.truncate(top);
    }

    if arg.input.json {
        return Output::stdout().write_json(&leaderboard);
    }

    println!("Leaderboard ({} students)", records.len());
    println!("==========================================");
    println!("  {:>5} {:>10} {:>8}", "Rank", "Student", "Score");
    println!("  {}", "-".repeat(25));
    for entry in &leaderboard.entries {
        println!(
            "  {:>5} {:>10} {:>8.1}",
            entry.rank, entry.student_id, entry.score
        );
    }
    println!();
    println!(
        "  Average {:.1}, highest {:.1}, lowest {:.1}",
        leaderboard.average, leaderboard.highest, leaderboard.lowest
    );

    Ok(())
}
