use std::path::PathBuf;

use anyhow::Context;
use cohort_analysis::score::StudentScore;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use rand_pcg::Pcg32;

use crate::util::Output;

const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateScoresArg {
    /// Centre of each score cluster
    #[arg(long, value_delimiter = ',', default_values_t = [35.0, 75.0])]
    clusters: Vec<f64>,
    /// Number of students drawn from each cluster
    #[arg(long, default_value_t = 25)]
    per_cluster: usize,
    /// Standard deviation of each cluster
    #[arg(long, default_value_t = 8.0)]
    spread: f64,
    /// Random seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateScoresArg) -> anyhow::Result<()> {
    anyhow::ensure!(!arg.clusters.is_empty(), "--clusters must not be empty");

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    eprintln!(
        "Generating {} scores from {} clusters (seed {seed})...",
        arg.per_cluster * arg.clusters.len(),
        arg.clusters.len()
    );

    let mut rng = Pcg32::seed_from_u64(seed);
    let records = generate(&arg.clusters, arg.per_cluster, arg.spread, &mut rng)?;
    Output::save_json(&records, arg.output.clone())
}

/// Draws `per_cluster` scores around each centre, clamped to the score scale
/// and rounded to one decimal. Student ids are assigned from 1 in draw order.
fn generate<R>(
    centres: &[f64],
    per_cluster: usize,
    spread: f64,
    rng: &mut R,
) -> anyhow::Result<Vec<StudentScore>>
where
    R: Rng + ?Sized,
{
    let mut scores = Vec::with_capacity(centres.len() * per_cluster);
    for &centre in centres {
        let normal = Normal::new(centre, spread)
            .with_context(|| format!("Invalid cluster (centre {centre}, spread {spread})"))?;
        scores.extend((0..per_cluster).map(|_| {
            let score = rng.sample(normal).clamp(MIN_SCORE, MAX_SCORE);
            (score * 10.0).round() / 10.0
        }));
    }

    Ok((1..)
        .zip(scores)
        .map(|(id, score)| StudentScore::new(id, score))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_reproducible_for_seed() {
        let a = generate(&[40.0, 80.0], 10, 5.0, &mut Pcg32::seed_from_u64(7)).unwrap();
        let b = generate(&[40.0, 80.0], 10, 5.0, &mut Pcg32::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert_eq!(a[0].student_id, 1);
        assert_eq!(a[19].student_id, 20);
    }

    #[test]
    fn test_generate_clamps_to_score_scale() {
        let records = generate(&[0.0, 100.0], 50, 30.0, &mut Pcg32::seed_from_u64(1)).unwrap();
        assert!(
            records
                .iter()
                .all(|r| (MIN_SCORE..=MAX_SCORE).contains(&r.score))
        );
    }

    #[test]
    fn test_generate_zero_spread_is_exact() {
        let records = generate(&[62.5], 4, 0.0, &mut Pcg32::seed_from_u64(3)).unwrap();
        assert!(records.iter().all(|r| r.score == 62.5));
    }

    #[test]
    fn test_generate_rejects_invalid_spread() {
        assert!(generate(&[50.0], 5, f64::NAN, &mut Pcg32::seed_from_u64(3)).is_err());
    }
}
