//! Statistical primitives for cohort score analysis.
//!
//! This crate provides the numeric building blocks used by the cohort
//! analysis layer:
//!
//! - **Descriptive statistics**: mean, median, population standard deviation
//!   and the bundled [`CohortStatistics`](descriptive::CohortStatistics) summary
//! - **Percentiles**: linear-interpolation percentiles with range validation
//! - **Histogram generation**: fixed-width bins spanning the sample range
//! - **Normal density**: Gaussian probability density for curve sampling
//!
//! All functions take the sample by reference and never reorder the caller's
//! data; sorting always happens on an owned copy.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing a score sample
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Fixed-width histogram construction
//! - [`density`]: Normal probability density function
//!
//! # Examples
//!
//! ## Computing cohort statistics
//!
//! ```
//! use cohort_stats::descriptive::CohortStatistics;
//!
//! let scores = [55.0, 70.0, 62.5, 88.0, 91.0];
//! let stats = CohortStatistics::new(&scores);
//! assert_eq!(stats.count, 5);
//! assert_eq!(stats.median, 70.0);
//! assert_eq!(stats.q2, stats.median);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use cohort_stats::percentiles;
//!
//! let scores = [10.0, 20.0, 30.0, 40.0];
//! assert_eq!(percentiles::percentile(&scores, 50.0)?, 25.0);
//! assert!(percentiles::percentile(&scores, 101.0).is_err());
//! # Ok::<(), cohort_stats::StatsError>(())
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use cohort_stats::histogram::Histogram;
//!
//! let scores = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
//! let histogram = Histogram::new(&scores, 10);
//! assert_eq!(histogram.bins.len(), 10);
//! assert_eq!(histogram.bins[9].count, 2);
//! ```

pub mod density;
pub mod descriptive;
pub mod histogram;
pub mod percentiles;

/// Errors raised by statistical computations.
///
/// Degenerate samples (empty or single-valued) are never errors; only
/// arguments outside their mathematical domain are rejected.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// Requested percentile lies outside `[0, 100]` (or is NaN).
    #[display("percentile must be between 0 and 100, got {percentile}")]
    PercentileOutOfRange { percentile: f64 },
}
