use std::f64::consts::PI;

/// Normal (Gaussian) probability density at `x`.
///
/// Returns `None` when `std_dev` is not strictly positive, because the
/// density is undefined for a degenerate distribution.
///
/// # Examples
///
/// ```
/// # use cohort_stats::density::normal_pdf;
/// let peak = normal_pdf(0.0, 0.0, 1.0).unwrap();
/// assert!((peak - 0.398_942_280_4).abs() < 1e-9);
/// assert_eq!(normal_pdf(1.0, 0.0, 0.0), None);
/// ```
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if std_dev.is_nan() || std_dev <= 0.0 {
        return None;
    }
    let exponent = -(x - mean).powi(2) / (2.0 * std_dev.powi(2));
    Some(exponent.exp() / (std_dev * (2.0 * PI).sqrt()))
}
