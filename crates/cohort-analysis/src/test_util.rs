use crate::score::{self, StudentScore};

/// Two clusters of 25 scores each, centred near 25 and 75, spanning 0-100.
///
/// With 10 bins the counts are `[2, 5, 11, 5, 2, 2, 5, 11, 5, 2]`.
pub(crate) const BIMODAL_SCORES: [f64; 50] = [
    0.0, 5.0, //
    12.0, 14.0, 15.0, 16.0, 18.0, //
    20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 25.0, 26.0, 27.0, 28.0, 29.0, //
    31.0, 33.0, 35.0, 36.0, 38.0, //
    42.0, 45.0, //
    50.0, 55.0, //
    62.0, 64.0, 65.0, 66.0, 68.0, //
    70.0, 71.0, 72.0, 73.0, 74.0, 75.0, 75.0, 76.0, 77.0, 78.0, 79.0, //
    81.0, 83.0, 85.0, 86.0, 88.0, //
    92.0, 100.0,
];

pub(crate) fn records(scores: &[f64]) -> Vec<StudentScore> {
    score::with_positional_ids(scores)
}

pub(crate) fn evenly_spaced(count: u32) -> Vec<f64> {
    (0..count).map(f64::from).collect()
}
