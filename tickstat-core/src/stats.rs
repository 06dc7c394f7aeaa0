//! Pure windowed statistics over ordered numeric sequences.
//!
//! Every function here degrades to a defined neutral value (`0.0`) on
//! degenerate input instead of erroring: empty sequences, mismatched
//! lengths, and zero-variance series are expected states, not failures.
//! Nothing in this module panics or returns a non-finite value.

/// Arithmetic mean. Returns `0.0` for an empty slice.
#[must_use]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N, not N-1).
/// Returns `0.0` for an empty slice.
#[must_use]
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = average(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Population covariance. Returns `0.0` unless both slices are non-empty
/// and of equal length.
#[must_use]
pub fn covariance(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || x.len() != y.len() {
        return 0.0;
    }
    let mean_x = average(x);
    let mean_y = average(y);
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / x.len() as f64
}

/// Pearson correlation coefficient, clamped to `[-1, 1]`.
///
/// Returns `0.0` when either input has fewer than 2 elements, lengths
/// differ, or either standard deviation is exactly zero (constant series).
/// Division by zero never propagates as NaN or infinity.
#[must_use]
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() < 2 || x.len() != y.len() {
        return 0.0;
    }
    let sd_x = std_deviation(x);
    let sd_y = std_deviation(y);
    if sd_x == 0.0 || sd_y == 0.0 {
        return 0.0;
    }
    // Clamp: floating rounding can nudge a perfect correlation past 1.0.
    (covariance(x, y) / (sd_x * sd_y)).clamp(-1.0, 1.0)
}
