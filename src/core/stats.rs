use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Arithmetic mean. Empty input yields NaN.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Uncentered correlation: `Σ(x·y) / sqrt(Σx² · Σy²)`.
///
/// This is the raw second-moment ratio, NOT Pearson's covariance-based
/// coefficient; the two only agree for zero-mean inputs. Downstream slope
/// computation depends on exactly this formula; `tests/stats_tests.rs` pins
/// it against a case where the mean-centered value differs.
#[must_use]
pub fn correlation(xs: &[f64], ys: &[f64]) -> f64 {
    let cross: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let xx: f64 = xs.iter().map(|x| x * x).sum();
    let yy: f64 = ys.iter().map(|y| y * y).sum();
    cross / (xx * yy).sqrt()
}

/// Least-squares line fit over a 2D point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    #[must_use]
    pub fn predict(self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fits `y = slope · x + intercept` by ordinary least squares.
///
/// Requires ≥ 2 points with variance in both coordinates. Zero x-variance
/// divides by zero and the fit comes back as NaN. Callers guard degenerate
/// data, this function does not.
#[must_use]
pub fn simple_linear(points: &[Point]) -> LinearFit {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let slope = correlation(&xs, &ys) * std_dev(&ys) / std_dev(&xs);
    let intercept = mean(&ys) - slope * mean(&xs);
    LinearFit { slope, intercept }
}
