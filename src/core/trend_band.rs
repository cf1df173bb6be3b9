use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::stats::simple_linear;
use crate::core::types::Point;

/// Half-height of the band as a fraction of the spread above the mean.
const BAND_SPREAD_RATIO: f64 = 0.3;

/// Deterministic geometry for a fitted trend band.
///
/// `band_polygon` is explicitly closed: the first vertex is repeated at the
/// end so consumers can render it without implicit closure rules.
/// `trend_line` is the open fitted segment from the leftmost to the
/// rightmost x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBandGeometry {
    pub band_polygon: Vec<Point>,
    pub trend_line: Vec<Point>,
}

impl TrendBandGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            band_polygon: Vec::new(),
            trend_line: Vec::new(),
        }
    }
}

/// Projects a point set into trend-band geometry.
///
/// Fits a least-squares line, evaluates it at the x extent, and bounds it
/// with a band of half-height `0.3 · (y_max − y_mean)`. A zero half-height
/// degenerates to a zero-height strip, which is permitted. Fewer than 2
/// points yield empty geometry; zero x-variance propagates NaN coordinates
/// per the regression contract.
#[must_use]
pub fn project_trend_band(points: &[Point]) -> TrendBandGeometry {
    if points.len() < 2 {
        warn!(count = points.len(), "trend band needs at least 2 points");
        return TrendBandGeometry::empty();
    }

    let x_min = points
        .iter()
        .map(|p| OrderedFloat(p.x))
        .min()
        .map(|v| v.0)
        .unwrap_or(f64::NAN);
    let x_max = points
        .iter()
        .map(|p| OrderedFloat(p.x))
        .max()
        .map(|v| v.0)
        .unwrap_or(f64::NAN);
    let y_max = points
        .iter()
        .map(|p| OrderedFloat(p.y))
        .max()
        .map(|v| v.0)
        .unwrap_or(f64::NAN);
    let y_mean = points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64;

    let fit = simple_linear(points);
    let y_start = fit.predict(x_min);
    let y_end = fit.predict(x_max);
    let half_height = BAND_SPREAD_RATIO * (y_max - y_mean);

    let band_polygon = vec![
        Point::new(x_min, y_start - half_height),
        Point::new(x_max, y_end - half_height),
        Point::new(x_max, y_end + half_height),
        Point::new(x_min, y_start + half_height),
        Point::new(x_min, y_start - half_height),
    ];
    let trend_line = vec![Point::new(x_min, y_start), Point::new(x_max, y_end)];

    TrendBandGeometry {
        band_polygon,
        trend_line,
    }
}

#[cfg(test)]
mod tests {
    use super::project_trend_band;
    use crate::core::types::Point;

    #[test]
    fn fewer_than_two_points_yield_empty_geometry() {
        assert!(project_trend_band(&[]).band_polygon.is_empty());
        let single = [Point::new(1.0, 1.0)];
        assert!(project_trend_band(&single).trend_line.is_empty());
    }

    #[test]
    fn flat_data_degenerates_to_zero_height_strip() {
        // All y equal: zero y std-dev forces slope 0, and y_max == y_mean
        // forces h == 0, so the band collapses onto the fitted line.
        let points = vec![
            Point::new(0.0, 3.0),
            Point::new(1.0, 3.0),
            Point::new(2.0, 3.0),
        ];
        let geometry = project_trend_band(&points);
        for vertex in &geometry.band_polygon {
            assert!((vertex.y - 3.0).abs() <= 1e-12);
        }
    }
}
