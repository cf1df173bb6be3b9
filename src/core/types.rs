use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// 2D point in whatever coordinate space the caller is working in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned reference box adornments attach to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> LayoutResult<Self> {
        if !min_x.is_finite() || !min_y.is_finite() || !max_x.is_finite() || !max_y.is_finite() {
            return Err(LayoutError::InvalidData(
                "bounding box corners must be finite".to_owned(),
            ));
        }
        if min_x >= max_x || min_y >= max_y {
            return Err(LayoutError::InvalidData(
                "bounding box must have positive extent on both axes".to_owned(),
            ));
        }
        Ok(Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// Ordered data-value interval a colour bar spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    lower: f64,
    upper: f64,
}

impl ValueBounds {
    pub fn new(lower: f64, upper: f64) -> LayoutResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(LayoutError::InvalidData(
                "value bounds must be finite with lower < upper".to_owned(),
            ));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}
