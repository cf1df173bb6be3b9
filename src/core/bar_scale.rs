use serde::{Deserialize, Serialize};

use crate::core::types::ValueBounds;
use crate::error::{LayoutError, LayoutResult};

/// Maps data values onto bar-local coordinates.
///
/// The bar is centred on 0 and spans `−length/2 ..= length/2`, so
/// `to_bar(lower) == −length/2` and `to_bar(upper) == length/2` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarScale {
    bounds: ValueBounds,
    length: f64,
}

impl BarScale {
    pub fn new(bounds: ValueBounds, length: f64) -> LayoutResult<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(LayoutError::InvalidData(
                "bar length must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { bounds, length })
    }

    #[must_use]
    pub fn bounds(self) -> ValueBounds {
        self.bounds
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn to_bar(self, value: f64) -> f64 {
        (value - self.bounds.midpoint()) / self.bounds.span() * self.length
    }

    /// Drops candidate positions outside the value bounds, preserving order.
    #[must_use]
    pub fn filter_in_range(self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .copied()
            .filter(|v| self.bounds.contains(*v))
            .collect()
    }
}
