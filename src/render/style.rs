use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{LayoutError, LayoutResult};
use crate::render::color::{Color, ColorStop};
use crate::render::layer::Transform2;

/// Fill of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// Transparent interior; stroke only.
    None,
    Solid(Color),
    /// Gradient between `start` and `end` in layer coordinates.
    LinearGradient {
        start: Point,
        end: Point,
        stops: Vec<ColorStop>,
    },
}

impl Fill {
    pub fn validate(&self) -> LayoutResult<()> {
        match self {
            Fill::None => Ok(()),
            Fill::Solid(color) => color.validate(),
            Fill::LinearGradient { start, end, stops } => {
                if !start.is_finite() || !end.is_finite() {
                    return Err(LayoutError::InvalidData(
                        "gradient endpoints must be finite".to_owned(),
                    ));
                }
                if stops.len() < 2 {
                    return Err(LayoutError::InvalidData(
                        "gradient needs at least 2 stops".to_owned(),
                    ));
                }
                for stop in stops {
                    stop.color.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Stroke attributes for outlines and line work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> LayoutResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LayoutError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Combined fill/stroke/opacity style for one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

impl ShapeStyle {
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Fill::Solid(color),
            stroke: None,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn outline(stroke: Stroke) -> Self {
        Self {
            fill: Fill::None,
            stroke: Some(stroke),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Copy with the fill forced transparent, keeping stroke and opacity.
    #[must_use]
    pub fn without_fill(mut self) -> Self {
        self.fill = Fill::None;
        self
    }

    /// Copy with the stroke removed, keeping fill at the given opacity.
    #[must_use]
    pub fn fill_only(mut self, opacity: f64) -> Self {
        self.stroke = None;
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(LayoutError::InvalidData(
                "opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.fill.validate()?;
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK)
    }
}

/// Axis value mapping applied before geometry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueTransform {
    #[default]
    Linear,
    /// Natural-log spacing; all values must be > 0.
    Log,
}

impl ValueTransform {
    pub fn apply(self, value: f64) -> LayoutResult<f64> {
        if !value.is_finite() {
            return Err(LayoutError::InvalidData("value must be finite".to_owned()));
        }
        match self {
            ValueTransform::Linear => Ok(value),
            ValueTransform::Log => {
                if value <= 0.0 {
                    return Err(LayoutError::InvalidData(
                        "log axis transform requires values > 0".to_owned(),
                    ));
                }
                Ok(value.ln())
            }
        }
    }
}

/// Active styling and scale context a host hands to the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleContext {
    /// Fill style for bands, swatches, and legend glyphs.
    pub fill_style: ShapeStyle,
    /// Stroke for trend lines.
    pub line_stroke: Stroke,
    pub x_transform: ValueTransform,
    pub y_transform: ValueTransform,
    /// Output coordinate transform applied to finished smooth-plot layers.
    pub coordinate: Transform2,
}

impl StyleContext {
    /// Applies the per-axis value transforms to one data point.
    pub fn transform_point(&self, point: Point) -> LayoutResult<Point> {
        Ok(Point::new(
            self.x_transform.apply(point.x)?,
            self.y_transform.apply(point.y)?,
        ))
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            fill_style: ShapeStyle::solid(Color::rgb(0.2, 0.4, 0.8)),
            line_stroke: Stroke::new(Color::BLACK, 1.0),
            x_transform: ValueTransform::Linear,
            y_transform: ValueTransform::Linear,
            coordinate: Transform2::identity(),
        }
    }
}
