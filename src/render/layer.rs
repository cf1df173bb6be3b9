use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Point;
use crate::error::{LayoutError, LayoutResult};
use crate::render::color::Color;
use crate::render::style::{Fill, ShapeStyle};

/// Affine transform over layer coordinates.
///
/// Only translations, scalings, and axis / anti-diagonal reflections are
/// constructed by this crate, so axis-aligned rectangles stay axis-aligned
/// under every transform a layer can receive. Arbitrary rotations are not
/// part of the layer model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2 {
    pub matrix: [[f64; 2]; 2],
    pub translation: [f64; 2],
}

impl Transform2 {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [[1.0, 0.0], [0.0, 1.0]],
            translation: [0.0, 0.0],
        }
    }

    #[must_use]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self {
            matrix: [[1.0, 0.0], [0.0, 1.0]],
            translation: [dx, dy],
        }
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self {
            matrix: [[sx, 0.0], [0.0, sy]],
            translation: [0.0, 0.0],
        }
    }

    /// Reflection across the x axis: `(x, y) ↦ (x, −y)`.
    #[must_use]
    pub const fn reflect_y() -> Self {
        Self {
            matrix: [[1.0, 0.0], [0.0, -1.0]],
            translation: [0.0, 0.0],
        }
    }

    /// Reflection across the anti-diagonal: `(x, y) ↦ (−y, −x)`.
    #[must_use]
    pub const fn reflect_anti_diagonal() -> Self {
        Self {
            matrix: [[0.0, -1.0], [-1.0, 0.0]],
            translation: [0.0, 0.0],
        }
    }

    /// Composition applying `self` first, then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        let a = next.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                ],
            ],
            translation: [
                a[0][0] * self.translation[0]
                    + a[0][1] * self.translation[1]
                    + next.translation[0],
                a[1][0] * self.translation[0]
                    + a[1][1] * self.translation[1]
                    + next.translation[1],
            ],
        }
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.matrix[0][0] * point.x + self.matrix[0][1] * point.y + self.translation[0],
            self.matrix[1][0] * point.x + self.matrix[1][1] * point.y + self.translation[1],
        )
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Horizontal text alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Open polyline or closed polygon with one style.
///
/// Most instances are 2-point tick segments or 5-point band outlines, so
/// vertices live in a small inline buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyPrimitive {
    pub vertices: SmallVec<[Point; 5]>,
    pub closed: bool,
    pub style: ShapeStyle,
}

impl PolyPrimitive {
    #[must_use]
    pub fn segment(from: Point, to: Point, style: ShapeStyle) -> Self {
        Self {
            vertices: SmallVec::from_slice(&[from, to]),
            closed: false,
            style,
        }
    }

    #[must_use]
    pub fn polygon(vertices: &[Point], style: ShapeStyle) -> Self {
        Self {
            vertices: SmallVec::from_slice(vertices),
            closed: true,
            style,
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.vertices.len() < 2 {
            return Err(LayoutError::InvalidData(
                "poly primitive needs at least 2 vertices".to_owned(),
            ));
        }
        for vertex in &self.vertices {
            if !vertex.is_finite() {
                return Err(LayoutError::InvalidData(
                    "poly vertices must be finite".to_owned(),
                ));
            }
        }
        self.style.validate()
    }
}

/// Axis-aligned rectangle with one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub min: Point,
    pub width: f64,
    pub height: f64,
    pub style: ShapeStyle,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(min: Point, width: f64, height: f64, style: ShapeStyle) -> Self {
        Self {
            min,
            width,
            height,
            style,
        }
    }

    /// Unit square centred on the origin.
    #[must_use]
    pub fn unit_centered(style: ShapeStyle) -> Self {
        Self::new(Point::new(-0.5, -0.5), 1.0, 1.0, style)
    }

    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(self.min.x + self.width, self.min.y + self.height)
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if !self.min.is_finite() || !self.width.is_finite() || !self.height.is_finite() {
            return Err(LayoutError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::InvalidData(
                "rect extent must be > 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Anchored label.
///
/// Alignment is a rendering attribute, not geometry: transforms move the
/// anchor but never mirror the glyphs or the alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub font_size: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: Point,
        font_size: f64,
        color: Color,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font_size,
            color,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.text.is_empty() {
            return Err(LayoutError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(LayoutError::InvalidData(
                "text position must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(LayoutError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Backend-agnostic renderable layer.
///
/// Draw order is by primitive class: rects, then polys, then texts; within
/// a class, insertion order. Overlaying appends, so later layers draw above
/// earlier ones per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Layer {
    pub rects: Vec<RectPrimitive>,
    pub polys: Vec<PolyPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl Layer {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.polys.is_empty() && self.texts.is_empty()
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_poly(mut self, poly: PolyPrimitive) -> Self {
        self.polys.push(poly);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Composes `other` on top of this layer.
    #[must_use]
    pub fn overlay(mut self, other: Self) -> Self {
        self.rects.extend(other.rects);
        self.polys.extend(other.polys);
        self.texts.extend(other.texts);
        self
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.transform(Transform2::translate(dx, dy))
    }

    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.transform(Transform2::scale(sx, sy))
    }

    #[must_use]
    pub fn reflect_y(self) -> Self {
        self.transform(Transform2::reflect_y())
    }

    #[must_use]
    pub fn reflect_anti_diagonal(self) -> Self {
        self.transform(Transform2::reflect_anti_diagonal())
    }

    /// Applies an affine transform to every primitive.
    ///
    /// Gradient endpoints travel with the geometry; text keeps its font
    /// size and alignment, only the anchor moves.
    #[must_use]
    pub fn transform(mut self, transform: Transform2) -> Self {
        for rect in &mut self.rects {
            let a = transform.apply(rect.min);
            let b = transform.apply(rect.max());
            rect.min = Point::new(a.x.min(b.x), a.y.min(b.y));
            rect.width = (b.x - a.x).abs();
            rect.height = (b.y - a.y).abs();
            rect.style = transform_style(&rect.style, transform);
        }
        for poly in &mut self.polys {
            for vertex in &mut poly.vertices {
                *vertex = transform.apply(*vertex);
            }
            poly.style = transform_style(&poly.style, transform);
        }
        for text in &mut self.texts {
            text.position = transform.apply(text.position);
        }
        self
    }

    /// Min/max corner pair over all primitive geometry, if any.
    #[must_use]
    pub fn extent(&self) -> Option<(Point, Point)> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut grow = |p: Point| {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        };
        for rect in &self.rects {
            grow(rect.min);
            grow(rect.max());
        }
        for poly in &self.polys {
            for vertex in &poly.vertices {
                grow(*vertex);
            }
        }
        for text in &self.texts {
            grow(text.position);
        }
        if min.x > max.x {
            return None;
        }
        Some((min, max))
    }

    /// Rejects non-finite or out-of-contract geometry before a backend
    /// consumes the layer.
    pub fn validate(&self) -> LayoutResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for poly in &self.polys {
            poly.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

fn transform_style(style: &ShapeStyle, transform: Transform2) -> ShapeStyle {
    let mut mapped = style.clone();
    if let Fill::LinearGradient { start, end, .. } = &mut mapped.fill {
        *start = transform.apply(*start);
        *end = transform.apply(*end);
    }
    mapped
}
