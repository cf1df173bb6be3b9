use tracing::debug;

use crate::api::ticks::{GridLineSpec, TickAlign, TickLabelSpec, TickSpec};
use crate::core::bar_scale::BarScale;
use crate::core::placement::{Orientation, Placement, orientation};
use crate::core::types::{BoundingBox, Point, ValueBounds};
use crate::error::{LayoutError, LayoutResult};
use crate::render::color::{Color, ColorMap};
use crate::render::layer::{
    Layer, PolyPrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
use crate::render::style::{Fill, ShapeStyle, Stroke};

/// Renders a colour map into a unit swatch spanning `[0, 1] × [0, 1]`.
pub type DrawFn = fn(&ColorMap) -> Layer;
/// Maps the bounding-box side length to the final bar length.
pub type LengthFn = fn(f64) -> f64;

fn full_length(side: f64) -> f64 {
    side
}

/// Declarative colour-bar configuration.
///
/// Defaults: not visible, width 20, gap 20, gradient swatch, full-length
/// bar. Width and gap are validated non-negative on update; the engine
/// treats the spec as immutable once layout starts.
#[derive(Debug, Clone)]
pub struct ColorBarSpec {
    pub placement: Placement,
    pub visible: bool,
    pub major_ticks: TickSpec,
    pub grid_lines: GridLineSpec,
    pub tick_labels: TickLabelSpec,
    pub draw_fn: DrawFn,
    pub length_fn: LengthFn,
    pub style: ShapeStyle,
    width: f64,
    gap: f64,
}

impl Default for ColorBarSpec {
    fn default() -> Self {
        Self {
            placement: Placement::east(),
            visible: false,
            major_ticks: TickSpec::default(),
            grid_lines: GridLineSpec::default(),
            tick_labels: TickLabelSpec::default(),
            draw_fn: gradient_color_bar,
            length_fn: full_length,
            style: ShapeStyle {
                fill: Fill::Solid(Color::WHITE),
                stroke: Some(Stroke::new(Color::BLACK, 1.0)),
                opacity: 1.0,
            },
            width: 20.0,
            gap: 20.0,
        }
    }
}

impl ColorBarSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_width(mut self, width: f64) -> LayoutResult<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(LayoutError::InvalidData(
                "colour bar width must be finite and >= 0".to_owned(),
            ));
        }
        self.width = width;
        Ok(self)
    }

    pub fn with_gap(mut self, gap: f64) -> LayoutResult<Self> {
        if !gap.is_finite() || gap < 0.0 {
            return Err(LayoutError::InvalidData(
                "colour bar gap must be finite and >= 0".to_owned(),
            ));
        }
        self.gap = gap;
        Ok(self)
    }

    #[must_use]
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_draw_fn(mut self, draw_fn: DrawFn) -> Self {
        self.draw_fn = draw_fn;
        self
    }

    #[must_use]
    pub fn with_length_fn(mut self, length_fn: LengthFn) -> Self {
        self.length_fn = length_fn;
        self
    }

    #[must_use]
    pub fn with_major_ticks(mut self, major_ticks: TickSpec) -> Self {
        self.major_ticks = major_ticks;
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, grid_lines: GridLineSpec) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    #[must_use]
    pub fn with_tick_labels(mut self, tick_labels: TickLabelSpec) -> Self {
        self.tick_labels = tick_labels;
        self
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }
}

/// Unit gradient swatch over `[0, 1] × [0, 1]`, gradient along +x.
#[must_use]
pub fn gradient_color_bar(map: &ColorMap) -> Layer {
    Layer::empty().with_rect(RectPrimitive::new(
        Point::new(0.0, 0.0),
        1.0,
        1.0,
        ShapeStyle {
            fill: Fill::LinearGradient {
                start: Point::new(0.0, 0.5),
                end: Point::new(1.0, 0.5),
                stops: map.stops().to_vec(),
            },
            stroke: None,
            opacity: 1.0,
        },
    ))
}

/// Unit swatch built from `segments` overlapping solid rectangles.
///
/// The leading rectangle spans `[0, 1/n]`; every later one is widened
/// backwards by half a band so adjacent bands overlap (no hairline seams
/// between solid fills) and the union spans exactly `[0, 1]`.
#[must_use]
pub fn path_color_bar(segments: usize, map: &ColorMap) -> Layer {
    let mut layer = Layer::empty();
    if segments == 0 {
        return layer;
    }
    let band = 1.0 / segments as f64;
    for index in 0..segments {
        let (min_x, width) = if index == 0 {
            (0.0, band)
        } else {
            (index as f64 * band - band / 2.0, band * 1.5)
        };
        let color = map.sample((index as f64 + 0.5) * band);
        layer = layer.with_rect(RectPrimitive::new(
            Point::new(min_x, 0.0),
            width,
            1.0,
            ShapeStyle::solid(color),
        ));
    }
    layer
}

/// Lays out the bar body, ticks, grid lines, and labels at an explicit
/// length, centred on the origin and mirrored for the placement side and
/// resolved orientation.
pub fn render_color_bar(
    spec: &ColorBarSpec,
    map: &ColorMap,
    bounds: ValueBounds,
    length: f64,
) -> LayoutResult<Layer> {
    let orient = orientation(&spec.placement)?;
    let scale = BarScale::new(bounds, length)?;
    let width = spec.width;
    debug!(length, width, ?orient, "layout colour bar");

    // Bar body: transparent-fill outline over the colour swatch, both
    // centred on the origin with the bar axis along x.
    let outline = RectPrimitive::new(
        Point::new(-length / 2.0, -width / 2.0),
        length,
        width,
        spec.style.clone().without_fill(),
    );
    let swatch = (spec.draw_fn)(map)
        .scale(length, width)
        .translate(-length / 2.0, -width / 2.0);
    let mut layer = swatch.with_rect(outline);

    let tick_positions = (spec.major_ticks.tick_fn)(bounds);
    let ticks_in_range = scale.filter_in_range(&tick_positions);

    if !spec.major_ticks.hidden {
        let style = ShapeStyle::outline(spec.major_ticks.stroke);
        let (inside, outside) = match spec.major_ticks.align {
            TickAlign::Centred => (spec.major_ticks.length / 2.0, spec.major_ticks.length / 2.0),
            TickAlign::Asymmetric { inside, outside } => (inside, outside),
        };
        for &value in &ticks_in_range {
            let x = scale.to_bar(value);
            layer = layer.with_poly(PolyPrimitive::segment(
                Point::new(x, -width / 2.0 - outside),
                Point::new(x, -width / 2.0 + inside),
                style.clone(),
            ));
        }
    }

    if !spec.grid_lines.hidden {
        let candidates = (spec.grid_lines.grid_fn)(&ticks_in_range, bounds);
        let style = ShapeStyle::outline(spec.grid_lines.stroke);
        for &value in &scale.filter_in_range(&candidates) {
            let x = scale.to_bar(value);
            layer = layer.with_poly(PolyPrimitive::segment(
                Point::new(x, -width / 2.0),
                Point::new(x, width / 2.0),
                style.clone(),
            ));
        }
    }

    let side = spec.placement.side();
    if !spec.tick_labels.hidden {
        let (h_align, v_align) = label_alignment(side, orient);
        for (value, text) in (spec.tick_labels.label_fn)(&ticks_in_range, bounds) {
            if !bounds.contains(value) {
                continue;
            }
            layer = layer.with_text(TextPrimitive::new(
                text,
                Point::new(scale.to_bar(value), -width / 2.0 - spec.tick_labels.gap),
                spec.tick_labels.font_size,
                spec.tick_labels.color,
                h_align,
                v_align,
            ));
        }
    }

    // The canonical frame has ticks and labels on the south edge. Two
    // independent mirrors take it to the other three attachments: a y
    // reflection for north/west sides, an anti-diagonal reflection for
    // vertical orientation.
    if !side {
        layer = layer.reflect_y();
    }
    if orient == Orientation::Vertical {
        layer = layer.reflect_anti_diagonal();
    }
    Ok(layer)
}

/// Text alignment for the four attachment cases, chosen so labels face
/// outward from the bar after the composition mirrors are applied.
fn label_alignment(side: bool, orient: Orientation) -> (TextHAlign, TextVAlign) {
    match (orient, side) {
        // South: labels below the bar.
        (Orientation::Horizontal, true) => (TextHAlign::Center, TextVAlign::Top),
        // North: labels above.
        (Orientation::Horizontal, false) => (TextHAlign::Center, TextVAlign::Bottom),
        // East: labels to the right.
        (Orientation::Vertical, true) => (TextHAlign::Left, TextVAlign::Middle),
        // West: labels to the left.
        (Orientation::Vertical, false) => (TextHAlign::Right, TextVAlign::Middle),
    }
}

/// Lays out the bar against a bounding box, resolving the bar length from
/// the box side along the orientation axis via the spec's length function.
pub fn layout_color_bar(
    spec: &ColorBarSpec,
    map: &ColorMap,
    bounds: ValueBounds,
    bounding_box: BoundingBox,
) -> LayoutResult<Layer> {
    if !spec.visible {
        return Ok(Layer::empty());
    }
    let side_length = match orientation(&spec.placement)? {
        Orientation::Horizontal => bounding_box.width(),
        Orientation::Vertical => bounding_box.height(),
    };
    render_color_bar(spec, map, bounds, (spec.length_fn)(side_length))
}

/// Lays out the bar and positions it adjacent to the box at the placement
/// anchor, pushed out along the gap direction by the spec's gap.
pub fn add_color_bar(
    bounding_box: BoundingBox,
    spec: &ColorBarSpec,
    map: &ColorMap,
    bounds: ValueBounds,
) -> LayoutResult<Layer> {
    let layer = layout_color_bar(spec, map, bounds, bounding_box)?;
    if layer.is_empty() {
        return Ok(layer);
    }

    let anchor = spec.placement.anchor();
    let center = bounding_box.center();
    let boundary = Point::new(
        center.x + anchor.x * bounding_box.width() / 2.0,
        center.y + anchor.y * bounding_box.height() / 2.0,
    );
    let direction = spec.placement.gap_direction();
    let norm = (direction.x * direction.x + direction.y * direction.y).sqrt();
    let reach = spec.gap + spec.width / 2.0;
    let (dx, dy) = if norm > 0.0 {
        (direction.x / norm * reach, direction.y / norm * reach)
    } else {
        (0.0, 0.0)
    };
    Ok(layer.translate(boundary.x + dx, boundary.y + dy))
}
