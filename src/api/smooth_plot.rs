use smallvec::SmallVec;
use tracing::trace;

use crate::core::trend_band::{TrendBandGeometry, project_trend_band};
use crate::core::types::Point;
use crate::error::LayoutResult;
use crate::render::layer::{Layer, PolyPrimitive, RectPrimitive};
use crate::render::style::{ShapeStyle, StyleContext};

/// Band fill opacity relative to the context's fill style.
const BAND_OPACITY: f64 = 0.7;
const LEGEND_GLYPH_SIZE: f64 = 10.0;

/// Geometry builder taking the extracted positions to (band, line) shapes.
pub type GeometryFn = fn(&[Point]) -> TrendBandGeometry;

/// Smoothed trend overlay over an arbitrary data source.
///
/// Generic over the source type and an accessor producing 2D positions
/// from it, so heterogeneous inputs plug in without an adapter layer.
/// Rendering is a pure function of the plot and a style context.
#[derive(Debug, Clone)]
pub struct SmoothPlot<S, F> {
    source: S,
    accessor: F,
    pub geometry_fn: GeometryFn,
    pub draw_line: bool,
}

impl SmoothPlot<Vec<Point>, fn(&Vec<Point>) -> Vec<Point>> {
    /// Smooth plot over a plain point list.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_accessor(Vec::clone, points)
    }
}

impl<S, F> SmoothPlot<S, F>
where
    F: Fn(&S) -> Vec<Point>,
{
    /// Smooth plot over `source`, with `accessor` extracting positions.
    #[must_use]
    pub fn with_accessor(accessor: F, source: S) -> Self {
        Self {
            source,
            accessor,
            geometry_fn: project_trend_band,
            draw_line: true,
        }
    }

    #[must_use]
    pub fn with_geometry_fn(mut self, geometry_fn: GeometryFn) -> Self {
        self.geometry_fn = geometry_fn;
        self
    }

    #[must_use]
    pub fn with_draw_line(mut self, draw_line: bool) -> Self {
        self.draw_line = draw_line;
        self
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    fn positions(&self, context: &StyleContext) -> LayoutResult<Vec<Point>> {
        (self.accessor)(&self.source)
            .into_iter()
            .map(|point| context.transform_point(point))
            .collect()
    }
}

/// Renders the trend band and optional trend line as one layer.
///
/// Positions go through the context's axis transforms, the geometry
/// function builds the shapes, the band fills at opacity 0.7 with no
/// stroke, and the finished composition goes through the context's
/// coordinate transform. Fewer than 2 extracted positions produce an
/// empty layer (documented limitation, not an error).
pub fn render_smooth_plot<S, F>(
    plot: &SmoothPlot<S, F>,
    context: &StyleContext,
) -> LayoutResult<Layer>
where
    F: Fn(&S) -> Vec<Point>,
{
    let positions = plot.positions(context)?;
    trace!(count = positions.len(), "smooth plot positions extracted");
    let geometry = (plot.geometry_fn)(&positions);

    let mut layer = Layer::empty();
    if geometry.band_polygon.len() >= 3 {
        layer = layer.with_poly(PolyPrimitive::polygon(
            &geometry.band_polygon,
            context.fill_style.clone().fill_only(BAND_OPACITY),
        ));
    }
    if plot.draw_line && geometry.trend_line.len() >= 2 {
        layer = layer.with_poly(PolyPrimitive {
            vertices: SmallVec::from_slice(&geometry.trend_line),
            closed: false,
            style: ShapeStyle::outline(context.line_stroke),
        });
    }
    Ok(layer.transform(context.coordinate))
}

/// Small square legend swatch in the context's fill style.
#[must_use]
pub fn smooth_legend_glyph(context: &StyleContext) -> Layer {
    Layer::empty().with_rect(RectPrimitive::new(
        Point::new(-LEGEND_GLYPH_SIZE / 2.0, -LEGEND_GLYPH_SIZE / 2.0),
        LEGEND_GLYPH_SIZE,
        LEGEND_GLYPH_SIZE,
        context.fill_style.clone(),
    ))
}
