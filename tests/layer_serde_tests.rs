use chart_adorn::core::{Placement, Point, ValueBounds, project_trend_band};
use chart_adorn::render::{
    Color, ColorMap, Layer, PolyPrimitive, RectPrimitive, ShapeStyle, Stroke, TextHAlign,
    TextPrimitive, TextVAlign,
};

#[test]
fn trend_geometry_round_trips_through_json() {
    let points = vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(2.0, 4.0),
    ];
    let geometry = project_trend_band(&points);
    let json = serde_json::to_string(&geometry).expect("serialize");
    let restored = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(geometry, restored);
}

#[test]
fn placement_round_trips_through_json() {
    let placement = Placement::new(Point::new(0.25, -1.0), Point::new(0.0, -1.0));
    let json = serde_json::to_string(&placement).expect("serialize");
    let restored: Placement = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(placement, restored);
}

#[test]
fn layers_round_trip_through_json() {
    let layer = Layer::empty()
        .with_rect(RectPrimitive::new(
            Point::new(0.0, 0.0),
            10.0,
            5.0,
            ShapeStyle::solid(Color::rgb(0.1, 0.2, 0.3)),
        ))
        .with_poly(PolyPrimitive::segment(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            ShapeStyle::outline(Stroke::new(Color::BLACK, 1.0)),
        ))
        .with_text(TextPrimitive::new(
            "0.5",
            Point::new(5.0, -2.0),
            11.0,
            Color::BLACK,
            TextHAlign::Center,
            TextVAlign::Top,
        ));
    let json = serde_json::to_string(&layer).expect("serialize");
    let restored: Layer = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(layer, restored);
}

#[test]
fn color_map_round_trips_through_json() {
    let map = ColorMap::evenly_spaced(&[
        Color::rgb(0.0, 0.0, 0.5),
        Color::rgb(0.0, 0.8, 0.8),
        Color::rgb(1.0, 1.0, 0.2),
    ])
    .expect("map");
    let json = serde_json::to_string(&map).expect("serialize");
    let restored: ColorMap = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(map, restored);
}

#[test]
fn validate_rejects_non_finite_geometry_before_a_backend_sees_it() {
    let healthy = Layer::empty().with_rect(RectPrimitive::new(
        Point::new(0.0, 0.0),
        10.0,
        5.0,
        ShapeStyle::solid(Color::BLACK),
    ));
    assert!(healthy.validate().is_ok());

    let poisoned = Layer::empty().with_poly(PolyPrimitive::segment(
        Point::new(0.0, f64::NAN),
        Point::new(1.0, 0.0),
        ShapeStyle::default(),
    ));
    assert!(poisoned.validate().is_err());
}

#[test]
fn value_bounds_reject_degenerate_intervals() {
    assert!(ValueBounds::new(1.0, 1.0).is_err());
    assert!(ValueBounds::new(2.0, 1.0).is_err());
    assert!(ValueBounds::new(f64::NAN, 1.0).is_err());
    assert!(ValueBounds::new(0.0, 1.0).is_ok());
}
