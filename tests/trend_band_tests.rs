use chart_adorn::core::{Point, project_trend_band};

#[test]
fn band_vertices_follow_the_fitted_line() {
    // y = x exactly over x in 0..=4: y_max = 4, y_mean = 2, so h = 0.6.
    let points: Vec<Point> = (0..=4).map(|i| Point::new(f64::from(i), f64::from(i))).collect();
    let geometry = project_trend_band(&points);

    assert_eq!(geometry.trend_line.len(), 2);
    assert!((geometry.trend_line[0].x - 0.0).abs() <= 1e-9);
    assert!((geometry.trend_line[0].y - 0.0).abs() <= 1e-9);
    assert!((geometry.trend_line[1].x - 4.0).abs() <= 1e-9);
    assert!((geometry.trend_line[1].y - 4.0).abs() <= 1e-9);

    // Closed polygon: lower edge, upper edge, explicit closing vertex.
    assert_eq!(geometry.band_polygon.len(), 5);
    assert!((geometry.band_polygon[0].y - (0.0 - 0.6)).abs() <= 1e-9);
    assert!((geometry.band_polygon[1].y - (4.0 - 0.6)).abs() <= 1e-9);
    assert!((geometry.band_polygon[2].y - (4.0 + 0.6)).abs() <= 1e-9);
    assert!((geometry.band_polygon[3].y - (0.0 + 0.6)).abs() <= 1e-9);
    assert_eq!(geometry.band_polygon[4], geometry.band_polygon[0]);
}

#[test]
fn band_always_encloses_the_trend_line() {
    let points = vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 5.0),
    ];
    let geometry = project_trend_band(&points);
    let (start, end) = (geometry.trend_line[0], geometry.trend_line[1]);

    assert!(geometry.band_polygon[0].y <= start.y);
    assert!(geometry.band_polygon[3].y >= start.y);
    assert!(geometry.band_polygon[1].y <= end.y);
    assert!(geometry.band_polygon[2].y >= end.y);
}

#[test]
fn band_spans_the_x_extent_regardless_of_input_order() {
    let points = vec![
        Point::new(3.0, 1.0),
        Point::new(-1.0, 0.5),
        Point::new(2.0, 2.0),
    ];
    let geometry = project_trend_band(&points);
    assert_eq!(geometry.band_polygon[0].x, -1.0);
    assert_eq!(geometry.band_polygon[1].x, 3.0);
    assert_eq!(geometry.trend_line[0].x, -1.0);
    assert_eq!(geometry.trend_line[1].x, 3.0);
}

#[test]
fn degenerate_inputs_yield_empty_geometry() {
    assert!(project_trend_band(&[]).band_polygon.is_empty());
    assert!(
        project_trend_band(&[Point::new(0.0, 0.0)])
            .trend_line
            .is_empty()
    );
}

#[test]
fn zero_variance_x_propagates_nan_coordinates() {
    // Vertically stacked points: the fit divides by zero std dev. The
    // caller is responsible for guarding this; the geometry must carry
    // the NaN through rather than panicking.
    let points = vec![Point::new(1.0, 0.0), Point::new(1.0, 2.0)];
    let geometry = project_trend_band(&points);
    assert_eq!(geometry.band_polygon.len(), 5);
    assert!(geometry.trend_line[0].y.is_nan());
}
