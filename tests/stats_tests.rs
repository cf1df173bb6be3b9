use approx::assert_relative_eq;
use chart_adorn::core::{Point, correlation, mean, simple_linear, std_dev};

#[test]
fn mean_and_std_dev_on_known_values() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(mean(&values), 5.0);
    // Population standard deviation of the classic example is exactly 2.
    assert_relative_eq!(std_dev(&values), 2.0);
}

#[test]
fn exact_line_through_origin_is_recovered() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    ];
    let fit = simple_linear(&points);
    assert_relative_eq!(fit.slope, 1.0, max_relative = 1e-12);
    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(fit.predict(5.0), 5.0, max_relative = 1e-12);
}

#[test]
fn predict_reproduces_inputs_on_origin_lines() {
    let slope = -3.25;
    let points: Vec<Point> = (1..=6)
        .map(|i| {
            let x = f64::from(i);
            Point::new(x, slope * x)
        })
        .collect();
    let fit = simple_linear(&points);
    assert_relative_eq!(fit.slope, slope, max_relative = 1e-12);
    for point in &points {
        assert_relative_eq!(fit.predict(point.x), point.y, max_relative = 1e-9);
    }
}

#[test]
fn correlation_is_the_uncentered_second_moment_ratio() {
    // xs = [0, 1], ys = [1, 2]: the raw ratio is 2/sqrt(5) ≈ 0.894, while
    // Pearson's mean-centered coefficient would be exactly 1. This pins
    // the uncentered formula so it is not "fixed" silently.
    let uncentered = correlation(&[0.0, 1.0], &[1.0, 2.0]);
    assert_relative_eq!(uncentered, 2.0 / 5.0_f64.sqrt(), max_relative = 1e-12);
    assert!((uncentered - 1.0).abs() > 0.05);
}

#[test]
fn nonzero_intercept_lines_are_not_recovered_exactly() {
    // Downstream consequence of the uncentered correlation: a line with a
    // nonzero intercept does not round-trip. Documented behaviour.
    let points = vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)];
    let fit = simple_linear(&points);
    assert!((fit.slope - 1.0).abs() > 0.05);
}

#[test]
fn zero_x_variance_propagates_nan() {
    let points = vec![Point::new(1.0, 0.0), Point::new(1.0, 5.0)];
    let fit = simple_linear(&points);
    assert!(fit.slope.is_nan());
    assert!(fit.predict(2.0).is_nan());
}
