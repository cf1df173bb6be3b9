use chart_adorn::core::{Orientation, Placement, Point, orientation, with_orientation};
use proptest::prelude::*;

fn nonzero_anchor() -> impl Strategy<Value = (f64, f64)> {
    (-10.0f64..10.0, -10.0f64..10.0).prop_filter("anchor must be nonzero", |(x, y)| {
        *x != 0.0 || *y != 0.0
    })
}

proptest! {
    #[test]
    fn resolver_is_total_for_nonzero_anchors(
        (x, y) in nonzero_anchor(),
        dx in -5.0f64..5.0,
        dy in -5.0f64..5.0
    ) {
        let placement = Placement::new(Point::new(x, y), Point::new(dx, dy));
        prop_assert!(orientation(&placement).is_ok());
    }

    #[test]
    fn set_with_current_orientation_is_idempotent(
        (x, y) in nonzero_anchor(),
        dx in -5.0f64..5.0,
        dy in -5.0f64..5.0
    ) {
        let placement = Placement::new(Point::new(x, y), Point::new(dx, dy));
        let current = orientation(&placement).expect("total for nonzero anchors");
        prop_assert_eq!(
            with_orientation(placement, current).expect("set"),
            placement
        );
    }

    #[test]
    fn set_reaches_the_requested_orientation_off_the_diagonals(
        (x, y) in nonzero_anchor().prop_filter(
            "diagonal anchors tie-break on the gap and are covered separately",
            |(x, y)| x.abs() != y.abs()
        ),
        dx in -5.0f64..5.0,
        dy in -5.0f64..5.0,
        horizontal in any::<bool>()
    ) {
        let target = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let placement = Placement::new(Point::new(x, y), Point::new(dx, dy));
        let edited = with_orientation(placement, target).expect("set");
        prop_assert_eq!(orientation(&edited).expect("resolve"), target);
    }

    #[test]
    fn set_reaches_the_requested_orientation_on_strict_diagonals(
        magnitude in 0.1f64..10.0,
        quadrant in 0usize..4,
        (dx, dy) in (-5.0f64..5.0, -5.0f64..5.0).prop_filter(
            "gap comparisons must be strict on every diagonal",
            |(dx, dy)| dx.abs() != dy.abs()
        ),
        horizontal in any::<bool>()
    ) {
        let anchor = match quadrant {
            0 => Point::new(magnitude, magnitude),
            1 => Point::new(magnitude, -magnitude),
            2 => Point::new(-magnitude, -magnitude),
            _ => Point::new(-magnitude, magnitude),
        };
        let target = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let placement = Placement::new(anchor, Point::new(dx, dy));
        let edited = with_orientation(placement, target).expect("set");
        prop_assert_eq!(orientation(&edited).expect("resolve"), target);
    }

    #[test]
    fn side_bit_is_invariant_under_orientation_edits(
        (x, y) in nonzero_anchor(),
        dx in -5.0f64..5.0,
        dy in -5.0f64..5.0,
        horizontal in any::<bool>()
    ) {
        let target = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let placement = Placement::new(Point::new(x, y), Point::new(dx, dy));
        let edited = with_orientation(placement, target).expect("set");
        prop_assert_eq!(edited.side(), placement.side());
    }
}
