use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{LayoutError, LayoutResult};

/// Where an adornment sits relative to a reference box.
///
/// The anchor identifies a point on the box edge in normalized `[-1, 1]`
/// coordinates; the gap direction is the vector along which the adornment is
/// pushed away from the box. Named constructors cover the cardinal and
/// diagonal placements; `Placement::at` builds explicit-coordinate ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    anchor: Point,
    gap_direction: Point,
}

impl Placement {
    #[must_use]
    pub const fn new(anchor: Point, gap_direction: Point) -> Self {
        Self {
            anchor,
            gap_direction,
        }
    }

    /// Explicit-coordinate placement; the gap direction follows the anchor.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), Point::new(x, y))
    }

    #[must_use]
    pub const fn north() -> Self {
        Self::at(0.0, 1.0)
    }

    #[must_use]
    pub const fn south() -> Self {
        Self::at(0.0, -1.0)
    }

    #[must_use]
    pub const fn east() -> Self {
        Self::at(1.0, 0.0)
    }

    #[must_use]
    pub const fn west() -> Self {
        Self::at(-1.0, 0.0)
    }

    #[must_use]
    pub const fn north_east() -> Self {
        Self::at(1.0, 1.0)
    }

    #[must_use]
    pub const fn south_east() -> Self {
        Self::at(1.0, -1.0)
    }

    #[must_use]
    pub const fn south_west() -> Self {
        Self::at(-1.0, -1.0)
    }

    #[must_use]
    pub const fn north_west() -> Self {
        Self::at(-1.0, 1.0)
    }

    #[must_use]
    pub fn anchor(self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn gap_direction(self) -> Point {
        self.gap_direction
    }

    /// Which side of the axis diagonal the anchor sits on.
    ///
    /// True for east/south attachments, false for north/west. Invariant
    /// under the orientation flip `(x, y) ↦ (−y, −x)`, so label alignment
    /// keyed on this bit stays stable when orientation is edited.
    #[must_use]
    pub fn side(self) -> bool {
        self.anchor.x > self.anchor.y
    }
}

/// Layout axis of a colour bar, derived from its placement and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Resolves the layout orientation of a placement.
///
/// The anchor plane splits into four open half-plane sectors (north, south,
/// east, west) and four diagonal rays; diagonals break the tie with the gap
/// direction. A zero (or NaN) anchor satisfies no sector predicate and is a
/// malformed placement: a fatal configuration error, not a guess.
///
/// Diagonal gap-direction ties (e.g. `dx == dy` on the north-east ray)
/// resolve to Vertical by the strict comparisons below; such placements
/// cannot be flipped by [`with_orientation`] because the flip transform
/// preserves the tie.
pub fn orientation(placement: &Placement) -> LayoutResult<Orientation> {
    let Point { x, y } = placement.anchor();
    let Point { x: dx, y: dy } = placement.gap_direction();

    if x < y && x > -y {
        // North sector.
        Ok(Orientation::Horizontal)
    } else if x > y && x < -y {
        // South sector.
        Ok(Orientation::Horizontal)
    } else if x > y && x > -y {
        // East sector.
        Ok(Orientation::Vertical)
    } else if x < y && x < -y {
        // West sector.
        Ok(Orientation::Vertical)
    } else if x == y && x > 0.0 {
        // North-east ray.
        Ok(if dx > dy {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        })
    } else if x == -y && x > 0.0 {
        // South-east ray.
        Ok(if dx > -dy {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        })
    } else if x == y && x < 0.0 {
        // South-west ray.
        Ok(if dx < dy {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        })
    } else if x == -y && x < 0.0 {
        // North-west ray.
        Ok(if dx < -dy {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        })
    } else {
        Err(LayoutError::MalformedPlacement { x, y })
    }
}

/// Rewrites a placement so it resolves to the requested orientation.
///
/// No-op when the placement already resolves to the target. Otherwise both
/// the anchor and the gap direction go through `(x, y) ↦ (−y, −x)`, which
/// swaps the east/south and north/west roles while preserving the
/// [`Placement::side`] bit, keeping the placement self-consistent.
pub fn with_orientation(placement: Placement, target: Orientation) -> LayoutResult<Placement> {
    if orientation(&placement)? == target {
        return Ok(placement);
    }
    Ok(Placement::new(
        flip(placement.anchor()),
        flip(placement.gap_direction()),
    ))
}

fn flip(p: Point) -> Point {
    Point::new(-p.y, -p.x)
}
