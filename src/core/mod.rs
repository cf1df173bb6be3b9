pub mod bar_scale;
pub mod placement;
pub mod stats;
pub mod trend_band;
pub mod types;

pub use bar_scale::BarScale;
pub use placement::{Orientation, Placement, orientation, with_orientation};
pub use stats::{LinearFit, correlation, mean, simple_linear, std_dev};
pub use trend_band::{TrendBandGeometry, project_trend_band};
pub use types::{BoundingBox, Point, ValueBounds};
