use ordered_float::OrderedFloat;

use crate::core::types::ValueBounds;
use crate::render::color::Color;
use crate::render::style::Stroke;

/// Major tick position generator.
pub type TickFn = fn(ValueBounds) -> Vec<f64>;
/// Grid-line position generator, seeded by the filtered tick positions.
pub type GridFn = fn(&[f64], ValueBounds) -> Vec<f64>;
/// Label generator over the filtered tick positions.
pub type LabelFn = fn(&[f64], ValueBounds) -> Vec<(f64, String)>;

/// Round-step major ticks on the 1/2/5 ladder, clamped to the bounds.
#[must_use]
pub fn linear_ticks(bounds: ValueBounds) -> Vec<f64> {
    const TARGET_COUNT: f64 = 6.0;

    let raw_step = bounds.span() / TARGET_COUNT;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|multiplier| multiplier * magnitude)
        .find(|candidate| *candidate >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first_index = (bounds.lower() / step).ceil() as i64;
    let last_index = (bounds.upper() / step).floor() as i64;
    let mut ticks: Vec<f64> = (first_index..=last_index)
        .map(|index| index as f64 * step)
        .filter(|position| bounds.contains(*position))
        .collect();
    ticks.sort_by_key(|position| OrderedFloat(*position));
    ticks.dedup_by(|a, b| OrderedFloat(*a) == OrderedFloat(*b));
    ticks
}

/// Default grid lines: one per tick position.
#[must_use]
pub fn tick_grid_lines(ticks: &[f64], _bounds: ValueBounds) -> Vec<f64> {
    ticks.to_vec()
}

/// Default labels: shortest round-trip decimal per tick.
#[must_use]
pub fn decimal_tick_labels(ticks: &[f64], _bounds: ValueBounds) -> Vec<(f64, String)> {
    ticks
        .iter()
        .map(|position| (*position, format!("{position}")))
        .collect()
}

/// How a tick mark sits against the bar edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickAlign {
    /// Symmetric tick centred on the edge (the default).
    Centred,
    /// Two-length tick: `inside` reaches into the bar, `outside` away.
    Asymmetric { inside: f64, outside: f64 },
}

/// Major tick sub-spec of a colour bar.
#[derive(Debug, Clone, Copy)]
pub struct TickSpec {
    pub tick_fn: TickFn,
    pub length: f64,
    pub align: TickAlign,
    pub stroke: Stroke,
    pub hidden: bool,
}

impl Default for TickSpec {
    fn default() -> Self {
        Self {
            tick_fn: linear_ticks,
            length: 5.0,
            align: TickAlign::Centred,
            stroke: Stroke::new(Color::BLACK, 1.0),
            hidden: false,
        }
    }
}

/// Grid-line sub-spec of a colour bar.
#[derive(Debug, Clone, Copy)]
pub struct GridLineSpec {
    pub grid_fn: GridFn,
    pub stroke: Stroke,
    pub hidden: bool,
}

impl Default for GridLineSpec {
    fn default() -> Self {
        Self {
            grid_fn: tick_grid_lines,
            stroke: Stroke::new(Color::rgb(0.5, 0.5, 0.5), 0.5),
            hidden: false,
        }
    }
}

/// Tick-label sub-spec of a colour bar.
#[derive(Debug, Clone, Copy)]
pub struct TickLabelSpec {
    pub label_fn: LabelFn,
    pub font_size: f64,
    pub color: Color,
    /// Distance between the bar edge and the label anchors.
    pub gap: f64,
    pub hidden: bool,
}

impl Default for TickLabelSpec {
    fn default() -> Self {
        Self {
            label_fn: decimal_tick_labels,
            font_size: 11.0,
            color: Color::BLACK,
            gap: 10.0,
            hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decimal_tick_labels, linear_ticks};
    use crate::core::types::ValueBounds;

    #[test]
    fn unit_decade_gets_round_steps() {
        let bounds = ValueBounds::new(0.0, 10.0).expect("bounds");
        let ticks = linear_ticks(bounds);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn ticks_never_leave_the_bounds() {
        let bounds = ValueBounds::new(0.3, 9.7).expect("bounds");
        for tick in linear_ticks(bounds) {
            assert!(bounds.contains(tick), "tick {tick} out of range");
        }
    }

    #[test]
    fn labels_use_shortest_decimal_form() {
        let bounds = ValueBounds::new(0.0, 1.0).expect("bounds");
        let labels = decimal_tick_labels(&[0.0, 0.5, 1.0], bounds);
        assert_eq!(labels[0].1, "0");
        assert_eq!(labels[1].1, "0.5");
        assert_eq!(labels[2].1, "1");
    }
}
