use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub fn validate(self) -> LayoutResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LayoutError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Channel-wise linear interpolation toward `other` at `t ∈ [0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: self.red + (other.red - self.red) * t,
            green: self.green + (other.green - self.green) * t,
            blue: self.blue + (other.blue - self.blue) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }
}

/// One gradient stop: a color pinned at a normalized position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    #[must_use]
    pub const fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Maps a normalized scalar in `[0, 1]` to a color via ordered stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    stops: Vec<ColorStop>,
}

impl ColorMap {
    /// Builds a map from explicit stops.
    ///
    /// Requires at least 2 stops with strictly ascending positions in
    /// `[0, 1]` and valid colors.
    pub fn new(stops: Vec<ColorStop>) -> LayoutResult<Self> {
        if stops.len() < 2 {
            return Err(LayoutError::InvalidData(
                "color map needs at least 2 stops".to_owned(),
            ));
        }
        for stop in &stops {
            if !stop.position.is_finite() || !(0.0..=1.0).contains(&stop.position) {
                return Err(LayoutError::InvalidData(
                    "color stop positions must be finite and in [0, 1]".to_owned(),
                ));
            }
            stop.color.validate()?;
        }
        for pair in stops.windows(2) {
            if pair[0].position >= pair[1].position {
                return Err(LayoutError::InvalidData(
                    "color stop positions must be strictly ascending".to_owned(),
                ));
            }
        }
        Ok(Self { stops })
    }

    /// Two-color gradient from 0 to 1.
    pub fn two_color(start: Color, end: Color) -> LayoutResult<Self> {
        Self::new(vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)])
    }

    /// Evenly spaces the given colors over `[0, 1]`.
    pub fn evenly_spaced(colors: &[Color]) -> LayoutResult<Self> {
        if colors.len() < 2 {
            return Err(LayoutError::InvalidData(
                "color map needs at least 2 colors".to_owned(),
            ));
        }
        let last = (colors.len() - 1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(index, color)| ColorStop::new(index as f64 / last, *color))
            .collect();
        Self::new(stops)
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Samples the map at `t`, clamped to `[0, 1]`.
    ///
    /// Positions outside the outermost stops extend their colors.
    #[must_use]
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.position {
                let local = (t - lo.position) / (hi.position - lo.position);
                return lo.color.lerp(hi.color, local);
            }
        }
        last.color
    }
}

impl Default for ColorMap {
    /// Grayscale ramp from black to white.
    fn default() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.0, Color::BLACK),
                ColorStop::new(1.0, Color::WHITE),
            ],
        }
    }
}
