pub mod color;
pub mod layer;
pub mod style;

pub use color::{Color, ColorMap, ColorStop};
pub use layer::{
    Layer, PolyPrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign, Transform2,
};
pub use style::{Fill, ShapeStyle, Stroke, StyleContext, ValueTransform};
