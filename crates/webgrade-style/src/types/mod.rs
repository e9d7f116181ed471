//! Value types for style properties.

mod color;
mod font;
mod keyword;
mod value;

pub use color::Color;
pub use font::{FontFamily, FontStack, FontStyle, FontWeight};
pub use keyword::{
    BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSize, BorderLineStyle,
    BoxSizing, Display, Float, HorizontalAnchor, Position, TextAlign, TextDecoration,
    VerticalAlign, VerticalAnchor,
};
pub use value::{Border, EdgeValues, Length, StyleValue};
