//! Core style property value types.

use std::fmt;

use super::{BorderLineStyle, Color};

/// A declared property value with CSS-wide keyword support.
///
/// The default is `Unset`, matching the CSS cascade: an unset property
/// inherits if it is an inherited property and falls back to nothing
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue<T> {
    /// An explicit value.
    Set(T),
    /// Inherit from the parent element.
    Inherit,
    /// Reset to the initial (unstyled) value.
    Initial,
    /// Not declared.
    Unset,
}

impl<T> Default for StyleValue<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> StyleValue<T> {
    /// Check if this value is explicitly set.
    pub fn is_set(&self) -> bool {
        matches!(self, StyleValue::Set(_))
    }

    /// Get the inner value if set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Set(value)
    }
}

/// A CSS length, kept in its declared unit.
///
/// The engine compares declarations rather than laying out boxes, so a
/// `2.5rem` stays `Rem(2.5)` instead of resolving to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Relative to the element's font size.
    Em(f32),
    /// Relative to the root font size.
    Rem(f32),
    /// Percentage of the containing block.
    Percent(f32),
    /// Automatic sizing (context-dependent).
    #[default]
    Auto,
    /// A unitless zero.
    Zero,
}

impl Length {
    /// Create a pixel value.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create an em value.
    pub fn em(value: f32) -> Self {
        Self::Em(value)
    }

    /// Create a rem value.
    pub fn rem(value: f32) -> Self {
        Self::Rem(value)
    }

    /// Create a percentage value.
    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    /// Check if this is an auto value.
    pub fn is_auto(&self) -> bool {
        matches!(self, Length::Auto)
    }

    /// Check if this is zero or would resolve to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Length::Zero => true,
            Length::Px(v) | Length::Em(v) | Length::Rem(v) | Length::Percent(v) => *v == 0.0,
            Length::Auto => false,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Em(v) => write!(f, "{v}em"),
            Length::Rem(v) => write!(f, "{v}rem"),
            Length::Percent(v) => write!(f, "{v}%"),
            Length::Auto => write!(f, "auto"),
            Length::Zero => write!(f, "0"),
        }
    }
}

/// Edge values for margin, padding, and the inset properties.
///
/// Each side is independently optional so that a lone longhand declaration
/// (`margin-top: 3em`) leaves the other sides undeclared rather than forcing
/// them to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeValues {
    /// Top edge value.
    pub top: Option<Length>,
    /// Right edge value.
    pub right: Option<Length>,
    /// Bottom edge value.
    pub bottom: Option<Length>,
    /// Left edge value.
    pub left: Option<Length>,
}

impl EdgeValues {
    /// Create uniform edge values.
    pub fn uniform(value: Length) -> Self {
        Self {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub fn symmetric(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: Some(vertical),
            bottom: Some(vertical),
            left: Some(horizontal),
            right: Some(horizontal),
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// Create zero edge values on all sides.
    pub fn zero() -> Self {
        Self::uniform(Length::Zero)
    }

    /// Check if no side has been declared.
    pub fn is_unset(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// The single value shared by all four sides, if there is one.
    ///
    /// This is what a shorthand assertion like "margin is `8px`" reads.
    pub fn uniform_value(&self) -> Option<Length> {
        let top = self.top?;
        if self.right == Some(top) && self.bottom == Some(top) && self.left == Some(top) {
            Some(top)
        } else {
            None
        }
    }

    /// Overlay another set of edges onto this one, side by side.
    ///
    /// Declared sides of `other` win; undeclared sides keep their value.
    pub fn apply(&mut self, other: &EdgeValues) {
        if other.top.is_some() {
            self.top = other.top;
        }
        if other.right.is_some() {
            self.right = other.right;
        }
        if other.bottom.is_some() {
            self.bottom = other.bottom;
        }
        if other.left.is_some() {
            self.left = other.left;
        }
    }
}

/// One border edge: width, line style, and color.
///
/// Populated by the `border-bottom` shorthand or its longhands, merged
/// field-wise in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Border {
    /// Border width.
    pub width: Option<Length>,
    /// Border line style.
    pub style: Option<BorderLineStyle>,
    /// Border color.
    pub color: Option<Color>,
}

impl Border {
    /// Create a fully specified border edge.
    pub fn new(width: Length, style: BorderLineStyle, color: Color) -> Self {
        Self {
            width: Some(width),
            style: Some(style),
            color: Some(color),
        }
    }

    /// Overlay another border onto this one, field by field.
    pub fn apply(&mut self, other: &Border) {
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.style.is_some() {
            self.style = other.style;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_value_default_is_unset() {
        let value: StyleValue<Length> = StyleValue::default();
        assert_eq!(value, StyleValue::Unset);
        assert!(!value.is_set());
    }

    #[test]
    fn edge_values_uniform() {
        let edges = EdgeValues::uniform(Length::Px(8.0));
        assert_eq!(edges.uniform_value(), Some(Length::Px(8.0)));

        let edges = EdgeValues::symmetric(Length::Zero, Length::Em(1.0));
        assert_eq!(edges.uniform_value(), None);
        assert_eq!(edges.left, Some(Length::Em(1.0)));
        assert_eq!(edges.top, Some(Length::Zero));
    }

    #[test]
    fn edge_values_overlay() {
        let mut edges = EdgeValues::uniform(Length::Zero);
        edges.apply(&EdgeValues {
            top: Some(Length::Rem(0.5)),
            ..EdgeValues::default()
        });

        assert_eq!(edges.top, Some(Length::Rem(0.5)));
        assert_eq!(edges.right, Some(Length::Zero));
        assert_eq!(edges.uniform_value(), None);
    }

    #[test]
    fn lone_longhand_leaves_other_sides_unset() {
        let mut edges = EdgeValues::default();
        edges.apply(&EdgeValues {
            top: Some(Length::Em(3.0)),
            ..EdgeValues::default()
        });

        assert_eq!(edges.top, Some(Length::Em(3.0)));
        assert_eq!(edges.bottom, None);
        assert!(!edges.is_unset());
    }

    #[test]
    fn border_overlay() {
        let mut border = Border {
            width: Some(Length::Rem(0.6)),
            ..Border::default()
        };
        border.apply(&Border {
            style: Some(BorderLineStyle::Solid),
            color: Some(Color::BLACK),
            ..Border::default()
        });

        assert_eq!(border.width, Some(Length::Rem(0.6)));
        assert_eq!(border.style, Some(BorderLineStyle::Solid));
    }

    #[test]
    fn zero_lengths() {
        assert!(Length::Zero.is_zero());
        assert!(Length::Px(0.0).is_zero());
        assert!(!Length::Px(0.1).is_zero());
        assert!(!Length::Auto.is_zero());
    }
}
