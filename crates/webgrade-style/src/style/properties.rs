//! Declared style properties.

use crate::types::{
    BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSize, Border, BoxSizing,
    Color, Display, EdgeValues, Float, FontStack, FontStyle, FontWeight, Length, Position,
    StyleValue, TextAlign, TextDecoration, VerticalAlign,
};

/// The set of declared properties carried by one rule or one inline style.
///
/// Each property is wrapped in [`StyleValue`] so the cascade can tell a
/// declared value apart from an undeclared one. This covers the property set
/// a static page checker inspects, not all of CSS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    // === Box Model ===
    /// Margin (outer spacing), sides individually optional.
    pub margin: StyleValue<EdgeValues>,
    /// Padding (inner spacing), sides individually optional.
    pub padding: StyleValue<EdgeValues>,
    /// Bottom border (shorthand or longhands, merged).
    pub border_bottom: StyleValue<Border>,
    /// Sizing model for width/height.
    pub box_sizing: StyleValue<BoxSizing>,

    // === Layout ===
    /// Display model.
    pub display: StyleValue<Display>,
    /// Positioning scheme.
    pub position: StyleValue<Position>,
    /// Inset offsets (`top`/`right`/`bottom`/`left`).
    pub inset: StyleValue<EdgeValues>,
    /// Float direction.
    pub float: StyleValue<Float>,
    /// Inline vertical alignment.
    pub vertical_align: StyleValue<VerticalAlign>,
    /// Explicit width.
    pub width: StyleValue<Length>,
    /// Explicit height.
    pub height: StyleValue<Length>,

    // === Background ===
    /// Background color.
    pub background_color: StyleValue<Color>,
    /// Background image.
    pub background_image: StyleValue<BackgroundImage>,
    /// Background position anchors.
    pub background_position: StyleValue<BackgroundPosition>,
    /// Background sizing keyword.
    pub background_size: StyleValue<BackgroundSize>,
    /// Background repetition.
    pub background_repeat: StyleValue<BackgroundRepeat>,

    // === Typography ===
    /// Font family stack.
    pub font_family: StyleValue<FontStack>,
    /// Font size.
    pub font_size: StyleValue<Length>,
    /// Font weight.
    pub font_weight: StyleValue<FontWeight>,
    /// Font style.
    pub font_style: StyleValue<FontStyle>,
    /// Line height multiplier.
    pub line_height: StyleValue<f32>,
    /// Text color.
    pub color: StyleValue<Color>,
    /// Text alignment.
    pub text_align: StyleValue<TextAlign>,
    /// Text decoration line.
    pub text_decoration: StyleValue<TextDecoration>,
}

impl StyleProperties {
    /// Create new default (fully undeclared) properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no property has been declared.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(StyleProperties::default().is_empty());

        let props = StyleProperties {
            color: StyleValue::Set(Color::BLACK),
            ..Default::default()
        };
        assert!(!props.is_empty());
    }
}
