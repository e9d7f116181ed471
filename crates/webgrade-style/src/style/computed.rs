//! Computed style: cascade and inheritance applied, units preserved.

use crate::types::{
    BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSize, Border, BoxSizing,
    Color, Display, EdgeValues, Float, FontStack, FontStyle, FontWeight, Length, Position,
    TextAlign, TextDecoration, VerticalAlign,
};

/// The resolved style of one element.
///
/// Every field reflects the cascade plus inheritance. Properties the
/// stylesheet never reached stay `None` (or fully-unset edges), so a check
/// against an unstyled element fails as a comparison rather than reading a
/// made-up default. Declared units are preserved: `2.5rem` stays
/// `Length::Rem(2.5)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    // === Box Model ===
    /// Margin, per side.
    pub margin: EdgeValues,
    /// Padding, per side.
    pub padding: EdgeValues,
    /// Bottom border.
    pub border_bottom: Option<Border>,
    /// Sizing model.
    pub box_sizing: Option<BoxSizing>,

    // === Layout ===
    /// Display model.
    pub display: Option<Display>,
    /// Positioning scheme.
    pub position: Option<Position>,
    /// Inset offsets.
    pub inset: EdgeValues,
    /// Float direction.
    pub float: Option<Float>,
    /// Inline vertical alignment.
    pub vertical_align: Option<VerticalAlign>,
    /// Explicit width.
    pub width: Option<Length>,
    /// Explicit height.
    pub height: Option<Length>,

    // === Background ===
    /// Background color.
    pub background_color: Option<Color>,
    /// Background image.
    pub background_image: Option<BackgroundImage>,
    /// Background position anchors.
    pub background_position: Option<BackgroundPosition>,
    /// Background sizing keyword.
    pub background_size: Option<BackgroundSize>,
    /// Background repetition.
    pub background_repeat: Option<BackgroundRepeat>,

    // === Typography (inherited) ===
    /// Font family stack.
    pub font_family: Option<FontStack>,
    /// Font size.
    pub font_size: Option<Length>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Line height multiplier.
    pub line_height: Option<f32>,
    /// Text color.
    pub color: Option<Color>,
    /// Text alignment.
    pub text_align: Option<TextAlign>,
    /// Text decoration line (not inherited).
    pub text_decoration: Option<TextDecoration>,
}

impl ComputedStyle {
    /// The `top` inset offset.
    pub fn top(&self) -> Option<Length> {
        self.inset.top
    }

    /// The `right` inset offset.
    pub fn right(&self) -> Option<Length> {
        self.inset.right
    }

    /// The `bottom` inset offset.
    pub fn bottom(&self) -> Option<Length> {
        self.inset.bottom
    }

    /// The `left` inset offset.
    pub fn left(&self) -> Option<Length> {
        self.inset.left
    }

    /// Check if nothing at all was resolved for this element.
    pub fn is_unstyled(&self) -> bool {
        self == &Self::default()
    }
}
