//! Keyword-valued properties.
//!
//! Each type follows the same shape: a `from_css` parser over the keyword
//! spelling and a `Display` that writes it back out.

use std::fmt;

/// `box-sizing` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxSizing {
    /// Width/height apply to the content box.
    #[default]
    ContentBox,
    /// Width/height include padding and border.
    BorderBox,
}

impl BoxSizing {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "content-box" => Some(Self::ContentBox),
            "border-box" => Some(Self::BorderBox),
            _ => None,
        }
    }
}

impl fmt::Display for BoxSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentBox => write!(f, "content-box"),
            Self::BorderBox => write!(f, "border-box"),
        }
    }
}

/// `display` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Inline-level box.
    #[default]
    Inline,
    /// Block-level box.
    Block,
    /// Inline-level block container.
    InlineBlock,
    /// List item box.
    ListItem,
    /// Flex container.
    Flex,
    /// Grid container.
    Grid,
    /// Generates no box.
    None,
}

impl Display {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Some(Self::Inline),
            "block" => Some(Self::Block),
            "inline-block" => Some(Self::InlineBlock),
            "list-item" => Some(Self::ListItem),
            "flex" => Some(Self::Flex),
            "grid" => Some(Self::Grid),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "inline"),
            Self::Block => write!(f, "block"),
            Self::InlineBlock => write!(f, "inline-block"),
            Self::ListItem => write!(f, "list-item"),
            Self::Flex => write!(f, "flex"),
            Self::Grid => write!(f, "grid"),
            Self::None => write!(f, "none"),
        }
    }
}

/// `position` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Offset from normal flow position.
    Relative,
    /// Positioned against the nearest positioned ancestor.
    Absolute,
    /// Positioned against the viewport.
    Fixed,
    /// Scrolls until pinned.
    Sticky,
}

impl Position {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            "fixed" => Some(Self::Fixed),
            "sticky" => Some(Self::Sticky),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Relative => write!(f, "relative"),
            Self::Absolute => write!(f, "absolute"),
            Self::Fixed => write!(f, "fixed"),
            Self::Sticky => write!(f, "sticky"),
        }
    }
}

/// `float` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Float {
    /// No float.
    #[default]
    None,
    /// Float to the left edge.
    Left,
    /// Float to the right edge.
    Right,
}

impl Float {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// `vertical-align` keyword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Align with the parent baseline.
    #[default]
    Baseline,
    /// Align with the line box top.
    Top,
    /// Align with the middle of the line box.
    Middle,
    /// Align with the line box bottom.
    Bottom,
    /// Align with the parent's font top.
    TextTop,
    /// Align with the parent's font bottom.
    TextBottom,
}

impl VerticalAlign {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Some(Self::Baseline),
            "top" => Some(Self::Top),
            "middle" => Some(Self::Middle),
            "bottom" => Some(Self::Bottom),
            "text-top" => Some(Self::TextTop),
            "text-bottom" => Some(Self::TextBottom),
            _ => None,
        }
    }
}

/// `text-align` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Align to the start of the text direction.
    #[default]
    Start,
    /// Align to the end of the text direction.
    End,
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center the text.
    Center,
    /// Justify text to fill the available width.
    Justify,
}

impl TextAlign {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// `text-decoration` line values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDecoration {
    /// No decoration line.
    #[default]
    None,
    /// Underline.
    Underline,
    /// Line above the text.
    Overline,
    /// Strike-through.
    LineThrough,
}

impl TextDecoration {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "underline" => Some(Self::Underline),
            "overline" => Some(Self::Overline),
            "line-through" => Some(Self::LineThrough),
            _ => None,
        }
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderLineStyle {
    /// No border.
    #[default]
    None,
    /// Solid line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Double line.
    Double,
}

impl BorderLineStyle {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

/// `background-image` values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackgroundImage {
    /// No image.
    #[default]
    None,
    /// An image URL, as written (quotes stripped, path untouched).
    Url(String),
}

impl BackgroundImage {
    /// The URL, if an image is set.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::None => None,
        }
    }
}

/// Horizontal anchor keyword of a background position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    /// Anchored to the left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Anchored to the right edge.
    Right,
}

/// Vertical anchor keyword of a background position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    /// Anchored to the top edge.
    Top,
    /// Centered.
    #[default]
    Center,
    /// Anchored to the bottom edge.
    Bottom,
}

/// `background-position`, keyword form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackgroundPosition {
    /// Horizontal anchor.
    pub horizontal: HorizontalAnchor,
    /// Vertical anchor.
    pub vertical: VerticalAnchor,
}

/// `background-size` keyword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundSize {
    /// Intrinsic size.
    #[default]
    Auto,
    /// Scale to fit inside the box.
    Contain,
    /// Scale to cover the box.
    Cover,
}

impl BackgroundSize {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "contain" => Some(Self::Contain),
            "cover" => Some(Self::Cover),
            _ => None,
        }
    }
}

/// `background-repeat` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundRepeat {
    /// Repeat in both axes.
    #[default]
    Repeat,
    /// No repetition.
    NoRepeat,
    /// Repeat horizontally only.
    RepeatX,
    /// Repeat vertically only.
    RepeatY,
}

impl BackgroundRepeat {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "repeat" => Some(Self::Repeat),
            "no-repeat" => Some(Self::NoRepeat),
            "repeat-x" => Some(Self::RepeatX),
            "repeat-y" => Some(Self::RepeatY),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_parsing() {
        assert_eq!(BoxSizing::from_css("border-box"), Some(BoxSizing::BorderBox));
        assert_eq!(Display::from_css("inline-block"), Some(Display::InlineBlock));
        assert_eq!(Position::from_css("FIXED"), Some(Position::Fixed));
        assert_eq!(Float::from_css("right"), Some(Float::Right));
        assert_eq!(VerticalAlign::from_css("bottom"), Some(VerticalAlign::Bottom));
        assert_eq!(TextDecoration::from_css("none"), Some(TextDecoration::None));
        assert_eq!(BorderLineStyle::from_css("solid"), Some(BorderLineStyle::Solid));
        assert_eq!(BackgroundRepeat::from_css("no-repeat"), Some(BackgroundRepeat::NoRepeat));
        assert_eq!(Display::from_css("table"), None);
    }

    #[test]
    fn background_image_url() {
        let image = BackgroundImage::Url("../img/logo.png".to_string());
        assert_eq!(image.url(), Some("../img/logo.png"));
        assert_eq!(BackgroundImage::None.url(), None);
    }
}
