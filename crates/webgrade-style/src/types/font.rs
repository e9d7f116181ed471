//! Font-related value types.

use std::fmt;

/// A single entry in a `font-family` stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    SansSerif,
    /// Generic monospace family.
    Monospace,
    /// Generic cursive family.
    Cursive,
    /// Generic fantasy family.
    Fantasy,
    /// A named family (e.g. "Open Sans").
    Name(String),
}

impl FontFamily {
    /// Parse a generic family keyword; anything else is a named family.
    pub fn from_css(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            "cursive" => Self::Cursive,
            "fantasy" => Self::Fantasy,
            _ => Self::Name(s.to_string()),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Serif => write!(f, "serif"),
            FontFamily::SansSerif => write!(f, "sans-serif"),
            FontFamily::Monospace => write!(f, "monospace"),
            FontFamily::Cursive => write!(f, "cursive"),
            FontFamily::Fantasy => write!(f, "fantasy"),
            FontFamily::Name(name) => write!(f, "{name}"),
        }
    }
}

/// An ordered `font-family` stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontStack(pub Vec<FontFamily>);

impl FontStack {
    /// Check if the stack names a family containing `needle`.
    ///
    /// Named families match by substring ("Open Sans" matches
    /// `'Open Sans Condensed'` too), generic keywords by exact spelling.
    pub fn contains_name(&self, needle: &str) -> bool {
        self.0.iter().any(|family| match family {
            FontFamily::Name(name) => name.contains(needle),
            generic => generic.to_string() == needle,
        })
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FontStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, family) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{family}")?;
        }
        Ok(())
    }
}

/// Font weight (100-900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const EXTRA_BOLD: Self = Self(800);
    pub const BLACK: Self = Self(900);

    /// Create a numeric weight.
    pub fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Parse a keyword weight.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::NORMAL),
            "bold" | "bolder" => Some(Self::BOLD),
            "lighter" | "light" => Some(Self::LIGHT),
            "thin" => Some(Self::THIN),
            "medium" => Some(Self::MEDIUM),
            "semibold" | "semi-bold" => Some(Self::SEMI_BOLD),
            "extrabold" | "extra-bold" => Some(Self::EXTRA_BOLD),
            "black" => Some(Self::BLACK),
            _ => None,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
    /// Oblique (slanted).
    Oblique,
}

impl FontStyle {
    /// Parse from a CSS keyword.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "italic" => Some(Self::Italic),
            "oblique" => Some(Self::Oblique),
            _ => None,
        }
    }
}
