//! Property inheritance and resolution to computed values.

use crate::style::{ComputedStyle, StyleProperties};
use crate::types::{EdgeValues, StyleValue};

/// Resolve cascaded properties to a [`ComputedStyle`], handling inheritance.
///
/// Inherited properties (color, the font properties, line-height,
/// text-align) flow from the parent when undeclared. Everything else stays
/// `None` unless declared, so an unstyled property reads as absent rather
/// than as a default. Declared units are preserved.
pub fn resolve_properties(
    props: &StyleProperties,
    parent: Option<&ComputedStyle>,
) -> ComputedStyle {
    let mut computed = ComputedStyle::default();

    // === Typography (inherited) ===
    computed.color = inherited(&props.color, parent.map(|p| &p.color));
    computed.font_family = inherited(&props.font_family, parent.map(|p| &p.font_family));
    computed.font_size = inherited(&props.font_size, parent.map(|p| &p.font_size));
    computed.font_weight = inherited(&props.font_weight, parent.map(|p| &p.font_weight));
    computed.font_style = inherited(&props.font_style, parent.map(|p| &p.font_style));
    computed.line_height = inherited(&props.line_height, parent.map(|p| &p.line_height));
    computed.text_align = inherited(&props.text_align, parent.map(|p| &p.text_align));

    // === Box model (not inherited) ===
    computed.margin = resolve_edges(&props.margin, parent.map(|p| &p.margin));
    computed.padding = resolve_edges(&props.padding, parent.map(|p| &p.padding));
    computed.border_bottom = non_inherited(&props.border_bottom, parent.map(|p| &p.border_bottom));
    computed.box_sizing = non_inherited(&props.box_sizing, parent.map(|p| &p.box_sizing));

    // === Layout (not inherited) ===
    computed.display = non_inherited(&props.display, parent.map(|p| &p.display));
    computed.position = non_inherited(&props.position, parent.map(|p| &p.position));
    computed.inset = resolve_edges(&props.inset, parent.map(|p| &p.inset));
    computed.float = non_inherited(&props.float, parent.map(|p| &p.float));
    computed.vertical_align = non_inherited(&props.vertical_align, parent.map(|p| &p.vertical_align));
    computed.width = non_inherited(&props.width, parent.map(|p| &p.width));
    computed.height = non_inherited(&props.height, parent.map(|p| &p.height));

    // === Background (not inherited) ===
    computed.background_color = non_inherited(&props.background_color, parent.map(|p| &p.background_color));
    computed.background_image = non_inherited(&props.background_image, parent.map(|p| &p.background_image));
    computed.background_position =
        non_inherited(&props.background_position, parent.map(|p| &p.background_position));
    computed.background_size = non_inherited(&props.background_size, parent.map(|p| &p.background_size));
    computed.background_repeat =
        non_inherited(&props.background_repeat, parent.map(|p| &p.background_repeat));

    // text-decoration draws through descendants in a browser but does not
    // inherit as a computed value.
    computed.text_decoration = non_inherited(&props.text_decoration, parent.map(|p| &p.text_decoration));

    computed
}

/// Resolve an inherited property.
fn inherited<T: Clone>(value: &StyleValue<T>, parent: Option<&Option<T>>) -> Option<T> {
    match value {
        StyleValue::Set(v) => Some(v.clone()),
        StyleValue::Inherit | StyleValue::Unset => parent.and_then(|p| p.clone()),
        StyleValue::Initial => None,
    }
}

/// Resolve a non-inherited property; `inherit` still reaches for the parent.
fn non_inherited<T: Clone>(value: &StyleValue<T>, parent: Option<&Option<T>>) -> Option<T> {
    match value {
        StyleValue::Set(v) => Some(v.clone()),
        StyleValue::Inherit => parent.and_then(|p| p.clone()),
        StyleValue::Initial | StyleValue::Unset => None,
    }
}

/// Resolve edge-valued properties (margin, padding, inset). Not inherited.
fn resolve_edges(value: &StyleValue<EdgeValues>, parent: Option<&EdgeValues>) -> EdgeValues {
    match value {
        StyleValue::Set(edges) => *edges,
        StyleValue::Inherit => parent.copied().unwrap_or_default(),
        StyleValue::Initial | StyleValue::Unset => EdgeValues::default(),
    }
}
