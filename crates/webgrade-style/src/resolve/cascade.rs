//! Property cascading logic.

use crate::style::StyleProperties;
use crate::types::StyleValue;

/// Cascade source properties onto target.
///
/// Only declared values from `source` are copied to `target`; this is the
/// core of CSS cascading, with later (higher-precedence) rules applied on
/// top of earlier ones. Edge-valued properties and the border merge side by
/// side, so a longhand in a later rule refines rather than clobbers an
/// earlier shorthand.
pub fn cascade_properties(target: &mut StyleProperties, source: &StyleProperties) {
    macro_rules! cascade_if_set {
        ($($prop:ident),+ $(,)?) => {
            $(
                if source.$prop.is_set() {
                    target.$prop = source.$prop.clone();
                }
            )+
        };
    }

    macro_rules! cascade_edges {
        ($($prop:ident),+ $(,)?) => {
            $(
                if let StyleValue::Set(source_edges) = &source.$prop {
                    let mut merged = target.$prop.as_set().copied().unwrap_or_default();
                    merged.apply(source_edges);
                    target.$prop = StyleValue::Set(merged);
                }
            )+
        };
    }

    cascade_edges!(margin, padding, inset);

    if let StyleValue::Set(source_border) = &source.border_bottom {
        let mut merged = target.border_bottom.as_set().copied().unwrap_or_default();
        merged.apply(source_border);
        target.border_bottom = StyleValue::Set(merged);
    }

    cascade_if_set!(
        // Box model
        box_sizing,
        // Layout
        display,
        position,
        float,
        vertical_align,
        width,
        height,
        // Background
        background_color,
        background_image,
        background_position,
        background_size,
        background_repeat,
        // Typography
        font_family,
        font_size,
        font_weight,
        font_style,
        line_height,
        color,
        text_align,
        text_decoration,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, EdgeValues, Length};

    #[test]
    fn cascade_overwrites_set_values() {
        let mut target = StyleProperties {
            color: StyleValue::Set(Color::BLACK),
            line_height: StyleValue::Set(1.0),
            ..Default::default()
        };

        let source = StyleProperties {
            color: StyleValue::Set(Color::WHITE),
            // line_height is not set in source
            ..Default::default()
        };

        cascade_properties(&mut target, &source);

        // color should be overwritten
        assert_eq!(target.color.as_set(), Some(&Color::WHITE));
        // line_height should remain unchanged
        assert_eq!(target.line_height.as_set(), Some(&1.0));
    }

    #[test]
    fn cascade_preserves_unset_target_values() {
        let mut target = StyleProperties::default();

        let source = StyleProperties {
            line_height: StyleValue::Set(1.5),
            ..Default::default()
        };

        cascade_properties(&mut target, &source);

        assert!(!target.color.is_set());
        assert_eq!(target.line_height.as_set(), Some(&1.5));
    }

    #[test]
    fn cascade_merges_edges_per_side() {
        // Earlier rule: margin: 8px
        let mut target = StyleProperties {
            margin: StyleValue::Set(EdgeValues::uniform(Length::Px(8.0))),
            ..Default::default()
        };

        // Later rule: margin-top: 3em only
        let source = StyleProperties {
            margin: StyleValue::Set(EdgeValues {
                top: Some(Length::Em(3.0)),
                ..Default::default()
            }),
            ..Default::default()
        };

        cascade_properties(&mut target, &source);

        let margin = target.margin.as_set().unwrap();
        assert_eq!(margin.top, Some(Length::Em(3.0)));
        assert_eq!(margin.right, Some(Length::Px(8.0)));
        assert_eq!(margin.bottom, Some(Length::Px(8.0)));
        assert_eq!(margin.left, Some(Length::Px(8.0)));
    }
}
