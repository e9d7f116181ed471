//! Core CSS parsing logic.
//!
//! The parser tokenizes CSS input and constructs [`StyleRule`] objects
//! containing selector lists and their declared properties.
//!
//! # Error Recovery
//!
//! Parse errors in individual rules do not fail the whole parse. The parser
//! records the problem, skips to the next rule (after the closing `}`), and
//! continues. [`parse_css`] logs recorded problems via `tracing::warn!`;
//! [`lint_css`](crate::parser::lint_css) returns them to the caller.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::parser::CssDiagnostic;
use crate::rules::StyleRule;
use crate::selector::{Combinator, NthExpr, PseudoClass, Selector, SelectorPart, TypeSelector};
use crate::style::StyleProperties;
use crate::types::{
    BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSize, Border,
    BorderLineStyle, BoxSizing, Color, Display, EdgeValues, Float, FontFamily, FontStack,
    FontStyle, FontWeight, HorizontalAnchor, Length, Position, StyleValue, TextAlign,
    TextDecoration, VerticalAlign, VerticalAnchor,
};
use crate::{Error, Result};

/// Parse a CSS stylesheet string into a list of style rules.
///
/// Rules are returned in source order, each with an incrementing order value
/// for cascade tie-breaking. Rules that fail to parse are skipped with a
/// warning logged.
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut diagnostics = vec![];
    let rules = parse_rules(css, &mut diagnostics);
    for diagnostic in &diagnostics {
        tracing::warn!("CSS parse issue: {}", diagnostic);
    }
    Ok(rules)
}

/// Parse the declaration block of a `style` attribute.
pub fn parse_inline_style(css: &str) -> Result<StyleProperties> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut diagnostics = vec![];

    let properties = parse_declarations(&mut parser, &mut diagnostics)
        .map_err(|e| Error::parse(format!("{e:?}"), 1, 0))?;
    for diagnostic in &diagnostics {
        tracing::warn!("inline style parse issue: {}", diagnostic);
    }
    Ok(properties)
}

/// Shared parse loop: rules out, problems into `diagnostics`.
pub(crate) fn parse_rules(css: &str, diagnostics: &mut Vec<CssDiagnostic>) -> Vec<StyleRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let location = parser.current_source_location();
        match parse_rule(&mut parser, order, diagnostics) {
            Ok(rule) => {
                rules.push(rule);
                order += 1;
            }
            Err(error) => {
                diagnostics.push(CssDiagnostic {
                    line: location.line + 1,
                    column: location.column,
                    message: error.to_string(),
                });
                skip_to_next_rule(&mut parser);
            }
        }
    }

    rules
}

/// Parse a single rule: selector list `{` declarations `}`.
fn parse_rule(
    parser: &mut Parser<'_, '_>,
    order: u32,
    diagnostics: &mut Vec<CssDiagnostic>,
) -> Result<StyleRule> {
    let mut selector_error = None;
    let parsed: std::result::Result<Vec<Selector>, CssParseError<'_, ()>> = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            parse_selector_list(p).map_err(|e| {
                selector_error = Some(e);
                p.new_custom_error(())
            })
        });
    let selectors = match parsed {
        Ok(selectors) => selectors,
        Err(e) => {
            return Err(selector_error
                .unwrap_or_else(|| Error::parse(format!("failed to parse selector list: {e:?}"), 0, 0)));
        }
    };

    // Consume the block and parse its declarations.
    let properties = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block| parse_declarations(block, diagnostics))
            .map_err(|e: CssParseError<'_, ()>| {
                Error::parse(format!("failed to parse declaration block: {e:?}"), 0, 0)
            })?,
        _ => {
            return Err(Error::parse("expected '{' after selector", 0, 0));
        }
    };

    Ok(StyleRule::new(selectors, properties, order))
}

/// Parse a comma-separated selector list, up to the opening `{`.
///
/// Whitespace between compound selectors is significant (descendant
/// combinator), so this reads tokens including whitespace.
fn parse_selector_list(parser: &mut Parser<'_, '_>) -> Result<Vec<Selector>> {
    let mut selectors = vec![];
    let mut parts: Vec<SelectorPart> = vec![];
    let mut combinators: Vec<Combinator> = vec![];
    let mut current = SelectorPart::default();
    let mut pending: Option<Combinator> = None;

    fn begin_compound(
        current: &mut SelectorPart,
        parts: &mut Vec<SelectorPart>,
        combinators: &mut Vec<Combinator>,
        pending: &mut Option<Combinator>,
    ) {
        if let Some(combinator) = pending.take()
            && !current.is_empty()
        {
            parts.push(std::mem::take(current));
            combinators.push(combinator);
        }
    }

    fn finish_selector(
        current: &mut SelectorPart,
        parts: &mut Vec<SelectorPart>,
        combinators: &mut Vec<Combinator>,
        pending: &mut Option<Combinator>,
    ) -> Result<Selector> {
        *pending = None;
        if !current.is_empty() {
            parts.push(std::mem::take(current));
        }
        if parts.is_empty() {
            return Err(Error::invalid_selector("", "empty selector"));
        }
        Ok(Selector {
            parts: std::mem::take(parts),
            combinators: std::mem::take(combinators),
        })
    }

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match &token {
            Token::WhiteSpace(_) => {
                if !current.is_empty() && pending.is_none() {
                    pending = Some(Combinator::Descendant);
                }
            }

            Token::Comma => {
                let selector =
                    finish_selector(&mut current, &mut parts, &mut combinators, &mut pending)?;
                selectors.push(selector);
            }

            Token::Ident(name) => {
                begin_compound(&mut current, &mut parts, &mut combinators, &mut pending);
                if !current.is_empty() {
                    // A tag name cannot extend an existing compound.
                    return Err(Error::invalid_selector(
                        name.as_ref(),
                        "unexpected element name",
                    ));
                }
                current.type_selector = Some(TypeSelector::Tag(name.to_ascii_lowercase()));
            }

            Token::Delim('*') => {
                begin_compound(&mut current, &mut parts, &mut combinators, &mut pending);
                if current.type_selector.is_none() {
                    current.type_selector = Some(TypeSelector::Universal);
                }
            }

            Token::Delim('.') => {
                begin_compound(&mut current, &mut parts, &mut combinators, &mut pending);
                let class = parser
                    .expect_ident()
                    .map_err(|_| Error::invalid_selector(".", "expected class name after '.'"))?;
                current.classes.push(class.to_string());
            }

            Token::IDHash(id) => {
                begin_compound(&mut current, &mut parts, &mut combinators, &mut pending);
                current.id = Some(id.to_string());
            }

            Token::Colon => {
                begin_compound(&mut current, &mut parts, &mut combinators, &mut pending);
                current.pseudo_classes.push(parse_pseudo_class(parser)?);
            }

            Token::Delim('>') => {
                if current.is_empty() && parts.is_empty() {
                    return Err(Error::invalid_selector(">", "selector cannot start with a combinator"));
                }
                pending = Some(Combinator::Child);
            }

            Token::Delim('+') => {
                if current.is_empty() && parts.is_empty() {
                    return Err(Error::invalid_selector("+", "selector cannot start with a combinator"));
                }
                pending = Some(Combinator::AdjacentSibling);
            }

            Token::Delim('~') => {
                if current.is_empty() && parts.is_empty() {
                    return Err(Error::invalid_selector("~", "selector cannot start with a combinator"));
                }
                pending = Some(Combinator::GeneralSibling);
            }

            Token::AtKeyword(name) => {
                return Err(Error::invalid_selector(
                    format!("@{name}"),
                    "at-rules are not supported",
                ));
            }

            other => {
                return Err(Error::invalid_selector(
                    format!("{other:?}"),
                    "unexpected token in selector",
                ));
            }
        }
    }

    let selector = finish_selector(&mut current, &mut parts, &mut combinators, &mut pending)?;
    selectors.push(selector);

    Ok(selectors)
}

/// Parse the pseudo-class following a `:`.
fn parse_pseudo_class(parser: &mut Parser<'_, '_>) -> Result<PseudoClass> {
    let token = parser
        .next_including_whitespace()
        .map(|t| t.clone())
        .map_err(|_| Error::invalid_selector(":", "expected pseudo-class name after ':'"))?;

    match &token {
        Token::Ident(name) => PseudoClass::from_css(name)
            .ok_or_else(|| Error::invalid_selector(format!(":{name}"), "unknown pseudo-class")),

        Token::Function(name) if name.eq_ignore_ascii_case("nth-child") => {
            let expr = parser
                .parse_nested_block(|p| parse_nth_expr(p))
                .map_err(|_: CssParseError<'_, ()>| {
                    Error::invalid_selector(":nth-child", "invalid nth-child expression")
                })?;
            Ok(PseudoClass::NthChild(expr))
        }

        Token::Function(name) if name.eq_ignore_ascii_case("not") => {
            let inner = parser
                .parse_nested_block(|p| parse_simple_selector(p))
                .map_err(|_: CssParseError<'_, ()>| {
                    Error::invalid_selector(":not", "invalid :not() argument")
                })?;
            Ok(PseudoClass::Not(Box::new(inner)))
        }

        other => Err(Error::invalid_selector(
            format!("{other:?}"),
            "expected pseudo-class name after ':'",
        )),
    }
}

/// Parse a simple selector (for the `:not()` argument).
fn parse_simple_selector<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<SelectorPart, CssParseError<'i, ()>> {
    let mut part = SelectorPart::default();

    parser.skip_whitespace();

    while let Ok(token) = parser.next() {
        match token.clone() {
            Token::Ident(name) => {
                part.type_selector = Some(TypeSelector::Tag(name.to_ascii_lowercase()));
            }
            Token::Delim('*') => {
                part.type_selector = Some(TypeSelector::Universal);
            }
            Token::Delim('.') => {
                let class = parser.expect_ident()?;
                part.classes.push(class.to_string());
            }
            Token::IDHash(id) => {
                part.id = Some(id.to_string());
            }
            _ => break,
        }
    }

    Ok(part)
}

/// Parse an nth-child expression (e.g., "odd", "even", "3", "2n+1").
fn parse_nth_expr<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<NthExpr, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    if let Ok(token) = parser.next() {
        match token.clone() {
            Token::Ident(name) => match name.as_ref() {
                "odd" => return Ok(NthExpr::odd()),
                "even" => return Ok(NthExpr::even()),
                _ => {}
            },
            Token::Number {
                int_value: Some(n), ..
            } => {
                return Ok(NthExpr::new(0, n));
            }
            Token::Dimension {
                int_value: Some(a),
                unit,
                ..
            } if unit.eq_ignore_ascii_case("n") => {
                // Check for +B or -B
                parser.skip_whitespace();
                let b = if let Ok(Token::Number {
                    int_value: Some(b), ..
                }) = parser.next()
                {
                    *b
                } else {
                    0
                };
                return Ok(NthExpr::new(a, b));
            }
            _ => {}
        }
    }

    // Default to n (matches all)
    Ok(NthExpr::all())
}

/// Parse the declarations of one block.
///
/// Individual bad declarations are recorded and skipped, never fatal.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
    diagnostics: &mut Vec<CssDiagnostic>,
) -> std::result::Result<StyleProperties, CssParseError<'i, ()>> {
    let mut props = StyleProperties::default();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let location = parser.current_source_location();

        let property_name = match parser.expect_ident() {
            Ok(name) => name.to_ascii_lowercase(),
            Err(_) => {
                diagnostics.push(CssDiagnostic {
                    line: location.line + 1,
                    column: location.column,
                    message: "expected a property name".to_string(),
                });
                skip_declaration(parser);
                continue;
            }
        };

        if parser.expect_colon().is_err() {
            diagnostics.push(CssDiagnostic {
                line: location.line + 1,
                column: location.column,
                message: format!("expected ':' after '{property_name}'"),
            });
            skip_declaration(parser);
            continue;
        }

        if parse_property_value(parser, &property_name, &mut props).is_err() {
            diagnostics.push(CssDiagnostic {
                line: location.line + 1,
                column: location.column,
                message: format!("invalid value for property '{property_name}'"),
            });
            skip_declaration(parser);
            continue;
        }

        // Tolerate a trailing `!important`; priority is not modeled.
        let _ = parser.try_parse(|p| -> std::result::Result<(), CssParseError<'i, ()>> {
            match p.next()? {
                Token::Delim('!') => {}
                _ => return Err(p.new_custom_error(())),
            }
            let ident = p.expect_ident()?;
            if ident.eq_ignore_ascii_case("important") {
                Ok(())
            } else {
                Err(p.new_custom_error(()))
            }
        });

        // Skip optional semicolon
        let _ = parser.try_parse(|p| p.expect_semicolon());
    }

    Ok(props)
}

/// Parse a single property value into `props`.
fn parse_property_value<'i>(
    parser: &mut Parser<'i, '_>,
    name: &str,
    props: &mut StyleProperties,
) -> std::result::Result<(), CssParseError<'i, ()>> {
    parser.skip_whitespace();

    // CSS-wide keywords first; reset if the value is an ordinary ident.
    let state = parser.state();
    if let Ok(Token::Ident(ident)) = parser.next() {
        let keyword = match ident.as_ref().to_ascii_lowercase().as_str() {
            "inherit" => Some(StyleValue::Inherit),
            "initial" => Some(StyleValue::Initial),
            "unset" => Some(StyleValue::Unset),
            _ => None,
        };
        if let Some(keyword) = keyword
            && apply_wide_keyword(name, props, &keyword)
        {
            return Ok(());
        }
    }
    parser.reset(&state);

    match name {
        // === Box Model ===
        "margin" => {
            props.margin = StyleValue::Set(parse_edge_values(parser)?);
        }
        "margin-top" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.margin, |e| e.top = Some(length));
        }
        "margin-right" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.margin, |e| e.right = Some(length));
        }
        "margin-bottom" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.margin, |e| e.bottom = Some(length));
        }
        "margin-left" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.margin, |e| e.left = Some(length));
        }

        "padding" => {
            props.padding = StyleValue::Set(parse_edge_values(parser)?);
        }
        "padding-top" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.padding, |e| e.top = Some(length));
        }
        "padding-right" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.padding, |e| e.right = Some(length));
        }
        "padding-bottom" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.padding, |e| e.bottom = Some(length));
        }
        "padding-left" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.padding, |e| e.left = Some(length));
        }

        "border-bottom" => {
            let border = parse_border_shorthand(parser)?;
            update_border(&mut props.border_bottom, |b| b.apply(&border));
        }
        "border-bottom-width" => {
            let width = parse_length(parser)?;
            update_border(&mut props.border_bottom, |b| b.width = Some(width));
        }
        "border-bottom-style" => {
            let style = parse_keyword(parser, BorderLineStyle::from_css)?;
            update_border(&mut props.border_bottom, |b| b.style = Some(style));
        }
        "border-bottom-color" => {
            let color = parse_color(parser)?;
            update_border(&mut props.border_bottom, |b| b.color = Some(color));
        }

        "box-sizing" => {
            props.box_sizing = StyleValue::Set(parse_keyword(parser, BoxSizing::from_css)?);
        }

        // === Layout ===
        "display" => {
            props.display = StyleValue::Set(parse_keyword(parser, Display::from_css)?);
        }
        "position" => {
            props.position = StyleValue::Set(parse_keyword(parser, Position::from_css)?);
        }
        "top" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.inset, |e| e.top = Some(length));
        }
        "right" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.inset, |e| e.right = Some(length));
        }
        "bottom" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.inset, |e| e.bottom = Some(length));
        }
        "left" => {
            let length = parse_length(parser)?;
            update_edge(&mut props.inset, |e| e.left = Some(length));
        }
        "float" => {
            props.float = StyleValue::Set(parse_keyword(parser, Float::from_css)?);
        }
        "vertical-align" => {
            props.vertical_align = StyleValue::Set(parse_keyword(parser, VerticalAlign::from_css)?);
        }
        "width" => {
            props.width = StyleValue::Set(parse_length(parser)?);
        }
        "height" => {
            props.height = StyleValue::Set(parse_length(parser)?);
        }

        // === Background ===
        "background-color" => {
            props.background_color = StyleValue::Set(parse_color(parser)?);
        }
        "background-image" => {
            props.background_image = StyleValue::Set(parse_image(parser)?);
        }
        "background-position" => {
            props.background_position = StyleValue::Set(parse_background_position(parser)?);
        }
        "background-size" => {
            props.background_size = StyleValue::Set(parse_keyword(parser, BackgroundSize::from_css)?);
        }
        "background-repeat" => {
            props.background_repeat =
                StyleValue::Set(parse_keyword(parser, BackgroundRepeat::from_css)?);
        }
        "background" => {
            parse_background_shorthand(parser, props)?;
        }

        // === Typography ===
        "color" => {
            props.color = StyleValue::Set(parse_color(parser)?);
        }
        "font-family" => {
            props.font_family = StyleValue::Set(parse_font_family(parser)?);
        }
        "font-size" => {
            props.font_size = StyleValue::Set(parse_length(parser)?);
        }
        "font-weight" => {
            props.font_weight = StyleValue::Set(parse_font_weight(parser)?);
        }
        "font-style" => {
            props.font_style = StyleValue::Set(parse_keyword(parser, FontStyle::from_css)?);
        }
        "line-height" => {
            if let Ok(Token::Number { value, .. }) = parser.next() {
                props.line_height = StyleValue::Set(*value);
            }
        }
        "text-align" => {
            props.text_align = StyleValue::Set(parse_keyword(parser, TextAlign::from_css)?);
        }
        "text-decoration" | "text-decoration-line" => {
            props.text_decoration = StyleValue::Set(parse_keyword(parser, TextDecoration::from_css)?);
        }

        _ => {
            tracing::debug!("unknown CSS property: {}", name);
            skip_declaration(parser);
        }
    }

    Ok(())
}

/// Set a property to a CSS-wide keyword; false if the property is unknown.
fn apply_wide_keyword(
    name: &str,
    props: &mut StyleProperties,
    keyword: &StyleValue<()>,
) -> bool {
    macro_rules! set {
        ($field:ident) => {{
            props.$field = match keyword {
                StyleValue::Inherit => StyleValue::Inherit,
                StyleValue::Initial => StyleValue::Initial,
                _ => StyleValue::Unset,
            };
            true
        }};
    }

    match name {
        "margin" => set!(margin),
        "padding" => set!(padding),
        "border-bottom" => set!(border_bottom),
        "box-sizing" => set!(box_sizing),
        "display" => set!(display),
        "position" => set!(position),
        "float" => set!(float),
        "vertical-align" => set!(vertical_align),
        "width" => set!(width),
        "height" => set!(height),
        "background-color" => set!(background_color),
        "background-image" => set!(background_image),
        "background-position" => set!(background_position),
        "background-size" => set!(background_size),
        "background-repeat" => set!(background_repeat),
        "color" => set!(color),
        "font-family" => set!(font_family),
        "font-size" => set!(font_size),
        "font-weight" => set!(font_weight),
        "font-style" => set!(font_style),
        "line-height" => set!(line_height),
        "text-align" => set!(text_align),
        "text-decoration" => set!(text_decoration),
        _ => false,
    }
}

fn update_edge<F: FnOnce(&mut EdgeValues)>(value: &mut StyleValue<EdgeValues>, f: F) {
    let mut edges = value.as_set().copied().unwrap_or_default();
    f(&mut edges);
    *value = StyleValue::Set(edges);
}

fn update_border<F: FnOnce(&mut Border)>(value: &mut StyleValue<Border>, f: F) {
    let mut border = value.as_set().copied().unwrap_or_default();
    f(&mut border);
    *value = StyleValue::Set(border);
}

/// Parse a length value.
fn parse_length<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Length, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?;

    #[allow(clippy::redundant_guards)] // CSS `0` is a zero length regardless of unit
    match token.clone() {
        Token::Number { value, .. } if value == 0.0 => Ok(Length::Zero),
        Token::Dimension { value, unit, .. } => match unit.as_ref() {
            "px" => Ok(Length::Px(value)),
            "em" => Ok(Length::Em(value)),
            "rem" => Ok(Length::Rem(value)),
            _ => Ok(Length::Px(value)), // Default to px
        },
        Token::Percentage { unit_value, .. } => Ok(Length::Percent(unit_value * 100.0)),
        Token::Ident(s) if s.eq_ignore_ascii_case("auto") => Ok(Length::Auto),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse edge values (1-4 values for margin/padding shorthand).
fn parse_edge_values<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<EdgeValues, CssParseError<'i, ()>> {
    let mut values = vec![];

    while values.len() < 4 {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // Check for end of values (semicolon or important marker)
        let state = parser.state();
        if let Ok(Token::Semicolon) | Ok(Token::Delim('!')) = parser.next() {
            parser.reset(&state);
            break;
        }
        parser.reset(&state);

        match parse_length(parser) {
            Ok(len) => values.push(len),
            Err(_) => break,
        }
    }

    match values.len() {
        1 => Ok(EdgeValues::uniform(values[0])),
        2 => Ok(EdgeValues::symmetric(values[0], values[1])),
        3 => Ok(EdgeValues::new(values[0], values[1], values[2], values[1])),
        4 => Ok(EdgeValues::new(values[0], values[1], values[2], values[3])),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a color value.
fn parse_color<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Color, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?;

    match token.clone() {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Color::from_hex(hash.as_ref()).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => {
            Color::from_name(name.as_ref()).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                skip_component_separator(p);
                let g = parse_color_component(p)?;
                skip_component_separator(p);
                let b = parse_color_component(p)?;
                skip_component_separator(p);
                let a = match parse_alpha_component(p) {
                    Ok(a) => a,
                    Err(_) => 255,
                };
                Ok(Color::rgba(r, g, b, a))
            })
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn skip_component_separator(parser: &mut Parser<'_, '_>) {
    let _ = parser.try_parse(|p| p.expect_comma());
}

fn parse_color_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<u8, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0).round() as u8),
        Token::Percentage { unit_value, .. } => {
            Ok((unit_value * 255.0).clamp(0.0, 255.0).round() as u8)
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<u8, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok((value.clamp(0.0, 1.0) * 255.0).round() as u8),
        Token::Percentage { unit_value, .. } => {
            Ok((unit_value * 255.0).clamp(0.0, 255.0).round() as u8)
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a keyword-valued property via its `from_css` function.
fn parse_keyword<'i, T>(
    parser: &mut Parser<'i, '_>,
    from_css: impl Fn(&str) -> Option<T>,
) -> std::result::Result<T, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    let token = parser.next()?.clone();
    if let Token::Ident(name) = &token
        && let Some(value) = from_css(name)
    {
        Ok(value)
    } else {
        Err(parser.new_custom_error(()))
    }
}

/// Parse a `background-image` value: `none` or `url(...)`.
fn parse_image<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<BackgroundImage, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    match parser.next()?.clone() {
        Token::UnquotedUrl(url) => Ok(BackgroundImage::Url(url.to_string())),
        Token::Function(name) if name.eq_ignore_ascii_case("url") => parser.parse_nested_block(|p| {
            p.skip_whitespace();
            let url = p.expect_string()?.to_string();
            Ok(BackgroundImage::Url(url))
        }),
        Token::Ident(name) if name.eq_ignore_ascii_case("none") => Ok(BackgroundImage::None),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse `background-position` anchor keywords (lengths are accepted but
/// only keyword anchors are recorded).
fn parse_background_position<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<BackgroundPosition, CssParseError<'i, ()>> {
    let mut horizontal = None;
    let mut vertical = None;
    let mut seen = 0usize;

    while seen < 2 {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let state = parser.state();
        match parser.next() {
            Ok(Token::Ident(name)) => match name.to_ascii_lowercase().as_str() {
                "left" => horizontal = Some(HorizontalAnchor::Left),
                "right" => horizontal = Some(HorizontalAnchor::Right),
                "top" => vertical = Some(VerticalAnchor::Top),
                "bottom" => vertical = Some(VerticalAnchor::Bottom),
                "center" => {
                    if horizontal.is_none() {
                        horizontal = Some(HorizontalAnchor::Center);
                    } else {
                        vertical = Some(VerticalAnchor::Center);
                    }
                }
                _ => {
                    parser.reset(&state);
                    break;
                }
            },
            // Length offsets keep the default anchor for that axis.
            Ok(Token::Dimension { .. }) | Ok(Token::Percentage { .. }) | Ok(Token::Number { .. }) => {}
            _ => {
                parser.reset(&state);
                break;
            }
        }
        seen += 1;
    }

    if seen == 0 {
        return Err(parser.new_custom_error(()));
    }

    Ok(BackgroundPosition {
        horizontal: horizontal.unwrap_or_default(),
        vertical: vertical.unwrap_or_default(),
    })
}

/// Parse a border shorthand (`<width> <style> <color>` in any order).
fn parse_border_shorthand<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Border, CssParseError<'i, ()>> {
    let mut border = Border::default();
    let mut matched_any = false;

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let state = parser.state();
        if let Ok(Token::Semicolon) | Ok(Token::Delim('!')) = parser.next() {
            parser.reset(&state);
            break;
        }
        parser.reset(&state);

        let state = parser.state();
        if let Ok(width) = parse_length(parser) {
            border.width = Some(width);
            matched_any = true;
            continue;
        }
        parser.reset(&state);

        let state = parser.state();
        if let Ok(style) = parse_keyword(parser, BorderLineStyle::from_css) {
            border.style = Some(style);
            matched_any = true;
            continue;
        }
        parser.reset(&state);

        let state = parser.state();
        if let Ok(color) = parse_color(parser) {
            border.color = Some(color);
            matched_any = true;
            continue;
        }
        parser.reset(&state);

        break;
    }

    if matched_any {
        Ok(border)
    } else {
        Err(parser.new_custom_error(()))
    }
}

/// Parse the `background` shorthand: any of color, image, repeat, and
/// position keywords, in any order. A `/ <size>` segment after a position
/// records the size keyword.
fn parse_background_shorthand<'i>(
    parser: &mut Parser<'i, '_>,
    props: &mut StyleProperties,
) -> std::result::Result<(), CssParseError<'i, ()>> {
    let mut horizontal = None;
    let mut vertical = None;
    let mut matched_any = false;

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let state = parser.state();
        if let Ok(Token::Semicolon) | Ok(Token::Delim('!')) = parser.next() {
            parser.reset(&state);
            break;
        }
        parser.reset(&state);

        let state = parser.state();
        if let Ok(color) = parse_color(parser) {
            props.background_color = StyleValue::Set(color);
            matched_any = true;
            continue;
        }
        parser.reset(&state);

        let state = parser.state();
        if let Ok(image) = parse_image(parser) {
            props.background_image = StyleValue::Set(image);
            matched_any = true;
            continue;
        }
        parser.reset(&state);

        let state = parser.state();
        if let Ok(repeat) = parse_keyword(parser, BackgroundRepeat::from_css) {
            props.background_repeat = StyleValue::Set(repeat);
            matched_any = true;
            continue;
        }
        parser.reset(&state);

        // `/ <size>` after the position
        let state = parser.state();
        if let Ok(Token::Delim('/')) = parser.next() {
            if let Ok(size) = parse_keyword(parser, BackgroundSize::from_css) {
                props.background_size = StyleValue::Set(size);
                matched_any = true;
                continue;
            }
        }
        parser.reset(&state);

        // Position anchor keywords
        let state = parser.state();
        if let Ok(Token::Ident(name)) = parser.next() {
            let recognized = match name.to_ascii_lowercase().as_str() {
                "left" => {
                    horizontal = Some(HorizontalAnchor::Left);
                    true
                }
                "right" => {
                    horizontal = Some(HorizontalAnchor::Right);
                    true
                }
                "top" => {
                    vertical = Some(VerticalAnchor::Top);
                    true
                }
                "bottom" => {
                    vertical = Some(VerticalAnchor::Bottom);
                    true
                }
                "center" => {
                    if horizontal.is_none() {
                        horizontal = Some(HorizontalAnchor::Center);
                    } else {
                        vertical = Some(VerticalAnchor::Center);
                    }
                    true
                }
                _ => false,
            };
            if recognized {
                matched_any = true;
                continue;
            }
        }
        parser.reset(&state);

        break;
    }

    if horizontal.is_some() || vertical.is_some() {
        props.background_position = StyleValue::Set(BackgroundPosition {
            horizontal: horizontal.unwrap_or_default(),
            vertical: vertical.unwrap_or_default(),
        });
    }

    if matched_any {
        Ok(())
    } else {
        Err(parser.new_custom_error(()))
    }
}

/// Parse a font-family stack. Unquoted multi-word names are joined.
fn parse_font_family<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<FontStack, CssParseError<'i, ()>> {
    fn flush(words: &mut Vec<String>, families: &mut Vec<FontFamily>) {
        if !words.is_empty() {
            families.push(FontFamily::from_css(&words.join(" ")));
            words.clear();
        }
    }

    let mut families = vec![];
    let mut words: Vec<String> = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let state = parser.state();
        match parser.next()?.clone() {
            Token::Ident(name) => words.push(name.to_string()),
            Token::QuotedString(name) => {
                flush(&mut words, &mut families);
                families.push(FontFamily::Name(name.to_string()));
            }
            Token::Comma => flush(&mut words, &mut families),
            _ => {
                parser.reset(&state);
                break;
            }
        }
    }
    flush(&mut words, &mut families);

    if families.is_empty() {
        return Err(parser.new_custom_error(()));
    }

    Ok(FontStack(families))
}

/// Parse a font-weight.
fn parse_font_weight<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<FontWeight, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    match parser.next()?.clone() {
        Token::Number {
            int_value: Some(n), ..
        } if (1..=1000).contains(&n) => Ok(FontWeight::new(n as u16)),
        Token::Ident(name) => {
            FontWeight::from_css(name.as_ref()).ok_or_else(|| parser.new_custom_error(()))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    let mut depth = 0;
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                depth += 1;
                if depth == 1 {
                    // Skip block contents
                    let _ = parser.parse_nested_block(|p| {
                        while !p.is_exhausted() {
                            let _ = p.next();
                        }
                        Ok::<_, CssParseError<'_, ()>>(())
                    });
                    return;
                }
            }
            Ok(Token::CloseCurlyBracket) => {
                if depth > 0 {
                    depth -= 1;
                }
                if depth == 0 {
                    return;
                }
            }
            Err(_) => return,
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            Ok(Token::CloseCurlyBracket) => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_rule() {
        let css = "nav { color: white; }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector_text(), "nav");
        assert_eq!(rules[0].properties.color.as_set(), Some(&Color::WHITE));
    }

    #[test]
    fn parse_class_selector() {
        let css = ".searchBox { float: right; }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 1);
        assert!(
            rules[0].selectors[0].parts[0]
                .classes
                .contains(&"searchBox".to_string())
        );
        assert_eq!(rules[0].properties.float.as_set(), Some(&Float::Right));
    }

    #[test]
    fn parse_multiple_rules() {
        let css = r#"
            nav { color: white; }
            footer { color: gray; }
        "#;
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].order, 0);
        assert_eq!(rules[1].order, 1);
    }

    #[test]
    fn parse_selector_group() {
        let css = "h1, h2 { color: #4b2e83; font-weight: 900; }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selectors.len(), 2);
        assert_eq!(rules[0].selector_text(), "h1, h2");
        assert_eq!(
            rules[0].properties.font_weight.as_set(),
            Some(&FontWeight::BLACK)
        );
    }

    #[test]
    fn parse_pseudo_class_group() {
        let css = "a:hover, a:focus, a:active { color: #b7a57a; }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selectors.len(), 3);
        assert!(rules[0].has_pseudo_class(&PseudoClass::Hover));
        assert!(rules[0].has_pseudo_class(&PseudoClass::Focus));
        assert!(rules[0].has_pseudo_class(&PseudoClass::Active));
        assert!(rules[0].selectors[0].is_dynamic());
    }

    #[test]
    fn parse_descendant_selector() {
        let css = "nav ul li { display: inline; }";
        let rules = parse_css(css).unwrap();

        let selector = &rules[0].selectors[0];
        assert_eq!(selector.parts.len(), 3);
        assert_eq!(
            selector.combinators,
            vec![Combinator::Descendant, Combinator::Descendant]
        );
    }

    #[test]
    fn parse_child_selector() {
        let css = "nav > ul { padding: 0; }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules[0].selectors[0].combinators, vec![Combinator::Child]);
    }

    #[test]
    fn descendant_class_selector_keeps_parts_apart() {
        let css = "nav .logo { padding: 0 1em; }";
        let rules = parse_css(css).unwrap();

        let selector = &rules[0].selectors[0];
        assert_eq!(selector.parts.len(), 2);
        assert_eq!(selector.to_string(), "nav .logo");

        // No whitespace means a compound selector instead.
        let css = "span.logo { padding: 0 1em; }";
        let rules = parse_css(css).unwrap();
        assert_eq!(rules[0].selectors[0].parts.len(), 1);
    }

    #[test]
    fn parse_edge_values_shorthand() {
        let css = "nav ul { margin: 0; padding: 0 1em; }";
        let rules = parse_css(css).unwrap();

        let margin = rules[0].properties.margin.as_set().unwrap();
        assert_eq!(margin.uniform_value(), Some(Length::Zero));

        let padding = rules[0].properties.padding.as_set().unwrap();
        assert_eq!(padding.top, Some(Length::Zero));
        assert_eq!(padding.left, Some(Length::Em(1.0)));
        assert_eq!(padding.right, Some(Length::Em(1.0)));
    }

    #[test]
    fn longhand_after_shorthand_merges() {
        let css = "nav ul { padding: 0; padding-top: .5rem; }";
        let rules = parse_css(css).unwrap();

        let padding = rules[0].properties.padding.as_set().unwrap();
        assert_eq!(padding.top, Some(Length::Rem(0.5)));
        assert_eq!(padding.right, Some(Length::Zero));
        assert_eq!(padding.bottom, Some(Length::Zero));
        assert_eq!(padding.left, Some(Length::Zero));
    }

    #[test]
    fn parse_color_formats() {
        let css = "nav { background-color: #4b2e83; }";
        let rules = parse_css(css).unwrap();
        assert_eq!(
            rules[0].properties.background_color.as_set(),
            Some(&Color::rgb(0x4b, 0x2e, 0x83))
        );

        let css = "nav a { color: white; }";
        let rules = parse_css(css).unwrap();
        assert_eq!(rules[0].properties.color.as_set(), Some(&Color::WHITE));

        let css = "p { color: rgb(83, 83, 83); }";
        let rules = parse_css(css).unwrap();
        assert_eq!(
            rules[0].properties.color.as_set(),
            Some(&Color::rgb(83, 83, 83))
        );
    }

    #[test]
    fn parse_border_bottom_shorthand() {
        let css = "a:hover { border-bottom: .6rem solid #b7a57a; }";
        let rules = parse_css(css).unwrap();

        let border = rules[0].properties.border_bottom.as_set().unwrap();
        assert_eq!(border.width, Some(Length::Rem(0.6)));
        assert_eq!(border.style, Some(BorderLineStyle::Solid));
        assert_eq!(border.color, Some(Color::rgb(0xb7, 0xa5, 0x7a)));
    }

    #[test]
    fn parse_font_family_stack() {
        let css = "body { font-family: 'Open Sans', Helvetica Neue, sans-serif; }";
        let rules = parse_css(css).unwrap();

        let stack = rules[0].properties.font_family.as_set().unwrap();
        assert_eq!(
            stack.0,
            vec![
                FontFamily::Name("Open Sans".to_string()),
                FontFamily::Name("Helvetica Neue".to_string()),
                FontFamily::SansSerif,
            ]
        );
    }

    #[test]
    fn parse_background_longhands() {
        let css = ".logo {\n\
             background-image: url('../img/ischool-symbol-white.png');\n\
             background-position: left center;\n\
             background-size: contain;\n\
             background-repeat: no-repeat;\n\
        }";
        let rules = parse_css(css).unwrap();
        let props = &rules[0].properties;

        assert_eq!(
            props.background_image.as_set(),
            Some(&BackgroundImage::Url("../img/ischool-symbol-white.png".to_string()))
        );
        assert_eq!(
            props.background_position.as_set().map(|p| p.horizontal),
            Some(HorizontalAnchor::Left)
        );
        assert_eq!(props.background_size.as_set(), Some(&BackgroundSize::Contain));
        assert_eq!(
            props.background_repeat.as_set(),
            Some(&BackgroundRepeat::NoRepeat)
        );
    }

    #[test]
    fn parse_background_shorthand_parts() {
        let css = ".logo { background: url('logo.png') no-repeat left center / contain; }";
        let rules = parse_css(css).unwrap();
        let props = &rules[0].properties;

        assert_eq!(
            props.background_image.as_set(),
            Some(&BackgroundImage::Url("logo.png".to_string()))
        );
        assert_eq!(
            props.background_repeat.as_set(),
            Some(&BackgroundRepeat::NoRepeat)
        );
        assert_eq!(
            props.background_position.as_set().map(|p| p.horizontal),
            Some(HorizontalAnchor::Left)
        );
        assert_eq!(props.background_size.as_set(), Some(&BackgroundSize::Contain));
    }

    #[test]
    fn parse_inset_longhands() {
        let css = "nav { position: fixed; top: 0; left: 0; width: 100%; }";
        let rules = parse_css(css).unwrap();
        let props = &rules[0].properties;

        assert_eq!(props.position.as_set(), Some(&Position::Fixed));
        let inset = props.inset.as_set().unwrap();
        assert_eq!(inset.top, Some(Length::Zero));
        assert_eq!(inset.left, Some(Length::Zero));
        assert_eq!(inset.right, None);
        assert_eq!(props.width.as_set(), Some(&Length::Percent(100.0)));
    }

    #[test]
    fn unknown_property_is_skipped() {
        let css = "nav { grid-template-areas: \"a b\"; color: white; }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].properties.color.as_set(), Some(&Color::WHITE));
    }

    #[test]
    fn bad_rule_is_recovered() {
        let css = "nav { color: white; }\n@media screen { body { color: red; } }\nfooter { color: gray; }";
        let rules = parse_css(css).unwrap();

        // The at-rule is skipped; surrounding rules survive.
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector_text(), "nav");
        assert_eq!(rules[1].selector_text(), "footer");
    }

    #[test]
    fn wide_keywords() {
        let css = "p { color: inherit; margin: initial; padding: unset; }";
        let rules = parse_css(css).unwrap();
        let props = &rules[0].properties;

        assert_eq!(props.color, StyleValue::Inherit);
        assert_eq!(props.margin, StyleValue::Initial);
        assert_eq!(props.padding, StyleValue::Unset);
    }

    #[test]
    fn important_marker_is_tolerated() {
        let css = "nav { position: fixed !important; top: 0; }";
        let rules = parse_css(css).unwrap();

        let props = &rules[0].properties;
        assert_eq!(props.position.as_set(), Some(&Position::Fixed));
        assert_eq!(props.inset.as_set().and_then(|i| i.top), Some(Length::Zero));
    }

    #[test]
    fn inline_style_parsing() {
        let props = parse_inline_style("color: #535353; padding: .75rem").unwrap();

        assert_eq!(props.color.as_set(), Some(&Color::rgb(0x53, 0x53, 0x53)));
        assert_eq!(
            props.padding.as_set().and_then(|p| p.uniform_value()),
            Some(Length::Rem(0.75))
        );
    }

    #[test]
    fn nth_child_expression() {
        let css = "li:nth-child(2n+1) { color: gray; }";
        let rules = parse_css(css).unwrap();

        let part = &rules[0].selectors[0].parts[0];
        assert_eq!(
            part.pseudo_classes,
            vec![PseudoClass::NthChild(NthExpr::new(2, 1))]
        );
    }
}
