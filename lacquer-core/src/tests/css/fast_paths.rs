use bumpalo::Bump;
use cssparser::{Parser, ParserInput};

use super::util::*;
use crate::css::fast_paths;
use crate::css::parser::ValueParser;

/// Runs the grammar tier directly, bypassing the recognizers.
fn parse_via_grammar(id: PropertyId, text: &str, mode: ParseMode) -> Option<Value> {
    let arena = Bump::new();
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value_parser = ValueParser::new(mode, &arena);
    let mut staged = value_parser.parse_declaration(&mut parser, id).ok()?;
    (staged.len() == 1).then(|| staged.pop().expect("checked").1)
}

#[test]
fn simple_length_px() {
    let value = assert_roundtrip(PropertyId::Width, "10px");
    let primitive = value.as_primitive().expect("primitive");
    assert_eq!(primitive.unit(), UnitKind::Px);
    assert_eq!(primitive.number_value(), Some(10.0));
    assert_eq!(value.css_text(), "10px");
}

#[test]
fn simple_length_percent() {
    let value = parse_one(PropertyId::Height, "50%").expect("percent");
    let primitive = value.as_primitive().expect("primitive");
    assert_eq!(primitive.unit(), UnitKind::Percentage);
    assert_eq!(primitive.number_value(), Some(50.0));
}

#[test]
fn negative_number_policy() {
    // margin-left accepts negative lengths.
    let margin = parse_one(PropertyId::MarginLeft, "-5px").expect("negative margin");
    assert_eq!(margin.as_primitive().and_then(PrimitiveValue::number_value), Some(-5.0));

    // width rejects them in the fast path, and the grammar tier rejects them
    // too, so the whole declaration fails.
    assert!(parse_one(PropertyId::Width, "-5px").is_none());
    assert!(parse_via_grammar(PropertyId::Width, "-5px", ParseMode::Standard).is_none());
}

#[test]
fn unitless_lengths() {
    // Zero is legal everywhere and canonicalizes to px.
    let zero = parse_one(PropertyId::Width, "0").expect("bare zero");
    assert_eq!(zero.as_primitive().map(PrimitiveValue::unit), Some(UnitKind::Px));

    // Nonzero bare numbers are a quirks-mode relaxation.
    assert!(parse_one(PropertyId::Width, "5").is_none());
    let quirky = parse_one_quirks(PropertyId::MarginLeft, "5").expect("quirks length");
    let primitive = quirky.as_primitive().expect("primitive");
    assert_eq!(primitive.unit(), UnitKind::Px);
    assert!(primitive.is_quirk());

    // The fast path and the grammar tier agree on the quirky result.
    let via_grammar = parse_via_grammar(PropertyId::MarginLeft, "5", ParseMode::Quirks).expect("grammar quirks length");
    assert_eq!(quirky, via_grammar);
}

#[test]
fn color_fast_path_matches_grammar() {
    for text in ["red", "#f00", "#ff0000", "rgb(255, 0, 0)", "rgba(255, 0, 0, 0.5)", "hsl(0, 100%, 50%)"] {
        let fast = fast_paths::parse_color_value(PropertyId::Color, text, ParseMode::Standard)
            .unwrap_or_else(|| panic!("fast path rejected `{text}`"));
        let grammar = parse_via_grammar(PropertyId::Color, text, ParseMode::Standard)
            .unwrap_or_else(|| panic!("grammar rejected `{text}`"));
        assert_eq!(fast, grammar, "tiers disagree on `{text}`");
    }
}

#[test]
fn currentcolor_stays_a_keyword() {
    let value = parse_one(PropertyId::Color, "currentcolor").expect("currentcolor");
    assert_eq!(value.ident_value(), Some(ValueId::CurrentColor));
    assert!(value.as_primitive().and_then(PrimitiveValue::color_value).is_none());
}

#[test]
fn quirky_hex_colors() {
    // `#`-less hex needs quirks mode and a legacy color property.
    assert!(parse_one(PropertyId::Color, "ff0000").is_none());
    let quirky = parse_one_quirks(PropertyId::Color, "ff0000").expect("quirks hex");
    assert_eq!(
        quirky.as_primitive().and_then(PrimitiveValue::color_value),
        Some(Rgba::opaque(255, 0, 0))
    );
    // outline-color is not part of the legacy set.
    assert!(parse_one_quirks(PropertyId::OutlineColor, "ff0000").is_none());
}

#[test]
fn keyword_domains() {
    assert!(is_valid_keyword_value(PropertyId::Display, ValueId::InlineBlock));
    assert!(is_valid_keyword_value(PropertyId::Display, ValueId::None));
    assert!(!is_valid_keyword_value(PropertyId::Display, ValueId::Sub));
    assert!(!is_valid_keyword_value(PropertyId::Display, ValueId::Auto));

    assert!(parse_one(PropertyId::Display, "inline-block").is_some());
    assert!(parse_one(PropertyId::Display, "sub").is_none());
    assert!(parse_one(PropertyId::Position, "sticky").is_some());
    assert!(parse_one(PropertyId::Visibility, "collapse").is_some());
    assert!(parse_one(PropertyId::Visibility, "inline").is_none());
}

#[test]
fn display_range_check() {
    // The display family is validated as a contiguous range plus `none`.
    for id in [
        ValueId::Inline,
        ValueId::Block,
        ValueId::ListItem,
        ValueId::Table,
        ValueId::TableCell,
        ValueId::Flex,
        ValueId::InlineGrid,
        ValueId::None,
    ] {
        assert!(is_valid_keyword_value(PropertyId::Display, id), "{id:?} should be valid");
    }
}

#[test]
fn css_wide_keywords() {
    assert_eq!(parse_one(PropertyId::Width, "initial"), Some(Value::Initial));
    assert_eq!(parse_one(PropertyId::Width, "inherit"), Some(Value::Inherit));
    assert_eq!(parse_one(PropertyId::BoxShadow, "initial"), Some(Value::Initial));

    // Shorthands expand instead: every longhand receives the keyword.
    let decls = parse_decls(PropertyId::Margin, "inherit").expect("margin: inherit");
    assert_eq!(decls.len(), 4);
    assert_eq!(decls.value(PropertyId::MarginTop), Some(&Value::Inherit));
    assert_eq!(decls.value(PropertyId::MarginLeft), Some(&Value::Inherit));
}

#[test]
fn recognizers_fail_cleanly() {
    // Failures never commit partial state.
    let mut decls = DeclarationSet::new();
    assert!(!parse_value(&mut decls, PropertyId::Width, "12parsecs", false, ParseMode::Standard));
    assert!(!parse_value(&mut decls, PropertyId::Color, "notacolor", false, ParseMode::Standard));
    assert!(decls.is_empty());
}
