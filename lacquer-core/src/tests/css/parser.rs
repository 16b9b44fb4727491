use super::util::*;
use crate::css::parser::parse_simple_transform;

#[test]
fn shadow_roundtrip() {
    let value = assert_roundtrip(PropertyId::BoxShadow, "1px 2px 3px 4px rgb(10, 20, 30)");
    let shadow = value.as_shadow().expect("shadow");
    assert_eq!(shadow.x.number_value(), Some(1.0));
    assert_eq!(shadow.y.number_value(), Some(2.0));
    assert_eq!(shadow.blur.as_ref().and_then(PrimitiveValue::number_value), Some(3.0));
    assert_eq!(shadow.spread.as_ref().and_then(PrimitiveValue::number_value), Some(4.0));
    assert!(!shadow.inset);

    assert_roundtrip(PropertyId::BoxShadow, "inset 1px 2px");
    assert_roundtrip(PropertyId::BoxShadow, "1px 2px red, 3px 4px 5px blue");
    assert_roundtrip(PropertyId::TextShadow, "1px 2px 3px rgb(0, 0, 0)");
}

#[test]
fn shadow_component_order_is_free() {
    // Color and inset may appear anywhere around the lengths.
    let leading = parse_one(PropertyId::BoxShadow, "red 1px 2px").expect("leading color");
    let trailing = parse_one(PropertyId::BoxShadow, "1px 2px red").expect("trailing color");
    assert_eq!(leading, trailing);

    let inset_first = parse_one(PropertyId::BoxShadow, "inset 1px 2px").expect("inset first");
    let inset_last = parse_one(PropertyId::BoxShadow, "1px 2px inset").expect("inset last");
    assert_eq!(inset_first, inset_last);
}

#[test]
fn shadow_rejections() {
    // Too few lengths, negative blur, spread on text-shadow.
    assert!(parse_one(PropertyId::BoxShadow, "1px").is_none());
    assert!(parse_one(PropertyId::BoxShadow, "1px 2px -3px").is_none());
    assert!(parse_one(PropertyId::TextShadow, "1px 2px 3px 4px").is_none());
    assert!(parse_one(PropertyId::TextShadow, "inset 1px 2px").is_none());
    assert_eq!(parse_one(PropertyId::BoxShadow, "none"), Some(Value::ident(ValueId::None)));
}

#[test]
fn transform_roundtrip() {
    let value = assert_roundtrip(PropertyId::Transform, "translate(10px, 20px) rotate(45deg)");
    let list = value.as_list().expect("transform list");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].as_transform().map(|t| t.op), Some(TransformOp::Translate));
    assert_eq!(list[1].as_transform().map(|t| t.op), Some(TransformOp::Rotate));

    assert_roundtrip(PropertyId::Transform, "scale(2)");
    assert_roundtrip(PropertyId::Transform, "scale(2, 3)");
    assert_roundtrip(PropertyId::Transform, "skew(10deg, 20deg)");
    assert_roundtrip(PropertyId::Transform, "matrix(1, 0, 0, 1, 10, 20)");
    assert_roundtrip(PropertyId::Transform, "translate3d(1px, 2px, 3px)");
    assert_roundtrip(PropertyId::Transform, "perspective(100px)");
}

#[test]
fn transform_argument_validation() {
    // Wrong arity and wrong units must fail whole.
    assert!(parse_one(PropertyId::Transform, "matrix(1, 2, 3)").is_none());
    assert!(parse_one(PropertyId::Transform, "rotate(10px)").is_none());
    assert!(parse_one(PropertyId::Transform, "scale(2px)").is_none());
    assert!(parse_one(PropertyId::Transform, "translate3d(1px, 2px)").is_none());
    assert!(parse_one(PropertyId::Transform, "perspective(-5px)").is_none());
    assert!(parse_one(PropertyId::Transform, "frobnicate(1)").is_none());
}

#[test]
fn simple_transform_shortcut_matches_grammar() {
    // The character-level shortcut must be indistinguishable from the full
    // grammar on the inputs it accepts.
    for text in [
        "translate(10px, 20px)",
        "translate(10px)",
        "translateX(5px)",
        "translateY(0)",
        "translateZ(3px)",
        "translate3d(1px, 2px, 3px)",
        "scale3d(1, 2, 3)",
        "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)",
        "translate(10px) translateX(2px)",
    ] {
        let shortcut = parse_simple_transform(text).unwrap_or_else(|| panic!("shortcut rejected `{text}`"));
        let grammar = parse_one(PropertyId::Transform, &format!("/**/{text}")).unwrap_or_else(|| panic!("grammar rejected `{text}`"));
        assert_eq!(shortcut, grammar, "tiers disagree on `{text}`");
    }

    // Anything else bails to the grammar tier.
    assert!(parse_simple_transform("rotate(45deg)").is_none());
    assert!(parse_simple_transform("translate(50%)").is_none());
    assert!(parse_simple_transform("translate(10px").is_none());
}

#[test]
fn timing_function_roundtrip() {
    let bezier = assert_roundtrip(PropertyId::AnimationTimingFunction, "cubic-bezier(0.1, 0.2, 0.3, 0.4)");
    assert!(matches!(
        bezier.as_timing_function(),
        Some(TimingFunction::CubicBezier { .. })
    ));

    assert_roundtrip(PropertyId::AnimationTimingFunction, "steps(4, start)");
    assert_roundtrip(PropertyId::AnimationTimingFunction, "steps(2)");
    assert_roundtrip(PropertyId::TransitionTimingFunction, "ease-in-out");
    assert_roundtrip(PropertyId::AnimationTimingFunction, "linear, steps(3, start)");

    // The x coordinates parametrize time and must stay in [0, 1].
    assert!(parse_one(PropertyId::AnimationTimingFunction, "cubic-bezier(2, 0, 0.5, 1)").is_none());
    assert!(parse_one(PropertyId::AnimationTimingFunction, "steps(0)").is_none());
    assert!(parse_one(PropertyId::AnimationTimingFunction, "steps(2.5)").is_none());
}

#[test]
fn animation_longhand_lists() {
    assert_roundtrip(PropertyId::AnimationDuration, "1s, 500ms");
    assert_roundtrip(PropertyId::AnimationIterationCount, "infinite, 3");
    assert_roundtrip(PropertyId::AnimationDirection, "normal, alternate-reverse");
    assert_roundtrip(PropertyId::TransitionProperty, "opacity, width");

    // Durations reject negatives, delays accept them.
    assert!(parse_one(PropertyId::AnimationDuration, "-1s").is_none());
    assert!(parse_one(PropertyId::AnimationDelay, "-1s").is_some());
    assert!(parse_one(PropertyId::AnimationIterationCount, "-2").is_none());
    assert!(parse_one(PropertyId::TransitionProperty, "not-a-property").is_none());
}

#[test]
fn calc_roundtrip() {
    assert_roundtrip(PropertyId::Width, "calc(100% - 20px)");
    assert_roundtrip(PropertyId::Width, "calc(2 * 10px)");
    assert_roundtrip(PropertyId::Width, "calc((100% - 20px) / 2)");

    // Unit categories must combine.
    assert!(parse_one(PropertyId::Width, "calc(10px + 2s)").is_none());
    // A calc whose category does not fit the property fails too.
    assert!(parse_one(PropertyId::Opacity, "calc(10px + 2px)").is_none());
}

#[test]
fn clip_rect() {
    let value = assert_roundtrip(PropertyId::Clip, "rect(1px, 2px, 3px, 4px)");
    let rect = value.as_primitive().and_then(PrimitiveValue::rect_value).expect("rect");
    assert_eq!(rect.top.number_value(), Some(1.0));
    assert_eq!(rect.left.number_value(), Some(4.0));

    assert_roundtrip(PropertyId::Clip, "rect(auto, auto, auto, auto)");
    assert_eq!(parse_one(PropertyId::Clip, "auto"), Some(Value::ident(ValueId::Auto)));
    assert!(parse_one(PropertyId::Clip, "rect(1px, 2px, 3px)").is_none());
}

#[test]
fn clip_path_shapes() {
    let inset = assert_roundtrip(PropertyId::ClipPath, "inset(5px 10px)");
    let shape = inset.as_primitive().and_then(PrimitiveValue::shape_value).expect("shape");
    assert!(matches!(shape, ShapeValue::Inset { .. }));

    assert_roundtrip(PropertyId::ClipPath, "circle(50% at 10px 20px)");
    assert_roundtrip(PropertyId::ClipPath, "circle(4px)");
    assert!(parse_one(PropertyId::ClipPath, "hexagon(5px)").is_none());
}

#[test]
fn filter_lists() {
    let value = assert_roundtrip(PropertyId::Filter, "blur(4px) brightness(0.5)");
    let list = value.as_list().expect("filter list");
    assert_eq!(list[0].as_filter().map(|f| f.op), Some(FilterOp::Blur));
    assert_eq!(list[1].as_filter().map(|f| f.op), Some(FilterOp::Brightness));

    assert_roundtrip(PropertyId::Filter, "hue-rotate(90deg)");
    assert_roundtrip(PropertyId::Filter, "drop-shadow(1px 2px 3px red)");
    assert!(parse_one(PropertyId::Filter, "blur(-4px)").is_none());
    assert!(parse_one(PropertyId::Filter, "sharpen(1)").is_none());
}

#[test]
fn gradients() {
    let value = assert_roundtrip(PropertyId::BackgroundImage, "linear-gradient(to bottom, red, blue)");
    let gradient = value.as_gradient().expect("gradient");
    assert_eq!(gradient.stops.len(), 2);
    assert!(!gradient.repeating);

    assert_roundtrip(PropertyId::BackgroundImage, "linear-gradient(45deg, red, green 50%, blue)");
    assert_roundtrip(PropertyId::BackgroundImage, "repeating-linear-gradient(to top right, red, blue 20%)");

    // Gradients need at least two color stops and a real corner.
    assert!(parse_one(PropertyId::BackgroundImage, "linear-gradient(red)").is_none());
    assert!(parse_one(PropertyId::BackgroundImage, "linear-gradient(to left right, red, blue)").is_none());
}

#[test]
fn font_shorthand_expands() {
    let decls = parse_decls(PropertyId::Font, "italic bold 12px/1.5 \"Helvetica\", serif").expect("font shorthand");
    assert_eq!(decls.value(PropertyId::FontStyle), Some(&Value::ident(ValueId::Italic)));
    assert_eq!(decls.value(PropertyId::FontWeight), Some(&Value::ident(ValueId::Bold)));
    assert_eq!(
        decls.value(PropertyId::FontSize).and_then(Value::as_primitive).map(PrimitiveValue::unit),
        Some(UnitKind::Px)
    );
    assert!(decls.value(PropertyId::FontFamily).is_some());

    // Omitted parts reset to initial.
    let minimal = parse_decls(PropertyId::Font, "16px serif").expect("minimal font");
    assert_eq!(minimal.value(PropertyId::FontStyle), Some(&Value::Initial));
    assert_eq!(minimal.value(PropertyId::LineHeight), Some(&Value::Initial));

    assert!(parse_decls(PropertyId::Font, "italic bold").is_none());
}

#[test]
fn font_weight_values() {
    assert!(parse_one(PropertyId::FontWeight, "bold").is_some());
    assert!(parse_one(PropertyId::FontWeight, "400").is_some());
    assert!(parse_one(PropertyId::FontWeight, "450").is_none());
    assert!(parse_one(PropertyId::FontWeight, "1000").is_none());
}

#[test]
fn box_shorthand_broadcast() {
    let decls = parse_decls(PropertyId::Margin, "1px 2px").expect("margin shorthand");
    let px = |id: PropertyId| decls.value(id).and_then(Value::as_primitive).and_then(PrimitiveValue::number_value);
    assert_eq!(px(PropertyId::MarginTop), Some(1.0));
    assert_eq!(px(PropertyId::MarginRight), Some(2.0));
    assert_eq!(px(PropertyId::MarginBottom), Some(1.0));
    assert_eq!(px(PropertyId::MarginLeft), Some(2.0));

    let three = parse_decls(PropertyId::Padding, "1px 2px 3px").expect("padding shorthand");
    let pad = |id: PropertyId| three.value(id).and_then(Value::as_primitive).and_then(PrimitiveValue::number_value);
    assert_eq!(pad(PropertyId::PaddingTop), Some(1.0));
    assert_eq!(pad(PropertyId::PaddingRight), Some(2.0));
    assert_eq!(pad(PropertyId::PaddingBottom), Some(3.0));
    assert_eq!(pad(PropertyId::PaddingLeft), Some(2.0));

    assert!(parse_decls(PropertyId::Margin, "1px 2px 3px 4px 5px").is_none());
}

#[test]
fn border_radius_shorthand_corners() {
    let decls = parse_decls(PropertyId::BorderRadius, "1px 2px").expect("radius shorthand");
    let corner = |id: PropertyId| {
        decls
            .value(id)
            .and_then(Value::as_primitive)
            .and_then(PrimitiveValue::pair_value)
            .map(|p| (p.first.number_value().unwrap(), p.second.number_value().unwrap()))
    };
    assert_eq!(corner(PropertyId::BorderTopLeftRadius), Some((1.0, 1.0)));
    assert_eq!(corner(PropertyId::BorderTopRightRadius), Some((2.0, 2.0)));
    assert_eq!(corner(PropertyId::BorderBottomRightRadius), Some((1.0, 1.0)));
    assert_eq!(corner(PropertyId::BorderBottomLeftRadius), Some((2.0, 2.0)));

    let elliptical = parse_decls(PropertyId::BorderRadius, "10px / 20px").expect("elliptical");
    let top_left = elliptical
        .value(PropertyId::BorderTopLeftRadius)
        .and_then(Value::as_primitive)
        .and_then(PrimitiveValue::pair_value)
        .expect("pair");
    assert_eq!(top_left.first.number_value(), Some(10.0));
    assert_eq!(top_left.second.number_value(), Some(20.0));
}

#[test]
fn declaration_set_semantics() {
    let mut decls = DeclarationSet::new();
    assert!(parse_value(&mut decls, PropertyId::Width, "10px", false, ParseMode::Standard));
    assert!(parse_value(&mut decls, PropertyId::Width, "20px", true, ParseMode::Standard));

    // Re-adding replaces; one declaration per property id.
    assert_eq!(decls.len(), 1);
    let decl = decls.get(PropertyId::Width).expect("width");
    assert!(decl.important);
    assert_eq!(decl.value.css_text(), "20px");

    assert_eq!(decls.css_text(), "width: 20px !important;");

    assert!(decls.remove(PropertyId::Width));
    assert!(!decls.remove(PropertyId::Width));
    assert!(decls.is_empty());
}

#[test]
fn failed_parses_commit_nothing() {
    let mut decls = DeclarationSet::new();

    // A shorthand that fails mid-way must not leave partial longhands.
    assert!(!parse_value(&mut decls, PropertyId::Background, "red nonsense", false, ParseMode::Standard));
    assert!(decls.is_empty());

    assert!(!parse_value(&mut decls, PropertyId::Font, "italic bold 12px/", false, ParseMode::Standard));
    assert!(decls.is_empty());

    // Trailing garbage after a valid value fails the whole declaration.
    assert!(!parse_value(&mut decls, PropertyId::Width, "10px 20px", false, ParseMode::Standard));
    assert!(decls.is_empty());
}

#[test]
fn image_values() {
    let url = assert_roundtrip(PropertyId::BackgroundImage, "url(\"textures/wood.png\")");
    assert_eq!(url.as_image().map(|i| i.url.as_ref()), Some("textures/wood.png"));

    assert_roundtrip(PropertyId::BackgroundImage, "url(\"a.png\"), url(\"b.png\")");
    assert_roundtrip(PropertyId::BackgroundImage, "none, url(\"b.png\")");
    assert_eq!(parse_one(PropertyId::BackgroundImage, "none"), Some(Value::ident(ValueId::None)));
}

#[test]
fn z_index_and_opacity() {
    assert_roundtrip(PropertyId::ZIndex, "3");
    assert_eq!(parse_one(PropertyId::ZIndex, "auto"), Some(Value::ident(ValueId::Auto)));
    assert!(parse_one(PropertyId::ZIndex, "1.5").is_none());

    assert_roundtrip(PropertyId::Opacity, "0.5");
}
