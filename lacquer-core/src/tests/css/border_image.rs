use super::util::*;

fn map_combined(text: &str) -> (NinePieceImage, BorderWidths) {
    let value = parse_single_value(PropertyId::WebkitBorderImage, text, ParseMode::Standard)
        .unwrap_or_else(|| panic!("failed to parse `{text}`"));
    let ctx = ConversionContext::default();
    let map = StyleMap::new(&ctx);
    let mut image = NinePieceImage::default();
    let mut borders = BorderWidths::default();
    map.map_nine_piece_image(PropertyId::WebkitBorderImage, &value, &mut image, &mut borders);
    (image, borders)
}

#[test]
fn border_image_shorthand_expands() {
    let decls = parse_decls(PropertyId::BorderImage, "url(\"x.png\") 10 20 / 2px 3px round").expect("border-image");

    let slice = decls
        .value(PropertyId::BorderImageSlice)
        .and_then(Value::as_border_image_slice)
        .expect("slice");
    assert_eq!(slice.slices.top.number_value(), Some(10.0));
    assert_eq!(slice.slices.right.number_value(), Some(20.0));
    assert_eq!(slice.slices.bottom.number_value(), Some(10.0));
    assert_eq!(slice.slices.left.number_value(), Some(20.0));
    assert!(!slice.fill);

    assert!(decls.value(PropertyId::BorderImageSource).is_some());
    assert!(decls.value(PropertyId::BorderImageWidth).is_some());
    // Outset was omitted and resets to initial.
    assert_eq!(decls.value(PropertyId::BorderImageOutset), Some(&Value::Initial));
}

#[test]
fn nine_piece_mapping_broadcasts_sides() {
    let (image, borders) = map_combined("url(\"x.png\") 10 20 / 2px 3px round");

    assert!(image.image.is_some());
    assert_eq!(image.slices.top, SliceLength::Number(10.0));
    assert_eq!(image.slices.right, SliceLength::Number(20.0));
    assert_eq!(image.slices.bottom, SliceLength::Number(10.0));
    assert_eq!(image.slices.left, SliceLength::Number(20.0));

    assert_eq!(image.border_slices.top, BorderImageLength::Length(2.0));
    assert_eq!(image.border_slices.right, BorderImageLength::Length(3.0));
    assert_eq!(image.border_slices.bottom, BorderImageLength::Length(2.0));
    assert_eq!(image.border_slices.left, BorderImageLength::Length(3.0));

    assert_eq!(image.horizontal_rule, NinePieceRule::Round);
    assert_eq!(image.vertical_rule, NinePieceRule::Round);

    // The deprecated property back-propagates border-slice widths into the
    // literal border widths.
    assert_eq!(borders.top, 2.0);
    assert_eq!(borders.right, 3.0);
    assert_eq!(borders.bottom, 2.0);
    assert_eq!(borders.left, 3.0);
}

#[test]
fn modern_border_image_leaves_border_widths_alone() {
    let value = parse_single_value(PropertyId::WebkitBorderImage, "url(\"x.png\") 10 / 2px", ParseMode::Standard).expect("combined");
    let ctx = ConversionContext::default();
    let map = StyleMap::new(&ctx);
    let mut image = NinePieceImage::default();
    let mut borders = BorderWidths::default();
    map.map_nine_piece_image(PropertyId::BorderImage, &value, &mut image, &mut borders);

    assert_eq!(image.border_slices.top, BorderImageLength::Length(2.0));
    assert_eq!(borders, BorderWidths::default());
}

#[test]
fn nine_piece_roundtrip_through_computed_style() {
    let (image, _) = map_combined("url(\"x.png\") 10 20 / 2px 3px round");

    let style = StyleData {
        border_image: image,
        ..StyleData::default()
    };
    let mut computed = ComputedStyleDeclaration::new(&style);
    let text = computed.property_text(PropertyId::BorderImage).expect("serialized border-image");

    // Broadcast sides fold back; repeat keeps its single keyword.
    assert_eq!(text, "url(\"x.png\") 10 20 / 2px 3px / 0 round");
}

#[test]
fn border_image_flexible_order() {
    // Components are detected by kind, not position.
    let a = parse_single_value(PropertyId::WebkitBorderImage, "url(\"x.png\") 10 round", ParseMode::Standard).expect("a");
    let b = parse_single_value(PropertyId::WebkitBorderImage, "round url(\"x.png\") 10", ParseMode::Standard).expect("b");
    let c = parse_single_value(PropertyId::WebkitBorderImage, "10 url(\"x.png\") round", ParseMode::Standard).expect("c");

    let ctx = ConversionContext::default();
    let map = StyleMap::new(&ctx);
    let mut borders = BorderWidths::default();

    let mut images = Vec::new();
    for value in [&a, &b, &c] {
        let mut image = NinePieceImage::default();
        map.map_nine_piece_image(PropertyId::MaskBoxImage, value, &mut image, &mut borders);
        images.push(image);
    }
    assert_eq!(images[0], images[1]);
    assert_eq!(images[1], images[2]);
}

#[test]
fn slice_fill_keyword() {
    let value = parse_one(PropertyId::BorderImageSlice, "fill 30%").expect("fill slice");
    let slice = value.as_border_image_slice().expect("slice");
    assert!(slice.fill);
    assert_eq!(slice.slices.top.unit(), UnitKind::Percentage);

    let trailing = parse_one(PropertyId::BorderImageSlice, "30% fill").expect("trailing fill");
    assert_eq!(value, trailing);

    assert_roundtrip(PropertyId::BorderImageSlice, "10 20 30 40");
    assert!(parse_one(PropertyId::BorderImageSlice, "-5").is_none());
}

#[test]
fn border_image_longhand_quads() {
    assert_roundtrip(PropertyId::BorderImageWidth, "auto 2px");
    assert_roundtrip(PropertyId::BorderImageOutset, "1 2px");
    assert_roundtrip(PropertyId::BorderImageRepeat, "stretch round");
    assert_roundtrip(PropertyId::BorderImageRepeat, "space");
    assert!(parse_one(PropertyId::BorderImageRepeat, "miter").is_none());
}

#[test]
fn mapping_shape_mismatch_is_a_no_op() {
    let ctx = ConversionContext::default();
    let map = StyleMap::new(&ctx);
    let mut image = NinePieceImage::default();
    let mut borders = BorderWidths::default();

    // A structurally wrong value must not crash or change anything.
    let bogus = Value::ident(ValueId::Auto);
    map.map_nine_piece_image(PropertyId::BorderImage, &bogus, &mut image, &mut borders);
    assert_eq!(image, NinePieceImage::default());

    map.map_nine_piece_image_slice(&mut image, &bogus);
    map.map_nine_piece_image_repeat(&mut image, &bogus);
    assert_eq!(image, NinePieceImage::default());
}
