use super::util::*;

#[test]
fn unit_category_closure() {
    // Every tag maps to exactly one of the eight categories.
    for unit in UnitKind::ALL {
        let _ = unit.category();
    }

    assert_eq!(UnitKind::Number.category(), UnitCategory::Number);
    assert_eq!(UnitKind::Percentage.category(), UnitCategory::Percent);
    assert_eq!(UnitKind::Px.category(), UnitCategory::Length);
    assert_eq!(UnitKind::Deg.category(), UnitCategory::Angle);
    assert_eq!(UnitKind::Ms.category(), UnitCategory::Time);
    assert_eq!(UnitKind::Khz.category(), UnitCategory::Frequency);
    assert_eq!(UnitKind::Dppx.category(), UnitCategory::Resolution);
    assert_eq!(UnitKind::Ident.category(), UnitCategory::Other);
    assert_eq!(UnitKind::Color.category(), UnitCategory::Other);
}

#[test]
fn length_range_predicate() {
    let length_units = [
        UnitKind::Ems,
        UnitKind::Exs,
        UnitKind::Px,
        UnitKind::Cm,
        UnitKind::Mm,
        UnitKind::In,
        UnitKind::Pt,
        UnitKind::Pc,
        UnitKind::Rems,
        UnitKind::Chs,
        UnitKind::Vw,
        UnitKind::Vh,
        UnitKind::Vmin,
        UnitKind::Vmax,
    ];

    for unit in UnitKind::ALL {
        assert_eq!(
            unit.is_length(),
            length_units.contains(&unit),
            "is_length disagrees for {unit:?}"
        );
    }

    assert!(UnitKind::Rems.is_font_relative_length());
    assert!(UnitKind::Chs.is_font_relative_length());
    assert!(UnitKind::Vmin.is_viewport_percentage_length());
    assert!(!UnitKind::Percentage.is_length());
}

#[test]
fn imprecise_conversion_rounding() {
    // Only values within 0.01 of the ceiling snap up.
    assert_eq!(round_for_imprecise_conversion_to_int(44.999), 45);
    assert_eq!(round_for_imprecise_conversion_to_int(44.005), 44);
    assert_eq!(round_for_imprecise_conversion_to_int(-44.999), -45);
    assert_eq!(round_for_imprecise_conversion_to_int(-44.005), -44);

    assert_eq!(round_for_imprecise_conversion_to_float(44.999), 45.0);
    assert_eq!(round_for_imprecise_conversion_to_float(44.005), 44.0);
    assert_eq!(round_for_imprecise_conversion_to_float(44.5), 44.5);
}

#[test]
fn compute_length() {
    let ctx = ConversionContext::default();

    let px = PrimitiveValue::px(10.0);
    assert_eq!(px.compute_length(&ctx), Some(10.0));

    let ems = PrimitiveValue::number(2.0, UnitKind::Ems);
    assert_eq!(ems.compute_length(&ctx), Some(32.0));

    let rems = PrimitiveValue::number(1.5, UnitKind::Rems);
    assert_eq!(rems.compute_length(&ctx), Some(24.0));

    let vw = PrimitiveValue::number(50.0, UnitKind::Vw);
    assert_eq!(vw.compute_length(&ctx), Some(400.0));

    let vmin = PrimitiveValue::number(10.0, UnitKind::Vmin);
    assert_eq!(vmin.compute_length(&ctx), Some(60.0));

    let inches = PrimitiveValue::number(1.0, UnitKind::In);
    assert_eq!(inches.compute_length(&ctx), Some(96.0));

    // Percentages need a basis; the conversion context has none.
    let pct = PrimitiveValue::percentage(50.0);
    assert_eq!(pct.compute_length(&ctx), None);
}

#[test]
fn accumulate_length_array() {
    let mut array = [0.0; LENGTH_UNIT_TYPE_COUNT];

    PrimitiveValue::px(10.0).accumulate_length_array(&mut array, 1.0);
    PrimitiveValue::number(2.0, UnitKind::Ems).accumulate_length_array(&mut array, 1.0);
    PrimitiveValue::percentage(50.0).accumulate_length_array(&mut array, 2.0);
    PrimitiveValue::number(5.0, UnitKind::Vh).accumulate_length_array(&mut array, 1.0);

    assert_eq!(array[LengthUnitType::Fixed as usize], 10.0);
    assert_eq!(array[LengthUnitType::FontSize as usize], 2.0);
    assert_eq!(array[LengthUnitType::Percent as usize], 100.0);
    assert_eq!(array[LengthUnitType::ViewportHeight as usize], 5.0);
    assert_eq!(array[LengthUnitType::RootFontSize as usize], 0.0);
}

#[test]
fn calc_accumulates_through_the_tree() {
    let value = parse_one(PropertyId::Width, "calc(100% - 20px)").expect("calc should parse");
    let calc = value.as_primitive().and_then(PrimitiveValue::calc_value).expect("calc payload");
    assert_eq!(calc.category(), CalcCategory::PercentLength);

    let mut array = [0.0; LENGTH_UNIT_TYPE_COUNT];
    calc.accumulate_length_array(&mut array, 1.0);
    assert_eq!(array[LengthUnitType::Percent as usize], 100.0);
    assert_eq!(array[LengthUnitType::Fixed as usize], -20.0);
}

#[test]
fn canonical_numbers() {
    assert_eq!(PrimitiveValue::number(1.0, UnitKind::Turn).canonical_number(), Some(360.0));
    assert_eq!(PrimitiveValue::number(100.0, UnitKind::Grad).canonical_number(), Some(90.0));
    assert_eq!(PrimitiveValue::number(500.0, UnitKind::Ms).canonical_number(), Some(0.5));
    assert_eq!(PrimitiveValue::number(2.0, UnitKind::Khz).canonical_number(), Some(2000.0));
    assert_eq!(PrimitiveValue::number(1.0, UnitKind::In).canonical_number(), Some(96.0));
    // Context-dependent lengths have no context-free canonical form.
    assert_eq!(PrimitiveValue::number(2.0, UnitKind::Ems).canonical_number(), None);
}

#[test]
fn composite_accessors_reject_other_tags() {
    let number = PrimitiveValue::px(4.0);
    assert!(number.rect_value().is_none());
    assert!(number.quad_value().is_none());
    assert!(number.pair_value().is_none());
    assert!(number.shape_value().is_none());
    assert!(number.calc_value().is_none());
    assert!(number.ident_value().is_none());
    assert!(number.color_value().is_none());

    let ident = PrimitiveValue::ident(ValueId::Auto);
    assert_eq!(ident.ident_value(), Some(ValueId::Auto));
    assert!(ident.number_value().is_none());
}

#[test]
fn quad_serialization_folds_identical_sides() {
    let quad = |t: f32, r: f32, b: f32, l: f32| QuadValue {
        top: PrimitiveValue::px(t),
        right: PrimitiveValue::px(r),
        bottom: PrimitiveValue::px(b),
        left: PrimitiveValue::px(l),
    };

    assert_eq!(quad(1.0, 1.0, 1.0, 1.0).to_string(), "1px");
    assert_eq!(quad(1.0, 2.0, 1.0, 2.0).to_string(), "1px 2px");
    assert_eq!(quad(1.0, 2.0, 3.0, 2.0).to_string(), "1px 2px 3px");
    assert_eq!(quad(1.0, 2.0, 3.0, 4.0).to_string(), "1px 2px 3px 4px");
}

#[test]
fn pair_collapse_flag() {
    let collapsing = PairValue::new(PrimitiveValue::px(5.0), PrimitiveValue::px(5.0));
    assert_eq!(collapsing.to_string(), "5px");

    let kept = PairValue::keep_identical(PrimitiveValue::px(5.0), PrimitiveValue::px(5.0));
    assert_eq!(kept.to_string(), "5px 5px");
}

#[test]
fn quirk_flag_is_preserved() {
    let quirky = PrimitiveValue::quirky_number(5.0, UnitKind::Px);
    assert!(quirky.is_quirk());
    assert!(!PrimitiveValue::px(5.0).is_quirk());
}

#[test]
fn color_serialization() {
    assert_eq!(Rgba::opaque(255, 0, 0).to_string(), "rgb(255, 0, 0)");
    assert_eq!(Rgba::new(0, 0, 0, 0).to_string(), "rgba(0, 0, 0, 0)");
    assert_eq!(Rgba::new(10, 20, 30, 51).to_string(), "rgba(10, 20, 30, 0.2)");
}
