use super::util::*;

#[test]
fn border_radius_symmetric_box_folds_to_one_pair() {
    let style = StyleData {
        border_radii: [(5.0, 10.0); 4],
        ..StyleData::default()
    };
    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(computed.property_text(PropertyId::BorderRadius).as_deref(), Some("5px / 10px"));

    let circular = StyleData {
        border_radii: [(8.0, 8.0); 4],
        ..StyleData::default()
    };
    let mut computed = ComputedStyleDeclaration::new(&circular);
    assert_eq!(computed.property_text(PropertyId::BorderRadius).as_deref(), Some("8px"));
}

#[test]
fn border_radius_emits_only_differing_corners() {
    let asymmetric = StyleData {
        border_radii: [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)],
        ..StyleData::default()
    };
    let mut computed = ComputedStyleDeclaration::new(&asymmetric);
    assert_eq!(
        computed.property_text(PropertyId::BorderRadius).as_deref(),
        Some("1px 2px 3px 4px")
    );

    // Two distinct values collapse to the canonical two-value form.
    let alternating = StyleData {
        border_radii: [(1.0, 1.0), (2.0, 2.0), (1.0, 1.0), (2.0, 2.0)],
        ..StyleData::default()
    };
    let mut computed = ComputedStyleDeclaration::new(&alternating);
    assert_eq!(computed.property_text(PropertyId::BorderRadius).as_deref(), Some("1px 2px"));
}

#[test]
fn computed_values_roundtrip_through_the_parser() {
    let style = StyleData::default();
    let mut computed = ComputedStyleDeclaration::new(&style);

    for id in [
        PropertyId::Color,
        PropertyId::BackgroundColor,
        PropertyId::MarginTop,
        PropertyId::PaddingLeft,
        PropertyId::FontSize,
        PropertyId::Display,
        PropertyId::Position,
        PropertyId::Opacity,
        PropertyId::ZIndex,
        PropertyId::AnimationDuration,
    ] {
        let value = computed.property_value(id).unwrap_or_else(|| panic!("no computed value for {}", id.name()));
        let text = value.css_text();
        let reparsed = parse_one(id, &text).unwrap_or_else(|| panic!("computed `{text}` for {} does not re-parse", id.name()));
        assert_eq!(value, reparsed, "computed round trip changed {}", id.name());
    }
}

#[test]
fn computed_views_are_read_only() {
    let style = StyleData::default();
    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(
        computed.set_property(PropertyId::Width, "10px"),
        Err(NoModificationAllowedError)
    );
}

#[test]
fn unsupported_properties_return_none() {
    let style = StyleData::default();
    let mut computed = ComputedStyleDeclaration::new(&style);
    // Logged once per property id, then silent.
    assert!(computed.property_value(PropertyId::Filter).is_none());
    assert!(computed.property_value(PropertyId::Filter).is_none());
}

#[test]
fn layout_dependence_has_per_property_conditions() {
    let mut style = StyleData::default();
    style.margins.left = StyleLength::Fixed(4.0);
    style.margins.top = StyleLength::Percent(10.0);
    let computed = ComputedStyleDeclaration::new(&style);

    // Fixed margins read straight from style; layout-relative ones do not.
    assert!(!computed.is_layout_dependent(PropertyId::MarginLeft));
    assert!(computed.is_layout_dependent(PropertyId::MarginTop));
    assert!(computed.is_layout_dependent(PropertyId::Width));
    assert!(!computed.is_layout_dependent(PropertyId::Color));
    assert!(!computed.is_layout_dependent(PropertyId::Top));
}

struct RecordingHost {
    laid_out: bool,
}

impl LayoutHost for RecordingHost {
    fn ensure_layout(&mut self) {
        self.laid_out = true;
    }

    fn border_box(&self) -> Option<(f32, f32)> {
        self.laid_out.then_some((120.0, 40.0))
    }
}

#[test]
fn layout_dependent_reads_force_layout() {
    let style = StyleData::default();
    let mut computed = ComputedStyleDeclaration::with_host(&style, RecordingHost { laid_out: false });

    assert_eq!(computed.property_text(PropertyId::Width).as_deref(), Some("120px"));
    assert_eq!(computed.property_text(PropertyId::Height).as_deref(), Some("40px"));

    // Non-geometry reads never trigger layout.
    let mut untouched = ComputedStyleDeclaration::with_host(&style, RecordingHost { laid_out: false });
    assert_eq!(untouched.property_text(PropertyId::Color).as_deref(), Some("rgb(0, 0, 0)"));
}

#[test]
fn background_shorthand_reconstruction() {
    let mut style = StyleData::default();
    style.background_color = Rgba::opaque(255, 0, 0);
    style.background_layers.repeat_x = FillRepeat::Repeat;
    style.background_layers.repeat_y = FillRepeat::NoRepeat;

    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(
        computed.property_text(PropertyId::Background).as_deref(),
        Some("rgb(255, 0, 0) none repeat-x scroll 0% 0%")
    );
}

#[test]
fn repeat_serialization_folds() {
    let mut style = StyleData::default();
    style.background_layers.repeat_x = FillRepeat::NoRepeat;
    style.background_layers.repeat_y = FillRepeat::Repeat;
    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(computed.property_text(PropertyId::BackgroundRepeat).as_deref(), Some("repeat-y"));

    style.background_layers.repeat_y = FillRepeat::NoRepeat;
    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(computed.property_text(PropertyId::BackgroundRepeat).as_deref(), Some("no-repeat"));

    style.background_layers.repeat_x = FillRepeat::Round;
    style.background_layers.repeat_y = FillRepeat::Space;
    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(computed.property_text(PropertyId::BackgroundRepeat).as_deref(), Some("round space"));
}

#[test]
fn multi_layer_serialization() {
    let mut style = StyleData::default();
    let mut second = FillLayer::new(FillLayerRole::Background);
    second.repeat_x = FillRepeat::Round;
    second.repeat_y = FillRepeat::Round;
    style.background_layers.next = Some(Box::new(second));

    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(
        computed.property_text(PropertyId::BackgroundRepeat).as_deref(),
        Some("repeat, round")
    );
}

#[test]
fn border_shorthands_fold_sides() {
    let mut style = StyleData::default();
    style.border_widths = BorderWidths {
        top: 1.0,
        right: 2.0,
        bottom: 1.0,
        left: 2.0,
    };
    style.border_styles = [ValueId::Solid; 4];

    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(computed.property_text(PropertyId::BorderWidth).as_deref(), Some("1px 2px"));
    assert_eq!(computed.property_text(PropertyId::BorderStyle).as_deref(), Some("solid"));
}

#[test]
fn animation_longhands_from_style() {
    let mut style = StyleData::default();
    style.animations.push(AnimationData {
        duration: 2.0,
        timing: Timing::EASE_IN,
        ..AnimationData::default()
    });
    style.animations.push(AnimationData {
        duration: 0.25,
        iteration_count: IterationCount::Infinite,
        ..AnimationData::default()
    });

    let mut computed = ComputedStyleDeclaration::new(&style);
    assert_eq!(computed.property_text(PropertyId::AnimationDuration).as_deref(), Some("2s, 0.25s"));
    assert_eq!(
        computed.property_text(PropertyId::AnimationTimingFunction).as_deref(),
        Some("ease-in, ease")
    );
    assert_eq!(
        computed.property_text(PropertyId::AnimationIterationCount).as_deref(),
        Some("1, infinite")
    );

    // With no entries, the initial value serializes.
    let empty = StyleData::default();
    let mut computed = ComputedStyleDeclaration::new(&empty);
    assert_eq!(computed.property_text(PropertyId::AnimationDuration).as_deref(), Some("0s"));
    assert_eq!(computed.property_text(PropertyId::TransitionProperty).as_deref(), Some("all"));
}
