use super::util::*;

fn px_value(px: f32) -> Value {
    Value::Primitive(PrimitiveValue::px(px))
}

#[test]
fn cross_tag_equality_is_false() {
    assert_ne!(px_value(10.0), Value::ident(ValueId::Auto));
    assert_ne!(Value::Initial, Value::Inherit);
    assert_ne!(Value::Initial, Value::ident(ValueId::Initial));
}

#[test]
fn one_element_list_equals_bare_value() {
    // The list/non-list comparison delegates to the list side: a one-element
    // list equals its sole element's bare form, from either direction.
    let list = Value::List(ValueList::from_items(ListSeparator::Space, vec![px_value(10.0)]));
    let bare = px_value(10.0);

    assert_eq!(list, bare);
    assert_eq!(bare, list);

    let two = Value::List(ValueList::from_items(ListSeparator::Space, vec![px_value(10.0), px_value(10.0)]));
    assert_ne!(two, bare);
    assert_ne!(bare, two);

    let other = Value::List(ValueList::from_items(ListSeparator::Space, vec![px_value(12.0)]));
    assert_ne!(other, bare);
}

#[test]
fn list_equality_ignores_separator() {
    let space = Value::List(ValueList::from_items(ListSeparator::Space, vec![px_value(1.0), px_value(2.0)]));
    let comma = Value::List(ValueList::from_items(ListSeparator::Comma, vec![px_value(1.0), px_value(2.0)]));
    assert_eq!(space, comma);
}

#[test]
fn list_serialization_uses_separator() {
    let items = vec![px_value(1.0), px_value(2.0)];
    assert_eq!(
        Value::List(ValueList::from_items(ListSeparator::Space, items.clone())).css_text(),
        "1px 2px"
    );
    assert_eq!(
        Value::List(ValueList::from_items(ListSeparator::Comma, items.clone())).css_text(),
        "1px, 2px"
    );
    assert_eq!(
        Value::List(ValueList::from_items(ListSeparator::Slash, items)).css_text(),
        "1px / 2px"
    );
}

#[test]
fn list_item_access() {
    let mut list = ValueList::space_separated();
    list.append(px_value(1.0));
    list.prepend(px_value(0.0));

    assert_eq!(list.len(), 2);
    assert_eq!(list.item(0), Some(&px_value(0.0)));
    assert_eq!(list.item(1), Some(&px_value(1.0)));
    assert_eq!(list.item(2), None);
    assert_eq!(list[1], px_value(1.0));
}

#[test]
fn transform_equality_includes_operation() {
    let args = |px: f32| {
        let mut list = ValueList::comma_separated();
        list.append(px_value(px));
        list
    };

    let x = Value::Transform(TransformValue {
        op: TransformOp::TranslateX,
        args: args(10.0),
    });
    let y = Value::Transform(TransformValue {
        op: TransformOp::TranslateY,
        args: args(10.0),
    });
    let x2 = Value::Transform(TransformValue {
        op: TransformOp::TranslateX,
        args: args(10.0),
    });

    assert_eq!(x, x2);
    assert_ne!(x, y);
}

#[test]
fn cssom_clone_deep_variants() {
    let primitive = px_value(10.0);
    assert_eq!(primitive.cssom_clone(), primitive);

    let list = Value::List(ValueList::from_items(ListSeparator::Comma, vec![px_value(1.0), px_value(2.0)]));
    let clone = list.cssom_clone();
    assert_eq!(clone, list);
    assert!(!clone.is_snapshot());

    let image = Value::Image(ImageValue { url: "a.png".into() });
    assert_eq!(image.cssom_clone(), image);
}

#[test]
fn cssom_clone_snapshots_internal_variants() {
    let shadow = parse_one(PropertyId::BoxShadow, "1px 2px 3px rgb(0, 0, 0)").expect("shadow");
    let clone = shadow.cssom_clone();

    assert!(clone.is_snapshot());
    assert_eq!(clone.css_text(), shadow.css_text());
    // Snapshots are non-introspectable.
    assert!(clone.as_shadow().is_none());
    assert!(clone.as_primitive().is_none());
    assert!(clone.as_list().is_none());
}

#[test]
fn variant_accessors_reject_other_variants() {
    let primitive = px_value(1.0);
    assert!(primitive.as_list().is_none());
    assert!(primitive.as_shadow().is_none());
    assert!(primitive.as_transform().is_none());
    assert!(primitive.as_gradient().is_none());
    assert!(primitive.as_image().is_none());
    assert!(primitive.as_timing_function().is_none());
    assert!(primitive.as_border_image_slice().is_none());
    assert!(primitive.as_primitive().is_some());
}

#[test]
fn value_pool_shares_singletons() {
    let before = ValuePool::global().read().len();
    let first = ValuePool::global().write().ident(ValueId::Auto);
    let second = ValuePool::global().write().ident(ValueId::Auto);
    assert_eq!(first, second);
    let after = ValuePool::global().read().len();
    assert!(after >= before);

    let px_a = ValuePool::global().write().px(4.0);
    let px_b = ValuePool::global().write().px(4.0);
    assert_eq!(px_a, px_b);
}
