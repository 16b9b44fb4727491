//! Read-only computed-style view.
//!
//! Re-materializes values from resolved style state. Geometry-derived
//! properties force a layout pass through the host before reading.

use std::collections::HashSet;
use std::error;
use std::fmt::{self, Display};

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::css::list::{ListSeparator, ValueList};
use crate::css::pool::{cached_color, cached_ident, cached_px};
use crate::css::primitive::{PairValue, PrimitiveValue, QuadValue, Rgba, UnitKind};
use crate::css::properties::{PropertyId, ValueId};
use crate::css::style_map::{
    AnimationData, BorderImageLength, BorderImageLengthBox, BorderWidths, FillAttachment, FillLayer, FillLayerRole, FillRepeat, FillSize,
    IterationCount, NinePieceImage, NinePieceRule, SliceLength, StyleLength, Timing, TransitionTarget,
};
use crate::css::value::{BorderImageSliceValue, TimingFunction, Value};

/// Raised on any attempt to mutate a computed-style view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoModificationAllowedError;

impl Display for NoModificationAllowedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("computed style declarations are read-only")
    }
}

impl error::Error for NoModificationAllowedError {}

/// Box geometry supplier. Computed values that depend on layout call
/// `ensure_layout` before reading geometry.
pub trait LayoutHost {
    fn ensure_layout(&mut self) {}

    /// Border-box size in px once laid out.
    fn border_box(&self) -> Option<(f32, f32)> {
        None
    }
}

/// A host with no layout information; geometry-derived reads fall back to
/// specified values.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLayout;

impl LayoutHost for NoLayout {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLengths {
    pub top: StyleLength,
    pub right: StyleLength,
    pub bottom: StyleLength,
    pub left: StyleLength,
}

impl BoxLengths {
    pub fn uniform(value: StyleLength) -> BoxLengths {
        BoxLengths {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// One corner radius: horizontal and vertical px.
pub type CornerRadius = (f32, f32);

/// The resolved style snapshot a computed-style view reads. Layout and
/// cascade live elsewhere; this only holds the slots this core serializes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleData {
    pub color: Rgba,
    pub background_color: Rgba,
    pub opacity: f32,
    pub z_index: Option<i32>,
    pub display: ValueId,
    pub position: ValueId,
    pub visibility: ValueId,
    pub font_size: f32,
    pub line_height: f32,
    pub width: StyleLength,
    pub height: StyleLength,
    pub margins: BoxLengths,
    pub paddings: BoxLengths,
    pub offsets: BoxLengths,
    pub border_widths: BorderWidths,
    pub border_styles: [ValueId; 4],
    pub border_colors: [Rgba; 4],
    /// Corner order: top-left, top-right, bottom-right, bottom-left.
    pub border_radii: [CornerRadius; 4],
    pub background_layers: FillLayer,
    pub mask_layers: FillLayer,
    pub border_image: NinePieceImage,
    pub animations: Vec<AnimationData>,
    pub transitions: Vec<AnimationData>,
}

impl Default for StyleData {
    fn default() -> Self {
        StyleData {
            color: Rgba::BLACK,
            background_color: Rgba::TRANSPARENT,
            opacity: 1.0,
            z_index: None,
            display: ValueId::Inline,
            position: ValueId::Static,
            visibility: ValueId::Visible,
            font_size: 16.0,
            line_height: 16.0,
            width: StyleLength::Auto,
            height: StyleLength::Auto,
            margins: BoxLengths::uniform(StyleLength::Fixed(0.0)),
            paddings: BoxLengths::uniform(StyleLength::Fixed(0.0)),
            offsets: BoxLengths::uniform(StyleLength::Auto),
            border_widths: BorderWidths {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            },
            border_styles: [ValueId::None; 4],
            border_colors: [Rgba::BLACK; 4],
            border_radii: [(0.0, 0.0); 4],
            background_layers: FillLayer::new(FillLayerRole::Background),
            mask_layers: FillLayer::new(FillLayerRole::Mask),
            border_image: NinePieceImage::default(),
            animations: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

lazy_static! {
    static ref UNSUPPORTED_LOGGED: Mutex<HashSet<PropertyId>> = Mutex::new(HashSet::new());
}

fn log_unsupported_once(id: PropertyId) {
    if UNSUPPORTED_LOGGED.lock().insert(id) {
        log::warn!("computed value for `{}` is not implemented", id.name());
    }
}

fn length_value(length: StyleLength) -> Value {
    match length {
        StyleLength::Auto => cached_ident(ValueId::Auto),
        StyleLength::Fixed(px) => cached_px(px),
        StyleLength::Percent(pct) => Value::Primitive(PrimitiveValue::percentage(pct)),
    }
}

fn seconds_value(seconds: f32) -> Value {
    Value::Primitive(PrimitiveValue::number(seconds, UnitKind::S))
}

fn comma_list_of(items: Vec<Value>) -> Value {
    if items.len() == 1 {
        items.into_iter().next().expect("non-empty")
    } else {
        Value::List(ValueList::from_items(ListSeparator::Comma, items))
    }
}

fn repeat_value(x: FillRepeat, y: FillRepeat) -> Value {
    let ident = |r: FillRepeat| match r {
        FillRepeat::Repeat => ValueId::Repeat,
        FillRepeat::NoRepeat => ValueId::NoRepeat,
        FillRepeat::Round => ValueId::Round,
        FillRepeat::Space => ValueId::Space,
    };
    match (x, y) {
        (FillRepeat::Repeat, FillRepeat::NoRepeat) => cached_ident(ValueId::RepeatX),
        (FillRepeat::NoRepeat, FillRepeat::Repeat) => cached_ident(ValueId::RepeatY),
        _ if x == y => cached_ident(ident(x)),
        _ => Value::Primitive(PrimitiveValue::pair(PairValue::new(
            PrimitiveValue::ident(ident(x)),
            PrimitiveValue::ident(ident(y)),
        ))),
    }
}

fn fill_size_value(size: &FillSize) -> Value {
    match size {
        FillSize::Contain => cached_ident(ValueId::Contain),
        FillSize::Cover => cached_ident(ValueId::Cover),
        FillSize::Size(w, h) => {
            let prim = |l: &StyleLength| match l {
                StyleLength::Auto => PrimitiveValue::ident(ValueId::Auto),
                StyleLength::Fixed(px) => PrimitiveValue::px(*px),
                StyleLength::Percent(pct) => PrimitiveValue::percentage(*pct),
            };
            Value::Primitive(PrimitiveValue::pair(PairValue::keep_identical(prim(w), prim(h))))
        }
    }
}

fn position_value(layer: &FillLayer) -> Value {
    let prim = |l: StyleLength| match l {
        StyleLength::Auto => PrimitiveValue::percentage(0.0),
        StyleLength::Fixed(px) => PrimitiveValue::px(px),
        StyleLength::Percent(pct) => PrimitiveValue::percentage(pct),
    };
    Value::Primitive(PrimitiveValue::pair(PairValue::keep_identical(
        prim(layer.x_position),
        prim(layer.y_position),
    )))
}

fn timing_value(timing: Timing) -> Value {
    let presets = [
        (Timing::EASE, ValueId::Ease),
        (Timing::LINEAR, ValueId::Linear),
        (Timing::EASE_IN, ValueId::EaseIn),
        (Timing::EASE_OUT, ValueId::EaseOut),
        (Timing::EASE_IN_OUT, ValueId::EaseInOut),
    ];
    for (preset, ident) in presets {
        if timing == preset {
            return cached_ident(ident);
        }
    }
    match timing {
        Timing::CubicBezier { x1, y1, x2, y2 } => Value::TimingFunction(TimingFunction::CubicBezier { x1, y1, x2, y2 }),
        Timing::Steps { steps, position } => Value::TimingFunction(TimingFunction::Steps { steps, position }),
    }
}

fn layers_of(first: &FillLayer) -> Vec<&FillLayer> {
    let mut layers = vec![first];
    let mut cursor = first;
    while let Some(next) = cursor.next.as_deref() {
        layers.push(next);
        cursor = next;
    }
    layers
}

/// The read-only computed-style view over a resolved snapshot.
pub struct ComputedStyleDeclaration<'a, H: LayoutHost = NoLayout> {
    style: &'a StyleData,
    host: H,
}

impl<'a> ComputedStyleDeclaration<'a, NoLayout> {
    pub fn new(style: &'a StyleData) -> Self {
        ComputedStyleDeclaration { style, host: NoLayout }
    }
}

impl<'a, H: LayoutHost> ComputedStyleDeclaration<'a, H> {
    pub fn with_host(style: &'a StyleData, host: H) -> Self {
        ComputedStyleDeclaration { style, host }
    }

    /// Whether reading `id` requires up-to-date layout. Margins and paddings
    /// only force layout when their specified value is layout-relative.
    pub fn is_layout_dependent(&self, id: PropertyId) -> bool {
        use PropertyId::*;
        let style = self.style;
        match id {
            Width | Height => true,
            Top => !style.offsets.top.is_fixed() && style.offsets.top != StyleLength::Auto,
            Right => !style.offsets.right.is_fixed() && style.offsets.right != StyleLength::Auto,
            Bottom => !style.offsets.bottom.is_fixed() && style.offsets.bottom != StyleLength::Auto,
            Left => !style.offsets.left.is_fixed() && style.offsets.left != StyleLength::Auto,
            MarginTop => !style.margins.top.is_fixed(),
            MarginRight => !style.margins.right.is_fixed(),
            MarginBottom => !style.margins.bottom.is_fixed(),
            MarginLeft => !style.margins.left.is_fixed(),
            PaddingTop => !style.paddings.top.is_fixed(),
            PaddingRight => !style.paddings.right.is_fixed(),
            PaddingBottom => !style.paddings.bottom.is_fixed(),
            PaddingLeft => !style.paddings.left.is_fixed(),
            _ => false,
        }
    }

    pub fn property_text(&mut self, id: PropertyId) -> Option<String> {
        self.property_value(id).map(|v| v.to_string())
    }

    /// Computed-style views are read-only by contract.
    pub fn set_property(&mut self, _id: PropertyId, _text: &str) -> Result<(), NoModificationAllowedError> {
        Err(NoModificationAllowedError)
    }

    pub fn property_value(&mut self, id: PropertyId) -> Option<Value> {
        if self.is_layout_dependent(id) {
            self.host.ensure_layout();
        }

        use PropertyId::*;
        let style = self.style;
        let value = match id {
            Color => cached_color(style.color),
            BackgroundColor => cached_color(style.background_color),
            BorderTopColor => cached_color(style.border_colors[0]),
            BorderRightColor => cached_color(style.border_colors[1]),
            BorderBottomColor => cached_color(style.border_colors[2]),
            BorderLeftColor => cached_color(style.border_colors[3]),

            Width => self.box_dimension(style.width, 0),
            Height => self.box_dimension(style.height, 1),
            Top => length_value(style.offsets.top),
            Right => length_value(style.offsets.right),
            Bottom => length_value(style.offsets.bottom),
            Left => length_value(style.offsets.left),
            MarginTop => length_value(style.margins.top),
            MarginRight => length_value(style.margins.right),
            MarginBottom => length_value(style.margins.bottom),
            MarginLeft => length_value(style.margins.left),
            PaddingTop => length_value(style.paddings.top),
            PaddingRight => length_value(style.paddings.right),
            PaddingBottom => length_value(style.paddings.bottom),
            PaddingLeft => length_value(style.paddings.left),
            FontSize => cached_px(style.font_size),
            LineHeight => cached_px(style.line_height),

            BorderTopWidth => cached_px(style.border_widths.top),
            BorderRightWidth => cached_px(style.border_widths.right),
            BorderBottomWidth => cached_px(style.border_widths.bottom),
            BorderLeftWidth => cached_px(style.border_widths.left),
            BorderTopStyle => cached_ident(style.border_styles[0]),
            BorderRightStyle => cached_ident(style.border_styles[1]),
            BorderBottomStyle => cached_ident(style.border_styles[2]),
            BorderLeftStyle => cached_ident(style.border_styles[3]),

            BorderTopLeftRadius => corner_value(style.border_radii[0]),
            BorderTopRightRadius => corner_value(style.border_radii[1]),
            BorderBottomRightRadius => corner_value(style.border_radii[2]),
            BorderBottomLeftRadius => corner_value(style.border_radii[3]),
            BorderRadius => border_radius_shorthand(&style.border_radii),

            BorderWidth => quad_shorthand([
                PrimitiveValue::px(style.border_widths.top),
                PrimitiveValue::px(style.border_widths.right),
                PrimitiveValue::px(style.border_widths.bottom),
                PrimitiveValue::px(style.border_widths.left),
            ]),
            BorderStyle => quad_shorthand(style.border_styles.map(PrimitiveValue::ident)),
            BorderColor => quad_shorthand(style.border_colors.map(PrimitiveValue::color)),
            Margin => quad_shorthand(box_quad(&style.margins)),
            Padding => quad_shorthand(box_quad(&style.paddings)),

            Display => cached_ident(style.display),
            Position => cached_ident(style.position),
            Visibility => cached_ident(style.visibility),
            Opacity => Value::Primitive(PrimitiveValue::number(style.opacity, UnitKind::Number)),
            ZIndex => match style.z_index {
                Some(z) => Value::Primitive(PrimitiveValue::number(z as f32, UnitKind::Number)),
                None => cached_ident(ValueId::Auto),
            },

            BackgroundImage => layer_values(&style.background_layers, |layer| {
                layer.image.clone().unwrap_or_else(|| cached_ident(ValueId::None))
            }),
            MaskImage => layer_values(&style.mask_layers, |layer| {
                layer.image.clone().unwrap_or_else(|| cached_ident(ValueId::None))
            }),
            BackgroundRepeat => layer_values(&style.background_layers, |layer| repeat_value(layer.repeat_x, layer.repeat_y)),
            MaskRepeat => layer_values(&style.mask_layers, |layer| repeat_value(layer.repeat_x, layer.repeat_y)),
            BackgroundPosition => layer_values(&style.background_layers, position_value),
            MaskPosition => layer_values(&style.mask_layers, position_value),
            BackgroundSize => layer_values(&style.background_layers, |layer| fill_size_value(&layer.size)),
            MaskSize => layer_values(&style.mask_layers, |layer| fill_size_value(&layer.size)),
            BackgroundAttachment => layer_values(&style.background_layers, |layer| cached_ident(attachment_ident(layer.attachment))),
            Background => background_shorthand(style),

            BorderImage | WebkitBorderImage => nine_piece_value(&style.border_image),
            BorderImageSource => style.border_image.image.clone().unwrap_or_else(|| cached_ident(ValueId::None)),
            BorderImageSlice => slice_value(&style.border_image),
            BorderImageRepeat => nine_piece_repeat_value(&style.border_image),

            AnimationDuration => comma_list_of(animation_values(&style.animations, |a| seconds_value(a.duration))),
            AnimationDelay => comma_list_of(animation_values(&style.animations, |a| seconds_value(a.delay))),
            TransitionDuration => comma_list_of(animation_values(&style.transitions, |a| seconds_value(a.duration))),
            TransitionDelay => comma_list_of(animation_values(&style.transitions, |a| seconds_value(a.delay))),
            AnimationTimingFunction => comma_list_of(animation_values(&style.animations, |a| timing_value(a.timing))),
            TransitionTimingFunction => comma_list_of(animation_values(&style.transitions, |a| timing_value(a.timing))),
            AnimationIterationCount => comma_list_of(animation_values(&style.animations, |a| match a.iteration_count {
                IterationCount::Infinite => cached_ident(ValueId::Infinite),
                IterationCount::Finite(n) => Value::Primitive(PrimitiveValue::number(n, UnitKind::Number)),
            })),
            AnimationName => comma_list_of(animation_values(&style.animations, |a| match &a.name {
                Some(name) => Value::Primitive(PrimitiveValue::string(name.clone())),
                None => cached_ident(ValueId::None),
            })),
            TransitionProperty => comma_list_of(animation_values(&style.transitions, |a| match a.property {
                TransitionTarget::All => cached_ident(ValueId::All),
                TransitionTarget::None => cached_ident(ValueId::None),
                TransitionTarget::Property(id) => Value::Primitive(PrimitiveValue::property(id)),
            })),

            _ => {
                log_unsupported_once(id);
                return None;
            }
        };
        Some(value)
    }

    fn box_dimension(&self, specified: StyleLength, axis: usize) -> Value {
        if let Some(size) = self.host.border_box() {
            let px = if axis == 0 { size.0 } else { size.1 };
            return cached_px(px);
        }
        length_value(specified)
    }
}

fn box_quad(lengths: &BoxLengths) -> [PrimitiveValue; 4] {
    let prim = |l: StyleLength| match l {
        StyleLength::Auto => PrimitiveValue::ident(ValueId::Auto),
        StyleLength::Fixed(px) => PrimitiveValue::px(px),
        StyleLength::Percent(pct) => PrimitiveValue::percentage(pct),
    };
    [prim(lengths.top), prim(lengths.right), prim(lengths.bottom), prim(lengths.left)]
}

fn attachment_ident(attachment: FillAttachment) -> ValueId {
    match attachment {
        FillAttachment::Scroll => ValueId::Scroll,
        FillAttachment::Fixed => ValueId::Fixed,
        FillAttachment::Local => ValueId::Local,
    }
}

fn quad_shorthand(values: [PrimitiveValue; 4]) -> Value {
    let [top, right, bottom, left] = values;
    Value::Primitive(PrimitiveValue::quad(QuadValue { top, right, bottom, left }))
}

fn corner_value(corner: CornerRadius) -> Value {
    Value::Primitive(PrimitiveValue::pair(PairValue::new(
        PrimitiveValue::px(corner.0),
        PrimitiveValue::px(corner.1),
    )))
}

/// Minimal border-radius serialization: corners are emitted only while a
/// later corner still differs, per the cascading-difference rule.
fn fold_radius_axis(values: [f32; 4]) -> Vec<Value> {
    let [top_left, top_right, bottom_right, bottom_left] = values;
    let show_bottom_left = top_right != bottom_left;
    let show_bottom_right = show_bottom_left || bottom_right != top_left;
    let show_top_right = show_bottom_right || top_right != top_left;

    let mut out = vec![cached_px(top_left)];
    if show_top_right {
        out.push(cached_px(top_right));
    }
    if show_bottom_right {
        out.push(cached_px(bottom_right));
    }
    if show_bottom_left {
        out.push(cached_px(bottom_left));
    }
    out
}

fn border_radius_shorthand(radii: &[CornerRadius; 4]) -> Value {
    let horizontal = fold_radius_axis([radii[0].0, radii[1].0, radii[2].0, radii[3].0]);
    let vertical = fold_radius_axis([radii[0].1, radii[1].1, radii[2].1, radii[3].1]);

    let h_list = Value::List(ValueList::from_items(ListSeparator::Space, horizontal));
    let v_list = Value::List(ValueList::from_items(ListSeparator::Space, vertical));

    if h_list == v_list {
        h_list
    } else {
        Value::List(ValueList::from_items(ListSeparator::Slash, vec![h_list, v_list]))
    }
}

fn layer_values(first: &FillLayer, item: impl Fn(&FillLayer) -> Value) -> Value {
    comma_list_of(layers_of(first).into_iter().map(item).collect())
}

fn animation_values(entries: &[AnimationData], item: impl Fn(&AnimationData) -> Value) -> Vec<Value> {
    if entries.is_empty() {
        vec![item(&AnimationData::default())]
    } else {
        entries.iter().map(item).collect()
    }
}

fn background_shorthand(style: &StyleData) -> Value {
    let layers = layers_of(&style.background_layers);
    let mut items = Vec::with_capacity(layers.len());
    for (index, layer) in layers.iter().enumerate() {
        let mut parts = ValueList::space_separated();
        if index == 0 {
            parts.append(cached_color(style.background_color));
        }
        parts.append(layer.image.clone().unwrap_or_else(|| cached_ident(ValueId::None)));
        parts.append(repeat_value(layer.repeat_x, layer.repeat_y));
        parts.append(cached_ident(attachment_ident(layer.attachment)));
        parts.append(position_value(layer));
        items.push(Value::List(parts));
    }
    comma_list_of(items)
}

fn slice_value(image: &NinePieceImage) -> Value {
    let prim = |s: SliceLength| match s {
        SliceLength::Number(n) => PrimitiveValue::number(n, UnitKind::Number),
        SliceLength::Percent(pct) => PrimitiveValue::percentage(pct),
    };
    Value::BorderImageSlice(BorderImageSliceValue {
        slices: QuadValue {
            top: prim(image.slices.top),
            right: prim(image.slices.right),
            bottom: prim(image.slices.bottom),
            left: prim(image.slices.left),
        },
        fill: image.fill,
    })
}

fn nine_piece_rule_ident(rule: NinePieceRule) -> ValueId {
    match rule {
        NinePieceRule::Stretch => ValueId::Stretch,
        NinePieceRule::Repeat => ValueId::Repeat,
        NinePieceRule::Round => ValueId::Round,
        NinePieceRule::Space => ValueId::Space,
    }
}

fn nine_piece_repeat_value(image: &NinePieceImage) -> Value {
    Value::Primitive(PrimitiveValue::pair(PairValue::new(
        PrimitiveValue::ident(nine_piece_rule_ident(image.horizontal_rule)),
        PrimitiveValue::ident(nine_piece_rule_ident(image.vertical_rule)),
    )))
}

fn border_image_length_prim(length: BorderImageLength) -> PrimitiveValue {
    match length {
        BorderImageLength::Auto => PrimitiveValue::ident(ValueId::Auto),
        BorderImageLength::Number(n) => PrimitiveValue::number(n, UnitKind::Number),
        BorderImageLength::Length(px) => PrimitiveValue::px(px),
        BorderImageLength::Percent(pct) => PrimitiveValue::percentage(pct),
    }
}

fn border_image_box_quad(lengths: BorderImageLengthBox) -> Value {
    Value::Primitive(PrimitiveValue::quad(QuadValue {
        top: border_image_length_prim(lengths.top),
        right: border_image_length_prim(lengths.right),
        bottom: border_image_length_prim(lengths.bottom),
        left: border_image_length_prim(lengths.left),
    }))
}

/// Rebuilds the combined border-image value in the same shape the parser's
/// legacy path produces: image, slash triple, repeat pair.
fn nine_piece_value(image: &NinePieceImage) -> Value {
    let Some(source) = &image.image else {
        return cached_ident(ValueId::None);
    };

    let mut list = ValueList::space_separated();
    list.append(source.clone());

    let mut slash = ValueList::slash_separated();
    slash.append(slice_value(image));
    slash.append(border_image_box_quad(image.border_slices));
    slash.append(border_image_box_quad(image.outset));
    list.append(Value::List(slash));

    list.append(nine_piece_repeat_value(image));
    Value::List(list)
}
