//! Mapping of resolved values into typed style slots.
//!
//! Each function maps one field: the `initial` marker resets it to the
//! per-role default, a well-shaped value assigns it, and anything else is a
//! silent no-op. A correct parser never produces the last case; mapping must
//! not crash if something slips through.

use std::sync::Arc;

use crate::css::primitive::{ConversionContext, PrimitiveValue, UnitCategory};
use crate::css::properties::{PropertyId, ValueId};
use crate::css::value::{StepPosition, TimingFunction, Value};

/// A resolved style length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleLength {
    Auto,
    Fixed(f32),
    Percent(f32),
}

impl StyleLength {
    pub fn is_fixed(self) -> bool {
        matches!(self, StyleLength::Fixed(_))
    }
}

// ---------- Fill layers ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillLayerRole {
    Background,
    Mask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAttachment {
    Scroll,
    Fixed,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillBox {
    Border,
    Padding,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRepeat {
    Repeat,
    NoRepeat,
    Round,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeOperator {
    Add,
    Subtract,
    Intersect,
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSourceType {
    Alpha,
    Luminance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalOrigin {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalOrigin {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FillSize {
    Size(StyleLength, StyleLength),
    Contain,
    Cover,
}

/// One entry in a background or mask layer stack.
#[derive(Debug, Clone, PartialEq)]
pub struct FillLayer {
    role: FillLayerRole,
    pub attachment: FillAttachment,
    pub clip: FillBox,
    pub origin: FillBox,
    pub composite: CompositeOperator,
    pub blend_mode: BlendMode,
    pub image: Option<Value>,
    pub repeat_x: FillRepeat,
    pub repeat_y: FillRepeat,
    pub size: FillSize,
    pub x_position: StyleLength,
    pub y_position: StyleLength,
    pub background_x_origin: HorizontalOrigin,
    pub background_y_origin: VerticalOrigin,
    pub mask_source_type: MaskSourceType,
    pub next: Option<Box<FillLayer>>,
}

impl FillLayer {
    pub fn new(role: FillLayerRole) -> FillLayer {
        FillLayer {
            role,
            attachment: FillLayer::initial_attachment(role),
            clip: FillLayer::initial_clip(role),
            origin: FillLayer::initial_origin(role),
            composite: FillLayer::initial_composite(role),
            blend_mode: BlendMode::Normal,
            image: None,
            repeat_x: FillLayer::initial_repeat(role),
            repeat_y: FillLayer::initial_repeat(role),
            size: FillLayer::initial_size(role),
            x_position: StyleLength::Percent(0.0),
            y_position: StyleLength::Percent(0.0),
            background_x_origin: HorizontalOrigin::Left,
            background_y_origin: VerticalOrigin::Top,
            mask_source_type: FillLayer::initial_mask_source_type(role),
            next: None,
        }
    }

    pub fn role(&self) -> FillLayerRole {
        self.role
    }

    pub fn initial_attachment(_role: FillLayerRole) -> FillAttachment {
        FillAttachment::Scroll
    }

    pub fn initial_clip(_role: FillLayerRole) -> FillBox {
        FillBox::Border
    }

    /// Backgrounds paint from the padding box, masks from the border box.
    pub fn initial_origin(role: FillLayerRole) -> FillBox {
        match role {
            FillLayerRole::Background => FillBox::Padding,
            FillLayerRole::Mask => FillBox::Border,
        }
    }

    pub fn initial_composite(_role: FillLayerRole) -> CompositeOperator {
        CompositeOperator::Add
    }

    pub fn initial_repeat(_role: FillLayerRole) -> FillRepeat {
        FillRepeat::Repeat
    }

    pub fn initial_size(_role: FillLayerRole) -> FillSize {
        FillSize::Size(StyleLength::Auto, StyleLength::Auto)
    }

    pub fn initial_mask_source_type(_role: FillLayerRole) -> MaskSourceType {
        MaskSourceType::Alpha
    }
}

// ---------- Nine-piece image ----------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliceLength {
    Number(f32),
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceBox {
    pub top: SliceLength,
    pub right: SliceLength,
    pub bottom: SliceLength,
    pub left: SliceLength,
}

/// `border-image-width`/`-outset` side value: number (border-width
/// multiples), a resolved length, a percentage, or auto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderImageLength {
    Auto,
    Number(f32),
    Length(f32),
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderImageLengthBox {
    pub top: BorderImageLength,
    pub right: BorderImageLength,
    pub bottom: BorderImageLength,
    pub left: BorderImageLength,
}

impl BorderImageLengthBox {
    pub fn uniform(value: BorderImageLength) -> BorderImageLengthBox {
        BorderImageLengthBox {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NinePieceRule {
    Stretch,
    Repeat,
    Round,
    Space,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NinePieceImage {
    pub image: Option<Value>,
    pub slices: SliceBox,
    pub fill: bool,
    pub border_slices: BorderImageLengthBox,
    pub outset: BorderImageLengthBox,
    pub horizontal_rule: NinePieceRule,
    pub vertical_rule: NinePieceRule,
}

impl Default for NinePieceImage {
    fn default() -> Self {
        NinePieceImage {
            image: None,
            slices: SliceBox {
                top: SliceLength::Percent(100.0),
                right: SliceLength::Percent(100.0),
                bottom: SliceLength::Percent(100.0),
                left: SliceLength::Percent(100.0),
            },
            fill: false,
            border_slices: BorderImageLengthBox::uniform(BorderImageLength::Number(1.0)),
            outset: BorderImageLengthBox::uniform(BorderImageLength::Number(0.0)),
            horizontal_rule: NinePieceRule::Stretch,
            vertical_rule: NinePieceRule::Stretch,
        }
    }
}

/// Literal border widths, the target of the legacy `-webkit-border-image`
/// back-propagation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for BorderWidths {
    fn default() -> Self {
        BorderWidths {
            top: 3.0,
            right: 3.0,
            bottom: 3.0,
            left: 3.0,
        }
    }
}

// ---------- Animations and transitions ----------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationCount {
    Finite(f32),
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationDirection {
    Normal,
    Alternate,
    Reverse,
    AlternateReverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationFillMode {
    None,
    Forwards,
    Backwards,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPlayState {
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTarget {
    All,
    None,
    Property(PropertyId),
}

/// A resolved timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    Steps { steps: i32, position: StepPosition },
}

impl Timing {
    pub const EASE: Timing = Timing::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
    pub const LINEAR: Timing = Timing::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    pub const EASE_IN: Timing = Timing::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    pub const EASE_OUT: Timing = Timing::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    pub const EASE_IN_OUT: Timing = Timing::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };
    pub const STEP_START: Timing = Timing::Steps {
        steps: 1,
        position: StepPosition::Start,
    };
    pub const STEP_MIDDLE: Timing = Timing::Steps {
        steps: 1,
        position: StepPosition::Middle,
    };
    pub const STEP_END: Timing = Timing::Steps {
        steps: 1,
        position: StepPosition::End,
    };
}

/// Typed fields for one animation or transition entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationData {
    pub name: Option<Arc<str>>,
    pub duration: f32,
    pub delay: f32,
    pub iteration_count: IterationCount,
    pub direction: AnimationDirection,
    pub fill_mode: AnimationFillMode,
    pub play_state: AnimationPlayState,
    pub property: TransitionTarget,
    pub timing: Timing,
}

impl Default for AnimationData {
    fn default() -> Self {
        AnimationData {
            name: None,
            duration: AnimationData::initial_duration(),
            delay: AnimationData::initial_delay(),
            iteration_count: AnimationData::initial_iteration_count(),
            direction: AnimationData::initial_direction(),
            fill_mode: AnimationData::initial_fill_mode(),
            play_state: AnimationData::initial_play_state(),
            property: AnimationData::initial_property(),
            timing: AnimationData::initial_timing(),
        }
    }
}

impl AnimationData {
    pub fn initial_duration() -> f32 {
        0.0
    }

    pub fn initial_delay() -> f32 {
        0.0
    }

    pub fn initial_iteration_count() -> IterationCount {
        IterationCount::Finite(1.0)
    }

    pub fn initial_direction() -> AnimationDirection {
        AnimationDirection::Normal
    }

    pub fn initial_fill_mode() -> AnimationFillMode {
        AnimationFillMode::None
    }

    pub fn initial_play_state() -> AnimationPlayState {
        AnimationPlayState::Running
    }

    pub fn initial_property() -> TransitionTarget {
        TransitionTarget::All
    }

    pub fn initial_timing() -> Timing {
        Timing::EASE
    }
}

/// Iterates the per-layer values of a comma list, or the value itself when
/// it is not a list. The resolver walks this when distributing values over a
/// layer stack.
pub fn for_each_layer_value<'v>(value: &'v Value) -> Box<dyn Iterator<Item = &'v Value> + 'v> {
    match value.as_list() {
        Some(list) => Box::new(list.iter()),
        None => Box::new(std::iter::once(value)),
    }
}

/// Maps resolved values into typed style slots, converting lengths through
/// the supplied context.
pub struct StyleMap<'a> {
    ctx: &'a ConversionContext,
    /// Whether `step-middle` timing is permitted in this context.
    pub allows_step_middle: bool,
}

impl<'a> StyleMap<'a> {
    pub fn new(ctx: &'a ConversionContext) -> StyleMap<'a> {
        StyleMap {
            ctx,
            allows_step_middle: false,
        }
    }

    fn style_length(&self, value: &PrimitiveValue) -> Option<StyleLength> {
        if value.ident_value() == Some(ValueId::Auto) {
            return Some(StyleLength::Auto);
        }
        match value.category() {
            UnitCategory::Percent => value.number_value().map(StyleLength::Percent),
            UnitCategory::Length => value.compute_length_f32(self.ctx).map(StyleLength::Fixed),
            _ => value.calc_value().and_then(|_| value.compute_length_f32(self.ctx).map(StyleLength::Fixed)),
        }
    }

    // ----- Fill layer fields -----

    pub fn map_fill_attachment(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.attachment = FillLayer::initial_attachment(layer.role);
            return;
        }
        match value.ident_value() {
            Some(ValueId::Scroll) => layer.attachment = FillAttachment::Scroll,
            Some(ValueId::Fixed) => layer.attachment = FillAttachment::Fixed,
            Some(ValueId::Local) => layer.attachment = FillAttachment::Local,
            _ => {}
        }
    }

    fn fill_box(value: &Value) -> Option<FillBox> {
        match value.ident_value() {
            Some(ValueId::BorderBox) => Some(FillBox::Border),
            Some(ValueId::PaddingBox) => Some(FillBox::Padding),
            Some(ValueId::ContentBox) => Some(FillBox::Content),
            _ => None,
        }
    }

    pub fn map_fill_clip(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.clip = FillLayer::initial_clip(layer.role);
            return;
        }
        if let Some(fill_box) = StyleMap::fill_box(value) {
            layer.clip = fill_box;
        }
    }

    pub fn map_fill_origin(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.origin = FillLayer::initial_origin(layer.role);
            return;
        }
        if let Some(fill_box) = StyleMap::fill_box(value) {
            layer.origin = fill_box;
        }
    }

    pub fn map_fill_composite(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.composite = FillLayer::initial_composite(layer.role);
            return;
        }
        match value.ident_value() {
            Some(ValueId::Add) => layer.composite = CompositeOperator::Add,
            Some(ValueId::Subtract) => layer.composite = CompositeOperator::Subtract,
            Some(ValueId::Intersect) => layer.composite = CompositeOperator::Intersect,
            Some(ValueId::Exclude) => layer.composite = CompositeOperator::Exclude,
            _ => {}
        }
    }

    pub fn map_fill_blend_mode(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.blend_mode = BlendMode::Normal;
            return;
        }
        match value.ident_value() {
            Some(ValueId::Normal) => layer.blend_mode = BlendMode::Normal,
            Some(ValueId::Multiply) => layer.blend_mode = BlendMode::Multiply,
            Some(ValueId::Screen) => layer.blend_mode = BlendMode::Screen,
            Some(ValueId::Overlay) => layer.blend_mode = BlendMode::Overlay,
            Some(ValueId::Darken) => layer.blend_mode = BlendMode::Darken,
            Some(ValueId::Lighten) => layer.blend_mode = BlendMode::Lighten,
            _ => {}
        }
    }

    pub fn map_fill_image(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() || value.ident_value() == Some(ValueId::None) {
            layer.image = None;
            return;
        }
        if value.is_image_like() {
            layer.image = Some(value.clone());
        }
    }

    fn fill_repeat(id: ValueId) -> Option<FillRepeat> {
        match id {
            ValueId::Repeat => Some(FillRepeat::Repeat),
            ValueId::NoRepeat => Some(FillRepeat::NoRepeat),
            ValueId::Round => Some(FillRepeat::Round),
            ValueId::Space => Some(FillRepeat::Space),
            _ => None,
        }
    }

    pub fn map_fill_repeat(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.repeat_x = FillLayer::initial_repeat(layer.role);
            layer.repeat_y = FillLayer::initial_repeat(layer.role);
            return;
        }
        let Some(pair) = value.as_primitive().and_then(PrimitiveValue::pair_value) else {
            return;
        };
        if let (Some(x), Some(y)) = (
            pair.first.ident_value().and_then(StyleMap::fill_repeat),
            pair.second.ident_value().and_then(StyleMap::fill_repeat),
        ) {
            layer.repeat_x = x;
            layer.repeat_y = y;
        }
    }

    pub fn map_fill_size(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.size = FillLayer::initial_size(layer.role);
            return;
        }
        match value.ident_value() {
            Some(ValueId::Contain) => {
                layer.size = FillSize::Contain;
                return;
            }
            Some(ValueId::Cover) => {
                layer.size = FillSize::Cover;
                return;
            }
            _ => {}
        }
        let Some(pair) = value.as_primitive().and_then(PrimitiveValue::pair_value) else {
            return;
        };
        if let (Some(w), Some(h)) = (self.style_length(&pair.first), self.style_length(&pair.second)) {
            layer.size = FillSize::Size(w, h);
        }
    }

    fn x_component(&self, value: &PrimitiveValue) -> Option<(StyleLength, HorizontalOrigin)> {
        match value.ident_value() {
            Some(ValueId::Left) => Some((StyleLength::Percent(0.0), HorizontalOrigin::Left)),
            Some(ValueId::Right) => Some((StyleLength::Percent(0.0), HorizontalOrigin::Right)),
            Some(ValueId::Center) => Some((StyleLength::Percent(50.0), HorizontalOrigin::Left)),
            Some(_) => None,
            None => self.style_length(value).map(|l| (l, HorizontalOrigin::Left)),
        }
    }

    fn y_component(&self, value: &PrimitiveValue) -> Option<(StyleLength, VerticalOrigin)> {
        match value.ident_value() {
            Some(ValueId::Top) => Some((StyleLength::Percent(0.0), VerticalOrigin::Top)),
            Some(ValueId::Bottom) => Some((StyleLength::Percent(0.0), VerticalOrigin::Bottom)),
            Some(ValueId::Center) => Some((StyleLength::Percent(50.0), VerticalOrigin::Top)),
            Some(_) => None,
            None => self.style_length(value).map(|l| (l, VerticalOrigin::Top)),
        }
    }

    pub fn map_fill_position(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.x_position = StyleLength::Percent(0.0);
            layer.y_position = StyleLength::Percent(0.0);
            layer.background_x_origin = HorizontalOrigin::Left;
            layer.background_y_origin = VerticalOrigin::Top;
            return;
        }
        let Some(pair) = value.as_primitive().and_then(PrimitiveValue::pair_value) else {
            return;
        };
        if let (Some((x, x_origin)), Some((y, y_origin))) = (self.x_component(&pair.first), self.y_component(&pair.second)) {
            layer.x_position = x;
            layer.y_position = y;
            layer.background_x_origin = x_origin;
            layer.background_y_origin = y_origin;
        }
    }

    pub fn map_fill_mask_source_type(&self, layer: &mut FillLayer, value: &Value) {
        if value.is_initial() {
            layer.mask_source_type = FillLayer::initial_mask_source_type(layer.role);
            return;
        }
        match value.ident_value() {
            Some(ValueId::Alpha) => layer.mask_source_type = MaskSourceType::Alpha,
            Some(ValueId::Luminance) => layer.mask_source_type = MaskSourceType::Luminance,
            _ => {}
        }
    }

    // ----- Nine-piece image -----

    /// Maps a combined nine-piece shorthand value, detecting each component
    /// by its kind. For the deprecated `-webkit-border-image`, parsed border
    /// slices additionally overwrite the literal border widths.
    pub fn map_nine_piece_image(&self, id: PropertyId, value: &Value, image: &mut NinePieceImage, border: &mut BorderWidths) {
        if value.is_initial() {
            *image = NinePieceImage::default();
            return;
        }

        let Some(list) = value.as_list() else {
            return;
        };

        for item in list {
            if item.is_image_like() {
                image.image = Some(item.clone());
            } else if item.as_border_image_slice().is_some() {
                self.map_nine_piece_image_slice(image, item);
            } else if let Some(slash) = item.as_list() {
                if let Some(slice) = slash.item(0) {
                    self.map_nine_piece_image_slice(image, slice);
                }
                if let Some(width) = slash.item(1)
                    && let Some(widths) = self.map_nine_piece_image_quad(width)
                {
                    image.border_slices = widths;
                }
                if let Some(outset) = slash.item(2)
                    && let Some(outsets) = self.map_nine_piece_image_quad(outset)
                {
                    image.outset = outsets;
                }
            } else if item.as_primitive().and_then(PrimitiveValue::pair_value).is_some() {
                self.map_nine_piece_image_repeat(image, item);
            }
        }

        if id == PropertyId::WebkitBorderImage {
            let widths = image.border_slices;
            let mut apply = |target: &mut f32, width: BorderImageLength| {
                if let BorderImageLength::Length(px) = width {
                    *target = px;
                }
            };
            apply(&mut border.top, widths.top);
            apply(&mut border.right, widths.right);
            apply(&mut border.bottom, widths.bottom);
            apply(&mut border.left, widths.left);
        }
    }

    pub fn map_nine_piece_image_slice(&self, image: &mut NinePieceImage, value: &Value) {
        if value.is_initial() {
            let initial = NinePieceImage::default();
            image.slices = initial.slices;
            image.fill = initial.fill;
            return;
        }
        let Some(slice) = value.as_border_image_slice() else {
            return;
        };

        let side = |v: &PrimitiveValue| -> Option<SliceLength> {
            match v.category() {
                UnitCategory::Percent => v.number_value().map(SliceLength::Percent),
                UnitCategory::Number => v.number_value().map(SliceLength::Number),
                _ => None,
            }
        };
        if let (Some(top), Some(right), Some(bottom), Some(left)) = (
            side(&slice.slices.top),
            side(&slice.slices.right),
            side(&slice.slices.bottom),
            side(&slice.slices.left),
        ) {
            image.slices = SliceBox { top, right, bottom, left };
            image.fill = slice.fill;
        }
    }

    /// Converts a quad primitive into a border-image length box.
    pub fn map_nine_piece_image_quad(&self, value: &Value) -> Option<BorderImageLengthBox> {
        let quad = value.as_primitive().and_then(PrimitiveValue::quad_value)?;
        let side = |v: &PrimitiveValue| -> Option<BorderImageLength> {
            if v.ident_value() == Some(ValueId::Auto) {
                return Some(BorderImageLength::Auto);
            }
            match v.category() {
                UnitCategory::Number => v.number_value().map(BorderImageLength::Number),
                UnitCategory::Percent => v.number_value().map(BorderImageLength::Percent),
                UnitCategory::Length => v.compute_length_f32(self.ctx).map(BorderImageLength::Length),
                _ => None,
            }
        };
        Some(BorderImageLengthBox {
            top: side(&quad.top)?,
            right: side(&quad.right)?,
            bottom: side(&quad.bottom)?,
            left: side(&quad.left)?,
        })
    }

    pub fn map_nine_piece_image_width(&self, image: &mut NinePieceImage, value: &Value) {
        if value.is_initial() {
            image.border_slices = NinePieceImage::default().border_slices;
            return;
        }
        if let Some(widths) = self.map_nine_piece_image_quad(value) {
            image.border_slices = widths;
        }
    }

    pub fn map_nine_piece_image_outset(&self, image: &mut NinePieceImage, value: &Value) {
        if value.is_initial() {
            image.outset = NinePieceImage::default().outset;
            return;
        }
        if let Some(outsets) = self.map_nine_piece_image_quad(value) {
            image.outset = outsets;
        }
    }

    pub fn map_nine_piece_image_repeat(&self, image: &mut NinePieceImage, value: &Value) {
        if value.is_initial() {
            image.horizontal_rule = NinePieceRule::Stretch;
            image.vertical_rule = NinePieceRule::Stretch;
            return;
        }
        let Some(pair) = value.as_primitive().and_then(PrimitiveValue::pair_value) else {
            return;
        };
        let rule = |v: &PrimitiveValue| -> Option<NinePieceRule> {
            match v.ident_value() {
                Some(ValueId::Stretch) => Some(NinePieceRule::Stretch),
                Some(ValueId::Repeat) => Some(NinePieceRule::Repeat),
                Some(ValueId::Round) => Some(NinePieceRule::Round),
                Some(ValueId::Space) => Some(NinePieceRule::Space),
                _ => None,
            }
        };
        if let (Some(h), Some(v)) = (rule(&pair.first), rule(&pair.second)) {
            image.horizontal_rule = h;
            image.vertical_rule = v;
        }
    }

    pub fn map_nine_piece_image_source(&self, image: &mut NinePieceImage, value: &Value) {
        if value.is_initial() || value.ident_value() == Some(ValueId::None) {
            image.image = None;
            return;
        }
        if value.is_image_like() {
            image.image = Some(value.clone());
        }
    }

    // ----- Animations and transitions -----

    pub fn map_animation_duration(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.duration = AnimationData::initial_duration();
            return;
        }
        if let Some(seconds) = value.as_primitive().filter(|p| p.unit().is_time()).and_then(PrimitiveValue::canonical_number) {
            animation.duration = seconds as f32;
        }
    }

    pub fn map_animation_delay(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.delay = AnimationData::initial_delay();
            return;
        }
        if let Some(seconds) = value.as_primitive().filter(|p| p.unit().is_time()).and_then(PrimitiveValue::canonical_number) {
            animation.delay = seconds as f32;
        }
    }

    pub fn map_animation_name(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() || value.ident_value() == Some(ValueId::None) {
            animation.name = None;
            return;
        }
        if let Some(name) = value.as_primitive().and_then(PrimitiveValue::string_value) {
            animation.name = Some(name.clone());
        }
    }

    pub fn map_animation_iteration_count(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.iteration_count = AnimationData::initial_iteration_count();
            return;
        }
        if value.ident_value() == Some(ValueId::Infinite) {
            animation.iteration_count = IterationCount::Infinite;
            return;
        }
        if let Some(count) = value.as_primitive().and_then(PrimitiveValue::number_value) {
            animation.iteration_count = IterationCount::Finite(count);
        }
    }

    pub fn map_animation_direction(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.direction = AnimationData::initial_direction();
            return;
        }
        match value.ident_value() {
            Some(ValueId::Normal) => animation.direction = AnimationDirection::Normal,
            Some(ValueId::Alternate) => animation.direction = AnimationDirection::Alternate,
            Some(ValueId::Reverse) => animation.direction = AnimationDirection::Reverse,
            Some(ValueId::AlternateReverse) => animation.direction = AnimationDirection::AlternateReverse,
            _ => {}
        }
    }

    pub fn map_animation_fill_mode(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.fill_mode = AnimationData::initial_fill_mode();
            return;
        }
        match value.ident_value() {
            Some(ValueId::None) => animation.fill_mode = AnimationFillMode::None,
            Some(ValueId::Forwards) => animation.fill_mode = AnimationFillMode::Forwards,
            Some(ValueId::Backwards) => animation.fill_mode = AnimationFillMode::Backwards,
            Some(ValueId::Both) => animation.fill_mode = AnimationFillMode::Both,
            _ => {}
        }
    }

    pub fn map_animation_play_state(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.play_state = AnimationData::initial_play_state();
            return;
        }
        match value.ident_value() {
            Some(ValueId::Running) => animation.play_state = AnimationPlayState::Running,
            Some(ValueId::Paused) => animation.play_state = AnimationPlayState::Paused,
            _ => {}
        }
    }

    pub fn map_animation_property(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.property = AnimationData::initial_property();
            return;
        }
        match value.ident_value() {
            Some(ValueId::All) => {
                animation.property = TransitionTarget::All;
                return;
            }
            Some(ValueId::None) => {
                animation.property = TransitionTarget::None;
                return;
            }
            _ => {}
        }
        if let Some(id) = value.as_primitive().and_then(PrimitiveValue::property_value) {
            animation.property = TransitionTarget::Property(id);
        }
    }

    /// Keyword presets map to the canonical curves; `step-middle` only in
    /// contexts that allow it, otherwise the initial timing function.
    pub fn map_animation_timing_function(&self, animation: &mut AnimationData, value: &Value) {
        if value.is_initial() {
            animation.timing = AnimationData::initial_timing();
            return;
        }
        match value.ident_value() {
            Some(ValueId::Ease) => {
                animation.timing = Timing::EASE;
                return;
            }
            Some(ValueId::Linear) => {
                animation.timing = Timing::LINEAR;
                return;
            }
            Some(ValueId::EaseIn) => {
                animation.timing = Timing::EASE_IN;
                return;
            }
            Some(ValueId::EaseOut) => {
                animation.timing = Timing::EASE_OUT;
                return;
            }
            Some(ValueId::EaseInOut) => {
                animation.timing = Timing::EASE_IN_OUT;
                return;
            }
            Some(ValueId::StepStart) => {
                animation.timing = Timing::STEP_START;
                return;
            }
            Some(ValueId::StepEnd) => {
                animation.timing = Timing::STEP_END;
                return;
            }
            Some(ValueId::StepMiddle) => {
                animation.timing = if self.allows_step_middle {
                    Timing::STEP_MIDDLE
                } else {
                    AnimationData::initial_timing()
                };
                return;
            }
            _ => {}
        }
        match value.as_timing_function() {
            Some(TimingFunction::CubicBezier { x1, y1, x2, y2 }) => {
                animation.timing = Timing::CubicBezier {
                    x1: *x1,
                    y1: *y1,
                    x2: *x2,
                    y2: *y2,
                };
            }
            Some(TimingFunction::Steps { steps, position }) => {
                animation.timing = Timing::Steps {
                    steps: *steps,
                    position: *position,
                };
            }
            None => {}
        }
    }
}
