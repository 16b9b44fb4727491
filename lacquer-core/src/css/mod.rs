//! The CSS value model and property-value pipeline.
//!
//! This document assumes familiarity with CSS.
//!
//! ## Overview
//!
//! Raw declaration text enters through [`parse_value`], which tries three
//! cheap recognizers first (simple lengths, colors, closed keyword domains)
//! and falls back to the full cssparser-driven grammar tier for everything
//! else: functions, shadows, transforms, gradients, calc(), shorthands.
//! Successful parses commit [`Value`] trees into a [`DeclarationSet`];
//! invalid declarations are dropped whole, never partially applied.
//!
//! Resolved values flow onward through [`StyleMap`] into typed style slots
//! (fill layers, nine-piece border images, animation and transition fields),
//! and [`ComputedStyleDeclaration`] reads those slots back out as values and
//! canonical text for style introspection.
//!
//! Values are immutable once constructed and cheap to share; common keyword,
//! small-integer, and color singletons come from a process-wide
//! [`ValuePool`].
//!
//! ## Value shapes
//!
//! | Kind | Example input | Modeled as |
//! |---|---|---|
//! | keyword | `auto` | [`PrimitiveValue`] with an identifier tag |
//! | dimension | `12px`, `50%`, `90deg` | [`PrimitiveValue`] with a unit tag |
//! | color | `#abc`, `rgb(1, 2, 3)` | packed-RGBA [`PrimitiveValue`] |
//! | calc | `calc(100% - 8px)` | [`PrimitiveValue`] holding a calc tree |
//! | list | `1s, 2s` | [`ValueList`] (space, comma, or slash) |
//! | shadow | `2px 2px 4px red` | [`ShadowValue`] |
//! | transform | `translate(10px)` | [`TransformValue`] per function |
//! | timing | `cubic-bezier(0, 0, 1, 1)` | [`TimingFunction`] |
//! | border-image slice | `10 20 fill` | [`BorderImageSliceValue`] |
//! | image | `url("a.png")`, gradients | [`ImageValue`] / [`GradientValue`] |
//!
//! All properties accept `initial | inherit`.

mod calc;
mod computed;
mod declaration;
pub(crate) mod fast_paths;
mod list;
pub(crate) mod parser;
mod pool;
mod primitive;
mod properties;
mod style_map;
mod value;

pub use calc::{CalcCategory, CalcExpression, CalcNode, CalcOp};
pub use computed::{BoxLengths, ComputedStyleDeclaration, CornerRadius, LayoutHost, NoLayout, NoModificationAllowedError, StyleData};
pub use declaration::{Declaration, DeclarationSet, ParseMode, parse_single_value, parse_value};
pub use list::{ListSeparator, ValueList};
pub use pool::ValuePool;
pub use primitive::{
    ConversionContext, LENGTH_UNIT_TYPE_COUNT, LengthArray, LengthUnitType, PairValue, PrimitiveValue, QuadValue, RectValue, Rgba, ShapeValue,
    UnitCategory, UnitKind, round_for_imprecise_conversion_to_float, round_for_imprecise_conversion_to_int,
};
pub use properties::{PropertyId, ValueId, is_valid_keyword_value};
pub use style_map::{
    AnimationData, AnimationDirection, AnimationFillMode, AnimationPlayState, BlendMode, BorderImageLength, BorderImageLengthBox, BorderWidths,
    CompositeOperator, FillAttachment, FillBox, FillLayer, FillLayerRole, FillRepeat, FillSize, HorizontalOrigin, IterationCount, MaskSourceType,
    NinePieceImage, NinePieceRule, SliceBox, SliceLength, StyleMap, StyleLength, Timing, TransitionTarget, VerticalOrigin, for_each_layer_value,
};
pub use value::{
    BorderImageSliceValue, FilterOp, FilterValue, FontValue, GradientStop, GradientValue, ImageValue, ShadowValue, SideOrCorner, StepPosition,
    TimingFunction, TransformOp, TransformValue, Value,
};

#[inline]
pub(crate) fn log_error(msg: impl std::fmt::Display, location: cssparser::SourceLocation) {
    log::error!("{msg} at {}:{}", location.line + 1, location.column);
}
