use std::fmt::{self, Display};
use std::sync::Arc;

use cssparser::{match_ignore_ascii_case, serialize_identifier, serialize_string};

use crate::css::calc::{CalcCategory, CalcExpression};
use crate::css::properties::{PropertyId, ValueId};

/// Unit tags for primitive values.
///
/// Discriminants are explicit because several predicates are contiguous range
/// checks: the absolute/font-relative length run is `Ems..=Pc`, the viewport
/// run is `Vw..=Vmax`. Keep those runs intact when adding tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum UnitKind {
    Unknown = 0,
    Number = 1,
    Percentage = 2,
    Ems = 3,
    Exs = 4,
    Px = 5,
    Cm = 6,
    Mm = 7,
    In = 8,
    Pt = 9,
    Pc = 10,
    Deg = 11,
    Rad = 12,
    Grad = 13,
    Turn = 14,
    Ms = 15,
    S = 16,
    Hz = 17,
    Khz = 18,
    Dpi = 19,
    Dpcm = 20,
    Dppx = 21,
    Rems = 22,
    Chs = 23,
    Vw = 24,
    Vh = 25,
    Vmin = 26,
    Vmax = 27,
    String = 28,
    Uri = 29,
    Ident = 30,
    Attr = 31,
    Color = 32,
    Rect = 33,
    Quad = 34,
    Pair = 35,
    Calc = 36,
    Shape = 37,
    PropertyRef = 38,
}

/// The eight unit categories the numeric validators classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Number,
    Percent,
    Length,
    Angle,
    Time,
    Frequency,
    Resolution,
    Other,
}

impl UnitKind {
    pub const ALL: [UnitKind; 39] = [
        UnitKind::Unknown,
        UnitKind::Number,
        UnitKind::Percentage,
        UnitKind::Ems,
        UnitKind::Exs,
        UnitKind::Px,
        UnitKind::Cm,
        UnitKind::Mm,
        UnitKind::In,
        UnitKind::Pt,
        UnitKind::Pc,
        UnitKind::Deg,
        UnitKind::Rad,
        UnitKind::Grad,
        UnitKind::Turn,
        UnitKind::Ms,
        UnitKind::S,
        UnitKind::Hz,
        UnitKind::Khz,
        UnitKind::Dpi,
        UnitKind::Dpcm,
        UnitKind::Dppx,
        UnitKind::Rems,
        UnitKind::Chs,
        UnitKind::Vw,
        UnitKind::Vh,
        UnitKind::Vmin,
        UnitKind::Vmax,
        UnitKind::String,
        UnitKind::Uri,
        UnitKind::Ident,
        UnitKind::Attr,
        UnitKind::Color,
        UnitKind::Rect,
        UnitKind::Quad,
        UnitKind::Pair,
        UnitKind::Calc,
        UnitKind::Shape,
        UnitKind::PropertyRef,
    ];

    pub fn category(self) -> UnitCategory {
        match self {
            UnitKind::Number => UnitCategory::Number,
            UnitKind::Percentage => UnitCategory::Percent,
            _ if self.is_length() => UnitCategory::Length,
            UnitKind::Deg | UnitKind::Rad | UnitKind::Grad | UnitKind::Turn => UnitCategory::Angle,
            UnitKind::Ms | UnitKind::S => UnitCategory::Time,
            UnitKind::Hz | UnitKind::Khz => UnitCategory::Frequency,
            UnitKind::Dpi | UnitKind::Dpcm | UnitKind::Dppx => UnitCategory::Resolution,
            _ => UnitCategory::Other,
        }
    }

    /// Length units: `Ems..=Pc` plus rems, chs, and the viewport range.
    pub fn is_length(self) -> bool {
        let tag = self as u8;
        (UnitKind::Ems as u8..=UnitKind::Pc as u8).contains(&tag)
            || tag == UnitKind::Rems as u8
            || tag == UnitKind::Chs as u8
            || self.is_viewport_percentage_length()
    }

    pub fn is_font_relative_length(self) -> bool {
        matches!(self, UnitKind::Ems | UnitKind::Exs | UnitKind::Rems | UnitKind::Chs)
    }

    pub fn is_viewport_percentage_length(self) -> bool {
        let tag = self as u8;
        (UnitKind::Vw as u8..=UnitKind::Vmax as u8).contains(&tag)
    }

    pub fn is_angle(self) -> bool {
        matches!(self, UnitKind::Deg | UnitKind::Rad | UnitKind::Grad | UnitKind::Turn)
    }

    pub fn is_time(self) -> bool {
        matches!(self, UnitKind::Ms | UnitKind::S)
    }

    /// The dimension-token suffix that parses back to this unit.
    pub fn from_unit_str(unit: &str) -> Option<UnitKind> {
        Some(match_ignore_ascii_case! { unit,
            "em" => UnitKind::Ems,
            "ex" => UnitKind::Exs,
            "px" => UnitKind::Px,
            "cm" => UnitKind::Cm,
            "mm" => UnitKind::Mm,
            "in" => UnitKind::In,
            "pt" => UnitKind::Pt,
            "pc" => UnitKind::Pc,
            "deg" => UnitKind::Deg,
            "rad" => UnitKind::Rad,
            "grad" => UnitKind::Grad,
            "turn" => UnitKind::Turn,
            "ms" => UnitKind::Ms,
            "s" => UnitKind::S,
            "hz" => UnitKind::Hz,
            "khz" => UnitKind::Khz,
            "dpi" => UnitKind::Dpi,
            "dpcm" => UnitKind::Dpcm,
            "dppx" => UnitKind::Dppx,
            "rem" => UnitKind::Rems,
            "ch" => UnitKind::Chs,
            "vw" => UnitKind::Vw,
            "vh" => UnitKind::Vh,
            "vmin" => UnitKind::Vmin,
            "vmax" => UnitKind::Vmax,
            _ => return None,
        })
    }

    pub(crate) fn suffix(self) -> &'static str {
        match self {
            UnitKind::Number => "",
            UnitKind::Percentage => "%",
            UnitKind::Ems => "em",
            UnitKind::Exs => "ex",
            UnitKind::Px => "px",
            UnitKind::Cm => "cm",
            UnitKind::Mm => "mm",
            UnitKind::In => "in",
            UnitKind::Pt => "pt",
            UnitKind::Pc => "pc",
            UnitKind::Deg => "deg",
            UnitKind::Rad => "rad",
            UnitKind::Grad => "grad",
            UnitKind::Turn => "turn",
            UnitKind::Ms => "ms",
            UnitKind::S => "s",
            UnitKind::Hz => "hz",
            UnitKind::Khz => "khz",
            UnitKind::Dpi => "dpi",
            UnitKind::Dpcm => "dpcm",
            UnitKind::Dppx => "dppx",
            UnitKind::Rems => "rem",
            UnitKind::Chs => "ch",
            UnitKind::Vw => "vw",
            UnitKind::Vh => "vh",
            UnitKind::Vmin => "vmin",
            UnitKind::Vmax => "vmax",
            _ => "",
        }
    }

    /// Pixels per unit under the given conversion context. `None` for
    /// non-length units.
    pub(crate) fn px_per_unit(self, ctx: &ConversionContext) -> Option<f64> {
        Some(match self {
            UnitKind::Px => 1.0,
            UnitKind::Cm => 96.0 / 2.54,
            UnitKind::Mm => 96.0 / 25.4,
            UnitKind::In => 96.0,
            UnitKind::Pt => 96.0 / 72.0,
            UnitKind::Pc => 16.0,
            UnitKind::Ems => f64::from(ctx.font_size),
            UnitKind::Exs => f64::from(ctx.x_height),
            UnitKind::Rems => f64::from(ctx.root_font_size),
            UnitKind::Chs => f64::from(ctx.zero_advance_width),
            UnitKind::Vw => f64::from(ctx.viewport_width) / 100.0,
            UnitKind::Vh => f64::from(ctx.viewport_height) / 100.0,
            UnitKind::Vmin => f64::from(ctx.viewport_width.min(ctx.viewport_height)) / 100.0,
            UnitKind::Vmax => f64::from(ctx.viewport_width.max(ctx.viewport_height)) / 100.0,
            _ => return None,
        })
    }

    /// Conversion factor to px for the absolute length units; 1.0 otherwise.
    pub(crate) fn fixed_px_factor(self) -> f64 {
        match self {
            UnitKind::Cm => 96.0 / 2.54,
            UnitKind::Mm => 96.0 / 25.4,
            UnitKind::In => 96.0,
            UnitKind::Pt => 96.0 / 72.0,
            UnitKind::Pc => 16.0,
            _ => 1.0,
        }
    }

    /// The canonical unit for a category (px, deg, s, hz, dppx).
    pub fn canonical_unit(category: UnitCategory) -> UnitKind {
        match category {
            UnitCategory::Number => UnitKind::Number,
            UnitCategory::Percent => UnitKind::Percentage,
            UnitCategory::Length => UnitKind::Px,
            UnitCategory::Angle => UnitKind::Deg,
            UnitCategory::Time => UnitKind::S,
            UnitCategory::Frequency => UnitKind::Hz,
            UnitCategory::Resolution => UnitKind::Dppx,
            UnitCategory::Other => UnitKind::Unknown,
        }
    }

    /// Multiplier taking a value in this unit to its category's canonical
    /// unit. Only meaningful for angle/time/frequency and absolute lengths.
    pub fn canonical_factor(self) -> f64 {
        match self {
            UnitKind::Deg => 1.0,
            UnitKind::Rad => 180.0 / std::f64::consts::PI,
            UnitKind::Grad => 0.9,
            UnitKind::Turn => 360.0,
            UnitKind::Ms => 0.001,
            UnitKind::S => 1.0,
            UnitKind::Hz => 1.0,
            UnitKind::Khz => 1000.0,
            _ => self.fixed_px_factor(),
        }
    }
}

/// Font and viewport metrics needed to resolve relative length units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionContext {
    pub font_size: f32,
    pub root_font_size: f32,
    pub x_height: f32,
    pub zero_advance_width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for ConversionContext {
    fn default() -> Self {
        ConversionContext {
            font_size: 16.0,
            root_font_size: 16.0,
            x_height: 8.0,
            zero_advance_width: 8.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }
}

/// Rounds a computed pixel value for an integer target, absorbing the small
/// floating-point drift that accumulates in layout arithmetic: values within
/// 0.01 of the next integer snap to it before truncation.
pub fn round_for_imprecise_conversion_to_int(value: f64) -> i32 {
    let value = value + if value < 0.0 { -0.01 } else { 0.01 };
    if value > f64::from(i32::MAX) || value < f64::from(i32::MIN) {
        0
    } else {
        value as i32
    }
}

/// Float-target variant: snap to an integer only when within 0.01 of it.
pub fn round_for_imprecise_conversion_to_float(value: f64) -> f32 {
    let ceiled = value.ceil();
    let floored = value.floor();
    if ceiled - value < 0.01 {
        ceiled as f32
    } else if value - floored < 0.01 {
        floored as f32
    } else {
        value as f32
    }
}

/// Slots for decomposing a length into its unit-type contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnitType {
    Fixed = 0,
    Percent = 1,
    FontSize = 2,
    RootFontSize = 3,
    ZeroCharacterWidth = 4,
    ViewportWidth = 5,
    ViewportHeight = 6,
    ViewportMin = 7,
    ViewportMax = 8,
}

pub const LENGTH_UNIT_TYPE_COUNT: usize = 9;

pub type LengthArray = [f64; LENGTH_UNIT_TYPE_COUNT];

// ---------- Color ----------

/// A packed RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Rgba {
        Rgba { red, green, blue, alpha }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Rgba {
        Rgba::new(red, green, blue, 255)
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 255 {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            let alpha = (f64::from(self.alpha) / 255.0 * 1000.0).round() / 1000.0;
            write!(f, "rgba({}, {}, {}, {alpha})", self.red, self.green, self.blue)
        }
    }
}

// ---------- Composite sub-values ----------

/// The payload of a `rect(top, right, bottom, left)` value.
#[derive(Debug, Clone, PartialEq)]
pub struct RectValue {
    pub top: PrimitiveValue,
    pub right: PrimitiveValue,
    pub bottom: PrimitiveValue,
    pub left: PrimitiveValue,
}

impl Display for RectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rect({}, {}, {}, {})", self.top, self.right, self.bottom, self.left)
    }
}

/// Four side values serialized with identical-side folding.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadValue {
    pub top: PrimitiveValue,
    pub right: PrimitiveValue,
    pub bottom: PrimitiveValue,
    pub left: PrimitiveValue,
}

impl QuadValue {
    pub fn uniform(value: PrimitiveValue) -> QuadValue {
        QuadValue {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Number of values minimal serialization emits (1..=4).
    fn serialized_len(&self) -> usize {
        if self.left == self.right {
            if self.bottom == self.top {
                if self.right == self.top { 1 } else { 2 }
            } else {
                3
            }
        } else {
            4
        }
    }
}

impl Display for QuadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.serialized_len() {
            1 => write!(f, "{}", self.top),
            2 => write!(f, "{} {}", self.top, self.right),
            3 => write!(f, "{} {} {}", self.top, self.right, self.bottom),
            _ => write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left),
        }
    }
}

/// Two sub-values; collapses to one when identical and flagged to do so.
#[derive(Debug, Clone, PartialEq)]
pub struct PairValue {
    pub first: PrimitiveValue,
    pub second: PrimitiveValue,
    pub collapse_identical: bool,
}

impl PairValue {
    pub fn new(first: PrimitiveValue, second: PrimitiveValue) -> PairValue {
        PairValue {
            first,
            second,
            collapse_identical: true,
        }
    }

    pub fn keep_identical(first: PrimitiveValue, second: PrimitiveValue) -> PairValue {
        PairValue {
            first,
            second,
            collapse_identical: false,
        }
    }
}

impl Display for PairValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.collapse_identical && self.first == self.second {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{} {}", self.first, self.second)
        }
    }
}

/// Basic shapes for `clip-path`.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeValue {
    Inset {
        top: PrimitiveValue,
        right: PrimitiveValue,
        bottom: PrimitiveValue,
        left: PrimitiveValue,
    },
    Circle {
        radius: Option<PrimitiveValue>,
        center_x: Option<PrimitiveValue>,
        center_y: Option<PrimitiveValue>,
    },
}

impl Display for ShapeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeValue::Inset { top, right, bottom, left } => {
                let quad = QuadValue {
                    top: top.clone(),
                    right: right.clone(),
                    bottom: bottom.clone(),
                    left: left.clone(),
                };
                write!(f, "inset({quad})")
            }
            ShapeValue::Circle { radius, center_x, center_y } => {
                f.write_str("circle(")?;
                let mut wrote = false;
                if let Some(r) = radius {
                    write!(f, "{r}")?;
                    wrote = true;
                }
                if let (Some(x), Some(y)) = (center_x, center_y) {
                    if wrote {
                        f.write_str(" ")?;
                    }
                    write!(f, "at {x} {y}")?;
                }
                f.write_str(")")
            }
        }
    }
}

// ---------- Primitive value ----------

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload {
    Number(f32),
    Str(Arc<str>),
    Ident(ValueId),
    Property(PropertyId),
    Color(Rgba),
    Rect(Box<RectValue>),
    Quad(Box<QuadValue>),
    Pair(Box<PairValue>),
    Calc(Arc<CalcExpression>),
    Shape(Arc<ShapeValue>),
}

/// A numeric, keyword, string, color, or composite primitive. The unit tag
/// and payload arm are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveValue {
    unit: UnitKind,
    quirk: bool,
    payload: Payload,
}

impl PrimitiveValue {
    pub fn number(value: f32, unit: UnitKind) -> PrimitiveValue {
        debug_assert!(!matches!(unit.category(), UnitCategory::Other), "numeric unit expected");
        PrimitiveValue {
            unit,
            quirk: false,
            payload: Payload::Number(value),
        }
    }

    /// A numeric value carrying the legacy quirks-mode margin flag.
    pub fn quirky_number(value: f32, unit: UnitKind) -> PrimitiveValue {
        PrimitiveValue {
            unit,
            quirk: true,
            payload: Payload::Number(value),
        }
    }

    pub fn px(value: f32) -> PrimitiveValue {
        PrimitiveValue::number(value, UnitKind::Px)
    }

    pub fn percentage(value: f32) -> PrimitiveValue {
        PrimitiveValue::number(value, UnitKind::Percentage)
    }

    pub fn ident(id: ValueId) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Ident,
            quirk: false,
            payload: Payload::Ident(id),
        }
    }

    pub fn string(value: impl Into<Arc<str>>) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::String,
            quirk: false,
            payload: Payload::Str(value.into()),
        }
    }

    pub fn uri(value: impl Into<Arc<str>>) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Uri,
            quirk: false,
            payload: Payload::Str(value.into()),
        }
    }

    pub fn color(color: Rgba) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Color,
            quirk: false,
            payload: Payload::Color(color),
        }
    }

    pub fn property(id: PropertyId) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::PropertyRef,
            quirk: false,
            payload: Payload::Property(id),
        }
    }

    pub fn rect(rect: RectValue) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Rect,
            quirk: false,
            payload: Payload::Rect(Box::new(rect)),
        }
    }

    pub fn quad(quad: QuadValue) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Quad,
            quirk: false,
            payload: Payload::Quad(Box::new(quad)),
        }
    }

    pub fn pair(pair: PairValue) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Pair,
            quirk: false,
            payload: Payload::Pair(Box::new(pair)),
        }
    }

    pub fn calc(expr: CalcExpression) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Calc,
            quirk: false,
            payload: Payload::Calc(Arc::new(expr)),
        }
    }

    pub fn shape(shape: ShapeValue) -> PrimitiveValue {
        PrimitiveValue {
            unit: UnitKind::Shape,
            quirk: false,
            payload: Payload::Shape(Arc::new(shape)),
        }
    }

    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    pub fn is_quirk(&self) -> bool {
        self.quirk
    }

    pub fn category(&self) -> UnitCategory {
        self.unit.category()
    }

    pub fn number_value(&self) -> Option<f32> {
        match self.payload {
            Payload::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn ident_value(&self) -> Option<ValueId> {
        match self.payload {
            Payload::Ident(id) => Some(id),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&Arc<str>> {
        match &self.payload {
            Payload::Str(s) if self.unit == UnitKind::String => Some(s),
            _ => None,
        }
    }

    pub fn uri_value(&self) -> Option<&Arc<str>> {
        match &self.payload {
            Payload::Str(s) if self.unit == UnitKind::Uri => Some(s),
            _ => None,
        }
    }

    pub fn color_value(&self) -> Option<Rgba> {
        match self.payload {
            Payload::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn property_value(&self) -> Option<PropertyId> {
        match self.payload {
            Payload::Property(id) => Some(id),
            _ => None,
        }
    }

    pub fn rect_value(&self) -> Option<&RectValue> {
        match &self.payload {
            Payload::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn quad_value(&self) -> Option<&QuadValue> {
        match &self.payload {
            Payload::Quad(q) => Some(q),
            _ => None,
        }
    }

    pub fn pair_value(&self) -> Option<&PairValue> {
        match &self.payload {
            Payload::Pair(p) => Some(p),
            _ => None,
        }
    }

    pub fn calc_value(&self) -> Option<&CalcExpression> {
        match &self.payload {
            Payload::Calc(c) => Some(c),
            _ => None,
        }
    }

    pub fn shape_value(&self) -> Option<&ShapeValue> {
        match &self.payload {
            Payload::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_length(&self) -> bool {
        self.unit.is_length() || self.calc_value().is_some_and(|c| c.category() == CalcCategory::Length)
    }

    pub fn is_negative(&self) -> bool {
        self.number_value().is_some_and(|v| v < 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.number_value() == Some(0.0)
    }

    /// Resolves a length-unit primitive (or length calc) to pixels.
    pub fn compute_length(&self, ctx: &ConversionContext) -> Option<f64> {
        match &self.payload {
            Payload::Calc(c) => c.evaluate_px(ctx),
            Payload::Number(v) => self.unit.px_per_unit(ctx).map(|f| f64::from(*v) * f),
            _ => None,
        }
    }

    pub fn compute_length_i32(&self, ctx: &ConversionContext) -> Option<i32> {
        self.compute_length(ctx).map(round_for_imprecise_conversion_to_int)
    }

    pub fn compute_length_f32(&self, ctx: &ConversionContext) -> Option<f32> {
        self.compute_length(ctx).map(round_for_imprecise_conversion_to_float)
    }

    /// Adds this value's contribution, scaled by `multiplier`, into the
    /// per-unit-type slots. Used to classify layout-volatile dependence
    /// without resolving.
    pub fn accumulate_length_array(&self, out: &mut LengthArray, multiplier: f64) {
        match &self.payload {
            Payload::Calc(c) => c.accumulate_length_array(out, multiplier),
            Payload::Number(v) => {
                let v = f64::from(*v) * multiplier;
                match self.unit {
                    UnitKind::Px | UnitKind::Cm | UnitKind::Mm | UnitKind::In | UnitKind::Pt | UnitKind::Pc => {
                        out[LengthUnitType::Fixed as usize] += v * self.unit.fixed_px_factor();
                    }
                    UnitKind::Percentage => out[LengthUnitType::Percent as usize] += v,
                    UnitKind::Ems | UnitKind::Exs => out[LengthUnitType::FontSize as usize] += v,
                    UnitKind::Rems => out[LengthUnitType::RootFontSize as usize] += v,
                    UnitKind::Chs => out[LengthUnitType::ZeroCharacterWidth as usize] += v,
                    UnitKind::Vw => out[LengthUnitType::ViewportWidth as usize] += v,
                    UnitKind::Vh => out[LengthUnitType::ViewportHeight as usize] += v,
                    UnitKind::Vmin => out[LengthUnitType::ViewportMin as usize] += v,
                    UnitKind::Vmax => out[LengthUnitType::ViewportMax as usize] += v,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// The value converted to its category's canonical unit (deg, s, hz, px
    /// for absolute lengths). `None` for non-numeric or context-dependent
    /// units.
    pub fn canonical_number(&self) -> Option<f64> {
        let v = f64::from(self.number_value()?);
        match self.unit.category() {
            UnitCategory::Angle | UnitCategory::Time | UnitCategory::Frequency => Some(v * self.unit.canonical_factor()),
            UnitCategory::Length if !self.unit.is_font_relative_length() && !self.unit.is_viewport_percentage_length() => {
                Some(v * self.unit.fixed_px_factor())
            }
            UnitCategory::Number | UnitCategory::Percent => Some(v),
            _ => None,
        }
    }
}

impl Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Number(v) => {
                write!(f, "{v}")?;
                f.write_str(self.unit.suffix())
            }
            Payload::Ident(id) => f.write_str(id.name()),
            Payload::Property(id) => f.write_str(id.name()),
            Payload::Str(s) => {
                if self.unit == UnitKind::Uri {
                    f.write_str("url(")?;
                    serialize_string(s, f)?;
                    f.write_str(")")
                } else if self.unit == UnitKind::Attr {
                    f.write_str("attr(")?;
                    serialize_identifier(s, f)?;
                    f.write_str(")")
                } else {
                    serialize_string(s, f)
                }
            }
            Payload::Color(c) => c.fmt(f),
            Payload::Rect(r) => r.fmt(f),
            Payload::Quad(q) => q.fmt(f),
            Payload::Pair(p) => p.fmt(f),
            Payload::Calc(c) => c.fmt(f),
            Payload::Shape(s) => s.fmt(f),
        }
    }
}
