use std::fmt::{self, Display};
use std::sync::Arc;

use cssparser::{match_ignore_ascii_case, serialize_string};

use crate::css::list::ValueList;
use crate::css::primitive::{PrimitiveValue, QuadValue};
use crate::css::properties::ValueId;

/// A single parsed shadow. Everything but the offsets is optional; a missing
/// color means `currentcolor`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowValue {
    pub x: PrimitiveValue,
    pub y: PrimitiveValue,
    pub blur: Option<PrimitiveValue>,
    pub spread: Option<PrimitiveValue>,
    pub color: Option<PrimitiveValue>,
    pub inset: bool,
}

impl Display for ShadowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(f, "{} {}", self.x, self.y)?;
        if let Some(blur) = &self.blur {
            write!(f, " {blur}")?;
        }
        if let Some(spread) = &self.spread {
            write!(f, " {spread}")?;
        }
        if let Some(color) = &self.color {
            write!(f, " {color}")?;
        }
        Ok(())
    }
}

/// The slice part of a border-image: four offsets plus the `fill` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderImageSliceValue {
    pub slices: QuadValue,
    pub fill: bool,
}

impl Display for BorderImageSliceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slices.fmt(f)?;
        if self.fill {
            f.write_str(" fill")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPosition {
    Start,
    Middle,
    End,
}

/// A parametrized timing-function value. Keyword presets stay keyword
/// primitives until style mapping resolves them.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingFunction {
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    Steps { steps: i32, position: StepPosition },
}

impl Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            TimingFunction::Steps { steps, position } => match position {
                StepPosition::End => write!(f, "steps({steps})"),
                StepPosition::Start => write!(f, "steps({steps}, start)"),
                StepPosition::Middle => write!(f, "steps({steps}, middle)"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOp {
    Translate,
    TranslateX,
    TranslateY,
    TranslateZ,
    Translate3d,
    Scale,
    ScaleX,
    ScaleY,
    ScaleZ,
    Scale3d,
    Rotate,
    Skew,
    SkewX,
    SkewY,
    Matrix,
    Matrix3d,
    Perspective,
}

impl TransformOp {
    pub fn from_function_name(name: &str) -> Option<TransformOp> {
        use TransformOp::*;
        Some(match_ignore_ascii_case! { name,
            "translate" => Translate,
            "translatex" => TranslateX,
            "translatey" => TranslateY,
            "translatez" => TranslateZ,
            "translate3d" => Translate3d,
            "scale" => Scale,
            "scalex" => ScaleX,
            "scaley" => ScaleY,
            "scalez" => ScaleZ,
            "scale3d" => Scale3d,
            "rotate" => Rotate,
            "skew" => Skew,
            "skewx" => SkewX,
            "skewy" => SkewY,
            "matrix" => Matrix,
            "matrix3d" => Matrix3d,
            "perspective" => Perspective,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        use TransformOp::*;
        match self {
            Translate => "translate",
            TranslateX => "translateX",
            TranslateY => "translateY",
            TranslateZ => "translateZ",
            Translate3d => "translate3d",
            Scale => "scale",
            ScaleX => "scaleX",
            ScaleY => "scaleY",
            ScaleZ => "scaleZ",
            Scale3d => "scale3d",
            Rotate => "rotate",
            Skew => "skew",
            SkewX => "skewX",
            SkewY => "skewY",
            Matrix => "matrix",
            Matrix3d => "matrix3d",
            Perspective => "perspective",
        }
    }
}

/// One transform function: an operation tag plus its argument list. The tag
/// is a secondary discriminant, so equality compares it and the full list,
/// separator included.
#[derive(Debug, Clone)]
pub struct TransformValue {
    pub op: TransformOp,
    pub args: ValueList,
}

impl PartialEq for TransformValue {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.args.separator() == other.args.separator() && self.args == other.args
    }
}

impl Display for TransformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.op.name(), self.args)
    }
}

/// The `to <side-or-corner>` part of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideOrCorner {
    pub horizontal: Option<ValueId>,
    pub vertical: Option<ValueId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: Option<PrimitiveValue>,
    pub position: Option<PrimitiveValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientValue {
    pub repeating: bool,
    pub angle: Option<PrimitiveValue>,
    pub to_corner: Option<SideOrCorner>,
    pub stops: Vec<GradientStop>,
}

impl Display for GradientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        f.write_str("linear-gradient(")?;
        let mut need_comma = false;
        if let Some(angle) = &self.angle {
            write!(f, "{angle}")?;
            need_comma = true;
        } else if let Some(corner) = &self.to_corner {
            f.write_str("to")?;
            if let Some(h) = corner.horizontal {
                write!(f, " {}", h.name())?;
            }
            if let Some(v) = corner.vertical {
                write!(f, " {}", v.name())?;
            }
            need_comma = true;
        }
        for stop in &self.stops {
            if need_comma {
                f.write_str(", ")?;
            }
            need_comma = true;
            match (&stop.color, &stop.position) {
                (Some(c), Some(p)) => write!(f, "{c} {p}")?,
                (Some(c), None) => write!(f, "{c}")?,
                (None, Some(p)) => write!(f, "{p}")?,
                (None, None) => {}
            }
        }
        f.write_str(")")
    }
}

/// A loadable image reference. This core only carries the URL; resolution to
/// a decoded image is the host's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageValue {
    pub url: Arc<str>,
}

impl Display for ImageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("url(")?;
        serialize_string(&self.url, f)?;
        f.write_str(")")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Blur,
    Brightness,
    Contrast,
    DropShadow,
    Grayscale,
    HueRotate,
    Invert,
    Opacity,
    Saturate,
    Sepia,
}

impl FilterOp {
    pub fn from_function_name(name: &str) -> Option<FilterOp> {
        use FilterOp::*;
        Some(match_ignore_ascii_case! { name,
            "blur" => Blur,
            "brightness" => Brightness,
            "contrast" => Contrast,
            "drop-shadow" => DropShadow,
            "grayscale" => Grayscale,
            "hue-rotate" => HueRotate,
            "invert" => Invert,
            "opacity" => Opacity,
            "saturate" => Saturate,
            "sepia" => Sepia,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        use FilterOp::*;
        match self {
            Blur => "blur",
            Brightness => "brightness",
            Contrast => "contrast",
            DropShadow => "drop-shadow",
            Grayscale => "grayscale",
            HueRotate => "hue-rotate",
            Invert => "invert",
            Opacity => "opacity",
            Saturate => "saturate",
            Sepia => "sepia",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterValue {
    pub op: FilterOp,
    pub args: ValueList,
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.op.name(), self.args)
    }
}

/// The font shorthand as a fixed-arity record.
#[derive(Debug, Clone, PartialEq)]
pub struct FontValue {
    pub style: Option<PrimitiveValue>,
    pub weight: Option<PrimitiveValue>,
    pub size: Option<PrimitiveValue>,
    pub line_height: Option<PrimitiveValue>,
    pub family: Option<ValueList>,
}

impl Display for FontValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        let space = |f: &mut fmt::Formatter<'_>, wrote: &mut bool| -> fmt::Result {
            if *wrote {
                f.write_str(" ")?;
            }
            *wrote = true;
            Ok(())
        };
        if let Some(style) = &self.style {
            space(f, &mut wrote)?;
            write!(f, "{style}")?;
        }
        if let Some(weight) = &self.weight {
            space(f, &mut wrote)?;
            write!(f, "{weight}")?;
        }
        if let Some(size) = &self.size {
            space(f, &mut wrote)?;
            write!(f, "{size}")?;
        }
        if let Some(line_height) = &self.line_height {
            write!(f, " / {line_height}")?;
        }
        if let Some(family) = &self.family {
            space(f, &mut wrote)?;
            write!(f, "{family}")?;
        }
        Ok(())
    }
}

/// A CSS value: the closed set of variants the engine produces.
///
/// Equality is structural with matching variants, except that a one-element
/// list compares equal to its sole element's bare form (delegated to the list
/// side from either direction).
#[derive(Debug, Clone)]
pub enum Value {
    Initial,
    Inherit,
    Primitive(PrimitiveValue),
    List(ValueList),
    Shadow(ShadowValue),
    BorderImageSlice(BorderImageSliceValue),
    TimingFunction(TimingFunction),
    Transform(TransformValue),
    Gradient(GradientValue),
    Image(ImageValue),
    ImageSet(ValueList),
    Filter(FilterValue),
    Font(FontValue),
    /// A frozen text capture produced by [`Value::cssom_clone`]. Serializes
    /// to the captured text; every variant accessor returns `None`.
    Snapshot(Arc<str>),
}

impl Value {
    pub fn ident(id: ValueId) -> Value {
        Value::Primitive(PrimitiveValue::ident(id))
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Value::Initial)
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, Value::Inherit)
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, Value::Snapshot(_))
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_shadow(&self) -> Option<&ShadowValue> {
        match self {
            Value::Shadow(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_border_image_slice(&self) -> Option<&BorderImageSliceValue> {
        match self {
            Value::BorderImageSlice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timing_function(&self) -> Option<&TimingFunction> {
        match self {
            Value::TimingFunction(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_transform(&self) -> Option<&TransformValue> {
        match self {
            Value::Transform(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_gradient(&self) -> Option<&GradientValue> {
        match self {
            Value::Gradient(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageValue> {
        match self {
            Value::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_filter(&self) -> Option<&FilterValue> {
        match self {
            Value::Filter(fil) => Some(fil),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontValue> {
        match self {
            Value::Font(font) => Some(font),
            _ => None,
        }
    }

    /// Convenience: the identifier of a bare keyword value.
    pub fn ident_value(&self) -> Option<ValueId> {
        self.as_primitive().and_then(PrimitiveValue::ident_value)
    }

    /// True when this value carries an image reference in any form.
    pub fn is_image_like(&self) -> bool {
        matches!(self, Value::Image(_) | Value::Gradient(_) | Value::ImageSet(_))
    }

    pub fn css_text(&self) -> String {
        self.to_string()
    }

    /// The CSSOM-safe copy: a structural deep clone for the variants the
    /// object model exposes, a frozen text snapshot for everything else.
    pub fn cssom_clone(&self) -> Value {
        match self {
            Value::Primitive(_) | Value::Image(_) | Value::Transform(_) => self.clone(),
            Value::List(list) => Value::List(cssom_clone_list(list)),
            Value::ImageSet(list) => Value::ImageSet(cssom_clone_list(list)),
            Value::Snapshot(text) => Value::Snapshot(text.clone()),
            other => Value::Snapshot(Arc::from(other.to_string().as_str())),
        }
    }
}

fn cssom_clone_list(list: &ValueList) -> ValueList {
    ValueList::from_items(list.separator(), list.iter().map(Value::cssom_clone).collect())
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (List(a), List(b)) => a == b,
            (List(list), bare) | (bare, List(list)) => list.equals_bare(bare),
            (Initial, Initial) | (Inherit, Inherit) => true,
            (Primitive(a), Primitive(b)) => a == b,
            (Shadow(a), Shadow(b)) => a == b,
            (BorderImageSlice(a), BorderImageSlice(b)) => a == b,
            (TimingFunction(a), TimingFunction(b)) => a == b,
            (Transform(a), Transform(b)) => a == b,
            (Gradient(a), Gradient(b)) => a == b,
            (Image(a), Image(b)) => a == b,
            (ImageSet(a), ImageSet(b)) => a == b,
            (Filter(a), Filter(b)) => a == b,
            (Font(a), Font(b)) => a == b,
            (Snapshot(a), Snapshot(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Initial => f.write_str("initial"),
            Value::Inherit => f.write_str("inherit"),
            Value::Primitive(p) => p.fmt(f),
            Value::List(l) => l.fmt(f),
            Value::Shadow(s) => s.fmt(f),
            Value::BorderImageSlice(s) => s.fmt(f),
            Value::TimingFunction(t) => t.fmt(f),
            Value::Transform(t) => t.fmt(f),
            Value::Gradient(g) => g.fmt(f),
            Value::Image(i) => i.fmt(f),
            Value::ImageSet(l) => write!(f, "image-set({l})"),
            Value::Filter(v) => v.fmt(f),
            Value::Font(v) => v.fmt(f),
            Value::Snapshot(text) => f.write_str(text),
        }
    }
}
