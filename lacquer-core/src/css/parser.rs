use std::sync::Arc;

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use cssparser::{BasicParseErrorKind, ParseError, Parser, ParserInput, Token, match_ignore_ascii_case};
use cssparser_color::{Color as ParsedColor, DefaultColorParser, parse_color_with};
use smallvec::{SmallVec, smallvec};

use crate::css::calc::{CalcCategory, CalcExpression, CalcNode, CalcOp};
use crate::css::declaration::ParseMode;
use crate::css::fast_paths::unit_alpha_to_u8;
use crate::css::list::{ListSeparator, ValueList};
use crate::css::pool::cached_ident;
use crate::css::primitive::{PairValue, PrimitiveValue, QuadValue, RectValue, Rgba, ShapeValue, UnitCategory, UnitKind};
use crate::css::properties::{PropertyId, ValueId, is_valid_keyword_value};
use crate::css::value::{
    BorderImageSliceValue, FilterOp, FilterValue, GradientStop, GradientValue, ImageValue, ShadowValue, SideOrCorner, StepPosition, TimingFunction,
    TransformOp, TransformValue, Value,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CustomParseError {
    InvalidValue,
    UnsupportedValue,
}

impl From<()> for CustomParseError {
    fn from(_: ()) -> Self {
        CustomParseError::InvalidValue
    }
}

type ValueResult<'i, T> = Result<T, ParseError<'i, CustomParseError>>;

/// Declarations produced by one parse; shorthands expand to several.
pub(crate) type Staged = SmallVec<[(PropertyId, Value); 4]>;

/// Accepted-unit masks for [`ValueParser::numeric`], the single choke point
/// for numeric argument validation.
pub(crate) mod unit_masks {
    pub const NUMBER: u16 = 1 << 0;
    pub const INTEGER: u16 = 1 << 1;
    pub const PERCENT: u16 = 1 << 2;
    pub const LENGTH: u16 = 1 << 3;
    pub const ANGLE: u16 = 1 << 4;
    pub const TIME: u16 = 1 << 5;
    pub const FREQUENCY: u16 = 1 << 6;
    pub const NONNEG: u16 = 1 << 7;
    /// Unitless nonzero numbers become quirky px lengths in quirks mode.
    pub const QUIRKY_LENGTH: u16 = 1 << 8;
}

use unit_masks as um;

fn is_keyword_exhausted<'i>(parser: &mut Parser<'i, '_>, kw: &'static str) -> bool {
    parser
        .try_parse(|p| {
            p.expect_ident_matching(kw)?;
            p.expect_exhausted()
        })
        .is_ok()
}

fn single_or_comma_list(mut items: Vec<Value>) -> Value {
    if items.len() == 1 {
        items.pop().expect("non-empty")
    } else {
        Value::List(ValueList::from_items(ListSeparator::Comma, items))
    }
}

// ---------- Color ----------

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    fn hue_component(mut t: f32, p: f32, q: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let h = (((hue % 360.0) + 360.0) % 360.0) / 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_component(h + 1.0 / 3.0, p, q),
        hue_component(h, p, q),
        hue_component(h - 1.0 / 3.0, p, q),
    )
}

fn hwb_to_rgb(hue: f32, whiteness: f32, blackness: f32) -> (f32, f32, f32) {
    let w = whiteness.clamp(0.0, 1.0);
    let b = blackness.clamp(0.0, 1.0);
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return (gray, gray, gray);
    }
    let (r, g, bl) = hsl_to_rgb(hue, 1.0, 0.5);
    let scale = 1.0 - w - b;
    (r * scale + w, g * scale + w, bl * scale + w)
}

fn unit_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Shared color routine for the fast and grammar tiers. Colors beyond the
/// sRGB-expressible set this engine carries are rejected, not approximated.
pub(crate) fn next_color<'i>(p: &mut Parser<'i, '_>) -> ValueResult<'i, PrimitiveValue> {
    let parsed = parse_color_with(&DefaultColorParser, p).map_err(|e| e.into::<CustomParseError>())?;
    Ok(match parsed {
        ParsedColor::CurrentColor => PrimitiveValue::ident(ValueId::CurrentColor),
        ParsedColor::Rgba(c) => PrimitiveValue::color(Rgba::new(c.red, c.green, c.blue, unit_alpha_to_u8(c.alpha))),
        ParsedColor::Hsl(c) => {
            let (r, g, b) = hsl_to_rgb(c.hue.unwrap_or(0.0), c.saturation.unwrap_or(0.0), c.lightness.unwrap_or(0.0));
            PrimitiveValue::color(Rgba::new(
                unit_to_u8(r),
                unit_to_u8(g),
                unit_to_u8(b),
                unit_alpha_to_u8(c.alpha.unwrap_or(1.0)),
            ))
        }
        ParsedColor::Hwb(c) => {
            let (r, g, b) = hwb_to_rgb(c.hue.unwrap_or(0.0), c.whiteness.unwrap_or(0.0), c.blackness.unwrap_or(0.0));
            PrimitiveValue::color(Rgba::new(
                unit_to_u8(r),
                unit_to_u8(g),
                unit_to_u8(b),
                unit_alpha_to_u8(c.alpha.unwrap_or(1.0)),
            ))
        }
        _ => return Err(p.new_custom_error(CustomParseError::UnsupportedValue)),
    })
}

/// Parses a full string as a single color, with a fresh parser instance.
pub(crate) fn parse_color_standalone(text: &str) -> Option<PrimitiveValue> {
    let mut input = ParserInput::new(text);
    let mut p = Parser::new(&mut input);
    let value = next_color(&mut p).ok()?;
    p.expect_exhausted().ok()?;
    Some(value)
}

// ---------- Simple transform shortcut ----------

const SIMPLE_TRANSFORM_OPS: [TransformOp; 7] = [
    TransformOp::Translate,
    TransformOp::TranslateX,
    TransformOp::TranslateY,
    TransformOp::TranslateZ,
    TransformOp::Translate3d,
    TransformOp::Matrix3d,
    TransformOp::Scale3d,
];

fn scan_simple_number(text: &str) -> Option<f32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'.' | b'-' | b'+' | b'e' | b'E')) {
        return None;
    }
    text.parse::<f32>().ok()
}

fn scan_simple_length(text: &str) -> Option<PrimitiveValue> {
    let text = text.trim();
    if let Some(number) = text.strip_suffix("px").and_then(scan_simple_number) {
        return Some(PrimitiveValue::px(number));
    }
    // A bare zero is the only unitless length the transform grammar takes.
    if scan_simple_number(text) == Some(0.0) {
        return Some(PrimitiveValue::px(0.0));
    }
    None
}

/// Character-level recognizer for the common already-simple `transform`
/// chains (`translate*`, `matrix3d`, `scale3d`). Anything unusual bails so
/// the grammar tier decides; accepted input must produce exactly the value
/// the grammar tier would.
pub(crate) fn parse_simple_transform(text: &str) -> Option<Value> {
    let mut items: Vec<Value> = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        let open = rest.find('(')?;
        let close = rest.find(')')?;
        if close < open {
            return None;
        }
        let op = TransformOp::from_function_name(rest[..open].trim())?;
        if !SIMPLE_TRANSFORM_OPS.contains(&op) {
            return None;
        }

        let parts: Vec<&str> = rest[open + 1..close].split(',').collect();
        let mut args = ValueList::comma_separated();
        match op {
            TransformOp::Translate => {
                if parts.len() > 2 {
                    return None;
                }
                for part in &parts {
                    args.append(Value::Primitive(scan_simple_length(part)?));
                }
            }
            TransformOp::TranslateX | TransformOp::TranslateY | TransformOp::TranslateZ => {
                if parts.len() != 1 {
                    return None;
                }
                args.append(Value::Primitive(scan_simple_length(parts[0])?));
            }
            TransformOp::Translate3d => {
                if parts.len() != 3 {
                    return None;
                }
                for part in &parts {
                    args.append(Value::Primitive(scan_simple_length(part)?));
                }
            }
            TransformOp::Scale3d | TransformOp::Matrix3d => {
                let expected = if op == TransformOp::Scale3d { 3 } else { 16 };
                if parts.len() != expected {
                    return None;
                }
                for part in &parts {
                    args.append(Value::Primitive(PrimitiveValue::number(scan_simple_number(part)?, UnitKind::Number)));
                }
            }
            _ => return None,
        }
        if args.is_empty() {
            return None;
        }

        items.push(Value::Transform(TransformValue { op, args }));
        rest = rest[close + 1..].trim_start();
    }

    if items.is_empty() {
        return None;
    }
    Some(Value::List(ValueList::from_items(ListSeparator::Space, items)))
}

// ---------- Grammar tier ----------

/// The grammar-driven parser: one instance per top-level parse job, holding
/// the parse mode and a parse-scoped arena for speculative products.
pub(crate) struct ValueParser<'a> {
    mode: ParseMode,
    arena: &'a Bump,
}

fn shorthand_longhands(id: PropertyId) -> &'static [PropertyId] {
    use PropertyId::*;
    match id {
        Margin => &[MarginTop, MarginRight, MarginBottom, MarginLeft],
        Padding => &[PaddingTop, PaddingRight, PaddingBottom, PaddingLeft],
        BorderWidth => &[BorderTopWidth, BorderRightWidth, BorderBottomWidth, BorderLeftWidth],
        BorderColor => &[BorderTopColor, BorderRightColor, BorderBottomColor, BorderLeftColor],
        BorderStyle => &[BorderTopStyle, BorderRightStyle, BorderBottomStyle, BorderLeftStyle],
        BorderRadius => &[
            BorderTopLeftRadius,
            BorderTopRightRadius,
            BorderBottomRightRadius,
            BorderBottomLeftRadius,
        ],
        BorderImage => &[
            BorderImageSource,
            BorderImageSlice,
            BorderImageWidth,
            BorderImageOutset,
            BorderImageRepeat,
        ],
        Background => &[
            BackgroundColor,
            BackgroundImage,
            BackgroundPosition,
            BackgroundSize,
            BackgroundRepeat,
            BackgroundAttachment,
        ],
        Font => &[FontStyle, FontWeight, FontSize, LineHeight, FontFamily],
        _ => &[],
    }
}

impl<'a> ValueParser<'a> {
    pub fn new(mode: ParseMode, arena: &'a Bump) -> ValueParser<'a> {
        ValueParser { mode, arena }
    }

    pub fn parse_declaration<'i>(&self, p: &mut Parser<'i, '_>, id: PropertyId) -> ValueResult<'i, Staged> {
        if is_keyword_exhausted(p, "initial") {
            return Ok(self.css_wide(id, Value::Initial));
        }
        if is_keyword_exhausted(p, "inherit") {
            return Ok(self.css_wide(id, Value::Inherit));
        }

        use PropertyId as P;

        // Shorthands stage several declarations and validate exhaustion
        // themselves.
        match id {
            P::Margin | P::Padding | P::BorderWidth | P::BorderColor | P::BorderStyle => {
                return self.parse_sides_shorthand(p, id);
            }
            P::BorderRadius => return self.parse_border_radius_shorthand(p),
            P::BorderImage => return self.parse_border_image_shorthand(p),
            P::WebkitBorderImage | P::MaskBoxImage => {
                let value = self.parse_border_image_combined(p)?;
                p.expect_exhausted()?;
                return Ok(smallvec![(id, value)]);
            }
            P::Background => return self.parse_background_shorthand(p),
            P::Font => return self.parse_font_shorthand(p),
            _ => {}
        }

        let value: Value = match id {
            P::Color | P::BackgroundColor | P::BorderTopColor | P::BorderRightColor | P::BorderBottomColor | P::BorderLeftColor | P::OutlineColor => {
                Value::Primitive(next_color(p)?)
            }

            P::Width | P::Height => self.auto_or_numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)?,
            P::MinWidth | P::MinHeight => Value::Primitive(self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)?),
            P::MaxWidth | P::MaxHeight => {
                if p.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
                    cached_ident(ValueId::None)
                } else {
                    Value::Primitive(self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)?)
                }
            }
            P::MarginTop | P::MarginRight | P::MarginBottom | P::MarginLeft => {
                self.auto_or_numeric(p, um::LENGTH | um::PERCENT | um::QUIRKY_LENGTH)?
            }
            P::Top | P::Right | P::Bottom | P::Left => self.auto_or_numeric(p, um::LENGTH | um::PERCENT)?,
            P::PaddingTop | P::PaddingRight | P::PaddingBottom | P::PaddingLeft => {
                Value::Primitive(self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG | um::QUIRKY_LENGTH)?)
            }
            P::FontSize => Value::Primitive(self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)?),
            P::TextIndent => Value::Primitive(self.numeric(p, um::LENGTH | um::PERCENT)?),
            P::LineHeight => {
                if p.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
                    cached_ident(ValueId::Normal)
                } else {
                    Value::Primitive(self.numeric(p, um::NUMBER | um::LENGTH | um::PERCENT | um::NONNEG)?)
                }
            }
            P::LetterSpacing | P::WordSpacing => {
                if p.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
                    cached_ident(ValueId::Normal)
                } else {
                    Value::Primitive(self.numeric(p, um::LENGTH)?)
                }
            }
            P::BorderTopWidth | P::BorderRightWidth | P::BorderBottomWidth | P::BorderLeftWidth | P::OutlineWidth => {
                Value::Primitive(self.border_width_item(p)?)
            }
            P::BorderTopLeftRadius | P::BorderTopRightRadius | P::BorderBottomRightRadius | P::BorderBottomLeftRadius => {
                let first = self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)?;
                let second = p
                    .try_parse(|p| self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG))
                    .unwrap_or_else(|_: ParseError<'i, CustomParseError>| first.clone());
                Value::Primitive(PrimitiveValue::pair(PairValue::new(first, second)))
            }

            P::Display
            | P::Position
            | P::Float
            | P::Clear
            | P::Visibility
            | P::Overflow
            | P::WhiteSpace
            | P::TextAlign
            | P::Direction
            | P::BorderTopStyle
            | P::BorderRightStyle
            | P::BorderBottomStyle
            | P::BorderLeftStyle
            | P::OutlineStyle
            | P::FontStyle => self.keyword_item(p, id)?,

            P::FontWeight => self.parse_font_weight(p)?,
            P::Opacity => Value::Primitive(self.numeric(p, um::NUMBER)?),
            P::ZIndex => self.auto_or_numeric(p, um::INTEGER)?,
            P::Clip => self.parse_clip(p)?,
            P::ClipPath => self.parse_clip_path(p)?,
            P::Filter => self.parse_filter_list(p)?,
            P::Transform => self.parse_transform_list(p)?,
            P::FontFamily => self.parse_font_family_list(p)?,
            P::BoxShadow => self.parse_shadow_list(p, true)?,
            P::TextShadow => self.parse_shadow_list(p, false)?,

            P::BackgroundImage | P::MaskImage => self.comma_list(p, |vp, p| vp.parse_image_item(p, true))?,
            P::BorderImageSource => self.parse_image_item(p, true)?,
            P::BackgroundAttachment => self.comma_list(p, |vp, p| vp.fill_attachment_item(p))?,
            P::BackgroundClip | P::BackgroundOrigin | P::BackgroundBlendMode | P::MaskClip | P::MaskOrigin | P::MaskComposite | P::MaskSourceType => {
                self.comma_list(p, |vp, p| vp.keyword_item(p, id))?
            }
            P::BackgroundRepeat | P::MaskRepeat => self.comma_list(p, |vp, p| vp.parse_repeat_item(p))?,
            P::BackgroundPosition | P::MaskPosition => self.comma_list(p, |vp, p| vp.parse_position_item(p))?,
            P::BackgroundSize | P::MaskSize => self.comma_list(p, |vp, p| vp.parse_size_item(p))?,

            P::BorderImageSlice => self.parse_border_image_slice_value(p)?,
            P::BorderImageWidth => {
                Value::Primitive(PrimitiveValue::quad(self.parse_quad_with(p, |vp, p| vp.border_image_width_item(p))?))
            }
            P::BorderImageOutset => Value::Primitive(PrimitiveValue::quad(
                self.parse_quad_with(p, |vp, p| vp.numeric(p, um::NUMBER | um::LENGTH | um::NONNEG))?,
            )),
            P::BorderImageRepeat => self.parse_border_image_repeat_value(p)?,

            P::AnimationName => self.comma_list(p, |vp, p| vp.animation_name_item(p))?,
            P::AnimationDuration | P::TransitionDuration => {
                self.comma_list(p, |vp, p| Ok(Value::Primitive(vp.numeric(p, um::TIME | um::NONNEG)?)))?
            }
            P::AnimationDelay | P::TransitionDelay => self.comma_list(p, |vp, p| Ok(Value::Primitive(vp.numeric(p, um::TIME)?)))?,
            P::AnimationIterationCount => self.comma_list(p, |vp, p| vp.iteration_count_item(p))?,
            P::AnimationDirection | P::AnimationFillMode | P::AnimationPlayState => self.comma_list(p, |vp, p| vp.keyword_item(p, id))?,
            P::AnimationTimingFunction | P::TransitionTimingFunction => self.comma_list(p, |vp, p| vp.parse_timing_item(p))?,
            P::TransitionProperty => self.comma_list(p, |vp, p| vp.transition_property_item(p))?,

            _ => return Err(p.new_custom_error(CustomParseError::UnsupportedValue)),
        };

        p.expect_exhausted()?;
        Ok(smallvec![(id, value)])
    }

    fn css_wide(&self, id: PropertyId, value: Value) -> Staged {
        let longhands = shorthand_longhands(id);
        if longhands.is_empty() {
            smallvec![(id, value)]
        } else {
            longhands.iter().map(|&sub| (sub, value.clone())).collect()
        }
    }

    // ---------- Generic helpers ----------

    /// The numeric validation choke point: checks the token's unit against
    /// the accepted-unit mask, enforces integer-only and non-negative
    /// requirements, and admits calc() whose category fits the mask.
    fn numeric<'i>(&self, p: &mut Parser<'i, '_>, mask: u16) -> ValueResult<'i, PrimitiveValue> {
        let token = p.next()?.clone();
        let value = match token {
            Token::Number { value, int_value, .. } => {
                if mask & um::INTEGER != 0 {
                    let Some(int) = int_value else {
                        return Err(p.new_custom_error(CustomParseError::InvalidValue));
                    };
                    if mask & um::NONNEG != 0 && int < 0 {
                        return Err(p.new_custom_error(CustomParseError::InvalidValue));
                    }
                    PrimitiveValue::number(int as f32, UnitKind::Number)
                } else if mask & um::NUMBER != 0 {
                    if mask & um::NONNEG != 0 && value < 0.0 {
                        return Err(p.new_custom_error(CustomParseError::InvalidValue));
                    }
                    PrimitiveValue::number(value, UnitKind::Number)
                } else if value == 0.0 && mask & (um::LENGTH | um::ANGLE | um::TIME) != 0 {
                    let unit = if mask & um::LENGTH != 0 {
                        UnitKind::Px
                    } else if mask & um::ANGLE != 0 {
                        UnitKind::Deg
                    } else {
                        UnitKind::S
                    };
                    PrimitiveValue::number(0.0, unit)
                } else if mask & um::LENGTH != 0 && mask & um::QUIRKY_LENGTH != 0 && self.mode.is_quirks() {
                    if mask & um::NONNEG != 0 && value < 0.0 {
                        return Err(p.new_custom_error(CustomParseError::InvalidValue));
                    }
                    PrimitiveValue::quirky_number(value, UnitKind::Px)
                } else {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
            }
            Token::Percentage { unit_value, .. } => {
                if mask & um::PERCENT == 0 {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                if mask & um::NONNEG != 0 && unit_value < 0.0 {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                PrimitiveValue::percentage(unit_value * 100.0)
            }
            Token::Dimension { value, ref unit, .. } => {
                let Some(kind) = UnitKind::from_unit_str(unit) else {
                    return Err(p.new_custom_error(CustomParseError::UnsupportedValue));
                };
                let accepted = match kind.category() {
                    UnitCategory::Length => mask & um::LENGTH != 0,
                    UnitCategory::Angle => mask & um::ANGLE != 0,
                    UnitCategory::Time => mask & um::TIME != 0,
                    UnitCategory::Frequency => mask & um::FREQUENCY != 0,
                    _ => false,
                };
                if !accepted {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                if mask & um::NONNEG != 0 && value < 0.0 {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                PrimitiveValue::number(value, kind)
            }
            Token::Function(ref name) if name.eq_ignore_ascii_case("calc") || name.eq_ignore_ascii_case("-webkit-calc") => {
                let expr = self.parse_calc(p)?;
                let accepted = match expr.category() {
                    CalcCategory::Number => mask & (um::NUMBER | um::INTEGER) != 0,
                    CalcCategory::Length => mask & um::LENGTH != 0,
                    CalcCategory::Percent => mask & um::PERCENT != 0,
                    CalcCategory::PercentLength => mask & um::LENGTH != 0 && mask & um::PERCENT != 0,
                    CalcCategory::Angle => mask & um::ANGLE != 0,
                    CalcCategory::Time => mask & um::TIME != 0,
                    CalcCategory::Frequency => mask & um::FREQUENCY != 0,
                };
                if !accepted {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                PrimitiveValue::calc(expr)
            }
            _ => return Err(p.new_error_for_next_token()),
        };
        Ok(value)
    }

    fn auto_or_numeric<'i>(&self, p: &mut Parser<'i, '_>, mask: u16) -> ValueResult<'i, Value> {
        if p.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
            Ok(cached_ident(ValueId::Auto))
        } else {
            Ok(Value::Primitive(self.numeric(p, mask)?))
        }
    }

    fn keyword_item<'i>(&self, p: &mut Parser<'i, '_>, id: PropertyId) -> ValueResult<'i, Value> {
        let ident = match p.next()? {
            Token::Ident(s) => ValueId::from_name(s),
            _ => None,
        };
        match ident {
            Some(value_id) if is_valid_keyword_value(id, value_id) => Ok(cached_ident(value_id)),
            _ => Err(p.new_error_for_next_token()),
        }
    }

    fn comma_list<'i>(
        &self,
        p: &mut Parser<'i, '_>,
        item: impl Fn(&Self, &mut Parser<'i, '_>) -> ValueResult<'i, Value>,
    ) -> ValueResult<'i, Value> {
        let items = p.parse_comma_separated(|p| {
            let value = item(self, p)?;
            p.expect_exhausted()?;
            Ok(value)
        })?;
        Ok(single_or_comma_list(items))
    }

    fn parse_quad_with<'i>(
        &self,
        p: &mut Parser<'i, '_>,
        item: impl Fn(&Self, &mut Parser<'i, '_>) -> ValueResult<'i, PrimitiveValue>,
    ) -> ValueResult<'i, QuadValue> {
        let mut values: SmallVec<[PrimitiveValue; 4]> = smallvec![item(self, p)?];
        while values.len() < 4 {
            match p.try_parse(|p| item(self, p)) {
                Ok(v) => values.push(v),
                Err(_) => break,
            }
        }
        Ok(broadcast_quad(values))
    }

    fn border_width_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, PrimitiveValue> {
        if let Ok(keyword) = p.try_parse(|p| {
            let id = match p.next()? {
                Token::Ident(s) => ValueId::from_name(s),
                _ => None,
            };
            match id {
                Some(id @ (ValueId::Thin | ValueId::Medium | ValueId::Thick)) => Ok(id),
                _ => Err(p.new_error_for_next_token::<CustomParseError>()),
            }
        }) {
            return Ok(PrimitiveValue::ident(keyword));
        }
        self.numeric(p, um::LENGTH | um::NONNEG)
    }

    // ---------- calc() ----------

    fn parse_calc<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, CalcExpression> {
        let root = p.parse_nested_block(|p| self.calc_sum(p))?;
        CalcExpression::new(root).ok_or_else(|| p.new_custom_error(CustomParseError::InvalidValue))
    }

    fn calc_sum<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, CalcNode> {
        let mut node = self.calc_product(p)?;
        loop {
            let op = match p.try_parse(|p| match p.next() {
                Ok(Token::Delim('+')) => Ok(CalcOp::Add),
                Ok(Token::Delim('-')) => Ok(CalcOp::Subtract),
                _ => Err(()),
            }) {
                Ok(op) => op,
                Err(()) => break,
            };
            let rhs = self.calc_product(p)?;
            node = CalcNode::binary(op, node, rhs);
        }
        Ok(node)
    }

    fn calc_product<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, CalcNode> {
        let mut node = self.calc_term(p)?;
        loop {
            let op = match p.try_parse(|p| match p.next() {
                Ok(Token::Delim('*')) => Ok(CalcOp::Multiply),
                Ok(Token::Delim('/')) => Ok(CalcOp::Divide),
                _ => Err(()),
            }) {
                Ok(op) => op,
                Err(()) => break,
            };
            let rhs = self.calc_term(p)?;
            node = CalcNode::binary(op, node, rhs);
        }
        Ok(node)
    }

    fn calc_term<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, CalcNode> {
        let token = p.next()?.clone();
        match token {
            Token::Number { value, .. } => Ok(CalcNode::leaf(value, UnitKind::Number)),
            Token::Percentage { unit_value, .. } => Ok(CalcNode::leaf(unit_value * 100.0, UnitKind::Percentage)),
            Token::Dimension { value, ref unit, .. } => match UnitKind::from_unit_str(unit) {
                Some(kind) => Ok(CalcNode::leaf(value, kind)),
                None => Err(p.new_custom_error(CustomParseError::UnsupportedValue)),
            },
            Token::ParenthesisBlock => p.parse_nested_block(|p| self.calc_sum(p)),
            Token::Function(ref name) if name.eq_ignore_ascii_case("calc") || name.eq_ignore_ascii_case("-webkit-calc") => {
                p.parse_nested_block(|p| self.calc_sum(p))
            }
            _ => Err(p.new_error_for_next_token()),
        }
    }

    // ---------- Shadows ----------

    fn parse_shadow_list<'i>(&self, p: &mut Parser<'i, '_>, allow_inset_and_spread: bool) -> ValueResult<'i, Value> {
        if is_keyword_exhausted(p, "none") {
            return Ok(cached_ident(ValueId::None));
        }
        let shadows = p.parse_comma_separated(|p| {
            let shadow = self.parse_shadow_item(p, allow_inset_and_spread)?;
            p.expect_exhausted()?;
            Ok(shadow)
        })?;
        Ok(single_or_comma_list(shadows))
    }

    fn parse_shadow_item<'i>(&self, p: &mut Parser<'i, '_>, allow_inset_and_spread: bool) -> ValueResult<'i, Value> {
        let mut lengths: SmallVec<[PrimitiveValue; 4]> = SmallVec::new();
        let mut color: Option<PrimitiveValue> = None;
        let mut inset = false;

        while !p.is_exhausted() {
            if p.try_parse(|p| p.expect_ident_matching("inset")).is_ok() {
                if !allow_inset_and_spread || inset {
                    return Err(p.new_error_for_next_token());
                }
                inset = true;
                continue;
            }

            if let Ok(len) = p.try_parse(|p| self.numeric(p, um::LENGTH)) {
                if lengths.len() == 4 {
                    return Err(p.new_error_for_next_token());
                }
                lengths.push(len);
                continue;
            }

            if let Ok(parsed) = p.try_parse(next_color) {
                if color.is_some() {
                    return Err(p.new_error_for_next_token());
                }
                color = Some(parsed);
                continue;
            }

            return Err(p.new_error_for_next_token());
        }

        let max_lengths = if allow_inset_and_spread { 4 } else { 3 };
        if lengths.len() < 2 || lengths.len() > max_lengths {
            return Err(p.new_custom_error(CustomParseError::InvalidValue));
        }
        let mut drain = lengths.into_iter();
        let x = drain.next().expect("checked");
        let y = drain.next().expect("checked");
        let blur = drain.next();
        let spread = drain.next();

        if let Some(b) = &blur
            && b.is_negative()
        {
            return Err(p.new_custom_error(CustomParseError::InvalidValue));
        }

        Ok(Value::Shadow(ShadowValue {
            x,
            y,
            blur,
            spread,
            color,
            inset,
        }))
    }

    // ---------- Transforms ----------

    fn parse_transform_list<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if is_keyword_exhausted(p, "none") {
            return Ok(cached_ident(ValueId::None));
        }

        let mut items = BumpVec::new_in(self.arena);
        while !p.is_exhausted() {
            let name = match p.next()?.clone() {
                Token::Function(name) => name,
                _ => return Err(p.new_error_for_next_token()),
            };
            let Some(op) = TransformOp::from_function_name(&name) else {
                return Err(p.new_custom_error(CustomParseError::UnsupportedValue));
            };
            let args = p.parse_nested_block(|p| self.parse_transform_args(op, p))?;
            items.push(Value::Transform(TransformValue { op, args }));
        }

        if items.is_empty() {
            return Err(p.new_error(BasicParseErrorKind::EndOfInput));
        }
        Ok(Value::List(ValueList::from_items(ListSeparator::Space, items.into_iter().collect())))
    }

    fn parse_transform_args<'i>(&self, op: TransformOp, p: &mut Parser<'i, '_>) -> ValueResult<'i, ValueList> {
        use TransformOp::*;

        const LP: u16 = um::LENGTH | um::PERCENT;
        let (masks, min): (&[u16], usize) = match op {
            Translate => (&[LP, LP], 1),
            TranslateX | TranslateY => (&[LP], 1),
            TranslateZ => (&[um::LENGTH], 1),
            Translate3d => (&[LP, LP, um::LENGTH], 3),
            Scale => (&[um::NUMBER, um::NUMBER], 1),
            ScaleX | ScaleY | ScaleZ => (&[um::NUMBER], 1),
            Scale3d => (&[um::NUMBER, um::NUMBER, um::NUMBER], 3),
            Rotate => (&[um::ANGLE], 1),
            Skew => (&[um::ANGLE, um::ANGLE], 1),
            SkewX | SkewY => (&[um::ANGLE], 1),
            Matrix => (&[um::NUMBER; 6], 6),
            Matrix3d => (&[um::NUMBER; 16], 16),
            Perspective => (&[um::LENGTH | um::NONNEG], 1),
        };

        let mut args = ValueList::comma_separated();
        for (index, mask) in masks.iter().enumerate() {
            if index > 0 {
                if index >= min && p.is_exhausted() {
                    break;
                }
                p.expect_comma()?;
            }
            args.append(Value::Primitive(self.numeric(p, *mask)?));
        }
        p.expect_exhausted()?;
        Ok(args)
    }

    // ---------- Timing functions ----------

    fn parse_timing_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let token = p.next()?.clone();
        match token {
            Token::Ident(ref s) => {
                let id = match ValueId::from_name(s) {
                    Some(
                        id @ (ValueId::Ease
                        | ValueId::Linear
                        | ValueId::EaseIn
                        | ValueId::EaseOut
                        | ValueId::EaseInOut
                        | ValueId::StepStart
                        | ValueId::StepEnd
                        | ValueId::StepMiddle),
                    ) => id,
                    _ => return Err(p.new_error_for_next_token()),
                };
                Ok(cached_ident(id))
            }
            Token::Function(ref name) if name.eq_ignore_ascii_case("cubic-bezier") => p.parse_nested_block(|p| {
                let x1 = self.number_arg(p)?;
                p.expect_comma()?;
                let y1 = self.number_arg(p)?;
                p.expect_comma()?;
                let x2 = self.number_arg(p)?;
                p.expect_comma()?;
                let y2 = self.number_arg(p)?;
                p.expect_exhausted()?;
                // The x coordinates parametrize time and must stay in [0, 1].
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                Ok(Value::TimingFunction(TimingFunction::CubicBezier { x1, y1, x2, y2 }))
            }),
            Token::Function(ref name) if name.eq_ignore_ascii_case("steps") => p.parse_nested_block(|p| {
                let steps = self
                    .numeric(p, um::INTEGER | um::NONNEG)?
                    .number_value()
                    .unwrap_or(0.0) as i32;
                if steps < 1 {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                let position = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    let ident = match p.next()? {
                        Token::Ident(s) => ValueId::from_name(s),
                        _ => None,
                    };
                    match ident {
                        Some(ValueId::Start) => StepPosition::Start,
                        Some(ValueId::Middle) => StepPosition::Middle,
                        Some(ValueId::End) => StepPosition::End,
                        _ => return Err(p.new_error_for_next_token()),
                    }
                } else {
                    StepPosition::End
                };
                p.expect_exhausted()?;
                Ok(Value::TimingFunction(TimingFunction::Steps { steps, position }))
            }),
            _ => Err(p.new_error_for_next_token()),
        }
    }

    fn number_arg<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, f32> {
        Ok(self.numeric(p, um::NUMBER)?.number_value().unwrap_or(0.0))
    }

    // ---------- Images and gradients ----------

    fn parse_image_item<'i>(&self, p: &mut Parser<'i, '_>, allow_none: bool) -> ValueResult<'i, Value> {
        if let Ok(url) = p.try_parse(|p| p.expect_url().map(|u| u.clone())) {
            return Ok(Value::Image(ImageValue { url: Arc::from(url.as_ref()) }));
        }

        let token = p.next()?.clone();
        match token {
            Token::Ident(ref s) if allow_none && s.eq_ignore_ascii_case("none") => Ok(cached_ident(ValueId::None)),
            Token::Function(ref name) if name.eq_ignore_ascii_case("linear-gradient") => self.parse_linear_gradient(p, false),
            Token::Function(ref name) if name.eq_ignore_ascii_case("repeating-linear-gradient") => self.parse_linear_gradient(p, true),
            Token::Function(ref name) if name.eq_ignore_ascii_case("image-set") || name.eq_ignore_ascii_case("-webkit-image-set") => {
                self.parse_image_set(p)
            }
            _ => Err(p.new_error_for_next_token()),
        }
    }

    fn parse_linear_gradient<'i>(&self, p: &mut Parser<'i, '_>, repeating: bool) -> ValueResult<'i, Value> {
        p.parse_nested_block(|p| {
            let mut angle = None;
            let mut to_corner = None;
            let mut had_prelude = false;

            if let Ok(a) = p.try_parse(|p| self.numeric(p, um::ANGLE)) {
                angle = Some(a);
                had_prelude = true;
            } else if p.try_parse(|p| p.expect_ident_matching("to")).is_ok() {
                to_corner = Some(self.parse_side_or_corner(p)?);
                had_prelude = true;
            }

            if had_prelude {
                p.expect_comma()?;
            }

            let stops = p.parse_comma_separated(|p| {
                let stop = self.parse_gradient_stop(p)?;
                p.expect_exhausted()?;
                Ok(stop)
            })?;

            let color_stops = stops.iter().filter(|s| s.color.is_some()).count();
            if color_stops < 2 {
                return Err(p.new_error(BasicParseErrorKind::EndOfInput));
            }

            Ok(Value::Gradient(GradientValue {
                repeating,
                angle,
                to_corner,
                stops,
            }))
        })
    }

    fn parse_side_or_corner<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, SideOrCorner> {
        const LEFT: u8 = 1 << 0;
        const RIGHT: u8 = 1 << 1;
        const TOP: u8 = 1 << 2;
        const BOTTOM: u8 = 1 << 3;

        let mut mask: u8 = 0;
        let mut horizontal = None;
        let mut vertical = None;

        for _ in 0..2 {
            let parsed = p.try_parse(|p| {
                let id = match p.next()? {
                    Token::Ident(s) => ValueId::from_name(s),
                    _ => None,
                };
                match id {
                    Some(id @ (ValueId::Left | ValueId::Right | ValueId::Top | ValueId::Bottom)) => Ok(id),
                    _ => Err(p.new_error_for_next_token::<CustomParseError>()),
                }
            });
            let Ok(id) = parsed else { break };
            let bit = match id {
                ValueId::Left => LEFT,
                ValueId::Right => RIGHT,
                ValueId::Top => TOP,
                _ => BOTTOM,
            };
            if mask & bit != 0 {
                return Err(p.new_error_for_next_token());
            }
            mask |= bit;
            match id {
                ValueId::Left | ValueId::Right => horizontal = Some(id),
                _ => vertical = Some(id),
            }
        }

        if mask == 0 || (mask & (LEFT | RIGHT)) == (LEFT | RIGHT) || (mask & (TOP | BOTTOM)) == (TOP | BOTTOM) {
            return Err(p.new_error_for_next_token());
        }
        Ok(SideOrCorner { horizontal, vertical })
    }

    fn parse_gradient_stop<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, GradientStop> {
        let color = p.try_parse(next_color).ok();
        let position = p.try_parse(|p| self.numeric(p, um::PERCENT | um::LENGTH)).ok();
        if color.is_none() && position.is_none() {
            return Err(p.new_error_for_next_token());
        }
        Ok(GradientStop { color, position })
    }

    fn parse_image_set<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let entries = p.parse_nested_block(|p| {
            p.parse_comma_separated(|p| {
                let image = self.parse_image_item(p, false)?;
                let density = match p.next()?.clone() {
                    Token::Dimension { value, ref unit, .. } if unit.eq_ignore_ascii_case("x") => {
                        PrimitiveValue::number(value, UnitKind::Dppx)
                    }
                    Token::Dimension { value, ref unit, .. } if UnitKind::from_unit_str(unit) == Some(UnitKind::Dppx) => {
                        PrimitiveValue::number(value, UnitKind::Dppx)
                    }
                    _ => return Err(p.new_error_for_next_token()),
                };
                if density.is_negative() {
                    return Err(p.new_custom_error(CustomParseError::InvalidValue));
                }
                p.expect_exhausted()?;
                Ok(Value::List(ValueList::from_items(
                    ListSeparator::Space,
                    vec![image, Value::Primitive(density)],
                )))
            })
        })?;
        Ok(Value::ImageSet(ValueList::from_items(ListSeparator::Comma, entries)))
    }

    // ---------- Fill layers ----------

    fn fill_attachment_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        self.keyword_item(p, PropertyId::BackgroundAttachment)
    }

    fn parse_repeat_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let first = match p.next()? {
            Token::Ident(s) => ValueId::from_name(s),
            _ => None,
        };
        let pair = match first {
            Some(ValueId::RepeatX) => PairValue::keep_identical(
                PrimitiveValue::ident(ValueId::Repeat),
                PrimitiveValue::ident(ValueId::NoRepeat),
            ),
            Some(ValueId::RepeatY) => PairValue::keep_identical(
                PrimitiveValue::ident(ValueId::NoRepeat),
                PrimitiveValue::ident(ValueId::Repeat),
            ),
            Some(first @ (ValueId::Repeat | ValueId::NoRepeat | ValueId::Round | ValueId::Space)) => {
                let second = p
                    .try_parse(|p| {
                        let id = match p.next()? {
                            Token::Ident(s) => ValueId::from_name(s),
                            _ => None,
                        };
                        match id {
                            Some(id @ (ValueId::Repeat | ValueId::NoRepeat | ValueId::Round | ValueId::Space)) => Ok(id),
                            _ => Err(p.new_error_for_next_token::<CustomParseError>()),
                        }
                    })
                    .unwrap_or(first);
                PairValue::new(PrimitiveValue::ident(first), PrimitiveValue::ident(second))
            }
            _ => return Err(p.new_error_for_next_token()),
        };
        Ok(Value::Primitive(PrimitiveValue::pair(pair)))
    }

    fn position_component<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, PrimitiveValue> {
        if let Ok(keyword) = p.try_parse(|p| {
            let id = match p.next()? {
                Token::Ident(s) => ValueId::from_name(s),
                _ => None,
            };
            match id {
                Some(id @ (ValueId::Left | ValueId::Right | ValueId::Top | ValueId::Bottom | ValueId::Center)) => Ok(id),
                _ => Err(p.new_error_for_next_token::<CustomParseError>()),
            }
        }) {
            return Ok(PrimitiveValue::ident(keyword));
        }
        self.numeric(p, um::LENGTH | um::PERCENT)
    }

    fn parse_position_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let first = self.position_component(p)?;
        let second = p.try_parse(|p| self.position_component(p)).ok();

        let is_vertical = |v: &PrimitiveValue| matches!(v.ident_value(), Some(ValueId::Top | ValueId::Bottom));
        let is_horizontal = |v: &PrimitiveValue| matches!(v.ident_value(), Some(ValueId::Left | ValueId::Right));

        let (x, y) = match second {
            Some(second) => {
                if is_vertical(&first) || is_horizontal(&second) {
                    if is_vertical(&second) || is_horizontal(&first) {
                        return Err(p.new_custom_error(CustomParseError::InvalidValue));
                    }
                    (second, first)
                } else {
                    (first, second)
                }
            }
            None => {
                if is_vertical(&first) {
                    (PrimitiveValue::ident(ValueId::Center), first)
                } else {
                    (first, PrimitiveValue::ident(ValueId::Center))
                }
            }
        };

        Ok(Value::Primitive(PrimitiveValue::pair(PairValue::keep_identical(x, y))))
    }

    fn parse_size_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if let Ok(keyword) = p.try_parse(|p| {
            let id = match p.next()? {
                Token::Ident(s) => ValueId::from_name(s),
                _ => None,
            };
            match id {
                Some(id @ (ValueId::Cover | ValueId::Contain)) => Ok(id),
                _ => Err(p.new_error_for_next_token::<CustomParseError>()),
            }
        }) {
            return Ok(cached_ident(keyword));
        }

        let component = |vp: &Self, p: &mut Parser<'i, '_>| -> ValueResult<'i, PrimitiveValue> {
            if p.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
                Ok(PrimitiveValue::ident(ValueId::Auto))
            } else {
                vp.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)
            }
        };

        let first = component(self, p)?;
        let second = p.try_parse(|p| component(self, p)).unwrap_or_else(|_: ParseError<'i, CustomParseError>| {
            PrimitiveValue::ident(ValueId::Auto)
        });
        Ok(Value::Primitive(PrimitiveValue::pair(PairValue::keep_identical(first, second))))
    }

    // ---------- Border image ----------

    fn parse_border_image_slice_value<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let mut fill = p.try_parse(|p| p.expect_ident_matching("fill")).is_ok();
        let slices = self.parse_quad_with(p, |vp, p| vp.numeric(p, um::NUMBER | um::PERCENT | um::NONNEG))?;
        if !fill {
            fill = p.try_parse(|p| p.expect_ident_matching("fill")).is_ok();
        }
        Ok(Value::BorderImageSlice(BorderImageSliceValue { slices, fill }))
    }

    fn border_image_width_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, PrimitiveValue> {
        if p.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
            return Ok(PrimitiveValue::ident(ValueId::Auto));
        }
        self.numeric(p, um::NUMBER | um::LENGTH | um::PERCENT | um::NONNEG)
    }

    fn parse_border_image_repeat_value<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let item = |p: &mut Parser<'i, '_>| -> ValueResult<'i, ValueId> {
            let id = match p.next()? {
                Token::Ident(s) => ValueId::from_name(s),
                _ => None,
            };
            match id {
                Some(id @ (ValueId::Stretch | ValueId::Repeat | ValueId::Round | ValueId::Space)) => Ok(id),
                _ => Err(p.new_error_for_next_token()),
            }
        };

        let first = item(p)?;
        let second = p.try_parse(|p| item(p)).unwrap_or(first);
        Ok(Value::Primitive(PrimitiveValue::pair(PairValue::new(
            PrimitiveValue::ident(first),
            PrimitiveValue::ident(second),
        ))))
    }

    /// The flexible-order border-image component soup: image, a slash
    /// triple of slice/width/outset, and a repeat pair, each detected by
    /// kind rather than position.
    fn parse_border_image_components<'i>(
        &self,
        p: &mut Parser<'i, '_>,
    ) -> ValueResult<'i, (Option<Value>, Option<Value>, Option<Value>, Option<Value>, Option<Value>)> {
        let mut image = None;
        let mut slice = None;
        let mut width = None;
        let mut outset = None;
        let mut repeat = None;

        while !p.is_exhausted() {
            if image.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_image_item(p, true))
            {
                image = Some(v);
                continue;
            }
            if slice.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_border_image_slice_value(p))
            {
                slice = Some(v);
                if p.try_parse(|p| p.expect_delim('/')).is_ok() {
                    if let Ok(w) = p.try_parse(|p| self.parse_quad_with(p, |vp, p| vp.border_image_width_item(p))) {
                        width = Some(Value::Primitive(PrimitiveValue::quad(w)));
                    }
                    if p.try_parse(|p| p.expect_delim('/')).is_ok() {
                        let o = self.parse_quad_with(p, |vp, p| vp.numeric(p, um::NUMBER | um::LENGTH | um::NONNEG))?;
                        outset = Some(Value::Primitive(PrimitiveValue::quad(o)));
                    }
                }
                continue;
            }
            if repeat.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_border_image_repeat_value(p))
            {
                repeat = Some(v);
                continue;
            }
            return Err(p.new_error_for_next_token());
        }

        if image.is_none() && slice.is_none() && repeat.is_none() {
            return Err(p.new_error(BasicParseErrorKind::EndOfInput));
        }
        Ok((image, slice, width, outset, repeat))
    }

    fn parse_border_image_shorthand<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Staged> {
        let (image, slice, width, outset, repeat) = self.parse_border_image_components(p)?;
        p.expect_exhausted()?;
        use PropertyId::*;
        Ok(smallvec![
            (BorderImageSource, image.unwrap_or(Value::Initial)),
            (BorderImageSlice, slice.unwrap_or(Value::Initial)),
            (BorderImageWidth, width.unwrap_or(Value::Initial)),
            (BorderImageOutset, outset.unwrap_or(Value::Initial)),
            (BorderImageRepeat, repeat.unwrap_or(Value::Initial)),
        ])
    }

    /// Legacy single-value form used by `-webkit-border-image` and
    /// `mask-box-image`: one space list carrying the detected components,
    /// with slice/width/outset nested in a slash list.
    fn parse_border_image_combined<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let (image, slice, width, outset, repeat) = self.parse_border_image_components(p)?;

        let mut list = ValueList::space_separated();
        if let Some(image) = image {
            list.append(image);
        }
        if let Some(slice) = slice {
            let mut slash = ValueList::slash_separated();
            slash.append(slice);
            if let Some(width) = width {
                slash.append(width);
            }
            if let Some(outset) = outset {
                slash.append(outset);
            }
            if slash.len() == 1 {
                let only = slash.item(0).expect("len checked").clone();
                list.append(only);
            } else {
                list.append(Value::List(slash));
            }
        }
        if let Some(repeat) = repeat {
            list.append(repeat);
        }
        Ok(Value::List(list))
    }

    // ---------- Clip and shapes ----------

    fn parse_clip<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if p.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
            return Ok(cached_ident(ValueId::Auto));
        }
        match p.next()?.clone() {
            Token::Function(ref name) if name.eq_ignore_ascii_case("rect") => p.parse_nested_block(|p| {
                let component = |vp: &Self, p: &mut Parser<'i, '_>| -> ValueResult<'i, PrimitiveValue> {
                    if p.try_parse(|p| p.expect_ident_matching("auto")).is_ok() {
                        Ok(PrimitiveValue::ident(ValueId::Auto))
                    } else {
                        vp.numeric(p, um::LENGTH)
                    }
                };
                let top = component(self, p)?;
                p.expect_comma()?;
                let right = component(self, p)?;
                p.expect_comma()?;
                let bottom = component(self, p)?;
                p.expect_comma()?;
                let left = component(self, p)?;
                p.expect_exhausted()?;
                Ok(Value::Primitive(PrimitiveValue::rect(RectValue { top, right, bottom, left })))
            }),
            _ => Err(p.new_error_for_next_token()),
        }
    }

    fn parse_clip_path<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if p.try_parse(|p| p.expect_ident_matching("none")).is_ok() {
            return Ok(cached_ident(ValueId::None));
        }
        match p.next()?.clone() {
            Token::Function(ref name) if name.eq_ignore_ascii_case("inset") => p.parse_nested_block(|p| {
                let quad = self.parse_quad_with(p, |vp, p| vp.numeric(p, um::LENGTH | um::PERCENT))?;
                p.expect_exhausted()?;
                Ok(Value::Primitive(PrimitiveValue::shape(ShapeValue::Inset {
                    top: quad.top,
                    right: quad.right,
                    bottom: quad.bottom,
                    left: quad.left,
                })))
            }),
            Token::Function(ref name) if name.eq_ignore_ascii_case("circle") => p.parse_nested_block(|p| {
                let radius = p.try_parse(|p| self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)).ok();
                let (center_x, center_y) = if p.try_parse(|p| p.expect_ident_matching("at")).is_ok() {
                    let x = self.position_component(p)?;
                    let y = self.position_component(p)?;
                    (Some(x), Some(y))
                } else {
                    (None, None)
                };
                p.expect_exhausted()?;
                Ok(Value::Primitive(PrimitiveValue::shape(ShapeValue::Circle {
                    radius,
                    center_x,
                    center_y,
                })))
            }),
            _ => Err(p.new_error_for_next_token()),
        }
    }

    // ---------- Filters ----------

    fn parse_filter_list<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if is_keyword_exhausted(p, "none") {
            return Ok(cached_ident(ValueId::None));
        }

        let mut items = BumpVec::new_in(self.arena);
        while !p.is_exhausted() {
            let name = match p.next()?.clone() {
                Token::Function(name) => name,
                _ => return Err(p.new_error_for_next_token()),
            };
            let Some(op) = FilterOp::from_function_name(&name) else {
                return Err(p.new_custom_error(CustomParseError::UnsupportedValue));
            };
            let args = p.parse_nested_block(|p| self.parse_filter_args(op, p))?;
            items.push(Value::Filter(FilterValue { op, args }));
        }

        if items.is_empty() {
            return Err(p.new_error(BasicParseErrorKind::EndOfInput));
        }
        Ok(Value::List(ValueList::from_items(ListSeparator::Space, items.into_iter().collect())))
    }

    fn parse_filter_args<'i>(&self, op: FilterOp, p: &mut Parser<'i, '_>) -> ValueResult<'i, ValueList> {
        let mut args = ValueList::comma_separated();
        match op {
            FilterOp::Blur => {
                if !p.is_exhausted() {
                    args.append(Value::Primitive(self.numeric(p, um::LENGTH | um::NONNEG)?));
                }
            }
            FilterOp::HueRotate => {
                args.append(Value::Primitive(self.numeric(p, um::ANGLE)?));
            }
            FilterOp::DropShadow => {
                let shadow = self.parse_shadow_item(p, false)?;
                args.append(shadow);
            }
            _ => {
                if !p.is_exhausted() {
                    args.append(Value::Primitive(self.numeric(p, um::NUMBER | um::PERCENT | um::NONNEG)?));
                }
            }
        }
        p.expect_exhausted()?;
        Ok(args)
    }

    // ---------- Fonts ----------

    fn parse_font_weight<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let token = p.next()?.clone();
        match token {
            Token::Ident(ref s) => match ValueId::from_name(s) {
                Some(id @ (ValueId::Normal | ValueId::Bold | ValueId::Bolder | ValueId::Lighter)) => Ok(cached_ident(id)),
                _ => Err(p.new_error_for_next_token()),
            },
            Token::Number {
                int_value: Some(int), ..
            } if (100..=900).contains(&int) && int % 100 == 0 => {
                Ok(Value::Primitive(PrimitiveValue::number(int as f32, UnitKind::Number)))
            }
            _ => Err(p.new_error_for_next_token()),
        }
    }

    fn font_family_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if let Ok(name) = p.try_parse(|p| p.expect_string().map(|s| s.clone())) {
            return Ok(Value::Primitive(PrimitiveValue::string(name.as_ref())));
        }

        let mut family = String::new();
        let first = p.expect_ident()?.clone();
        family.push_str(&first);
        while let Ok(next) = p.try_parse(|p| p.expect_ident().map(|s| s.clone())) {
            family.push(' ');
            family.push_str(&next);
        }
        Ok(Value::Primitive(PrimitiveValue::string(family.as_str())))
    }

    fn parse_font_family_list<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let families = p.parse_comma_separated(|p| {
            let family = self.font_family_item(p)?;
            p.expect_exhausted()?;
            Ok(family)
        })?;
        Ok(single_or_comma_list(families))
    }

    fn parse_font_shorthand<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Staged> {
        let mut style: Option<Value> = None;
        let mut weight: Option<Value> = None;

        loop {
            if style.is_none()
                && let Ok(v) = p.try_parse(|p| self.keyword_item(p, PropertyId::FontStyle))
            {
                style = Some(v);
                continue;
            }
            if weight.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_font_weight(p))
            {
                weight = Some(v);
                continue;
            }
            break;
        }

        let size = Value::Primitive(self.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG)?);

        let line_height = if p.try_parse(|p| p.expect_delim('/')).is_ok() {
            if p.try_parse(|p| p.expect_ident_matching("normal")).is_ok() {
                Some(cached_ident(ValueId::Normal))
            } else {
                Some(Value::Primitive(self.numeric(p, um::NUMBER | um::LENGTH | um::PERCENT | um::NONNEG)?))
            }
        } else {
            None
        };

        let family = self.parse_font_family_list(p)?;
        p.expect_exhausted()?;

        use PropertyId::*;
        Ok(smallvec![
            (FontStyle, style.unwrap_or(Value::Initial)),
            (FontWeight, weight.unwrap_or(Value::Initial)),
            (FontSize, size),
            (LineHeight, line_height.unwrap_or(Value::Initial)),
            (FontFamily, family),
        ])
    }

    // ---------- Box shorthands ----------

    fn parse_sides_shorthand<'i>(&self, p: &mut Parser<'i, '_>, id: PropertyId) -> ValueResult<'i, Staged> {
        use PropertyId as P;
        let longhands = shorthand_longhands(id);

        let item = |vp: &Self, p: &mut Parser<'i, '_>| -> ValueResult<'i, Value> {
            match id {
                P::Margin => vp.auto_or_numeric(p, um::LENGTH | um::PERCENT | um::QUIRKY_LENGTH),
                P::Padding => Ok(Value::Primitive(vp.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG | um::QUIRKY_LENGTH)?)),
                P::BorderWidth => Ok(Value::Primitive(vp.border_width_item(p)?)),
                P::BorderColor => Ok(Value::Primitive(next_color(p)?)),
                _ => vp.keyword_item(p, P::BorderTopStyle),
            }
        };

        let values = self.quad_values(p, item)?;
        p.expect_exhausted()?;
        Ok(longhands.iter().copied().zip(values).collect())
    }

    /// One-to-four value broadcast, the common box shorthand shape.
    fn quad_values<'i>(
        &self,
        p: &mut Parser<'i, '_>,
        item: impl Fn(&Self, &mut Parser<'i, '_>) -> ValueResult<'i, Value>,
    ) -> ValueResult<'i, [Value; 4]> {
        let v1 = item(self, p)?;
        if p.is_exhausted() {
            return Ok([v1.clone(), v1.clone(), v1.clone(), v1]);
        }

        let v2 = item(self, p)?;
        if p.is_exhausted() {
            return Ok([v1.clone(), v2.clone(), v1, v2]);
        }

        let v3 = item(self, p)?;
        if p.is_exhausted() {
            return Ok([v1, v2.clone(), v3, v2]);
        }

        let v4 = item(self, p)?;
        Ok([v1, v2, v3, v4])
    }

    fn parse_border_radius_shorthand<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Staged> {
        let radius = |vp: &Self, p: &mut Parser<'i, '_>| vp.numeric(p, um::LENGTH | um::PERCENT | um::NONNEG);

        let horizontal = self.parse_quad_with(p, radius)?;
        let vertical = if p.try_parse(|p| p.expect_delim('/')).is_ok() {
            self.parse_quad_with(p, radius)?
        } else {
            horizontal.clone()
        };
        p.expect_exhausted()?;

        let corner = |h: &PrimitiveValue, v: &PrimitiveValue| -> Value {
            Value::Primitive(PrimitiveValue::pair(PairValue::new(h.clone(), v.clone())))
        };

        use PropertyId::*;
        Ok(smallvec![
            (BorderTopLeftRadius, corner(&horizontal.top, &vertical.top)),
            (BorderTopRightRadius, corner(&horizontal.right, &vertical.right)),
            (BorderBottomRightRadius, corner(&horizontal.bottom, &vertical.bottom)),
            (BorderBottomLeftRadius, corner(&horizontal.left, &vertical.left)),
        ])
    }

    fn parse_background_shorthand<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Staged> {
        let mut color = None;
        let mut image = None;
        let mut position = None;
        let mut size = None;
        let mut repeat = None;
        let mut attachment = None;

        while !p.is_exhausted() {
            if image.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_image_item(p, true))
            {
                image = Some(v);
                continue;
            }
            if attachment.is_none()
                && let Ok(v) = p.try_parse(|p| self.fill_attachment_item(p))
            {
                attachment = Some(v);
                continue;
            }
            if repeat.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_repeat_item(p))
            {
                repeat = Some(v);
                continue;
            }
            if position.is_none()
                && let Ok(v) = p.try_parse(|p| self.parse_position_item(p))
            {
                position = Some(v);
                if p.try_parse(|p| p.expect_delim('/')).is_ok() {
                    size = Some(self.parse_size_item(p)?);
                }
                continue;
            }
            if color.is_none()
                && let Ok(v) = p.try_parse(next_color)
            {
                color = Some(Value::Primitive(v));
                continue;
            }
            return Err(p.new_error_for_next_token());
        }

        if color.is_none() && image.is_none() && position.is_none() && repeat.is_none() && attachment.is_none() {
            return Err(p.new_error(BasicParseErrorKind::EndOfInput));
        }

        use PropertyId::*;
        Ok(smallvec![
            (BackgroundColor, color.unwrap_or(Value::Initial)),
            (BackgroundImage, image.unwrap_or(Value::Initial)),
            (BackgroundPosition, position.unwrap_or(Value::Initial)),
            (BackgroundSize, size.unwrap_or(Value::Initial)),
            (BackgroundRepeat, repeat.unwrap_or(Value::Initial)),
            (BackgroundAttachment, attachment.unwrap_or(Value::Initial)),
        ])
    }

    // ---------- Animation items ----------

    fn animation_name_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if let Ok(name) = p.try_parse(|p| p.expect_string().map(|s| s.clone())) {
            return Ok(Value::Primitive(PrimitiveValue::string(name.as_ref())));
        }
        let token = p.next()?.clone();
        match token {
            Token::Ident(ref s) if s.eq_ignore_ascii_case("none") => Ok(cached_ident(ValueId::None)),
            Token::Ident(ref s) => Ok(Value::Primitive(PrimitiveValue::string(s.as_ref()))),
            _ => Err(p.new_error_for_next_token()),
        }
    }

    fn iteration_count_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        if p.try_parse(|p| p.expect_ident_matching("infinite")).is_ok() {
            return Ok(cached_ident(ValueId::Infinite));
        }
        Ok(Value::Primitive(self.numeric(p, um::NUMBER | um::NONNEG)?))
    }

    fn transition_property_item<'i>(&self, p: &mut Parser<'i, '_>) -> ValueResult<'i, Value> {
        let token = p.next()?.clone();
        match token {
            Token::Ident(ref s) if s.eq_ignore_ascii_case("none") => Ok(cached_ident(ValueId::None)),
            Token::Ident(ref s) if s.eq_ignore_ascii_case("all") => Ok(cached_ident(ValueId::All)),
            Token::Ident(ref s) => match PropertyId::from_name(s) {
                Some(id) => Ok(Value::Primitive(PrimitiveValue::property(id))),
                None => Err(p.new_custom_error(CustomParseError::UnsupportedValue)),
            },
            _ => Err(p.new_error_for_next_token()),
        }
    }
}

fn broadcast_quad(values: SmallVec<[PrimitiveValue; 4]>) -> QuadValue {
    match values.len() {
        1 => QuadValue::uniform(values[0].clone()),
        2 => QuadValue {
            top: values[0].clone(),
            right: values[1].clone(),
            bottom: values[0].clone(),
            left: values[1].clone(),
        },
        3 => QuadValue {
            top: values[0].clone(),
            right: values[1].clone(),
            bottom: values[2].clone(),
            left: values[1].clone(),
        },
        _ => QuadValue {
            top: values[0].clone(),
            right: values[1].clone(),
            bottom: values[2].clone(),
            left: values[3].clone(),
        },
    }
}
