//! Fast-path value recognizers.
//!
//! Three cheap recognizers run before the grammar tier: simple lengths,
//! colors, and closed-domain keywords. Each returns `None` on anything it
//! does not fully understand so the caller falls through; none of them
//! commits partial state.

use cssparser::color::parse_hash_color;

use crate::css::declaration::ParseMode;
use crate::css::parser;
use crate::css::pool::{cached_color, cached_ident};
use crate::css::primitive::{PrimitiveValue, Rgba, UnitKind};
use crate::css::properties::{PropertyId, ValueId, is_valid_keyword_value};
use crate::css::value::Value;

pub(crate) fn try_fast_parse(id: PropertyId, text: &str, mode: ParseMode) -> Option<Value> {
    parse_simple_length(id, text, mode)
        .or_else(|| parse_color_value(id, text, mode))
        .or_else(|| parse_keyword_value(id, text, mode))
}

enum SimpleUnit {
    Bare,
    Px,
    Percent,
}

/// `<number>px`, `<number>%`, or (quirks only, nonzero) a bare number.
/// Anything else, including properties outside the allow-list, falls through.
pub(crate) fn parse_simple_length(id: PropertyId, text: &str, mode: ParseMode) -> Option<Value> {
    let accepts_negative = id.simple_length_policy()?;
    let text = text.trim();

    let (number_part, unit) = if let Some(stripped) = strip_suffix_ignore_case(text, "px") {
        (stripped, SimpleUnit::Px)
    } else if let Some(stripped) = text.strip_suffix('%') {
        (stripped, SimpleUnit::Percent)
    } else {
        (text, SimpleUnit::Bare)
    };

    let value = scan_number(number_part)?;
    if !accepts_negative && value < 0.0 {
        return None;
    }

    Some(match unit {
        SimpleUnit::Px => Value::Primitive(PrimitiveValue::px(value as f32)),
        SimpleUnit::Percent => Value::Primitive(PrimitiveValue::percentage(value as f32)),
        SimpleUnit::Bare => {
            // Unitless lengths are a quirks-mode relaxation; zero is legal
            // everywhere and canonicalizes to px.
            if value == 0.0 {
                Value::Primitive(PrimitiveValue::px(0.0))
            } else if mode.is_quirks() {
                Value::Primitive(PrimitiveValue::quirky_number(value as f32, UnitKind::Px))
            } else {
                return None;
            }
        }
    })
}

/// `currentcolor`, hex (with the quirks `#`-less form for the legacy color
/// properties), named colors, and the rgb()/hsl() function family.
pub(crate) fn parse_color_value(id: PropertyId, text: &str, mode: ParseMode) -> Option<Value> {
    if !id.is_color_property() {
        return None;
    }
    let text = text.trim();

    if text.eq_ignore_ascii_case("currentcolor") {
        return Some(cached_ident(ValueId::CurrentColor));
    }

    if let Some(stripped) = text.strip_prefix('#') {
        if let Ok((red, green, blue, alpha)) = parse_hash_color(stripped.as_bytes()) {
            return Some(cached_color(Rgba::new(red, green, blue, unit_alpha_to_u8(alpha))));
        }
        return None;
    }

    if mode.is_quirks()
        && id.allows_quirky_color()
        && matches!(text.len(), 3 | 6)
        && text.bytes().all(|b| b.is_ascii_hexdigit())
        && let Ok((red, green, blue, alpha)) = parse_hash_color(text.as_bytes())
    {
        return Some(cached_color(Rgba::new(red, green, blue, unit_alpha_to_u8(alpha))));
    }

    // Named and functional colors share the grammar tier's color routine so
    // both tiers produce identical primitives.
    parser::parse_color_standalone(text).map(Value::Primitive)
}

/// Keyword validation for closed-domain properties, plus the CSS-wide
/// `initial`/`inherit` keywords for any non-shorthand.
pub(crate) fn parse_keyword_value(id: PropertyId, text: &str, _mode: ParseMode) -> Option<Value> {
    let value_id = ValueId::from_name(text.trim())?;

    if value_id == ValueId::Initial {
        return (!id.is_shorthand()).then_some(Value::Initial);
    }
    if value_id == ValueId::Inherit {
        return (!id.is_shorthand()).then_some(Value::Inherit);
    }

    if !id.is_keyword_property() {
        return None;
    }

    is_valid_keyword_value(id, value_id).then(|| cached_ident(value_id))
}

pub(crate) fn unit_alpha_to_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let stripped = text.get(..text.len().checked_sub(suffix.len())?)?;
    if text[stripped.len()..].eq_ignore_ascii_case(suffix) {
        Some(stripped)
    } else {
        None
    }
}

/// A strict decimal scanner: sign, digits, one optional dot. Scientific
/// notation and anything else bails to the grammar tier.
fn scan_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let (sign, rest) = match bytes[0] {
        b'-' => (-1.0, &bytes[1..]),
        b'+' => (1.0, &bytes[1..]),
        _ => (1.0, bytes),
    };
    if rest.is_empty() {
        return None;
    }

    let mut integer: f64 = 0.0;
    let mut fraction: f64 = 0.0;
    let mut scale: f64 = 1.0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut fraction_digits = false;

    for &b in rest {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                let digit = f64::from(b - b'0');
                if seen_dot {
                    fraction_digits = true;
                    scale /= 10.0;
                    fraction += digit * scale;
                } else {
                    integer = integer * 10.0 + digit;
                }
            }
            b'.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }

    // A trailing dot is not a CSS number; let the grammar tier reject it.
    if !seen_digit || (seen_dot && !fraction_digits) {
        return None;
    }
    Some(sign * (integer + fraction))
}
