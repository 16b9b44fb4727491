pub use crate::prelude::*;

pub(crate) fn parse_one(id: PropertyId, text: &str) -> Option<Value> {
    parse_single_value(id, text, ParseMode::Standard)
}

pub(crate) fn parse_one_quirks(id: PropertyId, text: &str) -> Option<Value> {
    parse_single_value(id, text, ParseMode::Quirks)
}

pub(crate) fn parse_decls(id: PropertyId, text: &str) -> Option<DeclarationSet> {
    let mut decls = DeclarationSet::new();
    parse_value(&mut decls, id, text, false, ParseMode::Standard).then_some(decls)
}

/// Parses, serializes, and re-parses; the round trip must land on an equal
/// value.
pub(crate) fn assert_roundtrip(id: PropertyId, text: &str) -> Value {
    let parsed = parse_one(id, text).unwrap_or_else(|| panic!("failed to parse `{text}` for {}", id.name()));
    let serialized = parsed.css_text();
    let reparsed =
        parse_one(id, &serialized).unwrap_or_else(|| panic!("failed to re-parse `{serialized}` (from `{text}`) for {}", id.name()));
    assert_eq!(parsed, reparsed, "round trip changed `{text}` -> `{serialized}`");
    parsed
}
