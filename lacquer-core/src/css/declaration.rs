use std::fmt::{self, Display};

use bumpalo::Bump;
use cssparser::{Parser, ParserInput};

use crate::css::fast_paths;
use crate::css::parser::{ValueParser, parse_simple_transform};
use crate::css::properties::PropertyId;
use crate::css::value::Value;

/// Parsing mode. Quirks mode relaxes a few legacy rules (unitless lengths,
/// `#`-less hex colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Standard,
    Quirks,
}

impl ParseMode {
    pub fn is_quirks(self) -> bool {
        self == ParseMode::Quirks
    }
}

/// One parsed property declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub id: PropertyId,
    pub value: Value,
    pub important: bool,
}

/// An ordered set of declarations with one entry per property id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationSet {
    declarations: Vec<Declaration>,
}

impl DeclarationSet {
    pub fn new() -> DeclarationSet {
        DeclarationSet::default()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn get(&self, id: PropertyId) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.id == id)
    }

    pub fn value(&self, id: PropertyId) -> Option<&Value> {
        self.get(id).map(|d| &d.value)
    }

    /// Adds or replaces the declaration for `id`.
    pub fn set(&mut self, id: PropertyId, value: Value, important: bool) {
        if let Some(existing) = self.declarations.iter_mut().find(|d| d.id == id) {
            existing.value = value;
            existing.important = important;
        } else {
            self.declarations.push(Declaration { id, value, important });
        }
    }

    pub fn remove(&mut self, id: PropertyId) -> bool {
        let before = self.declarations.len();
        self.declarations.retain(|d| d.id != id);
        before != self.declarations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl Display for DeclarationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {}", decl.id.name(), decl.value)?;
            if decl.important {
                f.write_str(" !important")?;
            }
            f.write_str(";")?;
        }
        Ok(())
    }
}

/// Parses one property value and, on success, commits the resulting
/// declarations (one for a longhand, several for an expanded shorthand) to
/// `decls`. Returns false and leaves the set untouched on any parse failure.
pub fn parse_value(decls: &mut DeclarationSet, id: PropertyId, text: &str, important: bool, mode: ParseMode) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    if let Some(value) = fast_paths::try_fast_parse(id, text, mode) {
        decls.set(id, value, important);
        return true;
    }

    // Restricted character-level shortcut for the common already-simple
    // transform chains; must agree exactly with the grammar tier.
    if id == PropertyId::Transform
        && let Some(value) = parse_simple_transform(text)
    {
        decls.set(id, value, important);
        return true;
    }

    let arena = Bump::new();
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value_parser = ValueParser::new(mode, &arena);

    match value_parser.parse_declaration(&mut parser, id) {
        Ok(staged) => {
            for (staged_id, value) in staged {
                decls.set(staged_id, value, important);
            }
            true
        }
        Err(error) => {
            crate::css::log_error(format_args!("Dropped invalid `{}` declaration", id.name()), error.location);
            false
        }
    }
}

/// Parses a single longhand's value in isolation, with a fresh parser
/// instance. `None` when the text is invalid for the property or the
/// property expands to multiple declarations.
pub fn parse_single_value(id: PropertyId, text: &str, mode: ParseMode) -> Option<Value> {
    let mut decls = DeclarationSet::new();
    if !parse_value(&mut decls, id, text, false, mode) {
        return None;
    }
    if decls.len() == 1 {
        decls.declarations.pop().map(|d| d.value)
    } else {
        decls.value(id).cloned()
    }
}
