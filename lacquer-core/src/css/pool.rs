//! Process-wide cache of common singleton values.
//!
//! Keyword identifiers, small pixel integers, and colors recur constantly
//! during parsing; the pool hands out clones of one shared instance instead
//! of rebuilding them. Entries are immutable once created, so recomputing one
//! concurrently is harmless.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::css::primitive::{PrimitiveValue, Rgba};
use crate::css::properties::ValueId;
use crate::css::value::Value;

static VALUE_POOL: OnceLock<Arc<RwLock<ValuePool>>> = OnceLock::new();

/// Upper bound for cached integral pixel values, matching the common run of
/// small lengths in real stylesheets.
const MAX_CACHED_PX: i32 = 255;

#[derive(Debug, Default)]
pub struct ValuePool {
    idents: HashMap<ValueId, Value>,
    px_ints: HashMap<i32, Value>,
    colors: HashMap<Rgba, Value>,
}

impl ValuePool {
    pub fn new() -> Self {
        ValuePool::default()
    }

    pub fn global() -> &'static Arc<RwLock<ValuePool>> {
        VALUE_POOL.get_or_init(|| Arc::new(RwLock::new(ValuePool::new())))
    }

    pub fn ident(&mut self, id: ValueId) -> Value {
        self.idents.entry(id).or_insert_with(|| Value::Primitive(PrimitiveValue::ident(id))).clone()
    }

    pub fn px(&mut self, value: f32) -> Value {
        let int = value as i32;
        if value == int as f32 && (0..=MAX_CACHED_PX).contains(&int) {
            return self
                .px_ints
                .entry(int)
                .or_insert_with(|| Value::Primitive(PrimitiveValue::px(value)))
                .clone();
        }
        Value::Primitive(PrimitiveValue::px(value))
    }

    pub fn color(&mut self, color: Rgba) -> Value {
        self.colors
            .entry(color)
            .or_insert_with(|| Value::Primitive(PrimitiveValue::color(color)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.idents.len() + self.px_ints.len() + self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn cached_ident(id: ValueId) -> Value {
    ValuePool::global().write().ident(id)
}

pub(crate) fn cached_px(value: f32) -> Value {
    ValuePool::global().write().px(value)
}

pub(crate) fn cached_color(color: Rgba) -> Value {
    ValuePool::global().write().color(color)
}
