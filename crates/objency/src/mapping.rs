//! The capability a value needs before it can be wrapped.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use objency_json::{JObject, JToken};
use serde_json::Value;

/// Property name whose ownership marks a mapping as a likely prototype object.
pub const CONSTRUCTOR_KEY: &str = "constructor";

/// A string-keyed mapping with a fixed enumeration order.
///
/// Implementors expose lookups by key; the wrapper never inserts or removes
/// entries through this trait, it only overwrites values of keys it was given by
/// [`enumerable_keys`](KeyedMapping::enumerable_keys).
pub trait KeyedMapping {
    type Value;

    /// Keys in enumeration order.
    fn enumerable_keys(&self) -> Vec<String>;

    fn value(&self, key: &str) -> Option<&Self::Value>;

    fn value_mut(&mut self, key: &str) -> Option<&mut Self::Value>;

    fn has_own_property(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Heuristic guard against wrapping a prototype instead of a data instance.
    fn looks_like_prototype(&self) -> bool {
        self.has_own_property(CONSTRUCTOR_KEY)
    }
}

impl KeyedMapping for JObject {
    type Value = JToken;

    fn enumerable_keys(&self) -> Vec<String> {
        self.property_keys()
    }

    fn value(&self, key: &str) -> Option<&JToken> {
        self.get(key)
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut JToken> {
        self.get_mut(key)
    }

    fn has_own_property(&self, key: &str) -> bool {
        self.contains_property(key)
    }

    // `{ constructor: 0 }` is still a plain object
    fn looks_like_prototype(&self) -> bool {
        self.get(CONSTRUCTOR_KEY).is_some_and(JToken::as_boolean)
    }
}

impl KeyedMapping for serde_json::Map<String, Value> {
    type Value = Value;

    fn enumerable_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn has_own_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn looks_like_prototype(&self) -> bool {
        self.get(CONSTRUCTOR_KEY).is_some_and(is_truthy)
    }
}

impl<V> KeyedMapping for IndexMap<String, V> {
    type Value = V;

    fn enumerable_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn value(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_mut(key)
    }
}

impl<V> KeyedMapping for BTreeMap<String, V> {
    type Value = V;

    fn enumerable_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn value(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn value_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_mut(key)
    }
}

/// JavaScript truthiness for a `serde_json::Value`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Name of a `serde_json::Value`'s type, as reported in errors.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
