//! JObject - an insertion-ordered JSON object

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{JsonError, JsonResult};
use crate::j_token::JToken;

/// Represents a JSON object.
///
/// Properties are stored in insertion order. [`JObject::property_keys`] reports them
/// in the order a JavaScript engine enumerates an object's own keys.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct JObject {
    properties: IndexMap<String, JToken>,
}

impl JObject {
    /// Creates a new empty JObject.
    pub fn new() -> Self {
        Self {
            properties: IndexMap::new(),
        }
    }

    pub fn from_properties(properties: IndexMap<String, JToken>) -> Self {
        Self { properties }
    }

    /// Parses JSON text that must hold an object at the top level.
    pub fn from_json_str(text: &str) -> JsonResult<Self> {
        match JToken::parse(text)? {
            JToken::Object(obj) => Ok(obj),
            other => Err(JsonError::format(format!(
                "expected a JSON object, found {}",
                other.type_name()
            ))),
        }
    }

    pub fn properties(&self) -> &IndexMap<String, JToken> {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&JToken> {
        self.properties.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut JToken> {
        self.properties.get_mut(name)
    }

    /// Sets a property, returning the previous value. A new key is appended.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<JToken>) -> Option<JToken> {
        self.properties.insert(name.into(), value.into())
    }

    /// Removes a property, keeping the relative order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<JToken> {
        self.properties.shift_remove(name)
    }

    /// Determines whether the object owns a property with the specified name.
    pub fn contains_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &JToken)> + '_ {
        self.properties.iter()
    }

    /// Own enumerable keys in JavaScript enumeration order: array-index keys first in
    /// ascending numeric order, then the remaining keys in insertion order.
    pub fn property_keys(&self) -> Vec<String> {
        let mut indices: Vec<(u32, &String)> = Vec::new();
        let mut named: Vec<&String> = Vec::new();
        for key in self.properties.keys() {
            match array_index(key) {
                Some(index) => indices.push((index, key)),
                None => named.push(key),
            }
        }
        indices.sort_unstable_by_key(|(index, _)| *index);

        indices
            .into_iter()
            .map(|(_, key)| key)
            .chain(named)
            .cloned()
            .collect()
    }

    /// Converts to a `serde_json::Value`, emitting properties in enumeration order.
    pub fn to_json_value(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(self.properties.len());
        for key in self.property_keys() {
            if let Some(token) = self.properties.get(&key) {
                map.insert(key, token.to_json_value());
            }
        }
        Value::Object(map)
    }
}

/// Returns the index when `key` is the canonical form of an array index
/// (`0..=2^32 - 2`, no sign, no leading zeros).
pub fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || key.len() > 10 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    let index: u64 = key.parse().ok()?;
    if index >= u64::from(u32::MAX) {
        return None;
    }
    u32::try_from(index).ok()
}

/// Serializes in enumeration order, like `Display` on the owning token.
impl Serialize for JObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl<K: Into<String>, V: Into<JToken>> FromIterator<(K, V)> for JObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
