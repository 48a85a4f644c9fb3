//! Validation and construction of wrappers.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use objency_json::{JObject, JToken};
use serde_json::Value;

use crate::error::{ObjencyError, ObjencyResult};
use crate::mapping::{value_type_name, KeyedMapping};
use crate::wrapper::Objency;

/// Values that [`objency`] accepts.
///
/// Dynamic values (`JToken`, `serde_json::Value`) are checked for object shape at
/// run time; typed maps are object-shaped by construction. Every mapping is then
/// checked with [`KeyedMapping::looks_like_prototype`]. An existing wrapper
/// converts to itself.
pub trait IntoObjency<'a> {
    type Mapping: KeyedMapping + 'a;

    fn into_objency(self) -> ObjencyResult<Objency<'a, Self::Mapping>>;
}

/// Wraps a plain key-value mapping.
///
/// # Errors
///
/// [`ObjencyError::NotAPlainObject`] when the value is not an object,
/// [`ObjencyError::LooksLikePrototype`] when it owns a truthy `constructor`.
///
/// ```rust
/// use objency::{objency, ObjencyError};
/// use objency_json::JToken;
///
/// let mut number = JToken::from(42);
/// assert_eq!(
///     objency(&mut number).unwrap_err(),
///     ObjencyError::NotAPlainObject { found: "number" }
/// );
///
/// let mut token = JToken::parse(r#"{"a": 1}"#).unwrap();
/// let wrapped = objency(&mut token).unwrap();
/// let wrapped = objency(wrapped).unwrap();
/// assert_eq!(wrapped.all_keys(), ["a"]);
/// ```
pub fn objency<'a, T>(value: T) -> ObjencyResult<Objency<'a, T::Mapping>>
where
    T: IntoObjency<'a>,
{
    value.into_objency()
}

fn wrap_mapping<M: KeyedMapping>(mapping: &mut M) -> ObjencyResult<Objency<'_, M>> {
    if mapping.looks_like_prototype() {
        return Err(ObjencyError::LooksLikePrototype);
    }
    Ok(Objency::new(mapping))
}

impl<'a, M: KeyedMapping + 'a> IntoObjency<'a> for Objency<'a, M> {
    type Mapping = M;

    fn into_objency(self) -> ObjencyResult<Objency<'a, M>> {
        log::trace!("value is already wrapped");
        Ok(self)
    }
}

impl<'a> IntoObjency<'a> for &'a mut JObject {
    type Mapping = JObject;

    fn into_objency(self) -> ObjencyResult<Objency<'a, JObject>> {
        wrap_mapping(self)
    }
}

impl<'a> IntoObjency<'a> for &'a mut JToken {
    type Mapping = JObject;

    fn into_objency(self) -> ObjencyResult<Objency<'a, JObject>> {
        match self {
            JToken::Object(obj) => wrap_mapping(obj),
            other => Err(ObjencyError::not_a_plain_object(other.type_name())),
        }
    }
}

/// `None` stands for an absent (`undefined`) argument.
impl<'a> IntoObjency<'a> for Option<&'a mut JToken> {
    type Mapping = JObject;

    fn into_objency(self) -> ObjencyResult<Objency<'a, JObject>> {
        match self {
            Some(token) => token.into_objency(),
            None => Err(ObjencyError::not_a_plain_object("undefined")),
        }
    }
}

impl<'a> IntoObjency<'a> for &'a mut serde_json::Map<String, Value> {
    type Mapping = serde_json::Map<String, Value>;

    fn into_objency(self) -> ObjencyResult<Objency<'a, Self::Mapping>> {
        wrap_mapping(self)
    }
}

impl<'a> IntoObjency<'a> for &'a mut Value {
    type Mapping = serde_json::Map<String, Value>;

    fn into_objency(self) -> ObjencyResult<Objency<'a, Self::Mapping>> {
        match self {
            Value::Object(map) => wrap_mapping(map),
            other => Err(ObjencyError::not_a_plain_object(value_type_name(other))),
        }
    }
}

impl<'a, V: 'a> IntoObjency<'a> for &'a mut IndexMap<String, V> {
    type Mapping = IndexMap<String, V>;

    fn into_objency(self) -> ObjencyResult<Objency<'a, Self::Mapping>> {
        wrap_mapping(self)
    }
}

impl<'a, V: 'a> IntoObjency<'a> for &'a mut BTreeMap<String, V> {
    type Mapping = BTreeMap<String, V>;

    fn into_objency(self) -> ObjencyResult<Objency<'a, Self::Mapping>> {
        wrap_mapping(self)
    }
}
