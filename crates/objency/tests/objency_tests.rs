//! End-to-end behaviour of the wrapper over JSON objects.

use objency::{objency, ObjencyError};
use objency_json::{JObject, JToken};

fn object(text: &str) -> JObject {
    JObject::from_json_str(text).expect("test fixture is a JSON object")
}

fn visited_keys(obj: &mut JObject, filter: impl FnMut(&JToken, usize, &JObject) -> bool) -> Vec<String> {
    let mut wrapped = objency(obj).unwrap();
    wrapped.filter(filter);
    wrapped.active_keys().to_vec()
}

#[test]
fn test_double_wrap_returns_same_instance() {
    let mut obj = object(r#"{"a": 1, "b": 2}"#);
    let data_ptr: *const JObject = &obj;

    let mut first = objency(&mut obj).unwrap();
    first.filter(|v, _, _| v.as_number() > 1.0);
    let again = objency(first).unwrap();

    // narrowing survives, so this is the very same wrapper
    assert_eq!(again.active_keys(), ["b"]);
    assert!(std::ptr::eq(again.data(), data_ptr));
}

#[test]
fn test_for_each_visits_in_enumeration_order() {
    let mut obj = object(r#"{"b": "x", "10": "y", "a": "z", "2": "w"}"#);
    let mut visits = Vec::new();

    let mut wrapped = objency(&mut obj).unwrap();
    let returned: *const _ = wrapped.for_each(|v, i, _| visits.push((i, v.as_string())));
    assert!(std::ptr::eq(returned, &wrapped));

    assert_eq!(
        visits,
        vec![
            (0, "w".to_string()),
            (1, "y".to_string()),
            (2, "x".to_string()),
            (3, "z".to_string()),
        ]
    );
}

#[test]
fn test_map_rewrites_values_in_place() {
    let mut obj = object(r#"{"a": 1, "b": 2, "c": 3}"#);
    let before: *const JObject = &obj;

    objency(&mut obj)
        .unwrap()
        .map(|v, _, _| JToken::Number(v.as_number() * v.as_number()));

    assert!(std::ptr::eq(&obj, before));
    assert_eq!(obj, object(r#"{"a": 1, "b": 4, "c": 9}"#));
}

#[test]
fn test_set_all_key_restores_full_key_list() {
    let mut obj = object(r#"{"a": 1, "b": 2, "c": 3, "d": 4}"#);
    let mut wrapped = objency(&mut obj).unwrap();

    wrapped.filter(|_, _, _| false);
    assert_ne!(wrapped.active_keys(), wrapped.all_keys());

    wrapped.set_all_key();
    assert_eq!(wrapped.active_keys(), ["a", "b", "c", "d"]);
}

#[test]
fn test_filter_normal_path() {
    let mut obj = object(r#"{"a": 1, "b": 2, "c": 3}"#);
    let mut values = Vec::new();

    objency(&mut obj)
        .unwrap()
        .filter(|v, _, _| v.as_number() != 2.0)
        .for_each(|v, _, _| values.push(v.as_number()));

    assert_eq!(values, vec![1.0, 3.0]);
}

#[test]
fn test_filter_skips_key_shifted_into_removed_slot() {
    let mut obj = object(r#"{"a": 1, "b": false, "c": false, "d": 4}"#);
    let keys = visited_keys(&mut obj, |v, _, _| v.as_boolean());
    assert_eq!(keys, vec!["a", "c", "d"]);
}

#[test]
fn test_retain_tests_every_key() {
    let mut obj = object(r#"{"a": 1, "b": false, "c": false, "d": 4}"#);
    let mut wrapped = objency(&mut obj).unwrap();
    wrapped.retain(|v, _, _| v.as_boolean());
    assert_eq!(wrapped.active_keys(), ["a", "d"]);
}

#[test]
fn test_filter_never_mutates_data() {
    let mut obj = object(r#"{"a": 0, "b": "", "c": null}"#);
    let snapshot = obj.clone();
    let keys = visited_keys(&mut obj, |v, _, _| v.as_boolean());
    assert_eq!(keys, vec!["b"]);
    assert_eq!(obj, snapshot);
}

#[test]
fn test_every_and_some() {
    let mut empty = JObject::new();
    let wrapped = objency(&mut empty).unwrap();
    assert!(wrapped.every(|_, _, _| true));
    assert!(wrapped.every(|_, _, _| false));
    assert!(!wrapped.some(|_, _, _| true));

    let mut obj = object(r#"{"a": 1, "b": "x"}"#);
    let wrapped = objency(&mut obj).unwrap();
    assert!(wrapped.every(|_, _, _| true));
    assert!(!wrapped.every(|v, _, _| v.is_number()));
    assert!(wrapped.some(|v, _, _| v.is_string()));
    assert!(!wrapped.some(|v, _, _| v.is_null()));
}

#[test]
fn test_fill_only_active_keys() {
    let mut obj = object(r#"{"a": 1, "b": "keep", "c": 3}"#);
    objency(&mut obj)
        .unwrap()
        .retain(|v, _, _| v.is_number())
        .fill(JToken::Null)
        .set_all_key()
        .map(|v, _, _| JToken::from(v.as_string()));

    assert_eq!(obj, object(r#"{"a": "null", "b": "keep", "c": "null"}"#));
}

#[test]
fn test_reduce_with_seed() {
    let mut obj = object(r#"{"a": 1, "b": 2, "c": 3}"#);
    let wrapped = objency(&mut obj).unwrap();
    let sum = wrapped.reduce(|acc, v, _, _| acc + v.as_number(), 0.0_f64);
    assert_eq!(sum, 6.0);

    let joined = wrapped.reduce(
        |mut acc: String, v, i, _| {
            acc.push_str(&format!("{i}:{v};"));
            acc
        },
        String::new(),
    );
    assert_eq!(joined, "0:1;1:2;2:3;");
}

#[test]
fn test_reduce_without_seed() {
    let mut obj = object(r#"{"a": "x", "b": "y", "c": "z"}"#);
    let mut wrapped = objency(&mut obj).unwrap();

    let concat = wrapped.reduce_first(|acc, v, _, _| JToken::from(acc.as_string() + &v.as_string()));
    assert_eq!(concat, Some(JToken::from("xyz")));

    // a removed, b skipped, c removed
    wrapped.filter(|_, _, _| false);
    let single = wrapped.reduce_first(|_, _, _, _| JToken::Null);
    assert_eq!(single, Some(JToken::from("y")));

    wrapped.retain(|_, _, _| false);
    assert_eq!(wrapped.reduce_first(|acc, _, _, _| acc), None);
}

#[test]
fn test_construction_failures() {
    let mut number = JToken::from(42);
    let mut null = JToken::Null;
    assert_eq!(
        objency(&mut number).unwrap_err(),
        ObjencyError::NotAPlainObject { found: "number" }
    );
    assert_eq!(
        objency(&mut null).unwrap_err(),
        ObjencyError::NotAPlainObject { found: "null" }
    );

    let mut proto = JToken::parse(r#"{"constructor": {"name": "Foo"}}"#).unwrap();
    assert_eq!(
        objency(&mut proto).unwrap_err(),
        ObjencyError::LooksLikePrototype
    );

    let mut falsy_ctor = JToken::parse(r#"{"constructor": 0}"#).unwrap();
    assert!(objency(&mut falsy_ctor).is_ok());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ObjencyError::NotAPlainObject { found: "array" }.to_string(),
        "expected a plain object, found array"
    );
    assert!(ObjencyError::LooksLikePrototype
        .to_string()
        .contains("constructor"));
}

#[test]
fn test_serde_json_values_are_written_through() {
    let mut value = serde_json::json!({"n": 1, "s": "a"});
    objency(&mut value)
        .unwrap()
        .retain(|v, _, _| v.is_number())
        .map(|v, _, _| serde_json::json!(v.as_i64().unwrap_or_default() + 1));
    assert_eq!(value, serde_json::json!({"n": 2, "s": "a"}));
}

#[test]
fn test_into_inner_returns_the_wrapped_mapping() {
    let mut obj = object(r#"{"a": 1, "b": "x", "c": 3}"#);
    let data_ptr: *const JObject = &obj;

    let mut wrapped = objency(&mut obj).unwrap();
    wrapped
        .filter(|v, _, _| v.is_number())
        .fill(JToken::from("filled"));
    let inner = wrapped.into_inner();

    assert!(std::ptr::eq(&*inner, data_ptr));
    inner.set("d", 4);
    assert_eq!(
        obj.to_json_value(),
        serde_json::json!({"a": "filled", "b": "x", "c": "filled", "d": 4})
    );
}

#[test]
fn test_crate_root_exports_resolve() {
    use objency::{is_truthy, IntoObjency, KeyedMapping, Objency, ObjencyResult, CONSTRUCTOR_KEY};
    use serde_json::{Map, Value};

    fn wrap_map(map: &mut Map<String, Value>) -> ObjencyResult<Objency<'_, Map<String, Value>>> {
        map.into_objency()
    }

    let mut map = Map::new();
    map.insert("a".into(), serde_json::json!(1));
    map.insert("b".into(), serde_json::json!(false));
    map.insert("c".into(), serde_json::json!("0"));
    map.insert("d".into(), serde_json::json!(4));

    let mut wrapped = wrap_map(&mut map).unwrap();
    wrapped.filter(|v, _, _| is_truthy(v));
    assert_eq!(wrapped.active_keys(), ["a", "c", "d"]);
    assert_eq!(wrapped.data().enumerable_keys(), ["a", "b", "c", "d"]);
    assert_eq!(CONSTRUCTOR_KEY, "constructor");
}
