//! # Objency
//!
//! Array-style, chainable operations over plain key-value mappings.
//!
//! [`objency`] validates a value and wraps it. The wrapper snapshots the mapping's
//! keys in enumeration order and offers `for_each`, `map`, `filter`, `retain`,
//! `every`, `some`, `fill`, `reduce` and `set_all_key` over them. Mutating
//! operations write straight through to the caller's mapping.
//!
//! ## Quick Start
//!
//! ```rust
//! use objency::objency;
//! use objency_json::JToken;
//!
//! let mut token = JToken::parse(r#"{"foo": "bar", "baz": {"qux": "quux"}, "71": ["corge"]}"#)
//!     .expect("valid JSON");
//!
//! let mut strings = Vec::new();
//! let mut everything = Vec::new();
//! objency(&mut token)
//!     .expect("plain object")
//!     .filter(|v, _, _| v.is_string())
//!     .for_each(|v, _, _| strings.push(v.to_string()))
//!     .set_all_key()
//!     .for_each(|v, _, _| everything.push(v.to_string()));
//!
//! assert_eq!(strings, vec!["\"bar\""]);
//! assert_eq!(everything, vec![r#"["corge"]"#, "\"bar\"", r#"{"qux":"quux"}"#]);
//! ```
//!
//! ## Supported mappings
//!
//! Anything implementing [`KeyedMapping`]: `objency_json::JObject` (JavaScript key
//! order), `serde_json::Map` and `IndexMap<String, V>` (insertion order) and
//! `BTreeMap<String, V>` (sorted order). See [`IntoObjency`] for the accepted
//! argument types.

pub mod error;
pub mod mapping;
mod wrapper;
pub mod wrap;

pub use error::{ObjencyError, ObjencyResult};
pub use mapping::{is_truthy, KeyedMapping, CONSTRUCTOR_KEY};
pub use wrapper::Objency;
pub use wrap::{objency, IntoObjency};
