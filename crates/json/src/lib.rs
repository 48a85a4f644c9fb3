//! # Objency JSON
//!
//! Dynamically typed JSON values for the `objency` wrapper.
//!
//! [`JToken`] models any value a caller may hand to the wrapper factory, so that the
//! plain-object check can reject scalars, arrays and `null` at run time. [`JObject`]
//! keeps properties in insertion order and enumerates them the way a JavaScript
//! engine does (array-index keys first, ascending).
//!
//! ```rust
//! use objency_json::{JObject, JToken};
//!
//! let token = JToken::parse(r#"{"foo": "bar", "71": ["corge"]}"#).unwrap();
//! let obj: &JObject = token.as_object().unwrap();
//! assert_eq!(obj.property_keys(), vec!["71", "foo"]);
//! ```

pub mod error;
pub mod j_object;
pub mod j_token;

pub use error::{JsonError, JsonResult};
pub use j_object::{array_index, JObject};
pub use j_token::{JToken, MAX_SAFE_INTEGER};
