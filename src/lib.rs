//! # Objency-RS
//!
//! Chainable array-style operations over plain key-value mappings.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`objency`] - the wrapper, its factory and the [`KeyedMapping`](objency::KeyedMapping)
//!   capability trait
//! - [`json`] - the dynamic JSON value model accepted by the factory
//!
//! ## Quick Start
//!
//! ```rust
//! use objency_rs::prelude::*;
//!
//! let mut token = JToken::parse(r#"{"a": 1, "b": 2, "c": 3}"#)?;
//! let sum = objency(&mut token)?.reduce(|acc, v, _, _| acc + v.as_number(), 0.0_f64);
//! assert_eq!(sum, 6.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use objency;
pub use objency_json as json;

/// Common imports for working with wrapped mappings
pub mod prelude {
    pub use crate::json::{JObject, JToken, JsonError};
    pub use objency::{objency, IntoObjency, KeyedMapping, Objency, ObjencyError, ObjencyResult};
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
