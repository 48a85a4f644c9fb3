use thiserror::Error;

/// Errors raised when a value is handed to [`objency`](crate::objency).
///
/// Every operation on a constructed wrapper is infallible, so these are the only
/// failures the crate reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjencyError {
    /// The value is not object-shaped (`null`, `undefined`, a scalar or an array).
    #[error("expected a plain object, found {found}")]
    NotAPlainObject { found: &'static str },

    /// The value owns a truthy `constructor` property.
    #[error("value owns a `constructor` property and looks like a prototype object")]
    LooksLikePrototype,
}

impl ObjencyError {
    pub fn not_a_plain_object(found: &'static str) -> Self {
        Self::NotAPlainObject { found }
    }
}

/// Result type for wrapper construction
pub type ObjencyResult<T> = Result<T, ObjencyError>;
