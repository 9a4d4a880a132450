//! The spec configuration error enum.

use serde_json::Value;

/// An error in how a validation spec was put together.
///
/// `SpecError` is a programmer error, not a validation result. The engine
/// returns the first one it encounters and performs no partial validation.
/// Callers are expected to propagate it with `?`; there is nothing to recover.
///
/// # Example
///
/// ```rust
/// use faultline::{validate, Spec, SpecError};
/// use serde_json::json;
///
/// // A bare value is not a validator, a sub-spec, or an array marker.
/// let spec: Spec<&str> = Spec::new().field("foo", json!(1138));
///
/// let error = validate(&json!({}), &spec).unwrap_err();
/// assert!(matches!(error, SpecError::UnsupportedNode { .. }));
/// assert!(error.to_string().contains("1138"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// A spec node held a plain value instead of a validator, a sub-spec, or
    /// an array marker.
    #[error("unsupported spec node at `{field}`: {value}")]
    UnsupportedNode {
        /// The field whose node could not be interpreted.
        field: String,
        /// The offending value, verbatim.
        value: Value,
    },

    /// A validator was bound with parameters that do not satisfy its
    /// preconditions.
    #[error("invalid validator parameters: {0}")]
    InvalidParams(String),
}

impl SpecError {
    /// Creates an [`SpecError::InvalidParams`] from any message.
    ///
    /// Custom predicates use this to reject unusable bound parameters at
    /// invocation time.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        SpecError::InvalidParams(message.into())
    }
}
