//! The validation engine.
//!
//! [`validate`] walks a [`Spec`] against a data value and assembles the
//! sparse [`ErrorTree`]. All recursion lives here; the list helper in
//! [`combinators`](crate::combinators) reuses the same walk.

use serde_json::Value;

use crate::error::SpecError;
use crate::spec::{Spec, SpecNode};
use crate::tree::{ErrorTree, ErrorValue};

/// Validates `data` against `spec`, producing a sparse error tree.
///
/// For each declared field, the engine looks up `data`'s value under that
/// name (absent keys, and any lookup into a non-object, yield the missing
/// value) and dispatches on the node:
///
/// - a leaf validator's `Some` result is stored verbatim; `None` omits the
///   field,
/// - a nested spec recurses, and is stored only if the recursive tree is
///   non-empty — a branch that validates clean disappears entirely,
/// - an array marker validates each element of the field's list and always
///   stores the per-element trees, empty or not,
/// - an unsupported node fails the whole run with
///   [`SpecError::UnsupportedNode`]; no partial tree is returned.
///
/// An empty tree means the data validated clean.
///
/// # Example
///
/// ```rust
/// use faultline::{validate, validators, Spec};
/// use faultline::validators::Bounds;
/// use serde_json::json;
///
/// let spec = Spec::new()
///     .field("name", validators::exists().message("name is required"))
///     .field(
///         "contact",
///         Spec::new().field("email", validators::exists().message("email is required")),
///     )
///     .field("age", validators::number(Bounds::at_least(18.0)).message("must be 18 or older"));
///
/// let errors = validate(&json!({ "name": "Ada", "age": 15 }), &spec).unwrap();
///
/// assert!(errors.get("name").is_none());
/// assert_eq!(
///     errors
///         .get("contact")
///         .and_then(|e| e.as_nested())
///         .and_then(|t| t.get("email"))
///         .and_then(|e| e.as_message()),
///     Some(&"email is required"),
/// );
/// assert_eq!(errors.get("age").and_then(|e| e.as_message()), Some(&"must be 18 or older"));
/// ```
pub fn validate<M>(data: &Value, spec: &Spec<M>) -> Result<ErrorTree<M>, SpecError> {
    walk(Some(data), spec)
}

/// The recursive walk. `data` is `None` for branches absent from the input,
/// which validate like empty objects: every lookup misses, and only
/// validators with something to say about absence produce errors.
pub(crate) fn walk<M>(data: Option<&Value>, spec: &Spec<M>) -> Result<ErrorTree<M>, SpecError> {
    let mut errors = ErrorTree::new();

    for (field, node) in spec.iter() {
        let value = data.and_then(|data| data.get(field));
        match node {
            SpecNode::Check(validator) => {
                if let Some(found) = validator.check(value)? {
                    errors.insert(field, found);
                }
            }
            SpecNode::Each(element_spec) => {
                let slots = check_each(value, element_spec, 0)?;
                // List results are kept even when every slot is clean.
                errors.insert(field, ErrorValue::Items(slots));
            }
            SpecNode::Nested(sub_spec) => {
                let nested = walk(value, sub_spec)?;
                if !nested.is_empty() {
                    errors.insert(field, ErrorValue::Nested(nested));
                }
            }
            SpecNode::Unsupported(raw) => {
                return Err(SpecError::UnsupportedNode {
                    field: field.to_string(),
                    value: raw.clone(),
                });
            }
        }
    }

    Ok(errors)
}

/// Validates every slot of a list value against `element_spec`.
///
/// A missing or non-list value is an empty list. The slot count is the
/// greater of the list length and `min_count`; slots past the end of the
/// list validate as absent branches, so a too-short list reports its missing
/// tail as per-slot required-field errors.
pub(crate) fn check_each<M>(
    value: Option<&Value>,
    element_spec: &Spec<M>,
    min_count: usize,
) -> Result<Vec<ErrorTree<M>>, SpecError> {
    let items = match value.and_then(Value::as_array) {
        Some(items) => items.as_slice(),
        None => &[],
    };

    let slots = items.len().max(min_count);
    let mut trees = Vec::with_capacity(slots);
    for index in 0..slots {
        trees.push(walk(items.get(index), element_spec)?);
    }
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Validator;
    use serde_json::json;

    fn failing(message: &'static str) -> Validator<&'static str> {
        Validator::new(move |_| Ok(Some(ErrorValue::Message(message))))
    }

    fn passing() -> Validator<&'static str> {
        Validator::new(|_| Ok(None))
    }

    #[test]
    fn test_empty_spec_yields_empty_tree() {
        let spec: Spec<&str> = Spec::new();
        assert!(validate(&json!({}), &spec).unwrap().is_empty());
    }

    #[test]
    fn test_clean_leaves_are_omitted() {
        let spec = Spec::new().field("foo", passing());
        assert!(validate(&json!({}), &spec).unwrap().is_empty());
    }

    #[test]
    fn test_clean_branches_are_omitted() {
        let spec = Spec::new().field(
            "foo",
            Spec::new().field("bar", passing()).field("baz", passing()),
        );
        assert!(validate(&json!({}), &spec).unwrap().is_empty());
    }

    #[test]
    fn test_leaf_errors_are_stored_verbatim() {
        let spec = Spec::new().field("foo", failing("error"));
        let errors = validate(&json!({}), &spec).unwrap();
        assert_eq!(errors.get("foo"), Some(&ErrorValue::Message("error")));
    }

    #[test]
    fn test_each_marker_is_never_pruned() {
        let spec = Spec::new().field("items", SpecNode::each(Spec::new().field("x", passing())));

        // Every element clean, and even a missing list, still reports slots.
        let errors = validate(&json!({ "items": [{}, {}] }), &spec).unwrap();
        assert_eq!(
            errors.get("items"),
            Some(&ErrorValue::Items(vec![ErrorTree::new(), ErrorTree::new()]))
        );

        let errors = validate(&json!({}), &spec).unwrap();
        assert_eq!(errors.get("items"), Some(&ErrorValue::Items(Vec::new())));
    }

    #[test]
    fn test_unsupported_node_fails_before_later_fields() {
        let spec = Spec::new()
            .field("bad", json!("not a validator"))
            .field("later", failing("unreached"));

        let error = validate(&json!({}), &spec).unwrap_err();
        assert!(matches!(error, SpecError::UnsupportedNode { .. }));
        assert!(error.to_string().contains("not a validator"));
    }

    #[test]
    fn test_lookup_into_non_object_misses() {
        // A scalar where a branch was expected validates like an empty object.
        let spec = Spec::new().field(
            "profile",
            Spec::new().field("bio", crate::validators::exists().message("required")),
        );
        let errors = validate(&json!({ "profile": 42 }), &spec).unwrap();
        let nested = errors.get("profile").and_then(ErrorValue::as_nested).unwrap();
        assert_eq!(nested.get("bio"), Some(&ErrorValue::Message("required")));
    }
}
