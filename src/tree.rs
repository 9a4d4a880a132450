//! Sparse error trees.
//!
//! This module provides [`ErrorTree`], the validation engine's output, and
//! [`ErrorValue`], the open sum of things a failing field can hold. A tree
//! contains only the fields that produced errors; clean fields and clean
//! branches are absent entirely.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::path::FieldPath;

/// The error recorded for a single failing field.
///
/// The message payload type `M` is chosen by the consumer (commonly `&str` or
/// `String`, but any value a leaf validator returns is passed through
/// verbatim).
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorValue<M = String> {
    /// An opaque payload returned by a leaf validator.
    Message(M),
    /// The result of a sub-spec; always non-empty when present.
    Nested(ErrorTree<M>),
    /// Per-element trees from list validation. Unlike `Nested`, the sequence
    /// is kept even when every element tree is empty: the empty slots are the
    /// answer for "which positions are clean".
    Items(Vec<ErrorTree<M>>),
}

impl<M> ErrorValue<M> {
    /// Returns the message payload, if this is a leaf error.
    pub fn as_message(&self) -> Option<&M> {
        match self {
            ErrorValue::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the nested tree, if this is a sub-spec error.
    pub fn as_nested(&self) -> Option<&ErrorTree<M>> {
        match self {
            ErrorValue::Nested(tree) => Some(tree),
            _ => None,
        }
    }

    /// Returns the per-element trees, if this is a list result.
    pub fn as_items(&self) -> Option<&[ErrorTree<M>]> {
        match self {
            ErrorValue::Items(items) => Some(items),
            _ => None,
        }
    }
}

/// A sparse mapping from field name to [`ErrorValue`].
///
/// Entries keep the order of the spec that produced them, so rendering is
/// deterministic. An empty tree means the data validated clean.
///
/// # Example
///
/// ```rust
/// use faultline::{validate, validators, Spec};
/// use serde_json::json;
///
/// let spec = Spec::new()
///     .field("name", validators::exists().message("required"));
///
/// let errors = validate(&json!({}), &spec).unwrap();
/// assert_eq!(errors.get("name").and_then(|e| e.as_message()), Some(&"required"));
///
/// let errors = validate(&json!({ "name": "Ada" }), &spec).unwrap();
/// assert!(errors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTree<M = String> {
    entries: IndexMap<String, ErrorValue<M>>,
}

impl<M> ErrorTree<M> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of failing fields at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field at this level failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&ErrorValue<M>> {
        self.entries.get(field)
    }

    /// Records an error for `field`, replacing any previous entry.
    pub fn insert(&mut self, field: impl Into<String>, error: ErrorValue<M>) {
        self.entries.insert(field.into(), error);
    }

    /// Returns an iterator over `(field, error)` entries in spec order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorValue<M>)> {
        self.entries.iter().map(|(field, error)| (field.as_str(), error))
    }

    /// Flattens the tree into `(path, message)` pairs in spec order.
    ///
    /// Nested trees contribute dotted field segments and list results
    /// contribute index segments, so a deeply nested failure comes out as a
    /// single addressable row. Empty list slots contribute nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use faultline::{validate, validators, Spec, SpecNode};
    /// use serde_json::json;
    ///
    /// let spec = Spec::new().field(
    ///     "items",
    ///     SpecNode::each(Spec::new().field("qty", validators::exists().message("required"))),
    /// );
    ///
    /// let errors = validate(&json!({ "items": [{}, { "qty": 2 }] }), &spec).unwrap();
    /// let rows: Vec<String> = errors
    ///     .leaves()
    ///     .into_iter()
    ///     .map(|(path, message)| format!("{}: {}", path, message))
    ///     .collect();
    /// assert_eq!(rows, vec!["items[0].qty: required"]);
    /// ```
    pub fn leaves(&self) -> Vec<(FieldPath, &M)> {
        let mut rows = Vec::new();
        collect_leaves(self, &FieldPath::root(), &mut rows);
        rows
    }
}

fn collect_leaves<'a, M>(
    tree: &'a ErrorTree<M>,
    prefix: &FieldPath,
    rows: &mut Vec<(FieldPath, &'a M)>,
) {
    for (field, error) in tree.iter() {
        let path = prefix.push_field(field);
        match error {
            ErrorValue::Message(message) => rows.push((path, message)),
            ErrorValue::Nested(nested) => collect_leaves(nested, &path, rows),
            ErrorValue::Items(items) => {
                for (index, slot) in items.iter().enumerate() {
                    collect_leaves(slot, &path.push_index(index), rows);
                }
            }
        }
    }
}

impl<M> Default for ErrorTree<M> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<M> FromIterator<(String, ErrorValue<M>)> for ErrorTree<M> {
    fn from_iter<I: IntoIterator<Item = (String, ErrorValue<M>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, M> IntoIterator for &'a ErrorTree<M> {
    type Item = (&'a String, &'a ErrorValue<M>);
    type IntoIter = indexmap::map::Iter<'a, String, ErrorValue<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<M: Display> Display for ErrorTree<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, message) in self.leaves() {
            writeln!(f, "{}: {}", path, message)?;
        }
        Ok(())
    }
}

impl<M: Serialize> Serialize for ErrorTree<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, error) in &self.entries {
            map.serialize_entry(field, error)?;
        }
        map.end()
    }
}

impl<M: Serialize> Serialize for ErrorValue<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ErrorValue::Message(message) => message.serialize(serializer),
            ErrorValue::Nested(tree) => tree.serialize(serializer),
            ErrorValue::Items(items) => items.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> ErrorTree<&'static str> {
        let mut address = ErrorTree::new();
        address.insert("zip", ErrorValue::Message("required"));

        let mut first_item = ErrorTree::new();
        first_item.insert("qty", ErrorValue::Message("too low"));

        let mut tree = ErrorTree::new();
        tree.insert("name", ErrorValue::Message("required"));
        tree.insert("address", ErrorValue::Nested(address));
        tree.insert(
            "items",
            ErrorValue::Items(vec![first_item, ErrorTree::new()]),
        );
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree: ErrorTree<&str> = ErrorTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.get("anything"), None);
    }

    #[test]
    fn test_accessors() {
        let tree = sample_tree();
        assert_eq!(
            tree.get("name").and_then(ErrorValue::as_message),
            Some(&"required")
        );
        assert!(tree.get("address").and_then(ErrorValue::as_nested).is_some());
        assert_eq!(
            tree.get("items").and_then(ErrorValue::as_items).map(|items| items.len()),
            Some(2)
        );
        assert_eq!(tree.get("name").and_then(ErrorValue::as_nested), None);
    }

    #[test]
    fn test_leaves_flatten_in_spec_order() {
        let tree = sample_tree();
        let rows: Vec<(String, &str)> = tree
            .leaves()
            .into_iter()
            .map(|(path, message)| (path.to_string(), *message))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("name".to_string(), "required"),
                ("address.zip".to_string(), "required"),
                ("items[0].qty".to_string(), "too low"),
            ]
        );
    }

    #[test]
    fn test_display_renders_one_row_per_leaf() {
        let rendered = sample_tree().to_string();
        assert_eq!(
            rendered,
            "name: required\naddress.zip: required\nitems[0].qty: too low\n"
        );
    }

    #[test]
    fn test_serialize_matches_json_shape() {
        let value = serde_json::to_value(sample_tree()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "required",
                "address": { "zip": "required" },
                "items": [{ "qty": "too low" }, {}],
            })
        );
    }

    #[test]
    fn test_serialize_structured_payload() {
        let mut tree = ErrorTree::new();
        tree.insert("foo", ErrorValue::Message(json!({ "code": 7 })));
        let value = serde_json::to_value(tree).unwrap();
        assert_eq!(value, json!({ "foo": { "code": 7 } }));
    }
}
