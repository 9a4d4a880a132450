//! Validation spec trees.
//!
//! A [`Spec`] mirrors the shape of the data it validates: each field maps to
//! a [`SpecNode`], which is either a leaf validator, a nested sub-spec, an
//! array marker, or an explicitly unsupported value. The engine walks this
//! tree in the order fields were declared.

use indexmap::IndexMap;
use serde_json::Value;

use crate::factory::Validator;

/// One node of a validation spec.
///
/// The variants are the complete set of things a spec field can hold. Dynamic
/// "is it a function or an object" inspection from looser languages becomes
/// this tagged union; the catch-all for anything else is
/// [`SpecNode::Unsupported`], which the engine rejects with a
/// [`SpecError`](crate::SpecError) naming the value.
#[derive(Debug, Clone)]
pub enum SpecNode<M = String> {
    /// A leaf validator applied to the field's value.
    Check(Validator<M>),
    /// A sub-spec validating the field as a nested object.
    Nested(Spec<M>),
    /// An array marker: validate each element of the field's list against the
    /// wrapped spec.
    Each(Spec<M>),
    /// A value that is none of the above. Walking it is a configuration
    /// error.
    Unsupported(Value),
}

impl<M> SpecNode<M> {
    /// Creates an array marker node.
    ///
    /// Equivalent to wrapping a spec in a one-element list in the original
    /// notation. For a minimum element count, use
    /// [`array`](crate::combinators::array) as the leaf instead.
    pub fn each(element_spec: Spec<M>) -> Self {
        SpecNode::Each(element_spec)
    }
}

impl<M> From<Validator<M>> for SpecNode<M> {
    fn from(validator: Validator<M>) -> Self {
        SpecNode::Check(validator)
    }
}

impl<M> From<Spec<M>> for SpecNode<M> {
    fn from(spec: Spec<M>) -> Self {
        SpecNode::Nested(spec)
    }
}

impl<M> From<Value> for SpecNode<M> {
    fn from(value: Value) -> Self {
        SpecNode::Unsupported(value)
    }
}

/// An ordered mapping from field name to [`SpecNode`].
///
/// Built with the chaining [`field`](Spec::field) method. Iteration order is
/// declaration order, so validation results are reproducible.
///
/// # Example
///
/// ```rust
/// use faultline::{validate, validators, Spec};
/// use faultline::validators::Bounds;
/// use serde_json::json;
///
/// let spec = Spec::new()
///     .field("username", validators::length(Bounds::between(3, 12)).message("bad length"))
///     .field(
///         "address",
///         Spec::new().field("zip", validators::exists().message("required")),
///     );
///
/// let errors = validate(&json!({ "username": "ada" }), &spec).unwrap();
/// assert!(errors.get("username").is_none());
/// assert!(errors.get("address").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Spec<M = String> {
    fields: IndexMap<String, SpecNode<M>>,
}

impl<M> Spec<M> {
    /// Creates an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous node for the same name.
    ///
    /// Accepts anything convertible into a [`SpecNode`]: a
    /// [`Validator`], a nested [`Spec`], or a raw
    /// [`Value`](serde_json::Value) (which the engine will reject).
    pub fn field(mut self, name: impl Into<String>, node: impl Into<SpecNode<M>>) -> Self {
        self.fields.insert(name.into(), node.into());
        self
    }

    /// Returns the node declared for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SpecNode<M>> {
        self.fields.get(name)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over `(name, node)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecNode<M>)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }
}

impl<M> Default for Spec<M> {
    fn default() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }
}
