//! # Faultline
//!
//! Declarative data validation producing sparse error trees.
//!
//! ## Overview
//!
//! A validation spec is a tree of validators mirroring the shape of the data
//! it checks. [`validate`] walks the two together and returns an
//! [`ErrorTree`] holding entries only for the fields that failed; a clean
//! field, or a whole clean branch, is simply absent. The output maps
//! directly onto per-field error display in a form UI, but nothing here is
//! form-specific.
//!
//! Validation is synchronous and pure: no coercion, no I/O, no shared
//! mutable state. Specs and validators are immutable `Send + Sync` values,
//! safe to build once and share across threads.
//!
//! ## Core Types
//!
//! - [`Spec`] / [`SpecNode`]: the validation tree (leaf validators, nested
//!   sub-specs, array markers)
//! - [`Validator`]: a leaf check, built in three stages by the factory in
//!   [`factory`] (predicate, then bound parameters, then message)
//! - [`ErrorTree`] / [`ErrorValue`]: the sparse result
//! - [`SpecError`]: configuration mistakes, reported fail-fast through `Err`
//!   and never mixed into validation results
//!
//! ## Example
//!
//! ```rust
//! use faultline::validators::{self, Bounds};
//! use faultline::{validate, Spec};
//! use serde_json::json;
//!
//! let spec = Spec::new()
//!     .field("name", validators::exists().message("name is required"))
//!     .field("age", validators::number(Bounds::at_least(18.0)).message("must be 18 or older"));
//!
//! let errors = validate(&json!({ "age": 15 }), &spec).unwrap();
//!
//! assert_eq!(errors.get("name").and_then(|e| e.as_message()), Some(&"name is required"));
//! assert_eq!(errors.get("age").and_then(|e| e.as_message()), Some(&"must be 18 or older"));
//!
//! let errors = validate(&json!({ "name": "Ada", "age": 36 }), &spec).unwrap();
//! assert!(errors.is_empty());
//! ```
//!
//! Custom checks come from [`validator_from_fn`], composition from
//! [`combine`], and list-wise validation from [`array`] or
//! [`SpecNode::each`].

pub mod combinators;
pub mod engine;
pub mod error;
pub mod factory;
pub mod path;
pub mod spec;
pub mod tree;
pub mod validators;

pub use combinators::{array, combine, ArrayOptions};
pub use engine::validate;
pub use error::SpecError;
pub use factory::{validator_from_fn, BoundValidator, Validator, ValidatorBuilder};
pub use path::{FieldPath, PathSegment};
pub use spec::{Spec, SpecNode};
pub use tree::{ErrorTree, ErrorValue};
