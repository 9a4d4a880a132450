//! Configuration error types.
//!
//! Validation failures are never reported here; they flow through
//! [`ErrorTree`](crate::ErrorTree) values. This module covers the other
//! channel: mistakes in how a spec was authored, which fail fast instead of
//! producing a partial result.

mod spec_error;

pub use spec_error::SpecError;
