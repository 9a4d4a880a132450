//! The validator factory.
//!
//! A raw boolean predicate becomes a leaf validator in three stages, each an
//! immutable, reusable value:
//!
//! 1. [`validator_from_fn`] wraps the predicate into a [`ValidatorBuilder`],
//!    which also owns the missing-value policy switch,
//! 2. [`ValidatorBuilder::bind`] captures the bound parameters, producing a
//!    [`BoundValidator`],
//! 3. [`BoundValidator::message`] captures the error message, producing the
//!    final [`Validator`].
//!
//! Every stage can be reused: one builder can be bound with different
//! parameters, one bound validator can carry different messages.
//!
//! # Example
//!
//! ```rust
//! use faultline::validator_from_fn;
//! use serde_json::{json, Value};
//!
//! let above = validator_from_fn(|value: Option<&Value>, floor: &i64| {
//!     value.and_then(Value::as_i64).map_or(false, |n| n > *floor)
//! });
//!
//! let validator = above.bind(23).message("too small");
//! assert_eq!(validator.check(Some(&json!(10))).unwrap().unwrap().as_message(), Some(&"too small"));
//! assert!(validator.check(Some(&json!(42))).unwrap().is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::SpecError;
use crate::tree::ErrorValue;

type CheckFn<M> = dyn Fn(Option<&Value>) -> Result<Option<ErrorValue<M>>, SpecError> + Send + Sync;
type PredicateFn<P> = dyn Fn(Option<&Value>, &P) -> Result<bool, SpecError> + Send + Sync;

/// A leaf validator: one value in, one error or nothing out.
///
/// `None` from [`check`](Validator::check) means the value passed. `Some`
/// carries the error verbatim; the engine stores it in the tree untouched.
/// An `Err` is a configuration error and propagates out of the whole
/// validation run.
///
/// Validators are cheap to clone and safe to share across threads.
pub struct Validator<M = String> {
    run: Arc<CheckFn<M>>,
}

impl<M> Validator<M> {
    /// Wraps a bare checking function into a validator.
    ///
    /// This is the escape hatch below the factory: the function decides
    /// entirely on its own what to report. Most validators are better built
    /// through [`validator_from_fn`], which handles the message plumbing and
    /// the missing-value policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use faultline::{ErrorValue, Validator};
    ///
    /// let always: Validator<&str> = Validator::new(|_| Ok(Some(ErrorValue::Message("nope"))));
    /// assert!(always.check(None).unwrap().is_some());
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<Option<ErrorValue<M>>, SpecError> + Send + Sync + 'static,
        M: 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Checks a value. `None` means the data key was absent.
    pub fn check(&self, value: Option<&Value>) -> Result<Option<ErrorValue<M>>, SpecError> {
        (self.run)(value)
    }
}

impl<M> Clone for Validator<M> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<M> fmt::Debug for Validator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

/// Stage one of the factory: holds the predicate and the missing-value policy.
///
/// `P` is the type of the parameters bound in stage two: `()` for none, a
/// scalar, a tuple, or a struct such as
/// [`Bounds`](crate::validators::Bounds).
pub struct ValidatorBuilder<P> {
    predicate: Arc<PredicateFn<P>>,
    fail_on_missing: bool,
}

/// Turns a boolean predicate into a [`ValidatorBuilder`].
///
/// The predicate receives the value under check (`None` when the data key was
/// absent) and a reference to the bound parameters. `true` means valid.
///
/// Builders start with the missing-value policy open: the predicate sees
/// absent values and decides for itself. Switch to fails-closed with
/// [`ValidatorBuilder::fail_on_missing`].
pub fn validator_from_fn<P, F>(predicate: F) -> ValidatorBuilder<P>
where
    P: Send + Sync + 'static,
    F: Fn(Option<&Value>, &P) -> bool + Send + Sync + 'static,
{
    ValidatorBuilder::fallible(move |value, params| Ok(predicate(value, params)))
}

impl<P: Send + Sync + 'static> ValidatorBuilder<P> {
    /// Like [`validator_from_fn`], for predicates with configuration
    /// preconditions.
    ///
    /// An `Err` from the predicate is not a validation result; it propagates
    /// out of the validation run uncaught, the same way an unsupported spec
    /// node does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use faultline::{SpecError, ValidatorBuilder};
    /// use serde_json::Value;
    ///
    /// let builder = ValidatorBuilder::fallible(|value: Option<&Value>, divisor: &i64| {
    ///     if *divisor == 0 {
    ///         return Err(SpecError::invalid_params("divisor must be non-zero"));
    ///     }
    ///     Ok(value.and_then(Value::as_i64).map_or(false, |n| n % divisor == 0))
    /// });
    ///
    /// let validator = builder.bind(0).message("not divisible");
    /// assert!(validator.check(Some(&serde_json::json!(4))).is_err());
    /// ```
    pub fn fallible<F>(predicate: F) -> Self
    where
        F: Fn(Option<&Value>, &P) -> Result<bool, SpecError> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            fail_on_missing: false,
        }
    }

    /// Switches the builder to the fails-closed policy: an absent value
    /// returns the bound message immediately, without invoking the predicate.
    ///
    /// This is how required-ness is opt-in per validator kind. The built-in
    /// `length`, `number`, `regex` and `equals` validators are built with it;
    /// `exists` is not, since absence is exactly what its predicate evaluates.
    pub fn fail_on_missing(mut self) -> Self {
        self.fail_on_missing = true;
        self
    }

    /// Stage two: captures the bound parameters by value.
    pub fn bind(&self, params: P) -> BoundValidator<P> {
        BoundValidator {
            predicate: Arc::clone(&self.predicate),
            params: Arc::new(params),
            fail_on_missing: self.fail_on_missing,
        }
    }
}

impl<P> Clone for ValidatorBuilder<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            fail_on_missing: self.fail_on_missing,
        }
    }
}

impl<P> fmt::Debug for ValidatorBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("fail_on_missing", &self.fail_on_missing)
            .finish_non_exhaustive()
    }
}

/// Stage two's output: a predicate with its parameters bound, awaiting a
/// message.
pub struct BoundValidator<P> {
    predicate: Arc<PredicateFn<P>>,
    params: Arc<P>,
    fail_on_missing: bool,
}

impl<P: Send + Sync + 'static> BoundValidator<P> {
    /// Stage three: captures the error message, producing the leaf validator.
    ///
    /// The message is cloned into each failure report, so `M` is typically a
    /// small value: a `&'static str`, a `String`, an error code enum.
    pub fn message<M>(&self, message: M) -> Validator<M>
    where
        M: Clone + Send + Sync + 'static,
    {
        let predicate = Arc::clone(&self.predicate);
        let params = Arc::clone(&self.params);
        let fail_on_missing = self.fail_on_missing;
        Validator::new(move |value| {
            if fail_on_missing && value.is_none() {
                return Ok(Some(ErrorValue::Message(message.clone())));
            }
            if predicate(value, params.as_ref())? {
                Ok(None)
            } else {
                Ok(Some(ErrorValue::Message(message.clone())))
            }
        })
    }
}

impl<P> Clone for BoundValidator<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            params: Arc::clone(&self.params),
            fail_on_missing: self.fail_on_missing,
        }
    }
}

impl<P> fmt::Debug for BoundValidator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundValidator")
            .field("fail_on_missing", &self.fail_on_missing)
            .finish_non_exhaustive()
    }
}
