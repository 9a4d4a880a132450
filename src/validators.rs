//! Built-in leaf validators.
//!
//! Each function here is a stage-two factory product: parameters already
//! bound, awaiting a message. They exist to cover the common form-validation
//! cases; anything beyond them is a
//! [`validator_from_fn`](crate::validator_from_fn) call away.
//!
//! All of them except [`exists`] fail closed: a missing value returns the
//! bound message without the predicate running. [`exists`] evaluates absence
//! itself, since absence is precisely what it is about.

use regex::Regex;
use serde_json::Value;

use crate::error::SpecError;
use crate::factory::{validator_from_fn, BoundValidator, ValidatorBuilder};

/// Optional inclusive min/max bounds for [`length`] and [`number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Inclusive lower bound.
    pub min: Option<T>,
    /// Inclusive upper bound.
    pub max: Option<T>,
}

impl<T> Bounds<T> {
    /// Bounds with only a lower limit.
    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Bounds with only an upper limit.
    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Bounds with both limits.
    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

/// JSON truthiness, for [`exists`] and custom validators.
///
/// `null`, `false`, zero and the empty string are falsy. Arrays and objects
/// are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Requires a truthy value.
///
/// Absence is evaluated like any other falsy value, through the predicate.
///
/// # Example
///
/// ```rust
/// use faultline::validators::exists;
/// use serde_json::json;
///
/// let required = exists().message("required");
/// assert!(required.check(None).unwrap().is_some());
/// assert!(required.check(Some(&json!(""))).unwrap().is_some());
/// assert!(required.check(Some(&json!("something"))).unwrap().is_none());
/// ```
pub fn exists() -> BoundValidator<()> {
    validator_from_fn(|value: Option<&Value>, _: &()| value.map_or(false, is_truthy)).bind(())
}

/// Requires a string whose character count falls within `bounds`, inclusive.
///
/// At least one bound is required; invoking the validator without any is a
/// configuration error, not a validation failure. Non-string values fail.
///
/// # Example
///
/// ```rust
/// use faultline::validators::{length, Bounds};
/// use serde_json::json;
///
/// let username = length(Bounds::between(3, 12)).message("bad length");
/// assert!(username.check(Some(&json!("ada"))).unwrap().is_none());
/// assert!(username.check(Some(&json!("ab"))).unwrap().is_some());
/// ```
pub fn length(bounds: Bounds<usize>) -> BoundValidator<Bounds<usize>> {
    ValidatorBuilder::fallible(|value: Option<&Value>, bounds: &Bounds<usize>| {
        if bounds.min.is_none() && bounds.max.is_none() {
            return Err(SpecError::invalid_params(
                "length requires at least one of `min` or `max`",
            ));
        }
        let count = match value.and_then(Value::as_str) {
            Some(text) => text.chars().count(),
            None => return Ok(false),
        };
        Ok(bounds.min.map_or(true, |min| count >= min)
            && bounds.max.map_or(true, |max| count <= max))
    })
    .fail_on_missing()
    .bind(bounds)
}

/// Requires a numeric value within `bounds`, inclusive.
///
/// JSON numbers qualify, as do strings that parse as one; bounds compare the
/// parsed value. Both bounds are optional: with none, the validator is a
/// plain "is a number" check.
///
/// # Example
///
/// ```rust
/// use faultline::validators::{number, Bounds};
/// use serde_json::json;
///
/// let adult = number(Bounds::at_least(18.0)).message("must be 18 or older");
/// assert!(adult.check(Some(&json!(21))).unwrap().is_none());
/// assert!(adult.check(Some(&json!("21"))).unwrap().is_none());
/// assert!(adult.check(Some(&json!(15))).unwrap().is_some());
/// assert!(adult.check(Some(&json!("soon"))).unwrap().is_some());
/// ```
pub fn number(bounds: Bounds<f64>) -> BoundValidator<Bounds<f64>> {
    validator_from_fn(|value: Option<&Value>, bounds: &Bounds<f64>| {
        let parsed = match value {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(number) => {
                bounds.min.map_or(true, |min| number >= min)
                    && bounds.max.map_or(true, |max| number <= max)
            }
            None => false,
        }
    })
    .fail_on_missing()
    .bind(bounds)
}

/// Requires a string matched by `pattern`.
///
/// The match is unanchored; anchor the pattern itself for whole-string
/// matches. Non-string values fail.
///
/// # Example
///
/// ```rust
/// use faultline::validators::regex;
/// use regex::Regex;
/// use serde_json::json;
///
/// let zip = regex(Regex::new(r"^\d{5}$").unwrap()).message("not a zip code");
/// assert!(zip.check(Some(&json!("90210"))).unwrap().is_none());
/// assert!(zip.check(Some(&json!("9021"))).unwrap().is_some());
/// ```
pub fn regex(pattern: Regex) -> BoundValidator<Regex> {
    validator_from_fn(|value: Option<&Value>, pattern: &Regex| {
        value
            .and_then(Value::as_str)
            .map_or(false, |text| pattern.is_match(text))
    })
    .fail_on_missing()
    .bind(pattern)
}

/// Requires strict equality with `expected`: same JSON type, same value, no
/// coercion.
///
/// # Example
///
/// ```rust
/// use faultline::validators::equals;
/// use serde_json::json;
///
/// let accepted = equals(json!(true)).message("must accept the terms");
/// assert!(accepted.check(Some(&json!(true))).unwrap().is_none());
/// // The string "true" is not the boolean true.
/// assert!(accepted.check(Some(&json!("true"))).unwrap().is_some());
/// ```
pub fn equals(expected: Value) -> BoundValidator<Value> {
    validator_from_fn(|value: Option<&Value>, expected: &Value| {
        value.map_or(false, |value| value == expected)
    })
    .fail_on_missing()
    .bind(expected)
}
