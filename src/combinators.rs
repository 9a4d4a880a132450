//! Composition helpers built on the leaf-validator shape.
//!
//! [`combine`] chains leaf validators; [`array`] lifts a whole spec into a
//! leaf that validates each element of a list.

use crate::engine::check_each;
use crate::factory::Validator;
use crate::spec::Spec;
use crate::tree::ErrorValue;

/// Options for [`array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayOptions {
    /// The minimum number of element slots to report. Short or missing lists
    /// are padded up to this count with absent slots; lists at or above it
    /// are used as-is.
    pub min_count: usize,
}

impl ArrayOptions {
    /// Options with the given minimum slot count.
    pub fn min_count(min_count: usize) -> Self {
        Self { min_count }
    }
}

/// Chains leaf validators into one.
///
/// The combined validator invokes each validator in order against the same
/// value and returns the first error; later validators are not invoked once
/// one fails. If all pass, the value is valid.
///
/// # Example
///
/// ```rust
/// use faultline::{combine, validators};
/// use faultline::validators::Bounds;
/// use serde_json::json;
///
/// let username = combine([
///     validators::exists().message("required"),
///     validators::length(Bounds::at_least(3)).message("too short"),
/// ]);
///
/// assert_eq!(username.check(None).unwrap().unwrap().as_message(), Some(&"required"));
/// assert_eq!(
///     username.check(Some(&json!("ab"))).unwrap().unwrap().as_message(),
///     Some(&"too short"),
/// );
/// assert!(username.check(Some(&json!("ada"))).unwrap().is_none());
/// ```
pub fn combine<M: 'static>(validators: impl IntoIterator<Item = Validator<M>>) -> Validator<M> {
    let chain: Vec<Validator<M>> = validators.into_iter().collect();
    Validator::new(move |value| {
        for validator in &chain {
            if let Some(found) = validator.check(value)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    })
}

/// Lifts a spec into a leaf validator over a list.
///
/// The produced validator interprets its value as a list (missing and
/// non-list values are empty lists), validates every element against
/// `element_spec`, and reports one error tree per slot, empty trees
/// included. With [`ArrayOptions::min_count`], short input is padded with
/// absent slots, so "must supply at least N items" surfaces as per-slot
/// required-field errors rather than a single list-level message.
///
/// The result is always reported, never pruned, unlike nested sub-specs.
///
/// # Example
///
/// ```rust
/// use faultline::{array, validators, ArrayOptions, Spec};
/// use serde_json::json;
///
/// let items = array(
///     Spec::new().field("qty", validators::exists().message("required")),
///     ArrayOptions::min_count(2),
/// );
///
/// let slots = items.check(None).unwrap().unwrap();
/// let slots = slots.as_items().unwrap();
/// assert_eq!(slots.len(), 2);
/// assert!(slots.iter().all(|tree| tree.get("qty").is_some()));
/// ```
pub fn array<M: 'static>(element_spec: Spec<M>, options: ArrayOptions) -> Validator<M> {
    Validator::new(move |value| {
        let slots = check_each(value, &element_spec, options.min_count)?;
        Ok(Some(ErrorValue::Items(slots)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;
    use crate::factory::ValidatorBuilder;
    use crate::tree::ErrorTree;
    use crate::validators;
    use serde_json::{json, Value};

    #[test]
    fn test_combine_returns_first_error() {
        let combined = combine([
            validators::length(validators::Bounds::at_least(3)).message("too short"),
            validators::length(validators::Bounds::at_least(5)).message("way too short"),
        ]);

        assert_eq!(
            combined.check(Some(&json!("a"))).unwrap().unwrap().as_message(),
            Some(&"too short")
        );
        assert_eq!(
            combined.check(Some(&json!("abcd"))).unwrap().unwrap().as_message(),
            Some(&"way too short")
        );
    }

    #[test]
    fn test_combine_passes_when_all_pass() {
        let combined = combine([
            validators::length(validators::Bounds::at_least(1)).message("too short"),
            validators::length(validators::Bounds::at_least(2)).message("too short 2"),
        ]);
        assert!(combined.check(Some(&json!("abcd"))).unwrap().is_none());
    }

    #[test]
    fn test_combine_short_circuits() {
        // The second validator's predicate errors if it is ever invoked.
        let tripwire = ValidatorBuilder::fallible(|_: Option<&Value>, _: &()| {
            Err(SpecError::invalid_params("invoked past a failure"))
        })
        .bind(())
        .message("unreached");

        let combined = combine([
            validators::exists().message("required"),
            tripwire,
        ]);

        let result = combined.check(None).unwrap();
        assert_eq!(result.unwrap().as_message(), Some(&"required"));
    }

    #[test]
    fn test_array_maps_positionally() {
        let validator = array(
            Spec::new().field("foo", validators::exists().message("err")),
            ArrayOptions::default(),
        );

        let result = validator
            .check(Some(&json!([{}, { "foo": "present" }])))
            .unwrap()
            .unwrap();
        let slots = result.as_items().unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].get("foo").and_then(|e| e.as_message()), Some(&"err"));
        assert!(slots[1].is_empty());
    }

    #[test]
    fn test_array_pads_to_min_count() {
        let validator = array(
            Spec::new().field("foo", validators::exists().message("err")),
            ArrayOptions::min_count(2),
        );

        let result = validator.check(Some(&json!([]))).unwrap().unwrap();
        let slots = result.as_items().unwrap();
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|tree| tree.get("foo").is_some()));
    }

    #[test]
    fn test_array_accepts_a_missing_value() {
        let validator = array(
            Spec::new().field("foo", validators::exists().message("err")),
            ArrayOptions::min_count(1),
        );

        let result = validator.check(None).unwrap().unwrap();
        let slots = result.as_items().unwrap();
        assert_eq!(slots[0].get("foo").and_then(|e| e.as_message()), Some(&"err"));
    }

    #[test]
    fn test_array_never_truncates() {
        let validator: Validator<&str> = array(Spec::new(), ArrayOptions::min_count(1));
        let result = validator.check(Some(&json!([{}, {}, {}]))).unwrap().unwrap();
        assert_eq!(result.as_items().unwrap().len(), 3);
    }

    #[test]
    fn test_array_is_reported_even_when_clean() {
        let clean: Validator<&str> = Validator::new(|_| Ok(None));
        let validator = array(Spec::new().field("foo", clean), ArrayOptions::default());
        let result = validator.check(Some(&json!([{}]))).unwrap();
        assert_eq!(
            result,
            Some(ErrorValue::Items(vec![ErrorTree::new()]))
        );
    }
}
