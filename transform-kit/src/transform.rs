//! Collection transform operations
//!
//! The three entry points share one shape: a borrowed, read-only collection
//! (or single argument) plus a caller-supplied transform. `transform_sequence`
//! and `transform_pairs` mandate the transform and fail with
//! [`CallError::MissingTransform`] when it is absent; [`maybe_invoke`] treats
//! the transform as optional and reports its absence as a value instead of an
//! error, so callers can distinguish "no callback available" from "callback
//! failed".

use crate::types::{CallError, PairList, Result};
use std::fmt;

/// Apply `transform` to every element of `sequence`, preserving order
///
/// Returns a new vector of the same length where element *i* is
/// `transform(&sequence[i])`. The input is never mutated.
///
/// # Errors
/// Returns [`CallError::MissingTransform`] if `transform` is `None` - this
/// operation has no default behavior and callers must always supply one.
///
/// # Example
/// ```
/// use transform_kit::transform_sequence;
///
/// let doubled = transform_sequence(&[10, -15, 25], Some(|v: &i64| v * 2)).unwrap();
/// assert_eq!(doubled, vec![20, -30, 50]);
/// ```
pub fn transform_sequence<T, U, F>(sequence: &[T], transform: Option<F>) -> Result<Vec<U>>
where
    F: FnMut(&T) -> U,
{
    let mut transform = transform.ok_or(CallError::MissingTransform {
        operation: "transform_sequence",
    })?;

    log::debug!("transform_sequence: {} element(s)", sequence.len());
    Ok(sequence.iter().map(|item| transform(item)).collect())
}

/// Invoke `transform(key, value)` once per entry of `pairs`, in insertion order
///
/// Results are not collected - the transform is invoked for its side effect
/// (typically printing). The pair list is never mutated.
///
/// # Errors
/// Returns [`CallError::MissingTransform`] if `transform` is `None`.
pub fn transform_pairs<K, V, F>(pairs: &PairList<K, V>, transform: Option<F>) -> Result<()>
where
    K: PartialEq,
    F: FnMut(&K, &V),
{
    let mut transform = transform.ok_or(CallError::MissingTransform {
        operation: "transform_pairs",
    })?;

    log::debug!("transform_pairs: {} entry(ies)", pairs.len());
    for (key, value) in pairs.iter() {
        transform(key, value);
    }
    Ok(())
}

/// Outcome of a conditional invocation
///
/// Distinguishes "no callback was available" from whatever the callback
/// itself returned. `Display` renders the [`NotProvided`](Invoked::NotProvided)
/// case as a fixed fallback message for console use.
#[derive(Debug, Clone, PartialEq)]
pub enum Invoked<R> {
    /// The transform was present and returned this result
    Value(R),
    /// No transform was supplied; nothing was invoked
    NotProvided,
}

/// Fallback line printed when a conditional invocation had no transform
pub const NOT_PROVIDED_MESSAGE: &str = "not a single block was given that day";

impl<R> Invoked<R> {
    /// True if a transform was actually invoked
    pub fn is_provided(&self) -> bool {
        matches!(self, Invoked::Value(_))
    }

    /// Extract the transform's result, if one was invoked
    pub fn into_value(self) -> Option<R> {
        match self {
            Invoked::Value(v) => Some(v),
            Invoked::NotProvided => None,
        }
    }
}

impl<R: fmt::Display> fmt::Display for Invoked<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invoked::Value(v) => write!(f, "{}", v),
            Invoked::NotProvided => write!(f, "{}", NOT_PROVIDED_MESSAGE),
        }
    }
}

/// Invoke `transform` with `argument` if one is present
///
/// With `Some(transform)`, invokes it and returns [`Invoked::Value`]; with
/// `None`, returns [`Invoked::NotProvided`] without invoking anything. This
/// is the check-before-call pattern: absence of a callback is an expected
/// state here, not an error.
///
/// # Example
/// ```
/// use transform_kit::{maybe_invoke, Invoked};
///
/// let greet = |name: &str| format!("hello there {}!", name);
/// assert_eq!(
///     maybe_invoke(Some(greet), "Ben"),
///     Invoked::Value("hello there Ben!".to_string())
/// );
/// assert_eq!(maybe_invoke(None::<fn(&str) -> String>, "Ben"), Invoked::NotProvided);
/// ```
pub fn maybe_invoke<A, R, F>(transform: Option<F>, argument: A) -> Invoked<R>
where
    F: FnOnce(A) -> R,
{
    match transform {
        Some(f) => Invoked::Value(f(argument)),
        None => {
            log::debug!("maybe_invoke: no transform supplied, returning fallback");
            Invoked::NotProvided
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSACTIONS: [i64; 7] = [10, -15, 25, 30, -24, -70, 999];

    #[test]
    fn test_sequence_doubling() {
        let doubled = transform_sequence(&TRANSACTIONS, Some(|v: &i64| v * 2)).unwrap();
        assert_eq!(doubled, vec![20, -30, 50, 60, -48, -140, 1998]);
    }

    #[test]
    fn test_sequence_halving_truncates_toward_zero() {
        // Native i64 division truncates: -15 / 2 == -7, not -8
        let halved = transform_sequence(&TRANSACTIONS, Some(|v: &i64| v / 2)).unwrap();
        assert_eq!(halved, vec![5, -7, 12, 15, -12, -35, 499]);
    }

    #[test]
    fn test_sequence_preserves_length_and_order() {
        let input = vec![3, 1, 4, 1, 5];
        let output = transform_sequence(&input, Some(|v: &i64| v + 100)).unwrap();

        assert_eq!(output.len(), input.len());
        for (i, v) in input.iter().enumerate() {
            assert_eq!(output[i], v + 100);
        }
        // Original unchanged
        assert_eq!(input, vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn test_sequence_can_change_element_type() {
        let labels = transform_sequence(&[1, 2], Some(|v: &i64| format!("#{}", v))).unwrap();
        assert_eq!(labels, vec!["#1".to_string(), "#2".to_string()]);
    }

    #[test]
    fn test_sequence_without_transform_fails() {
        let err = transform_sequence(&TRANSACTIONS, None::<fn(&i64) -> i64>).unwrap_err();
        assert!(matches!(
            err,
            CallError::MissingTransform { operation: "transform_sequence" }
        ));
    }

    #[test]
    fn test_pairs_visited_in_insertion_order() {
        let pairs: PairList<&str, &str> =
            [("a", "hello"), ("b", "you"), ("c", "flower")].into_iter().collect();

        let mut lines = Vec::new();
        transform_pairs(
            &pairs,
            Some(|k: &&str, v: &&str| lines.push(format!("key {} has value {}!", k, v))),
        )
        .unwrap();

        assert_eq!(
            lines,
            vec![
                "key a has value hello!",
                "key b has value you!",
                "key c has value flower!",
            ]
        );
        // Pair list unchanged after iteration
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&"a"), Some(&"hello"));
    }

    #[test]
    fn test_pairs_without_transform_fails() {
        let pairs: PairList<&str, &str> = [("a", "hello")].into_iter().collect();
        let err = transform_pairs(&pairs, None::<fn(&&str, &&str)>).unwrap_err();
        assert!(matches!(
            err,
            CallError::MissingTransform { operation: "transform_pairs" }
        ));
    }

    #[test]
    fn test_maybe_invoke_with_transform() {
        let result = maybe_invoke(Some(|name: &str| format!("hi {}", name)), "Ben");
        assert_eq!(result, Invoked::Value("hi Ben".to_string()));
        assert!(result.is_provided());
    }

    #[test]
    fn test_maybe_invoke_without_transform_returns_fallback() {
        let result = maybe_invoke(None::<fn(&str) -> String>, "Ben");
        assert!(!result.is_provided());
        assert_eq!(result, Invoked::NotProvided);
        assert_eq!(result.to_string(), NOT_PROVIDED_MESSAGE);
        assert_eq!(result.into_value(), None);
    }

    #[test]
    fn test_maybe_invoke_argument_only_consumed_when_invoked() {
        // A by-value argument passed alongside an absent transform is simply
        // dropped; the transform body never runs.
        let audit = std::cell::Cell::new(0u32);
        let transform = |n: String| {
            audit.set(audit.get() + 1);
            n.len()
        };

        let skipped = maybe_invoke(
            None::<&dyn Fn(String) -> usize>,
            "Ben".to_string(),
        );
        assert_eq!(skipped, Invoked::NotProvided);
        assert_eq!(audit.get(), 0);

        let ran = maybe_invoke(Some(&transform as &dyn Fn(String) -> usize), "Ben".to_string());
        assert_eq!(ran, Invoked::Value(3));
        assert_eq!(audit.get(), 1);
    }
}
