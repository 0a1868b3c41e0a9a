//! Transform Kit Library
//!
//! A small, reusable library for callback-driven value transformation:
//! apply a caller-supplied transform across an ordered sequence, iterate a
//! key/value mapping with a two-argument callback, conditionally invoke an
//! optional callback, and model explicit callable objects with strict or
//! lenient arity policies.
//!
//! # Architecture
//!
//! The library is intentionally minimal and focused on invocation mechanics:
//! - Transform operations borrow their input and never mutate it
//! - Callables resolve supplied arguments against declared parameters
//!   (defaults, absent-substitution) before the body runs
//! - All failures are [`CallError`] values, surfaced immediately
//!
//! The library does NOT:
//! - Print anything (callers decide what to do with results)
//! - Perform I/O of any kind
//! - Hold state between calls - every call is independent and reentrant
//!
//! All console demonstration lives in the application layer (transform-cli).
//!
//! # Example Usage
//!
//! ```
//! use transform_kit::{transform_sequence, Callable, LenientCallable, Param, Value};
//!
//! // Sequence transformation with an explicit callback
//! let doubled = transform_sequence(&[10, -15, 25], Some(|v: &i64| v * 2)).unwrap();
//! assert_eq!(doubled, vec![20, -30, 50]);
//!
//! // A lenient callable substitutes Absent for missing arguments
//! let announce = LenientCallable::new(
//!     "announce",
//!     vec![Param::required("a")],
//!     |args: &[Value]| Value::Text(format!("the argument is {}.", args[0])),
//! );
//! assert_eq!(
//!     announce.call(&[]).unwrap(),
//!     Value::Text("the argument is .".to_string()),
//! );
//! ```

// Public modules
pub mod callable;
pub mod transform;
pub mod types;

// Re-export main types for convenience
pub use callable::{BoundCallable, Callable, LenientCallable, Param, StrictCallable};
pub use transform::{
    maybe_invoke, transform_pairs, transform_sequence, Invoked, NOT_PROVIDED_MESSAGE,
};
pub use types::{CallError, PairList, Result, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: the uniform call path works end to end
        let id = LenientCallable::new("id", vec![Param::required("x")], |args: &[Value]| {
            args[0].clone()
        });
        assert_eq!(id.call(&[Value::Integer(1)]).unwrap(), Value::Integer(1));
    }
}
