//! Callable objects with explicit arity policies
//!
//! Closures are already first-class values in Rust, so "convert a block to a
//! storable value" needs no special operator - what this module adds is the
//! arity policy layered on top. A [`Callable`] receives its arguments as a
//! `&[Value]` slice and resolves them against declared parameters before the
//! body runs:
//!
//! - [`StrictCallable`] fails with [`CallError::ArityMismatch`] on any count
//!   mismatch a declared default cannot cover.
//! - [`LenientCallable`] substitutes [`Value::Absent`] for missing arguments
//!   and ignores surplus ones.
//! - [`BoundCallable`] attaches a lenient callable to a named binding so it
//!   can be passed around as `&dyn Callable` and invoked later.
//!
//! Either way the body always sees exactly `arity()` resolved values.

use crate::types::{CallError, Result, Value};

/// A declared parameter: a name plus an optional default value
#[derive(Debug, Clone)]
pub struct Param {
    /// Parameter name, used in diagnostics
    pub name: String,
    /// Value substituted when the caller omits this argument
    pub default: Option<Value>,
}

impl Param {
    /// Declare a parameter with no default
    pub fn required(name: impl Into<String>) -> Self {
        Self { name: name.into(), default: None }
    }

    /// Declare a parameter with a default value
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

/// A value that can be invoked with arguments through one uniform operation
///
/// The trait is object-safe on purpose: callables are passed to higher-order
/// functions as `&dyn Callable` and invoked later.
pub trait Callable {
    /// Name of this callable, used in diagnostics
    fn name(&self) -> &str;

    /// Declared parameter count
    fn arity(&self) -> usize;

    /// Invoke with the given arguments
    fn call(&self, args: &[Value]) -> Result<Value>;
}

type Body = Box<dyn Fn(&[Value]) -> Value>;

/// Strict-arity callable
///
/// Invocation fails unless every declared parameter is covered by a supplied
/// argument or a declared default, and no surplus arguments are present.
pub struct StrictCallable {
    name: String,
    params: Vec<Param>,
    body: Body,
}

impl StrictCallable {
    /// Create a strict callable from declared parameters and a body
    ///
    /// The body receives exactly `params.len()` resolved values.
    pub fn new(
        name: impl Into<String>,
        params: Vec<Param>,
        body: impl Fn(&[Value]) -> Value + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            body: Box::new(body),
        }
    }
}

impl Callable for StrictCallable {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.params.len()
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        if args.len() > self.params.len() {
            return Err(CallError::ArityMismatch {
                name: self.name.clone(),
                expected: self.params.len(),
                supplied: args.len(),
            });
        }

        let mut resolved = Vec::with_capacity(self.params.len());
        for (i, param) in self.params.iter().enumerate() {
            match args.get(i).cloned().or_else(|| param.default.clone()) {
                Some(value) => resolved.push(value),
                None => {
                    return Err(CallError::ArityMismatch {
                        name: self.name.clone(),
                        expected: self.params.len(),
                        supplied: args.len(),
                    });
                }
            }
        }

        log::trace!(
            "strict callable '{}' invoked with {} argument(s)",
            self.name,
            args.len()
        );
        Ok((self.body)(&resolved))
    }
}

/// Lenient-arity callable
///
/// Missing arguments take the declared default if any, else [`Value::Absent`];
/// surplus arguments are ignored. Invocation never fails on arity.
pub struct LenientCallable {
    name: String,
    params: Vec<Param>,
    body: Body,
}

impl LenientCallable {
    /// Create a lenient callable from declared parameters and a body
    pub fn new(
        name: impl Into<String>,
        params: Vec<Param>,
        body: impl Fn(&[Value]) -> Value + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            body: Box::new(body),
        }
    }
}

impl Callable for LenientCallable {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.params.len()
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        let resolved: Vec<Value> = self
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                args.get(i)
                    .cloned()
                    .or_else(|| param.default.clone())
                    .unwrap_or(Value::Absent)
            })
            .collect();

        log::trace!(
            "lenient callable '{}' invoked with {} argument(s), resolved {}",
            self.name,
            args.len(),
            resolved.len()
        );
        Ok((self.body)(&resolved))
    }
}

/// A lenient callable attached to a named binding
///
/// The binding name replaces the inner callable's name in diagnostics, so a
/// callable stored under one name and invoked through another reports the
/// binding it was reached through.
pub struct BoundCallable {
    binding: String,
    inner: LenientCallable,
}

impl BoundCallable {
    /// Attach a lenient callable to a named binding
    pub fn bind(binding: impl Into<String>, inner: LenientCallable) -> Self {
        Self {
            binding: binding.into(),
            inner,
        }
    }
}

impl Callable for BoundCallable {
    fn name(&self) -> &str {
        &self.binding
    }

    fn arity(&self) -> usize {
        self.inner.arity()
    }

    fn call(&self, args: &[Value]) -> Result<Value> {
        log::trace!("bound callable '{}' invoked", self.binding);
        self.inner.call(args)
    }
}
