//! Demonstration runners
//!
//! Each demo exercises one library operation against fixed input data and
//! prints human-readable lines. The library stays pure; every `println!` in
//! the application lives here or in main.

use anyhow::{Context, Result};
use clap::ValueEnum;
use transform_kit::{
    maybe_invoke, transform_pairs, transform_sequence, BoundCallable, Callable, LenientCallable,
    PairList, Param, StrictCallable, Value,
};

/// The demonstration transactions sequence
const TRANSACTIONS: [i64; 7] = [10, -15, 25, 30, -24, -70, 999];

/// Available demonstrations, in default run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Conditional invocation with and without a callback
    Greeting,
    /// Sequence transformation with interchangeable transforms
    Statement,
    /// Key/value iteration with a two-argument callback
    Pairs,
    /// Strict and lenient arity policies with defaults
    Callables,
    /// Named bindings passed by reference and invoked later
    Bindings,
}

/// All demos in default run order
pub const ALL_DEMOS: [Demo; 5] = [
    Demo::Greeting,
    Demo::Statement,
    Demo::Pairs,
    Demo::Callables,
    Demo::Bindings,
];

impl Demo {
    /// Short name used in section headers
    pub fn label(self) -> &'static str {
        match self {
            Demo::Greeting => "greeting",
            Demo::Statement => "statement",
            Demo::Pairs => "pairs",
            Demo::Callables => "callables",
            Demo::Bindings => "bindings",
        }
    }
}

/// Run a single demo, printing its output lines
pub fn run(demo: Demo, json: bool) -> Result<()> {
    log::debug!("running demo: {}", demo.label());
    println!("--- {} ---", demo.label());
    match demo {
        Demo::Greeting => greeting(),
        Demo::Statement => statement(json),
        Demo::Pairs => pairs(),
        Demo::Callables => callables(),
        Demo::Bindings => bindings(),
    }
}

/// Check-before-call: the greeting only happens if a callback is present
fn greeting() -> Result<()> {
    let greeted = maybe_invoke(Some(|name: &str| format!("hello there {}!", name)), "Ben");
    println!("{}", greeted);

    let skipped = maybe_invoke(None::<fn(&str) -> String>, "Ben");
    println!("{}", skipped);
    Ok(())
}

/// One sequence, two transforms: doubling and truncating halving
///
/// Halving uses native signed division, which truncates toward zero
/// (`-15 / 2 == -7`).
fn statement(json: bool) -> Result<()> {
    let doubled = transform_sequence(&TRANSACTIONS, Some(|v: &i64| v * 2))
        .context("statement: doubling pass")?;
    println!("{}", sequence_line(&doubled));

    let halved = transform_sequence(&TRANSACTIONS, Some(|v: &i64| v / 2))
        .context("statement: halving pass")?;
    println!("{}", sequence_line(&halved));

    if json {
        println!("{}", serde_json::to_string(&doubled)?);
        println!("{}", serde_json::to_string(&halved)?);
    }
    Ok(())
}

/// Iterate a mapping in insertion order with a two-argument callback
fn pairs() -> Result<()> {
    let mapping: PairList<&str, &str> = [("a", "hello"), ("b", "you"), ("c", "flower")]
        .into_iter()
        .collect();

    transform_pairs(
        &mapping,
        Some(|k: &&str, v: &&str| println!("key {} has value {}!", k, v)),
    )
    .context("pairs: iteration")?;
    Ok(())
}

/// Lenient vs. strict arity, defaults, and a surfaced arity failure
fn callables() -> Result<()> {
    let announce = LenientCallable::new(
        "announce",
        vec![Param::required("a")],
        |args: &[Value]| Value::Text(format!("the argument is {}.", args[0])),
    );
    println!("{}", announce.call(&[Value::from("squelch")])?);
    // Missing argument: lenient substitution interpolates as nothing
    println!("{}", announce.call(&[])?);

    let favorite = StrictCallable::new(
        "favorite_show",
        vec![Param::with_default("name", "Taboo")],
        |args: &[Value]| Value::Text(format!("Lambda says I like the show {}", args[0])),
    );
    println!("{}", favorite.call(&[Value::from("Stranger Things")])?);
    println!("{}", favorite.call(&[])?);

    // Strict arity rejects surplus arguments; show the diagnostic instead of failing
    match favorite.call(&[Value::from("a"), Value::from("b")]) {
        Ok(value) => println!("{}", value),
        Err(e) => println!("rejected: {}", e),
    }
    Ok(())
}

/// Bind callables to names and pass them by reference to a helper
fn bindings() -> Result<()> {
    fn run_both(first: &dyn Callable, second: &dyn Callable) -> transform_kit::Result<()> {
        println!("{}", first.call(&[])?);
        println!("{}", second.call(&[Value::from("Top Boy")])?);
        Ok(())
    }

    let proc_two = BoundCallable::bind(
        "proc_two",
        LenientCallable::new(
            "anonymous",
            vec![Param::with_default("name", "Taboo")],
            |args: &[Value]| Value::Text(format!("Proc says I like the show {}", args[0])),
        ),
    );
    let say_something = BoundCallable::bind(
        "say_something",
        LenientCallable::new("anonymous", vec![], |_args: &[Value]| {
            Value::Text("is this enough?".to_string())
        }),
    );

    println!("{}", say_something.call(&[])?);
    run_both(&proc_two, &say_something).context("bindings: run_both")?;
    Ok(())
}

/// Render a transformed sequence as a single console line
fn sequence_line(sequence: &[i64]) -> String {
    let items: Vec<String> = sequence.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
