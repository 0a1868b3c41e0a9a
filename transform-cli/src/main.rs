//! Transform Kit CLI Application
//!
//! Console demonstration driver for the transform-kit library. It runs a
//! fixed set of demos - conditional invocation, sequence transformation,
//! pair iteration, arity-checked callables, and named bindings - and prints
//! each result as a human-readable line.

use anyhow::Result;
use clap::Parser;

mod demos;

use demos::{Demo, ALL_DEMOS};

/// Transform Kit - demonstrate callback-driven transformation
#[derive(Parser, Debug)]
#[command(name = "transform-cli")]
#[command(about = "Run callback-driven transformation demos", long_about = None)]
#[command(version)]
struct Args {
    /// Demo(s) to run (can be repeated; default: all, in fixed order)
    #[arg(short, long, value_enum, value_name = "NAME")]
    demo: Vec<Demo>,

    /// Additionally print transformed sequences as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Transform Kit CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using transform-kit library v{}", transform_kit::VERSION);

    let selected: Vec<Demo> = if args.demo.is_empty() {
        ALL_DEMOS.to_vec()
    } else {
        args.demo.clone()
    };

    for demo in selected {
        demos::run(demo, args.json)?;
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
