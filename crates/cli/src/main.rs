//! Demonstration binary for the `gnuflag` library.
//!
//! Defines a small representative flag set, parses its own argument
//! vector and echoes the result back in canonical form: recognized
//! flags first, then positional arguments. Parse failures print the
//! error plus the usage text and exit with status 2.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use gnuflag::FlagSet;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();

    let mut flags = match build_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("gnuflag: {err}");
            return ExitCode::FAILURE;
        }
    };

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = flags.parse(argv) {
        eprintln!("gnuflag: {err}");
        eprint!("{}", flags.defaults());
        return ExitCode::from(2);
    }

    if flags.get_bool("help") == Some(true) {
        print!("Usage: gnuflag [OPTIONS] [ARGS...]\n\n{}", flags.defaults());
        return ExitCode::SUCCESS;
    }

    tracing::debug!(positionals = flags.args().len(), "parse complete");
    println!("{}", summarize(&flags));
    ExitCode::SUCCESS
}

fn build_flags() -> Result<FlagSet> {
    let mut flags = FlagSet::new("gnuflag");
    flags.bool("v", false, "verbose output")?;
    flags.alias("v", "verbose")?;
    flags.bool("q", false, "suppress normal output")?;
    flags.alias("q", "quiet")?;
    flags.string("o", "", "write output to FILE")?;
    flags.alias("o", "output")?;
    flags.int("n", 0, "number of repetitions")?;
    flags.alias("n", "count")?;
    flags.duration("timeout", Duration::ZERO, "give up after this long")?;
    flags.bool("h", false, "print this help text")?;
    flags.alias("h", "help")?;
    Ok(flags)
}

/// Canonical one-line rendering of the parse outcome. Flags at their
/// defaults are omitted.
fn summarize(flags: &FlagSet) -> String {
    let mut out: Vec<String> = Vec::new();
    if flags.get_bool("v") == Some(true) {
        out.push("-v".to_string());
    }
    if flags.get_bool("q") == Some(true) {
        out.push("-q".to_string());
    }
    if let Some(n) = flags.get_int("n") {
        if n != 0 {
            out.push(format!("-n {n}"));
        }
    }
    if let Some(o) = flags.get_str("o") {
        if !o.is_empty() {
            out.push(format!("-o {o}"));
        }
    }
    if let Some(t) = flags.get_duration("timeout") {
        if !t.is_zero() {
            out.push(format!("--timeout {}", humantime::format_duration(t)));
        }
    }
    out.extend(flags.args().iter().cloned());
    out.join(" ")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
