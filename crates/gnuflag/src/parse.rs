//! The tokenizer/dispatcher.
//!
//! Walks the argument sequence left to right, classifies each token,
//! resolves spellings through the alias table and applies values to the
//! flag arena. Parsing is fail-fast: the first malformed token aborts
//! the walk, and values applied before it stay applied.

use tracing::trace;

use crate::Flag;
use crate::alias::AliasTable;
use crate::error::Error;

/// Walk the token sequence and return the positional arguments.
///
/// Two states only: scanning, and everything-is-positional after the
/// standalone `--` terminator (which also swallows the terminator
/// itself, once). Each token is fully resolved before the cursor
/// advances, so no other state survives between tokens.
pub(crate) fn run<I, S>(
    flags: &mut [Flag],
    aliases: &AliasTable,
    args: I,
) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut positional: Vec<String> = Vec::new();
    let mut terminated = false;

    while let Some(token) = args.next() {
        if terminated {
            positional.push(token);
            continue;
        }
        if token == "--" {
            trace!("end-of-options terminator");
            terminated = true;
            continue;
        }
        if token == "-" {
            positional.push(token);
            continue;
        }
        if let Some(body) = token.strip_prefix("--") {
            long_option(flags, aliases, body, &mut args)?;
            continue;
        }
        if let Some(cluster) = token.strip_prefix('-') {
            short_cluster(flags, aliases, cluster, &mut args)?;
            continue;
        }
        positional.push(token);
    }

    Ok(positional)
}

/// Handle `--name` and `--name=value`. An empty inline value (`--s=`)
/// is a real value, distinct from no `=` at all.
fn long_option(
    flags: &mut [Flag],
    aliases: &AliasTable,
    body: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), Error> {
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let spelling = format!("--{name}");
    let Some(index) = aliases.resolve_long(name) else {
        return Err(Error::UnknownFlag(spelling));
    };
    let flag = &mut flags[index];

    if !flag.value.takes_value() {
        // Boolean long options never take a value; any `=value` text
        // is ignored and presence alone sets them.
        flag.value.set_bool(true);
        trace!(flag = %flag.name, %spelling, "flag set");
        return Ok(());
    }

    let raw = match inline {
        Some(value) => value.to_string(),
        None => args
            .next()
            .ok_or_else(|| Error::MissingArgument(spelling.clone()))?,
    };
    apply(flag, &spelling, &raw)
}

/// Handle a bundled short-option token (everything after the single
/// leading dash). The first value-taking flag in the cluster consumes
/// the entire remainder verbatim, so `-sfooi1` stores `fooi1` and
/// `-s=foo` stores `=foo`; the remainder is never re-scanned.
fn short_cluster(
    flags: &mut [Flag],
    aliases: &AliasTable,
    cluster: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), Error> {
    for (pos, c) in cluster.char_indices() {
        let Some(index) = aliases.resolve_short(c) else {
            // Unrecognized runs are reported with the double-dash form,
            // starting at the first unresolved character.
            return Err(Error::UnknownFlag(format!("--{}", &cluster[pos..])));
        };
        let flag = &mut flags[index];
        let spelling = format!("-{c}");

        if !flag.value.takes_value() {
            flag.value.set_bool(true);
            trace!(flag = %flag.name, %spelling, "flag set");
            continue;
        }

        let rest = &cluster[pos + c.len_utf8()..];
        let raw = if rest.is_empty() {
            args.next()
                .ok_or_else(|| Error::MissingArgument(spelling.clone()))?
        } else {
            rest.to_string()
        };
        return apply(flag, &spelling, &raw);
    }
    Ok(())
}

fn apply(flag: &mut Flag, spelling: &str, raw: &str) -> Result<(), Error> {
    flag.value.set(raw).map_err(|reason| Error::InvalidValue {
        flag: spelling.to_string(),
        value: raw.to_string(),
        reason,
    })?;
    trace!(flag = %flag.name, %spelling, value = %raw, "flag value set");
    Ok(())
}
