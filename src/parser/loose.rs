//! Loose single-value parsing for `get` output

use serde_json::Value;
use uuid::Uuid;

use crate::error::{OvsError, Result};

/// Parse the output of `ovs-vsctl get`, a single column of a single row.
///
/// The output is mostly JSON, but sets and maps are rendered with bare
/// (unquoted) tokens, e.g. `[abc123, def456]` or `{stp-enable="true"}`.
/// Attempts are made in order, first success wins:
///
/// 1. the whole text as plain JSON,
/// 2. a canonical 36-character UUID, returned unchanged as a string,
/// 3. a `[` list of bare tokens, quoted and re-parsed as a string array,
/// 4. a `{` map of `key=value` pairs, quoted and re-parsed as an object,
/// 5. the text itself as a plain string.
///
/// Steps 3 and 4 are best-effort textual rewrites, not a grammar: a bare
/// token containing `", "`, `"`, or `=` breaks the rewrite and surfaces as a
/// parse error.
pub fn parse_loose(buf: &str) -> Result<Value> {
    let buf = buf.trim_matches('\n');

    if let Ok(value) = serde_json::from_str(buf) {
        return Ok(value);
    }

    if is_canonical_uuid(buf) {
        return Ok(Value::String(buf.to_string()));
    }

    if buf.starts_with('[') {
        // e.g.)
        //   [<UUID>, <UUID>]
        let quoted = buf
            .replace('[', "[\"")
            .replace(", ", "\", \"")
            .replace(']', "\"]");
        return reparse(&quoted, buf);
    }

    if buf.starts_with('{') {
        // e.g.)
        //   {stp-enable="true", stp-priority="100"}
        let quoted = buf
            .replace('{', "{\"")
            .replace('=', "\": ")
            .replace(", ", ", \"");
        return reparse(&quoted, buf);
    }

    Ok(Value::String(buf.to_string()))
}

fn reparse(quoted: &str, original: &str) -> Result<Value> {
    serde_json::from_str(quoted)
        .map_err(|e| OvsError::Parse(format!("unparseable value {:?}: {}", original, e)))
}

/// True for the canonical 8-4-4-4-12 hexadecimal form only; the shorter
/// hyphen-less renderings `ovs-vsctl` never emits are rejected by the length
/// check.
fn is_canonical_uuid(buf: &str) -> bool {
    buf.len() == 36 && Uuid::try_parse(buf).is_ok()
}
