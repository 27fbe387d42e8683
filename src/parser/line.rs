//! Line-oriented parsers for list-style and `show` output

use std::collections::HashMap;

use crate::error::{OvsError, Result};

/// Key under which [`parse_show`] reports the switch version.
pub const OVS_VERSION: &str = "ovs_version";

/// Parse newline-delimited output into a list of values (e.g. `list-br`,
/// `list-ports`). Empty lines are dropped, the rest are trimmed. Never fails;
/// empty input yields an empty list.
pub fn parse_lines(buf: &str) -> Vec<String> {
    buf.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// Parse the output of `ovs-vsctl show`.
///
/// Only the `ovs_version` field is extracted; the rest of the report (bridges,
/// ports, interfaces) is already available in structured form through the
/// `list` commands. Returns an empty map when no version line is present.
pub fn parse_show(buf: &str) -> Result<HashMap<String, String>> {
    let mut summary = HashMap::new();

    for line in parse_lines(buf) {
        if line.starts_with(OVS_VERSION) {
            // e.g.)
            //   ovs_version: "2.5.0"
            let version = line.split('"').nth(1).ok_or_else(|| {
                OvsError::Parse(format!("missing quoted version in {:?}", line))
            })?;
            summary.insert(OVS_VERSION.to_string(), version.to_string());
        }
    }

    Ok(summary)
}
