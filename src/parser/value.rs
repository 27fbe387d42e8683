//! Cell value parsing for record dumps

use serde::Deserialize;
use serde_json::Value;

use crate::error::{OvsError, Result};

/// Parse one cell of a record dump produced with `--data=json`.
///
/// Cells are plain JSON scalars except for three OVSDB composites, which are
/// wrapped in a two-element `[tag, payload]` array:
///
/// * `["uuid","79c26f92-86f9-485f-945d-5786c8147f53"]` becomes the UUID string,
/// * `["set",[100,200]]` becomes the payload array,
/// * `["map",[["stp-enable","true"]]]` becomes an object built from the pairs.
///
/// Malformed JSON is a parse error naming the offending cell; composites are
/// decoded all-or-nothing.
pub fn parse_cell(buf: &str) -> Result<Value> {
    if buf.starts_with("[\"uuid\",") {
        let (_, uuid): (String, String) = decode(buf)?;
        Ok(Value::String(uuid))
    } else if buf.starts_with("[\"set\",") {
        let (_, items): (String, Vec<Value>) = decode(buf)?;
        Ok(Value::Array(items))
    } else if buf.starts_with("[\"map\",") {
        let (_, pairs): (String, Vec<(Value, Value)>) = decode(buf)?;
        let mut map = serde_json::Map::new();
        for (key, value) in pairs {
            // Duplicate keys: last occurrence wins.
            map.insert(key_text(&key), value);
        }
        Ok(Value::Object(map))
    } else {
        // Plain scalar, e.g. "br1", 100, true, null.
        decode(buf)
    }
}

fn decode<'a, T: Deserialize<'a>>(buf: &'a str) -> Result<T> {
    serde_json::from_str(buf)
        .map_err(|e| OvsError::Parse(format!("malformed cell value {:?}: {}", buf, e)))
}

/// Map keys are atoms; anything that is not already a string is kept in its
/// JSON text form.
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
