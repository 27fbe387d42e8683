//! JSON output formatting

use serde_json::{json, Value};

use crate::runner::CommandOutput;

pub fn format_json(output: &CommandOutput) -> String {
    let data: Value = match output {
        CommandOutput::Raw(text) => json!({ "raw": text }),
        CommandOutput::Lines(lines) => json!(lines),
        CommandOutput::Show(summary) => json!(summary),
        CommandOutput::Records(records) => serde_json::to_value(records).unwrap_or(json!(null)),
        CommandOutput::Value(value) => value.clone(),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
