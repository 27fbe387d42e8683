//! Human-readable output formatting

use serde_json::Value;

use crate::parser::Record;
use crate::runner::CommandOutput;

pub fn format_human(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Raw(text) => text.trim_end_matches('\n').to_string(),
        CommandOutput::Lines(lines) => lines.join("\n"),
        CommandOutput::Show(summary) => {
            let mut entries: Vec<_> = summary.iter().collect();
            entries.sort();
            entries
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join("\n")
        }
        CommandOutput::Records(records) => records
            .iter()
            .map(format_record)
            .collect::<Vec<_>>()
            .join("\n\n"),
        CommandOutput::Value(value) => format_value(value),
    }
}

fn format_record(record: &Record) -> String {
    let mut columns = record.columns();
    columns.sort_unstable();

    let width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    columns
        .iter()
        .map(|column| {
            let value = record.get(column).unwrap_or(&Value::Null);
            format!("{:<width$} : {}", column, format_value(value), width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strings are printed bare; everything else keeps its JSON text form.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
