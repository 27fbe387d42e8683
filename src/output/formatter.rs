//! Output formatting

use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::runner::CommandOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_output(output: &CommandOutput, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(output),
        OutputFormat::Json => format_json(output),
    }
}
