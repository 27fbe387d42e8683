//! Records parsed from `list` and `find` dumps

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{OvsError, Result};
use crate::parser::value::parse_cell;

/// One row of an OVSDB table, parsed from `--format=list --data=json` output.
///
/// The column set is open: a record exposes exactly the columns present in its
/// source block, whatever table it came from. Column order is not meaningful
/// and duplicate columns within one block overwrite earlier occurrences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    columns: HashMap<String, Value>,
}

impl Record {
    /// Parse one record block: lines of `<column> : <value>` with no blank
    /// line inside.
    ///
    /// Example:
    ///
    /// ```text
    /// name                : "br1"
    /// ```
    ///
    /// A line without a colon is a parse error.
    pub fn parse(buf: &str) -> Result<Record> {
        let mut columns = HashMap::new();

        for row in buf.split('\n') {
            // Skips empty.
            if row.is_empty() {
                continue;
            }

            let (column, value) = row.split_once(':').ok_or_else(|| {
                OvsError::Parse(format!("missing ':' separator in row {:?}", row))
            })?;
            columns.insert(column.trim().to_string(), parse_cell(value.trim())?);
        }

        Ok(Record { columns })
    }

    /// Value of a column, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// All column names, in no particular order.
    pub fn columns(&self) -> Vec<&str> {
        self.columns.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Consume the record and return the underlying column map.
    pub fn into_columns(self) -> HashMap<String, Value> {
        self.columns
    }
}

/// Parse the output of `ovs-vsctl list` or `ovs-vsctl find` run with
/// `--format=list --data=json`: record blocks separated by one blank line.
///
/// Returns one [`Record`] per non-empty block, in input order. Empty or
/// whitespace-only input yields an empty list.
pub fn parse_records(buf: &str) -> Result<Vec<Record>> {
    buf.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(Record::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_parse_single_row() {
        let record = Record::parse("name                : \"br1\"\n").unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&json!("br1")));
    }

    #[test]
    fn test_record_parse_typed_cells() {
        let buf = "name                : \"s1\"\n\
                   tag                 : 100\n\
                   trunks              : [\"set\",[100,200]]\n\
                   other_config        : [\"map\",[[\"stp-enable\",\"true\"]]]\n\
                   _uuid               : [\"uuid\",\"79c26f92-86f9-485f-945d-5786c8147f53\"]\n";
        let record = Record::parse(buf).unwrap();
        assert_eq!(record.get("name"), Some(&json!("s1")));
        assert_eq!(record.get("tag"), Some(&json!(100)));
        assert_eq!(record.get("trunks"), Some(&json!([100, 200])));
        assert_eq!(record.get("other_config"), Some(&json!({"stp-enable": "true"})));
        assert_eq!(
            record.get("_uuid"),
            Some(&json!("79c26f92-86f9-485f-945d-5786c8147f53"))
        );
    }

    #[test]
    fn test_record_parse_duplicate_column_last_wins() {
        let record = Record::parse("tag : 100\ntag : 200\n").unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("tag"), Some(&json!(200)));
    }

    #[test]
    fn test_record_parse_missing_colon() {
        assert!(Record::parse("no separator here\n").is_err());
    }

    #[test]
    fn test_record_columns() {
        let record = Record::parse("name : \"br1\"\ntag : 100\n").unwrap();
        let mut columns = record.columns();
        columns.sort_unstable();
        assert_eq!(columns, vec!["name", "tag"]);
    }

    #[test]
    fn test_parse_records_two_blocks() {
        let records = parse_records("name : \"br1\"\n\nname : \"br2\"\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&json!("br1")));
        assert_eq!(records[1].get("name"), Some(&json!("br2")));
    }

    #[test]
    fn test_parse_records_single_block_no_trailing_separator() {
        let records = parse_records("name : \"br1\"").unwrap();
        assert_eq!(records.len(), 1);
    }

    // Pins the empty-input behavior: no blocks means no records, not one
    // record with no columns.
    #[test]
    fn test_parse_records_empty_input() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("\n\n\n").unwrap().is_empty());
        assert!(parse_records("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_records_matches_per_block_parse() {
        let blocks = ["name : \"br1\"\ntag : 100", "name : \"br2\"", "tag : 300"];
        let joined = blocks.join("\n\n");
        let records = parse_records(&joined).unwrap();
        assert_eq!(records.len(), blocks.len());
        for (record, block) in records.iter().zip(&blocks) {
            assert_eq!(record, &Record::parse(block).unwrap());
        }
    }

    #[test]
    fn test_parse_records_bad_cell_aborts() {
        assert!(parse_records("name : \"br1\"\n\ntag : [bad json\n").is_err());
    }
}
