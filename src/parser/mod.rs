//! Parsers for ovs-vsctl command outputs

pub mod line;
pub mod loose;
pub mod record;
pub mod value;

pub use line::{parse_lines, parse_show, OVS_VERSION};
pub use loose::parse_loose;
pub use record::{parse_records, Record};
pub use value::parse_cell;
