//! ovs-query - Query Open vSwitch configuration through ovs-vsctl
//!
//! A thin client around the `ovs-vsctl` command: it builds the argument
//! vector, runs the external process against a chosen OVSDB server, and
//! parses the textual output of the four output dialects (value lists,
//! the `show` overview, record dumps, single `get` values) into typed
//! values.
//!
//! # Example
//!
//! ```no_run
//! use ovs_query::VsCtl;
//!
//! let vsctl = VsCtl::new("tcp", "127.0.0.1", 6640).unwrap();
//! let bridges = vsctl.run_lines("list-br").unwrap();
//! for record in vsctl.run_records("list Bridge").unwrap() {
//!     println!("{:?}", record.get("name"));
//! }
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod runner;

pub use error::{OvsError, Result};
pub use output::{format_output, OutputFormat};
pub use parser::{parse_cell, parse_lines, parse_loose, parse_records, parse_show, Record};
pub use runner::{find_ovs_vsctl, CommandOutput, ParseMode, VsCtl};
