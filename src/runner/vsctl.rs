//! Runner for ovs-vsctl commands

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

use crate::error::{OvsError, Result};
use crate::parser::{parse_lines, parse_loose, parse_records, parse_show, Record};
use crate::runner::locate::find_ovs_vsctl;

pub const DEFAULT_PROTOCOL: &str = "tcp";
pub const DEFAULT_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6640;

const SUPPORTED_PROTOCOLS: [&str; 3] = ["tcp", "ssl", "unix"];

/// Parser applied to the captured stdout of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Newline-delimited values (`list-br`, `list-ports`, ...)
    Lines,
    /// The `show` configuration overview
    Show,
    /// Record dumps from `list` and `find`
    Records,
    /// Single values from `get`
    Loose,
}

/// Result of one ovs-vsctl invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Raw(String),
    Lines(Vec<String>),
    Show(HashMap<String, String>),
    Records(Vec<Record>),
    Value(Value),
}

/// Runner for the ovs-vsctl command.
///
/// Connects to the OVSDB server named by a protocol (`tcp`, `ssl` or `unix`),
/// an address and a port, passed to every invocation as the `--db` option.
///
/// # Example
///
/// ```no_run
/// use ovs_query::VsCtl;
///
/// let vsctl = VsCtl::new("tcp", "127.0.0.1", 6640).unwrap();
/// let bridges = vsctl.run_lines("list-br").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct VsCtl {
    protocol: String,
    addr: String,
    port: u16,
    program: PathBuf,
}

impl VsCtl {
    /// Create a runner after validating the connection parameters.
    ///
    /// `protocol` must be one of `tcp`, `ssl` or `unix`; for `tcp` and `ssl`
    /// the address must be a valid IPv4 or IPv6 address. For `unix` the
    /// address is the socket path and the port is ignored.
    pub fn new(protocol: &str, addr: &str, port: u16) -> Result<VsCtl> {
        if !SUPPORTED_PROTOCOLS.contains(&protocol) {
            return Err(OvsError::UnsupportedProtocol(protocol.to_string()));
        }

        if protocol != "unix" && addr.parse::<IpAddr>().is_err() {
            return Err(OvsError::InvalidAddress(addr.to_string()));
        }

        Ok(VsCtl {
            protocol: protocol.to_string(),
            addr: addr.to_string(),
            port,
            program: find_ovs_vsctl(),
        })
    }

    /// Override the executable to invoke instead of the discovered one.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// OVSDB server address formatted like the `--db` option expects.
    ///
    /// IPv6 addresses are wrapped in square brackets:
    ///
    /// ```
    /// use ovs_query::VsCtl;
    ///
    /// let vsctl = VsCtl::new("tcp", "::1", 6640).unwrap();
    /// assert_eq!(vsctl.ovsdb_addr(), "tcp:[::1]:6640");
    /// ```
    pub fn ovsdb_addr(&self) -> String {
        if self.protocol == "unix" {
            format!("{}:{}", self.protocol, self.addr)
        } else if self.addr.contains(':') {
            format!("{}:[{}]:{}", self.protocol, self.addr, self.port)
        } else {
            format!("{}:{}:{}", self.protocol, self.addr, self.port)
        }
    }

    /// Execute an ovs-vsctl command and parse its output.
    ///
    /// `command` is the same as for ovs-vsctl itself, minus the program name,
    /// e.g. `"list Port s1"`. It is split on whitespace; arguments that need
    /// embedded whitespace are not supported through this interface.
    ///
    /// When `mode` is given, the command runs with `--format=list
    /// --data=json` and the captured stdout is fed to the matching parser.
    /// Without a mode, stdout is returned unparsed.
    ///
    /// A non-zero exit status surfaces the captured stderr as
    /// [`OvsError::CommandFailed`]; stdout is then never parsed.
    pub fn run(&self, command: &str, mode: Option<ParseMode>) -> Result<CommandOutput> {
        match mode {
            None => Ok(CommandOutput::Raw(self.invoke(command, "list", "string")?)),
            Some(mode) => {
                let raw = self.invoke(command, "list", "json")?;
                Ok(match mode {
                    ParseMode::Lines => CommandOutput::Lines(parse_lines(&raw)),
                    ParseMode::Show => CommandOutput::Show(parse_show(&raw)?),
                    ParseMode::Records => CommandOutput::Records(parse_records(&raw)?),
                    ParseMode::Loose => CommandOutput::Value(parse_loose(&raw)?),
                })
            }
        }
    }

    /// Raw output of a command run with explicit `--format` and `--data`
    /// values.
    pub fn run_raw(&self, command: &str, table_format: &str, data_format: &str) -> Result<String> {
        self.invoke(command, table_format, data_format)
    }

    /// Newline-delimited values, e.g. `run_lines("list-ports s1")`.
    pub fn run_lines(&self, command: &str) -> Result<Vec<String>> {
        Ok(parse_lines(&self.invoke(command, "list", "json")?))
    }

    /// The `show` summary, e.g. `run_show("show")`.
    pub fn run_show(&self, command: &str) -> Result<HashMap<String, String>> {
        parse_show(&self.invoke(command, "list", "json")?)
    }

    /// Table records, e.g. `run_records("list Port s1")`.
    pub fn run_records(&self, command: &str) -> Result<Vec<Record>> {
        parse_records(&self.invoke(command, "list", "json")?)
    }

    /// A single column value, e.g. `run_loose("get Port s1 tag")`.
    pub fn run_loose(&self, command: &str) -> Result<Value> {
        parse_loose(&self.invoke(command, "list", "json")?)
    }

    fn invoke(&self, command: &str, table_format: &str, data_format: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(format!("--db={}", self.ovsdb_addr()))
            .arg(format!("--format={}", table_format))
            .arg(format!("--data={}", data_format))
            .args(command.split_whitespace())
            .output()?;

        if !output.status.success() {
            return Err(OvsError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for VsCtl {
    fn default() -> Self {
        VsCtl {
            protocol: DEFAULT_PROTOCOL.to_string(),
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
            program: find_ovs_vsctl(),
        }
    }
}
