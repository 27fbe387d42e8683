//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ovs-query")]
#[command(author, version, about = "Inspect Open vSwitch configuration through ovs-vsctl", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// OVSDB connection protocol (tcp, ssl or unix)
    #[arg(long, global = true, env = "OVS_DB_PROTOCOL", default_value = "tcp")]
    pub db_protocol: String,

    /// Switch address (IP address, or socket path for unix)
    #[arg(long, global = true, env = "OVS_DB_ADDR", default_value = "127.0.0.1")]
    pub db_addr: String,

    /// OVSDB port (tcp and ssl only)
    #[arg(long, global = true, env = "OVS_DB_PORT", default_value_t = 6640)]
    pub db_port: u16,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Show the switch configuration overview
    Show,

    /// List all records of a table, or a single record
    List {
        /// OVSDB table name (e.g. Bridge, Port, Interface)
        table: String,

        /// Record name or UUID
        record: Option<String>,
    },

    /// Find records matching column=value conditions
    Find {
        /// OVSDB table name
        table: String,

        /// Conditions in the form column=value
        conditions: Vec<String>,
    },

    /// Get a single column value from a record
    Get {
        /// OVSDB table name
        table: String,

        /// Record name or UUID
        record: String,

        /// Column to read
        column: String,
    },

    /// List bridge names
    ListBr,

    /// List ports attached to a bridge
    ListPorts {
        /// Bridge name
        bridge: String,
    },

    /// List interfaces attached to a bridge
    ListIfaces {
        /// Bridge name
        bridge: String,
    },

    /// Run an arbitrary ovs-vsctl command and print its raw output
    Exec {
        /// Arguments passed through to ovs-vsctl
        #[arg(required = true)]
        args: Vec<String>,

        /// Table format passed as --format
        #[arg(long, default_value = "list")]
        format: String,

        /// Cell data format passed as --data
        #[arg(long, default_value = "string")]
        data: String,
    },
}
