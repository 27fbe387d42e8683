//! ovs-query CLI - Inspect Open vSwitch configuration through ovs-vsctl

use clap::Parser;
use ovs_query::cli::{Args, SubCommand};
use ovs_query::{format_output, CommandOutput, OutputFormat, ParseMode, VsCtl};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> ovs_query::Result<()> {
    let vsctl = VsCtl::new(&args.db_protocol, &args.db_addr, args.db_port)?;
    let output_format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    if args.verbose {
        eprintln!("Database: {}", vsctl.ovsdb_addr());
    }

    let output = match args.command {
        SubCommand::Show => vsctl.run("show", Some(ParseMode::Show))?,

        SubCommand::List { table, record } => {
            let command = match record {
                Some(record) => format!("list {} {}", table, record),
                None => format!("list {}", table),
            };
            vsctl.run(&command, Some(ParseMode::Records))?
        }

        SubCommand::Find { table, conditions } => {
            let command = format!("find {} {}", table, conditions.join(" "));
            vsctl.run(command.trim_end(), Some(ParseMode::Records))?
        }

        SubCommand::Get {
            table,
            record,
            column,
        } => {
            let command = format!("get {} {} {}", table, record, column);
            vsctl.run(&command, Some(ParseMode::Loose))?
        }

        SubCommand::ListBr => vsctl.run("list-br", Some(ParseMode::Lines))?,

        SubCommand::ListPorts { bridge } => {
            vsctl.run(&format!("list-ports {}", bridge), Some(ParseMode::Lines))?
        }

        SubCommand::ListIfaces { bridge } => {
            vsctl.run(&format!("list-ifaces {}", bridge), Some(ParseMode::Lines))?
        }

        SubCommand::Exec {
            args: words,
            format,
            data,
        } => CommandOutput::Raw(vsctl.run_raw(&words.join(" "), &format, &data)?),
    };

    println!("{}", format_output(&output, &output_format));
    Ok(())
}
