//! Command-line interface.

macro_rules! unwrap_command {
    ($global:expr, $type:path) => {
        if let $type(local) = $global.cmd {
            local
        } else {
            unreachable!("invalid command {:?}", $global.cmd)
        }
    };
}

mod compare;
mod count;
mod find;

use clap::{Parser, Subcommand};

/// Run the CLI.
pub fn run() -> Result<(), anyhow::Error> {
    let opts = GlobalOpts::parse();
    crate::init_logging(opts.verbose);

    match &opts.cmd {
        SubCommand::Count(_) => count::run(opts)?,
        SubCommand::Find(_) => find::run(opts)?,
        SubCommand::Compare(_) => compare::run(opts)?,
    }

    Ok(())
}

/// Inspect text through fixed-capacity strings.
#[derive(Debug, Parser)]
#[command(name = "fixstr", version)]
struct GlobalOpts {
    #[command(subcommand)]
    cmd: SubCommand,

    /// Use verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    Count(count::Opts),
    Find(find::Opts),
    Compare(compare::Opts),
}
