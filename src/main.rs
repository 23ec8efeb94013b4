use clap::{Parser, Subcommand};

mod cmd;
mod tax;
mod timesheet;

use cmd::add::AddCommand;
use cmd::entries::EntriesCommand;
use cmd::summary::SummaryCommand;
use cmd::tax::TaxCommand;

/// Timesheet tracking and UK PAYE deductions
#[derive(Parser, Debug)]
#[command(name = "timewise", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate PAYE deductions for a gross income figure
    Tax(TaxCommand),
    /// Add a work entry to a timesheet CSV
    Add(AddCommand),
    /// List the entries in a timesheet CSV
    Entries(EntriesCommand),
    /// Aggregate a timesheet and show the deductions on its earnings
    Summary(SummaryCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Tax(cmd) => cmd.exec(),
        Command::Add(cmd) => cmd.exec(),
        Command::Entries(cmd) => cmd.exec(),
        Command::Summary(cmd) => cmd.exec(),
    }
}
