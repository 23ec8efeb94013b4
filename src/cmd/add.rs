//! Add command - append a work entry to a timesheet CSV

use crate::cmd::format_gbp;
use crate::timesheet::{Timesheet, WorkEntry};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AddCommand {
    /// Timesheet CSV file (created if it does not exist)
    #[arg(short, long)]
    file: PathBuf,

    /// Work date (YYYY-MM-DD)
    #[arg(short, long)]
    date: NaiveDate,

    /// Shift label (e.g. "Morning", "Night")
    #[arg(short, long, default_value = "")]
    shift: String,

    /// Hours worked
    #[arg(long)]
    hours: Decimal,

    /// Hourly rate in GBP
    #[arg(short, long)]
    rate: Decimal,
}

impl AddCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.hours < Decimal::ZERO {
            anyhow::bail!("hours must be non-negative, got {}", self.hours);
        }
        if self.rate < Decimal::ZERO {
            anyhow::bail!("rate must be non-negative, got {}", self.rate);
        }

        let mut timesheet = if self.file.exists() {
            Timesheet::read_csv(BufReader::new(File::open(&self.file)?))?
        } else {
            Timesheet::default()
        };

        let entry = WorkEntry::new(self.date, self.shift.clone(), self.hours, self.rate);
        let value = entry.value;
        timesheet.add(entry);
        timesheet.write_csv(File::create(&self.file)?)?;

        log::info!("Wrote {} entries to {}", timesheet.entries().len(), self.file.display());
        println!(
            "Added {} ({}h @ {}): {}",
            self.date,
            self.hours,
            format_gbp(self.rate),
            format_gbp(value)
        );
        Ok(())
    }
}
