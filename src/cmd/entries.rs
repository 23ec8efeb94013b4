//! Entries command - timesheet listing with optional month filter

use crate::cmd::format_gbp;
use crate::timesheet::{Timesheet, WorkEntry};
use chrono::{Datelike, NaiveDate};
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct EntriesCommand {
    /// Timesheet CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Only show entries for one calendar month (YYYY-MM)
    #[arg(short, long)]
    month: Option<String>,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl EntriesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let timesheet = Timesheet::read_csv(BufReader::new(File::open(&self.file)?))?;

        let filter = self.month.as_deref().map(parse_month).transpose()?;
        let entries: Vec<&WorkEntry> = timesheet
            .entries()
            .iter()
            .filter(|e| {
                filter.is_none_or(|(year, month)| e.date.year() == year && e.date.month() == month)
            })
            .collect();

        if self.csv {
            let filtered = Timesheet::new(entries.into_iter().cloned().collect());
            return filtered.write_csv(io::stdout());
        }

        if entries.is_empty() {
            println!("No entries found");
            return Ok(());
        }

        let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::from(*e)).collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{table}");

        let filtered = Timesheet::new(entries.into_iter().cloned().collect());
        println!(
            "Entries: {} | Hours: {} | Earnings: {}",
            filtered.entries().len(),
            filtered.total_hours(),
            format_gbp(filtered.total_earnings())
        );
        Ok(())
    }
}

fn parse_month(s: &str) -> anyhow::Result<(i32, u32)> {
    let date: NaiveDate = format!("{s}-01")
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid month '{s}', expected YYYY-MM"))?;
    Ok((date.year(), date.month()))
}

/// Row for the entries table output
#[derive(Debug, Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,

    #[tabled(rename = "Day")]
    day: String,

    #[tabled(rename = "Shift")]
    shift: String,

    #[tabled(rename = "Hours")]
    hours: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Value")]
    value: String,
}

impl From<&WorkEntry> for EntryRow {
    fn from(entry: &WorkEntry) -> Self {
        EntryRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            day: entry.day.clone(),
            shift: entry.shift.clone(),
            hours: entry.hours.to_string(),
            rate: format_gbp(entry.rate),
            value: format_gbp(entry.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_month_accepts_year_month() {
        assert_eq!(parse_month("2024-06").unwrap(), (2024, 6));
    }

    #[test]
    fn parse_month_rejects_garbage() {
        assert!(parse_month("June").is_err());
        assert!(parse_month("2024-13").is_err());
    }
}
