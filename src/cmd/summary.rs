//! Summary command - aggregated timesheet earnings and the deductions due

use crate::cmd::{format_gbp, print_deductions};
use crate::tax::{calculate_tax, TaxCalculation, TaxYearConfig};
use crate::timesheet::{MonthlyTotal, Timesheet};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// Timesheet CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    entry_count: usize,
    total_hours: String,
    total_earnings: String,
    months: Vec<MonthlyTotal>,
    deductions: TaxCalculation,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let timesheet = Timesheet::read_csv(BufReader::new(File::open(&self.file)?))?;

        let config = TaxYearConfig::uk_2024_25();
        config.validate()?;

        // The aggregate earnings figure is treated as an annual gross income.
        let gross = timesheet.total_earnings();
        let calc = calculate_tax(&config, gross)?;

        if self.json {
            let data = SummaryData {
                entry_count: timesheet.entries().len(),
                total_hours: timesheet.total_hours().to_string(),
                total_earnings: gross.to_string(),
                months: timesheet.monthly_totals(),
                deductions: calc,
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
            return Ok(());
        }

        println!();
        println!("TIMESHEET SUMMARY");
        println!();
        println!(
            "  Entries: {} | Hours: {} | Earnings: {}",
            timesheet.entries().len(),
            timesheet.total_hours(),
            format_gbp(gross)
        );
        println!();

        let months = timesheet.monthly_totals();
        if !months.is_empty() {
            let rows: Vec<MonthRow> = months.iter().map(MonthRow::from).collect();
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{table}");
            println!();
        }

        println!("DEDUCTIONS (2024/25)");
        println!();
        print_deductions(&calc);
        println!();
        println!("TAKE-HOME: {}", format_gbp(calc.net_income));
        println!();
        Ok(())
    }
}

/// Row for the monthly rollup table
#[derive(Debug, Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,

    #[tabled(rename = "Hours")]
    hours: String,

    #[tabled(rename = "Earnings")]
    earnings: String,
}

impl From<&MonthlyTotal> for MonthRow {
    fn from(total: &MonthlyTotal) -> Self {
        MonthRow {
            month: format!("{} {}", month_name(total.month), total.year),
            hours: total.total_hours.to_string(),
            earnings: format_gbp(total.total_earnings),
        }
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
