//! Tax command - deduction breakdown for a single gross income figure

use crate::cmd::{format_gbp, print_deductions};
use crate::tax::{
    band_breakdown, calculate_monthly_tax, calculate_tax, BandLiability, TaxYearConfig,
};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Gross income in GBP
    #[arg(short, long)]
    gross: Decimal,

    /// Treat the amount as monthly pay rather than an annual salary
    #[arg(short, long)]
    monthly: bool,

    /// Show the per-band income tax breakdown
    #[arg(short, long)]
    bands: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TaxData {
    period: &'static str,
    calculation: crate::tax::TaxCalculation,
    #[serde(skip_serializing_if = "Option::is_none")]
    bands: Option<Vec<BandLiability>>,
}

impl TaxCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let config = TaxYearConfig::uk_2024_25();
        config.validate()?;

        let calc = if self.monthly {
            calculate_monthly_tax(&config, self.gross)?
        } else {
            calculate_tax(&config, self.gross)?
        };
        let period = if self.monthly { "monthly" } else { "annual" };

        // Band figures are always annual; the engine owns the arithmetic.
        let bands = if self.bands {
            let annual_gross = if self.monthly {
                self.gross * Decimal::from(12)
            } else {
                self.gross
            };
            Some(band_breakdown(&config, annual_gross)?)
        } else {
            None
        };

        if self.json {
            let data = TaxData {
                period,
                calculation: calc,
                bands,
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
            return Ok(());
        }

        println!();
        println!("PAYE BREAKDOWN (2024/25, {period})");
        println!();
        print_deductions(&calc);
        println!();

        if let Some(bands) = bands {
            let rows: Vec<BandRow> = bands.iter().map(BandRow::from).collect();
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{table}");
            println!();
        }

        Ok(())
    }
}

/// Row for the per-band table output
#[derive(Debug, Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    band: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Amount")]
    amount: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

impl From<&BandLiability> for BandRow {
    fn from(liability: &BandLiability) -> Self {
        BandRow {
            band: liability.band.to_string(),
            rate: format!("{:.0}%", liability.rate * Decimal::from(100)),
            amount: format_gbp(liability.amount),
            tax: format_gbp(liability.tax),
        }
    }
}
