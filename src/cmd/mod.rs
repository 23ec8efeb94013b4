pub mod add;
pub mod entries;
pub mod summary;
pub mod tax;

use crate::tax::TaxCalculation;
use rust_decimal::Decimal;

pub(crate) fn format_gbp(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}

/// Shared deduction breakdown block used by the `tax` and `summary` commands.
pub(crate) fn print_deductions(calc: &TaxCalculation) {
    println!("  Gross Income:       {}", format_gbp(calc.gross_income));
    println!("  Taxable Income:     {}", format_gbp(calc.taxable_income));
    println!("  Income Tax:         {}", format_gbp(calc.income_tax));
    println!("  National Insurance: {}", format_gbp(calc.national_insurance));
    println!("  Total Deductions:   {}", format_gbp(calc.total_deductions));
    println!("  Net Income:         {}", format_gbp(calc.net_income));
    println!("  Effective Rate:     {:.2}%", calc.effective_rate);
}
