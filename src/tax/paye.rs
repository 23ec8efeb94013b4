//! PAYE deductions engine: income tax and National Insurance.
//!
//! Pure functions from a gross income figure to a full deduction breakdown.
//! All arithmetic is `Decimal`; identical inputs always produce identical
//! outputs.

use crate::tax::uk::TaxYearConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("invalid gross income {0}: must be non-negative")]
    InvalidInput(Decimal),
}

/// Full deduction breakdown for a single gross income figure.
///
/// `total_deductions = income_tax + national_insurance`,
/// `net_income = gross_income - total_deductions`, and `effective_rate` is
/// total deductions as a percentage of gross income (0 for zero income).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxCalculation {
    pub gross_income: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub national_insurance: Decimal,
    pub total_deductions: Decimal,
    pub net_income: Decimal,
    pub effective_rate: Decimal,
}

/// Income tax accrued within a single band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandLiability {
    pub band: &'static str,
    pub rate: Decimal,
    pub amount: Decimal,
    pub tax: Decimal,
}

/// Calculate deductions for an annual gross income figure.
pub fn calculate_tax(
    config: &TaxYearConfig,
    gross_income: Decimal,
) -> Result<TaxCalculation, TaxError> {
    let taxable_income = (gross_income - tapered_allowance(config, gross_income))
        .max(Decimal::ZERO);

    let income_tax: Decimal = band_breakdown(config, gross_income)?
        .iter()
        .map(|b| b.tax)
        .sum();
    let national_insurance = national_insurance(config, gross_income);

    let total_deductions = income_tax + national_insurance;
    let net_income = gross_income - total_deductions;
    let effective_rate = if gross_income > Decimal::ZERO {
        dec!(100) * total_deductions / gross_income
    } else {
        Decimal::ZERO
    };

    Ok(TaxCalculation {
        gross_income,
        taxable_income,
        income_tax,
        national_insurance,
        total_deductions,
        net_income,
        effective_rate,
    })
}

/// Calculate deductions for a monthly gross income figure.
///
/// Annualizes the figure, delegates to [`calculate_tax`] and scales the
/// monetary fields back down. The effective rate is carried over from the
/// annual calculation rather than recomputed, so both views always agree on
/// the percentage.
pub fn calculate_monthly_tax(
    config: &TaxYearConfig,
    monthly_gross: Decimal,
) -> Result<TaxCalculation, TaxError> {
    let annual = calculate_tax(config, monthly_gross * dec!(12))?;
    let months = dec!(12);

    Ok(TaxCalculation {
        gross_income: monthly_gross,
        taxable_income: annual.taxable_income / months,
        income_tax: annual.income_tax / months,
        national_insurance: annual.national_insurance / months,
        total_deductions: annual.total_deductions / months,
        net_income: annual.net_income / months,
        effective_rate: annual.effective_rate,
    })
}

/// Per-band income tax breakdown for an annual gross income figure.
///
/// The sum of the band liabilities equals `income_tax` from
/// [`calculate_tax`]; band boundaries sit on gross income, with the basic
/// band opening at the configured personal allowance. Income exactly on a
/// boundary pays the lower rate only.
pub fn band_breakdown(
    config: &TaxYearConfig,
    gross_income: Decimal,
) -> Result<Vec<BandLiability>, TaxError> {
    if gross_income < Decimal::ZERO {
        return Err(TaxError::InvalidInput(gross_income));
    }

    let mut breakdown = Vec::with_capacity(config.bands.len());
    let mut lower = config.personal_allowance;
    for band in &config.bands {
        let upper = band.upper.unwrap_or(gross_income);
        let amount = (gross_income.min(upper) - lower).max(Decimal::ZERO);
        breakdown.push(BandLiability {
            band: band.name,
            rate: band.rate,
            amount,
            tax: amount * band.rate,
        });
        if let Some(upper) = band.upper {
            lower = upper;
        }
    }
    Ok(breakdown)
}

/// Personal allowance after tapering.
///
/// Above the taper threshold the allowance shrinks by `taper_rate` per £1
/// of income, floored to whole pounds on the reduction, never below zero.
fn tapered_allowance(config: &TaxYearConfig, gross_income: Decimal) -> Decimal {
    if gross_income <= config.taper_threshold {
        return config.personal_allowance;
    }
    let reduction = ((gross_income - config.taper_threshold) * config.taper_rate).floor();
    let allowance = (config.personal_allowance - reduction).max(Decimal::ZERO);
    log::debug!(
        "allowance tapered: gross={gross_income} reduction={reduction} allowance={allowance}"
    );
    allowance
}

/// National Insurance is charged on gross income directly, not on
/// allowance-reduced taxable income.
fn national_insurance(config: &TaxYearConfig, gross_income: Decimal) -> Decimal {
    if gross_income <= config.ni_threshold {
        Decimal::ZERO
    } else if gross_income <= config.ni_upper_threshold {
        (gross_income - config.ni_threshold) * config.ni_lower_rate
    } else {
        (config.ni_upper_threshold - config.ni_threshold) * config.ni_lower_rate
            + (gross_income - config.ni_upper_threshold) * config.ni_upper_rate
    }
}
