pub mod paye;
pub mod uk;

// Flat public surface for domain types and functions.
pub use paye::{
    band_breakdown, calculate_monthly_tax, calculate_tax, BandLiability, TaxCalculation, TaxError,
};
#[allow(unused_imports)]
pub use uk::{ConfigError, TaxBand, TaxYearConfig};
