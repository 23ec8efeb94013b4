use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single income tax band.
///
/// `upper` is the gross-income figure at which the band ends; `None` marks
/// the final, unbounded band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBand {
    pub name: &'static str,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

/// Immutable per-tax-year configuration: personal allowance, income tax
/// bands, allowance taper and National Insurance thresholds/rates.
///
/// Constructed once and shared read-only; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearConfig {
    pub personal_allowance: Decimal,
    pub bands: Vec<TaxBand>,
    /// Gross income above which the personal allowance starts to taper
    pub taper_threshold: Decimal,
    /// Allowance lost per £1 of income above the taper threshold
    pub taper_rate: Decimal,
    pub ni_threshold: Decimal,
    pub ni_upper_threshold: Decimal,
    pub ni_lower_rate: Decimal,
    pub ni_upper_rate: Decimal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be non-negative")]
    NegativeValue(&'static str),
    #[error("at least 3 income tax bands required, got {0}")]
    TooFewBands(usize),
    #[error("band upper bounds must be strictly increasing: {0}")]
    BandsNotAscending(&'static str),
    #[error("band rates must be strictly increasing: {0}")]
    RatesNotAscending(&'static str),
    #[error("only the last band may be unbounded: {0}")]
    UnboundedBandNotLast(&'static str),
    #[error("the last band must be unbounded: {0}")]
    LastBandBounded(&'static str),
    #[error("NI upper threshold must be >= NI threshold")]
    NiThresholdsInverted,
}

impl TaxYearConfig {
    /// 2024/25 tax year (Class 1 employee NI rates).
    pub fn uk_2024_25() -> Self {
        TaxYearConfig {
            personal_allowance: dec!(12570),
            bands: vec![
                TaxBand {
                    name: "basic",
                    upper: Some(dec!(50270)),
                    rate: dec!(0.20),
                },
                TaxBand {
                    name: "higher",
                    upper: Some(dec!(125140)),
                    rate: dec!(0.40),
                },
                TaxBand {
                    name: "additional",
                    upper: None,
                    rate: dec!(0.45),
                },
            ],
            // £1 of allowance lost per £2 of income above £100,000
            taper_threshold: dec!(100000),
            taper_rate: dec!(0.5),
            ni_threshold: dec!(12570),
            ni_upper_threshold: dec!(50270),
            ni_lower_rate: dec!(0.08),
            ni_upper_rate: dec!(0.02),
        }
    }

    /// Check the structural invariants of this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("personal allowance", self.personal_allowance),
            ("taper threshold", self.taper_threshold),
            ("taper rate", self.taper_rate),
            ("NI threshold", self.ni_threshold),
            ("NI upper threshold", self.ni_upper_threshold),
            ("NI lower rate", self.ni_lower_rate),
            ("NI upper rate", self.ni_upper_rate),
        ] {
            if value < Decimal::ZERO {
                return Err(ConfigError::NegativeValue(name));
            }
        }

        if self.bands.len() < 3 {
            return Err(ConfigError::TooFewBands(self.bands.len()));
        }

        let last = self.bands.len() - 1;
        for (i, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO {
                return Err(ConfigError::NegativeValue("band rate"));
            }
            match band.upper {
                None if i != last => {
                    return Err(ConfigError::UnboundedBandNotLast(band.name));
                }
                Some(_) if i == last => {
                    return Err(ConfigError::LastBandBounded(band.name));
                }
                _ => {}
            }
            if i > 0 {
                let prev = &self.bands[i - 1];
                if let (Some(upper), Some(prev_upper)) = (band.upper, prev.upper) {
                    if upper <= prev_upper {
                        return Err(ConfigError::BandsNotAscending(band.name));
                    }
                }
                if band.rate <= prev.rate {
                    return Err(ConfigError::RatesNotAscending(band.name));
                }
            }
        }

        if self.ni_upper_threshold < self.ni_threshold {
            return Err(ConfigError::NiThresholdsInverted);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_2024_25_is_valid() {
        assert_eq!(TaxYearConfig::uk_2024_25().validate(), Ok(()));
    }

    #[test]
    fn uk_2024_25_constants() {
        let config = TaxYearConfig::uk_2024_25();
        assert_eq!(config.personal_allowance, dec!(12570));
        assert_eq!(config.bands.len(), 3);
        assert_eq!(config.bands[0].upper, Some(dec!(50270)));
        assert_eq!(config.bands[1].upper, Some(dec!(125140)));
        assert_eq!(config.bands[2].upper, None);
        assert_eq!(config.ni_lower_rate, dec!(0.08));
        assert_eq!(config.ni_upper_rate, dec!(0.02));
    }

    #[test]
    fn rejects_negative_threshold() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.taper_threshold = dec!(-1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeValue("taper threshold"))
        );
    }

    #[test]
    fn rejects_too_few_bands() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.bands.truncate(2);
        assert_eq!(config.validate(), Err(ConfigError::TooFewBands(2)));
    }

    #[test]
    fn rejects_non_ascending_uppers() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.bands[1].upper = Some(dec!(50270));
        assert_eq!(
            config.validate(),
            Err(ConfigError::BandsNotAscending("higher"))
        );
    }

    #[test]
    fn rejects_non_ascending_rates() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.bands[2].rate = dec!(0.40);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RatesNotAscending("additional"))
        );
    }

    #[test]
    fn rejects_bounded_last_band() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.bands[2].upper = Some(dec!(200000));
        assert_eq!(
            config.validate(),
            Err(ConfigError::LastBandBounded("additional"))
        );
    }

    #[test]
    fn rejects_unbounded_middle_band() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.bands[1].upper = None;
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnboundedBandNotLast("higher"))
        );
    }

    #[test]
    fn rejects_inverted_ni_thresholds() {
        let mut config = TaxYearConfig::uk_2024_25();
        config.ni_upper_threshold = dec!(10000);
        assert_eq!(config.validate(), Err(ConfigError::NiThresholdsInverted));
    }
}
