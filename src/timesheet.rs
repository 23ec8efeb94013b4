//! CSV-backed store of time-tracking records.
//!
//! Supplies the aggregate gross income figure consumed by the tax engine.
//! Owns no tax logic.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// A single shift worked: date, labels, hours and hourly rate.
///
/// `value` is always `hours * rate`; it is persisted for convenience but
/// derived at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub date: NaiveDate,
    pub day: String,
    pub shift: String,
    pub hours: Decimal,
    pub rate: Decimal,
    pub value: Decimal,
}

impl WorkEntry {
    pub fn new(date: NaiveDate, shift: impl Into<String>, hours: Decimal, rate: Decimal) -> Self {
        WorkEntry {
            date,
            day: date.format("%A").to_string(),
            shift: shift.into(),
            hours,
            rate,
            value: hours * rate,
        }
    }
}

/// Hours and earnings rolled up for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total_hours: Decimal,
    pub total_earnings: Decimal,
}

/// An ordered collection of work entries, sorted by work date.
#[derive(Debug, Clone, Default)]
pub struct Timesheet(Vec<WorkEntry>);

impl Timesheet {
    pub fn new(mut entries: Vec<WorkEntry>) -> Self {
        entries.sort_by(|e1, e2| e1.date.cmp(&e2.date));
        Timesheet(entries)
    }

    pub fn read_csv<R: Read>(reader: R) -> anyhow::Result<Timesheet> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();
        for record in rdr.deserialize() {
            let entry: WorkEntry = record?;
            entries.push(entry);
        }
        log::info!("Read {} timesheet records", entries.len());
        Ok(Timesheet::new(entries))
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for entry in &self.0 {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.0
    }

    pub fn add(&mut self, entry: WorkEntry) {
        self.0.push(entry);
        self.0.sort_by(|e1, e2| e1.date.cmp(&e2.date));
    }

    /// Sum of `hours * rate` across all entries; the gross income figure
    /// handed to the tax engine.
    pub fn total_earnings(&self) -> Decimal {
        self.0.iter().map(|e| e.value).sum()
    }

    pub fn total_hours(&self) -> Decimal {
        self.0.iter().map(|e| e.hours).sum()
    }

    /// Per-calendar-month rollup, in date order.
    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        let mut totals: Vec<MonthlyTotal> = Vec::new();
        for entry in &self.0 {
            let (year, month) = (entry.date.year(), entry.date.month());
            match totals.last_mut() {
                Some(last) if last.year == year && last.month == month => {
                    last.total_hours += entry.hours;
                    last.total_earnings += entry.value;
                }
                _ => totals.push(MonthlyTotal {
                    year,
                    month,
                    total_hours: entry.hours,
                    total_earnings: entry.value,
                }),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(d: &str, hours: Decimal, rate: Decimal) -> WorkEntry {
        WorkEntry::new(date(d), "Day", hours, rate)
    }

    #[test]
    fn value_and_day_label_are_derived() {
        let entry = WorkEntry::new(date("2024-06-03"), "Night", dec!(7.5), dec!(16));
        assert_eq!(entry.day, "Monday");
        assert_eq!(entry.value, dec!(120));
    }

    #[test]
    fn entries_sorted_by_date() {
        let sheet = Timesheet::new(vec![
            entry("2024-06-10", dec!(8), dec!(15)),
            entry("2024-06-03", dec!(8), dec!(15)),
        ]);
        assert_eq!(sheet.entries()[0].date, date("2024-06-03"));

        let mut sheet = sheet;
        sheet.add(entry("2024-06-01", dec!(4), dec!(15)));
        assert_eq!(sheet.entries()[0].date, date("2024-06-01"));
    }

    #[test]
    fn totals() {
        let sheet = Timesheet::new(vec![
            entry("2024-06-03", dec!(8), dec!(15)),
            entry("2024-06-04", dec!(7.5), dec!(16)),
        ]);
        assert_eq!(sheet.total_hours(), dec!(15.5));
        assert_eq!(sheet.total_earnings(), dec!(240));
    }

    #[test]
    fn monthly_totals_grouped_in_order() {
        let sheet = Timesheet::new(vec![
            entry("2024-07-01", dec!(8), dec!(15)),
            entry("2024-06-03", dec!(8), dec!(15)),
            entry("2024-06-04", dec!(4), dec!(15)),
        ]);
        let totals = sheet.monthly_totals();
        assert_eq!(totals.len(), 2);
        assert_eq!((totals[0].year, totals[0].month), (2024, 6));
        assert_eq!(totals[0].total_hours, dec!(12));
        assert_eq!(totals[0].total_earnings, dec!(180));
        assert_eq!((totals[1].year, totals[1].month), (2024, 7));
    }

    #[test]
    fn csv_round_trip() {
        let sheet = Timesheet::new(vec![
            entry("2024-06-03", dec!(8), dec!(15.50)),
            entry("2024-06-04", dec!(7.5), dec!(16)),
        ]);
        let mut buf = Vec::new();
        sheet.write_csv(&mut buf).unwrap();

        let read_back = Timesheet::read_csv(buf.as_slice()).unwrap();
        assert_eq!(read_back.entries(), sheet.entries());
    }

    #[test]
    fn read_csv_rejects_bad_numbers() {
        let csv = "date,day,shift,hours,rate,value\n2024-06-03,Monday,Day,eight,15,120\n";
        assert!(Timesheet::read_csv(csv.as_bytes()).is_err());
    }
}
