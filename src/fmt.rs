use std::fmt::{Debug, Display, Formatter};

use chrono::NaiveDateTime;

use crate::{
    core::{AggregateReport, Peak},
    quantity::Percent,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct FormattedTimestamp(pub Option<NaiveDateTime>);

impl Display for FormattedTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(timestamp) => write!(f, "{}", timestamp.format(TIMESTAMP_FORMAT)),
            None => write!(f, "unknown time"),
        }
    }
}

pub struct FormattedPeak(pub Option<Peak>);

impl Debug for FormattedPeak {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPeak {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(peak) => write!(f, "{} at {}", peak.power, FormattedTimestamp(peak.timestamp)),
            None => write!(f, "no data"),
        }
    }
}

pub struct FormattedPercentage(pub Option<Percent>);

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(percent) => Display::fmt(&percent, f),
            None => write!(f, "N/A (total generation is zero)"),
        }
    }
}

/// Render the report as plain text lines.
///
/// Summary first, then the per-fuel breakdown in report order, then the peaks.
#[must_use]
pub fn format_report(report: &AggregateReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.per_type.len() + 5);
    lines.push(format!("Total generation: {}", report.total));
    lines.push(format!("Renewable generation: {}", report.renewable));
    lines.push(format!(
        "Percentage renewable: {}",
        FormattedPercentage(report.renewable_percentage),
    ));
    lines.extend(report.per_type.iter().map(|fuel_total| {
        format!("  - {} generation: {}", fuel_total.fuel_type, fuel_total.energy)
    }));
    lines.extend(format_peaks(report));
    lines
}

/// Peak lines, shared by all report renderings.
#[must_use]
pub fn format_peaks(report: &AggregateReport) -> [String; 2] {
    [
        format!("Peak coal generation: {}", FormattedPeak(report.coal_peak)),
        format!("Peak renewable generation: {}", FormattedPeak(report.renewable_peak)),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        core::{FuelTaxonomy, GenerationRecord, GenerationReportBuilder},
        quantity::Megawatts,
    };

    fn record(hour: u32, fuel_type: &str, megawatts: f64) -> GenerationRecord {
        GenerationRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(hour, 0, 0),
            fuel_type.to_owned(),
            Megawatts(megawatts),
        )
    }

    fn report(records: &[GenerationRecord]) -> AggregateReport {
        GenerationReportBuilder::new(&FuelTaxonomy::default()).aggregate(records)
    }

    #[test]
    fn test_format_report() {
        let lines = format_report(&report(&[
            record(0, "Coal", 100.0),
            record(0, "Wind", 20.0),
            record(1, "Coal", 150.0),
            record(1, "Wind", 30.0),
        ]));
        assert_eq!(
            lines,
            [
                "Total generation: 300 MWh",
                "Renewable generation: 50 MWh",
                "Percentage renewable: 16.67%",
                "  - Wind generation: 50 MWh",
                "  - Coal generation: 250 MWh",
                "Peak coal generation: 150 MW at 2024-01-01 01:00",
                "Peak renewable generation: 30 MW at 2024-01-01 01:00",
            ],
        );
    }

    #[test]
    fn test_format_empty_report() {
        let lines = format_report(&report(&[]));
        assert_eq!(
            lines,
            [
                "Total generation: 0 MWh",
                "Renewable generation: 0 MWh",
                "Percentage renewable: N/A (total generation is zero)",
                "Peak coal generation: no data",
                "Peak renewable generation: no data",
            ],
        );
    }

    #[test]
    fn test_per_type_lines_order() {
        let lines = format_report(&report(&[
            record(0, "Solar", 1.0),
            record(0, "Nuclear", 2.0),
            record(0, "Gas", 3.0),
            record(0, "Hydro", 4.0),
        ]));
        assert_eq!(
            lines[3..7],
            [
                "  - Hydro generation: 4 MWh",
                "  - Solar generation: 1 MWh",
                "  - Gas generation: 3 MWh",
                "  - Nuclear generation: 2 MWh",
            ],
        );
    }

    #[test]
    fn test_per_type_lines_add_up_to_total() {
        let lines = format_report(&report(&[record(0, "Coal", 0.05), record(0, "Gas", 0.05)]));
        assert_eq!(lines[0], "Total generation: 0.1 MWh");
        assert_eq!(
            lines[3..5],
            ["  - Coal generation: 0.05 MWh", "  - Gas generation: 0.05 MWh"],
        );
    }

    #[test]
    fn test_unknown_peak_time() {
        let peak = Peak { timestamp: None, power: Megawatts(12.0) };
        assert_eq!(FormattedPeak(Some(peak)).to_string(), "12 MW at unknown time");
    }
}
