use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::AggregateReport,
    fmt::FormattedPercentage,
    quantity::Percent,
};

#[must_use]
pub fn build_fuel_type_table(report: &AggregateReport) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Fuel type", "Category", "Generation", "Share"]);
    for fuel_total in &report.per_type {
        let (category, color) = if fuel_total.is_renewable {
            ("renewable", Color::Green)
        } else {
            ("other", Color::Reset)
        };
        table.add_row(vec![
            Cell::new(&fuel_total.fuel_type).fg(color),
            Cell::new(category).add_attribute(Attribute::Dim),
            Cell::new(fuel_total.energy).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(Percent::of(fuel_total.energy, report.total)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(report.total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(FormattedPercentage(Percent::of(report.total, report.total)))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Renewable").fg(Color::Green),
        Cell::new(""),
        Cell::new(report.renewable).set_alignment(CellAlignment::Right),
        Cell::new(FormattedPercentage(report.renewable_percentage))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        core::{FuelTaxonomy, GenerationRecord, GenerationReportBuilder},
        quantity::Megawatts,
    };

    #[test]
    fn test_build_fuel_type_table() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0);
        let report = GenerationReportBuilder::new(&FuelTaxonomy::default()).aggregate(&[
            GenerationRecord::new(timestamp, "Coal".to_owned(), Megawatts(75.0)),
            GenerationRecord::new(timestamp, "Wind".to_owned(), Megawatts(25.0)),
        ]);
        let rendered = build_fuel_type_table(&report).to_string();
        assert!(rendered.contains("Wind"));
        assert!(rendered.contains("25 MWh"));
        assert!(rendered.contains("75.00%"));
        assert!(rendered.contains("100 MWh"));
    }
}
