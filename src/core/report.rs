use std::collections::HashMap;

use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{peak::FirstMax, record::GenerationRecord, taxonomy::FuelTaxonomy},
    prelude::*,
    quantity::{MegawattHours, Megawatts, Percent},
};

/// Generation statistics over the whole input.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct AggregateReport {
    pub total: MegawattHours,

    pub renewable: MegawattHours,

    /// [`None`] when the total generation is zero.
    pub renewable_percentage: Option<Percent>,

    /// Renewable fuel types in taxonomy order, then the rest alphabetically.
    pub per_type: Vec<FuelTotal>,

    pub coal_peak: Option<Peak>,

    /// Peak of the renewable generation summed across the fuel types per timestamp.
    pub renewable_peak: Option<Peak>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FuelTotal {
    pub fuel_type: String,
    pub energy: MegawattHours,
    pub is_renewable: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Peak {
    pub timestamp: Option<NaiveDateTime>,
    pub power: Megawatts,
}

impl From<(Option<NaiveDateTime>, Megawatts)> for Peak {
    fn from((timestamp, power): (Option<NaiveDateTime>, Megawatts)) -> Self {
        Self { timestamp, power }
    }
}

pub struct GenerationReportBuilder<'a> {
    taxonomy: &'a FuelTaxonomy,
}

impl<'a> GenerationReportBuilder<'a> {
    pub const fn new(taxonomy: &'a FuelTaxonomy) -> Self {
        Self { taxonomy }
    }

    #[instrument(skip_all, fields(n_records = records.len()))]
    pub fn aggregate(&self, records: &[GenerationRecord]) -> AggregateReport {
        let total: MegawattHours =
            records.iter().map(|record| MegawattHours::from(record.megawatts)).sum();
        let per_type = self.per_type(records);
        let renewable = per_type
            .iter()
            .filter(|fuel_total| fuel_total.is_renewable)
            .map(|fuel_total| fuel_total.energy)
            .sum();
        let coal_peak = records
            .iter()
            .filter(|record| self.taxonomy.is_coal(&record.fuel_type))
            .map(|record| (record.timestamp, record.megawatts))
            .first_max()
            .map(Peak::from);
        let renewable_peak = self.renewable_hourly(records).first_max().map(Peak::from);
        let report = AggregateReport {
            total,
            renewable,
            renewable_percentage: Percent::of(renewable, total),
            per_type,
            coal_peak,
            renewable_peak,
        };
        debug!(
            total = %report.total,
            renewable = %report.renewable,
            n_fuel_types = report.per_type.len(),
            "aggregated",
        );
        report
    }

    /// Sum the generation per fuel type and order the totals for reporting.
    fn per_type(&self, records: &[GenerationRecord]) -> Vec<FuelTotal> {
        let mut per_fuel: HashMap<&str, MegawattHours> = records
            .iter()
            .map(|record| (record.fuel_type.as_str(), record.megawatts))
            .into_group_map()
            .into_iter()
            .map(|(fuel_type, readings)| {
                (fuel_type, readings.into_iter().map(MegawattHours::from).sum::<MegawattHours>())
            })
            .collect();
        let renewable = self
            .taxonomy
            .renewable
            .iter()
            .filter_map(|fuel_type| {
                per_fuel.remove(fuel_type.as_str()).map(|energy| FuelTotal {
                    fuel_type: fuel_type.clone(),
                    energy,
                    is_renewable: true,
                })
            })
            .collect_vec();
        let others = per_fuel
            .into_iter()
            .sorted_unstable_by_key(|(fuel_type, _)| *fuel_type)
            .map(|(fuel_type, energy)| FuelTotal {
                fuel_type: fuel_type.to_owned(),
                energy,
                is_renewable: false,
            });
        renewable.into_iter().chain(others).collect()
    }

    /// Sum the renewable generation per timestamp, keeping the order of first appearance.
    ///
    /// Timestamps are EPT wall-clock time, so on the DST fall-back day both real hours
    /// starting at 1:00 AM fall into the same group.
    fn renewable_hourly(
        &self,
        records: &[GenerationRecord],
    ) -> Vec<(Option<NaiveDateTime>, Megawatts)> {
        let mut hourly: Vec<(Option<NaiveDateTime>, Megawatts)> = Vec::new();
        let mut positions: HashMap<Option<NaiveDateTime>, usize> = HashMap::new();
        let renewable_records =
            records.iter().filter(|record| self.taxonomy.is_renewable(&record.fuel_type));
        for record in renewable_records {
            let position = *positions.entry(record.timestamp).or_insert_with(|| {
                hourly.push((record.timestamp, Megawatts::ZERO));
                hourly.len() - 1
            });
            hourly[position].1 += record.megawatts;
        }
        hourly
    }
}
