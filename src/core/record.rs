use chrono::NaiveDateTime;

use crate::quantity::Megawatts;

/// One row of the generation table.
#[derive(Clone, Debug, PartialEq, derive_more::Constructor)]
pub struct GenerationRecord {
    /// Beginning of the hourly interval, [`None`] when the source value could not be parsed.
    pub timestamp: Option<NaiveDateTime>,

    pub fuel_type: String,

    pub megawatts: Megawatts,
}
