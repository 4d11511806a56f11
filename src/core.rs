mod peak;
mod record;
mod report;
mod taxonomy;

pub use self::{
    record::GenerationRecord,
    report::{AggregateReport, GenerationReportBuilder, Peak},
    taxonomy::FuelTaxonomy,
};
