use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use plotly::{
    Layout,
    Plot,
    Scatter,
    common::{Line, Mode},
    layout::Axis,
};

use crate::{
    core::{FuelTaxonomy, GenerationRecord, GenerationReportBuilder},
    prelude::*,
};

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("nothing to plot")]
    NoData,

    #[error("{count} records have no timestamp and cannot be plotted")]
    UnparsedTimestamps { count: usize },

    #[error("failed to write the plot to `{path}`")]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },
}

/// Pivot the generation by fuel type over time, one line per fuel type.
#[instrument(skip_all, fields(n_records = records.len()))]
pub fn render_plot(
    records: &[GenerationRecord],
    taxonomy: &FuelTaxonomy,
) -> Result<Plot, PlotError> {
    if records.is_empty() {
        return Err(PlotError::NoData);
    }
    let count = records.iter().filter(|record| record.timestamp.is_none()).count();
    if count != 0 {
        return Err(PlotError::UnparsedTimestamps { count });
    }

    let mut series = records
        .iter()
        .filter_map(|record| {
            let timestamp = record.timestamp?;
            Some((record.fuel_type.as_str(), (timestamp, record.megawatts.0)))
        })
        .into_group_map();

    let mut plot = Plot::new();
    for fuel_total in GenerationReportBuilder::new(taxonomy).aggregate(records).per_type {
        let Some(points) = series.remove(fuel_total.fuel_type.as_str()) else {
            continue;
        };
        let (timestamps, megawatts): (Vec<String>, Vec<f64>) = points
            .into_iter()
            .sorted_by_key(|(timestamp, _)| *timestamp)
            .map(|(timestamp, megawatts)| {
                (timestamp.format("%Y-%m-%d %H:%M:%S").to_string(), megawatts)
            })
            .unzip();
        let mut trace = Scatter::new(timestamps, megawatts)
            .name(fuel_total.fuel_type.as_str())
            .mode(Mode::Lines);
        if let Some(color) = taxonomy.color_of(&fuel_total.fuel_type) {
            trace = trace.line(Line::new().color(color.to_owned()));
        }
        plot.add_trace(trace);
    }
    plot.set_layout(
        Layout::new()
            .title("Generation by fuel type")
            .x_axis(Axis::new().title("Time"))
            .y_axis(Axis::new().title("Generation (MW)")),
    );
    Ok(plot)
}

/// Write the plot as a self-contained HTML document.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_plot(plot: &Plot, path: &Path) -> Result<(), PlotError> {
    fs::write(path, plot.to_html())
        .map_err(|source| PlotError::Io { path: path.to_owned(), source })?;
    info!("plot written");
    Ok(())
}
