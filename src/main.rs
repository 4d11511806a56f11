#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod ingest;
mod plot;
mod prelude;
mod quantity;
mod tables;

use std::io::stderr;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Format},
    core::{AggregateReport, FuelTaxonomy, GenerationRecord, GenerationReportBuilder},
    fmt::{format_peaks, format_report},
    ingest::load_file,
    plot::{render_plot, write_plot},
    prelude::*,
    tables::build_fuel_type_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let taxonomy = args.taxonomy()?;
    let records = load_file(&args.input, args.delimiter()?, args.load_policy())
        .with_context(|| format!("failed to load `{}`", args.input.display()))?;

    let report = GenerationReportBuilder::new(&taxonomy).aggregate(&records);
    print_report(&report, args.format)?;

    if args.plot {
        plot(&records, &args, &taxonomy);
    }

    info!("done!");
    Ok(())
}

fn print_report(report: &AggregateReport, format: Format) -> Result {
    match format {
        Format::Text => {
            for line in format_report(report) {
                println!("{line}");
            }
        }
        Format::Table => {
            println!("{}", build_fuel_type_table(report));
            for line in format_peaks(report) {
                println!("{line}");
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

/// Plot failures are reported but never fail the run.
fn plot(records: &[GenerationRecord], args: &Args, taxonomy: &FuelTaxonomy) {
    let result =
        render_plot(records, taxonomy).and_then(|plot| write_plot(&plot, &args.plot_path));
    if let Err(error) = result {
        let error = Error::from(error);
        error!(path = %args.plot_path.display(), "failed to plot: {error:#}");
    }
}
