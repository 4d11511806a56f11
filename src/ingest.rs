mod timestamp;

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, Trim};

pub use self::timestamp::parse_timestamp;
use crate::{core::GenerationRecord, prelude::*, quantity::Megawatts};

pub const TIMESTAMP_COLUMN: &str = "datetime_beginning_ept";
pub const FUEL_TYPE_COLUMN: &str = "fuel_type";
pub const MEGAWATTS_COLUMN: &str = "mw";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open `{path}`")]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),

    #[error("line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("line {line}: unparsable timestamp `{value}`")]
    UnparsableTimestamp { line: u64, value: String },

    #[error("the input contains no data rows")]
    EmptyInput,
}

/// What to do with rows that cannot be fully interpreted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LoadPolicy {
    /// Keep rows with unparsable timestamps and accept empty input.
    #[default]
    Lenient,

    /// Reject unparsable timestamps and empty input.
    Strict,
}

#[derive(Copy, Clone)]
struct Columns {
    timestamp: usize,
    fuel_type: usize,
    megawatts: usize,
}

impl Columns {
    fn try_from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |name: &'static str| {
            headers.iter().position(|header| header == name).ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            timestamp: position(TIMESTAMP_COLUMN)?,
            fuel_type: position(FUEL_TYPE_COLUMN)?,
            megawatts: position(MEGAWATTS_COLUMN)?,
        })
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_file(
    path: &Path,
    delimiter: u8,
    policy: LoadPolicy,
) -> Result<Vec<GenerationRecord>, LoadError> {
    let file =
        File::open(path).map_err(|source| LoadError::Io { path: path.to_owned(), source })?;
    load(file, delimiter, policy)
}

/// Read the generation records from a delimited table with a header row.
pub fn load(
    reader: impl Read,
    delimiter: u8,
    policy: LoadPolicy,
) -> Result<Vec<GenerationRecord>, LoadError> {
    let mut reader =
        ReaderBuilder::new().delimiter(delimiter).trim(Trim::All).from_reader(reader);
    let columns = Columns::try_from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut n_unparsed_timestamps = 0_usize;
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);
        let field = |index: usize| row.get(index).unwrap_or_default();

        let raw_megawatts = field(columns.megawatts);
        let megawatts =
            raw_megawatts.parse::<Megawatts>().map_err(|error| LoadError::MalformedRow {
                line,
                reason: format!("invalid `{MEGAWATTS_COLUMN}` value `{raw_megawatts}`: {error}"),
            })?;
        if !megawatts.0.is_finite() {
            return Err(LoadError::MalformedRow {
                line,
                reason: format!("non-finite `{MEGAWATTS_COLUMN}` value `{raw_megawatts}`"),
            });
        }

        let fuel_type = field(columns.fuel_type);
        if fuel_type.is_empty() {
            return Err(LoadError::MalformedRow {
                line,
                reason: format!("empty `{FUEL_TYPE_COLUMN}`"),
            });
        }

        let raw_timestamp = field(columns.timestamp);
        let timestamp = parse_timestamp(raw_timestamp);
        if timestamp.is_none() {
            if policy == LoadPolicy::Strict {
                return Err(LoadError::UnparsableTimestamp {
                    line,
                    value: raw_timestamp.to_owned(),
                });
            }
            debug!(line, value = raw_timestamp, "unparsable timestamp");
            n_unparsed_timestamps += 1;
        }

        records.push(GenerationRecord::new(timestamp, fuel_type.to_owned(), megawatts));
    }

    if n_unparsed_timestamps != 0 {
        warn!(n_unparsed_timestamps, "kept rows with unparsable timestamps");
    }
    if records.is_empty() {
        if policy == LoadPolicy::Strict {
            return Err(LoadError::EmptyInput);
        }
        warn!("the input contains no data rows");
    }
    info!(n_records = records.len(), "loaded");
    Ok(records)
}
