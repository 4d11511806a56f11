use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    core::FuelTaxonomy,
    ingest::LoadPolicy,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Generation by fuel type CSV file, for example a PJM Data Miner export.
    #[clap(env = "GENMIX_INPUT")]
    pub input: PathBuf,

    /// Also render a time-series chart per fuel type.
    #[clap(long)]
    pub plot: bool,

    #[clap(long, env = "GENMIX_PLOT_PATH", default_value = "generation.html")]
    pub plot_path: PathBuf,

    #[clap(long, env = "GENMIX_FORMAT", value_enum, default_value = "text")]
    pub format: Format,

    /// TOML file overriding the renewable fuel types and the plot colours.
    #[clap(long, env = "GENMIX_TAXONOMY")]
    pub taxonomy: Option<PathBuf>,

    /// Field delimiter, a single ASCII character.
    #[clap(long, env = "GENMIX_DELIMITER", default_value = ",")]
    pub delimiter: char,

    /// Fail on unparsable timestamps and on input without data rows.
    #[clap(long)]
    pub strict: bool,
}

impl Args {
    pub fn delimiter(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("delimiter `{}` is not an ASCII character", self.delimiter))
    }

    #[must_use]
    pub const fn load_policy(&self) -> LoadPolicy {
        if self.strict { LoadPolicy::Strict } else { LoadPolicy::Lenient }
    }

    pub fn taxonomy(&self) -> Result<FuelTaxonomy> {
        match &self.taxonomy {
            Some(path) => FuelTaxonomy::from_toml_file(path)
                .with_context(|| format!("failed to load the taxonomy from `{}`", path.display())),
            None => Ok(FuelTaxonomy::default()),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Plain text lines.
    Text,

    /// Per-fuel table followed by the peaks.
    Table,

    /// The whole report as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["genmix", "generation.csv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("generation.csv"));
        assert!(!args.plot);
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.delimiter().unwrap(), b',');
        assert_eq!(args.load_policy(), LoadPolicy::Lenient);
        assert_eq!(args.taxonomy().unwrap().renewable.len(), 5);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "genmix",
            "generation.csv",
            "--plot",
            "--format",
            "json",
            "--delimiter",
            ";",
            "--strict",
        ])
        .unwrap();
        assert!(args.plot);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.delimiter().unwrap(), b';');
        assert_eq!(args.load_policy(), LoadPolicy::Strict);
    }

    #[test]
    fn test_non_ascii_delimiter() {
        let args = Args::try_parse_from(["genmix", "generation.csv", "--delimiter", "§"]).unwrap();
        assert!(args.delimiter().is_err());
    }
}
