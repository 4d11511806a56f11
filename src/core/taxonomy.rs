use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("failed to read the taxonomy file `{path}`")]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the taxonomy file")]
    Toml(#[from] toml::de::Error),
}

/// Classification of fuel types.
///
/// Anything not listed as renewable is considered non-renewable.
#[must_use]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct FuelTaxonomy {
    /// Renewable fuel types in the order they are reported.
    pub renewable: Vec<String>,

    /// Fuel type whose single-record peak is reported.
    pub coal: String,

    /// Plot colours by fuel type, any CSS colour.
    pub colors: BTreeMap<String, String>,
}

impl Default for FuelTaxonomy {
    fn default() -> Self {
        Self {
            renewable: ["Hydro", "Wind", "Solar", "Storage", "Other Renewables"]
                .map(String::from)
                .to_vec(),
            coal: String::from("Coal"),
            colors: [
                ("Coal", "#3b3b3b"),
                ("Gas", "#e67e22"),
                ("Hydro", "#2471a3"),
                ("Multiple Fuels", "#a569bd"),
                ("Nuclear", "#c0392b"),
                ("Oil", "#7e5109"),
                ("Other", "#95a5a6"),
                ("Other Renewables", "#82e0aa"),
                ("Solar", "#f4d03f"),
                ("Storage", "#1abc9c"),
                ("Wind", "#5dade2"),
            ]
            .into_iter()
            .map(|(fuel_type, color)| (fuel_type.to_owned(), color.to_owned()))
            .collect(),
        }
    }
}

impl FuelTaxonomy {
    pub fn from_toml_file(path: &Path) -> Result<Self, TaxonomyError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| TaxonomyError::Io { path: path.to_owned(), source })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, TaxonomyError> {
        Ok(toml::from_str(contents)?)
    }

    #[must_use]
    pub fn is_renewable(&self, fuel_type: &str) -> bool {
        self.renewable.iter().any(|renewable| renewable == fuel_type)
    }

    #[must_use]
    pub fn is_coal(&self, fuel_type: &str) -> bool {
        self.coal == fuel_type
    }

    #[must_use]
    pub fn color_of(&self, fuel_type: &str) -> Option<&str> {
        self.colors.get(fuel_type).map(String::as_str)
    }
}
