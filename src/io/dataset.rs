//! Reading the scraped corpus from disk.

use crate::config::DataConfig;
use crate::core::{Dataset, Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse a JSON array of records. Anything other than an array is rejected.
pub fn parse_records<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<Vec<T>> {
    let value: serde_json::Value = serde_json::from_str(contents)
        .map_err(|e| Error::dataset(path, format!("invalid JSON: {e}")))?;

    if !value.is_array() {
        return Err(Error::dataset(path, "expected a JSON array"));
    }

    serde_json::from_value(value).map_err(|e| Error::dataset(path, e.to_string()))
}

/// Read and parse one corpus file.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::dataset(path, format!("cannot read file: {e}")))?;
    let records = parse_records(path, &contents)?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load the pets, abilities and spells files.
///
/// Pets and abilities are required. The spell catalog only decorates
/// profiles, so a missing spells file is logged and treated as empty.
pub fn load_dataset(paths: &DataConfig) -> Result<Dataset> {
    let pets = read_records(&paths.pets)?;
    let abilities = read_records(&paths.abilities)?;
    let spells = if paths.spells.exists() {
        read_records(&paths.spells)?
    } else {
        log::warn!(
            "Spell catalog {} not found; spell icons will be missing",
            paths.spells.display()
        );
        Vec::new()
    };

    log::info!(
        "Loaded {} pets, {} abilities, {} spells",
        pets.len(),
        abilities.len(),
        spells.len()
    );

    Ok(Dataset {
        pets,
        abilities,
        spells,
    })
}
