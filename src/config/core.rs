use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scoring::ScoringWeights;

/// Root configuration structure for petrank
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PetrankConfig {
    /// Composite scoring weights
    #[serde(default)]
    pub weights: Option<ScoringWeights>,

    /// Locations of the corpus files
    #[serde(default)]
    pub data: Option<DataConfig>,

    /// Output limits
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Directory of the file this config was read from; relative data paths
    /// resolve against it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Corpus file locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_pets_path")]
    pub pets: PathBuf,
    #[serde(default = "default_abilities_path")]
    pub abilities: PathBuf,
    #[serde(default = "default_spells_path")]
    pub spells: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            pets: default_pets_path(),
            abilities: default_abilities_path(),
            spells: default_spells_path(),
        }
    }
}

impl DataConfig {
    /// Point all three files at `dir`, keeping their file names.
    pub fn in_directory(dir: &Path) -> Self {
        let file = |p: PathBuf| dir.join(p.file_name().map(PathBuf::from).unwrap_or(p));
        let defaults = Self::default();
        Self {
            pets: file(defaults.pets),
            abilities: file(defaults.abilities),
            spells: file(defaults.spells),
        }
    }

    /// Resolve relative paths against `base`.
    pub fn resolved(&self, base: Option<&Path>) -> Self {
        let resolve = |p: &PathBuf| match base {
            Some(base) if p.is_relative() => base.join(p),
            _ => p.clone(),
        };
        Self {
            pets: resolve(&self.pets),
            abilities: resolve(&self.abilities),
            spells: resolve(&self.spells),
        }
    }
}

pub fn default_pets_path() -> PathBuf {
    PathBuf::from("data/pets.json")
}
pub fn default_abilities_path() -> PathBuf {
    PathBuf::from("data/abilities.json")
}
pub fn default_spells_path() -> PathBuf {
    PathBuf::from("data/spells.json")
}

/// Output limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_top_cards")]
    pub top_cards: usize,
    #[serde(default = "default_top_talents")]
    pub top_talents: usize,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_cards: default_top_cards(),
            top_talents: default_top_talents(),
            search_limit: default_search_limit(),
        }
    }
}

pub fn default_top_cards() -> usize {
    20
}
pub fn default_top_talents() -> usize {
    5
}
pub fn default_search_limit() -> usize {
    crate::lookup::DEFAULT_SEARCH_LIMIT
}

impl PetrankConfig {
    pub fn weights(&self) -> ScoringWeights {
        self.weights.unwrap_or_default()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.unwrap_or_default()
    }

    /// Data paths with relative entries resolved against the config's
    /// directory.
    pub fn data_paths(&self) -> DataConfig {
        self.data
            .clone()
            .unwrap_or_default()
            .resolved(self.base_dir.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = PetrankConfig::default();
        assert_eq!(config.weights(), ScoringWeights::default());
        assert_eq!(config.display().top_cards, 20);
        assert_eq!(config.display().search_limit, 10);
        assert_eq!(config.data_paths().pets, PathBuf::from("data/pets.json"));
    }

    #[test]
    fn relative_data_paths_follow_config_dir() {
        let config = PetrankConfig {
            base_dir: Some(PathBuf::from("/srv/pets")),
            data: Some(DataConfig {
                pets: PathBuf::from("corpus/pets.json"),
                abilities: PathBuf::from("/abs/abilities.json"),
                spells: default_spells_path(),
            }),
            ..PetrankConfig::default()
        };
        let paths = config.data_paths();
        assert_eq!(paths.pets, PathBuf::from("/srv/pets/corpus/pets.json"));
        assert_eq!(paths.abilities, PathBuf::from("/abs/abilities.json"));
        assert_eq!(paths.spells, PathBuf::from("/srv/pets/data/spells.json"));
    }

    #[test]
    fn data_directory_override_keeps_file_names() {
        let paths = DataConfig::in_directory(Path::new("/tmp/corpus"));
        assert_eq!(paths.pets, PathBuf::from("/tmp/corpus/pets.json"));
        assert_eq!(paths.spells, PathBuf::from("/tmp/corpus/spells.json"));
    }
}
