use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::PetrankConfig;
use crate::core::{Error, Result};
use crate::scoring::ScoringWeights;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".petrank.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML config and validate its weights.
///
/// Invalid weights are not fatal: they are replaced by the defaults with a
/// warning.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<PetrankConfig, String> {
    let mut config = toml::from_str::<PetrankConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(weights) = config.weights {
        if let Err(e) = weights.validate() {
            log::warn!("Invalid scoring weights: {}. Using defaults.", e);
            config.weights = Some(ScoringWeights::default());
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PetrankConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config.with_base_dir(config_path))
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> PetrankConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            PetrankConfig::default()
        })
}

pub fn load_config() -> PetrankConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            PetrankConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike the directory search, a
/// missing or unparseable file is an error here.
pub fn load_config_from_path(path: &Path) -> Result<PetrankConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    Ok(config.with_base_dir(path))
}

impl PetrankConfig {
    fn with_base_dir(mut self, config_path: &Path) -> Self {
        self.base_dir = config_path.parent().map(Path::to_path_buf);
        self
    }
}
