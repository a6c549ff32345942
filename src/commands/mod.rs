//! CLI command implementations for petrank operations.
//!
//! Each submodule handles one subcommand. They share the steps in this
//! module: resolving the effective configuration, loading the corpus and
//! opening the requested output writer.
//!
//! Available commands:
//! - **rank**: School ranking by mean composite score
//! - **featured**: The deterministic featured pet for a date
//! - **lookup**: Name search and pet profiles
//! - **insights**: Card and talent frequency tables
//! - **init**: Write a default `.petrank.toml`

pub mod featured;
pub mod init;
pub mod insights;
pub mod lookup;
pub mod rank;

pub use featured::handle_featured;
pub use init::init_config;
pub use insights::handle_insights;
pub use lookup::handle_lookup;
pub use rank::handle_rank;

use crate::cli::OutputArgs;
use crate::config::{load_config, load_config_from_path, DataConfig, PetrankConfig};
use crate::core::Dataset;
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, load_dataset, open_destination, OutputWriter};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub plain: bool,
}

impl GlobalOptions {
    /// Explicit config file when given, otherwise the directory search.
    pub fn load_config(&self) -> Result<PetrankConfig> {
        match &self.config {
            Some(path) => load_config_from_path(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(load_config()),
        }
    }

    /// Corpus locations after applying `--data-dir`.
    pub fn data_paths(&self, config: &PetrankConfig) -> DataConfig {
        match &self.data_dir {
            Some(dir) => DataConfig::in_directory(dir),
            None => config.data_paths(),
        }
    }

    pub fn load_dataset(&self, config: &PetrankConfig) -> Result<Dataset> {
        let paths = self.data_paths(config);
        load_dataset(&paths).context("Failed to load the pet corpus")
    }

    pub fn formatting(&self) -> FormattingConfig {
        if self.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        }
    }

    pub fn writer(&self, output: &OutputArgs) -> Result<Box<dyn OutputWriter>> {
        let destination = open_destination(output.output.as_deref())?;
        Ok(create_writer(
            output.format.into(),
            destination,
            self.formatting(),
        ))
    }
}
