use crate::config::{parse_and_validate_config, CONFIG_FILE_NAME};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# petrank configuration

# Relative importance of each sub-score. Values are normalized to sum to 1.
[weights]
cards = 0.3
talents = 0.3
derby = 0.1
pedigree = 0.2
attributes = 0.1

# Corpus files, relative to this file.
[data]
pets = "data/pets.json"
abilities = "data/abilities.json"
spells = "data/spells.json"

[display]
top_cards = 20
top_talents = 5
search_limit = 10
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = write_default_config(Path::new("."), force)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

/// Write the default config into `dir`, refusing to overwrite unless forced.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
