// Core configuration types
mod core;
mod loader;

pub use core::{
    default_abilities_path, default_pets_path, default_search_limit, default_spells_path,
    default_top_cards, default_top_talents, DataConfig, DisplayConfig, PetrankConfig,
};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
