//! Data tables loaded from TOML
//!
//! Every error names the table or file it came from.

mod tables;

pub use tables::{default_game_data, load_game_data, parse_game_data, TableSources};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Table loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {table}: {source}")]
    ParseError {
        table: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid game data: {0}")]
    ValidationError(String),
}

/// Read a table file into memory
pub fn read_table(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize TOML text; `table` only labels errors
pub fn parse_toml<T: DeserializeOwned>(table: &str, content: &str) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::ParseError {
        table: table.to_string(),
        source,
    })
}
