use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::DEFAULT_STORAGE_KEY;

/// Catalog settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// File the key-value storage is kept in
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// Key the recipe list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Start with the sample recipes when storage holds no usable list
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            storage_key: default_storage_key(),
            seed_samples: default_seed_samples(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("recipes.json")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_seed_samples() -> bool {
    true
}

/// Load configuration from a file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPES__ prefix
/// 2. The given file, or an optional config.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECIPES__STORAGE_PATH
pub fn load_config(file: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let source = match file {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(source)
        .add_source(
            Environment::with_prefix("RECIPES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
