use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub fn load_config<T, P: AsRef<Path>>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Location of the demo config. Can be overridden with `DEMO_CONFIG`.
pub fn demo_config_path() -> PathBuf {
    PathBuf::from(std::env::var("DEMO_CONFIG").unwrap_or_else(|_| "config/demo.json".to_string()))
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// How many outputs of an engine to show when logging its state.
    pub preview_words: usize,
    /// Fixed seed the engines start from before being seeded randomly.
    pub default_seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            preview_words: 4,
            default_seed: 5489,
        }
    }
}
