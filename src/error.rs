use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Entropy source failed = {0}")]
    Entropy(#[from] rand::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file = {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse config file = {0}")]
    Parse(#[from] serde_json::Error),
}
