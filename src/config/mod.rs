pub mod seed;

use std::path::PathBuf;
use clap::Parser;
use thiserror::Error;
use crate::domain::{default_catalog, Product};

pub use seed::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid { message: message.into() }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "shop-console")]
#[command(about = "An in-memory console shopping simulator")]
pub struct ShopConfig {
    /// TOML file with `[[products]]` entries replacing the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Bound of the catalog actor's request channel
    #[arg(long, default_value = "32")]
    pub mailbox_capacity: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ShopConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::invalid("mailbox capacity must be at least 1"));
        }
        Ok(())
    }

    /// The seed catalog: the configured file, or the built-in products.
    pub fn load_catalog(&self) -> Result<Vec<Product>, ConfigError> {
        match &self.catalog {
            Some(path) => load_seed(path),
            None => Ok(default_catalog()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::parse_from(["shop-console"]);
        assert_eq!(config.mailbox_capacity, 32);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
        assert_eq!(config.load_catalog().unwrap(), default_catalog());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = ShopConfig::parse_from(["shop-console", "--mailbox-capacity", "0"]);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ShopConfig::parse_from(["shop-console", "--catalog", "/nonexistent/catalog.toml"]);
        assert!(matches!(config.load_catalog(), Err(ConfigError::Read { .. })));
    }
}
