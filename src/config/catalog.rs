//! Initial catalog loading from config.toml
//!
//! This module provides functionality to load the initial market catalog
//! (users and items) from a TOML configuration file. The entries defined in
//! config.toml are used to seed the database on first run or when entries
//! are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of user accounts to seed
    #[serde(default)]
    pub users: Vec<UserConfig>,
    /// List of catalog items to seed
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// Configuration for a single seeded user
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    /// Email address identifying the user
    pub email: String,
    /// Starting balance in dollars
    pub balance: f64,
}

/// Configuration for a single seeded item
#[derive(Debug, Deserialize, Clone)]
pub struct ItemConfig {
    /// Item display name
    pub name: String,
    /// Price in dollars
    pub cost: f64,
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads catalog configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file is missing or malformed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[users]]
            email = "alice@example.com"
            balance = 1000.0

            [[users]]
            email = "bob@example.com"
            balance = 250.0

            [[items]]
            name = "Coffee"
            cost = 4.5

            [[items]]
            name = "Keyboard"
            cost = 120.0
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].email, "alice@example.com");
        assert_eq!(config.users[0].balance, 1000.0);
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[1].name, "Keyboard");
        assert_eq!(config.items[1].cost, 120.0);
    }

    #[test]
    fn test_parse_catalog_config_sections_optional() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.users.is_empty());
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/a/real/path.toml");
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message: _ }
        ));
    }
}
