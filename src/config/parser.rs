//! Generic TOML configuration parsing.
//!
//! ```rust,no_run
//! use yarn_deps::config::parse_config;
//! use yarn_deps::config::BuildFileConfig;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: BuildFileConfig = parse_config(Path::new("yarn_deps.toml"))?;
//! println!("Rules will use {}", config.rule_kind);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::YarnDepsError;

/// Parse a TOML configuration file into `T`.
///
/// # Errors
///
/// Fails if the file cannot be read, or with [`YarnDepsError::ConfigError`]
/// if its content does not deserialize into `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let parsed = toml::from_str(&content).map_err(|e| YarnDepsError::ConfigError {
        message: format!("{}: {}", path.display(), e.to_string().trim_end()),
    })?;
    Ok(parsed)
}
