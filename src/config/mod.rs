//! Build file configuration.
//!
//! The generated build file starts with a fixed preamble and uses fixed rule
//! and label conventions. [`BuildFileConfig::default`] reproduces them exactly,
//! so running without a configuration file always yields the standard output:
//!
//! ```text
//! # This file was autogenerated by yarn_deps from a yarn.lock file. Do not modify.
//!
//! subinclude('//js:yarn')
//! package(default_visibility = ['PUBLIC'])
//! ```
//!
//! Repositories whose build definitions live elsewhere can override any field
//! from a TOML file passed with `--config`:
//!
//! ```toml
//! subinclude = "//build_defs:yarn"
//! default_visibility = ["//frontend/...", "//tools/..."]
//! ```
//!
//! Unknown keys are rejected so typos do not silently fall back to defaults.

mod parser;

pub use parser::parse_config;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Comment line written at the top of every generated build file.
pub const DEFAULT_HEADER: &str =
    "# This file was autogenerated by yarn_deps from a yarn.lock file. Do not modify.";

/// Build definitions that provide `yarn_module`.
pub const DEFAULT_SUBINCLUDE: &str = "//js:yarn";

/// Rule function emitted for each package.
pub const DEFAULT_RULE_KIND: &str = "yarn_module";

/// Suffix of the download sub-rule that dependency labels point at.
pub const DEFAULT_DOWNLOAD_SUFFIX: &str = "#download";

/// Settings for the generated build file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildFileConfig {
    /// Comment written as the first line
    pub header: String,
    /// Target passed to `subinclude()`
    pub subinclude: String,
    /// Visibility applied to every rule in the package
    pub default_visibility: Vec<String>,
    /// Rule function name
    pub rule_kind: String,
    /// Suffix appended to `:_<rule>` in dependency labels
    pub download_suffix: String,
}

impl Default for BuildFileConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            subinclude: DEFAULT_SUBINCLUDE.to_string(),
            default_visibility: vec!["PUBLIC".to_string()],
            rule_kind: DEFAULT_RULE_KIND.to_string(),
            download_suffix: DEFAULT_DOWNLOAD_SUFFIX.to_string(),
        }
    }
}

impl BuildFileConfig {
    /// Load from `path`; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or has unknown keys.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        tracing::debug!("Loaded build file configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    ///
    /// # Errors
    ///
    /// See [`load_from`](Self::load_from).
    pub fn load_with_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }
}
