//! Text rendering of a [`BuildFile`].
//!
//! Output format, with the default configuration:
//!
//! ```text
//! # This file was autogenerated by yarn_deps from a yarn.lock file. Do not modify.
//!
//! subinclude('//js:yarn')
//! package(default_visibility = ['PUBLIC'])
//!
//!
//! yarn_module(
//!     name = 'root',
//!     out = 'root-1.0.0.tgz',
//!     resolved_by = 'https://registry.yarnpkg.com/root/-/root-1.0.0.tgz',
//!     version = '1.0.0',
//!     deps = [
//!         ':_leaf#download',
//!     ],
//! )
//! ```
//!
//! Two blank lines separate the preamble from the first rule and one separates
//! consecutive rules. The `deps` block is left out when a rule has no
//! dependencies.

use std::fmt;

use super::{BuildFile, BuildRule};
use crate::config::BuildFileConfig;

impl BuildFile {
    /// Render the complete build file.
    pub fn render(&self, config: &BuildFileConfig) -> String {
        Rendered {
            file: self,
            config,
        }
        .to_string()
    }
}

struct Rendered<'a> {
    file: &'a BuildFile,
    config: &'a BuildFileConfig,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let visibility: Vec<String> =
            config.default_visibility.iter().map(|v| format!("'{v}'")).collect();

        writeln!(f, "{}", config.header)?;
        writeln!(f)?;
        writeln!(f, "subinclude('{}')", config.subinclude)?;
        writeln!(f, "package(default_visibility = [{}])", visibility.join(", "))?;
        writeln!(f)?;

        for rule in &self.file.rules {
            writeln!(f)?;
            write_rule(f, rule, config)?;
        }
        Ok(())
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, rule: &BuildRule, config: &BuildFileConfig) -> fmt::Result {
    writeln!(f, "{}(", config.rule_kind)?;
    writeln!(f, "    name = '{}',", rule.name)?;
    writeln!(f, "    out = '{}',", rule.out)?;
    writeln!(f, "    resolved_by = '{}',", rule.resolved_by)?;
    writeln!(f, "    version = '{}',", rule.version)?;
    if !rule.deps.is_empty() {
        writeln!(f, "    deps = [")?;
        for dep in &rule.deps {
            writeln!(f, "        ':_{dep}{}',", config.download_suffix)?;
        }
        writeln!(f, "    ],")?;
    }
    writeln!(f, ")")
}
