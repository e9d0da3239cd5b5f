//! Build rule generation.
//!
//! One [`BuildRule`] is produced for every distinct `(name, version)` in the
//! lockfile, in the order the version index first saw them: packages in
//! first-seen order, then each package's versions in first-seen order. Every
//! rule is computed before anything is rendered. A resolution failure
//! therefore never leaves a half-written build file behind.
//!
//! # Example
//!
//! ```rust
//! use yarn_deps::buildfile::BuildFile;
//! use yarn_deps::config::BuildFileConfig;
//! use yarn_deps::lockfile::Lockfile;
//! use yarn_deps::resolver::Resolver;
//! use yarn_deps::version::VersionIndex;
//!
//! # fn example() -> anyhow::Result<()> {
//! let lockfile = Lockfile::parse(
//!     "leaf@^1.0.0:\n  version \"1.0.0\"\n  resolved \"https://example.com/leaf.tgz\"\n",
//! )?;
//! let resolver = Resolver::new(VersionIndex::build(&lockfile)?);
//! let build_file = BuildFile::generate(&resolver)?;
//!
//! let text = build_file.render(&BuildFileConfig::default());
//! assert!(text.contains("name = 'leaf'"));
//! # Ok(())
//! # }
//! ```

mod render;

use std::collections::BTreeSet;

use crate::core::YarnDepsError;
use crate::resolver::Resolver;
use crate::resolver::naming::archive_name;

/// One `yarn_module` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRule {
    /// Rule name, see [`Resolver::rule_name_for`]
    pub name: String,
    /// Downloaded archive file name
    pub out: String,
    /// Download locator recorded in the lockfile
    pub resolved_by: String,
    /// Locked version
    pub version: String,
    /// Rule names of every transitive dependency, sorted and deduplicated
    pub deps: BTreeSet<String>,
}

/// All rules generated from one lockfile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFile {
    /// Rules in emission order
    pub rules: Vec<BuildRule>,
}

impl BuildFile {
    /// Generate a rule for every resolved package version.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::UnresolvedRequirement`] if any dependency,
    /// direct or transitive, has no lockfile entry.
    pub fn generate(resolver: &Resolver<'_>) -> Result<Self, YarnDepsError> {
        let index = resolver.index();
        let mut rules = Vec::with_capacity(index.resolved_count());

        for (name, versions) in index.packages() {
            for version in versions.iter() {
                rules.push(Self::generate_rule(resolver, name, version)?);
            }
        }

        tracing::debug!("Generated {} rules", rules.len());
        Ok(Self {
            rules,
        })
    }

    fn generate_rule(
        resolver: &Resolver<'_>,
        name: &str,
        version: &str,
    ) -> Result<BuildRule, YarnDepsError> {
        let entry = resolver.index().lookup_by_version(name, version)?;
        let rule_name = resolver.rule_name_for(name, &entry.version)?;
        let deps = resolver.dependency_rules(entry)?;

        tracing::debug!("{rule_name}: {} dependencies", deps.len());
        Ok(BuildRule {
            name: rule_name,
            out: archive_name(name, &entry.version),
            resolved_by: entry.resolved.clone(),
            version: entry.version.clone(),
            deps,
        })
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&BuildRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}
