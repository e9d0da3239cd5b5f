//! Version indices derived from a parsed lockfile.
//!
//! [`VersionIndex::build`] makes one pass over every lockfile key and records:
//!
//! - which entry each `name@requirement` resolved to (delegated to the
//!   [`Lockfile`] itself),
//! - a representative entry for each resolved `name@version`, first seen wins,
//! - the [`VersionSet`] of every package: each distinct version in the order it
//!   was first seen.
//!
//! The index is immutable once built. Rule naming depends on the complete
//! version landscape, so nothing may be named before the scan has finished;
//! holding the index by shared reference is how the rest of the crate gets
//! that guarantee.
//!
//! # Example
//!
//! ```rust
//! use yarn_deps::lockfile::Lockfile;
//! use yarn_deps::version::VersionIndex;
//!
//! # fn example() -> anyhow::Result<()> {
//! let lockfile = Lockfile::parse(
//!     "foo@^1.0.0:\n  version \"1.0.0\"\n  resolved \"a\"\n\n\
//!      foo@^2.0.0:\n  version \"2.0.0\"\n  resolved \"b\"\n",
//! )?;
//! let index = VersionIndex::build(&lockfile)?;
//!
//! let versions: Vec<&str> = index.versions_of("foo").iter().collect();
//! assert_eq!(versions, vec!["1.0.0", "2.0.0"]);
//! assert_eq!(index.lookup_by_version("foo", "2.0.0")?.resolved, "b");
//! # Ok(())
//! # }
//! ```

pub mod comparison;

use semver::Version;
use std::collections::HashMap;

use crate::core::YarnDepsError;
use crate::lockfile::{LockEntry, Lockfile};
use comparison::VersionComparator;

/// One distinct locked version of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedVersion {
    /// The version exactly as written in the lockfile
    pub raw: String,
    /// Parsed form used for ordering
    pub semver: Version,
}

/// Every distinct version of one package, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    versions: Vec<LockedVersion>,
}

impl VersionSet {
    /// Whether `raw` is already in the set.
    pub fn contains(&self, raw: &str) -> bool {
        self.versions.iter().any(|v| v.raw == raw)
    }

    /// Version strings in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|v| v.raw.as_str())
    }

    /// Number of distinct versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether no versions were recorded.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Whether some version in the set is strictly newer than `version`.
    pub fn has_newer_than(&self, version: &Version) -> bool {
        self.versions
            .iter()
            .any(|v| VersionComparator::is_newer(&v.semver, version))
    }

    /// The parsed form of `raw`, if it is in the set.
    pub fn get(&self, raw: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.raw == raw).map(|v| &v.semver)
    }

    fn insert(&mut self, version: LockedVersion) -> bool {
        if self.contains(&version.raw) {
            return false;
        }
        self.versions.push(version);
        true
    }
}

/// Lookup tables built once from a [`Lockfile`].
#[derive(Debug)]
pub struct VersionIndex<'a> {
    lockfile: &'a Lockfile,
    by_version: HashMap<String, &'a LockEntry>,
    packages: Vec<(String, VersionSet)>,
    package_index: HashMap<String, usize>,
    empty: VersionSet,
}

impl<'a> VersionIndex<'a> {
    /// Scan every lockfile key and build the indices.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::InvalidVersion`] for the first locked version
    /// that is not a semantic version.
    pub fn build(lockfile: &'a Lockfile) -> Result<Self, YarnDepsError> {
        let mut index = Self {
            lockfile,
            by_version: HashMap::new(),
            packages: Vec::new(),
            package_index: HashMap::new(),
            empty: VersionSet::default(),
        };

        for (key, entry) in lockfile.iter() {
            index.record_version(&key.name, entry)?;
        }

        tracing::debug!(
            "Indexed {} lockfile keys into {} packages and {} resolved versions",
            lockfile.len(),
            index.packages.len(),
            index.by_version.len()
        );
        for (name, versions) in &index.packages {
            if versions.len() > 1 {
                tracing::info!(
                    "{name} is locked at {} versions: {}",
                    versions.len(),
                    versions.iter().collect::<Vec<_>>().join(", ")
                );
            }
        }

        Ok(index)
    }

    /// Record `entry.version` for `name`.
    ///
    /// The first entry seen for a given `name@version` becomes its
    /// representative; later ones are ignored.
    ///
    /// # Errors
    ///
    /// Fails if the version does not parse.
    pub fn record_version(&mut self, name: &str, entry: &'a LockEntry) -> Result<(), YarnDepsError> {
        let slot = match self.package_index.get(name) {
            Some(&slot) => slot,
            None => {
                self.packages.push((name.to_string(), VersionSet::default()));
                self.package_index.insert(name.to_string(), self.packages.len() - 1);
                self.packages.len() - 1
            }
        };

        let versions = &mut self.packages[slot].1;
        if versions.contains(&entry.version) {
            return Ok(());
        }

        let semver = VersionComparator::parse_version(&entry.version).map_err(|_| {
            YarnDepsError::InvalidVersion {
                name: name.to_string(),
                version: entry.version.clone(),
            }
        })?;
        versions.insert(LockedVersion {
            raw: entry.version.clone(),
            semver,
        });
        self.by_version.insert(resolved_key(name, &entry.version), entry);
        Ok(())
    }

    /// The entry `name@requirement` resolved to.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::UnresolvedRequirement`] if the lockfile has no
    /// such key.
    pub fn lookup_by_requirement(
        &self,
        name: &str,
        requirement: &str,
    ) -> Result<&'a LockEntry, YarnDepsError> {
        self.lockfile.get(name, requirement).ok_or_else(|| YarnDepsError::UnresolvedRequirement {
            name: name.to_string(),
            requirement: requirement.to_string(),
        })
    }

    /// The representative entry for a resolved `name@version`.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::UnresolvedRequirement`] if that version was
    /// never recorded.
    pub fn lookup_by_version(&self, name: &str, version: &str) -> Result<&'a LockEntry, YarnDepsError> {
        self.by_version.get(&resolved_key(name, version)).copied().ok_or_else(|| {
            YarnDepsError::UnresolvedRequirement {
                name: name.to_string(),
                requirement: version.to_string(),
            }
        })
    }

    /// All versions recorded for `name`; empty if the package was never seen.
    pub fn versions_of(&self, name: &str) -> &VersionSet {
        self.package_index
            .get(name)
            .map_or(&self.empty, |&slot| &self.packages[slot].1)
    }

    /// Packages with their versions, in first-seen order.
    pub fn packages(&self) -> impl Iterator<Item = (&str, &VersionSet)> {
        self.packages.iter().map(|(name, versions)| (name.as_str(), versions))
    }

    /// Number of distinct `(name, version)` pairs.
    pub fn resolved_count(&self) -> usize {
        self.by_version.len()
    }
}

fn resolved_key(name: &str, version: &str) -> String {
    format!("{name}@{version}")
}
