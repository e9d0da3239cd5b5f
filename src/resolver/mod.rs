//! Transitive dependency resolution over a lockfile.
//!
//! The [`Resolver`] owns the [`VersionIndex`] built from a lockfile and answers
//! two questions:
//!
//! - what is the rule name of a package at a version ([`Resolver::rule_name_for`]),
//! - which rule names are reachable from a requirement
//!   ([`Resolver::resolve_requirement_closure`]).
//!
//! # Cycles
//!
//! Lockfiles routinely contain cycles (peer dependencies that depend back on
//! their host, diamonds reached twice). The closure walk keeps a set of visited
//! `name@requirement` keys and simply does not revisit one. A cycle therefore
//! ends the walk along that edge; it is never an error.
//!
//! The visited set belongs to the caller and covers exactly one closure. Two
//! different roots that reach the same package must both list it, so a set is
//! never reused between roots.
//!
//! # Optional dependencies
//!
//! `optionalDependencies` are followed exactly like `dependencies` and end up
//! in the same rule list.

pub mod naming;


use std::collections::{BTreeSet, HashSet};

use crate::core::YarnDepsError;
use crate::lockfile::LockEntry;
use crate::version::VersionIndex;
use crate::version::comparison::VersionComparator;

/// Resolution context for one lockfile.
#[derive(Debug)]
pub struct Resolver<'a> {
    index: VersionIndex<'a>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a fully built index.
    pub fn new(index: VersionIndex<'a>) -> Self {
        Self {
            index,
        }
    }

    /// The underlying index.
    pub fn index(&self) -> &VersionIndex<'a> {
        &self.index
    }

    /// Rule name for `name` at `version`.
    ///
    /// # Errors
    ///
    /// Fails with [`YarnDepsError::InvalidVersion`] if `version` was not
    /// recorded in the index and does not parse either.
    pub fn rule_name_for(&self, name: &str, version: &str) -> Result<String, YarnDepsError> {
        let versions = self.index.versions_of(name);
        let name_with = |parsed: &semver::Version| naming::rule_name(name, version, parsed, versions);

        if let Some(parsed) = versions.get(version) {
            return Ok(name_with(parsed));
        }
        let parsed = VersionComparator::parse_version(version).map_err(|_| {
            YarnDepsError::InvalidVersion {
                name: name.to_string(),
                version: version.to_string(),
            }
        })?;
        Ok(name_with(&parsed))
    }

    /// Every rule name reachable from `name@requirement`, the requirement's
    /// own rule included.
    ///
    /// Keys already in `seen` are skipped, and every key visited is added to
    /// it. Passing a fresh set computes the full closure.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::UnresolvedRequirement`] for the first
    /// requirement reached that has no lockfile entry.
    pub fn resolve_requirement_closure(
        &self,
        name: &str,
        requirement: &str,
        seen: &mut HashSet<String>,
    ) -> Result<BTreeSet<String>, YarnDepsError> {
        let mut rules = BTreeSet::new();
        let mut pending: Vec<(&str, &str)> = vec![(name, requirement)];

        while let Some((name, requirement)) = pending.pop() {
            if !seen.insert(format!("{name}@{requirement}")) {
                tracing::trace!("Already visited {name}@{requirement}");
                continue;
            }

            let entry = self.index.lookup_by_requirement(name, requirement)?;
            let rule = self.rule_name_for(name, &entry.version)?;
            tracing::trace!("{name}@{requirement} resolves to {} ({rule})", entry.version);
            rules.insert(rule);

            // Reversed so dependencies are visited in file order
            let deps: Vec<(&str, &str)> = entry.all_dependencies().collect();
            pending.extend(deps.into_iter().rev());
        }

        Ok(rules)
    }

    /// Rule names a package's rule depends on.
    ///
    /// The union of the closures of each direct and optional dependency of
    /// `entry`, each computed with its own fresh visited set.
    ///
    /// # Errors
    ///
    /// Propagates [`YarnDepsError::UnresolvedRequirement`].
    pub fn dependency_rules(&self, entry: &LockEntry) -> Result<BTreeSet<String>, YarnDepsError> {
        let mut rules = BTreeSet::new();
        for (name, requirement) in entry.all_dependencies() {
            let mut seen = HashSet::new();
            rules.extend(self.resolve_requirement_closure(name, requirement, &mut seen)?);
        }
        Ok(rules)
    }
}
