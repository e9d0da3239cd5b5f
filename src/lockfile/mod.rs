//! Yarn v1 lockfile model.
//!
//! A `yarn.lock` maps requirement keys (`name@requirement`) to the entry yarn
//! resolved them to. Several requirements usually share one entry, which the
//! file expresses by listing them on one header line:
//!
//! ```text
//! # THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
//! # yarn lockfile v1
//!
//!
//! "@babel/code-frame@^7.0.0", "@babel/code-frame@^7.10.4":
//!   version "7.10.4"
//!   resolved "https://registry.yarnpkg.com/@babel/code-frame/-/code-frame-7.10.4.tgz"
//!   dependencies:
//!     "@babel/highlight" "^7.10.4"
//!
//! fsevents@~2.1.2:
//!   version "2.1.3"
//!   resolved "https://registry.yarnpkg.com/fsevents/-/fsevents-2.1.3.tgz"
//! ```
//!
//! [`Lockfile::parse`] hands the grammar to `yarn-lock-parser` and turns its
//! entries into an ordered mapping from [`RequirementKey`] to [`LockEntry`].
//! Keys keep the order in which they appear in the file, which is what makes
//! the generated build file reproducible.
//!
//! Only the fields the rule generator needs are kept. Everything else an entry
//! carries (`integrity`, `uid`, ...) is accepted and dropped.

mod io;


use std::collections::HashMap;
use std::fmt;

use yarn_lock_parser::{Entry, YarnLockError};

use crate::core::YarnDepsError;

/// Header `yarn-lock-parser` expects in front of a v1 document.
const V1_HEADER: &str =
    "# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.\n# yarn lockfile v1\n\n\n";

/// A `name@requirement` lockfile key.
///
/// The requirement may be a semver range, a dist-tag, an exact version or a
/// URL; it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequirementKey {
    /// Package name, including the `@scope/` prefix for scoped packages
    pub name: String,
    /// Everything after the `@` that separates name and requirement
    pub requirement: String,
}

impl RequirementKey {
    /// Create a key from its parts.
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }

    /// Split a raw `name@requirement` string.
    ///
    /// The separator is the first `@` that is not the leading `@` of a scoped
    /// package name. Returns `None` when there is no separator.
    ///
    /// ```rust
    /// use yarn_deps::lockfile::RequirementKey;
    ///
    /// let key = RequirementKey::parse("@types/node@^14.0.0").unwrap();
    /// assert_eq!(key.name, "@types/node");
    /// assert_eq!(key.requirement, "^14.0.0");
    /// ```
    pub fn parse(key: &str) -> Option<Self> {
        let offset = usize::from(key.starts_with('@'));
        let at = key[offset..].find('@')? + offset;
        Some(Self::new(&key[..at], &key[at + 1..]))
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.requirement)
    }
}

/// One resolved package as recorded in the lockfile.
///
/// Dependency maps preserve file order. Entries are never mutated after
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    /// Concrete version yarn resolved to
    pub version: String,
    /// Download locator, usually a registry tarball URL
    pub resolved: String,
    /// `name -> requirement` pairs from the `dependencies` block
    pub dependencies: Vec<(String, String)>,
    /// `name -> requirement` pairs from the `optionalDependencies` block
    pub optional_dependencies: Vec<(String, String)>,
}

impl LockEntry {
    /// Create an entry with no dependencies.
    pub fn new(version: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            resolved: resolved.into(),
            dependencies: Vec::new(),
            optional_dependencies: Vec::new(),
        }
    }

    /// Add a regular dependency.
    #[must_use]
    pub fn with_dependency(mut self, name: impl Into<String>, requirement: impl Into<String>) -> Self {
        self.dependencies.push((name.into(), requirement.into()));
        self
    }

    /// Add an optional dependency.
    #[must_use]
    pub fn with_optional_dependency(
        mut self,
        name: impl Into<String>,
        requirement: impl Into<String>,
    ) -> Self {
        self.optional_dependencies.push((name.into(), requirement.into()));
        self
    }

    /// Regular dependencies followed by optional ones.
    ///
    /// Both kinds are treated the same way when building rules.
    pub fn all_dependencies(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dependencies
            .iter()
            .chain(&self.optional_dependencies)
            .map(|(name, requirement)| (name.as_str(), requirement.as_str()))
    }

    /// Copy a parsed entry.
    ///
    /// Local `file:` and `link:` packages have no `resolved` field; their
    /// first requirement is the locator instead.
    fn from_parsed(entry: &Entry<'_>) -> Self {
        let resolved = if entry.resolved.is_empty() {
            let locator = entry.descriptors.first().map_or("", |(_, requirement)| *requirement);
            tracing::debug!("{}@{} has no resolved field, using '{locator}'", entry.name, entry.version);
            locator
        } else {
            entry.resolved
        };

        let with_deps = entry
            .dependencies
            .iter()
            .fold(Self::new(entry.version, resolved), |acc, (name, requirement)| {
                acc.with_dependency(*name, *requirement)
            });
        entry
            .optional_dependencies
            .iter()
            .fold(with_deps, |acc, (name, requirement)| {
                acc.with_optional_dependency(*name, *requirement)
            })
    }
}

fn parse_error(reason: impl Into<String>) -> YarnDepsError {
    YarnDepsError::LockfileParseError {
        reason: reason.into(),
    }
}

/// Describe a `yarn-lock-parser` failure.
///
/// The innermost error carries either the unparsed input or a message.
fn grammar_error(text: &str, error: YarnLockError) -> YarnDepsError {
    let YarnLockError::Parser { source } = error;
    let innermost = match source {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.errors.into_iter().next().map(|(input, _)| input),
        nom::Err::Incomplete(_) => None,
    };

    let first_line = innermost
        .as_deref()
        .and_then(|input| input.lines().next())
        .map(str::trim)
        .unwrap_or_default();
    if first_line.is_empty() {
        parse_error("unexpected end of input")
    } else if text.contains(first_line) {
        parse_error(format!("cannot parse '{first_line}'"))
    } else {
        parse_error(first_line)
    }
}

/// `text` without its leading comments and blank lines.
fn strip_preamble(text: &str) -> &str {
    let mut rest = text;
    while !rest.is_empty() {
        let (line, next) = rest.split_once('\n').unwrap_or((rest, ""));
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            break;
        }
        rest = next;
    }
    rest
}

/// A parsed lockfile: requirement keys in file order, each pointing at an entry.
#[derive(Debug, Clone, Default)]
pub struct Lockfile {
    entries: Vec<LockEntry>,
    keys: Vec<(RequirementKey, usize)>,
    by_key: HashMap<String, usize>,
}

impl Lockfile {
    /// Create an empty lockfile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse yarn v1 lockfile text.
    ///
    /// The `# yarn lockfile v1` header is optional. Text with no entries at
    /// all is an empty lockfile.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::LockfileParseError`] for grammar problems,
    /// entries without a `version`, duplicate keys and berry (`__metadata`)
    /// lockfiles.
    pub fn parse(text: &str) -> Result<Self, YarnDepsError> {
        let body = strip_preamble(text);
        if body.trim().is_empty() {
            return Ok(Self::new());
        }
        if body.starts_with("__metadata:") {
            return Err(parse_error("only yarn v1 lockfiles are supported"));
        }

        let document = format!("{V1_HEADER}{body}");
        let parsed = yarn_lock_parser::parse_str(&document).map_err(|e| grammar_error(text, e))?;

        let mut lockfile = Self::new();
        for entry in &parsed.entries {
            let keys = entry
                .descriptors
                .iter()
                .map(|(name, requirement)| RequirementKey::new(*name, *requirement));
            lockfile.insert(keys, LockEntry::from_parsed(entry))?;
        }
        tracing::debug!("Parsed {} lockfile entries", parsed.entries.len());

        Ok(lockfile)
    }

    /// Add an entry under one or more requirement keys.
    ///
    /// # Errors
    ///
    /// Fails if any key is already present.
    pub fn insert(
        &mut self,
        keys: impl IntoIterator<Item = RequirementKey>,
        entry: LockEntry,
    ) -> Result<(), YarnDepsError> {
        let index = self.entries.len();
        self.entries.push(entry);
        for key in keys {
            let raw = key.to_string();
            if self.by_key.contains_key(&raw) {
                return Err(parse_error(format!("duplicate lockfile key '{raw}'")));
            }
            self.by_key.insert(raw, index);
            self.keys.push((key, index));
        }
        Ok(())
    }

    /// Look up the entry a requirement resolved to.
    pub fn get(&self, name: &str, requirement: &str) -> Option<&LockEntry> {
        self.by_key
            .get(&format!("{name}@{requirement}"))
            .map(|&index| &self.entries[index])
    }

    /// All keys with their entries, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&RequirementKey, &LockEntry)> {
        self.keys.iter().map(|(key, index)| (key, &self.entries[*index]))
    }

    /// Number of requirement keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the lockfile has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
