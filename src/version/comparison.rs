//! Semantic version comparison for locked package versions.
//!
//! Rule naming needs exactly one question answered: is some other locked version
//! of a package *newer* than this one? "Newer" follows semver precedence, so
//! pre-releases sort below their release and build metadata is ignored. This
//! matches what npm's `semver.gt` reports for the same pair.
//!
//! # Examples
//!
//! ```rust
//! use yarn_deps::version::comparison::VersionComparator;
//!
//! # fn example() -> Result<(), semver::Error> {
//! let release = VersionComparator::parse_version("v2.0.0")?;
//! let candidate = VersionComparator::parse_version("2.0.0-rc.1")?;
//! assert!(VersionComparator::is_newer(&release, &candidate));
//! assert!(!VersionComparator::is_newer(&candidate, &release));
//! # Ok(())
//! # }
//! ```

use semver::Version;
use std::cmp::Ordering;

/// Static helpers for comparing locked versions.
pub struct VersionComparator;

impl VersionComparator {
    /// Parse a locked version string.
    ///
    /// Surrounding whitespace and a single leading `v` or `=` are tolerated,
    /// as npm does when it cleans versions.
    ///
    /// # Errors
    ///
    /// Returns the `semver` error if what remains is not a valid version.
    pub fn parse_version(version_str: &str) -> Result<Version, semver::Error> {
        let trimmed = version_str.trim();
        let clean = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('='))
            .unwrap_or(trimmed);
        Version::parse(clean)
    }

    /// Order two versions by semver precedence, ignoring build metadata.
    pub fn precedence(a: &Version, b: &Version) -> Ordering {
        (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
    }

    /// Whether `candidate` is strictly newer than `current`.
    ///
    /// Versions that differ only in build metadata are equal, so neither is
    /// newer than the other.
    pub fn is_newer(candidate: &Version, current: &Version) -> bool {
        Self::precedence(candidate, current) == Ordering::Greater
    }
}
