//! Build rule names for locked packages.
//!
//! The newest locked version of a package gets the bare package name, so
//! hand-written rules can depend on `:_left-pad#download` without knowing the
//! version. Every older version is suffixed with its version. Scoped package
//! names keep their leading `@` but have the `/` replaced, since build labels
//! cannot contain it.

use semver::Version;

use crate::version::VersionSet;

/// Replace path separators in a package name with `-`.
///
/// ```rust
/// use yarn_deps::resolver::naming::normalize_name;
///
/// assert_eq!(normalize_name("@babel/core"), "@babel-core");
/// assert_eq!(normalize_name("lodash"), "lodash");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.replace('/', "-")
}

/// Rule name for `name` at `version`, given every version locked for `name`.
///
/// `parsed` is the semver form of `version`.
pub fn rule_name(name: &str, version: &str, parsed: &Version, versions: &VersionSet) -> String {
    let normalized = normalize_name(name);
    if versions.has_newer_than(parsed) {
        format!("{normalized}-{version}")
    } else {
        normalized
    }
}

/// File name of the downloaded tarball, e.g. `@scope-pkg-1.0.0.tgz`.
pub fn archive_name(name: &str, version: &str) -> String {
    format!("{}-{version}.tgz", normalize_name(name))
}
