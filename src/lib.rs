//! yarn-deps - compile a yarn.lock file into build rules
//!
//! Reads a yarn v1 (classic) lockfile and produces a Please build file with
//! one `yarn_module` rule per locked package version. Every rule lists the
//! *complete* transitive closure of its dependencies, so a build action only
//! ever needs the archives named in its own rule.
//!
//! # Architecture Overview
//!
//! The tool is a single synchronous pipeline:
//!
//! ```text
//! yarn.lock text
//!   -> lockfile::Lockfile          (key -> entry, file order kept)
//!   -> version::VersionIndex       (name@version -> entry, name -> versions)
//!   -> resolver::Resolver          (rule names, transitive closures)
//!   -> buildfile::BuildFile        (one rule per name@version)
//!   -> render(config)              (text, written to stdout in one piece)
//! ```
//!
//! Every stage fails with a typed [`core::YarnDepsError`]. Nothing is written
//! until the whole file has been generated.
//!
//! # Core Modules
//!
//! - [`lockfile`] - yarn v1 lockfile parsing
//! - [`version`] - semantic version comparison and the version index
//! - [`resolver`] - rule naming and dependency closure computation
//! - [`buildfile`] - rule generation and rendering
//! - [`config`] - build file preamble and label conventions
//! - [`tree`] - the older `yarn list --json` converter
//! - [`cli`] - command-line interface
//! - [`core`] - error types and user-facing error reporting
//!
//! # Rule Naming
//!
//! Names have every `/` replaced with `-` (`@babel/core` becomes
//! `@babel-core`). When a package is locked at several versions, the newest
//! keeps the bare name and the others are suffixed with their version:
//!
//! ```text
//! foo        # 2.0.0
//! foo-1.0.0
//! ```
//!
//! # Example
//!
//! ```rust
//! use yarn_deps::cli::generate_build_file;
//! use yarn_deps::config::BuildFileConfig;
//! use yarn_deps::lockfile::Lockfile;
//!
//! # fn example() -> anyhow::Result<()> {
//! let lockfile = Lockfile::parse(
//!     r#"
//! leaf@^1.0.0:
//!   version "1.0.0"
//!   resolved "https://registry.yarnpkg.com/leaf/-/leaf-1.0.0.tgz"
//!
//! root@^1.0.0:
//!   version "1.0.0"
//!   resolved "https://registry.yarnpkg.com/root/-/root-1.0.0.tgz"
//!   dependencies:
//!     leaf "^1.0.0"
//! "#,
//! )?;
//!
//! let text = generate_build_file(&lockfile, &BuildFileConfig::default())?;
//! assert!(text.contains("':_leaf#download',"));
//! # Ok(())
//! # }
//! ```

pub mod buildfile;
pub mod cli;
pub mod config;
pub mod core;
pub mod lockfile;
pub mod resolver;
pub mod tree;
pub mod version;

// test_utils is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
