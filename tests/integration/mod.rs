//! Integration test suite for yarn_deps
//!
//! These tests drive the compiled binary end to end: lockfile text in on
//! stdin (or from a path), build file text out on stdout, diagnostics and
//! failures on stderr.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: build file output, naming and determinism
//! - **errors**: failure reporting and the no-partial-output guarantee
//! - **config**: `--config` overrides
//! - **tree**: the `yarn list --json` converter

#[path = "../common/mod.rs"]
mod common;

mod config;
mod errors;
mod generate;
mod tree;
