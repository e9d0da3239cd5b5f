//! Common helpers for yarn_deps integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// A `yarn_deps` command isolated from the caller's environment.
pub fn yarn_deps() -> Command {
    let mut cmd = Command::cargo_bin("yarn_deps").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Expected output for the two-package lockfile with the default config.
pub const TWO_PACKAGES_BUILD: &str = "\
# This file was autogenerated by yarn_deps from a yarn.lock file. Do not modify.

subinclude('//js:yarn')
package(default_visibility = ['PUBLIC'])


yarn_module(
    name = 'leaf',
    out = 'leaf-1.0.0.tgz',
    resolved_by = 'https://registry.yarnpkg.com/leaf/-/leaf-1.0.0.tgz',
    version = '1.0.0',
)

yarn_module(
    name = 'root',
    out = 'root-1.0.0.tgz',
    resolved_by = 'https://registry.yarnpkg.com/root/-/root-1.0.0.tgz',
    version = '1.0.0',
    deps = [
        ':_leaf#download',
    ],
)
";
