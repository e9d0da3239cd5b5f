use predicates::prelude::*;
use tempfile::TempDir;
use yarn_deps::test_utils::LockfileFixture;

use crate::common::{TWO_PACKAGES_BUILD, write_file, yarn_deps};

const CUSTOM_CONFIG: &str = r#"
subinclude = "//build_defs:yarn"
default_visibility = ["//web/..."]
"#;

#[test]
fn test_config_flag_overrides_preamble() {
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "yarn_deps.toml", CUSTOM_CONFIG);

    yarn_deps()
        .arg("--config")
        .arg(&config)
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .success()
        .stdout(predicate::str::contains("subinclude('//build_defs:yarn')\n"))
        .stdout(predicate::str::contains("package(default_visibility = ['//web/...'])\n"))
        .stdout(predicate::str::contains("        ':_leaf#download',"));
}

#[test]
fn test_bare_invocation_ignores_environment_config() {
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "yarn_deps.toml", "rule_kind = \"npm_module\"\n");

    yarn_deps()
        .env("YARN_DEPS_CONFIG", &config)
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .success()
        .stdout(TWO_PACKAGES_BUILD);
}

#[test]
fn test_empty_config_matches_defaults() {
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "yarn_deps.toml", "");

    yarn_deps()
        .arg("-c")
        .arg(&config)
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .success()
        .stdout(TWO_PACKAGES_BUILD);
}

#[test]
fn test_unknown_config_key_fails() {
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "yarn_deps.toml", "visibility = [\"PUBLIC\"]\n");

    yarn_deps()
        .arg("--config")
        .arg(&config)
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file_fails() {
    yarn_deps()
        .args(["--config", "/no/such/yarn_deps.toml"])
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
