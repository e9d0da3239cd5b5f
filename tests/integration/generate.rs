use predicates::prelude::*;
use tempfile::TempDir;
use yarn_deps::test_utils::LockfileFixture;

use crate::common::{TWO_PACKAGES_BUILD, write_file, yarn_deps};

#[test]
fn test_two_packages_from_stdin() {
    yarn_deps()
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .success()
        .stdout(TWO_PACKAGES_BUILD);
}

#[test]
fn test_generate_subcommand_matches_bare_invocation() {
    yarn_deps()
        .arg("generate")
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .success()
        .stdout(TWO_PACKAGES_BUILD);
}

#[test]
fn test_generate_from_lockfile_path() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "yarn.lock", &LockfileFixture::two_packages().content);

    yarn_deps()
        .args(["generate", "--lockfile"])
        .arg(&path)
        .assert()
        .success()
        .stdout(TWO_PACKAGES_BUILD);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let content = LockfileFixture::realistic().content;

    let first = yarn_deps().write_stdin(content.clone()).output().unwrap();
    let second = yarn_deps().write_stdin(content).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_older_versions_get_suffixed_names() {
    yarn_deps()
        .write_stdin(LockfileFixture::multi_version().content)
        .assert()
        .success()
        .stdout(predicate::str::contains("    name = 'foo',\n    out = 'foo-2.0.0.tgz',"))
        .stdout(predicate::str::contains("    name = 'foo-1.0.0',\n    out = 'foo-1.0.0.tgz',"))
        .stdout(predicate::str::contains("        ':_foo-1.0.0#download',"));
}

#[test]
fn test_scoped_names_are_normalized() {
    yarn_deps()
        .write_stdin(LockfileFixture::realistic().content)
        .assert()
        .success()
        .stdout(predicate::str::contains("    name = '@babel-highlight',"))
        .stdout(predicate::str::contains("    out = '@babel-highlight-7.10.4.tgz',"))
        .stdout(predicate::str::contains("@babel/highlight'").not());
}

#[test]
fn test_cycle_terminates_and_lists_both_sides() {
    let output = yarn_deps()
        .write_stdin(LockfileFixture::cycle().content)
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("    name = 'a',"));
    assert!(text.contains("        ':_b#download',"));
    assert!(text.contains("        ':_a#download',"));
}

#[test]
fn test_transitive_dependencies_are_listed() {
    let lockfile = r#"a@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/a/-/a-1.0.0.tgz"
  dependencies:
    b "^1.0.0"

b@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/b/-/b-1.0.0.tgz"
  dependencies:
    c "^1.0.0"

c@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/c/-/c-1.0.0.tgz"
"#;

    yarn_deps().write_stdin(lockfile).assert().success().stdout(predicate::str::contains(
        "    name = 'a',\n    out = 'a-1.0.0.tgz',\n    resolved_by = 'https://registry.yarnpkg.com/a/-/a-1.0.0.tgz',\n    version = '1.0.0',\n    deps = [\n        ':_b#download',\n        ':_c#download',\n    ],\n",
    ));
}

#[test]
fn test_local_package_without_resolved_field() {
    let lockfile = r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


app@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/app/-/app-1.0.0.tgz"
  dependencies:
    local "file:./local"

"local@file:./local":
  version "1.0.0"
"#;

    yarn_deps()
        .write_stdin(lockfile)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    name = 'local',\n    out = 'local-1.0.0.tgz',\n    resolved_by = 'file:./local',\n",
        ))
        .stdout(predicate::str::contains("        ':_local#download',"));
}

#[test]
fn test_empty_lockfile_yields_preamble() {
    yarn_deps()
        .write_stdin("# yarn lockfile v1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# This file was autogenerated by yarn_deps from a yarn.lock file. Do not modify.\n",
        ))
        .stdout(predicate::str::contains("yarn_module").not());
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    yarn_deps()
        .arg("--verbose")
        .write_stdin(LockfileFixture::two_packages().content)
        .assert()
        .success()
        .stdout(TWO_PACKAGES_BUILD)
        .stderr(predicate::str::contains("Generated 2 rules"));
}
