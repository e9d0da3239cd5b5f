use predicates::prelude::*;
use yarn_deps::test_utils::LockfileFixture;

use crate::common::yarn_deps;

#[test]
fn test_missing_entry_writes_nothing_to_stdout() {
    yarn_deps()
        .write_stdin(LockfileFixture::missing_entry().content)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No lockfile entry for requirement 'leaf@^2.0.0'"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_malformed_lockfile_is_rejected() {
    yarn_deps()
        .write_stdin("# yarn lockfile v1\n\n\nthis is not a lockfile\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid lockfile:"));
}

#[test]
fn test_entry_without_version_is_rejected() {
    yarn_deps()
        .write_stdin("foo@^1.0.0:\n  resolved \"https://registry.yarnpkg.com/foo/-/foo-1.0.0.tgz\"\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("version is empty for an entry"));
}

#[test]
fn test_berry_lockfile_is_rejected() {
    yarn_deps()
        .write_stdin("__metadata:\n  version: 6\n\n\"foo@npm:^1.0.0\":\n  version: 1.0.0\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("only yarn v1 lockfiles are supported"));
}

#[test]
fn test_invalid_version_is_rejected() {
    yarn_deps()
        .write_stdin(
            "foo@^1.0.0:\n  version \"one\"\n  resolved \"https://registry.yarnpkg.com/foo/-/foo-1.tgz\"\n",
        )
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'foo' is locked at 'one'"));
}

#[test]
fn test_missing_lockfile_path() {
    yarn_deps()
        .args(["generate", "--lockfile", "/no/such/dir/yarn.lock"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot read lockfile"));
}

#[test]
fn test_verbose_and_quiet_are_exclusive() {
    yarn_deps().args(["--verbose", "--quiet"]).write_stdin("").assert().failure();
}
