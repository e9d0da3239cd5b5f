//! Test fixtures for lockfiles and `yarn list` output
//!
//! Each fixture is a small, self-consistent input used by unit tests across
//! modules. Integration tests reach them through the `test-utils` feature.

/// Test fixture for sample yarn.lock files
#[derive(Clone, Debug)]
pub struct LockfileFixture {
    pub content: String,
    pub name: String,
}

impl LockfileFixture {
    /// Two packages, `root@1.0.0` depending on `leaf@^1.0.0`
    pub fn two_packages() -> Self {
        Self {
            name: "two_packages".to_string(),
            content: r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


leaf@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/leaf/-/leaf-1.0.0.tgz"

root@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/root/-/root-1.0.0.tgz"
  dependencies:
    leaf "^1.0.0"
"#
            .to_string(),
        }
    }

    /// A small slice of a real lockfile: shared keys, a scoped package and an
    /// optional dependency
    pub fn realistic() -> Self {
        Self {
            name: "realistic".to_string(),
            content: r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


"@babel/highlight@^7.10.4", "@babel/highlight@^7.8.3":
  version "7.10.4"
  resolved "https://registry.yarnpkg.com/@babel/highlight/-/highlight-7.10.4.tgz#7d1bdfd65753538fabe6c38596cdb76d9ac60143"
  integrity sha512-i6rgnR/YgPEQzZZnbTHHuZdlE8qyoBNalD6F+q4vAFlcMEcqmkoG+mPqJYJCo63qPf74+Y1UZsl3l6f7/RIkmA==
  dependencies:
    chalk "^2.0.0"
    js-tokens "^4.0.0"

chalk@^2.0.0:
  version "2.4.2"
  resolved "https://registry.yarnpkg.com/chalk/-/chalk-2.4.2.tgz#cd42541677a54333cf541a49108c1432b44c9424"
  integrity sha512-Mti+f9lpJNcwF4tWV8/OrTTtF1gZi+f8FqlyAdouralcFWFQWF2+NgCHShjkCb+IFBLq9buZwE1xckQU4peSuw==

chokidar@^3.4.0:
  version "3.4.3"
  resolved "https://registry.yarnpkg.com/chokidar/-/chokidar-3.4.3.tgz#c1df38231448e45ca4ac588e6c79573ba6a57d5b"
  optionalDependencies:
    fsevents "~2.1.2"

fsevents@~2.1.2:
  version "2.1.3"
  resolved "https://registry.yarnpkg.com/fsevents/-/fsevents-2.1.3.tgz#fb738703ae8d2f9fe900c33836ddebee8b97f23e"

js-tokens@^4.0.0:
  version "4.0.0"
  resolved "https://registry.yarnpkg.com/js-tokens/-/js-tokens-4.0.0.tgz#19203fb59991df98e3a287050d4647cdeaf32499"
"#
            .to_string(),
        }
    }

    /// `a@1.0.0` depends on `b@^1.0.0`, which depends back on `a@^1.0.0`
    pub fn cycle() -> Self {
        Self {
            name: "cycle".to_string(),
            content: r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


a@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/a/-/a-1.0.0.tgz"
  dependencies:
    b "^1.0.0"

b@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/b/-/b-1.0.0.tgz"
  dependencies:
    a "^1.0.0"
"#
            .to_string(),
        }
    }

    /// `foo` locked at 1.0.0 and 2.0.0, plus a scoped package
    pub fn multi_version() -> Self {
        Self {
            name: "multi_version".to_string(),
            content: r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


foo@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/foo/-/foo-1.0.0.tgz"

foo@^2.0.0, foo@latest:
  version "2.0.0"
  resolved "https://registry.yarnpkg.com/foo/-/foo-2.0.0.tgz"

"@scope/pkg@^1.0.0":
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/@scope/pkg/-/pkg-1.0.0.tgz"
  dependencies:
    foo "^1.0.0"

bar@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/bar/-/bar-1.0.0.tgz"
  dependencies:
    foo "^2.0.0"
    "@scope/pkg" "^1.0.0"
"#
            .to_string(),
        }
    }

    /// `root` requires `leaf@^2.0.0`, which the lockfile does not contain
    pub fn missing_entry() -> Self {
        Self {
            name: "missing_entry".to_string(),
            content: r#"# THIS IS AN AUTOGENERATED FILE. DO NOT EDIT THIS FILE DIRECTLY.
# yarn lockfile v1


leaf@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/leaf/-/leaf-1.0.0.tgz"

root@^1.0.0:
  version "1.0.0"
  resolved "https://registry.yarnpkg.com/root/-/root-1.0.0.tgz"
  dependencies:
    leaf "^2.0.0"
"#
            .to_string(),
        }
    }
}

/// Test fixture for `yarn list --json` output
#[derive(Clone, Debug)]
pub struct TreeFixture {
    pub content: String,
    pub name: String,
}

impl TreeFixture {
    /// `app` and `util` at top level, `util` and `lodash` depending on each other
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"{
  "type": "tree",
  "data": {
    "type": "list",
    "trees": [
      {"name": "app@1.0.0", "color": "bold", "children": [{"name": "util@2.1.0"}, {"name": "@types/node@14.0.0"}]},
      {"name": "util@2.1.0", "color": "bold", "children": [{"name": "lodash@4.17.20"}]},
      {"name": "lodash@4.17.20", "children": [{"name": "util@2.1.0"}]},
      {"name": "@types/node@14.0.0", "children": []}
    ]
  }
}"#
            .to_string(),
        }
    }
}
