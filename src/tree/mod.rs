//! Build rules from `yarn list --json` output.
//!
//! This is the older way of producing rules: instead of a lockfile it reads the
//! dependency tree yarn prints for an installed project and emits one
//! `yarn_library` rule per package, listing only *direct* children. It only
//! works well for flat installs (`yarn install --flat`), where every package
//! appears exactly once at the top of the listing.
//!
//! ```bash
//! yarn list --json | yarn_deps tree >> third_party/js/BUILD
//! ```
//!
//! Build systems reject cyclic rule graphs, so before rendering, every tree
//! yarn marks as a top-level dependency (`"color": "bold"`) is walked depth
//! first and children that already appear on the current path are dropped.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::core::YarnDepsError;
use crate::lockfile::RequirementKey;
use crate::resolver::naming::normalize_name;

#[derive(Debug, Deserialize)]
struct ListOutput {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    trees: Vec<TreeNode>,
}

#[derive(Debug, Deserialize)]
struct TreeNode {
    name: String,
    #[serde(default)]
    children: Vec<TreeNode>,
    #[serde(default)]
    color: Option<String>,
}

/// One package from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    /// Installed version
    pub version: String,
    /// Names of direct children
    pub deps: Vec<String>,
}

/// Every package from a `yarn list --json` document.
#[derive(Debug, Clone, Default)]
pub struct LibraryTree {
    libraries: BTreeMap<String, Library>,
    roots: Vec<String>,
}

/// Split `name@version`; a missing version becomes empty.
fn split_name(raw: &str) -> (String, String) {
    match RequirementKey::parse(raw) {
        Some(key) => (key.name, key.requirement),
        None => (raw.to_string(), String::new()),
    }
}

impl LibraryTree {
    /// Read the JSON document printed by `yarn list --json`.
    ///
    /// When a package is listed more than once, the last listing wins.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::TreeParseError`] if the document is not JSON
    /// or has no `data.trees` array.
    pub fn from_json(json: &str) -> Result<Self, YarnDepsError> {
        let output: ListOutput =
            serde_json::from_str(json).map_err(|e| YarnDepsError::TreeParseError {
                reason: e.to_string(),
            })?;

        let mut tree = Self::default();
        for node in output.data.trees {
            let (name, version) = split_name(&node.name);
            let deps = node.children.iter().map(|child| split_name(&child.name).0).collect();
            if node.color.as_deref() == Some("bold") {
                tree.roots.push(name.clone());
            }
            tree.libraries.insert(name, Library {
                version,
                deps,
            });
        }

        tracing::debug!(
            "Read {} packages, {} top-level",
            tree.libraries.len(),
            tree.roots.len()
        );
        Ok(tree)
    }

    /// Drop children that would close a cycle, walking from each top-level
    /// package in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`YarnDepsError::UnknownPackage`] when a child reached by the
    /// walk has no listing of its own.
    pub fn prune_cycles(&mut self) -> Result<(), YarnDepsError> {
        let roots = self.roots.clone();
        for root in roots {
            let mut path = Vec::new();
            self.prune_from(&root, &mut path)?;
        }
        Ok(())
    }

    fn prune_from(&mut self, name: &str, path: &mut Vec<String>) -> Result<(), YarnDepsError> {
        let deps = match self.libraries.get(name) {
            Some(library) => library.deps.clone(),
            None => return Ok(()),
        };

        path.push(name.to_string());
        let mut kept = Vec::with_capacity(deps.len());
        for dep in deps {
            if path.contains(&dep) {
                tracing::debug!("Dropping {name} -> {dep}, it would close a cycle");
                continue;
            }
            if !self.libraries.contains_key(&dep) {
                return Err(YarnDepsError::UnknownPackage {
                    name: dep,
                    parent: name.to_string(),
                });
            }
            self.prune_from(&dep, path)?;
            kept.push(dep);
        }
        path.pop();

        if let Some(library) = self.libraries.get_mut(name) {
            library.deps = kept;
        }
        Ok(())
    }

    /// Look up a package.
    pub fn get(&self, name: &str) -> Option<&Library> {
        self.libraries.get(name)
    }

    /// Render one `yarn_library` rule per package, sorted by name.
    pub fn render(&self) -> String {
        Rendered(self).to_string()
    }
}

struct Rendered<'a>(&'a LibraryTree);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, library) in &self.0.libraries {
            writeln!(f)?;
            writeln!(f, "yarn_library(")?;
            writeln!(f, "    name = '{}',", normalize_name(name))?;
            writeln!(f, "    version = '{}',", library.version)?;
            if !library.deps.is_empty() {
                writeln!(f, "    deps = [")?;
                for dep in &library.deps {
                    writeln!(f, "        ':{}',", normalize_name(dep))?;
                }
                writeln!(f, "    ],")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TreeFixture;

    #[test]
    fn test_from_json_reads_packages() {
        let tree = LibraryTree::from_json(&TreeFixture::basic().content).unwrap();

        let app = tree.get("app").unwrap();
        assert_eq!(app.version, "1.0.0");
        assert_eq!(app.deps, vec!["util", "@types/node"]);
        assert_eq!(tree.get("@types/node").unwrap().version, "14.0.0");
    }

    #[test]
    fn test_prune_cycles_drops_back_edges() {
        let mut tree = LibraryTree::from_json(&TreeFixture::basic().content).unwrap();
        tree.prune_cycles().unwrap();

        // app -> util -> lodash -> util is cut at lodash
        assert!(tree.get("lodash").unwrap().deps.is_empty());
        assert_eq!(tree.get("util").unwrap().deps, vec!["lodash"]);
        assert_eq!(tree.get("app").unwrap().deps, vec!["util", "@types/node"]);
    }

    #[test]
    fn test_non_root_cycles_are_left_alone() {
        let json = r#"{"data": {"trees": [
            {"name": "a@1.0.0", "children": [{"name": "b@1.0.0"}]},
            {"name": "b@1.0.0", "children": [{"name": "a@1.0.0"}]}
        ]}}"#;
        let mut tree = LibraryTree::from_json(json).unwrap();
        tree.prune_cycles().unwrap();
        assert_eq!(tree.get("b").unwrap().deps, vec!["a"]);
    }

    #[test]
    fn test_unknown_child_is_an_error() {
        let json = r#"{"data": {"trees": [
            {"name": "a@1.0.0", "color": "bold", "children": [{"name": "ghost@1.0.0"}]}
        ]}}"#;
        let mut tree = LibraryTree::from_json(json).unwrap();
        let err = tree.prune_cycles().unwrap_err();
        assert_eq!(
            err,
            YarnDepsError::UnknownPackage {
                name: "ghost".to_string(),
                parent: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = LibraryTree::from_json("{\"data\": {}}").unwrap_err();
        assert!(matches!(err, YarnDepsError::TreeParseError { .. }));
        assert!(LibraryTree::from_json("not json").is_err());
    }

    #[test]
    fn test_render_sorted_with_and_without_deps() {
        let mut tree = LibraryTree::from_json(&TreeFixture::basic().content).unwrap();
        tree.prune_cycles().unwrap();

        let expected = "
yarn_library(
    name = '@types-node',
    version = '14.0.0',
)

yarn_library(
    name = 'app',
    version = '1.0.0',
    deps = [
        ':util',
        ':@types-node',
    ],
)

yarn_library(
    name = 'lodash',
    version = '4.17.20',
)

yarn_library(
    name = 'util',
    version = '2.1.0',
    deps = [
        ':lodash',
    ],
)
";
        assert_eq!(tree.render(), expected);
    }
}
