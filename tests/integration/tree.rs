use predicates::prelude::*;
use tempfile::TempDir;
use yarn_deps::test_utils::TreeFixture;

use crate::common::{write_file, yarn_deps};

#[test]
fn test_tree_from_stdin() {
    yarn_deps()
        .arg("tree")
        .write_stdin(TreeFixture::basic().content)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\nyarn_library(\n    name = '@types-node',"))
        .stdout(predicate::str::contains(
            "yarn_library(\n    name = 'lodash',\n    version = '4.17.20',\n)\n",
        ));
}

#[test]
fn test_tree_from_input_path() {
    let temp = TempDir::new().unwrap();
    let input = write_file(temp.path(), "list.json", &TreeFixture::basic().content);

    yarn_deps()
        .args(["tree", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("        ':util',\n        ':@types-node',\n"));
}

#[test]
fn test_tree_ignores_build_file_config() {
    yarn_deps()
        .args(["--config", "/no/such/yarn_deps.toml", "tree"])
        .write_stdin(TreeFixture::basic().content)
        .assert()
        .success();
}

#[test]
fn test_tree_unknown_child() {
    let json = r#"{"data": {"trees": [
        {"name": "a@1.0.0", "color": "bold", "children": [{"name": "ghost@1.0.0"}]}
    ]}}"#;

    yarn_deps()
        .arg("tree")
        .write_stdin(json)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'ghost' is referenced by 'a'"));
}

#[test]
fn test_tree_invalid_json() {
    yarn_deps()
        .arg("tree")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid yarn list output"));
}
