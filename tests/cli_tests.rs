//! Integration tests for the snipgraph CLI
//!
//! These tests run the snipgraph binary against JSON snapshots written to
//! temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use serde_json::json;
use tempfile::{tempdir, TempDir};

/// Get a Command for snipgraph, isolated from the caller's environment
fn snipgraph(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("snipgraph");
    cmd.current_dir(dir)
        .env_remove("SNIPGRAPH_ITEMS")
        .env_remove("SNIPGRAPH_CONFIG")
        .env_remove("SNIPGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_items(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("items.json");
    let items = json!([
        {
            "id": "r1",
            "title": "Restart Docker",
            "type": "shell",
            "tags": ["docker", "ops"],
            "folder": "infra",
            "content": "docker restart staging container"
        },
        {
            "id": "r2",
            "title": "Docker logs",
            "type": "shell",
            "tags": ["docker", "ops"],
            "folder": null,
            "content": "docker logs follow staging container"
        },
        {
            "id": "r3",
            "title": "Sourdough",
            "type": "recipe",
            "tags": ["baking"],
            "folder": "kitchen",
            "description": "Weekend loaf",
            "content": "flour water salt levain"
        }
    ]);
    fs::write(&path, serde_json::to_string_pretty(&items).unwrap()).unwrap();
    path
}

// ============================================================================
// Help, version and argument errors
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: snipgraph"))
        .stdout(predicate::str::contains("dupes"))
        .stdout(predicate::str::contains("graph"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("snipgraph"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("snipgraph --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["--format", "yaml", "tokenize", "docker"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["--format", "json", "list", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_argument_json_usage_error() {
    let dir = tempdir().unwrap();
    let output = snipgraph(dir.path())
        .args(["--format=json", "score", "docker"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_missing_argument_human_error() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["score", "docker"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"error\"").not())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_item_type_rejected() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["list", "--type", "recipe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown item type"));
}

// ============================================================================
// tokenize / score
// ============================================================================

#[test]
fn test_tokenize_human() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["tokenize", "Restart the Docker container!!"])
        .assert()
        .success()
        .stdout("container docker restart\n");
}

#[test]
fn test_tokenize_json() {
    let dir = tempdir().unwrap();
    let output = snipgraph(dir.path())
        .args(["--format", "json", "tokenize", "a an the of is"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 0);
    assert_eq!(json["keywords"], json!([]));
}

#[test]
fn test_tokenize_records() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["--format", "records", "tokenize", "docker-compose up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H snipgraph=1 mode=tokenize count=2"))
        .stdout(predicate::str::contains("K compose"))
        .stdout(predicate::str::contains("K docker"));
}

#[test]
fn test_score_example() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["score", "docker restart staging", "docker staging prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.667"))
        .stdout(predicate::str::contains("shared: docker staging"));
}

#[test]
fn test_score_empty_side_is_zero() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["score", "", "docker staging"])
        .assert()
        .success()
        .stdout("0.000\n");
}

// ============================================================================
// dupes
// ============================================================================

#[test]
fn test_dupes_finds_matches() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["dupes", "Restart the Docker container!!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Possible duplicates:"))
        .stdout(predicate::str::contains("r1 [Shell Command] Restart Docker"))
        .stdout(predicate::str::contains("r2"))
        .stdout(predicate::str::contains("r3").not());
}

#[test]
fn test_dupes_exclude_self() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    let output = snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "json", "dupes", "Restart the Docker container!!"])
        .args(["--exclude", "r1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "matches");
    assert_eq!(json["proceed"], false);
    let ids: Vec<_> = json["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["r2"]);
}

#[test]
fn test_dupes_no_matches() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "records", "dupes", "kubectl rollout status"])
        .assert()
        .success()
        .stdout("H snipgraph=1 mode=dupes status=no_matches matches=0\n");
}

#[test]
fn test_dupes_missing_snapshot_still_succeeds() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["--items", "absent.json", "dupes", "docker restart"])
        .assert()
        .success()
        .stderr(predicate::str::contains("duplicate check skipped"));
}

#[test]
fn test_dupes_skipped_json_proceeds() {
    let dir = tempdir().unwrap();
    let output = snipgraph(dir.path())
        .args(["--items", "absent.json", "--format", "json", "dupes", "docker restart"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "skipped");
    assert_eq!(json["proceed"], true);
    assert!(json["reason"].is_string());
}

#[test]
fn test_dupes_no_matches_json_proceeds() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    let output = snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "json", "dupes", "kubectl rollout status"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "no_matches");
    assert_eq!(json["proceed"], true);
}

#[test]
fn test_dupes_without_items_source_is_usage_error() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["dupes", "docker restart"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no items file"));
}

// ============================================================================
// graph
// ============================================================================

#[test]
fn test_graph_records() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "records", "graph", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H snipgraph=1 mode=graph nodes=3 edges=1",
        ))
        .stdout(predicate::str::contains("E r1 r2 weight=0.690"))
        .stdout(predicate::str::contains("color=#868e96"));
}

#[test]
fn test_graph_json_is_reproducible_with_seed() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    let run = || {
        snipgraph(dir.path())
            .arg("--items")
            .arg(&items)
            .args(["--format", "json", "graph", "--seed", "42"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let json: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(json["edges"].as_array().unwrap().len(), 1);
    assert_eq!(json["legend"].as_array().unwrap().len(), 4);
    for node in json["nodes"].as_array().unwrap() {
        let x = node["x"].as_f64().unwrap();
        assert!((0.0..100.0).contains(&x));
    }
}

#[test]
fn test_graph_filtered_by_folder() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["graph", "--folder", "infra"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 nodes, 0 edges"));
}

#[test]
fn test_graph_edge_threshold_from_config() {
    let dir = tempdir().unwrap();
    write_items(&dir);
    fs::write(
        dir.path().join("snipgraph.toml"),
        "items_file = \"items.json\"\n\n[graph]\nedge_threshold = 0.9\n",
    )
    .unwrap();

    snipgraph(dir.path())
        .args(["graph", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 nodes, 0 edges"));
}

// ============================================================================
// list / tags / folders
// ============================================================================

#[test]
fn test_list_by_tag() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["list", "--tag", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r1 [shell] Restart Docker  #docker #ops"))
        .stdout(predicate::str::contains("r2"))
        .stdout(predicate::str::contains("r3").not());
}

#[test]
fn test_list_query_matches_description() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "records", "list", "--query", "WEEKEND"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H snipgraph=1 mode=list count=1"))
        .stdout(predicate::str::contains(
            "I r3 recipe \"Sourdough\" tags=baking folder=\"kitchen\"",
        ));
}

#[test]
fn test_list_whitespace_query_is_literal() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "records", "list", "--query", " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("H snipgraph=1 mode=list count=3"));

    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["list", "--query", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found"));
}

#[test]
fn test_list_snapshot_with_null_metadata() {
    let dir = tempdir().unwrap();
    let items = json!([
        {
            "id": "n1",
            "title": "Null fields",
            "type": "note",
            "file_path": null,
            "file_hash": null,
            "created": null,
            "modified": null,
            "tags": ["ops", null]
        }
    ]);
    fs::write(dir.path().join("items.json"), items.to_string()).unwrap();
    snipgraph(dir.path())
        .args(["--items", "items.json", "--format", "records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I n1 note \"Null fields\" tags=ops"));
}

#[test]
fn test_list_missing_snapshot_exit_code_3() {
    let dir = tempdir().unwrap();
    snipgraph(dir.path())
        .args(["--items", "absent.json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("items source not found"));
}

#[test]
fn test_list_invalid_snapshot_json_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("items.json"), "{ not json").unwrap();
    snipgraph(dir.path())
        .args(["--items", "items.json", "--format", "json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_items\""));
}

#[test]
fn test_tags_and_folders() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .arg("tags")
        .assert()
        .success()
        .stdout("baking\ndocker\nops\n");

    snipgraph(dir.path())
        .arg("--items")
        .arg(&items)
        .args(["--format", "json", "folders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"infra\""))
        .stdout(predicate::str::contains("\"kitchen\""));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_invalid_config_exit_code_2() {
    let dir = tempdir().unwrap();
    write_items(&dir);
    fs::write(
        dir.path().join("custom.toml"),
        "items_file = \"items.json\"\n\n[duplicates]\nthreshold = 2.0\n",
    )
    .unwrap();

    snipgraph(dir.path())
        .args(["--config", "custom.toml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicates.threshold"));
}

#[test]
fn test_items_from_env() {
    let dir = tempdir().unwrap();
    let items = write_items(&dir);
    snipgraph(dir.path())
        .env("SNIPGRAPH_ITEMS", &items)
        .args(["--format", "records", "list", "--type", "shell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count=2"));
}
