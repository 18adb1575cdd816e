//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary and check its output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

/// Get a Command for graphwalk
fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env_remove("GRAPHWALK_GRAPH").env_remove("GRAPHWALK_LOG");
    cmd
}

fn stdout_json(args: &[&str]) -> Value {
    let output = graphwalk().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn order(json: &Value) -> Vec<i64> {
    json["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_version_flag() {
    graphwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

#[test]
fn test_no_command_prints_banner() {
    graphwalk()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk --help"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_default_preset() {
    graphwalk()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjacency list:"))
        .stdout(predicate::str::contains("  Vertex 0: 1 2"))
        .stdout(predicate::str::contains("  Vertex 4: 2 3 5"))
        .stdout(predicate::str::contains("Edges:"))
        .stdout(predicate::str::contains("  3 --- 4"))
        .stdout(predicate::str::contains("6 vertices, 6 edges (undirected)"));
}

#[test]
fn test_show_directed_edges() {
    graphwalk()
        .args(["--directed", "--edge", "0,1", "--edge", "2,0", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  0 --> 1"))
        .stdout(predicate::str::contains("  2 --> 0"))
        .stdout(predicate::str::contains("  Vertex 1: -"));
}

#[test]
fn test_show_records() {
    graphwalk()
        .args(["--format", "records", "--edge", "0,1", "--vertex", "5", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H graphwalk=1 records=1 mode=show directed=false vertices=3 edges=1",
        ))
        .stdout(predicate::str::contains("A 0 1"))
        .stdout(predicate::str::contains("A 5 -"))
        .stdout(predicate::str::contains("E 0 1"));
}

#[test]
fn test_show_json() {
    let json = stdout_json(&["--format", "json", "--preset", "visual", "show"]);
    assert_eq!(json["directed"], false);
    assert_eq!(json["vertices"].as_array().unwrap().len(), 10);
    assert_eq!(json["edges"].as_array().unwrap().len(), 15);
    assert_eq!(json["adjacency"][0]["vertex"], 0);
    assert_eq!(json["adjacency"][0]["neighbors"], serde_json::json!([3, 7, 8]));
}

// ============================================================================
// dfs / bfs / traverse
// ============================================================================

#[test]
fn test_dfs_human_output() {
    graphwalk()
        .args(["dfs", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS from vertex 0"))
        .stdout(predicate::str::contains("Step 1: visited vertex 0\n"))
        .stdout(predicate::str::contains("Step 2: visited vertex 1 (from 0)"))
        .stdout(predicate::str::contains("Step 6: visited vertex 5 (from 4)"))
        .stdout(predicate::str::contains("  stack: 2"))
        .stdout(predicate::str::contains(
            "DFS complete: 6 vertices visited in 1 component\n",
        ));
}

#[test]
fn test_bfs_human_output() {
    graphwalk()
        .args(["bfs", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from vertex 0"))
        .stdout(predicate::str::contains("Step 3: visited vertex 2 (from 0)"))
        .stdout(predicate::str::contains("  queue: 3"))
        .stdout(predicate::str::contains("BFS complete"));
}

#[test]
fn test_dfs_json_order() {
    let json = stdout_json(&["--format", "json", "dfs", "0"]);
    assert_eq!(order(&json), vec![0, 1, 3, 4, 2, 5]);
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["cancelled"], false);
    assert_eq!(json["stats"]["steps"], 6);
}

#[test]
fn test_bfs_json_order() {
    let json = stdout_json(&["--format", "json", "bfs", "0"]);
    assert_eq!(order(&json), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(json["events"][0]["event"], "visited");
    assert_eq!(json["events"][0]["depth"], 0);
}

#[test]
fn test_isolated_vertex_new_component() {
    graphwalk()
        .args(["--preset", "console", "--vertex", "9", "bfs", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New component: starting at vertex 9"))
        .stdout(predicate::str::contains("Step 7: visited vertex 9\n"))
        .stdout(predicate::str::contains("in 2 components"));
}

#[test]
fn test_no_sweep_stops_after_start_component() {
    let json = stdout_json(&[
        "--format",
        "json",
        "--preset",
        "console",
        "--vertex",
        "9",
        "dfs",
        "0",
        "--no-sweep",
    ]);
    assert_eq!(order(&json), vec![0, 1, 3, 4, 2, 5]);
}

#[test]
fn test_traverse_with_algorithm_flag() {
    let json = stdout_json(&[
        "--format",
        "json",
        "--preset",
        "visual",
        "traverse",
        "0",
        "--algorithm",
        "bfs",
    ]);
    assert_eq!(order(&json), vec![0, 3, 7, 8, 4, 9, 5, 2, 1, 6]);
}

#[test]
fn test_directed_traversal_sweeps_remaining_vertices() {
    let json = stdout_json(&[
        "--format", "json", "--directed", "--edge", "0,1", "--edge", "1,2", "--edge", "2,3",
        "dfs", "2",
    ]);
    assert_eq!(order(&json), vec![2, 3, 0, 1]);
    assert_eq!(json["components"], serde_json::json!([[2, 3], [0, 1]]));
}

#[test]
fn test_negative_vertex_ids() {
    let json = stdout_json(&["--format", "json", "--edge", "-1,2", "bfs", "-1"]);
    assert_eq!(order(&json), vec![-1, 2]);
}

#[test]
fn test_traversal_records() {
    graphwalk()
        .args(["--format", "records", "--edge", "0,1", "--vertex", "9", "dfs", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H graphwalk=1 records=1 mode=traverse algorithm=dfs start=0",
        ))
        .stdout(predicate::str::contains("V 1 0 - 0 0 -"))
        .stdout(predicate::str::contains("V 2 1 0 1 0 -"))
        .stdout(predicate::str::contains("C 1 9"))
        .stdout(predicate::str::contains("V 3 9 - 0 1 -"))
        .stdout(predicate::str::contains("S steps=3 components=2"));
}

#[test]
fn test_quiet_hides_frontier_and_summary() {
    graphwalk()
        .args(["--quiet", "dfs", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: visited vertex 0"))
        .stdout(predicate::str::contains("stack:").not())
        .stdout(predicate::str::contains("complete").not());
}

#[test]
fn test_no_frontier_hides_stack_line() {
    graphwalk()
        .args(["dfs", "0", "--no-frontier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2: visited vertex 1 (from 0)"))
        .stdout(predicate::str::contains("stack:").not());
}

#[test]
fn test_json_frontier_snapshots() {
    let json = stdout_json(&["--format", "json", "dfs", "0"]);
    assert_eq!(json["events"][1]["frontier"], serde_json::json!([2]));

    let json = stdout_json(&["--format", "json", "dfs", "0", "--no-frontier"]);
    assert_eq!(json["events"][1]["frontier"], serde_json::json!([]));
    assert_eq!(order(&json), vec![0, 1, 3, 4, 2, 5]);
}

#[test]
fn test_delay_flag_accepted() {
    graphwalk()
        .args(["--edge", "0,1", "dfs", "0", "--delay-ms", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2: visited vertex 1 (from 0)"));
}

// ============================================================================
// Graph files
// ============================================================================

#[test]
fn test_graph_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    fs::write(
        &path,
        "vertices = [9]\nedges = [[0, 1], [1, 2]]\n\n[playback]\nstep_delay_ms = 0\n",
    )
    .unwrap();

    let json = stdout_json(&["--format", "json", "--graph", path.to_str().unwrap(), "dfs", "1"]);
    assert_eq!(order(&json), vec![1, 0, 2, 9]);
}

#[test]
fn test_graph_file_missing() {
    let dir = tempdir().unwrap();
    graphwalk()
        .args(["--graph"])
        .arg(dir.path().join("missing.toml"))
        .arg("show")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_graph_file_self_loop_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    fs::write(&path, "edges = [[0, 1], [1, 1]]\n").unwrap();

    graphwalk()
        .args(["--graph", path.to_str().unwrap(), "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("self-loop"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_start_vertex_exit_code_3() {
    graphwalk()
        .args(["dfs", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: 42"));
}

#[test]
fn test_unknown_start_vertex_json_error() {
    graphwalk()
        .args(["--format", "json", "bfs", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"vertex_not_found\""));
}

#[test]
fn test_self_loop_edge_flag_exit_code_3() {
    graphwalk()
        .args(["--edge", "3,3", "show"])
        .assert()
        .code(3);
}

#[test]
fn test_unknown_format_exit_code_2() {
    graphwalk()
        .args(["--format", "xml", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_graph_and_preset_usage_error() {
    graphwalk()
        .args(["--graph", "g.toml", "--preset", "visual", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn test_unknown_argument_json_usage_error() {
    graphwalk()
        .args(["--format", "json", "dfs", "0", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_invalid_edge_exit_code_2() {
    graphwalk()
        .args(["--edge", "0-1", "show"])
        .assert()
        .code(2);
}
