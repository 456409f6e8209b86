use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "topogen-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn spec_topo_builds_explicit_topology_as_json() {
    let dir = unique_temp_dir("spec-explicit");
    let spec = write_file(
        &dir,
        "spec.json",
        r#"
{
    "kind": "explicit",
    "hosts": ["h1", "h2", "h3", "h4"],
    "switches": ["s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9"],
    "links": [
        { "a": "h1", "b": "s1" }, { "a": "h2", "b": "s3" },
        { "a": "h3", "b": "s7" }, { "a": "h4", "b": "s9" },
        { "a": "s2", "b": "s1" }, { "a": "s2", "b": "s3" },
        { "a": "s8", "b": "s7" }, { "a": "s8", "b": "s9" },
        { "a": "s5", "b": "s2" }, { "a": "s5", "b": "s4" },
        { "a": "s5", "b": "s6" }, { "a": "s5", "b": "s8" }
    ]
}
        "#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_spec_topo"))
        .args(["--spec", spec.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("run spec_topo");
    assert!(
        output.status.success(),
        "spec_topo failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let v: Value = serde_json::from_slice(&output.stdout).expect("parse stdout json");
    assert_eq!(v["nodes"].as_array().map(Vec::len), Some(13));
    assert_eq!(v["links"].as_array().map(Vec::len), Some(12));
    assert_eq!(v["links"][11]["a"], "s5");
    assert_eq!(v["links"][11]["b"], "s8");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn spec_topo_reports_unknown_link_endpoint() {
    let dir = unique_temp_dir("spec-unknown");
    let spec = write_file(
        &dir,
        "spec.json",
        r#"{ "kind": "explicit", "hosts": ["h1"], "links": [ { "a": "h1", "b": "s1" } ] }"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_spec_topo"))
        .args(["--spec", spec.to_str().unwrap()])
        .output()
        .expect("run spec_topo");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no node named s1"), "stderr={stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn spec_topo_builds_tree_script() {
    let dir = unique_temp_dir("spec-tree");
    let spec = write_file(
        &dir,
        "spec.json",
        r#"{ "kind": "tree", "layers": 1, "fan_out": 2 }"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_spec_topo"))
        .args(["--spec", spec.to_str().unwrap()])
        .output()
        .expect("run spec_topo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 7 + 6);
    assert_eq!(lines[0], "add_switch s0");
    assert_eq!(lines[7], "add_link s0 s1");

    let _ = fs::remove_dir_all(&dir);
}
