use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::TestProject;

/// Resolving a document without markers echoes it unchanged, key order
/// included.
#[test]
fn test_resolve_passthrough_preserves_key_order() {
    let project = TestProject::new().unwrap();
    project.write_doc("plain.json", r###"{"b":1,"a":2}"###).unwrap();

    let output = project.jsplice().args(["resolve", "plain.json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "{\n  \"b\": 1,\n  \"a\": 2\n}\n");
}

#[test]
fn test_resolve_simple_include_to_stdout() {
    let project = TestProject::new().unwrap();
    project.write_doc("base.json", r###"{"name":"x","value":1}"###).unwrap();
    project.write_doc("app.json", r###"{"##include":"base.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"x\""))
        .stdout(predicate::str::contains("\"value\": 1"));
}

#[test]
fn test_resolve_override_precedence() {
    let project = TestProject::new().unwrap();
    project.write_doc("a.json", r###"{"value":1,"k":"a"}"###).unwrap();
    project.write_doc("b.json", r###"{"value":2,"k":"b"}"###).unwrap();
    project
        .write_doc("app.json", r###"{"##include":["a.json","b.json"],"value":99}"###)
        .unwrap();

    let output = project.jsplice().args(["resolve", "app.json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let resolved: Value = serde_json::from_str(&stdout).unwrap();

    // Own property beats both partials; later partial beats earlier.
    assert_eq!(resolved["value"], json!(99));
    assert_eq!(resolved["k"], json!("b"));
    // Containing-object keys first, partial-only keys appended after.
    let keys: Vec<&String> = resolved.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["value", "k"]);
}

#[test]
fn test_resolve_key_order_with_contributed_keys() {
    let project = TestProject::new().unwrap();
    project.write_doc("extra.json", r###"{"c":3}"###).unwrap();
    project.write_doc("app.json", r###"{"b":1,"a":2,"##include":"extra.json"}"###).unwrap();

    let output = project.jsplice().args(["resolve", "app.json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "{\n  \"b\": 1,\n  \"a\": 2,\n  \"c\": 3\n}\n");
}

#[test]
fn test_resolve_nested_path_extraction() {
    let project = TestProject::new().unwrap();
    project.write_doc("cfg.json", r###"{"a":{"b":{"c":42}}}"###).unwrap();
    project
        .write_doc("app.json", r###"{"answer":{"##include":{"partial":"cfg.json","path":"a.b.c"}}}"###)
        .unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"answer\": 42"));
}

#[test]
fn test_resolve_to_output_file() {
    let project = TestProject::new().unwrap();
    project.write_doc("base.json", r###"{"x":1}"###).unwrap();
    project.write_doc("app.json", r###"{"##include":"base.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json", "--output", "out/resolved.json"])
        .assert()
        .success();

    let written: Value = serde_json::from_str(&project.read("out/resolved.json").unwrap()).unwrap();
    assert_eq!(written, json!({"x": 1}));
}

#[test]
fn test_resolve_directory_into_output_dir() {
    let project = TestProject::new().unwrap();
    project.write_doc("shared/base.json", r###"{"common":true}"###).unwrap();
    project.write_doc("src/one.json", r###"{"##include":"base.json","id":1}"###).unwrap();
    project.write_doc("src/two.json", r###"{"##include":"base.json","id":2}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "src", "--root", "shared", "--output", "out"])
        .assert()
        .success();

    let one: Value = serde_json::from_str(&project.read("out/one.json").unwrap()).unwrap();
    let two: Value = serde_json::from_str(&project.read("out/two.json").unwrap()).unwrap();
    assert_eq!(one, json!({"id": 1, "common": true}));
    assert_eq!(two, json!({"id": 2, "common": true}));
}

/// Files discovered under a directory source keep their subpath in the
/// output directory instead of colliding on file name.
#[test]
fn test_resolve_directory_output_mirrors_subpaths() {
    let project = TestProject::new().unwrap();
    project.write_doc("src/a/x.json", r###"{"id":"a"}"###).unwrap();
    project.write_doc("src/b/x.json", r###"{"id":"b"}"###).unwrap();

    project.jsplice().args(["resolve", "src", "--output", "out"]).assert().success();

    let a: Value = serde_json::from_str(&project.read("out/a/x.json").unwrap()).unwrap();
    let b: Value = serde_json::from_str(&project.read("out/b/x.json").unwrap()).unwrap();
    assert_eq!(a, json!({"id": "a"}));
    assert_eq!(b, json!({"id": "b"}));
}

#[test]
fn test_resolve_colliding_output_names_fail() {
    let project = TestProject::new().unwrap();
    project.write_doc("a/x.json", r###"{"id":"a"}"###).unwrap();
    project.write_doc("b/x.json", r###"{"id":"b"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "a/x.json", "b/x.json", "--output", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output collision"));
}

#[test]
fn test_resolve_multiple_sources_require_output_dir() {
    let project = TestProject::new().unwrap();
    project.write_doc("a.json", "{}").unwrap();
    project.write_doc("b.json", "{}").unwrap();

    project
        .jsplice()
        .args(["resolve", "a.json", "b.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_resolve_compact_output() {
    let project = TestProject::new().unwrap();
    project.write_doc("plain.json", r###"{"b":1,"a":2}"###).unwrap();

    let output =
        project.jsplice().args(["resolve", "plain.json", "--compact"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "{\"b\":1,\"a\":2}\n");
}

#[test]
fn test_resolve_custom_marker_key() {
    let project = TestProject::new().unwrap();
    project.write_doc("base.json", r###"{"x":1}"###).unwrap();
    project.write_doc("app.json", r###"{"$include":"base.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json", "--marker", "$include"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"x\": 1"));
}

#[test]
fn test_resolve_partials_in_subdirectories() {
    let project = TestProject::new().unwrap();
    project.write_doc("partials/env/prod.json", r###"{"env":"prod"}"###).unwrap();
    project.write_doc("app.json", r###"{"##include":"partials/env/prod.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"env\": \"prod\""));
}
