use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_missing_document_reports_identifier() {
    let project = TestProject::new().unwrap();
    project.write_doc("app.json", r###"{"##include":"ghost.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("document not found"))
        .stderr(predicate::str::contains("ghost.json"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_circular_reference_reports_chain() {
    let project = TestProject::new().unwrap();
    project.write_doc("a.json", r###"{"##include":"b.json"}"###).unwrap();
    project.write_doc("b.json", r###"{"##include":"a.json"}"###).unwrap();
    project.write_doc("app.json", r###"{"##include":"a.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular partial reference"))
        .stderr(predicate::str::contains("a.json"))
        .stderr(predicate::str::contains("b.json"));
}

#[test]
fn test_self_reference_is_circular() {
    let project = TestProject::new().unwrap();
    project.write_doc("a.json", r###"{"##include":"a.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "a.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular partial reference"));
}

#[test]
fn test_bad_path_reports_segment_and_document() {
    let project = TestProject::new().unwrap();
    project.write_doc("cfg.json", r###"{"a":{"b":1}}"###).unwrap();
    project
        .write_doc("app.json", r###"{"##include":{"partial":"cfg.json","path":"a.z"}}"###)
        .unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path 'a.z' not found"))
        .stderr(predicate::str::contains("no key 'z'"))
        .stderr(predicate::str::contains("cfg.json"));
}

#[test]
fn test_invalid_reference_reports_offending_value() {
    let project = TestProject::new().unwrap();
    project.write_doc("app.json", r###"{"##include":42}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid partial reference"))
        .stderr(predicate::str::contains("app.json"));
}

#[test]
fn test_non_object_merge_target_fails() {
    let project = TestProject::new().unwrap();
    project.write_doc("n.json", r###"{"n":7}"###).unwrap();
    project
        .write_doc("app.json", r###"{"##include":{"partial":"n.json","path":"n"},"own":true}"###)
        .unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid partial target"));
}

#[test]
fn test_malformed_source_document() {
    let project = TestProject::new().unwrap();
    project.write_doc("app.json", "{broken").unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid source document"));
}

#[test]
fn test_malformed_partial_document() {
    let project = TestProject::new().unwrap();
    project.write_doc("bad.json", "{also broken").unwrap();
    project.write_doc("app.json", r###"{"##include":"bad.json"}"###).unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

/// A failed run must not leave a truncated or partial output document.
#[test]
fn test_failed_run_writes_no_output() {
    let project = TestProject::new().unwrap();
    project.write_doc("good.json", r###"{"ok":true}"###).unwrap();
    project
        .write_doc("app.json", r###"{"a":{"##include":"good.json"},"b":{"##include":"nope.json"}}"###)
        .unwrap();

    project
        .jsplice()
        .args(["resolve", "app.json", "--output", "out/app.json"])
        .assert()
        .failure();

    assert!(!project.file("out/app.json").exists());
}
