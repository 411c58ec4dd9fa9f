use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_check_passes_for_resolvable_tree() {
    let project = TestProject::new().unwrap();
    project.write_doc("base.json", r###"{"x":1}"###).unwrap();
    project.write_doc("src/app.json", r###"{"##include":"base.json"}"###).unwrap();

    project
        .jsplice()
        .args(["check", "src/app.json", "--root", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("resolve cleanly"));
}

#[test]
fn test_check_reports_failing_documents() {
    let project = TestProject::new().unwrap();
    project.write_doc("good.json", r###"{"x":1}"###).unwrap();
    project.write_doc("src/ok.json", r###"{"##include":"good.json"}"###).unwrap();
    project.write_doc("src/broken.json", r###"{"##include":"missing.json"}"###).unwrap();

    project
        .jsplice()
        .args(["check", "src", "--root", "."])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("1 of 2 documents failed"));
}

#[test]
fn test_check_directory_discovers_json_only() {
    let project = TestProject::new().unwrap();
    project.write_doc("src/a.json", "{}").unwrap();
    project.write_doc("src/notes.txt", "not json at all").unwrap();

    project
        .jsplice()
        .args(["check", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 documents resolve cleanly"));
}

#[test]
fn test_check_empty_directory_fails() {
    let project = TestProject::new().unwrap();
    project.write_doc("src/notes.txt", "no documents here").unwrap();

    project
        .jsplice()
        .args(["check", "src"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .json documents"));
}
