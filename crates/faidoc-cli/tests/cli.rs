//! End-to-end tests for the faidoc binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn faidoc() -> Command {
    Command::cargo_bin("faidoc").unwrap()
}

#[test]
fn templates_lists_builtin_registry() {
    faidoc()
        .arg("templates")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("fafsa")
                .and(predicate::str::contains("taxReturn"))
                .and(predicate::str::contains("transcript")),
        );
}

#[test]
fn templates_detail_as_json() {
    faidoc()
        .args(["templates", "fafsa", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"id\": \"fafsa\"")
                .and(predicate::str::contains("Expected Family Contribution")),
        );
}

#[test]
fn templates_unknown_id_fails() {
    faidoc()
        .args(["templates", "w2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template: w2"));
}

#[test]
fn process_detects_fafsa_from_filename() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("FAFSA_2024.pdf");
    std::fs::write(&path, b"placeholder").unwrap();

    faidoc()
        .arg("process")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"type\": \"FAFSA\"")
                .and(predicate::str::contains("Jane Doe"))
                .and(predicate::str::contains("Missing required field: Date of Birth")),
        );
}

#[test]
fn process_unrecognized_filename_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meeting_notes.pdf");
    std::fs::write(&path, b"placeholder").unwrap();

    faidoc()
        .arg("process")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Unknown Document").and(predicate::str::contains(
                "Document type not recognized. Please verify extracted data manually.",
            )),
        );
}

#[test]
fn process_text_format_with_confidence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript_spring.pdf");
    std::fs::write(&path, b"placeholder").unwrap();

    faidoc()
        .arg("process")
        .arg(&path)
        .args(["--format", "text", "--show-confidence"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type: Academic Transcript")
                .and(predicate::str::contains("GPA: 3.72 (96%)")),
        );
}

#[test]
fn process_missing_file_fails() {
    faidoc()
        .args(["process", "/nonexistent/FAFSA_2024.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fafsa_notes.docx");
    std::fs::write(&path, b"placeholder").unwrap();

    faidoc()
        .arg("process")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_processes_glob() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("FAFSA_a.pdf"), b"x").unwrap();
    std::fs::write(dir.path().join("tax_return_b.pdf"), b"x").unwrap();

    let pattern = dir.path().join("*.pdf");

    faidoc()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 documents"));
}

#[test]
fn batch_writes_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("FAFSA_a.pdf"), b"x").unwrap();

    let pattern = dir.path().join("*.pdf");

    faidoc()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--summary")
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    let summary = std::fs::read_to_string(out.path().join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,type,status,fields_extracted,issues"));
    assert!(summary.contains("FAFSA_a.pdf,FAFSA,completed,4,3"));
}

#[test]
fn batch_no_matches_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join("*.pdf");

    faidoc()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn validate_accepts_well_formed_ssn() {
    faidoc()
        .args(["validate", "--template", "fafsa", "--field", "ssn", "123-45-6789"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a valid SSN"));
}

#[test]
fn validate_rejects_malformed_ssn() {
    faidoc()
        .args(["validate", "--template", "fafsa", "--field", "ssn", "123-456-789"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid SSN format (XXX-XX-XXXX)"));
}

#[test]
fn validate_empty_required_value() {
    faidoc()
        .args(["validate", "--template", "transcript", "--field", "gpa"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("GPA is required"));
}

#[test]
fn validate_unknown_field_fails() {
    faidoc()
        .args(["validate", "--template", "fafsa", "--field", "gpa", "3.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field 'gpa'"));
}

#[test]
fn config_show_prints_defaults() {
    faidoc()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("validate_fields")
                .and(predicate::str::contains("min_confidence")),
        );
}

#[test]
fn config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    faidoc()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    let config = std::fs::read_to_string(&path).unwrap();
    assert!(config.contains("\"extraction\""));
}
