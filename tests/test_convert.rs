//! End-to-end tests running the vcf2csv binary against real folders

mod common;

use std::fs;

use assert_cmd::Command;
use common::{write_vcf, JANE_DOE, JANE_DOE_ROW, RICHARD_ROE, RICHARD_ROE_ROW};
use predicates::prelude::*;
use tempfile::TempDir;

fn vcf2csv() -> Command {
    Command::cargo_bin("vcf2csv").unwrap()
}

#[test]
fn test_converts_folder_to_csv() {
    let dir = TempDir::new().unwrap();
    write_vcf(&dir, "a_jane.vcf", JANE_DOE);
    write_vcf(&dir, "b_richard.vcf", RICHARD_ROE);
    let output = dir.path().join("contacts.csv");

    vcf2csv()
        .arg(dir.path())
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found total of 2 contacts"));

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name,Given Name,Family Name,"));
    assert_eq!(lines[1], JANE_DOE_ROW);
    assert_eq!(lines[2], RICHARD_ROE_ROW);
}

#[test]
fn test_discovery_is_recursive_and_sorted() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("old_phone")).unwrap();
    // "old_phone/a.vcf" sorts after "b.vcf" because the directory name wins.
    write_vcf(&dir, "b.vcf", JANE_DOE);
    let nested = dir.path().join("old_phone").join("a.vcf");
    fs::write(&nested, RICHARD_ROE).unwrap();
    let output = dir.path().join("contacts.csv");

    vcf2csv().arg(dir.path()).arg(&output).assert().success();

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], JANE_DOE_ROW);
    assert_eq!(lines[2], RICHARD_ROE_ROW);
}

#[test]
fn test_non_vcf_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_vcf(&dir, "jane.vcf", JANE_DOE);
    write_vcf(&dir, "notes.txt", RICHARD_ROE);
    let output = dir.path().join("contacts.csv");

    vcf2csv().arg(dir.path()).arg(&output).assert().success();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 2);
}

#[test]
fn test_empty_folder_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("contacts.csv");

    vcf2csv().arg(dir.path()).arg(&output).assert().success();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("Name,Given Name,Family Name,"));
}

#[test]
fn test_missing_input_dir_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("contacts.csv");

    vcf2csv()
        .arg(dir.path().join("does-not-exist"))
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_vcf(&dir, "jane.vcf", JANE_DOE);
    write_vcf(&dir, "richard.vcf", RICHARD_ROE);
    let output = dir.path().join("contacts.csv");

    vcf2csv().arg(dir.path()).arg(&output).assert().success();
    let first = fs::read(&output).unwrap();

    vcf2csv().arg(dir.path()).arg(&output).assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_utf8_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_vcf(&dir, "jane.vcf", JANE_DOE);
    fs::write(dir.path().join("broken.vcf"), [0xffu8, 0xfe, 0x00]).unwrap();
    let output = dir.path().join("contacts.csv");

    vcf2csv()
        .arg(dir.path())
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("broken.vcf"));

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert_eq!(csv.lines().nth(1).unwrap(), JANE_DOE_ROW);
}

#[test]
fn test_wrong_arity_prints_usage_and_exits_1() {
    vcf2csv()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    vcf2csv()
        .arg("only-one-arg")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    vcf2csv()
        .args(["a", "b", "c"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unwritable_output_exits_1() {
    let dir = TempDir::new().unwrap();
    write_vcf(&dir, "jane.vcf", JANE_DOE);

    // Using the temp directory itself as the output path makes the write fail.
    vcf2csv()
        .arg(dir.path())
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write CSV file"));
}
