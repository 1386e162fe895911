//! End-to-end tests for the tnv binary
//!
//! These tests validate the full workflow against a miniature taxdump:
//! - Batch validation of a spreadsheet column
//! - Report formats and exit codes
//! - Ad-hoc lookup output
//! - Fatal handling of unsound reference data

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a miniature taxdump: two superkingdoms under one root, two
/// influenza species sharing a synonym, and one bacterium.
fn write_taxdump(dir: &TempDir) -> (PathBuf, PathBuf) {
    let nodes_path = dir.path().join("nodes.dmp");
    let names_path = dir.path().join("names.dmp");

    let nodes = "\
1\t|\t1\t|\tno rank\t|
10239\t|\t1\t|\tsuperkingdom\t|
2\t|\t1\t|\tsuperkingdom\t|
11320\t|\t10239\t|\tspecies\t|
11520\t|\t10239\t|\tspecies\t|
562\t|\t2\t|\tspecies\t|
";
    let names = "\
1\t|\troot\t|\t\t|\tscientific name\t|
10239\t|\tViruses\t|\t\t|\tscientific name\t|
2\t|\tBacteria\t|\t\t|\tscientific name\t|
11320\t|\tInfluenza A virus\t|\t\t|\tscientific name\t|
11320\t|\tFlu A\t|\t\t|\tsynonym\t|
11520\t|\tInfluenza B virus\t|\t\t|\tscientific name\t|
11520\t|\tFlu A\t|\t\t|\tsynonym\t|
562\t|\tEscherichia coli\t|\t\t|\tscientific name\t|
562\t|\tE. coli\t|\t\t|\tsynonym\t|
";

    fs::write(&nodes_path, nodes).expect("Failed to write nodes.dmp");
    fs::write(&names_path, names).expect("Failed to write names.dmp");
    (nodes_path, names_path)
}

/// Write a spreadsheet export with one value per scenario.
fn write_input_sheet(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("strains.csv");
    let content = "\
Study,Virus Strain
S1,influenza a virus
S2,Flu A
S3,E. coli
S4,unknown thing
";
    fs::write(&path, content).expect("Failed to write input sheet");
    path
}

#[test]
fn test_validate_classifies_every_row() {
    let dir = TempDir::new().unwrap();
    let (nodes, names) = write_taxdump(&dir);
    let input = write_input_sheet(&dir);

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("validate").arg(&nodes).arg(&names).arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,influenza a virus,exact-valid,11320,Influenza A virus,",
        ))
        .stdout(predicate::str::contains(
            "2,Flu A,needs-manual-review,,,Influenza A virus; Influenza B virus",
        ))
        .stdout(predicate::str::contains(
            "3,E. coli,wrong-branch-after-correction,562,Escherichia coli,Escherichia coli",
        ))
        .stdout(predicate::str::contains("4,unknown thing,unrecognized,,,"));
}

#[test]
fn test_validate_json_report_with_summary() {
    let dir = TempDir::new().unwrap();
    let (nodes, names) = write_taxdump(&dir);
    let input = write_input_sheet(&dir);

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("validate")
        .arg(&nodes)
        .arg(&names)
        .arg(&input)
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["target"], 10239);
    assert_eq!(value["summary"]["total"], 4);
    assert_eq!(value["summary"]["counts"]["exact-valid"], 1);
    assert_eq!(value["rows"][1]["classification"], "needs-manual-review");
    assert_eq!(value["rows"][3]["outcome"]["kind"], "unrecognized");
}

#[test]
fn test_validate_writes_accepted_list() {
    let dir = TempDir::new().unwrap();
    let (nodes, names) = write_taxdump(&dir);
    let input = write_input_sheet(&dir);
    let accepted = dir.path().join("accepted.txt");

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("validate")
        .arg(&nodes)
        .arg(&names)
        .arg(&input)
        .arg("--accepted-list")
        .arg(&accepted);
    cmd.assert().success();

    // Only the exact-valid row passes lineage; ambiguous and
    // wrong-branch rows never contribute accepted names.
    let list = fs::read_to_string(&accepted).unwrap();
    assert_eq!(list, "Influenza A virus\n");
}

#[test]
fn test_validate_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let (nodes, names) = write_taxdump(&dir);
    let input = write_input_sheet(&dir);

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("validate")
        .arg(&nodes)
        .arg(&names)
        .arg(&input)
        .arg("--column")
        .arg("Pathogen");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Column 'Pathogen' not found"));
}

#[test]
fn test_validate_dangling_parent_is_fatal() {
    let dir = TempDir::new().unwrap();
    let nodes_path = dir.path().join("nodes.dmp");
    let names_path = dir.path().join("names.dmp");
    // Taxon 11320 references a parent that never appears.
    fs::write(
        &nodes_path,
        "1\t|\t1\t|\tno rank\t|\n11320\t|\t99999\t|\tspecies\t|\n",
    )
    .unwrap();
    fs::write(
        &names_path,
        "1\t|\troot\t|\t\t|\tscientific name\t|\n\
         11320\t|\tInfluenza A virus\t|\t\t|\tscientific name\t|\n",
    )
    .unwrap();
    let input = write_input_sheet(&dir);

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("validate")
        .arg(&nodes_path)
        .arg(&names_path)
        .arg(&input)
        .arg("--target-taxid")
        .arg("1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("99999"));
}

#[test]
fn test_lookup_reports_each_query() {
    let dir = TempDir::new().unwrap();
    let (nodes, names) = write_taxdump(&dir);

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("lookup")
        .arg(&nodes)
        .arg(&names)
        .arg("Influenza A virus")
        .arg("Flu A")
        .arg("gibberish");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid \"Influenza A virus\""))
        .stdout(predicate::str::contains("Influenza B virus"))
        .stdout(predicate::str::contains("no-match \"gibberish\""));
}

#[test]
fn test_lookup_fuzzy_suggestion_within_target_branch() {
    let dir = TempDir::new().unwrap();
    let (nodes, names) = write_taxdump(&dir);

    let mut cmd = Command::cargo_bin("tnv").unwrap();
    cmd.arg("lookup")
        .arg(&nodes)
        .arg(&names)
        .arg("Influenza B");

    // "Influenza B" is a substring of exactly one viral scientific name.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("suggest \"Influenza B virus\""));
}
