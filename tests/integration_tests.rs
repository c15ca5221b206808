//! Integration tests for the pforge CLI
//!
//! These tests exercise the generator pipelines end-to-end using
//! assert_cmd, chaining output files the way a real run would.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get a pforge command
fn pforge() -> Command {
    Command::cargo_bin("pforge").unwrap()
}

fn csv_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "csv"))
        .collect();
    files.sort();
    files
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    pforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("banking IT portfolio"));
}

#[test]
fn test_version_displays() {
    pforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pforge"));
}

#[test]
fn test_unknown_command_fails() {
    pforge()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Programs Pipeline Tests
// ============================================================================

#[test]
fn test_programs_writes_one_file_per_program() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");

    pforge()
        .args(["programs", "--seed", "42"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data Program"));

    let files = csv_files(&data_dir.join("programs"));
    assert_eq!(files.len(), 8);
    assert!(data_dir.join("programs/Data_Program.csv").exists());
    assert!(data_dir.join("programs/KYC-KYT_Program.csv").exists());

    let contents = fs::read_to_string(data_dir.join("programs/Digital_Program.csv")).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(
        header,
        "Program Name,Project Name,Phase,Delivery Period,Architect,\
Total Cost Estimation,Capability Domain,Capability Name,Action"
    );
    // 10..=20 projects with 1..=15 capability rows each.
    let rows = contents.lines().count() - 1;
    assert!((10..=300).contains(&rows), "{rows} rows");
}

#[test]
fn test_programs_seed_makes_runs_reproducible() {
    let run = || {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("data");
        pforge()
            .args(["programs", "--seed", "7", "--quiet"])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
        fs::read_to_string(data_dir.join("programs/Credit_Program.csv")).unwrap()
    };
    assert_eq!(run(), run());
}

// ============================================================================
// Resources Pipeline Tests
// ============================================================================

#[test]
fn test_resources_requires_program_files() {
    let tmp = TempDir::new().unwrap();

    pforge()
        .arg("resources")
        .arg("--data-dir")
        .arg(tmp.path().join("data"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no program files found"));
}

#[test]
fn test_resources_writes_one_file_per_project() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");

    pforge()
        .args(["programs", "--seed", "42", "--quiet"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    pforge()
        .args(["resources", "--seed", "43", "--quiet"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let files = csv_files(&data_dir.join("resources"));
    assert!(!files.is_empty());
    for file in &files {
        let name = file.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("project-"), "{name}");
        assert!(name.ends_with("-human-resource-allocations.csv"), "{name}");
    }

    let contents = fs::read_to_string(&files[0]).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(
        header,
        "Program Name,Project Name,Capability Domain,Capability Name,Action,\
Job Function,Resource Type,Resource Number,Estimated Man/Days,Tasks"
    );
}

// ============================================================================
// Teams Pipeline Tests
// ============================================================================

#[test]
fn test_teams_writes_roster_file() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");

    pforge()
        .args(["teams", "--seed", "1"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("teams"));

    let path = data_dir.join("teams/team-members.csv");
    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(
        contents.lines().next().unwrap(),
        "Team Name,Full Name,Job Function,Is Team Leader,Roles"
    );
    // 34 teams with 5..=12 members each.
    let rows = contents.lines().count() - 1;
    assert!((170..=408).contains(&rows), "{rows} members");
    assert_eq!(contents.matches(",True,").count(), 34);
}

// ============================================================================
// Mappings Pipeline Tests
// ============================================================================

#[test]
fn test_mappings_writes_mapping_file() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("data");

    pforge()
        .args(["mappings", "--seed", "1", "--quiet"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    let contents = fs::read_to_string(data_dir.join("teams-to-capabilities.csv")).unwrap();
    assert_eq!(
        contents.lines().next().unwrap(),
        "Team Name,Capability Domain,Capability Name"
    );
    // At most the combined catalog size (58), at least one per served team.
    let rows = contents.lines().count() - 1;
    assert!((1..=58).contains(&rows), "{rows} mappings");
}

#[test]
fn test_quiet_suppresses_output() {
    let tmp = TempDir::new().unwrap();

    pforge()
        .args(["mappings", "--seed", "1", "--quiet"])
        .arg("--data-dir")
        .arg(tmp.path().join("data"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
