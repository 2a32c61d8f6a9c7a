//! Integration test: the three driver modes against real folders.
//!
//! Each test lays out a scratch folder, runs the mode with captured
//! console output, and checks what was printed and what was written.

use std::{fs, path::PathBuf};

use stablematch_cli::{Console, RunStatus, run};
use stablematch_types::*;

const EXAMPLE: &str = "3\n2 1 3\n1 2 3\n1 2 3\n1 2 3\n2 1 3\n1 2 3\n";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "stablematch-cli-{name}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

struct Captured {
    result: Result<RunStatus>,
    out: String,
    err: String,
}

fn run_captured(config: &RunConfig) -> Captured {
    let mut console = Console {
        out: Vec::new(),
        err: Vec::new(),
    };
    let result = run(config, &mut console);
    Captured {
        result,
        out: String::from_utf8(console.out).unwrap(),
        err: String::from_utf8(console.err).unwrap(),
    }
}

#[test]
fn match_mode_writes_out_file_next_to_input() {
    let dir = scratch_dir("match");
    fs::write(dir.join("example.in"), EXAMPLE).unwrap();

    let done = run_captured(&RunConfig::new(RunMode::Match, &dir));
    assert_eq!(done.result.unwrap(), RunStatus::Success);
    assert!(
        done.out
            .starts_with("\nFinal Matching (Hospital Student):\n1 2\n2 1\n3 3\n")
    );
    assert!(done.out.contains("Matching results written to"));
    assert!(done.err.contains("Number of proposals: 5"));
    assert!(done.err.contains("Matching runtime: "));

    let written = fs::read_to_string(dir.join("example.out")).unwrap();
    assert_eq!(written, "3\n1 2\n2 1\n3 3");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn match_mode_accepts_a_file_path() {
    let dir = scratch_dir("match-file");
    let input = dir.join("single.in");
    fs::write(&input, "1\n1\n1\n").unwrap();

    let done = run_captured(&RunConfig::new(RunMode::Match, &input));
    assert_eq!(done.result.unwrap(), RunStatus::Success);
    assert_eq!(fs::read_to_string(dir.join("single.out")).unwrap(), "1\n1 1");
    assert!(done.err.contains("Number of proposals: 1"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn match_mode_needs_exactly_one_input() {
    let dir = scratch_dir("match-two");
    fs::write(dir.join("a.in"), EXAMPLE).unwrap();
    fs::write(dir.join("b.in"), EXAMPLE).unwrap();

    let err = run_captured(&RunConfig::new(RunMode::Match, &dir))
        .result
        .unwrap_err();
    assert!(format!("{err}").contains("exactly one .in file, found 2"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verify_mode_reports_stable() {
    let dir = scratch_dir("verify-stable");
    fs::write(dir.join("verify.in"), EXAMPLE).unwrap();
    fs::write(dir.join("verify.out"), "3\n1 1\n2 2\n3 3").unwrap();

    let done = run_captured(&RunConfig::new(RunMode::Verify, &dir));
    assert_eq!(done.result.unwrap(), RunStatus::Success);
    assert!(done.out.contains("Verifying matching stability..."));
    assert!(done.out.contains("VALID STABLE"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verify_mode_reports_blocking_pair() {
    let dir = scratch_dir("verify-unstable");
    fs::write(dir.join("verify.in"), EXAMPLE).unwrap();
    fs::write(dir.join("verify.out"), "3\n1 1\n2 3\n3 2").unwrap();

    let done = run_captured(&RunConfig::new(RunMode::Verify, &dir));
    let status = done.result.unwrap();
    assert_eq!(
        status,
        RunStatus::Unstable(BlockingPair::new(HospitalId(1), StudentId(2)))
    );
    assert_eq!(status.exit_code(), 1);
    assert!(
        done.out
            .contains("UNSTABLE: Hospital 1 and Student 2 are a blocking pair")
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verify_mode_rejects_size_mismatch() {
    let dir = scratch_dir("verify-mismatch");
    fs::write(dir.join("verify.in"), EXAMPLE).unwrap();
    fs::write(dir.join("verify.out"), "2\n1 1\n2 2").unwrap();

    let err = run_captured(&RunConfig::new(RunMode::Verify, &dir))
        .result
        .unwrap_err();
    assert_eq!(
        err,
        StablematchError::SizeMismatch {
            input: 3,
            output: 2
        }
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn verify_mode_requires_both_files() {
    let dir = scratch_dir("verify-missing");
    fs::write(dir.join("verify.in"), EXAMPLE).unwrap();

    let err = run_captured(&RunConfig::new(RunMode::Verify, &dir))
        .result
        .unwrap_err();
    assert!(format!("{err}").contains("verify.out not found in folder"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn both_mode_processes_every_input_in_name_order() {
    let dir = scratch_dir("both");
    fs::write(dir.join("b.in"), EXAMPLE).unwrap();
    fs::write(dir.join("a.in"), "2\n1 2\n1 2\n1 2\n1 2\n").unwrap();

    let done = run_captured(&RunConfig::new(RunMode::Both, &dir));
    assert_eq!(done.result.unwrap(), RunStatus::Success);

    let first = done.out.find("--- a.in ---").unwrap();
    let separator = done.out.find(&"=".repeat(60)).unwrap();
    let second = done.out.find("--- b.in ---").unwrap();
    assert!(first < separator && separator < second);
    assert_eq!(done.out.matches("VALID STABLE").count(), 2);

    assert_eq!(fs::read_to_string(dir.join("a.out")).unwrap(), "2\n1 1\n2 2");
    assert!(dir.join("b.out").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn both_mode_stops_at_first_failure() {
    let dir = scratch_dir("both-stop");
    fs::write(dir.join("a.in"), EXAMPLE).unwrap();
    fs::write(dir.join("b.in"), "2\n1 1\n1 2\n1 2\n1 2\n").unwrap();
    fs::write(dir.join("c.in"), EXAMPLE).unwrap();

    let err = run_captured(&RunConfig::new(RunMode::Both, &dir))
        .result
        .unwrap_err();
    assert!(err.is_input_error());
    assert!(dir.join("a.out").exists());
    assert!(!dir.join("c.out").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn both_mode_needs_inputs() {
    let dir = scratch_dir("both-empty");

    let err = run_captured(&RunConfig::new(RunMode::Both, &dir))
        .result
        .unwrap_err();
    assert!(format!("{err}").contains("No .in files found in folder"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn json_report_replaces_human_output() {
    let dir = scratch_dir("json");
    fs::write(dir.join("example.in"), EXAMPLE).unwrap();

    let mut config = RunConfig::new(RunMode::Both, &dir);
    config.json_report = true;
    let done = run_captured(&config);
    assert_eq!(done.result.unwrap(), RunStatus::Success);

    assert!(!done.out.contains("Final Matching"));
    let report: serde_json::Value = serde_json::from_str(done.out.trim()).unwrap();
    assert_eq!(report["mode"], "both");
    assert_eq!(report["n"], 3);
    assert_eq!(report["proposals"], 5);
    assert_eq!(report["verdict"]["status"], "stable");
    assert_eq!(report["matching_root"].as_str().unwrap().len(), 64);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_folder_is_a_configuration_error() {
    let err = run_captured(&RunConfig::new(RunMode::Verify, "/definitely/not/here"))
        .result
        .unwrap_err();
    assert!(matches!(err, StablematchError::Configuration(_)));
}
