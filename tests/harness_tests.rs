use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use refbench::types::{BenchTarget, RunResult, Verdict};
use refbench::{RunnerOptions, SuiteRunner};

/// Write a stub checker script and return a tool command invoking it
fn write_stub(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub script");
    format!("sh {}", path.display())
}

fn options(tool_cmd: String) -> RunnerOptions {
    RunnerOptions {
        projdir: String::new(),
        list_dir: String::new(),
        tool_cmd,
        timeout_secs: 300,
        echo_output: false,
    }
}

async fn run_one(tool_cmd: String, target: BenchTarget) -> RunResult {
    let runner = SuiteRunner::new(options(tool_cmd));
    let running = Arc::new(AtomicBool::new(true));
    let mut results = runner
        .run_suite(&[target], running)
        .await
        .expect("Suite run failed");
    assert_eq!(results.len(), 1);
    results.remove(0)
}

#[tokio::test]
async fn marker_with_concrete_line_classifies_as_pass() {
    let dir = tempdir().unwrap();
    // With empty projdir the stub's second argument is the property name
    let tool_cmd = write_stub(
        dir.path(),
        "found.sh",
        r#"printf "violating %s's refinement type\nConcrete counterexample found\n" "$2""#,
    );

    let result = run_one(tool_cmd, BenchTarget::new("Mux.hs", "prop_mux", 1000)).await;

    assert_eq!(result.verdict(), Verdict::Pass);
    assert!(result.has_concrete);
    assert!(!result.has_abstract);
}

#[tokio::test]
async fn marker_without_signals_classifies_as_fail() {
    let dir = tempdir().unwrap();
    let tool_cmd = write_stub(
        dir.path(),
        "bare_marker.sh",
        r#"printf "violating %s's refinement type\nno counterexample details\n" "$2""#,
    );

    let result = run_one(tool_cmd, BenchTarget::new("Catch.hs", "prop", 1000)).await;

    assert_eq!(result.verdict(), Verdict::Fail);
    assert!(!result.has_concrete);
    assert!(!result.has_abstract);
}

#[tokio::test]
async fn output_without_marker_classifies_as_fail() {
    let dir = tempdir().unwrap();
    let tool_cmd = write_stub(
        dir.path(),
        "clean.sh",
        r#"printf "checked %s, all fine\n" "$2""#,
    );

    let result = run_one(tool_cmd, BenchTarget::new("RegExp.hs", "prop_regex", 1000)).await;

    assert_eq!(result.verdict(), Verdict::Fail);
}

#[tokio::test]
async fn launch_failure_is_recorded_as_fail_without_aborting() {
    let tool_cmd = "/nonexistent/checker-binary".to_string();
    let runner = SuiteRunner::new(options(tool_cmd));
    let running = Arc::new(AtomicBool::new(true));

    let targets = vec![
        BenchTarget::new("Mux.hs", "prop_mux", 1000),
        BenchTarget::new("Catch.hs", "prop", 1000),
    ];
    let results = runner.run_suite(&targets, running).await.unwrap();

    // Both targets still produce a result, both FAIL with no evidence
    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.verdict(), Verdict::Fail);
        assert!(!result.has_concrete);
        assert!(!result.has_abstract);
    }
}

#[tokio::test]
async fn each_target_is_invoked_exactly_once_in_suite_order() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("invocations.log");
    let tool_cmd = write_stub(
        dir.path(),
        "record.sh",
        &format!(r#"echo "$@" >> {}"#, log_path.display()),
    );

    let targets = vec![
        BenchTarget::new("Catch.hs", "prop", 1000),
        BenchTarget::new("Mux.hs", "prop_encDec", 11000),
        BenchTarget::new("Huffman.hs", "prop_decEnc", 1000),
    ];
    let runner = SuiteRunner::new(options(tool_cmd));
    let running = Arc::new(AtomicBool::new(true));
    let results = runner.run_suite(&targets, running).await.unwrap();

    assert_eq!(results.len(), targets.len());

    let recorded = fs::read_to_string(&log_path).unwrap();
    let invocations: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        invocations,
        vec![
            "Catch.hs prop --n 1000 --time 300",
            "Mux.hs prop_encDec --n 11000 --time 300",
            "Huffman.hs prop_decEnc --n 1000 --time 300",
        ]
    );

    // Results come back in the same order as the suite
    let labels: Vec<String> = results
        .iter()
        .map(|r| format!("{}:{}", r.file, r.property))
        .collect();
    assert_eq!(
        labels,
        vec!["Catch.hs:prop", "Mux.hs:prop_encDec", "Huffman.hs:prop_decEnc"]
    );
}

#[tokio::test]
async fn elapsed_time_reflects_child_duration() {
    let dir = tempdir().unwrap();
    let tool_cmd = write_stub(dir.path(), "slow.sh", "sleep 0.2");

    let result = run_one(tool_cmd, BenchTarget::new("Mate.hs", "prop_checkmate", 1000)).await;

    assert!(
        result.elapsed_secs >= 0.2,
        "elapsed {} should cover the stub's 0.2s sleep",
        result.elapsed_secs
    );
    // Generous ceiling to keep the test stable on loaded machines
    assert!(result.elapsed_secs < 5.0);
}

#[tokio::test]
async fn total_elapsed_covers_the_sum_of_sequential_runs() {
    let dir = tempdir().unwrap();
    let tool_cmd = write_stub(dir.path(), "slow.sh", "sleep 0.1");

    let targets = vec![
        BenchTarget::new("A.hs", "prop_a", 100),
        BenchTarget::new("B.hs", "prop_b", 100),
        BenchTarget::new("C.hs", "prop_c", 100),
    ];
    let runner = SuiteRunner::new(options(tool_cmd));
    let running = Arc::new(AtomicBool::new(true));

    let started = Instant::now();
    let results = runner.run_suite(&targets, running).await.unwrap();
    let total_elapsed = started.elapsed().as_secs_f64();

    let per_target_sum: f64 = results.iter().map(|r| r.elapsed_secs).sum();
    assert!(per_target_sum >= 0.3, "three sequential 0.1s sleeps");
    // Runs are sequential and non-overlapping, so the wall clock for the
    // whole suite must cover the per-target sum
    assert!(total_elapsed >= per_target_sum);
    assert!(total_elapsed - per_target_sum < 1.0);
}
