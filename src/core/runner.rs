use std::process::Stdio;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use chrono::Utc;
use log::{debug, info, warn};
use tokio::process::Command;

use crate::core::classify::{OutputClassifier, RefinementClassifier};
use crate::types::{AppResult, BenchTarget, RunResult};

/// Resolved settings for one suite run.
///
/// The checker invocation for a target is
/// `<tool_cmd> <dir> <dir><file> <property> --n <iterations> --time <timeout>`
/// where `<dir>` is `projdir` + `list_dir`.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    pub projdir: String,
    pub list_dir: String,
    pub tool_cmd: String,
    /// Advisory timeout in seconds. Forwarded to the checker; the runner
    /// blocks until the child exits regardless.
    pub timeout_secs: u32,
    /// Echo each child's raw output as it completes
    pub echo_output: bool,
}

/// Runs a benchmark suite one child process at a time, in suite order
pub struct SuiteRunner {
    options: RunnerOptions,
    classifier: Box<dyn OutputClassifier>,
}

impl SuiteRunner {
    pub fn new(options: RunnerOptions) -> Self {
        Self::with_classifier(options, Box::new(RefinementClassifier::new()))
    }

    pub fn with_classifier(options: RunnerOptions, classifier: Box<dyn OutputClassifier>) -> Self {
        Self {
            options,
            classifier,
        }
    }

    /// Shell command line for one target
    pub fn build_command(&self, target: &BenchTarget) -> String {
        let dir = format!("{}{}", self.options.projdir, self.options.list_dir);
        format!(
            "{} {}  {}{}  {} --n {} --time {}",
            self.options.tool_cmd,
            dir,
            dir,
            target.file,
            target.property,
            target.iterations,
            self.options.timeout_secs
        )
    }

    /// Run every target in order and collect one [`RunResult`] per target.
    ///
    /// The `running` flag is checked between targets; once cleared, no
    /// further children are launched and the results collected so far are
    /// returned. A child that fails to launch is recorded as a failing
    /// result with empty output rather than aborting the remaining targets.
    pub async fn run_suite(
        &self,
        targets: &[BenchTarget],
        running: Arc<AtomicBool>,
    ) -> AppResult<Vec<RunResult>> {
        let mut results = Vec::with_capacity(targets.len());

        for target in targets {
            if !running.load(Ordering::SeqCst) {
                warn!("Suite interrupted, stopping before {}", target.display());
                break;
            }
            if let Err(reason) = target.validate() {
                warn!("Skipping invalid target: {reason}");
                continue;
            }

            let result = self.run_target(target).await;
            if self.options.echo_output {
                info!(
                    "({}, {}, {:.3}s)",
                    result.file, result.property, result.elapsed_secs
                );
                if !result.output.is_empty() {
                    println!("{}", result.output);
                }
            }
            results.push(result);
        }

        Ok(results)
    }

    /// Launch one checker invocation, block until it exits, and classify
    /// whatever output was captured
    async fn run_target(&self, target: &BenchTarget) -> RunResult {
        let command_line = self.build_command(target);
        debug!("Running: {command_line}");

        let started = Instant::now();
        let output = self.capture_stdout(&command_line).await;
        let elapsed_secs = started.elapsed().as_secs_f64();

        let evidence = self.classifier.classify(&output);

        RunResult {
            file: target.file.clone(),
            property: target.property.clone(),
            has_concrete: evidence.has_concrete,
            has_abstract: evidence.has_abstract,
            elapsed_secs,
            time: Utc::now(),
            output,
        }
    }

    /// Run a command line through the shell with stdout piped and stderr
    /// inherited. Launch failures and nonzero exits both collapse into the
    /// captured (possibly empty) output; classification sorts them out.
    async fn capture_stdout(&self, command_line: &str) -> String {
        let spawned = Command::new("sh")
            .arg("-c")
            .arg(command_line)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn();

        let child = match spawned {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to launch checker: {e}");
                return String::new();
            }
        };

        match child.wait_with_output().await {
            Ok(output) => {
                if !output.status.success() {
                    debug!("Checker exited with {}", output.status);
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(e) => {
                warn!("Failed to collect checker output: {e}");
                String::new()
            }
        }
    }
}
