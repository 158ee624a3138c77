use log::info;
use serde::Serialize;

use crate::types::{RunResult, Verdict};

/// Machine-readable report for `run --format json`
#[derive(Serialize)]
pub struct RunReport {
    pub results: Vec<ReportEntry>,
    pub total_elapsed_secs: f64,
}

#[derive(Serialize)]
pub struct ReportEntry {
    pub verdict: Verdict,
    #[serde(flatten)]
    pub result: RunResult,
}

impl RunReport {
    pub fn new(results: Vec<RunResult>, total_elapsed_secs: f64) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|result| ReportEntry {
                    verdict: result.verdict(),
                    result,
                })
                .collect(),
            total_elapsed_secs,
        }
    }
}

/// One summary line per result, in the suite's run shape:
/// passing runs show which evidence kinds were found, failing runs leave
/// the evidence column blank
pub fn format_result_line(result: &RunResult) -> String {
    match result.verdict() {
        Verdict::Pass => format!(
            "PASS: {}:{}  -- C: {}, A: {} -- {:.3}",
            result.file,
            result.property,
            result.has_concrete as u8,
            result.has_abstract as u8,
            result.elapsed_secs
        ),
        Verdict::Fail => format!(
            "FAIL: {}:{}  --                -- {:.3}",
            result.file, result.property, result.elapsed_secs
        ),
    }
}

pub fn print_summary(results: &[RunResult], total_elapsed_secs: f64) {
    for result in results {
        info!("{}", format_result_line(result));
    }
    info!("Elapsed time: {total_elapsed_secs:.3}s");
}
