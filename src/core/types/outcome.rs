use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::{Display, EnumString};

/// Pass/fail verdict for a single benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Verdict {
    #[strum(serialize = "PASS")]
    Pass,
    #[strum(serialize = "FAIL")]
    Fail,
}

/// Outcome of executing one [`BenchTarget`](crate::types::BenchTarget).
///
/// `has_concrete` / `has_abstract` record which kinds of counterexample
/// evidence the checker reported; a run with neither is a FAIL, which also
/// covers the case where the checker never ran at all.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub file: String,
    pub property: String,
    pub has_concrete: bool,
    pub has_abstract: bool,
    /// Wall-clock duration of the child process, in seconds
    pub elapsed_secs: f64,
    pub time: DateTime<Utc>,
    #[serde(skip)]
    pub output: String,
}

impl RunResult {
    pub fn verdict(&self) -> Verdict {
        if self.has_concrete || self.has_abstract {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn result(has_concrete: bool, has_abstract: bool) -> RunResult {
        RunResult {
            file: "Mux.hs".to_string(),
            property: "prop_mux".to_string(),
            has_concrete,
            has_abstract,
            elapsed_secs: 0.5,
            time: Utc::now(),
            output: String::new(),
        }
    }

    #[test]
    fn either_evidence_flag_yields_pass() {
        assert_eq!(result(true, false).verdict(), Verdict::Pass);
        assert_eq!(result(false, true).verdict(), Verdict::Pass);
        assert_eq!(result(true, true).verdict(), Verdict::Pass);
        assert_eq!(result(false, false).verdict(), Verdict::Fail);
    }

    #[test]
    fn verdict_round_trips_through_strings() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail.to_string(), "FAIL");
        assert_eq!(Verdict::from_str("pass").unwrap(), Verdict::Pass);
        assert_eq!(Verdict::from_str("FAIL").unwrap(), Verdict::Fail);
    }
}
