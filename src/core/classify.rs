use regex::Regex;

/// Counterexample evidence extracted from a checker's captured output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evidence {
    pub has_concrete: bool,
    pub has_abstract: bool,
}

impl Evidence {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Turns a checker's captured stdout into counterexample evidence.
///
/// The orchestration loop only ever talks to this trait, so the text
/// heuristic can be swapped for a structured protocol without touching
/// the runner.
pub trait OutputClassifier: Send + Sync {
    fn classify(&self, output: &str) -> Evidence;
}

/// Default classifier for checkers that report violations as free text.
///
/// A run counts as evidence only if the output contains the marker phrase
/// `violating <name>'s refinement type`. When the marker is present, the
/// line immediately after it signals a concrete counterexample if it
/// contains `Concrete`, and any later occurrence of `Abstract` signals an
/// abstract one. This is plain substring scraping and will break if the
/// checker's report format drifts.
pub struct RefinementClassifier {
    marker: Regex,
}

impl RefinementClassifier {
    pub fn new() -> Self {
        Self {
            // The property name is free-form, so keep the match lazy
            marker: Regex::new(r"violating .+?'s refinement type")
                .expect("marker pattern is valid"),
        }
    }
}

impl Default for RefinementClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputClassifier for RefinementClassifier {
    fn classify(&self, output: &str) -> Evidence {
        let Some(found) = self.marker.find(output) else {
            return Evidence::none();
        };

        let rest = &output[found.end()..];
        // lines() yields the tail of the marker's own line first, then the
        // line the concrete signal is expected on
        let has_concrete = rest
            .lines()
            .nth(1)
            .map(|line| line.contains("Concrete"))
            .unwrap_or(false);
        let has_abstract = rest.contains("Abstract");

        Evidence {
            has_concrete,
            has_abstract,
        }
    }
}
