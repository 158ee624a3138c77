use serde::Serialize;

/// One configured benchmark case: a source file, the property under test,
/// and the iteration count forwarded to the checker via `--n`.
///
/// Targets are defined once, in order, and never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchTarget {
    pub file: String,
    pub property: String,
    pub iterations: u32,
}

impl BenchTarget {
    pub fn new(file: &str, property: &str, iterations: u32) -> Self {
        Self {
            file: file.to_string(),
            property: property.to_string(),
            iterations,
        }
    }

    /// Returns a `file:property` label suitable for logging
    pub fn display(&self) -> String {
        format!("{}:{}", self.file, self.property)
    }

    /// A target is runnable if both names are non-empty and the iteration
    /// count is positive
    pub fn validate(&self) -> Result<(), String> {
        if self.file.trim().is_empty() {
            return Err("target has an empty file name".to_string());
        }
        if self.property.trim().is_empty() {
            return Err(format!("target {} has an empty property name", self.file));
        }
        if self.iterations == 0 {
            return Err(format!(
                "target {} has a zero iteration count",
                self.display()
            ));
        }
        Ok(())
    }
}
