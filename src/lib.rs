pub mod core;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::classify::{Evidence, OutputClassifier, RefinementClassifier};
pub use core::main_shared::run_main;
pub use core::report;
pub use core::runner::{RunnerOptions, SuiteRunner};
pub use core::suite;
