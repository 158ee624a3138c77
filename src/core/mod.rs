pub mod classify;
pub mod cli;
pub mod cmds;
pub mod logging;
pub mod main_shared;
pub mod report;
pub mod runner;
pub mod suite;
pub mod types;
