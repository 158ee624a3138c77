use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use crate::core::suite::{builtin_suite, property_stats};
use crate::types::config::config;
use crate::types::{AppResult, BenchTarget};

pub enum PrintCommand {
    Suite(String),
    Config(String),
}

pub async fn execute_print(command: PrintCommand) -> AppResult<()> {
    match command {
        PrintCommand::Suite(format) => print_suite(format),
        PrintCommand::Config(format) => print_config(format),
    }
}

#[derive(Serialize)]
struct SuiteReport {
    targets: Vec<BenchTarget>,
    property_stats: BTreeMap<String, usize>,
}

fn print_suite(format: String) -> AppResult<()> {
    let targets = builtin_suite();
    // BTreeMap keeps the listing stable across runs
    let stats: BTreeMap<String, usize> = property_stats(&targets).into_iter().collect();

    if format == "json" {
        let report = SuiteReport {
            targets,
            property_stats: stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!("Benchmark suite ({} targets):", targets.len());
    for target in &targets {
        info!(
            "  {:<14} {:<18} n={}",
            target.file, target.property, target.iterations
        );
    }

    info!("");
    info!("Property occurrences:");
    for (property, count) in &stats {
        info!("  {property:<18} {count}");
    }

    Ok(())
}

fn print_config(format: String) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    // Table format
    info!("Effective Configuration:");
    info!("");
    info!("Global:");
    info!(
        "  projdir: {}",
        effective_config.projdir.as_deref().unwrap()
    );
    let list_dir = effective_config.list_dir.as_deref().unwrap();
    if list_dir.is_empty() {
        info!("  list_dir: (none)");
    } else {
        info!("  list_dir: {list_dir}");
    }

    info!("");
    info!("Log:");
    if let Some(log) = &effective_config.log {
        info!("  level: {}", log.level.as_deref().unwrap());
        match log.color {
            Some(true) => info!("  color: on"),
            Some(false) => info!("  color: off"),
            None => info!("  color: auto"),
        }
    }

    info!("");
    info!("Tool:");
    if let Some(tool) = &effective_config.tool {
        info!("  cmd: {}", tool.cmd.as_deref().unwrap());
        info!("  timeout: {}s", tool.timeout.unwrap());
    }

    Ok(())
}
